use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Username)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Users::Email).string().not_null().unique_key())
                    .col(ColumnDef::new(Users::PasswordHash).string().not_null())
                    .col(
                        ColumnDef::new(Users::FirstName)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Users::LastName)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Users::IsStaff)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Users::DateJoined).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create auth_tokens table
        manager
            .create_table(
                Table::create()
                    .table(AuthTokens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AuthTokens::Key)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AuthTokens::UserId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(AuthTokens::CreatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-auth_tokens-user_id")
                            .from(AuthTokens::Table, AuthTokens::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create study_centers table
        manager
            .create_table(
                Table::create()
                    .table(StudyCenters::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudyCenters::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StudyCenters::State).string().not_null())
                    .col(ColumnDef::new(StudyCenters::City).string().not_null())
                    .col(ColumnDef::new(StudyCenters::Location).string().not_null())
                    .col(ColumnDef::new(StudyCenters::Address).text().not_null())
                    .col(ColumnDef::new(StudyCenters::Pin).integer())
                    .col(ColumnDef::new(StudyCenters::Geo).string())
                    .to_owned(),
            )
            .await?;

        // Create study_centre_pocs table
        manager
            .create_table(
                Table::create()
                    .table(StudyCentrePocs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(StudyCentrePocs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(StudyCentrePocs::CentreId).integer().not_null())
                    .col(ColumnDef::new(StudyCentrePocs::Person).string().not_null())
                    .col(ColumnDef::new(StudyCentrePocs::Number).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-study_centre_pocs-centre_id")
                            .from(StudyCentrePocs::Table, StudyCentrePocs::CentreId)
                            .to(StudyCenters::Table, StudyCenters::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create batch_info table
        manager
            .create_table(
                Table::create()
                    .table(BatchInfo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BatchInfo::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(BatchInfo::UserId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(BatchInfo::EpgpBatch)
                            .integer()
                            .not_null()
                            .default(17),
                    )
                    .col(
                        ColumnDef::new(BatchInfo::EpgpGroup)
                            .string()
                            .not_null()
                            .default("A"),
                    )
                    .col(ColumnDef::new(BatchInfo::RollNumber).string())
                    .col(ColumnDef::new(BatchInfo::HomeState).string())
                    .col(ColumnDef::new(BatchInfo::HomeTown).string())
                    .col(ColumnDef::new(BatchInfo::CurrentCity).string())
                    .col(ColumnDef::new(BatchInfo::StudyCenterId).integer())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-batch_info-user_id")
                            .from(BatchInfo::Table, BatchInfo::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-batch_info-study_center_id")
                            .from(BatchInfo::Table, BatchInfo::StudyCenterId)
                            .to(StudyCenters::Table, StudyCenters::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create social_links table
        manager
            .create_table(
                Table::create()
                    .table(SocialLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SocialLinks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SocialLinks::UserId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(SocialLinks::PersonalEmail).string())
                    .col(ColumnDef::new(SocialLinks::Phone).string())
                    .col(ColumnDef::new(SocialLinks::Whatsapp).string())
                    .col(ColumnDef::new(SocialLinks::Telegram).string())
                    .col(ColumnDef::new(SocialLinks::Linkedin).string())
                    .col(ColumnDef::new(SocialLinks::Facebook).string())
                    .col(ColumnDef::new(SocialLinks::Twitter).string())
                    .col(ColumnDef::new(SocialLinks::Instagram).string())
                    .col(ColumnDef::new(SocialLinks::Github).string())
                    .col(ColumnDef::new(SocialLinks::Website).string())
                    .col(ColumnDef::new(SocialLinks::Youtube).string())
                    .col(ColumnDef::new(SocialLinks::Other).text())
                    .col(ColumnDef::new(SocialLinks::Bio).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-social_links-user_id")
                            .from(SocialLinks::Table, SocialLinks::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create employment table
        manager
            .create_table(
                Table::create()
                    .table(Employment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Employment::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Employment::UserId).integer().not_null())
                    .col(ColumnDef::new(Employment::Employer).string().not_null())
                    .col(ColumnDef::new(Employment::City).string())
                    .col(ColumnDef::new(Employment::Country).string())
                    .col(ColumnDef::new(Employment::StartDate).date())
                    .col(ColumnDef::new(Employment::EndDate).date())
                    .col(ColumnDef::new(Employment::Position).string())
                    .col(ColumnDef::new(Employment::Description).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-employment-user_id")
                            .from(Employment::Table, Employment::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create professors table
        manager
            .create_table(
                Table::create()
                    .table(Professors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Professors::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Professors::Salutation).string())
                    .col(ColumnDef::new(Professors::Name).string().not_null())
                    .col(ColumnDef::new(Professors::Area).string())
                    .col(ColumnDef::new(Professors::Email).string())
                    .col(ColumnDef::new(Professors::Phone).string())
                    .to_owned(),
            )
            .await?;

        // Create electives table
        manager
            .create_table(
                Table::create()
                    .table(Electives::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Electives::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Electives::Area).string())
                    .col(ColumnDef::new(Electives::CourseCode).string().not_null())
                    .col(ColumnDef::new(Electives::CourseName).string().not_null())
                    .col(ColumnDef::new(Electives::InstructorId).integer())
                    .col(ColumnDef::new(Electives::Credits).double())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-electives-instructor_id")
                            .from(Electives::Table, Electives::InstructorId)
                            .to(Professors::Table, Professors::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create elective_offerings table
        manager
            .create_table(
                Table::create()
                    .table(ElectiveOfferings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ElectiveOfferings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ElectiveOfferings::EpgpBatch)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ElectiveOfferings::Term).integer().not_null())
                    .col(
                        ColumnDef::new(ElectiveOfferings::CourseId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ElectiveOfferings::Track).integer())
                    .col(ColumnDef::new(ElectiveOfferings::Section).string())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-elective_offerings-course_id")
                            .from(ElectiveOfferings::Table, ElectiveOfferings::CourseId)
                            .to(Electives::Table, Electives::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create elective_enrollments table
        manager
            .create_table(
                Table::create()
                    .table(ElectiveEnrollments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ElectiveEnrollments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ElectiveEnrollments::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ElectiveEnrollments::OfferingId)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-elective_enrollments-user_id")
                            .from(ElectiveEnrollments::Table, ElectiveEnrollments::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-elective_enrollments-offering_id")
                            .from(ElectiveEnrollments::Table, ElectiveEnrollments::OfferingId)
                            .to(ElectiveOfferings::Table, ElectiveOfferings::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ElectiveEnrollments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ElectiveOfferings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Electives::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Professors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Employment::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SocialLinks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(BatchInfo::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudyCentrePocs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(StudyCenters::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AuthTokens::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    FirstName,
    LastName,
    IsStaff,
    DateJoined,
}

#[derive(DeriveIden)]
enum AuthTokens {
    Table,
    Key,
    UserId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum BatchInfo {
    Table,
    Id,
    UserId,
    EpgpBatch,
    EpgpGroup,
    RollNumber,
    HomeState,
    HomeTown,
    CurrentCity,
    StudyCenterId,
}

#[derive(DeriveIden)]
enum SocialLinks {
    Table,
    Id,
    UserId,
    PersonalEmail,
    Phone,
    Whatsapp,
    Telegram,
    Linkedin,
    Facebook,
    Twitter,
    Instagram,
    Github,
    Website,
    Youtube,
    Other,
    Bio,
}

#[derive(DeriveIden)]
enum Employment {
    Table,
    Id,
    UserId,
    Employer,
    City,
    Country,
    StartDate,
    EndDate,
    Position,
    Description,
}

#[derive(DeriveIden)]
enum Professors {
    Table,
    Id,
    Salutation,
    Name,
    Area,
    Email,
    Phone,
}

#[derive(DeriveIden)]
enum Electives {
    Table,
    Id,
    Area,
    CourseCode,
    CourseName,
    InstructorId,
    Credits,
}

#[derive(DeriveIden)]
enum ElectiveOfferings {
    Table,
    Id,
    EpgpBatch,
    Term,
    CourseId,
    Track,
    Section,
}

#[derive(DeriveIden)]
enum ElectiveEnrollments {
    Table,
    Id,
    UserId,
    OfferingId,
}

#[derive(DeriveIden)]
enum StudyCenters {
    Table,
    Id,
    State,
    City,
    Location,
    Address,
    Pin,
    Geo,
}

#[derive(DeriveIden)]
enum StudyCentrePocs {
    Table,
    Id,
    CentreId,
    Person,
    Number,
}
