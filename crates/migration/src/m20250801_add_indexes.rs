use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One enrollment row per (user, offering). This is the backstop for
        // the check-then-insert in the enrollment service.
        manager
            .create_index(
                Index::create()
                    .name("uq_elective_enrollments_user_offering")
                    .table(ElectiveEnrollments::Table)
                    .col(ElectiveEnrollments::UserId)
                    .col(ElectiveEnrollments::OfferingId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Offerings are listed per batch
        manager
            .create_index(
                Index::create()
                    .name("idx_elective_offerings_epgp_batch")
                    .table(ElectiveOfferings::Table)
                    .col(ElectiveOfferings::EpgpBatch)
                    .to_owned(),
            )
            .await?;

        // Roster queries join enrollments by offering
        manager
            .create_index(
                Index::create()
                    .name("idx_elective_enrollments_offering_id")
                    .table(ElectiveEnrollments::Table)
                    .col(ElectiveEnrollments::OfferingId)
                    .to_owned(),
            )
            .await?;

        // Catalog dedup key used by the seeder
        manager
            .create_index(
                Index::create()
                    .name("idx_electives_code_name")
                    .table(Electives::Table)
                    .col(Electives::CourseCode)
                    .col(Electives::CourseName)
                    .to_owned(),
            )
            .await?;

        // POC listing filters by centre
        manager
            .create_index(
                Index::create()
                    .name("idx_study_centre_pocs_centre_id")
                    .table(StudyCentrePocs::Table)
                    .col(StudyCentrePocs::CentreId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("uq_elective_enrollments_user_offering")
                    .table(ElectiveEnrollments::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_elective_offerings_epgp_batch")
                    .table(ElectiveOfferings::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_elective_enrollments_offering_id")
                    .table(ElectiveEnrollments::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_electives_code_name")
                    .table(Electives::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_study_centre_pocs_centre_id")
                    .table(StudyCentrePocs::Table)
                    .to_owned(),
            )
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Electives {
    Table,
    CourseCode,
    CourseName,
}

#[derive(DeriveIden)]
enum ElectiveOfferings {
    Table,
    EpgpBatch,
}

#[derive(DeriveIden)]
enum ElectiveEnrollments {
    Table,
    UserId,
    OfferingId,
}

#[derive(DeriveIden)]
enum StudyCentrePocs {
    Table,
    CentreId,
}
