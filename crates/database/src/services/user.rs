use crate::entities::{auth_token, batch_info, social_links, user};
use crate::error::{FieldErrors, ServiceError};
use bcrypt::{DEFAULT_COST, hash, verify};
use chrono::Utc;
use rand::{Rng, distributions::Alphanumeric};
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Default, Deserialize)]
pub struct UserPatch {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// A user together with its lazily created profile rows.
pub type UserProfile = (
    user::Model,
    Option<batch_info::Model>,
    Option<social_links::Model>,
);

pub struct UserService;

impl UserService {
    const TOKEN_LEN: usize = 40;

    pub async fn list(db: &DatabaseConnection) -> Result<Vec<user::Model>, ServiceError> {
        Ok(user::Entity::find()
            .order_by_asc(user::Column::Id)
            .all(db)
            .await?)
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> Result<user::Model, ServiceError> {
        user::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found(format!("User with id {id} does not exist")))
    }

    /// User detail with embedded batch info and social links. The two
    /// profile lookups are independent and run concurrently.
    pub async fn detail(db: &DatabaseConnection, id: i32) -> Result<UserProfile, ServiceError> {
        let target = Self::get(db, id).await?;
        let (batch, social) = futures::try_join!(
            batch_info::Entity::find()
                .filter(batch_info::Column::UserId.eq(id))
                .one(db),
            social_links::Entity::find()
                .filter(social_links::Column::UserId.eq(id))
                .one(db)
        )?;
        Ok((target, batch, social))
    }

    pub async fn create(
        db: &DatabaseConnection,
        new: NewUser,
    ) -> Result<user::Model, ServiceError> {
        let mut fields = FieldErrors::new();
        if new.username.trim().is_empty() {
            fields.insert("username".into(), "this field is required".into());
        }
        if new.email.trim().is_empty() || !new.email.contains('@') {
            fields.insert("email".into(), "a valid email address is required".into());
        }
        if new.password.is_empty() {
            fields.insert("password".into(), "this field is required".into());
        }
        if !fields.is_empty() {
            return Err(ServiceError::Validation(fields));
        }

        let username_taken = user::Entity::find()
            .filter(user::Column::Username.eq(&new.username))
            .one(db)
            .await?
            .is_some();
        if username_taken {
            return Err(ServiceError::conflict(format!(
                "User with username {} already exists",
                new.username
            )));
        }

        let email_taken = user::Entity::find()
            .filter(user::Column::Email.eq(&new.email))
            .one(db)
            .await?
            .is_some();
        if email_taken {
            return Err(ServiceError::conflict(format!(
                "User with email {} already exists",
                new.email
            )));
        }

        let password_hash = hash(&new.password, DEFAULT_COST)?;
        let created = user::ActiveModel {
            username: Set(new.username),
            email: Set(new.email),
            password_hash: Set(password_hash),
            first_name: Set(new.first_name),
            last_name: Set(new.last_name),
            is_staff: Set(false),
            date_joined: Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(db)
        .await;

        created.map_err(|err| {
            if ServiceError::is_unique_violation(&err) {
                ServiceError::conflict("User with that username or email already exists")
            } else {
                err.into()
            }
        })
    }

    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        patch: UserPatch,
    ) -> Result<user::Model, ServiceError> {
        let target = Self::get(db, id).await?;

        if let Some(email) = patch.email.as_deref()
            && email != target.email
        {
            let taken = user::Entity::find()
                .filter(user::Column::Email.eq(email))
                .one(db)
                .await?
                .is_some();
            if taken {
                return Err(ServiceError::conflict(format!(
                    "User with email {email} already exists"
                )));
            }
        }

        let mut active: user::ActiveModel = target.into();
        if let Some(email) = patch.email {
            active.email = Set(email);
        }
        if let Some(first_name) = patch.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = patch.last_name {
            active.last_name = Set(last_name);
        }
        Ok(active.update(db).await?)
    }

    pub async fn change_password(
        db: &DatabaseConnection,
        caller: &user::Model,
        old_password: &str,
        new_password: &str,
    ) -> Result<(), ServiceError> {
        if new_password.is_empty() {
            return Err(ServiceError::field("new_password", "this field is required"));
        }
        if !verify(old_password, &caller.password_hash)? {
            return Err(ServiceError::field("old_password", "Old password is incorrect"));
        }

        let mut active: user::ActiveModel = caller.clone().into();
        active.password_hash = Set(hash(new_password, DEFAULT_COST)?);
        active.update(db).await?;
        Ok(())
    }

    /// Resolves an opaque API token to its owner. `None` means the token is
    /// unknown; the caller turns that into a 401.
    pub async fn find_by_token(
        db: &DatabaseConnection,
        key: &str,
    ) -> Result<Option<user::Model>, ServiceError> {
        let found = auth_token::Entity::find_by_id(key.to_string())
            .find_also_related(user::Entity)
            .one(db)
            .await?;
        Ok(found.and_then(|(_, owner)| owner))
    }

    /// Verifies credentials and returns the caller's token, issuing one on
    /// first login.
    pub async fn obtain_token(
        db: &DatabaseConnection,
        username: &str,
        password: &str,
    ) -> Result<auth_token::Model, ServiceError> {
        let bad_credentials =
            || ServiceError::field("non_field_errors", "Unable to log in with provided credentials");

        let caller = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(db)
            .await?
            .ok_or_else(bad_credentials)?;
        if !verify(password, &caller.password_hash)? {
            return Err(bad_credentials());
        }

        let existing = auth_token::Entity::find()
            .filter(auth_token::Column::UserId.eq(caller.id))
            .one(db)
            .await?;
        if let Some(token) = existing {
            return Ok(token);
        }

        let key: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::TOKEN_LEN)
            .map(char::from)
            .collect();

        Ok(auth_token::ActiveModel {
            key: Set(key),
            user_id: Set(caller.id),
            created_at: Set(Utc::now().naive_utc()),
        }
        .insert(db)
        .await?)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn sample_user(id: i32, username: &str, email: &str) -> user::Model {
        user::Model {
            id,
            username: username.to_string(),
            email: email.to_string(),
            password_hash: hash("pass1234", 4).unwrap(),
            first_name: String::new(),
            last_name: String::new(),
            is_staff: false,
            date_joined: Utc::now().naive_utc(),
        }
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_username() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![sample_user(1, "asha", "asha@example.com")]])
            .into_connection();

        let result = UserService::create(
            &db,
            NewUser {
                username: "asha".into(),
                email: "other@example.com".into(),
                password: "pass1234".into(),
                first_name: String::new(),
                last_name: String::new(),
            },
        )
        .await;

        match result {
            Err(ServiceError::Conflict(message)) => {
                assert!(message.contains("asha"));
            }
            other => panic!("expected conflict, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_reports_missing_fields() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let result = UserService::create(
            &db,
            NewUser {
                username: String::new(),
                email: "not-an-email".into(),
                password: String::new(),
                first_name: String::new(),
                last_name: String::new(),
            },
        )
        .await;

        match result {
            Err(ServiceError::Validation(fields)) => {
                assert!(fields.contains_key("username"));
                assert!(fields.contains_key("email"));
                assert!(fields.contains_key("password"));
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_inserts_when_unique() {
        let inserted = sample_user(7, "ravi", "ravi@example.com");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // username probe, email probe, then the insert returning row
            .append_query_results([Vec::<user::Model>::new(), Vec::new()])
            .append_query_results([vec![inserted.clone()]])
            .append_exec_results([MockExecResult {
                last_insert_id: 7,
                rows_affected: 1,
            }])
            .into_connection();

        let created = UserService::create(
            &db,
            NewUser {
                username: "ravi".into(),
                email: "ravi@example.com".into(),
                password: "pass1234".into(),
                first_name: String::new(),
                last_name: String::new(),
            },
        )
        .await
        .unwrap();

        assert_eq!(created.username, "ravi");
        assert_eq!(created.email, "ravi@example.com");
    }

    #[tokio::test]
    async fn test_change_password_rejects_wrong_old_password() {
        let caller = sample_user(1, "asha", "asha@example.com");
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let result = UserService::change_password(&db, &caller, "wrong", "newpass").await;
        match result {
            Err(ServiceError::Validation(fields)) => {
                assert_eq!(
                    fields.get("old_password").map(String::as_str),
                    Some("Old password is incorrect")
                );
            }
            other => panic!("expected validation failure, got {other:?}"),
        }
    }
}
