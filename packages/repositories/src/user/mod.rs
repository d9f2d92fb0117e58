use chrono::Utc;
use data_access_objects::UserDao;
use models::users::{ActiveModel, Model};
use sea_orm::*;
use services::{hash_password, verify_password};

use crate::error::ModelError;

pub struct UserRepository;

/// Emails are stored and looked up lowercased, so addresses differing only in
/// case belong to one account.
fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}

impl UserRepository {
    /// Creates a user, hashing the plaintext password first.
    pub async fn insert(
        db: &DatabaseConnection,
        name: String,
        email: String,
        password: &str,
    ) -> Result<i32, ModelError> {
        let model = ActiveModel {
            name: ActiveValue::set(name),
            email: ActiveValue::set(normalize_email(&email)),
            hashed_password: ActiveValue::set(hash_password(password)?),
            created: ActiveValue::set(Utc::now().naive_utc()),
            ..Default::default()
        };

        match UserDao::insert(db, model).await {
            Ok(id) => Ok(id),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(ModelError::DuplicateEmail)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Returns the id of the user with these credentials.
    pub async fn authenticate(
        db: &DatabaseConnection,
        email: &str,
        password: &str,
    ) -> Result<i32, ModelError> {
        let user = UserDao::find_by_email(db, &normalize_email(email))
            .await?
            .ok_or(ModelError::InvalidCredentials)?;

        if !verify_password(password, &user.hashed_password)? {
            return Err(ModelError::InvalidCredentials);
        }
        Ok(user.id)
    }

    pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Model, ModelError> {
        UserDao::find_by_id(db, id).await?.ok_or(ModelError::NoRecord)
    }

    /// Replaces the password after checking `current_password` against the stored hash.
    pub async fn update_password(
        db: &DatabaseConnection,
        id: i32,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), ModelError> {
        let user = UserDao::find_by_id(db, id).await?.ok_or(ModelError::NoRecord)?;

        if !verify_password(current_password, &user.hashed_password)? {
            return Err(ModelError::InvalidCredentials);
        }

        let model = ActiveModel {
            id: ActiveValue::Unchanged(id),
            hashed_password: ActiveValue::set(hash_password(new_password)?),
            ..Default::default()
        };
        UserDao::update(db, model).await?;
        tracing::debug!(user_id = id, "password hash replaced");
        Ok(())
    }

    pub async fn exists(db: &DatabaseConnection, id: i32) -> Result<bool, ModelError> {
        Ok(UserDao::count_by_id(db, id).await? > 0)
    }
}
