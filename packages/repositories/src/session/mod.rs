use chrono::{Duration, Utc};
use data_access_objects::SessionDao;
use models::sessions::ActiveModel;
use sea_orm::*;
use uuid::Uuid;

use crate::error::ModelError;

/// Server-side record of every login. A session token is honoured only while
/// its row exists and has not expired.
pub struct SessionRepository;

impl SessionRepository {
    /// Opens a session for `user_id` and returns its id.
    pub async fn create(
        db: &DatabaseConnection,
        user_id: i32,
        lifetime_seconds: i64,
    ) -> Result<String, ModelError> {
        let now = Utc::now().naive_utc();
        let model = ActiveModel {
            id: ActiveValue::set(Uuid::new_v4().simple().to_string()),
            user_id: ActiveValue::set(user_id),
            created: ActiveValue::set(now),
            expires: ActiveValue::set(now + Duration::seconds(lifetime_seconds)),
        };

        let session = SessionDao::insert(db, model).await?;
        Ok(session.id)
    }

    /// True when the session exists, has not expired and belongs to `user_id`.
    pub async fn is_live(
        db: &DatabaseConnection,
        id: &str,
        user_id: i32,
    ) -> Result<bool, ModelError> {
        let session = SessionDao::find_live(db, id, Utc::now().naive_utc()).await?;
        Ok(session.is_some_and(|s| s.user_id == user_id))
    }

    /// Ends one session. Revoking an unknown id is not an error.
    pub async fn revoke(db: &DatabaseConnection, id: &str) -> Result<(), ModelError> {
        SessionDao::delete_by_id(db, id).await?;
        Ok(())
    }

    pub async fn purge_expired(db: &DatabaseConnection) -> Result<u64, ModelError> {
        let removed = SessionDao::delete_expired(db, Utc::now().naive_utc()).await?;
        if removed > 0 {
            tracing::debug!(removed, "expired sessions purged");
        }
        Ok(removed)
    }
}
