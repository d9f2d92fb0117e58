use chrono::{Duration, Utc};
use data_access_objects::SnippetDao;
use models::snippets::{ActiveModel, Model};
use sea_orm::*;

use crate::error::ModelError;

const LATEST_LIMIT: u64 = 10;

pub struct SnippetRepository;

impl SnippetRepository {
    /// Stores a snippet that expires `expires_days` days from now and returns its id.
    pub async fn insert(
        db: &DatabaseConnection,
        title: String,
        content: String,
        expires_days: i32,
    ) -> Result<i32, ModelError> {
        let created = Utc::now().naive_utc();
        let model = ActiveModel {
            title: ActiveValue::set(title),
            content: ActiveValue::set(content),
            created: ActiveValue::set(created),
            expires: ActiveValue::set(created + Duration::days(i64::from(expires_days))),
            ..Default::default()
        };

        let id = SnippetDao::insert(db, model).await?;
        Ok(id)
    }

    /// Fetches an unexpired snippet.
    pub async fn get(db: &DatabaseConnection, id: i32) -> Result<Model, ModelError> {
        SnippetDao::find_unexpired_by_id(db, id, Utc::now().naive_utc())
            .await?
            .ok_or(ModelError::NoRecord)
    }

    /// The ten most recently created unexpired snippets, newest first.
    pub async fn latest(db: &DatabaseConnection) -> Result<Vec<Model>, ModelError> {
        let snippets =
            SnippetDao::find_latest_unexpired(db, Utc::now().naive_utc(), LATEST_LIMIT).await?;
        Ok(snippets)
    }
}
