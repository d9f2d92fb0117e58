use models::prelude::Sessions;
use models::sessions::{ActiveModel, Column, Model};
use sea_orm::entity::prelude::DateTime;
use sea_orm::*;

pub struct SessionDao;

impl SessionDao {
    pub async fn insert(db: &DatabaseConnection, model: ActiveModel) -> Result<Model, DbErr> {
        model.insert(db).await
    }

    pub async fn find_live(
        db: &DatabaseConnection,
        id: &str,
        now: DateTime,
    ) -> Result<Option<Model>, DbErr> {
        Sessions::find_by_id(id.to_string())
            .filter(Column::Expires.gt(now))
            .one(db)
            .await
    }

    pub async fn delete_by_id(db: &DatabaseConnection, id: &str) -> Result<u64, DbErr> {
        let res = Sessions::delete_by_id(id.to_string()).exec(db).await?;
        Ok(res.rows_affected)
    }

    pub async fn delete_expired(db: &DatabaseConnection, now: DateTime) -> Result<u64, DbErr> {
        let res = Sessions::delete_many()
            .filter(Column::Expires.lte(now))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }
}
