use models::prelude::Snippets;
use models::snippets::{ActiveModel, Column, Model};
use sea_orm::entity::prelude::DateTime;
use sea_orm::*;

pub struct SnippetDao;

impl SnippetDao {
    pub async fn insert(db: &DatabaseConnection, model: ActiveModel) -> Result<i32, DbErr> {
        let res = Snippets::insert(model).exec(db).await?;
        Ok(res.last_insert_id)
    }

    pub async fn find_unexpired_by_id(
        db: &DatabaseConnection,
        id: i32,
        now: DateTime,
    ) -> Result<Option<Model>, DbErr> {
        Snippets::find_by_id(id)
            .filter(Column::Expires.gt(now))
            .one(db)
            .await
    }

    pub async fn find_latest_unexpired(
        db: &DatabaseConnection,
        now: DateTime,
        limit: u64,
    ) -> Result<Vec<Model>, DbErr> {
        Snippets::find()
            .filter(Column::Expires.gt(now))
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(db)
            .await
    }
}
