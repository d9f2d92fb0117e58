use models::prelude::Users;
use models::users::{ActiveModel, Column, Entity, Model};
use sea_orm::*;

pub struct UserDao;

impl UserDao {
    pub async fn insert(db: &DatabaseConnection, model: ActiveModel) -> Result<i32, DbErr> {
        let res = Users::insert(model).exec(db).await?;
        Ok(res.last_insert_id)
    }

    pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, DbErr> {
        Users::find_by_id(id).one(db).await
    }

    pub async fn find_by_email(
        db: &DatabaseConnection,
        email: &str,
    ) -> Result<Option<Model>, DbErr> {
        Users::find().filter(Column::Email.eq(email)).one(db).await
    }

    pub async fn count_by_id(db: &DatabaseConnection, id: i32) -> Result<u64, DbErr> {
        Users::find().filter(Column::Id.eq(id)).count(db).await
    }

    pub async fn update(db: &DatabaseConnection, model: ActiveModel) -> Result<Model, DbErr> {
        Entity::update(model).exec(db).await
    }
}
