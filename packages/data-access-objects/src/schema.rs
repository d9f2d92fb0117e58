use models::prelude::{Sessions, Snippets, Users};
use sea_orm::*;

/// Creates the `snippets`, `users` and `sessions` tables when they are missing.
pub async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut statements = [
        schema.create_table_from_entity(Snippets),
        schema.create_table_from_entity(Users),
        schema.create_table_from_entity(Sessions),
    ];
    for statement in statements.iter_mut() {
        statement.if_not_exists();
        db.execute(backend.build(&*statement)).await?;
    }

    Ok(())
}
