use data_access_objects::create_tables;
use sea_orm::*;

use crate::config::Config;

pub(super) async fn set_up_db(config: &Config) -> Result<DatabaseConnection, DbErr> {
    let mut opts = ConnectOptions::new(config.database_url.clone());
    opts.sqlx_logging(true)
        .sqlx_logging_level(tracing::log::LevelFilter::Debug);

    let db = Database::connect(opts).await?;
    tracing::info!("DB connected");

    if config.create_schema {
        create_tables(&db).await?;
        tracing::info!("schema ready");
    }
    Ok(db)
}
