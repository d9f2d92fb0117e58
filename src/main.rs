mod config;
mod setup;

use std::time::Duration;

use actix_web::HttpServer;
use config::Config;
use services::SessionKeys;
use setup::set_up_db;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use web::{build_app, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    // LOG_FORMAT=json switches to one JSON object per line.
    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v == "json");
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(json.then(|| tracing_subscriber::fmt::layer().json()))
        .with((!json).then(|| tracing_subscriber::fmt::layer()))
        .init();

    let config = Config::from_env().map_err(std::io::Error::other)?;

    let db = set_up_db(&config).await.map_err(std::io::Error::other)?;

    let state = AppState::new(
        db,
        SessionKeys::new(config.session_secret.clone(), config.session_lifetime_seconds),
        config.secure_cookies,
    );

    tracing::info!(addr = %config.addr, "starting server");

    HttpServer::new(move || build_app(state.clone()))
        .keep_alive(Duration::from_secs(60))
        .client_request_timeout(Duration::from_secs(5))
        .bind(&config.addr)?
        .run()
        .await
}
