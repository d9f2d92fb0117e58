pub mod auth;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod session;
pub mod state;
pub mod templates;

#[cfg(test)]
pub mod test_helpers;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{web, App};
use tracing_actix_web::TracingLogger;

pub use handlers::{configure, not_found};

/// Largest urlencoded form body accepted. Snippet content has no length
/// check of its own.
pub const MAX_FORM_BYTES: usize = 10 << 20;
pub use state::AppState;

/// The application with its full middleware stack. Panic recovery sits
/// outermost, then request logging, then the security headers.
pub fn build_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::FormConfig::default().limit(MAX_FORM_BYTES))
        .wrap(middleware::secure_headers())
        .wrap(TracingLogger::default())
        .wrap(actix_web::middleware::from_fn(middleware::recover_panic))
        .configure(configure)
        .default_service(web::to(not_found))
}
