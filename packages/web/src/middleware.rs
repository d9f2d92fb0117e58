use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::header;
use actix_web::middleware::{DefaultHeaders, Next};
use actix_web::error::InternalError;
use actix_web::{Error, HttpResponse};
use futures_util::FutureExt;
use std::panic::AssertUnwindSafe;

const CONTENT_SECURITY_POLICY: &str =
    "default-src 'self'; style-src 'self' fonts.googleapis.com; font-src fonts.gstatic.com";

/// Headers added to every response.
pub fn secure_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY))
        .add((header::REFERRER_POLICY, "origin-when-cross-origin"))
        .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .add((header::X_FRAME_OPTIONS, "deny"))
        .add((header::X_XSS_PROTECTION, "0"))
}

/// Turns a panicking handler into a 500 and closes the connection.
pub async fn recover_panic(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let path = req.path().to_string();

    match AssertUnwindSafe(next.call(req)).catch_unwind().await {
        Ok(res) => res.map(ServiceResponse::map_into_boxed_body),
        Err(panic) => {
            let message = if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else if let Some(s) = panic.downcast_ref::<&str>() {
                s.to_string()
            } else {
                "unknown panic".to_string()
            };
            tracing::error!(path = %path, error = %message, "handler panicked");

            // The request moved into the panicked service, so the 500 travels
            // as an error and the dispatcher renders it.
            let res = HttpResponse::InternalServerError()
                .force_close()
                .content_type("text/plain; charset=utf-8")
                .body("Internal Server Error");
            Err(InternalError::from_response(message, res).into())
        }
    }
}
