use actix_web::http::{header, StatusCode};
use actix_web::{HttpResponse, ResponseError};
use repositories::ModelError;
use services::TokenError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("not found")]
    NotFound,

    #[error("bad request: {0}")]
    BadRequest(String),

    /// The route needs a logged-in user and there is none.
    #[error("login required")]
    LoginRequired,

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("{0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound | AppError::Model(ModelError::NoRecord) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::LoginRequired => StatusCode::SEE_OTHER,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            AppError::LoginRequired => {
                return HttpResponse::SeeOther()
                    .insert_header((header::LOCATION, "/user/login"))
                    .finish();
            }
            AppError::BadRequest(reason) => {
                tracing::info!(reason = %reason, "rejected request");
            }
            _ if status.is_server_error() => {
                tracing::error!(error = %self, "internal server error");
            }
            _ => {}
        }

        HttpResponse::build(status)
            .content_type("text/plain; charset=utf-8")
            .body(status.canonical_reason().unwrap_or("Error"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::Model(ModelError::NoRecord).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::BadRequest("csrf".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Model(ModelError::DuplicateEmail).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Internal("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_login_required_redirects() {
        let res = AppError::LoginRequired.error_response();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/user/login");
    }
}
