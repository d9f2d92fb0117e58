use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{FutureExt, LocalBoxFuture};
use repositories::{SessionRepository, UserRepository};

use crate::errors::AppError;
use crate::session::SESSION_COOKIE;
use crate::state::AppState;

/// Who is making the request, resolved from the session cookie.
///
/// A missing, forged or expired token, one whose session was revoked, or one
/// naming a deleted user, is treated as anonymous rather than as an error.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Authentication {
    pub user_id: Option<i32>,
    /// Server-side session backing the token, present whenever `user_id` is.
    pub session_id: Option<String>,
}

impl Authentication {
    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }
}

impl FromRequest for Authentication {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let state = req.app_data::<web::Data<AppState>>().cloned();
        let token = req.cookie(SESSION_COOKIE).map(|c| c.value().to_string());

        async move {
            let state = state.ok_or_else(|| AppError::Internal("application state missing".to_string()))?;
            let Some(token) = token else {
                return Ok(Authentication::default());
            };

            let claims = match state.sessions.verify(&token) {
                Ok(claims) => claims,
                Err(e) => {
                    tracing::debug!(error = %e, "ignoring session cookie");
                    return Ok(Authentication::default());
                }
            };

            if !SessionRepository::is_live(&state.db, &claims.session_id, claims.user_id).await? {
                tracing::debug!(user_id = claims.user_id, "session revoked or expired");
                return Ok(Authentication::default());
            }
            if !UserRepository::exists(&state.db, claims.user_id).await? {
                return Ok(Authentication::default());
            }

            Ok(Authentication {
                user_id: Some(claims.user_id),
                session_id: Some(claims.session_id),
            })
        }
        .boxed_local()
    }
}

/// Extractor for routes that need a logged-in user. Anonymous requests are
/// redirected to the login page.
#[derive(Clone, Copy, Debug)]
pub struct RequireUser(pub i32);

impl FromRequest for RequireUser {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let auth = Authentication::from_request(req, payload);

        async move {
            match auth.await?.user_id {
                Some(id) => Ok(RequireUser(id)),
                None => Err(AppError::LoginRequired),
            }
        }
        .boxed_local()
    }
}
