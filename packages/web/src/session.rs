//! Cookie-backed session state: the signed login token, one-shot flash
//! messages and the CSRF token.

use actix_web::cookie::{time::Duration, Cookie, SameSite};
use actix_web::HttpRequest;
use uuid::Uuid;

use crate::errors::AppError;

pub const SESSION_COOKIE: &str = "session";
pub const FLASH_COOKIE: &str = "flash";
pub const CSRF_COOKIE: &str = "csrf_token";

/// Name of the hidden form input carrying the CSRF token.
pub const CSRF_FIELD: &str = "csrf_token";

fn cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build(name, value)
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .finish()
}

pub fn session_cookie(token: String, lifetime_seconds: i64, secure: bool) -> Cookie<'static> {
    let mut c = cookie(SESSION_COOKIE, token, secure);
    c.set_max_age(Duration::seconds(lifetime_seconds));
    c
}

/// A cookie that tells the browser to drop `name`.
pub fn removal_cookie(name: &'static str) -> Cookie<'static> {
    let mut c = Cookie::build(name, "").path("/").finish();
    c.make_removal();
    c
}

/// Messages shown once on the page following a redirect. The cookie carries
/// the key, never the text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flash {
    SnippetCreated,
    SignedUp,
    LoggedOut,
    PasswordUpdated,
}

impl Flash {
    pub fn key(self) -> &'static str {
        match self {
            Flash::SnippetCreated => "snippet-created",
            Flash::SignedUp => "signed-up",
            Flash::LoggedOut => "logged-out",
            Flash::PasswordUpdated => "password-updated",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "snippet-created" => Some(Flash::SnippetCreated),
            "signed-up" => Some(Flash::SignedUp),
            "logged-out" => Some(Flash::LoggedOut),
            "password-updated" => Some(Flash::PasswordUpdated),
            _ => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Flash::SnippetCreated => "Snippet successfully created!",
            Flash::SignedUp => "Your signup was successful. Please log in.",
            Flash::LoggedOut => "You've been logged out successfully!",
            Flash::PasswordUpdated => "Your password has been updated!",
        }
    }
}

pub fn flash_cookie(flash: Flash, secure: bool) -> Cookie<'static> {
    cookie(FLASH_COOKIE, flash.key().to_string(), secure)
}

pub fn read_flash(req: &HttpRequest) -> Option<Flash> {
    req.cookie(FLASH_COOKIE)
        .and_then(|c| Flash::from_key(c.value()))
}

pub struct CsrfToken {
    pub value: String,
    /// Minted for this response; the caller must set the cookie.
    pub fresh: bool,
}

/// The visitor's CSRF token, or a new one if they have none yet.
pub fn csrf_token(req: &HttpRequest) -> CsrfToken {
    match req.cookie(CSRF_COOKIE) {
        Some(c) if !c.value().is_empty() => CsrfToken {
            value: c.value().to_string(),
            fresh: false,
        },
        _ => CsrfToken {
            value: Uuid::new_v4().simple().to_string(),
            fresh: true,
        },
    }
}

pub fn csrf_cookie(token: &str, secure: bool) -> Cookie<'static> {
    cookie(CSRF_COOKIE, token.to_string(), secure)
}

/// Rejects a state-changing request whose submitted token does not match the cookie.
pub fn verify_csrf(req: &HttpRequest, submitted: &str) -> Result<(), AppError> {
    match req.cookie(CSRF_COOKIE) {
        Some(c) if !submitted.is_empty() && c.value() == submitted => Ok(()),
        Some(_) => Err(AppError::BadRequest("CSRF token mismatch".to_string())),
        None => Err(AppError::BadRequest("CSRF cookie missing".to_string())),
    }
}
