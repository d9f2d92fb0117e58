mod account;
mod snippets;
mod users;

use actix_web::http::{header, header::ContentType, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{Datelike, Utc};
use maud::Markup;

use crate::session::{self, Flash, FLASH_COOKIE};
use crate::state::AppState;
use crate::templates::{TemplateData, MAIN_CSS};

/// Renders a page, attaching a CSRF cookie when the visitor has none yet and
/// consuming any pending flash message.
pub(crate) fn render(
    req: &HttpRequest,
    state: &AppState,
    is_authenticated: bool,
    status: StatusCode,
    page: impl FnOnce(&TemplateData) -> Markup,
) -> HttpResponse {
    let csrf = session::csrf_token(req);
    let data = TemplateData {
        current_year: Utc::now().year(),
        flash: session::read_flash(req),
        is_authenticated,
        csrf_token: csrf.value,
    };

    let mut res = HttpResponse::build(status);
    if csrf.fresh {
        res.cookie(session::csrf_cookie(&data.csrf_token, state.secure_cookies));
    }
    if req.cookie(FLASH_COOKIE).is_some() {
        res.cookie(session::removal_cookie(FLASH_COOKIE));
    }
    res.content_type(ContentType::html()).body(page(&data).into_string())
}

pub(crate) fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Redirect that leaves a flash message for the next page.
pub(crate) fn see_other_with_flash(state: &AppState, location: &str, flash: Flash) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .cookie(session::flash_cookie(flash, state.secure_cookies))
        .finish()
}

async fn ping() -> &'static str {
    "OK"
}

async fn main_css() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(MAIN_CSS)
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/plain; charset=utf-8")
        .body("Not Found")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/ping", web::get().to(ping))
        .route("/static/css/main.css", web::get().to(main_css))
        .route("/", web::get().to(snippets::home))
        .route("/snippet/view/{id}", web::get().to(snippets::view))
        .route("/snippet/create", web::get().to(snippets::create))
        .route("/snippet/create", web::post().to(snippets::create_post))
        .route("/user/signup", web::get().to(users::signup))
        .route("/user/signup", web::post().to(users::signup_post))
        .route("/user/login", web::get().to(users::login))
        .route("/user/login", web::post().to(users::login_post))
        .route("/user/logout", web::post().to(users::logout_post))
        .route("/account/view", web::get().to(account::view))
        .route("/account/password/update", web::get().to(account::password_update))
        .route("/account/password/update", web::post().to(account::password_update_post));
}
