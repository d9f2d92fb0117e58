use std::collections::HashMap;
use std::sync::LazyLock;

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::{header::HeaderMap, StatusCode};
use actix_web::test::{self, TestRequest};
use chrono::{Duration, Utc};
use data_access_objects::create_tables;
use models::snippets;
use regex::Regex;
use repositories::{SessionRepository, UserRepository};
use sea_orm::*;
use services::SessionKeys;

use crate::state::AppState;

pub const SEEDED_NAME: &str = "Ahmad Yogi";
pub const SEEDED_EMAIL: &str = "ayogi@snippetbox.sh";
pub const SEEDED_PASSWORD: &str = "12345678";

static CSRF_RX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"<input type="hidden" name="csrf_token" value="(.+?)">"#).unwrap());

/// Application state over a fresh in-memory database holding one user and
/// one snippet, both with id 1.
pub async fn test_state() -> AppState {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1).sqlx_logging(false);

    let db = Database::connect(opts)
        .await
        .expect("Failed to connect to test database");
    create_tables(&db).await.expect("Failed to create tables");

    UserRepository::insert(&db, SEEDED_NAME.to_string(), SEEDED_EMAIL.to_string(), SEEDED_PASSWORD)
        .await
        .expect("Failed to seed user");

    let created = Utc::now().naive_utc();
    snippets::ActiveModel {
        title: ActiveValue::Set("An old silent pond".to_string()),
        content: ActiveValue::Set("This is a content inside the mock snippet.".to_string()),
        created: ActiveValue::Set(created),
        expires: ActiveValue::Set(created + Duration::days(365)),
        ..Default::default()
    }
    .insert(&db)
    .await
    .expect("Failed to seed snippet");

    AppState::new(db, SessionKeys::new("test-secret", 3600), false)
}

pub fn seeded_user_id() -> i32 {
    1
}

/// A signed token backed by a fresh server-side session for `user_id`.
pub async fn session_token(state: &AppState, user_id: i32) -> String {
    let session_id = SessionRepository::create(&state.db, user_id, 3600)
        .await
        .expect("Failed to create session");
    state
        .sessions
        .issue(user_id, &session_id)
        .expect("Failed to sign session token")
}

pub async fn test_app() -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    crate::build_app(test_state().await)
}

pub fn extract_csrf_token(body: &str) -> String {
    CSRF_RX
        .captures(body)
        .map(|c| c[1].to_string())
        .expect("no csrf token in page")
}

/// A response reduced to what the tests look at.
#[derive(Debug)]
pub struct Page {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// Remembers cookies across requests the way a browser would.
#[derive(Default)]
pub struct Browser {
    cookies: HashMap<String, String>,
}

impl Browser {
    pub fn has_cookie(&self, name: &str) -> bool {
        self.cookies.contains_key(name)
    }

    pub fn cookie(&self, name: &str) -> Option<String> {
        self.cookies.get(name).cloned()
    }

    pub fn set_cookie(&mut self, name: &str, value: String) {
        self.cookies.insert(name.to_string(), value);
    }

    fn with_cookies(&self, mut req: TestRequest) -> TestRequest {
        for (name, value) in &self.cookies {
            req = req.cookie(Cookie::new(name.clone(), value.clone()));
        }
        req
    }

    pub fn get(&self, path: &str) -> TestRequest {
        self.with_cookies(TestRequest::get().uri(path))
    }

    pub fn post_form(&self, path: &str, form: &[(&str, &str)]) -> TestRequest {
        self.with_cookies(TestRequest::post().uri(path).set_form(form))
    }

    pub async fn send<S, B>(&mut self, app: &S, req: TestRequest) -> Page
    where
        S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
        B: MessageBody,
    {
        let res = test::call_service(app, req.to_request()).await;
        for cookie in res.response().cookies() {
            if cookie.value().is_empty() {
                self.cookies.remove(cookie.name());
            } else {
                self.cookies
                    .insert(cookie.name().to_string(), cookie.value().to_string());
            }
        }

        let status = res.status();
        let headers = res.headers().clone();
        let body = test::read_body(res).await;
        Page {
            status,
            headers,
            body: String::from_utf8_lossy(&body).into_owned(),
        }
    }
}

/// Logs in as the seeded user and returns the login response.
pub async fn log_in<S, B>(app: &S, browser: &mut Browser) -> Page
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let page = browser.send(app, browser.get("/user/login")).await;
    let csrf_token = extract_csrf_token(&page.body);
    let form = [
        ("email", SEEDED_EMAIL),
        ("password", SEEDED_PASSWORD),
        ("csrf_token", csrf_token.as_str()),
    ];
    browser
        .send(app, browser.post_form("/user/login", &form))
        .await
}
