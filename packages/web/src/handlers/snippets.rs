use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use repositories::SnippetRepository;
use services::validation::InputValidator;

use super::{render, see_other_with_flash};
use crate::auth::{Authentication, RequireUser};
use crate::errors::AppError;
use crate::forms::SnippetCreateForm;
use crate::session::{verify_csrf, Flash};
use crate::state::AppState;
use crate::templates;

pub(super) async fn home(
    req: HttpRequest,
    state: web::Data<AppState>,
    auth: Authentication,
) -> Result<HttpResponse, AppError> {
    let snippets = SnippetRepository::latest(&state.db).await?;
    Ok(render(&req, &state, auth.is_authenticated(), StatusCode::OK, |data| {
        templates::snippets::home(data, &snippets)
    }))
}

pub(super) async fn view(
    req: HttpRequest,
    state: web::Data<AppState>,
    auth: Authentication,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = match id.parse::<i32>() {
        Ok(id) if id >= 1 => id,
        _ => return Err(AppError::NotFound),
    };

    let snippet = SnippetRepository::get(&state.db, id).await?;
    Ok(render(&req, &state, auth.is_authenticated(), StatusCode::OK, |data| {
        templates::snippets::view(data, &snippet)
    }))
}

pub(super) async fn create(
    req: HttpRequest,
    state: web::Data<AppState>,
    _user: RequireUser,
) -> HttpResponse {
    let form = SnippetCreateForm::blank();
    render(&req, &state, true, StatusCode::OK, |data| {
        templates::snippets::create(data, &form)
    })
}

pub(super) async fn create_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    _user: RequireUser,
    form: web::Form<SnippetCreateForm>,
) -> Result<HttpResponse, AppError> {
    let mut form = form.into_inner();
    verify_csrf(&req, &form.csrf_token)?;

    if !form.validate() {
        return Ok(render(&req, &state, true, StatusCode::UNPROCESSABLE_ENTITY, |data| {
            templates::snippets::create(data, &form)
        }));
    }

    let id = SnippetRepository::insert(&state.db, form.title, form.content, form.expires).await?;
    tracing::info!(snippet_id = id, "snippet created");

    Ok(see_other_with_flash(
        &state,
        &format!("/snippet/view/{id}"),
        Flash::SnippetCreated,
    ))
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::*;
    use actix_web::http::{header, StatusCode};
    use actix_web::test;

    #[actix_web::test]
    async fn test_snippet_view() {
        let app = test::init_service(test_app().await).await;
        let mut browser = Browser::default();

        let cases = [
            ("/snippet/view/1", StatusCode::OK),
            ("/snippet/view/1000", StatusCode::NOT_FOUND),
            ("/snippet/view/-1", StatusCode::NOT_FOUND),
            ("/snippet/view/1.45", StatusCode::NOT_FOUND),
            ("/snippet/view/abc", StatusCode::NOT_FOUND),
            ("/snippet/view/", StatusCode::NOT_FOUND),
        ];
        for (path, expected) in cases {
            let page = browser.send(&app, browser.get(path)).await;
            assert_eq!(page.status, expected, "{path}");
            if expected == StatusCode::OK {
                assert!(page.body.contains("This is a content inside the mock snippet."));
            }
        }
    }

    #[actix_web::test]
    async fn test_home_lists_seeded_snippet() {
        let app = test::init_service(test_app().await).await;
        let mut browser = Browser::default();

        let page = browser.send(&app, browser.get("/")).await;

        assert_eq!(page.status, StatusCode::OK);
        assert!(page.body.contains(r#"<a href="/snippet/view/1">"#));
    }

    #[actix_web::test]
    async fn test_snippet_create_unauthenticated() {
        let app = test::init_service(test_app().await).await;
        let mut browser = Browser::default();

        let page = browser.send(&app, browser.get("/snippet/create")).await;

        assert_eq!(page.status, StatusCode::SEE_OTHER);
        assert_eq!(page.headers.get(header::LOCATION).unwrap(), "/user/login");
    }

    #[actix_web::test]
    async fn test_snippet_create_authenticated() {
        let app = test::init_service(test_app().await).await;
        let mut browser = Browser::default();
        log_in(&app, &mut browser).await;

        let page = browser.send(&app, browser.get("/snippet/create")).await;

        assert_eq!(page.status, StatusCode::OK);
        assert!(page.body.contains(r#"<form action="/snippet/create" method="POST">"#));
    }

    #[actix_web::test]
    async fn test_snippet_create_post() {
        let cases = [
            ("Valid Form", "A Title", "This is a content example", "365", StatusCode::SEE_OTHER),
            ("Empty Field", "", "", "7", StatusCode::UNPROCESSABLE_ENTITY),
            ("Invalid Expires", "A Title", "This is a content example", "1000", StatusCode::UNPROCESSABLE_ENTITY),
            ("Non-numeric Expires", "A Title", "This is a content example", "soon", StatusCode::BAD_REQUEST),
        ];

        for (name, title, content, expires, expected) in cases {
            let app = test::init_service(test_app().await).await;
            let mut browser = Browser::default();
            log_in(&app, &mut browser).await;

            let page = browser.send(&app, browser.get("/snippet/create")).await;
            let csrf_token = extract_csrf_token(&page.body);
            let form = [
                ("title", title),
                ("content", content),
                ("expires", expires),
                ("csrf_token", csrf_token.as_str()),
            ];
            let page = browser
                .send(&app, browser.post_form("/snippet/create", &form))
                .await;

            assert_eq!(page.status, expected, "{name}");
        }
    }

    #[actix_web::test]
    async fn test_created_snippet_is_shown_with_flash() {
        let app = test::init_service(test_app().await).await;
        let mut browser = Browser::default();
        log_in(&app, &mut browser).await;

        let page = browser.send(&app, browser.get("/snippet/create")).await;
        let csrf_token = extract_csrf_token(&page.body);
        let form = [
            ("title", "O snail"),
            ("content", "Climb Mount Fuji, but slowly, slowly!"),
            ("expires", "7"),
            ("csrf_token", csrf_token.as_str()),
        ];
        let page = browser
            .send(&app, browser.post_form("/snippet/create", &form))
            .await;
        assert_eq!(page.headers.get(header::LOCATION).unwrap(), "/snippet/view/2");

        let page = browser.send(&app, browser.get("/snippet/view/2")).await;
        assert_eq!(page.status, StatusCode::OK);
        assert!(page.body.contains("Climb Mount Fuji, but slowly, slowly!"));
        assert!(page.body.contains("Snippet successfully created!"));

        let page = browser.send(&app, browser.get("/snippet/view/2")).await;
        assert!(!page.body.contains("Snippet successfully created!"));
    }

    #[actix_web::test]
    async fn test_long_snippet_is_accepted() {
        let app = test::init_service(test_app().await).await;
        let mut browser = Browser::default();
        log_in(&app, &mut browser).await;

        let page = browser.send(&app, browser.get("/snippet/create")).await;
        let csrf_token = extract_csrf_token(&page.body);
        let content = "Climb Mount Fuji, but slowly, slowly!\n".repeat(2_000);
        let form = [
            ("title", "O snail"),
            ("content", content.as_str()),
            ("expires", "7"),
            ("csrf_token", csrf_token.as_str()),
        ];
        let page = browser
            .send(&app, browser.post_form("/snippet/create", &form))
            .await;
        assert_eq!(page.status, StatusCode::SEE_OTHER);

        let page = browser.send(&app, browser.get("/snippet/view/2")).await;
        assert!(page.body.contains(content.trim_end()));
    }

    #[actix_web::test]
    async fn test_snippet_create_post_bad_csrf() {
        let app = test::init_service(test_app().await).await;
        let mut browser = Browser::default();
        log_in(&app, &mut browser).await;

        let form = [
            ("title", "A Title"),
            ("content", "This is a content example"),
            ("expires", "365"),
            ("csrf_token", "invalid csrf token"),
        ];
        let page = browser
            .send(&app, browser.post_form("/snippet/create", &form))
            .await;

        assert_eq!(page.status, StatusCode::BAD_REQUEST);
    }
}
