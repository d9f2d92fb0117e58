use actix_web::http::{header, StatusCode};
use actix_web::{web, HttpRequest, HttpResponse};
use repositories::{ModelError, SessionRepository, UserRepository};
use services::validation::InputValidator;

use super::{render, see_other_with_flash};
use crate::auth::Authentication;
use crate::errors::AppError;
use crate::forms::{LogoutForm, UserLoginForm, UserSignupForm, BAD_CREDENTIALS, EMAIL_IN_USE};
use crate::session::{self, verify_csrf, Flash, SESSION_COOKIE};
use crate::state::AppState;
use crate::templates;

pub(super) async fn signup(
    req: HttpRequest,
    state: web::Data<AppState>,
    auth: Authentication,
) -> HttpResponse {
    let form = UserSignupForm::default();
    render(&req, &state, auth.is_authenticated(), StatusCode::OK, |data| {
        templates::users::signup(data, &form)
    })
}

pub(super) async fn signup_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    auth: Authentication,
    form: web::Form<UserSignupForm>,
) -> Result<HttpResponse, AppError> {
    let mut form = form.into_inner();
    verify_csrf(&req, &form.csrf_token)?;

    if form.validate() {
        match UserRepository::insert(&state.db, form.name.clone(), form.email.clone(), &form.password)
            .await
        {
            Ok(user_id) => {
                tracing::info!(user_id, "user signed up");
                return Ok(see_other_with_flash(&state, "/user/login", Flash::SignedUp));
            }
            Err(ModelError::DuplicateEmail) => {
                form.validator_mut().add_field_error("email", EMAIL_IN_USE);
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(render(
        &req,
        &state,
        auth.is_authenticated(),
        StatusCode::UNPROCESSABLE_ENTITY,
        |data| templates::users::signup(data, &form),
    ))
}

pub(super) async fn login(
    req: HttpRequest,
    state: web::Data<AppState>,
    auth: Authentication,
) -> HttpResponse {
    let form = UserLoginForm::default();
    render(&req, &state, auth.is_authenticated(), StatusCode::OK, |data| {
        templates::users::login(data, &form)
    })
}

pub(super) async fn login_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    auth: Authentication,
    form: web::Form<UserLoginForm>,
) -> Result<HttpResponse, AppError> {
    let mut form = form.into_inner();
    verify_csrf(&req, &form.csrf_token)?;

    if form.validate() {
        match UserRepository::authenticate(&state.db, &form.email, &form.password).await {
            Ok(user_id) => {
                // A fresh session on every login; any previous one is dropped.
                if let Some(previous) = &auth.session_id {
                    SessionRepository::revoke(&state.db, previous).await?;
                }
                let session_id = SessionRepository::create(
                    &state.db,
                    user_id,
                    state.sessions.lifetime_seconds(),
                )
                .await?;
                let token = state.sessions.issue(user_id, &session_id)?;
                tracing::info!(user_id, "user logged in");
                return Ok(HttpResponse::SeeOther()
                    .insert_header((header::LOCATION, "/snippet/create"))
                    .cookie(session::session_cookie(
                        token,
                        state.sessions.lifetime_seconds(),
                        state.secure_cookies,
                    ))
                    .finish());
            }
            Err(ModelError::InvalidCredentials) => {
                form.validator_mut().add_non_field_error(BAD_CREDENTIALS);
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(render(
        &req,
        &state,
        auth.is_authenticated(),
        StatusCode::UNPROCESSABLE_ENTITY,
        |data| templates::users::login(data, &form),
    ))
}

pub(super) async fn logout_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    auth: Authentication,
    form: web::Form<LogoutForm>,
) -> Result<HttpResponse, AppError> {
    let (Some(user_id), Some(session_id)) = (auth.user_id, auth.session_id) else {
        return Err(AppError::LoginRequired);
    };
    verify_csrf(&req, &form.csrf_token)?;

    SessionRepository::revoke(&state.db, &session_id).await?;
    if let Err(e) = SessionRepository::purge_expired(&state.db).await {
        tracing::warn!(error = %e, "failed to purge expired sessions");
    }
    tracing::info!(user_id, "user logged out");

    Ok(HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .cookie(session::removal_cookie(SESSION_COOKIE))
        .cookie(session::flash_cookie(Flash::LoggedOut, state.secure_cookies))
        .finish())
}
