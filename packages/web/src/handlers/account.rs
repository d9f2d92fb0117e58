use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use repositories::{ModelError, UserRepository};
use services::validation::InputValidator;

use super::{render, see_other, see_other_with_flash};
use crate::auth::RequireUser;
use crate::errors::AppError;
use crate::forms::{PasswordUpdateForm, WRONG_CURRENT_PASSWORD};
use crate::session::{verify_csrf, Flash};
use crate::state::AppState;
use crate::templates;

pub(super) async fn view(
    req: HttpRequest,
    state: web::Data<AppState>,
    RequireUser(user_id): RequireUser,
) -> Result<HttpResponse, AppError> {
    let user = match UserRepository::get(&state.db, user_id).await {
        Ok(user) => user,
        Err(ModelError::NoRecord) => return Ok(see_other("/user/login")),
        Err(e) => return Err(e.into()),
    };

    Ok(render(&req, &state, true, StatusCode::OK, |data| {
        templates::account::view(data, &user)
    }))
}

pub(super) async fn password_update(
    req: HttpRequest,
    state: web::Data<AppState>,
    _user: RequireUser,
) -> HttpResponse {
    let form = PasswordUpdateForm::default();
    render(&req, &state, true, StatusCode::OK, |data| {
        templates::account::password_update(data, &form)
    })
}

pub(super) async fn password_update_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    RequireUser(user_id): RequireUser,
    form: web::Form<PasswordUpdateForm>,
) -> Result<HttpResponse, AppError> {
    let mut form = form.into_inner();
    verify_csrf(&req, &form.csrf_token)?;

    if form.validate() {
        match UserRepository::update_password(
            &state.db,
            user_id,
            &form.current_password,
            &form.new_password,
        )
        .await
        {
            Ok(()) => {
                tracing::info!(user_id, "password updated");
                return Ok(see_other_with_flash(&state, "/account/view", Flash::PasswordUpdated));
            }
            Err(ModelError::InvalidCredentials) => {
                form.validator_mut().add_non_field_error(WRONG_CURRENT_PASSWORD);
            }
            Err(ModelError::NoRecord) => return Ok(see_other("/user/login")),
            Err(e) => return Err(e.into()),
        }
    }

    Ok(render(&req, &state, true, StatusCode::UNPROCESSABLE_ENTITY, |data| {
        templates::account::password_update(data, &form)
    }))
}
