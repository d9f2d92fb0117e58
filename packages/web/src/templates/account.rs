use maud::{html, Markup};
use models::users::Model as User;

use super::{csrf_input, field_error, human_date, layout, non_field_errors, TemplateData};
use crate::forms::PasswordUpdateForm;

pub fn view(data: &TemplateData, user: &User) -> Markup {
    let content = html! {
        h2 { "Your Account" }
        table {
            tr {
                th { "Name" }
                td { (user.name) }
            }
            tr {
                th { "Email" }
                td { (user.email) }
            }
            tr {
                th { "Joined" }
                td { (human_date(&user.created.and_utc())) }
            }
            tr {
                th { "Password" }
                td { a href="/account/password/update" { "Change password" } }
            }
        }
    };
    layout(data, "Your Account", content)
}

pub fn password_update(data: &TemplateData, form: &PasswordUpdateForm) -> Markup {
    let v = &form.validator;
    let content = html! {
        h2 { "Change Password" }
        form action="/account/password/update" method="POST" novalidate {
            (csrf_input(data))
            (non_field_errors(v))
            div {
                label { "Current password:" }
                (field_error(v, "current_password"))
                input type="password" name="current_password";
            }
            div {
                label { "New password:" }
                (field_error(v, "new_password"))
                input type="password" name="new_password";
            }
            div {
                label { "Confirm new password:" }
                (field_error(v, "confirm_new_password"))
                input type="password" name="confirm_new_password";
            }
            div {
                input type="submit" value="Change password";
            }
        }
    };
    layout(data, "Change Password", content)
}
