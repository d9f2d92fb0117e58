use maud::{html, Markup};

use super::{csrf_input, field_error, layout, non_field_errors, TemplateData};
use crate::forms::{UserLoginForm, UserSignupForm};

pub fn signup(data: &TemplateData, form: &UserSignupForm) -> Markup {
    let v = &form.validator;
    let content = html! {
        form action="/user/signup" method="POST" novalidate {
            (csrf_input(data))
            div {
                label { "Name:" }
                (field_error(v, "name"))
                input type="text" name="name" value=(form.name);
            }
            div {
                label { "Email:" }
                (field_error(v, "email"))
                input type="email" name="email" value=(form.email);
            }
            div {
                label { "Password:" }
                (field_error(v, "password"))
                input type="password" name="password";
            }
            div {
                input type="submit" value="Signup";
            }
        }
    };
    layout(data, "Signup", content)
}

pub fn login(data: &TemplateData, form: &UserLoginForm) -> Markup {
    let v = &form.validator;
    let content = html! {
        form action="/user/login" method="POST" novalidate {
            (csrf_input(data))
            (non_field_errors(v))
            div {
                label { "Email:" }
                (field_error(v, "email"))
                input type="email" name="email" value=(form.email);
            }
            div {
                label { "Password:" }
                (field_error(v, "password"))
                input type="password" name="password";
            }
            div {
                input type="submit" value="Login";
            }
        }
    };
    layout(data, "Login", content)
}
