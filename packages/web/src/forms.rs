//! Submitted forms. Each one owns a [`Validator`] and knows which of its
//! fields are malformed; outcomes decided later (a taken email, a wrong
//! password) are folded into the same validator by the handlers.

use serde::Deserialize;
use services::validation::{
    equal, matches, max_chars, min_chars, not_blank, permitted_value, InputValidator, Validator,
    EMAIL_RX,
};

pub const BLANK: &str = "This field cannot be blank";
pub const TITLE_TOO_LONG: &str = "This field cannot be more than 100 characters long";
pub const BAD_EXPIRES: &str = "This field must equal 1, 7 or 365";
pub const BAD_EMAIL: &str = "This field must be a valid email address";
pub const PASSWORD_TOO_SHORT: &str = "This field must be at least 8 characters long";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match";
pub const EMAIL_IN_USE: &str = "Email address is already in use";
pub const BAD_CREDENTIALS: &str = "Email or password is incorrect";
pub const WRONG_CURRENT_PASSWORD: &str = "Current password is incorrect";

/// Snippet lifetimes offered by the create form, in days.
pub const EXPIRY_DAYS: [i32; 3] = [1, 7, 365];

const TITLE_MAX_CHARS: usize = 100;
const PASSWORD_MIN_CHARS: usize = 8;

macro_rules! owns_validator {
    () => {
        fn validator(&self) -> &Validator {
            &self.validator
        }

        fn validator_mut(&mut self) -> &mut Validator {
            &mut self.validator
        }
    };
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SnippetCreateForm {
    pub title: String,
    pub content: String,
    pub expires: i32,
    pub csrf_token: String,
    #[serde(skip)]
    pub validator: Validator,
}

impl SnippetCreateForm {
    /// The blank form, with a year's expiry preselected.
    pub fn blank() -> Self {
        Self {
            expires: 365,
            ..Default::default()
        }
    }
}

impl InputValidator for SnippetCreateForm {
    owns_validator!();

    fn check(&mut self) {
        let v = &mut self.validator;
        v.check_field(not_blank(&self.title), "title", BLANK);
        v.check_field(max_chars(&self.title, TITLE_MAX_CHARS), "title", TITLE_TOO_LONG);
        v.check_field(not_blank(&self.content), "content", BLANK);
        v.check_field(permitted_value(&self.expires, &EXPIRY_DAYS), "expires", BAD_EXPIRES);
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserSignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub csrf_token: String,
    #[serde(skip)]
    pub validator: Validator,
}

impl InputValidator for UserSignupForm {
    owns_validator!();

    fn check(&mut self) {
        let v = &mut self.validator;
        v.check_field(not_blank(&self.name), "name", BLANK);
        v.check_field(not_blank(&self.email), "email", BLANK);
        v.check_field(matches(&self.email, &EMAIL_RX), "email", BAD_EMAIL);
        v.check_field(not_blank(&self.password), "password", BLANK);
        v.check_field(min_chars(&self.password, PASSWORD_MIN_CHARS), "password", PASSWORD_TOO_SHORT);
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserLoginForm {
    pub email: String,
    pub password: String,
    pub csrf_token: String,
    #[serde(skip)]
    pub validator: Validator,
}

impl InputValidator for UserLoginForm {
    owns_validator!();

    fn check(&mut self) {
        let v = &mut self.validator;
        v.check_field(not_blank(&self.email), "email", BLANK);
        v.check_field(matches(&self.email, &EMAIL_RX), "email", BAD_EMAIL);
        v.check_field(not_blank(&self.password), "password", BLANK);
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PasswordUpdateForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
    pub csrf_token: String,
    #[serde(skip)]
    pub validator: Validator,
}

impl InputValidator for PasswordUpdateForm {
    owns_validator!();

    fn check(&mut self) {
        let v = &mut self.validator;
        v.check_field(not_blank(&self.current_password), "current_password", BLANK);
        v.check_field(not_blank(&self.new_password), "new_password", BLANK);
        v.check_field(
            min_chars(&self.new_password, PASSWORD_MIN_CHARS),
            "new_password",
            PASSWORD_TOO_SHORT,
        );
        v.check_field(not_blank(&self.confirm_new_password), "confirm_new_password", BLANK);
        v.check_field(
            equal(&self.new_password, &self.confirm_new_password),
            "confirm_new_password",
            PASSWORDS_DIFFER,
        );
    }
}

/// Logout carries nothing but the CSRF token.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LogoutForm {
    pub csrf_token: String,
}
