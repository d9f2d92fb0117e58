pub mod input_validator;
pub mod rules;
pub mod validator;

// Re-export common types and functions
pub use input_validator::InputValidator;
pub use rules::{equal, matches, max_chars, min_chars, not_blank, permitted_value, EMAIL_RX};
pub use validator::Validator;
