use std::collections::HashMap;

/// Collects the errors found while validating one form submission.
///
/// Field errors are keyed by input name and keep only the first message
/// recorded for a field. Non-field errors cover failures that belong to the
/// submission as a whole, such as rejected credentials.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Validator {
    field_errors: HashMap<String, String>,
    non_field_errors: Vec<String>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no errors of either kind have been recorded.
    pub fn valid(&self) -> bool {
        self.field_errors.is_empty() && self.non_field_errors.is_empty()
    }

    /// Records `message` for `field` unless the field already has one.
    pub fn add_field_error(&mut self, field: &str, message: impl Into<String>) {
        self.field_errors
            .entry(field.to_string())
            .or_insert_with(|| message.into());
    }

    pub fn add_non_field_error(&mut self, message: impl Into<String>) {
        self.non_field_errors.push(message.into());
    }

    /// Records a field error when `ok` is false.
    pub fn check_field(&mut self, ok: bool, field: &str, message: impl Into<String>) {
        if !ok {
            self.add_field_error(field, message);
        }
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }

    pub fn field_errors(&self) -> &HashMap<String, String> {
        &self.field_errors
    }

    pub fn non_field_errors(&self) -> &[String] {
        &self.non_field_errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::rules::not_blank;

    #[test]
    fn test_new_validator_is_valid() {
        let v = Validator::new();
        assert!(v.valid());
        assert!(v.field_errors().is_empty());
        assert!(v.non_field_errors().is_empty());
        assert_eq!(Validator::default(), v);
    }

    #[test]
    fn test_field_error_makes_invalid() {
        let mut v = Validator::new();
        v.add_field_error("title", "This field cannot be blank");
        assert!(!v.valid());
        assert_eq!(v.field_error("title"), Some("This field cannot be blank"));
    }

    #[test]
    fn test_non_field_error_makes_invalid() {
        let mut v = Validator::new();
        v.add_non_field_error("Email or password is incorrect");
        assert!(!v.valid());
        assert!(v.field_errors().is_empty());
        assert_eq!(v.non_field_errors(), ["Email or password is incorrect"]);
    }

    #[test]
    fn test_first_field_error_wins() {
        let mut v = Validator::new();
        v.add_field_error("email", "A");
        v.add_field_error("email", "B");
        assert_eq!(v.field_errors().len(), 1);
        assert_eq!(v.field_error("email"), Some("A"));
    }

    #[test]
    fn test_non_field_errors_keep_order_and_duplicates() {
        let mut v = Validator::new();
        v.add_non_field_error("first");
        v.add_non_field_error("second");
        v.add_non_field_error("first");
        assert_eq!(v.non_field_errors(), ["first", "second", "first"]);
    }

    #[test]
    fn test_check_field() {
        let mut v = Validator::new();
        v.check_field(true, "x", "msg");
        assert!(v.valid());
        assert_eq!(v, Validator::new());

        v.check_field(false, "x", "msg");
        assert_eq!(v.field_errors().len(), 1);
        assert_eq!(v.field_error("x"), Some("msg"));
    }

    #[test]
    fn test_check_field_with_predicate() {
        let mut v = Validator::new();
        v.check_field(not_blank("   "), "title", "This field cannot be blank");
        v.check_field(not_blank("body"), "content", "This field cannot be blank");
        assert_eq!(v.field_error("title"), Some("This field cannot be blank"));
        assert_eq!(v.field_error("content"), None);
    }

    #[test]
    fn test_non_field_error_keeps_field_errors() {
        let mut v = Validator::new();
        v.add_field_error("email", "This field must be a valid email address");
        v.add_non_field_error("Email or password is incorrect");
        assert_eq!(
            v.field_error("email"),
            Some("This field must be a valid email address")
        );
        assert_eq!(v.non_field_errors().len(), 1);
    }
}
