use super::validator::Validator;

/// Implemented by every submitted form. The form owns its [`Validator`] and
/// `check` records whatever the form considers malformed.
pub trait InputValidator {
    fn validator(&self) -> &Validator;

    fn validator_mut(&mut self) -> &mut Validator;

    fn check(&mut self);

    /// Runs the form's checks and reports whether the submission is clean.
    fn validate(&mut self) -> bool {
        self.check();
        self.validator().valid()
    }
}
