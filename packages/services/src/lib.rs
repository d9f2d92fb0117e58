pub mod authentication;
pub mod validation;

pub use authentication::*;
pub use validation::*;
