pub mod claims;
pub mod password;
pub mod token;

pub use password::*;
pub use token::*;
