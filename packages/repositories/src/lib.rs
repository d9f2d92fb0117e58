pub mod error;
pub mod session;
pub mod snippet;
pub mod user;

pub use error::ModelError;
pub use session::SessionRepository;
pub use snippet::SnippetRepository;
pub use user::UserRepository;

#[cfg(test)]
mod test_helpers;
