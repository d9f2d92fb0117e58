pub use super::sessions::Entity as Sessions;
pub use super::snippets::Entity as Snippets;
pub use super::users::Entity as Users;
