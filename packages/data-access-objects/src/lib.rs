pub mod schema;
pub mod session;
pub mod snippet;
pub mod user;

pub use schema::create_tables;
pub use session::SessionDao;
pub use snippet::SnippetDao;
pub use user::UserDao;
