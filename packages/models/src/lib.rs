pub mod prelude;

pub mod sessions;
pub mod snippets;
pub mod users;
