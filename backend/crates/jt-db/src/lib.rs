pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::sqlite_user_store::SqliteUserStore;
pub use repositories::user_store::UserStore;
