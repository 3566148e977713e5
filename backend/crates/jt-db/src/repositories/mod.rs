pub mod sqlite_user_store;
pub mod user_store;
