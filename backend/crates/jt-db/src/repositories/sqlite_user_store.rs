use crate::Result as DbErrorResult;
use crate::error::DbError;
use crate::repositories::user_store::UserStore;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use jt_core::User;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct SqliteUserStore {
    pool: SqlitePool,
}

impl SqliteUserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for SqliteUserStore {
    async fn get_user(&self, user_id: Uuid) -> DbErrorResult<User> {
        let id = user_id.to_string();

        let document =
            sqlx::query_scalar::<_, String>("SELECT document FROM jt_users WHERE id = ?")
                .bind(&id)
                .fetch_optional(&self.pool)
                .await?
                .ok_or_else(|| DbError::UserNotFound {
                    user_id: id.clone(),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        Ok(serde_json::from_str(&document)?)
    }

    async fn save_user(&self, user: &User) -> DbErrorResult<()> {
        let id = user.id.to_string();
        let document = serde_json::to_string(user)?;

        let result = sqlx::query("UPDATE jt_users SET document = ? WHERE id = ?")
            .bind(&document)
            .bind(&id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::UserNotFound {
                user_id: id,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
