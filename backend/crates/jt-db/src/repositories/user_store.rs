use crate::error::{DbError, Result};

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use jt_core::{Application, User};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Storage seam for user documents.
///
/// Users are persisted whole. The application-level operations are load,
/// mutate in memory, save: each one runs against a fresh copy of the
/// document, and a failed save leaves the stored document untouched.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Load a user's full document
    async fn get_user(&self, user_id: Uuid) -> Result<User>;

    /// Persist a user's full document over the stored one
    async fn save_user(&self, user: &User) -> Result<()>;

    /// Append a new application to a user's collection
    async fn append_application(&self, user_id: Uuid, application: Application) -> Result<()> {
        let mut user = self.get_user(user_id).await?;
        user.append_application(application);
        self.save_user(&user).await
    }

    /// Overwrite one application's fields with a submitted field set
    async fn update_application(
        &self,
        user_id: Uuid,
        application_id: Uuid,
        fields: &Map<String, Value>,
    ) -> Result<()> {
        let mut user = self.get_user(user_id).await?;
        let application =
            user.find_application_mut(application_id)
                .ok_or_else(|| DbError::ApplicationNotFound {
                    application_id: application_id.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })?;
        application.set(fields)?;
        self.save_user(&user).await
    }

    /// Remove one application from a user's collection
    async fn remove_application(&self, user_id: Uuid, application_id: Uuid) -> Result<()> {
        let mut user = self.get_user(user_id).await?;
        user.remove_application(application_id)
            .ok_or_else(|| DbError::ApplicationNotFound {
                application_id: application_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;
        self.save_user(&user).await
    }
}
