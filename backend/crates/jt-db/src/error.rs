use std::panic::Location;

use error_location::ErrorLocation;
use jt_core::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Document error: {source} {location}")]
    Document {
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Core error: {source} {location}")]
    Core {
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("User not found: {user_id} {location}")]
    UserNotFound {
        user_id: String,
        location: ErrorLocation,
    },

    #[error("Application not found: {application_id} {location}")]
    ApplicationNotFound {
        application_id: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for DbError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Document {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for DbError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Core {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
