//! Resource controller error types
//!
//! A failed operation does not surface to the browser as an error page:
//! the controller logs it and redirects to the site root. Render failures
//! are the one exception and return a 500.

use crate::views::ViewError;

use jt_db::DbError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ControllerError {
    /// The request carried no usable signed-in user
    #[error("Session error: {message} {location}")]
    Session {
        message: String,
        location: ErrorLocation,
    },

    /// The user document could not be loaded or saved
    #[error("Storage error: {source} {location}")]
    Storage {
        source: DbError,
        location: ErrorLocation,
    },

    /// A mutation named an application the user does not have
    #[error("No application {application_id} to modify {location}")]
    MissingApplication {
        application_id: String,
        location: ErrorLocation,
    },

    /// A page could not be rendered from the data handed to it
    #[error("Render error: {source} {location}")]
    Render {
        source: ViewError,
        location: ErrorLocation,
    },
}

impl ControllerError {
    /// Create a session error
    #[track_caller]
    pub fn session<S: Into<String>>(message: S) -> Self {
        ControllerError::Session {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a missing application error
    #[track_caller]
    pub fn missing_application<S: Into<String>>(application_id: S) -> Self {
        ControllerError::MissingApplication {
            application_id: application_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ControllerError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        match self {
            ControllerError::Render { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
            _ => Redirect::to("/").into_response(),
        }
    }
}

/// Convert database errors to controller errors
impl From<DbError> for ControllerError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        ControllerError::Storage {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert view errors to controller errors
impl From<ViewError> for ControllerError {
    #[track_caller]
    fn from(source: ViewError) -> Self {
        ControllerError::Render {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ControllerError>;
