pub mod app_state;
pub mod controllers;
pub mod error;
pub mod health;
pub mod home;
pub mod logger;
pub mod routes;
pub mod views;

pub use app_state::AppState;
pub use controllers::{
    applications::{
        applications::{
            create_application, delete_application, edit_application_form, list_applications,
            new_application_form, show_application, update_application,
        },
        create_application_request::CreateApplicationRequest,
        update_application_request::UpdateApplicationRequest,
    },
    error::ControllerError,
    error::Result as ControllerResult,
    extractors::session_user::{SESSION_USER_HEADER, SessionUser},
};
pub use views::error::ViewError;

pub use crate::routes::build_router;
