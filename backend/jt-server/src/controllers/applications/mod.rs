pub mod applications;
pub mod create_application_request;
pub mod update_application_request;
