use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewError {
    #[error("template {template} requires {name}")]
    MissingContext {
        template: &'static str,
        name: &'static str,
    },
}
