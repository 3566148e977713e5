//! Job application entity - one sub-record in a user's document.

use crate::error::Result;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A single job application. Lives embedded in its owner's [`crate::User`]
/// document rather than in a table of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: Uuid,
    pub company: String,
    pub title: String,
    pub stage: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    /// Fields this record gained through unchecked edits.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Application {
    /// Create a new application with a fresh id
    pub fn new(
        company: String,
        title: String,
        stage: String,
        notes: Option<String>,
        link: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            company,
            title,
            stage,
            notes,
            link,
            extra: Map::new(),
        }
    }

    /// Overwrite this record with the submitted field set. Every submitted
    /// name is written, known or not, so an edit can grow the record's shape.
    /// Fails only when the merged record no longer maps back (e.g. `id`
    /// replaced with a non-UUID value).
    pub fn set(&mut self, fields: &Map<String, Value>) -> Result<()> {
        let mut document = match serde_json::to_value(&*self)? {
            Value::Object(object) => object,
            // A struct with named fields always serializes to an object.
            _ => unreachable!(),
        };
        for (name, value) in fields {
            document.insert(name.clone(), value.clone());
        }
        *self = serde_json::from_value(Value::Object(document))?;
        Ok(())
    }
}
