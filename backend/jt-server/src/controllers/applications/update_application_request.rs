use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Form fields submitted by the edit form.
///
/// Whatever names the form posts get applied to the stored record, so this
/// keeps the whole body rather than a fixed field list.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct UpdateApplicationRequest {
    fields: HashMap<String, String>,
}

impl UpdateApplicationRequest {
    /// The submitted fields as a JSON object
    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
            .into_iter()
            .map(|(name, value)| (name, Value::String(value)))
            .collect()
    }
}
