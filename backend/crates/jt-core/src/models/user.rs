use crate::Application;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    #[serde(default)]
    pub applications: Vec<Application>,
    // Account fields (username, password hash, ...) owned by the account
    // system. They ride through `extra` so a whole-document save keeps them.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            applications: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn find_application(&self, application_id: Uuid) -> Option<&Application> {
        self.applications.iter().find(|a| a.id == application_id)
    }

    pub fn find_application_mut(&mut self, application_id: Uuid) -> Option<&mut Application> {
        self.applications.iter_mut().find(|a| a.id == application_id)
    }

    /// Append to the end of the collection; display order is append order.
    pub fn append_application(&mut self, application: Application) {
        self.applications.push(application);
    }

    /// Remove an application by id, returning it when it was present.
    pub fn remove_application(&mut self, application_id: Uuid) -> Option<Application> {
        let index = self
            .applications
            .iter()
            .position(|a| a.id == application_id)?;
        Some(self.applications.remove(index))
    }
}
