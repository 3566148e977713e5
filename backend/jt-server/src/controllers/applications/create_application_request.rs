use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateApplicationRequest {
    /// Company name (required)
    pub company: String,

    /// Role title (required)
    pub title: String,

    /// Pipeline stage, e.g. "Applied" (required)
    pub stage: String,

    /// Optional free-form notes
    #[serde(default)]
    pub notes: Option<String>,

    /// Optional posting URL
    #[serde(default)]
    pub link: Option<String>,
}
