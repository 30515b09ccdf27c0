use serde::{Deserialize, Serialize};

/// Body shared by the create and edit release calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertReleaseRequest {
    pub tag_name: String,
    pub target_commitish: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub draft: bool,
    pub prerelease: bool,
}
