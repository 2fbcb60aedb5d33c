use serde::{Deserialize, Serialize};

/// A department record. Read-only from the listing's point of view; only
/// fetched to resolve employee department references to display names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    #[serde(rename = "Id")]
    pub id: i64,
    #[serde(rename = "Title")]
    pub title: String,
}
