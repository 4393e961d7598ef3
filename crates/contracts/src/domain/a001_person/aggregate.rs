use serde::{Deserialize, Serialize};

/// Page size requested by the assignee select on first display
pub const PEOPLE_PAGE_SIZE: usize = 5;

// ============================================================================
// Aggregate
// ============================================================================

/// Person record served by the people data service
///
/// Text fields fall back to empty strings when absent, so an incomplete
/// record still deserializes and renders with blank content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub picture_url: String,
}

// ============================================================================
// DTOs
// ============================================================================

/// Query options for `GET /api/people`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeopleRequest {
    /// Upper bound on the number of records; `None` returns all of them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl PeopleRequest {
    pub fn with_count(count: usize) -> Self {
        Self { count: Some(count) }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeopleResponse {
    pub people: Vec<Person>,
}
