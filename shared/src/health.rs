use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// RFC 3339 timestamp in UTC.
    pub timestamp: String,
}

impl HealthResponse {
    pub fn ok(timestamp: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: timestamp.into(),
        }
    }
}
