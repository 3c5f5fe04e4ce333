use serde::{Deserialize, Serialize};

/// Error payload returned by all API endpoints on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}
