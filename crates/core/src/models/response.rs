use serde::{Deserialize, Serialize};

/// Success envelope returned by every controller endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub status: bool,
    pub message: String,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_rows: Option<i64>,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: true,
            message: message.into(),
            data,
            total_rows: None,
        }
    }

    pub fn with_total(mut self, total_rows: i64) -> Self {
        self.total_rows = Some(total_rows);
        self
    }
}

/// Envelope for actions that carry no payload, like deletes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: bool,
    pub message: String,
}

impl StatusResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: message.into(),
        }
    }
}
