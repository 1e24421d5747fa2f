use serde::{Deserialize, Serialize};

/// The only status code that counts as success for a mutation, on every
/// vertical.
pub const STATUS_CREATED: u16 = 201;

/// `{statusCode, message}` answer to a remote action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(default)]
    pub message: String,
}

impl GatewayResponse {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    pub fn created(message: impl Into<String>) -> Self {
        Self::new(STATUS_CREATED, message)
    }

    pub fn is_created(&self) -> bool {
        self.status_code == STATUS_CREATED
    }
}
