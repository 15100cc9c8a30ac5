use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a single provisioning request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvisioningResult {
    pub success: bool,
    /// Response body of a successful request
    pub data: Option<Value>,
    /// Transport error or HTTP failure description
    pub error: Option<String>,
    /// HTTP status code, absent when no response arrived
    pub status_code: Option<u16>,
}

impl ProvisioningResult {
    pub fn success(data: Option<Value>, status_code: u16) -> Self {
        Self {
            success: true,
            data,
            error: None,
            status_code: Some(status_code),
        }
    }

    pub fn error(error: impl Into<String>, status_code: Option<u16>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            status_code,
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Error text for display, if the request failed
    pub fn error_message(&self) -> Option<&str> {
        if self.success {
            None
        } else {
            Some(self.error.as_deref().unwrap_or("Unknown error"))
        }
    }
}
