//! Endpoints and headers of the Twenty REST API

/// Workspace endpoint, used as the connectivity probe
pub const WORKSPACE_PATH: &str = "workspace";

/// Pipeline collection endpoint
pub const PIPELINES_PATH: &str = "pipelines";

/// User agent sent with every request
pub const USER_AGENT: &str = concat!("twenty-setup/", env!("CARGO_PKG_VERSION"));

pub mod headers {
    /// Content type for JSON requests
    pub const CONTENT_TYPE_JSON: &str = "application/json";

    /// Correlates a request with its log lines
    pub const X_CORRELATION_ID: &str = "X-Correlation-Id";
}

pub fn workspace_endpoint(base_url: &str) -> String {
    format!("{}/{}", base_url, WORKSPACE_PATH)
}

/// Build the create-field endpoint for an object type
pub fn fields_endpoint(base_url: &str, object_type: &str) -> String {
    format!(
        "{}/metadata/objects/{}/fields",
        base_url,
        urlencoding::encode(object_type)
    )
}

pub fn pipelines_endpoint(base_url: &str) -> String {
    format!("{}/{}", base_url, PIPELINES_PATH)
}
