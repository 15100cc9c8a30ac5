use anyhow::Result;
use log::{debug, info};

pub const API_URL_VAR: &str = "TWENTY_CRM_API_URL";
pub const API_KEY_VAR: &str = "TWENTY_CRM_API_KEY";
pub const WORKSPACE_ID_VAR: &str = "TWENTY_CRM_WORKSPACE_ID";

pub const DEFAULT_API_URL: &str = "https://twenty.ancloraprivateestates.com/api/rest";

/// Connection settings for one Twenty workspace
#[derive(Clone)]
pub struct Settings {
    pub api_url: String,
    pub api_key: String,
    pub workspace_id: String,
}

// Keep the key out of Debug output and therefore out of the log file
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("workspace_id", &self.workspace_id)
            .finish()
    }
}

impl Settings {
    /// Read settings from the process environment, after loading `.env` if present
    pub fn from_env() -> Result<Self> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment from {:?}", path),
            Err(e) => debug!("No .env file loaded: {}", e),
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve settings through an arbitrary variable lookup
    ///
    /// Empty values are treated the same as unset ones.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let api_url = read(API_URL_VAR).unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_key = read(API_KEY_VAR)
            .ok_or_else(|| anyhow::anyhow!("{} not set", API_KEY_VAR))?;
        let workspace_id = read(WORKSPACE_ID_VAR)
            .ok_or_else(|| anyhow::anyhow!("{} not set", WORKSPACE_ID_VAR))?;

        let settings = Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            workspace_id,
        };
        debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }
}
