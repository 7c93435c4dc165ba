/// Production SendGrid API host.
pub const DEFAULT_API_HOST: &str = "https://api.sendgrid.com";

/// Configuration for the teammates client.
#[derive(Clone)]
pub struct TeammatesConfig {
    /// Base URL of the API (e.g. `https://api.sendgrid.com`).
    pub api_host: String,
    /// Bearer credential sent with every request.
    pub api_key: String,
}

impl TeammatesConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_host: DEFAULT_API_HOST.to_string(),
            api_key: api_key.into(),
        }
    }
}

// Keep the credential out of logs.
impl std::fmt::Debug for TeammatesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeammatesConfig")
            .field("api_host", &self.api_host)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
