use tracing::debug;

use crate::config::TeammatesConfig;
use crate::error::Result;
use crate::rest::TeammatesHttpClient;
use crate::types::*;

/// Main client for the SendGrid teammates API.
#[derive(Debug, Clone)]
pub struct TeammatesClient {
    /// HTTP client.
    pub http_client: TeammatesHttpClient,
}

impl TeammatesClient {
    /// Build a client. Fails only if `api_host` is not a usable base URL;
    /// no request is made.
    pub fn new(config: TeammatesConfig) -> Result<Self> {
        let http_client = TeammatesHttpClient::new(&config.api_host, &config.api_key)?;
        Ok(Self { http_client })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }

    /// Create an SSO teammate.
    pub async fn create_account(&self, req: &AccountRequest<'_>) -> Result<CreateOutcome> {
        debug!(email = req.email, is_admin = req.is_admin, scopes = ?req.scopes, "create teammate");
        self.http_client.create_teammate(req).await
    }

    /// Update an existing SSO teammate, addressed by email.
    pub async fn update_account(&self, req: &AccountRequest<'_>) -> Result<UpdateOutcome> {
        debug!(email = req.email, is_admin = req.is_admin, scopes = ?req.scopes, "update teammate");
        self.http_client.update_teammate(req).await
    }

    /// List teammates. Only the first page of at most `limit` entries is read.
    pub async fn list_accounts(&self, limit: u32) -> Result<Vec<RemoteAccount>> {
        debug!(limit, "list teammates");
        Ok(self.http_client.list_teammates(limit).await?.result)
    }
}
