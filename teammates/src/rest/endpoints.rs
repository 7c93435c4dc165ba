use reqwest::Method;
use tracing::debug;

use crate::error::Result;
use crate::rest::TeammatesHttpClient;
use crate::types::*;

impl TeammatesHttpClient {
    /// POST /v3/sso/teammates - Create an SSO teammate.
    pub async fn create_teammate(&self, req: &AccountRequest<'_>) -> Result<CreateOutcome> {
        let body = CreateTeammateBody::from(req);
        let (status, text) = self
            .send_json(Method::POST, &["v3", "sso", "teammates"], &body)
            .await?;
        if status == 400 {
            // Duplicate emails and validation failures share this status.
            debug!(email = req.email, response = %text, "create rejected with 400");
        }
        Ok(CreateOutcome::from_status(status, text))
    }

    /// PATCH /v3/sso/teammates/{email} - Update an SSO teammate's role and scopes.
    pub async fn update_teammate(&self, req: &AccountRequest<'_>) -> Result<UpdateOutcome> {
        let body = UpdateTeammateBody::from(req);
        let (status, text) = self
            .send_json(Method::PATCH, &["v3", "sso", "teammates", req.email], &body)
            .await?;
        Ok(UpdateOutcome::from_status(status, text))
    }

    /// GET /v3/teammates?limit= - First page of teammates.
    pub async fn list_teammates(&self, limit: u32) -> Result<TeammateList> {
        let limit = limit.to_string();
        self.get(&["v3", "teammates"], &[("limit", limit.as_str())])
            .await
    }
}
