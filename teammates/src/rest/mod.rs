pub mod endpoints;

use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::error::{Result, TeammatesError};

/// HTTP client wrapper for the SendGrid teammates REST API.
///
/// Every request is authenticated with the bearer key the client was built
/// with. Exactly one round trip per call; nothing is retried.
#[derive(Clone)]
pub struct TeammatesHttpClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl TeammatesHttpClient {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let base_url = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|e| TeammatesError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(TeammatesError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
            api_key: api_key.to_string(),
        })
    }

    /// Build an absolute URL from path segments. Each segment is
    /// percent-encoded on its own, so an email stays one segment.
    pub fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| TeammatesError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET a JSON resource. Non-2xx is an `Http` error; an unexpected body
    /// is a `Decode` error.
    pub async fn get<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.url(segments)?;
        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .query(query)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(TeammatesError::Http {
                status,
                message: body,
            });
        }

        let text = resp.text().await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Send a JSON body and hand back the raw status and response text.
    ///
    /// Status interpretation is left to the caller: the teammates API gives
    /// 4xx codes endpoint-specific meanings.
    pub async fn send_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        segments: &[&str],
        body: &B,
    ) -> Result<(u16, String)> {
        let url = self.url(segments)?;
        let resp = self
            .client
            .request(method, url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        read_status_and_body(resp).await
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }
}

async fn read_status_and_body(resp: Response) -> Result<(u16, String)> {
    let status = resp.status().as_u16();
    let body = resp.text().await?;
    Ok((status, body))
}

// The api key must not leak through `{:?}`.
impl std::fmt::Debug for TeammatesHttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TeammatesHttpClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}
