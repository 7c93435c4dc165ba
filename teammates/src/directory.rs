//! The remote directory as seen by a roster sweep.
//!
//! [`Directory`] is the seam between sync logic and the wire. The HTTP
//! implementation is [`TeammatesClient`]; tests can substitute a recorder.

use crate::client::TeammatesClient;
use crate::error::Result;
use crate::types::{AccountRequest, CreateOutcome, RemoteAccount, UpdateOutcome};

/// Account operations offered by the remote directory.
///
/// An `Err` means the exchange itself failed (transport, decoding). A
/// request the server rejected is reported through the outcome instead.
#[allow(async_fn_in_trait)]
pub trait Directory {
    async fn create_account(&self, req: &AccountRequest<'_>) -> Result<CreateOutcome>;

    async fn update_account(&self, req: &AccountRequest<'_>) -> Result<UpdateOutcome>;

    async fn list_accounts(&self, limit: u32) -> Result<Vec<RemoteAccount>>;
}

impl Directory for TeammatesClient {
    async fn create_account(&self, req: &AccountRequest<'_>) -> Result<CreateOutcome> {
        TeammatesClient::create_account(self, req).await
    }

    async fn update_account(&self, req: &AccountRequest<'_>) -> Result<UpdateOutcome> {
        TeammatesClient::update_account(self, req).await
    }

    async fn list_accounts(&self, limit: u32) -> Result<Vec<RemoteAccount>> {
        TeammatesClient::list_accounts(self, limit).await
    }
}
