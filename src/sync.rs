//! One-way roster sweeps against the remote teammate directory.
//!
//! Each sweep walks groups in configuration order, buckets in admin,
//! developer, support order and users in configuration order, issuing one
//! request per user. A rejected account is logged and skipped; a failed
//! exchange (transport, decode) aborts the sweep immediately.

use teammates::{AccountRequest, CreateOutcome, Directory, UpdateOutcome};
use tracing::{debug, error, info};

use crate::roster::{Group, RoleKind, Roster};

/// Page size for the full listing.
pub const LIST_ALL_LIMIT: u32 = 200;
/// Page size for the listing filtered to non-SSO accounts.
pub const LIST_NO_SSO_LIMIT: u32 = 100;

/// Per-account tallies for one sweep.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SweepSummary {
    pub created: usize,
    pub already_exists: usize,
    pub updated: usize,
    pub failed: usize,
}

/// Drives the four roster operations against a [`Directory`].
pub struct SyncEngine<'a, D> {
    directory: &'a D,
    roster: &'a Roster,
}

impl<'a, D: Directory> SyncEngine<'a, D> {
    pub fn new(directory: &'a D, roster: &'a Roster) -> Self {
        Self { directory, roster }
    }

    /// Create every roster user. 400 is read as "already exists".
    pub async fn sync_create(&self) -> teammates::Result<SweepSummary> {
        let mut summary = SweepSummary::default();

        for (role, req) in account_requests(self.roster) {
            match self.directory.create_account(&req).await? {
                CreateOutcome::Created => {
                    summary.created += 1;
                    info!(%role, email = req.email, "teammate created");
                }
                CreateOutcome::AlreadyExists => {
                    summary.already_exists += 1;
                    info!(%role, email = req.email, "teammate already exists");
                }
                CreateOutcome::Failed { status, body } => {
                    summary.failed += 1;
                    error!(%role, email = req.email, status, response = %body, "teammate create failed");
                }
            }
        }

        info!(
            created = summary.created,
            already_exists = summary.already_exists,
            failed = summary.failed,
            "create sweep finished"
        );
        Ok(summary)
    }

    /// Push role and scopes of every roster user to the directory.
    pub async fn sync_update(&self) -> teammates::Result<SweepSummary> {
        let mut summary = SweepSummary::default();

        for (role, req) in account_requests(self.roster) {
            match self.directory.update_account(&req).await? {
                UpdateOutcome::Updated => {
                    summary.updated += 1;
                    info!(%role, email = req.email, "teammate updated");
                }
                UpdateOutcome::Failed { status, body } => {
                    summary.failed += 1;
                    error!(%role, email = req.email, status, response = %body, "teammate update failed");
                }
            }
        }

        info!(
            updated = summary.updated,
            failed = summary.failed,
            "update sweep finished"
        );
        Ok(summary)
    }

    /// Log the username of every account on the first page. Returns them in
    /// the order the directory listed them.
    pub async fn list_all(&self) -> teammates::Result<Vec<String>> {
        let accounts = self.directory.list_accounts(LIST_ALL_LIMIT).await?;
        debug!(count = accounts.len(), "teammates listed");

        let usernames: Vec<String> = accounts.into_iter().map(|a| a.username).collect();
        for username in &usernames {
            info!(%username, "teammate");
        }
        Ok(usernames)
    }

    /// Log the username of every account not enrolled in SSO.
    pub async fn list_without_sso(&self) -> teammates::Result<Vec<String>> {
        let accounts = self.directory.list_accounts(LIST_NO_SSO_LIMIT).await?;
        debug!(count = accounts.len(), "teammates listed");

        let usernames: Vec<String> = accounts
            .into_iter()
            .filter(|a| !a.is_sso)
            .map(|a| a.username)
            .collect();
        for username in &usernames {
            info!(%username, "teammate without SSO");
        }
        Ok(usernames)
    }
}

/// Every roster user paired with its role, in sweep order.
fn account_requests(roster: &Roster) -> impl Iterator<Item = (RoleKind, AccountRequest<'_>)> {
    roster
        .groups
        .iter()
        .flat_map(Group::buckets)
        .flat_map(|(role, bucket)| {
            let scopes = role.scopes_for(bucket);
            bucket.users.iter().map(move |user| {
                (
                    role,
                    AccountRequest {
                        first_name: &user.first_name,
                        last_name: &user.last_name,
                        email: &user.email,
                        is_admin: role.is_admin(),
                        scopes,
                    },
                )
            })
        })
}
