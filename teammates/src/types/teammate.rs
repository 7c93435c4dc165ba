use serde::{Deserialize, Serialize};

/// Desired state of one teammate, as sent on create and update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountRequest<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub is_admin: bool,
    pub scopes: &'a [String],
}

/// Body of `POST /v3/sso/teammates`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTeammateBody<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub is_admin: bool,
    pub scopes: &'a [String],
}

impl<'a> From<&AccountRequest<'a>> for CreateTeammateBody<'a> {
    fn from(req: &AccountRequest<'a>) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            is_admin: req.is_admin,
            scopes: req.scopes,
        }
    }
}

/// Body of `PATCH /v3/sso/teammates/{email}`. The email travels in the path.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateTeammateBody<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub is_admin: bool,
    pub scopes: &'a [String],
}

impl<'a> From<&AccountRequest<'a>> for UpdateTeammateBody<'a> {
    fn from(req: &AccountRequest<'a>) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            is_admin: req.is_admin,
            scopes: req.scopes,
        }
    }
}

/// A teammate as reported by `GET /v3/teammates`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteAccount {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
    pub is_sso: bool,
    pub user_type: String,
}

/// Envelope of the teammate listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeammateList {
    pub result: Vec<RemoteAccount>,
}
