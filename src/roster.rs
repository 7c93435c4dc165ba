//! Role-grouped roster of teammates, loaded from YAML.
//!
//! Every group carries the same three role buckets. Absent buckets, user
//! lists and scope lists default to empty.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Treat an explicit `key:` with no value like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The full set of groups declared in configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Roster {
    #[serde(default, deserialize_with = "null_as_default")]
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Group {
    #[serde(default, deserialize_with = "null_as_default")]
    pub admin: RoleBucket,
    #[serde(default, deserialize_with = "null_as_default")]
    pub developer: RoleBucket,
    #[serde(default, deserialize_with = "null_as_default")]
    pub support: RoleBucket,
}

/// Users sharing one role and scope set within a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RoleBucket {
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<User>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scopes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleKind {
    Admin,
    Developer,
    Support,
}

impl RoleKind {
    pub fn is_admin(self) -> bool {
        matches!(self, RoleKind::Admin)
    }

    /// Scopes granted to a user of this role. Admins get full access
    /// implicitly, so their scope list is always empty.
    pub fn scopes_for(self, bucket: &RoleBucket) -> &[String] {
        match self {
            RoleKind::Admin => &[],
            RoleKind::Developer | RoleKind::Support => &bucket.scopes,
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RoleKind::Admin => "admin",
            RoleKind::Developer => "developer",
            RoleKind::Support => "support",
        })
    }
}

impl Group {
    /// Buckets in sweep order: admin, developer, support.
    pub fn buckets(&self) -> [(RoleKind, &RoleBucket); 3] {
        [
            (RoleKind::Admin, &self.admin),
            (RoleKind::Developer, &self.developer),
            (RoleKind::Support, &self.support),
        ]
    }
}

impl Roster {
    /// Read and parse a roster file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty mapping.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    /// Number of users across every bucket of every group.
    pub fn user_count(&self) -> usize {
        self.groups
            .iter()
            .flat_map(Group::buckets)
            .map(|(_, bucket)| bucket.users.len())
            .sum()
    }
}
