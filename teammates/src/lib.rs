pub mod client;
pub mod config;
pub mod directory;
pub mod error;
pub mod rest;
pub mod types;

// ---- Top-level re-exports for ergonomic usage ----

// Client + config
pub use client::TeammatesClient;
pub use config::{TeammatesConfig, DEFAULT_API_HOST};
pub use error::{Result, TeammatesError};

// Directory seam used by the sync engine
pub use directory::Directory;

// REST client
pub use rest::TeammatesHttpClient;

// Request / response types
pub use types::{
    AccountRequest, CreateOutcome, CreateTeammateBody, RemoteAccount, TeammateList,
    UpdateOutcome, UpdateTeammateBody,
};
