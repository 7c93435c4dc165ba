//! Validated run configuration.
//!
//! Built once from parsed flags and passed down by reference; nothing
//! downstream reads flags or the environment.

use std::path::PathBuf;

use teammates::TeammatesConfig;

use crate::cli::Cli;
use crate::error::AppError;

/// Which operations a run performs. Any combination may be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Actions {
    pub create: bool,
    pub update: bool,
    pub get_all: bool,
    pub get_all_no_sso: bool,
}

impl Actions {
    pub fn any(&self) -> bool {
        self.create || self.update || self.get_all || self.get_all_no_sso
    }
}

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub config_path: PathBuf,
    pub api: TeammatesConfig,
    pub actions: Actions,
}

impl RunConfig {
    /// Validate flags. Runs before the roster is read or any request is made.
    pub fn from_cli(cli: &Cli) -> Result<Self, AppError> {
        let actions = Actions {
            create: cli.create,
            update: cli.update,
            get_all: cli.get_all,
            get_all_no_sso: cli.get_all_no_sso,
        };
        if !actions.any() {
            return Err(AppError::Usage(
                "need to choose at least one action: --create/-c, --update/-u, \
                 --get-all/-a or --get-all-no-sso/-n"
                    .to_string(),
            ));
        }

        if cli.config_path.is_empty() {
            return Err(AppError::Usage("--config-path should not be empty".to_string()));
        }

        let api_key = match cli.sendgrid_token.as_deref() {
            Some(token) if !token.is_empty() => token.to_string(),
            _ => {
                return Err(AppError::Usage(
                    "--sendgrid-token/-t or SENDGRID_API_KEY is required".to_string(),
                ))
            }
        };

        Ok(Self {
            config_path: PathBuf::from(&cli.config_path),
            api: TeammatesConfig {
                api_host: cli.api_host.clone(),
                ..TeammatesConfig::new(api_key)
            },
            actions,
        })
    }
}
