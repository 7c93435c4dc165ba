use clap::Parser;

/// teammate-sync — provision SendGrid SSO teammates from a YAML roster.
#[derive(Parser, Debug, Clone)]
#[command(name = "teammate-sync", version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Roster file path
    #[arg(long, default_value = "config/users.yaml")]
    pub config_path: String,

    /// SendGrid API key
    #[arg(short = 't', long, env = "SENDGRID_API_KEY", hide_env_values = true)]
    pub sendgrid_token: Option<String>,

    /// SendGrid API base URL
    #[arg(long, env = "SENDGRID_API_HOST", default_value = teammates::DEFAULT_API_HOST)]
    pub api_host: String,

    /// Create all roster users
    #[arg(short, long)]
    pub create: bool,

    /// Update role and scopes of all roster users
    #[arg(short, long)]
    pub update: bool,

    /// List all teammates
    #[arg(short = 'a', long)]
    pub get_all: bool,

    /// List teammates without SSO
    #[arg(short = 'n', long)]
    pub get_all_no_sso: bool,
}
