use serde::Deserialize;
use config::{Config, ConfigError, Environment, File};

pub const DEFAULT_TASKS_FILE: &str = "tasks.json";
pub const DEFAULT_EXPENSES_FILE: &str = "expenses.json";
pub const DEFAULT_GITHUB_EVENTS_URL: &str = "https://api.github.com/users/{username}/events";
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub tasks_file: String,
    pub expenses_file: String,
    /// `{username}` is replaced with the requested user.
    pub github_events_url: String,
    pub user_agent: String,
    pub request_timeout_secs: u64,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        Config::builder()
            // Start off with default values
            .set_default("tasks_file", DEFAULT_TASKS_FILE)?
            .set_default("expenses_file", DEFAULT_EXPENSES_FILE)?
            .set_default("github_events_url", DEFAULT_GITHUB_EVENTS_URL)?
            .set_default("user_agent", DEFAULT_USER_AGENT)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS)?
            // Optional config.{toml,json,yaml} in the working directory
            .add_source(File::with_name("config").required(false))
            // Add in settings from environment variables (with a prefix of APP)
            .add_source(Environment::with_prefix("APP"))
            .build()?
            .try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tasks_file: DEFAULT_TASKS_FILE.to_string(),
            expenses_file: DEFAULT_EXPENSES_FILE.to_string(),
            github_events_url: DEFAULT_GITHUB_EVENTS_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
