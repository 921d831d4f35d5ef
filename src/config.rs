//! Environment-sourced configuration.
//!
//! Everything is read once at startup and immutable thereafter. The two
//! required values typically arrive via the calling scheduler's secret
//! store; a local `.env` works too.

use crate::discord::{auth::UserToken, channel::ThreadId};
use std::{env, fmt};

/// The environment variable carrying the Discord user token.
pub const TOKEN_VAR: &str = "USER_TOKEN";

/// The environment variable carrying the target thread ID.
pub const THREAD_VAR: &str = "THREAD_ID";

/// Optional cosmetic override for the interval displayed at startup.
pub const INTERVAL_VAR: &str = "SEND_INTERVAL_SECS";

/// The interval the calling scheduler is assumed to re-invoke us on. Display
/// only; we never sleep on it.
const DEFAULT_INTERVAL_SECS: u64 = 300;

/// Values copied straight out of setup instructions, treated the same as not
/// configuring the variable at all.
const TOKEN_SENTINELS: &[&str] = &["YOUR_USER_TOKEN_HERE"];
const THREAD_SENTINELS: &[&str] = &["YOUR_THREAD_ID_HERE", "PASTE_YOUR_THREAD_ID_HERE"];

pub enum ConfigError {
    /// The variable isn't set at all. Unlike [ConfigError::Placeholder] this
    /// signals failure to the scheduler.
    MissingVar(&'static str),
    /// The variable is set but empty or still holds a setup placeholder.
    Placeholder(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self {
            ConfigError::MissingVar(var) => format!("{} environment variable is required", var),
            ConfigError::Placeholder(var) => format!("{} is not configured", var),
        };

        write!(f, "{}", x)
    }
}

pub struct Config {
    pub token: UserToken,
    pub thread_id: ThreadId,
    /// Cosmetic only. Repetition belongs to the external scheduler; see the
    /// README.
    pub interval_secs: u64,
    pub templates: Vec<String>,
}

impl Config {
    /// Read configuration from the environment. Only outright absence of a
    /// required variable fails here; placeholder values are caught later by
    /// [Config::validate] so the run can stop gracefully with guidance.
    pub fn from_env() -> Result<Self, ConfigError> {
        let token = env::var(TOKEN_VAR).map_err(|_| ConfigError::MissingVar(TOKEN_VAR))?;
        let thread_id = env::var(THREAD_VAR).map_err(|_| ConfigError::MissingVar(THREAD_VAR))?;

        let interval_secs = env::var(INTERVAL_VAR)
            .ok()
            .and_then(|x| x.parse().ok())
            .unwrap_or(DEFAULT_INTERVAL_SECS);

        Ok(Self {
            token: UserToken(token),
            thread_id: ThreadId(thread_id),
            interval_secs,
            templates: default_templates(),
        })
    }

    /// Check that both required values look real. Must pass before any
    /// network call is attempted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.token.0.is_empty() || TOKEN_SENTINELS.contains(&self.token.0.as_str()) {
            return Err(ConfigError::Placeholder(TOKEN_VAR));
        }

        if self.thread_id.0.is_empty() || THREAD_SENTINELS.contains(&self.thread_id.0.as_str()) {
            return Err(ConfigError::Placeholder(THREAD_VAR));
        }

        Ok(())
    }
}

/// The fixed message rotation. Exactly one template carries the `{}` counter
/// placeholder.
fn default_templates() -> Vec<String> {
    [
        "Automated check-in #{} 🤖",
        "Still watching this thread 👀",
        "Regular scheduled update 📡",
        "All systems operational ✅",
        "Keeping the thread active 🔄",
        "Sparkle sparkle ✨",
        "Status report, nothing to report 🛰️",
        "Hello from the messenger 👋",
    ]
    .map(String::from)
    .to_vec()
}
