use reqwest::StatusCode;
use std::fmt;

/// Sum type representing every possible unexceptional fail state.
pub enum DiscordError {
    /// The request never got a response, e.g. connection refused or DNS
    /// failure.
    APIRequestFailed(reqwest::Error),
    /// The API answered with a status we don't handle, body attached for
    /// diagnosis.
    UnexpectedStatus { status: StatusCode, body: String },
    /// The API throttled us. The advised wait has already been served by the
    /// time this is returned; the send is still considered failed.
    RateLimited { retry_after_secs: f64 },
}

impl From<reqwest::Error> for DiscordError {
    fn from(e: reqwest::Error) -> Self {
        DiscordError::APIRequestFailed(e)
    }
}

impl fmt::Display for DiscordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = match self {
            DiscordError::APIRequestFailed(e) => format!("Discord API request failed: {:?}", e),
            DiscordError::UnexpectedStatus { status, body } => {
                format!("Discord API returned status {}: {}", status, body)
            }
            DiscordError::RateLimited { retry_after_secs } => {
                format!("Rate limited, advised to retry after {}s", retry_after_secs)
            }
        };

        write!(f, "{}", x)
    }
}
