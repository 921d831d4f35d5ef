//! Read metadata about Discord channels and threads.

use super::{api::DiscordClient, error::DiscordError};
use reqwest::StatusCode;
use serde::Deserialize;
use std::fmt;

/// Threads are addressed by the same snowflake IDs as the channels they live
/// in. The ID can be found in the UI via "Copy Thread ID" with developer mode
/// enabled.
#[derive(Clone, PartialEq, Eq)]
pub struct ThreadId(pub String);

/// Format without the surrounding newtype wrapper.
///
/// ```
/// let x = ThreadId("1234567890".into());
/// assert_eq!(format!("{}", x), "1234567890");
/// ```
impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The metadata we care about from a channel object.
///
/// <https://discord.com/developers/docs/resources/channel#channel-object>
#[derive(Deserialize)]
pub struct ThreadInfo {
    pub name: Option<String>,
    pub guild_id: Option<String>,
}

impl DiscordClient {
    /// Fetch metadata for a thread, doubling as a credential and access
    /// check: a request that comes back `200` proves both that the token is
    /// accepted and that the thread is visible to it.
    pub async fn get_thread_info(&self, thread: &ThreadId) -> Result<ThreadInfo, DiscordError> {
        let res = self.get(format!("/channels/{}", thread)).send().await?;

        match res.status() {
            StatusCode::OK => Ok(res.json().await?),
            status => Err(DiscordError::UnexpectedStatus {
                status,
                body: res.text().await?,
            }),
        }
    }
}
