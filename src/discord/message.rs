//! Send plaintext messages to any given Discord thread.

use super::{api::DiscordClient, channel::ThreadId, error::DiscordError};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// The wait served when a rate-limit response carries no usable
/// `retry_after`.
const DEFAULT_RETRY_AFTER_SECS: f64 = 60.0;

/// <https://discord.com/developers/docs/resources/channel#create-message-jsonform-params>
#[derive(Serialize)]
struct MessageRequest<'a> {
    content: &'a str,
}

/// <https://discord.com/developers/docs/topics/rate-limits#exceeding-a-rate-limit-rate-limit-response-structure>
#[derive(Deserialize)]
struct RateLimitResponse {
    /// Seconds to wait, fractional.
    retry_after: f64,
}

impl DiscordClient {
    /// Post one message in a thread.
    ///
    /// On `429` the advised `retry_after` wait is served before returning,
    /// but the send is still reported as failed and is not retried here;
    /// whether to try again is the calling scheduler's decision.
    pub async fn send_message(
        &self,
        thread: &ThreadId,
        content: &str,
    ) -> Result<(), DiscordError> {
        let res = self
            .post(format!("/channels/{}/messages", thread))
            .json(&MessageRequest { content })
            .send()
            .await?;

        match res.status() {
            StatusCode::OK => Ok(()),
            StatusCode::TOO_MANY_REQUESTS => {
                // The body is server-controlled: a negative, non-finite, or
                // absurdly large value must degrade to the default wait, not
                // panic the duration conversion.
                let retry_after_secs = res
                    .json::<RateLimitResponse>()
                    .await
                    .ok()
                    .map(|r| r.retry_after)
                    .filter(|&s| Duration::try_from_secs_f64(s).is_ok())
                    .unwrap_or(DEFAULT_RETRY_AFTER_SECS);

                warn!("Rate limited, waiting {}s before giving up", retry_after_secs);
                tokio::time::sleep(Duration::from_secs_f64(retry_after_secs)).await;

                Err(DiscordError::RateLimited { retry_after_secs })
            }
            status => Err(DiscordError::UnexpectedStatus {
                status,
                body: res.text().await?,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discord::auth::UserToken;
    use tokio::time::Instant;

    fn client(base_url: String) -> DiscordClient {
        DiscordClient::new(base_url, UserToken("token".to_owned()))
    }

    fn thread() -> ThreadId {
        ThreadId("123".to_owned())
    }

    #[tokio::test]
    async fn test_send_ok() {
        let mut srv = mockito::Server::new_async().await;

        let send_mock = srv
            .mock("POST", "/channels/123/messages")
            .match_header("authorization", "token")
            .match_body(r#"{"content":"hello"}"#)
            .with_body("{}")
            .create_async()
            .await;

        let res = client(srv.url()).send_message(&thread(), "hello").await;

        send_mock.assert_async().await;
        assert!(res.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_rate_limited_waits_then_fails() {
        let mut srv = mockito::Server::new_async().await;

        let send_mock = srv
            .mock("POST", "/channels/123/messages")
            .with_status(429)
            .with_body(r#"{"message": "You are being rate limited.", "retry_after": 5.0, "global": false}"#)
            .create_async()
            .await;

        let before = Instant::now();
        let res = client(srv.url()).send_message(&thread(), "hello").await;

        send_mock.assert_async().await;
        assert!(before.elapsed() >= Duration::from_secs(5));
        assert!(matches!(
            res,
            Err(DiscordError::RateLimited { retry_after_secs }) if retry_after_secs == 5.0
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_rate_limited_bad_body_defaults_wait() {
        let mut srv = mockito::Server::new_async().await;

        let send_mock = srv
            .mock("POST", "/channels/123/messages")
            .with_status(429)
            .with_body("not json")
            .create_async()
            .await;

        let before = Instant::now();
        let res = client(srv.url()).send_message(&thread(), "hello").await;

        send_mock.assert_async().await;
        assert!(before.elapsed() >= Duration::from_secs(60));
        assert!(matches!(
            res,
            Err(DiscordError::RateLimited { retry_after_secs }) if retry_after_secs == 60.0
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_rate_limited_negative_retry_after_defaults_wait() {
        let mut srv = mockito::Server::new_async().await;

        let send_mock = srv
            .mock("POST", "/channels/123/messages")
            .with_status(429)
            .with_body(r#"{"message": "You are being rate limited.", "retry_after": -1.0, "global": false}"#)
            .create_async()
            .await;

        let before = Instant::now();
        let res = client(srv.url()).send_message(&thread(), "hello").await;

        send_mock.assert_async().await;
        assert!(before.elapsed() >= Duration::from_secs(60));
        assert!(matches!(
            res,
            Err(DiscordError::RateLimited { retry_after_secs }) if retry_after_secs == 60.0
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_rate_limited_oversized_retry_after_defaults_wait() {
        let mut srv = mockito::Server::new_async().await;

        let send_mock = srv
            .mock("POST", "/channels/123/messages")
            .with_status(429)
            .with_body(r#"{"retry_after": 1e300, "global": false}"#)
            .create_async()
            .await;

        let before = Instant::now();
        let res = client(srv.url()).send_message(&thread(), "hello").await;

        send_mock.assert_async().await;
        assert!(before.elapsed() >= Duration::from_secs(60));
        assert!(matches!(
            res,
            Err(DiscordError::RateLimited { retry_after_secs }) if retry_after_secs == 60.0
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_other_status_fails_without_wait() {
        let mut srv = mockito::Server::new_async().await;

        let send_mock = srv
            .mock("POST", "/channels/123/messages")
            .with_status(403)
            .with_body(r#"{"message": "Missing Access", "code": 50001}"#)
            .create_async()
            .await;

        let before = Instant::now();
        let res = client(srv.url()).send_message(&thread(), "hello").await;

        send_mock.assert_async().await;
        assert!(before.elapsed() < Duration::from_secs(1));
        assert!(matches!(
            res,
            Err(DiscordError::UnexpectedStatus { status, .. }) if status == StatusCode::FORBIDDEN
        ));
    }
}
