//! The one-shot run: validate, check thread access, send a single message.
//!
//! There is deliberately no loop here. The contract with the external
//! scheduler is that each invocation posts at most one message and exits;
//! the scheduler owns repetition and all retry timing. See the README.

use crate::{
    config::{Config, THREAD_VAR, TOKEN_VAR},
    discord::api::DiscordClient,
    picker::MessagePicker,
};
use std::process::ExitCode;
use tracing::{error, info, warn};

/// How a run ended, from the calling scheduler's point of view.
pub enum RunOutcome {
    /// The message went out.
    Sent,
    /// Nothing was sent, but deliberately so: unconfigured credentials or an
    /// inaccessible thread. Re-invoking without operator action would fail
    /// the same way, so the scheduler isn't signalled.
    Skipped,
    /// The send was attempted and failed. A non-zero exit lets the scheduler
    /// flag the run.
    Failed,
}

impl RunOutcome {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RunOutcome::Sent | RunOutcome::Skipped => ExitCode::SUCCESS,
            RunOutcome::Failed => ExitCode::FAILURE,
        }
    }
}

/// Perform one full run against the API at `api_base`.
pub async fn run(config: &Config, api_base: String) -> RunOutcome {
    info!("Thread ID: {}", config.thread_id);
    info!("Scheduler interval: {}s (display only)", config.interval_secs);
    info!("Available messages: {}", config.templates.len());
    warn!("Automating a user token violates Discord's Terms of Service");

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        log_config_help();
        return RunOutcome::Skipped;
    }

    let client = DiscordClient::new(api_base, config.token.clone());

    info!("Testing connection to Discord...");
    let thread = match client.get_thread_info(&config.thread_id).await {
        Ok(x) => x,
        Err(e) => {
            error!("Cannot access thread, check the token and thread ID: {}", e);
            return RunOutcome::Skipped;
        }
    };
    info!(
        "Connected to thread: {} (guild: {})",
        thread.name.as_deref().unwrap_or("unknown"),
        thread.guild_id.as_deref().unwrap_or("unknown"),
    );

    let mut picker = MessagePicker::new(config.templates.clone());
    let message = picker.next_message();

    match client.send_message(&config.thread_id, &message).await {
        Ok(()) => {
            info!("Message sent: {}", preview(&message));
            info!("Messages sent this run: {}", picker.count());
            RunOutcome::Sent
        }
        Err(e) => {
            error!("Failed to send message: {}", e);
            RunOutcome::Failed
        }
    }
}

/// What an operator needs to do when [Config::validate] fails, kept short
/// enough to read in a scheduler's log viewer.
fn log_config_help() {
    error!("Set {} to your Discord user token", TOKEN_VAR);
    error!("Set {} to the target thread ID (right-click the thread with developer mode on)", THREAD_VAR);
    error!("Both belong in the scheduler's secret store, or a local .env");
}

/// Success logs carry only the head of the message.
fn preview(message: &str) -> &str {
    match message.char_indices().nth(50) {
        Some((i, _)) => &message[..i],
        None => message,
    }
}
