//! The winged sandals: carry one message, then rest.
//!
//! Posts a single message to a Discord thread and exits; an external
//! scheduler re-invokes the process for each subsequent message. For the
//! scheduler contract and setup see the README.

use config::Config;
use discord::api::API_BASE;
use dotenvy::dotenv;
use std::process::ExitCode;
use tracing::{error, warn};

mod config;
mod discord;
mod logging;
mod picker;
mod run;

/// Application entrypoint. Initialises tracing, reads configuration from the
/// environment, and performs exactly one run.
#[tokio::main]
async fn main() -> ExitCode {
    let _guards = logging::init();

    let has_dotenv = dotenv().is_ok();
    if !has_dotenv {
        warn!("No .env found");
    }

    let config = match Config::from_env() {
        Ok(x) => x,
        Err(e) => {
            error!("{}", e);
            error!("Set it in the scheduler's secret store for this repository");
            return ExitCode::FAILURE;
        }
    };

    run::run(&config, API_BASE.into()).await.exit_code()
}
