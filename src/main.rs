mod logging;

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use homework_bot::{
    Credentials, Poller, poller,
    practicum::{self, PracticumClient},
    telegram::{self, TelegramClient},
    validate,
};
use reqwest::Url;

/// Practicum Homework Status Bot
#[derive(Parser)]
struct Args {
    /// OAuth token for the Practicum homework API
    #[arg(long, env = "SECRET_PRACTICUM_TOKEN", hide_env_values = true)]
    practicum_token: Option<String>,

    /// Token of the Telegram bot that sends the notifications
    #[arg(long, env = "SECRET_TELEGRAM_TOKEN", hide_env_values = true)]
    telegram_token: Option<String>,

    /// The Telegram chat the notifications should be sent to
    #[arg(long, env = "SECRET_TELEGRAM_CHAT_ID", hide_env_values = true)]
    telegram_chat_id: Option<String>,

    /// Homework status endpoint
    #[arg(long, env = "PRACTICUM_ENDPOINT", default_value = practicum::DEFAULT_ENDPOINT)]
    endpoint: Url,

    /// Base URL of the Telegram Bot API
    #[arg(long, env = "TELEGRAM_API_URL", default_value = telegram::DEFAULT_API_URL)]
    telegram_api_url: Url,

    /// Seconds to wait between two polls
    #[arg(
        long,
        env = "RETRY_PERIOD",
        default_value_t = poller::DEFAULT_RETRY_PERIOD.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..),
    )]
    retry_period: u64,

    /// Unix timestamp to query homework changes from (defaults to now)
    #[arg(long, env = "FROM_DATE")]
    from_date: Option<i64>,
}

fn main() -> Result<()> {
    // A missing .env file is fine; the variables may come from the real environment.
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    logging::init();

    log::debug!("Bot started");

    let credentials = Credentials {
        practicum_token: args.practicum_token.unwrap_or_default(),
        telegram_token: args.telegram_token.unwrap_or_default(),
        telegram_chat_id: args.telegram_chat_id.unwrap_or_default(),
    };
    if let Err(e) = validate::credentials(&credentials) {
        log::error!("CRITICAL: {e}. Shutting down.");
        return Err(e.context("Cannot start without credentials"));
    }

    let practicum = PracticumClient::new(args.endpoint, credentials.practicum_token)
        .context("Could not create homework API client")?;
    let telegram = TelegramClient::new(
        args.telegram_api_url,
        &credentials.telegram_token,
        credentials.telegram_chat_id,
    )
    .context("Could not create Telegram client")?;

    let from_date = args.from_date.unwrap_or_else(|| Utc::now().timestamp());
    let period = Duration::from_secs(args.retry_period);

    log::info!("Initialization succeeded!");

    let mut poller = Poller::new(practicum, telegram, from_date, period);
    poller.run()
}
