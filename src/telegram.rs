use anyhow::{Context, Result, bail};
use reqwest::{IntoUrl, Url, blocking::Client};
use serde::{Deserialize, Serialize};

use crate::poller::Notify;

pub const DEFAULT_API_URL: &str = "https://api.telegram.org/";

#[derive(Debug, Clone)]
pub struct TelegramClient {
    http_client: Client,
    url: Url,
    chat_id: String,
}

#[derive(Debug, Clone, Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
struct BotApiResponse {
    ok: bool,
    description: Option<String>,
}

impl TelegramClient {
    pub fn new(api_url: impl IntoUrl, token: &str, chat_id: String) -> Result<Self> {
        let api_url = api_url.into_url().context("Invalid Telegram API URL")?;
        let base = api_url.as_str().trim_end_matches('/');
        let url = Url::parse(&format!("{base}/bot{token}/sendMessage"))
            .context("Could not build Telegram sendMessage URL")?;
        let http_client = Client::new();
        Ok(Self {
            http_client,
            url,
            chat_id,
        })
    }

    /// Sends a plain text message to the configured chat.
    pub fn send_message(&self, text: &str) -> Result<()> {
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };
        let resp = self
            .http_client
            .post(self.url.clone())
            .json(&body)
            .send()
            .map_err(reqwest::Error::without_url)
            .context("Could not reach Telegram")?;
        let status = resp.status();
        let answer: BotApiResponse = resp
            .json()
            .map_err(reqwest::Error::without_url)
            .with_context(|| format!("Unreadable Telegram response with status {status}"))?;

        if !answer.ok {
            let reason = answer.description.as_deref().unwrap_or("<unknown>");
            bail!("Telegram rejected the message with status {status}: {reason}");
        }
        Ok(())
    }
}

impl Notify for TelegramClient {
    fn notify(&mut self, message: &str) {
        match self.send_message(message) {
            Ok(()) => log::debug!("Bot sent a message to the Telegram chat"),
            Err(e) => log::error!("Failed to send Telegram message: {e:#}"),
        }
    }
}
