use anyhow::{Context, Result};
use reqwest::blocking::{Client, Response};
use reqwest::header::AUTHORIZATION;
use reqwest::{IntoUrl, StatusCode, Url};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::error::CycleError;
use crate::json_util::snippet;
use crate::poller::FetchStatuses;

pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

pub struct PracticumClient {
    http_client: Client,
    token: String,
    endpoint: Url,
}

impl PracticumClient {
    pub fn new(endpoint: impl IntoUrl, token: String) -> Result<Self> {
        let endpoint = endpoint.into_url().context("Invalid homework API endpoint")?;
        let http_client = Client::builder()
            .build()
            .context("Could not build HTTP client")?;
        Ok(Self {
            http_client,
            token,
            endpoint,
        })
    }

    /// Asks for every homework whose status changed since `from_date` (Unix seconds).
    ///
    /// # Errors
    /// * [`CycleError::Transport`] if the request could not be completed
    /// * [`CycleError::Status`] if the API did not answer with 200
    /// * [`CycleError::Decode`] if the 200 body is not JSON
    pub fn homework_statuses(&self, from_date: i64) -> Result<JsonValue, CycleError> {
        log::debug!("Requesting homework statuses from {} since {from_date}", self.endpoint);
        let resp: Response = self
            .http_client
            .get(self.endpoint.clone())
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .map_err(CycleError::Transport)?;
        let text: String = handle_response(resp)?;
        serde_json::from_str(&text)
            .map_err(|e| CycleError::Decode(format!("{e} | {}", snippet(&text))))
    }
}

impl FetchStatuses for PracticumClient {
    fn fetch_statuses(&mut self, from_date: i64) -> Result<JsonValue, CycleError> {
        self.homework_statuses(from_date)
    }
}

/// Error body the API sends along with 4xx responses
#[derive(Deserialize)]
struct ErrorResponse {
    message: Option<String>,
    code: Option<String>,
}

fn handle_response(response: Response) -> Result<String, CycleError> {
    let status: StatusCode = response.status();
    let text: String = response.text().map_err(CycleError::Transport)?;

    if status == StatusCode::OK {
        return Ok(text);
    }

    let message: String = match serde_json::from_str::<ErrorResponse>(&text) {
        Ok(json) => extract_error(json).unwrap_or_else(|| snippet(&text)),
        Err(err) => {
            log::warn!("Could not parse error json response: {err}");
            snippet(&text)
        }
    };

    Err(CycleError::Status { status, message })
}

fn extract_error(err: ErrorResponse) -> Option<String> {
    err.message
        .filter(|m| !m.is_empty())
        .or_else(|| err.code.filter(|c| !c.is_empty()))
}
