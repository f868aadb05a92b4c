use std::{thread::sleep, time::Duration};

use serde_json::Value as JsonValue;

use crate::{error::CycleError, status::format_status, validate::extract_homeworks};

pub const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);

const NO_HOMEWORK: &str = "No homework";

/// Source of raw homework API responses.
pub trait FetchStatuses {
    fn fetch_statuses(&mut self, from_date: i64) -> Result<JsonValue, CycleError>;
}

/// Delivers a message somewhere a human will read it.
///
/// Implementations handle their own failures; nothing is reported back.
pub trait Notify {
    fn notify(&mut self, message: &str);
}

/// What has already been told to the chat. Lives only as long as the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PollState {
    pub previous_homework_message: String,
    pub last_error_message: String,
}

pub struct Poller<F, N> {
    fetcher: F,
    notifier: N,
    /// Never advanced, so every cycle asks for the same window.
    from_date: i64,
    period: Duration,
    state: PollState,
}

impl<F: FetchStatuses, N: Notify> Poller<F, N> {
    #[must_use]
    pub fn new(fetcher: F, notifier: N, from_date: i64, period: Duration) -> Self {
        Self {
            fetcher,
            notifier,
            from_date,
            period,
            state: PollState::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &PollState {
        &self.state
    }

    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Polls forever, sleeping for the retry period after every cycle.
    pub fn run(&mut self) -> ! {
        log::info!(
            "Polling every {:?} for homework changes since {}",
            self.period,
            self.from_date,
        );
        loop {
            self.cycle();
            sleep(self.period);
        }
    }

    /// One fetch-validate-format-notify pass. Failures are reported, never returned.
    pub fn cycle(&mut self) {
        log::debug!("Cycle");
        match self.latest_status() {
            Ok(status) => {
                if status == self.state.previous_homework_message {
                    log::debug!("No status change");
                    return;
                }
                self.notifier
                    .notify(&format!("New homework status: {status}"));
                self.state.previous_homework_message = status;
            }
            Err(e) => {
                let message = format!("Program failure: {e}");
                log::error!("{message}");
                if message != self.state.last_error_message {
                    self.notifier.notify(&message);
                    self.state.last_error_message = message;
                }
            }
        }
    }

    fn latest_status(&mut self) -> Result<String, CycleError> {
        let response: JsonValue = self.fetcher.fetch_statuses(self.from_date)?;
        let homeworks: &[JsonValue] = extract_homeworks(&response)?;
        // The API lists the most recent submission first.
        let Some(latest) = homeworks.first() else {
            return Ok(NO_HOMEWORK.to_string());
        };
        Ok(format_status(latest)?)
    }
}
