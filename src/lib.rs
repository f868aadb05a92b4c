#![deny(unexpected_cfgs)]
//
#![warn(clippy::cargo)]
#![warn(clippy::nursery)]
//
// https://github.com/rust-lang/rust-clippy/issues/16440
#![allow(clippy::multiple_crate_versions)]

mod error;
mod json_util;
#[cfg(test)]
mod test_server;

pub mod poller;
pub mod practicum;
pub mod status;
pub mod telegram;
pub mod validate;

pub use error::{CycleError, FormatError, ValidationError};
pub use poller::{PollState, Poller};
pub use status::{Verdict, format_status};
pub use validate::extract_homeworks;

/// The three secrets the bot needs before it may start polling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}
