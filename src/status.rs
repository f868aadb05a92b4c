use std::{fmt, str::FromStr};

use serde_json::Value as JsonValue;

use crate::{error::FormatError, json_util::non_empty_str};

/// The review outcomes the homework API knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Approved,
    Reviewing,
    Rejected,
}

impl Verdict {
    #[must_use]
    pub const fn phrase(self) -> &'static str {
        match self {
            Self::Approved => "The reviewer checked the work and liked everything. Hooray!",
            Self::Reviewing => "The reviewer has started reviewing the work.",
            Self::Rejected => "The reviewer checked the work and left some remarks.",
        }
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }
}

impl FromStr for Verdict {
    type Err = FormatError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "approved" => Ok(Self::Approved),
            "reviewing" => Ok(Self::Reviewing),
            "rejected" => Ok(Self::Rejected),
            other => Err(FormatError::UnknownVerdict(other.to_string())),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Turns a single homework record into the message sent to the chat.
///
/// # Errors
/// * `homework_name` is absent or empty
/// * `status` is absent or empty
/// * `status` is not one of the known [`Verdict`] codes
pub fn format_status(homework: &JsonValue) -> Result<String, FormatError> {
    let name = non_empty_str(homework, "homework_name").ok_or(FormatError::MissingName)?;
    let code = non_empty_str(homework, "status").ok_or(FormatError::MissingStatus)?;
    let verdict: Verdict = code.parse()?;
    Ok(format!(
        "Changed review status of \"{name}\". {}",
        verdict.phrase()
    ))
}
