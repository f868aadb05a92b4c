use anyhow::{Result, bail};
use serde_json::Value as JsonValue;

use crate::{Credentials, error::ValidationError, json_util::type_name};

const REQUIRED_KEYS: [&str; 2] = ["homeworks", "current_date"];

/// Checks the shape of a homework API response and returns its `homeworks` list.
///
/// The list is returned as-is and may be empty.
///
/// # Errors
/// * the response is not a JSON object
/// * `homeworks` or `current_date` is missing
/// * `homeworks` is not a list
pub fn extract_homeworks(response: &JsonValue) -> Result<&[JsonValue], ValidationError> {
    let Some(object) = response.as_object() else {
        return Err(ValidationError::NotAnObject(type_name(response)));
    };

    if let Some(key) = REQUIRED_KEYS.into_iter().find(|k| !object.contains_key(*k)) {
        return Err(ValidationError::MissingKey(key));
    }

    match &object["homeworks"] {
        JsonValue::Array(homeworks) => Ok(homeworks.as_slice()),
        other => Err(ValidationError::HomeworksNotAList(type_name(other))),
    }
}

/// Makes sure every secret is present. Their contents are not inspected.
pub fn credentials(credentials: &Credentials) -> Result<()> {
    let secrets = [
        ("SECRET_PRACTICUM_TOKEN", &credentials.practicum_token),
        ("SECRET_TELEGRAM_TOKEN", &credentials.telegram_token),
        ("SECRET_TELEGRAM_CHAT_ID", &credentials.telegram_chat_id),
    ];

    let missing: Vec<&str> = secrets
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

    if !missing.is_empty() {
        bail!(
            "Missing required environment variables: {}",
            missing.join(", ")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn creds(practicum: &str, telegram: &str, chat: &str) -> Credentials {
        Credentials {
            practicum_token: practicum.to_string(),
            telegram_token: telegram.to_string(),
            telegram_chat_id: chat.to_string(),
        }
    }

    #[test]
    fn returns_homeworks_unchanged() {
        let resp = json!({
            "homeworks": [{"homework_name": "hw1", "status": "approved"}],
            "current_date": 1_700_000_000,
        });
        let homeworks = extract_homeworks(&resp).unwrap();
        assert_eq!(homeworks, resp["homeworks"].as_array().unwrap().as_slice());
    }

    #[test]
    fn empty_list_is_fine() {
        let resp = json!({"homeworks": [], "current_date": 0});
        assert!(extract_homeworks(&resp).unwrap().is_empty());
    }

    #[test]
    fn extracting_rewrapped_output_is_idempotent() {
        let resp = json!({
            "homeworks": [{"homework_name": "a", "status": "rejected"}, {"x": 1}],
            "current_date": 5,
        });
        let first = extract_homeworks(&resp).unwrap().to_vec();
        let rewrapped = json!({"homeworks": first.clone(), "current_date": 5});
        let second = extract_homeworks(&rewrapped).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn non_object_is_a_type_error() {
        for resp in [json!([]), json!("homeworks"), json!(null), json!(42)] {
            assert!(matches!(
                extract_homeworks(&resp),
                Err(ValidationError::NotAnObject(_))
            ));
        }
    }

    #[test]
    fn missing_keys() {
        let resp = json!({"current_date": 0});
        assert_eq!(
            extract_homeworks(&resp),
            Err(ValidationError::MissingKey("homeworks"))
        );
        let resp = json!({"homeworks": []});
        assert_eq!(
            extract_homeworks(&resp),
            Err(ValidationError::MissingKey("current_date"))
        );
        assert!(matches!(
            extract_homeworks(&json!({})),
            Err(ValidationError::MissingKey(_))
        ));
    }

    #[test]
    fn homeworks_must_be_a_list() {
        for value in [json!({}), json!("hw"), json!(null), json!(1)] {
            let resp = json!({"homeworks": value, "current_date": 0});
            assert!(matches!(
                extract_homeworks(&resp),
                Err(ValidationError::HomeworksNotAList(_))
            ));
        }
    }

    #[test]
    fn complete_credentials_pass() {
        assert!(credentials(&creds("a", "b", "c")).is_ok());
    }

    #[test]
    fn any_missing_credential_fails() {
        for c in [
            creds("", "b", "c"),
            creds("a", "", "c"),
            creds("a", "b", ""),
            creds("", "", ""),
            creds("a", "  ", "c"),
        ] {
            assert!(credentials(&c).is_err(), "{c:?} should be rejected");
        }
    }

    #[test]
    fn error_names_missing_variables() {
        let err = credentials(&creds("a", "", "")).unwrap_err().to_string();
        assert!(err.contains("SECRET_TELEGRAM_TOKEN"));
        assert!(err.contains("SECRET_TELEGRAM_CHAT_ID"));
        assert!(!err.contains("SECRET_PRACTICUM_TOKEN"));
    }
}
