use thiserror::Error;

use super::credentials::{SessionCredentials, StorageError};
use crate::i18n::Language;
use crate::url::parse_query;

#[derive(Debug, Error)]
pub enum CallbackError {
    #[error("callback query has no `{0}`")]
    MissingParam(&'static str),

    #[error("callback `{0}` is not a single text value")]
    MalformedParam(&'static str),

    #[error("failed to store auth data: {0}")]
    Storage(#[from] StorageError),
}

impl CallbackError {
    /// Alert shown to the user before going back to the landing screen.
    pub fn alert(&self, lang: Language) -> &'static str {
        match self {
            CallbackError::Storage(_) => lang.alerts().login_failed,
            CallbackError::MissingParam(_) | CallbackError::MalformedParam(_) => {
                lang.alerts().invalid_login
            }
        }
    }
}

/// `token` and `email` carried by the OAuth redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackParams {
    pub token: String,
    pub email: String,
}

impl CallbackParams {
    /// Validate a raw callback query string.
    ///
    /// Each parameter must appear exactly once with a decodable value. A repeated
    /// key is rejected rather than picking one of the values. An empty value passes
    /// here and fails later, when the stored record reads back incomplete.
    pub fn from_query(query: &str) -> Result<Self, CallbackError> {
        let pairs = parse_query(query);
        let token = single_text(&pairs, "token")?;
        let email = single_text(&pairs, "email")?;
        Ok(Self { token, email })
    }

    pub fn into_credentials(self) -> SessionCredentials {
        SessionCredentials { token: self.token, email: self.email }
    }
}

fn single_text(
    pairs: &[(String, Option<String>)],
    name: &'static str,
) -> Result<String, CallbackError> {
    let mut values = pairs.iter().filter(|(key, _)| key == name).map(|(_, value)| value);

    let value = values.next().ok_or(CallbackError::MissingParam(name))?;
    if values.next().is_some() {
        return Err(CallbackError::MalformedParam(name));
    }

    value.clone().ok_or(CallbackError::MalformedParam(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_query() {
        let params = CallbackParams::from_query("?token=abc&email=a%40b.com").unwrap();
        assert_eq!(params.token, "abc");
        assert_eq!(params.email, "a@b.com");
    }

    #[test]
    fn test_order_and_extra_params_do_not_matter() {
        let params = CallbackParams::from_query("email=a@b.com&state=x&token=abc").unwrap();
        assert_eq!(params.into_credentials().token, "abc");
    }

    #[test]
    fn test_missing_email() {
        let err = CallbackParams::from_query("?token=abc").unwrap_err();
        assert!(matches!(err, CallbackError::MissingParam("email")));
    }

    #[test]
    fn test_missing_token() {
        let err = CallbackParams::from_query("?email=a@b.com").unwrap_err();
        assert!(matches!(err, CallbackError::MissingParam("token")));
    }

    #[test]
    fn test_empty_value_is_still_text() {
        let params = CallbackParams::from_query("?token=&email=a@b.com").unwrap();
        assert_eq!(params.token, "");
        assert!(!params.into_credentials().is_complete());
    }

    #[test]
    fn test_repeated_param_is_malformed() {
        let err = CallbackParams::from_query("?token=a&token=b&email=a@b.com").unwrap_err();
        assert!(matches!(err, CallbackError::MalformedParam("token")));
    }

    #[test]
    fn test_undecodable_param_is_malformed() {
        let err = CallbackParams::from_query("?token=abc&email=%FF").unwrap_err();
        assert!(matches!(err, CallbackError::MalformedParam("email")));
    }

    #[test]
    fn test_alert_depends_on_error_kind() {
        let invalid = CallbackError::MissingParam("email");
        assert_eq!(invalid.alert(Language::En), "Invalid login data. Please try again.");

        let storage = CallbackError::from(StorageError::Verification);
        assert_eq!(storage.alert(Language::En), "Error during login. Please try again.");
        assert_eq!(
            storage.alert(Language::Jp),
            "ログイン中にエラーが発生しました。もう一度お試しください。"
        );
    }
}
