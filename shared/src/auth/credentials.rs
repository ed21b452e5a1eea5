use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use thiserror::Error;

/// Storage key of the credential record.
pub const SESSION_KEY: &str = "mykugy.session";

/// Bearer token and email issued by the OAuth callback.
///
/// Always stored and loaded as one record; a record missing either half is treated
/// as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCredentials {
    pub token: String,
    pub email: String,
}

impl SessionCredentials {
    pub fn is_complete(&self) -> bool {
        !self.token.is_empty() && !self.email.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage write failed: {0}")]
    Write(String),

    #[error("stored credentials did not read back")]
    Verification,

    #[error("credential record encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Persistence of the credential record.
pub trait CredentialStore {
    fn save(&self, credentials: &SessionCredentials) -> Result<(), StorageError>;

    /// `Ok(None)` when nothing usable is stored.
    fn load(&self) -> Result<Option<SessionCredentials>, StorageError>;
}

pub fn encode_record(credentials: &SessionCredentials) -> Result<String, StorageError> {
    Ok(serde_json::to_string(credentials)?)
}

/// Decode a stored record. Unparsable or half-empty records decode to `None`.
pub fn decode_record(raw: &str) -> Option<SessionCredentials> {
    serde_json::from_str::<SessionCredentials>(raw)
        .ok()
        .filter(SessionCredentials::is_complete)
}

/// Save `credentials` and confirm the same record reads back.
///
/// A record with an empty half is written but never reads back, so it fails
/// verification.
pub fn persist_and_verify<S: CredentialStore + ?Sized>(
    store: &S,
    credentials: &SessionCredentials,
) -> Result<(), StorageError> {
    store.save(credentials)?;
    match store.load()? {
        Some(stored) if stored == *credentials => Ok(()),
        _ => Err(StorageError::Verification),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum WriteMode {
    #[default]
    Keep,
    Fail,
    Discard,
}

/// In-memory [`CredentialStore`] holding the encoded record like browser storage
/// would.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
    writes: RefCell<usize>,
    mode: WriteMode,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes error out, like a full or blocked storage area.
    pub fn failing() -> Self {
        Self { mode: WriteMode::Fail, ..Self::default() }
    }

    /// A store that accepts writes but keeps nothing.
    pub fn discarding() -> Self {
        Self { mode: WriteMode::Discard, ..Self::default() }
    }

    /// Raw stored record, if any.
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Number of `save` calls, successful or not.
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl CredentialStore for MemoryStore {
    fn save(&self, credentials: &SessionCredentials) -> Result<(), StorageError> {
        *self.writes.borrow_mut() += 1;
        match self.mode {
            WriteMode::Keep => {
                *self.slot.borrow_mut() = Some(encode_record(credentials)?);
                Ok(())
            }
            WriteMode::Fail => Err(StorageError::Write("quota exceeded".to_string())),
            WriteMode::Discard => Ok(()),
        }
    }

    fn load(&self) -> Result<Option<SessionCredentials>, StorageError> {
        Ok(self.slot.borrow().as_deref().and_then(decode_record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> SessionCredentials {
        SessionCredentials { token: "abc".to_string(), email: "a@b.com".to_string() }
    }

    #[test]
    fn test_record_is_single_json_object() {
        let raw = encode_record(&creds()).unwrap();
        assert_eq!(raw, r#"{"token":"abc","email":"a@b.com"}"#);
        assert_eq!(decode_record(&raw), Some(creds()));
    }

    #[test]
    fn test_half_record_decodes_to_none() {
        assert_eq!(decode_record(r#"{"token":"abc","email":""}"#), None);
        assert_eq!(decode_record(r#"{"token":"abc"}"#), None);
        assert_eq!(decode_record("not json"), None);
    }

    #[test]
    fn test_persist_and_verify_ok() {
        let store = MemoryStore::new();
        persist_and_verify(&store, &creds()).unwrap();
        assert_eq!(store.load().unwrap(), Some(creds()));
        assert_eq!(store.write_count(), 1);
    }

    #[test]
    fn test_persist_and_verify_write_error() {
        let store = MemoryStore::failing();
        let err = persist_and_verify(&store, &creds()).unwrap_err();
        assert!(matches!(err, StorageError::Write(_)));
        assert_eq!(store.raw(), None);
    }

    #[test]
    fn test_persist_and_verify_detects_lost_write() {
        let store = MemoryStore::discarding();
        let err = persist_and_verify(&store, &creds()).unwrap_err();
        assert!(matches!(err, StorageError::Verification));
    }

    #[test]
    fn test_persist_and_verify_rejects_half_empty_record() {
        let store = MemoryStore::new();
        let half = SessionCredentials { token: String::new(), email: "a@b.com".to_string() };
        let err = persist_and_verify(&store, &half).unwrap_err();
        assert!(matches!(err, StorageError::Verification));
        assert_eq!(store.write_count(), 1);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_overwrites_previous_record() {
        let store = MemoryStore::new();
        persist_and_verify(&store, &creds()).unwrap();
        let next = SessionCredentials { token: "xyz".to_string(), email: "c@d.com".to_string() };
        persist_and_verify(&store, &next).unwrap();
        assert_eq!(store.load().unwrap(), Some(next));
    }
}
