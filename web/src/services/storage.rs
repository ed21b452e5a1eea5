//! Browser storage adapter for the credential record

use shared::auth::{decode_record, encode_record, CredentialStore, SessionCredentials, StorageError, SESSION_KEY};
use web_sys::Storage;

/// [`CredentialStore`] over `window.sessionStorage`.
///
/// The record is written with a single `setItem`, so token and email share one
/// lifetime: the browser tab session.
pub struct BrowserSessionStore {
    storage: Option<Storage>,
}

impl BrowserSessionStore {
    /// Bind to the session storage of the current window. A missing or blocked
    /// storage area is reported on first use rather than here.
    pub fn session() -> Self {
        let storage = web_sys::window().and_then(|w| match w.session_storage() {
            Ok(storage) => storage,
            Err(e) => {
                log::warn!("sessionStorage blocked: {:?}", e);
                None
            }
        });
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StorageError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("sessionStorage is not available".to_string()))
    }
}

impl CredentialStore for BrowserSessionStore {
    fn save(&self, credentials: &SessionCredentials) -> Result<(), StorageError> {
        let raw = encode_record(credentials)?;
        self.storage()?
            .set_item(SESSION_KEY, &raw)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn load(&self) -> Result<Option<SessionCredentials>, StorageError> {
        let raw = self
            .storage()?
            .get_item(SESSION_KEY)
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?;
        Ok(raw.as_deref().and_then(decode_record))
    }
}
