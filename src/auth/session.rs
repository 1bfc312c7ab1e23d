use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::credentials::{CredentialStore, CredentialStoreError};

/// The bearer credential as persisted by the login flow: an opaque token
/// plus its absolute expiry in epoch milliseconds.
///
/// The serialized form is shared with the web storefront, which writes the
/// same record into browser storage, so the field names are fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCredential {
    pub token: String,
    #[serde(rename = "expiresAt")]
    pub expires_at: i64,
}

impl StoredCredential {
    pub fn new(token: impl Into<String>, expires_at: i64) -> Self {
        Self {
            token: token.into(),
            expires_at,
        }
    }

    /// Build a credential expiring `ttl` from now. An expiry past the
    /// representable range saturates to the far future.
    pub fn expiring_in(token: impl Into<String>, ttl: Duration) -> Self {
        let now_ms = Utc::now().timestamp_millis();
        Self::new(token, now_ms.saturating_add(ttl.num_milliseconds()))
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now().timestamp_millis())
    }

    /// Expiry check against an explicit clock. A credential is already
    /// expired at the exact expiry instant.
    pub fn is_expired_at(&self, now_ms: i64) -> bool {
        now_ms >= self.expires_at
    }

    /// The expiry instant, when it is representable.
    pub fn expires_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.expires_at)
    }
}

/// Shared handle to the persisted credential.
///
/// Every outgoing request resolves its bearer token through this type, and
/// the read-check-evict sequence runs under one lock so two in-flight
/// requests cannot both observe a credential that is due for eviction. The
/// lock is never held across an await point; callers get an owned token.
///
/// Cloning is cheap and clones share the underlying store.
#[derive(Clone)]
pub struct Session {
    store: Arc<Mutex<dyn CredentialStore + Send>>,
}

impl Session {
    pub fn new<S>(store: S) -> Self
    where
        S: CredentialStore + Send + 'static,
    {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Read the stored credential, evicting it when expired or unreadable.
    ///
    /// Expired and malformed records get the same treatment: clear storage,
    /// report nothing, and let the call proceed unauthenticated. Neither
    /// condition is an error to the caller.
    pub fn credential(&self) -> Option<StoredCredential> {
        let mut store = self.lock();
        match store.get() {
            Ok(Some(credential)) => {
                if credential.is_expired() {
                    debug!("stored credential expired; evicting");
                    if let Err(error) = store.delete() {
                        warn!(error = %error, "failed to evict expired credential");
                    }
                    None
                } else {
                    Some(credential)
                }
            }
            Ok(None) => None,
            Err(error) => {
                warn!(error = %error, "stored credential unreadable; evicting");
                if let Err(error) = store.delete() {
                    warn!(error = %error, "failed to evict malformed credential");
                }
                None
            }
        }
    }

    /// The bearer token to attach to the next request, if any.
    pub fn bearer_token(&self) -> Option<String> {
        self.credential().map(|credential| credential.token)
    }

    /// Startup readiness check: true when a usable credential is stored.
    /// A stale credential found here is evicted before the first request.
    pub fn is_valid(&self) -> bool {
        self.credential().is_some()
    }

    /// Persist a freshly issued credential. Called by the login flow only;
    /// request dispatch never writes.
    pub fn establish(&self, credential: &StoredCredential) -> Result<(), CredentialStoreError> {
        self.lock().set(credential)
    }

    /// Drop the stored credential (logout). Clearing an empty store is a
    /// no-op, not an error.
    pub fn clear(&self) -> Result<(), CredentialStoreError> {
        self.lock().delete()
    }

    fn lock(&self) -> MutexGuard<'_, dyn CredentialStore + Send + 'static> {
        // A poisoned lock means another caller panicked mid-check; the
        // store itself is still consistent, so keep going.
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::super::credentials::MemoryCredentialStore;
    use super::*;

    #[test]
    fn test_credential_serializes_to_shared_layout() {
        let credential = StoredCredential::new("abc123", 1_750_000_000_000);
        let json = serde_json::to_string(&credential).expect("serializable");
        assert_eq!(json, r#"{"token":"abc123","expiresAt":1750000000000}"#);
    }

    #[test]
    fn test_credential_round_trips() {
        let credential = StoredCredential::new("abc123", 42);
        let json = serde_json::to_string(&credential).expect("serializable");
        let parsed: StoredCredential = serde_json::from_str(&json).expect("parsable");
        assert_eq!(parsed, credential);
    }

    #[test]
    fn test_missing_expiry_fails_parsing() {
        assert!(serde_json::from_str::<StoredCredential>(r#"{"token":"abc123"}"#).is_err());
        assert!(serde_json::from_str::<StoredCredential>(r#"{"expiresAt":42}"#).is_err());
        assert!(
            serde_json::from_str::<StoredCredential>(r#"{"token":"a","expiresAt":"soon"}"#)
                .is_err()
        );
    }

    #[test]
    fn test_expiry_boundary_is_inclusive() {
        let credential = StoredCredential::new("abc123", 1_000);
        assert!(credential.is_expired_at(1_000));
        assert!(credential.is_expired_at(1_001));
        assert!(!credential.is_expired_at(999));
    }

    #[test]
    fn test_valid_credential_is_returned_and_kept() {
        let store = MemoryCredentialStore::default();
        let session = Session::new(store.clone());
        let credential = StoredCredential::expiring_in("abc123", Duration::hours(1));
        session.establish(&credential).expect("store accepts writes");

        assert_eq!(session.bearer_token().as_deref(), Some("abc123"));
        // Storage unchanged after the read.
        assert!(store.raw().is_some());
    }

    #[test]
    fn test_expired_credential_is_evicted() {
        let store = MemoryCredentialStore::default();
        let session = Session::new(store.clone());
        let credential = StoredCredential::expiring_in("abc123", Duration::seconds(-1));
        session.establish(&credential).expect("store accepts writes");

        assert_eq!(session.bearer_token(), None);
        assert_eq!(store.raw(), None);
    }

    #[test]
    fn test_malformed_credential_is_evicted() {
        let store = MemoryCredentialStore::with_raw("not json at all");
        let session = Session::new(store.clone());

        assert_eq!(session.bearer_token(), None);
        assert_eq!(store.raw(), None);
    }

    #[test]
    fn test_empty_store_is_a_quiet_no_op() {
        let store = MemoryCredentialStore::default();
        let session = Session::new(store.clone());

        assert_eq!(session.bearer_token(), None);
        assert_eq!(store.raw(), None);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let session = Session::new(MemoryCredentialStore::default());
        session.clear().expect("clearing an empty store succeeds");
        session.clear().expect("clearing twice still succeeds");
        assert!(!session.is_valid());
    }

    #[test]
    fn test_is_valid_evicts_stale_state_at_boot() {
        let store =
            MemoryCredentialStore::with_raw(r#"{"token":"abc123","expiresAt":1000}"#);
        let session = Session::new(store.clone());

        assert!(!session.is_valid());
        assert_eq!(store.raw(), None);
    }
}
