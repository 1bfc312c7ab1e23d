//! Credential handling for authenticated storefront calls.
//!
//! This module provides:
//! - `StoredCredential`: the bearer token + absolute expiry record
//! - `CredentialStore`: the storage port, with file-backed and in-memory
//!   implementations
//! - `Session`: the shared handle every request resolves its token through
//!
//! A credential is written once by the login flow and read on every
//! outgoing request; an expired or unreadable record is evicted on sight
//! and the request goes out unauthenticated.

pub mod credentials;
pub mod session;

pub use credentials::{
    CredentialStore, CredentialStoreError, FileCredentialStore, MemoryCredentialStore,
};
pub use session::{Session, StoredCredential};
