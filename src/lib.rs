//! Client library for the Shopwire storefront backend.
//!
//! The crate wraps the backend's REST API behind [`ApiClient`]: a single
//! request gateway that attaches the stored bearer credential while it is
//! valid, evicts it from storage once it is not, and maps every failure
//! into [`ApiError`]. Credential persistence sits behind the
//! [`auth::CredentialStore`] trait so embedders can swap the file-backed
//! store for their own.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use auth::{
    CredentialStore, CredentialStoreError, FileCredentialStore, MemoryCredentialStore, Session,
    StoredCredential,
};
pub use config::Config;
