//! REST client for the Shopwire storefront backend.
//!
//! The gateway in [`client`] owns credential attachment and error mapping;
//! the endpoint modules add one thin wrapper per backend route. Everything
//! authenticates with a JWT bearer token issued by `POST /users/login`.

pub mod client;
pub mod error;

mod addresses;
mod categories;
mod enquiries;
mod orders;
mod payments;
mod sliders;
mod users;

pub use client::ApiClient;
pub use error::ApiError;
