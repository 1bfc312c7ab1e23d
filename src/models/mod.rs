//! Data models for the storefront backend's JSON API.
//!
//! Field names on the wire are camelCase (the backend serves a JavaScript
//! web client); every model maps them explicitly. Money is always integer
//! minor units. The module covers:
//!
//! - `User`, `AuthResponse`: accounts and the login/registration payloads
//! - `Address`: saved delivery addresses
//! - `Category`, `Product`: catalog browsing
//! - `Order`, `OrderItem`: checkout and order history
//! - `Payment`, `Transaction`: payment initiation and the ledger
//! - `Slider`, `EnquiryRequest`: landing-page banners and the contact form

pub mod address;
pub mod catalog;
pub mod common;
pub mod enquiry;
pub mod order;
pub mod payment;
pub mod slider;
pub mod user;

pub use address::{Address, AddressRequest};
pub use catalog::{Category, Product};
pub use common::MessageResponse;
pub use enquiry::EnquiryRequest;
pub use order::{Order, OrderItem, OrderItemRequest, OrderRequest, OrderStatus};
pub use payment::{Payment, PaymentMethod, PaymentRequest, Transaction, TransactionStatus};
pub use slider::Slider;
pub use user::{AuthResponse, LoginRequest, RegisterRequest, User};
