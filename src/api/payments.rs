//! Payment endpoints: initiating a payment for an order and reading the
//! account's transaction ledger.

use crate::models::{Payment, PaymentRequest, Transaction};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// Start a payment for a placed order. Hosted checkout methods return a
    /// `payment_url` the caller must open; cash on delivery settles later.
    pub async fn initiate_payment(&self, request: &PaymentRequest) -> Result<Payment, ApiError> {
        self.post("/payments", request).await
    }

    /// The account's transaction ledger, newest first.
    pub async fn fetch_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get("/payments/transactions").await
    }
}
