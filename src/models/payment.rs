//! Payment models: payment initiation and the transaction ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the buyer wants to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub enum PaymentMethod {
    Card,
    Wallet,
    #[serde(rename = "cod")]
    CashOnDelivery,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Card => write!(f, "Card"),
            PaymentMethod::Wallet => write!(f, "Wallet"),
            PaymentMethod::CashOnDelivery => write!(f, "Cash on delivery"),
        }
    }
}

/// Payload for `POST /payments`.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentRequest {
    #[serde(rename = "orderId")]
    pub order_id: i64,
    pub method: PaymentMethod,
}

/// A payment record created for an order. Hosted checkout methods carry a
/// redirect URL the caller must open to complete the payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Payment {
    pub id: i64,
    #[serde(rename = "orderId")]
    pub order_id: i64,
    pub amount: i64,
    pub status: TransactionStatus,
    #[serde(rename = "paymentUrl", default)]
    pub payment_url: Option<String>,
}

/// One row of the account's transaction ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "orderId", default)]
    pub order_id: Option<i64>,
    #[serde(default)]
    pub reference: Option<String>,
    pub amount: i64,
    pub status: TransactionStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Settlement state of a payment or ledger row. Typed so consumers can
/// filter the ledger without string comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub enum TransactionStatus {
    Success,
    Pending,
    Failed,
    #[serde(other)]
    Unknown,
}

impl TransactionStatus {
    /// Parse a user-supplied filter word. Accepts any casing.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "success" => Some(TransactionStatus::Success),
            "pending" => Some(TransactionStatus::Pending),
            "failed" => Some(TransactionStatus::Failed),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionStatus::Success => write!(f, "Success"),
            TransactionStatus::Pending => write!(f, "Pending"),
            TransactionStatus::Failed => write!(f, "Failed"),
            TransactionStatus::Unknown => write!(f, "Unknown"),
        }
    }
}
