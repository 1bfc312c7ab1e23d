//! Order models: checkout payloads and order history rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of a checkout request.
#[derive(Debug, Clone, Serialize)]
pub struct OrderItemRequest {
    #[serde(rename = "productId")]
    pub product_id: i64,
    pub quantity: u32,
}

/// Payload for `POST /orders`. Totals are computed server-side from the
/// current product prices, never trusted from the client.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    pub items: Vec<OrderItemRequest>,
    #[serde(rename = "addressId")]
    pub address_id: i64,
}

/// One line of a placed order, priced at order time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct OrderItem {
    #[serde(rename = "productId")]
    pub product_id: i64,
    pub name: String,
    pub quantity: u32,
    pub price: i64,
}

/// A placed order. Amounts are integer minor units.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Order {
    pub id: i64,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    #[serde(rename = "totalAmount")]
    pub total_amount: i64,
    pub status: OrderStatus,
    #[serde(rename = "addressId", default)]
    pub address_id: Option<i64>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

/// Fulfilment state reported by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipped,
    Delivered,
    Cancelled,
    /// Any status this client version does not know yet.
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
            OrderStatus::Confirmed => write!(f, "Confirmed"),
            OrderStatus::Shipped => write!(f, "Shipped"),
            OrderStatus::Delivered => write!(f, "Delivered"),
            OrderStatus::Cancelled => write!(f, "Cancelled"),
            OrderStatus::Unknown => write!(f, "Unknown"),
        }
    }
}
