//! Delivery address models.

use serde::{Deserialize, Serialize};

/// A saved delivery address belonging to the signed-in account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Address {
    pub id: i64,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "addressLine1")]
    pub line1: String,
    #[serde(rename = "addressLine2", default)]
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    #[serde(rename = "postalCode")]
    pub postal_code: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Address {
    /// Single-line rendering for list output.
    pub fn summary(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.line1, self.city, self.state, self.postal_code
        )
    }
}

/// Payload for creating or updating an address.
#[derive(Debug, Clone, Serialize)]
pub struct AddressRequest {
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "addressLine1")]
    pub line1: String,
    #[serde(rename = "addressLine2", skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    #[serde(rename = "postalCode")]
    pub postal_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}
