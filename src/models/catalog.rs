//! Catalog models: categories and the products listed under them.

use serde::{Deserialize, Serialize};

/// A storefront category. The list endpoint returns categories without
/// products; the detail endpoint embeds them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// A purchasable product. Prices are integer minor units (paise/cents).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub price: i64,
    #[serde(rename = "discountPrice", default)]
    pub discount_price: Option<i64>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Product {
    /// The price a buyer actually pays: the discount price when one is set.
    pub fn effective_price(&self) -> i64 {
        self.discount_price.unwrap_or(self.price)
    }

    pub fn has_discount(&self) -> bool {
        matches!(self.discount_price, Some(discounted) if discounted < self.price)
    }
}
