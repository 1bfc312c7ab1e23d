//! Homepage slider (promotional banner) model.

use serde::{Deserialize, Serialize};

/// One promotional banner shown on the storefront landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct Slider {
    pub id: i64,
    pub image: String,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}
