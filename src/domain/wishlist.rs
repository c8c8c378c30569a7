use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub app_id: u64,
    pub name: String,
    /// `Some(0.0)` for free titles, `None` when no price is listed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub rank: u64,
    pub added: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub added_on: Option<NaiveDate>,
}
