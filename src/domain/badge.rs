use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub title: String,
    /// Game or event the badge belongs to.
    pub game: String,
    pub xp: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u64>,
    /// Unlock time in epoch milliseconds.
    pub earned: i64,
}
