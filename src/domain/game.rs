use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub app_id: u64,
    pub name: String,
    pub logo: String,
    /// Total hours on record.
    pub hours: f64,
    /// Hours played in the last two weeks.
    pub recent_hours: f64,
    /// Epoch milliseconds, 0 when the platform reports no play time.
    pub last_played: i64,
}
