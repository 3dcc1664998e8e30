use serde::{Deserialize, Serialize};

/// Today's running total against the daily goal
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayStatus {
    pub today_total: f64,
    pub daily_target: f64,
}

/// Consecutive days under the daily target
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Streak {
    pub streak: u32,
}

/// Precomputed comparison texts. Both may contain server-side markup.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub week_comparison_text: Option<String>,
    #[serde(default)]
    pub top_category_text: Option<String>,
}
