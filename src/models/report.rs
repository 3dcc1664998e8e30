use serde::{Deserialize, Serialize};

/// Report aggregation granularity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Daily, Period::Weekly, Period::Monthly];

    /// Query-string value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Label of the actual-consumption series
    pub fn series_label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily total (L)",
            Self::Weekly => "Weekly total (L)",
            Self::Monthly => "Monthly total (L)",
        }
    }

    /// Text of the period selector button
    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
        }
    }
}

/// Consumption per label plus the target reference value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyTrend {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub data: Vec<f64>,
    #[serde(default)]
    pub target: f64,
}

/// Share of consumption per category
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryPie {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub data: Vec<f64>,
}

/// A recorded water bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillRecord {
    pub id: i64,
    pub date: String,
    pub amount_m3: f64,
    pub liters: f64,
}

/// Response of `GET /api/report_data`. The server sends empty objects when
/// the user has no records yet, so every field falls back to its default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportData {
    #[serde(default)]
    pub daily_trend: DailyTrend,
    #[serde(default)]
    pub category_pie: CategoryPie,
    #[serde(default)]
    pub bill_history: Vec<BillRecord>,
}
