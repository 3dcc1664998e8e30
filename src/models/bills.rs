use serde::{Deserialize, Serialize};

/// Tariff group used by the server-side bill calculations
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    #[default]
    Residential,
    Student,
    Disabled,
    Martyr,
}

impl UserType {
    pub const ALL: [UserType; 4] = [
        UserType::Residential,
        UserType::Student,
        UserType::Disabled,
        UserType::Martyr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Residential => "residential",
            Self::Student => "student",
            Self::Disabled => "disabled",
            Self::Martyr => "martyr",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == key)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Student => "Student (50% discount)",
            Self::Disabled => "Disabled (50% discount)",
            Self::Martyr => "Veteran family (50% discount)",
        }
    }
}

/// Body of `POST /api/estimate_usage_from_price`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRequest {
    pub price: f64,
    pub user_type: UserType,
}

/// Usage that would produce the submitted bill amount
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReverseEstimate {
    pub success: bool,
    #[serde(default)]
    pub usage_m3: Option<f64>,
    #[serde(default)]
    pub liters: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `POST /api/calculate_cost`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRequest {
    pub usage: f64,
    pub user_type: UserType,
    pub manual: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub water_tier1: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waste_tier1: Option<f64>,
}

/// Itemised bill for a usage volume
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillBreakdown {
    pub usage_m3: f64,
    pub deduction_m3: f64,
    pub billed_m3: f64,
    pub water_cost: f64,
    pub waste_cost: f64,
    pub ctv: f64,
    pub kdv: f64,
    pub total: f64,
    #[serde(default)]
    pub currency: String,
}

/// Response of `POST /api/calculate_cost`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CostResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<BillBreakdown>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_request_omits_unset_rates() {
        let request = CostRequest {
            usage: 12.0,
            user_type: UserType::Student,
            manual: false,
            water_tier1: None,
            waste_tier1: None,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"usage": 12.0, "user_type": "student", "manual": false})
        );
    }

    #[test]
    fn test_user_type_from_key() {
        for user_type in UserType::ALL {
            assert_eq!(UserType::from_key(user_type.as_str()), Some(user_type));
        }
        assert_eq!(UserType::from_key("Student"), None);
    }

    #[test]
    fn test_reverse_estimate_tolerates_missing_fields() {
        let parsed: ReverseEstimate = serde_json::from_str(r#"{"success": false}"#).unwrap();
        assert!(!parsed.success);
        assert!(parsed.liters.is_none());
    }
}
