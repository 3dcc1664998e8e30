use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Weather plus a water-saving hint for the user's city.
/// `temp` is a number normally and `"-"` when the upstream lookup failed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherAdvice {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub temp: Option<Value>,
    #[serde(default)]
    pub advice: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
