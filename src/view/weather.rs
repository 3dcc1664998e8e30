use serde_json::Value;

use crate::models::WeatherAdvice;
use crate::view::format::compact;

pub const WEATHER_UNAVAILABLE: &str = "Weather information unavailable.";

#[derive(Debug, Clone, PartialEq)]
pub enum WeatherPanel {
    Loading,
    Ready {
        city: String,
        temp: String,
        advice: String,
        icon_url: Option<String>,
    },
    Unavailable,
}

impl WeatherPanel {
    pub fn from_advice(advice: &WeatherAdvice) -> Self {
        if advice.error.is_some() {
            return Self::Unavailable;
        }

        Self::Ready {
            city: collapse_whitespace(advice.city.as_deref().unwrap_or_default()),
            temp: advice.temp.as_ref().map(format_temp).unwrap_or_default(),
            advice: advice.advice.as_deref().unwrap_or_default().trim().to_string(),
            icon_url: advice
                .icon
                .as_deref()
                .map(str::trim)
                .filter(|icon| !icon.is_empty())
                .map(icon_url),
        }
    }

    pub fn status_text(&self) -> Option<&'static str> {
        match self {
            Self::Loading => Some("Loading weather..."),
            Self::Unavailable => Some(WEATHER_UNAVAILABLE),
            Self::Ready { .. } => None,
        }
    }
}

pub fn icon_url(icon: &str) -> String {
    format!("https://openweathermap.org/img/wn/{}@2x.png", icon)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn format_temp(temp: &Value) -> String {
    match temp {
        Value::Number(n) => n.as_f64().map(compact).unwrap_or_else(|| n.to_string()),
        Value::String(s) => s.trim().to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ready_panel_normalizes_fields() {
        let advice: WeatherAdvice = serde_json::from_value(json!({
            "city": "  Istanbul \n  Europe ",
            "temp": 31.0,
            "advice": " Water the garden early in the morning. ",
            "icon": "01d"
        }))
        .unwrap();

        assert_eq!(
            WeatherPanel::from_advice(&advice),
            WeatherPanel::Ready {
                city: "Istanbul Europe".to_string(),
                temp: "31".to_string(),
                advice: "Water the garden early in the morning.".to_string(),
                icon_url: Some("https://openweathermap.org/img/wn/01d@2x.png".to_string()),
            }
        );
    }

    #[test]
    fn test_string_temperature_and_missing_icon() {
        let advice: WeatherAdvice =
            serde_json::from_value(json!({"city": "Istanbul", "temp": " - ", "advice": "n/a"}))
                .unwrap();
        let WeatherPanel::Ready { temp, icon_url, .. } = WeatherPanel::from_advice(&advice) else {
            panic!("expected ready panel");
        };
        assert_eq!(temp, "-");
        assert!(icon_url.is_none());
    }

    #[test]
    fn test_server_error_is_unavailable() {
        let advice: WeatherAdvice =
            serde_json::from_value(json!({"error": "no api key"})).unwrap();
        let panel = WeatherPanel::from_advice(&advice);
        assert_eq!(panel, WeatherPanel::Unavailable);
        assert_eq!(panel.status_text(), Some(WEATHER_UNAVAILABLE));
    }
}
