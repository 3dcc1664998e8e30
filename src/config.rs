#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsValue;

pub const REMINDER_KEY: &str = "lastReminder";

/// Runtime configuration injected by the hosting page through `window.ENV`
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Prefix for every API path. Empty means same origin.
    pub api_url: String,
    pub weather_enabled: bool,
    pub reload_delay_ms: u32,
    pub reminder_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            weather_enabled: true,
            reload_delay_ms: 1500,
            reminder_key: REMINDER_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from window.ENV, falling back to defaults per key
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_url: env_string("API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            weather_enabled: env_string("WEATHER_ENABLED")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.weather_enabled),
            reload_delay_ms: env_string("RELOAD_DELAY_MS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.reload_delay_ms),
            reminder_key: defaults.reminder_key,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a single key from window.ENV
fn env_string(key: &str) -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let env = js_sys::Reflect::get(&window, &JsValue::from_str("ENV")).ok()?;
        if env.is_undefined() {
            return None;
        }
        let value = js_sys::Reflect::get(&env, &JsValue::from_str(key)).ok()?;
        // Allow both `"false"` and `false` in the injected object
        value
            .as_string()
            .or_else(|| value.as_bool().map(|b| b.to_string()))
            .or_else(|| value.as_f64().map(|n| n.to_string()))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = key;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_outside_browser() {
        let config = AppConfig::from_env();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.reminder_key, "lastReminder");
        assert_eq!(config.reload_delay_ms, 1500);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
