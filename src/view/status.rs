use crate::models::TodayStatus;

pub const STATUS_UNAVAILABLE: &str = "Status unavailable.";

/// Visual tier of today's consumption relative to the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warning,
    Over,
}

impl Severity {
    /// Tier for a total/target pair. Below 90% is fine, 90–100% inclusive
    /// warns, above 100% is over.
    pub fn classify(total: f64, target: f64) -> Self {
        if !(target.is_finite() && target > 0.0) {
            return if total > 0.0 { Self::Over } else { Self::Ok };
        }

        let ratio = total / target;
        if ratio > 1.0 {
            Self::Over
        } else if ratio >= 0.9 {
            Self::Warning
        } else {
            Self::Ok
        }
    }

    /// CSS color token
    pub fn style_token(&self) -> &'static str {
        match self {
            Self::Ok => "var(--status-good)",
            Self::Warning => "var(--status-warn)",
            Self::Over => "var(--status-bad)",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Ok => "status-good",
            Self::Warning => "status-warn",
            Self::Over => "status-bad",
        }
    }
}

/// Rendered status line
#[derive(Debug, Clone, PartialEq)]
pub struct StatusView {
    pub text: String,
    pub severity: Option<Severity>,
}

impl StatusView {
    pub fn from_status(status: &TodayStatus) -> Self {
        Self {
            text: format!(
                "Today: {:.1} L / Target: {:.1} L",
                status.today_total, status.daily_target
            ),
            severity: Some(Severity::classify(status.today_total, status.daily_target)),
        }
    }

    pub fn unavailable() -> Self {
        Self::message(STATUS_UNAVAILABLE)
    }

    /// Plain status text without a tier
    pub fn message(text: &str) -> Self {
        Self {
            text: text.to_string(),
            severity: None,
        }
    }

    pub fn style(&self) -> String {
        self.severity
            .map(|s| format!("color: {}", s.style_token()))
            .unwrap_or_default()
    }
}

/// Value mirrored into the target input after a status fetch
pub fn target_input_value(status: &TodayStatus) -> String {
    format_target(status.daily_target)
}

pub fn format_target(target: f64) -> String {
    format!("{:.1}", target)
}

/// Badge text, or `None` when the badge stays hidden
pub fn streak_badge(count: u32) -> Option<String> {
    match count {
        0 => None,
        1 => Some("🔥 1 day saving streak!".to_string()),
        n => Some(format!("🔥 {} day saving streak!", n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_bands() {
        assert_eq!(Severity::classify(0.0, 150.0), Severity::Ok);
        assert_eq!(Severity::classify(134.9, 150.0), Severity::Ok);
        assert_eq!(Severity::classify(135.0, 150.0), Severity::Warning);
        assert_eq!(Severity::classify(150.0, 150.0), Severity::Warning);
        assert_eq!(Severity::classify(150.1, 150.0), Severity::Over);
    }

    #[test]
    fn test_severity_follows_ratio_across_targets() {
        for target in [1.0, 80.0, 150.0, 1000.0] {
            for percent in 0..200 {
                let total = target * percent as f64 / 100.0;
                let ratio = total / target;
                let expected = if ratio < 0.9 {
                    Severity::Ok
                } else if ratio <= 1.0 {
                    Severity::Warning
                } else {
                    Severity::Over
                };
                assert_eq!(Severity::classify(total, target), expected, "{}/{}", total, target);
            }
        }
    }

    #[test]
    fn test_severity_without_usable_target() {
        assert_eq!(Severity::classify(0.0, 0.0), Severity::Ok);
        assert_eq!(Severity::classify(5.0, 0.0), Severity::Over);
        assert_eq!(Severity::classify(5.0, f64::NAN), Severity::Over);
    }

    #[test]
    fn test_status_view_text_and_target_mirror() {
        let status = TodayStatus {
            today_total: 42.34,
            daily_target: 150.0,
        };
        let view = StatusView::from_status(&status);
        assert_eq!(view.text, "Today: 42.3 L / Target: 150.0 L");
        assert_eq!(view.style(), "color: var(--status-good)");
        assert_eq!(target_input_value(&status), "150.0");
        assert_eq!(format_target(175.0), "175.0");
        assert_eq!(StatusView::unavailable().style(), "");
    }

    #[test]
    fn test_streak_badge_visibility() {
        assert_eq!(streak_badge(0), None);
        for count in 1..10 {
            assert!(streak_badge(count).is_some());
        }
        assert_eq!(streak_badge(4).as_deref(), Some("🔥 4 day saving streak!"));
    }
}
