#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Success => "notice notice-success",
            Self::Warning => "notice notice-warning",
            Self::Error => "notice notice-error",
        }
    }
}

/// Message shown to the user after an action
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn success(title: &str, text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, title, text)
    }

    pub fn warning(title: &str, text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, title, text)
    }

    pub fn error(title: &str, text: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, text)
    }

    fn new(level: NoticeLevel, title: &str, text: impl Into<String>) -> Self {
        Self {
            level,
            title: title.to_string(),
            text: text.into(),
        }
    }
}
