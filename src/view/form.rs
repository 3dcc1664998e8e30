use thiserror::Error;

use crate::models::{AmountShape, Category, EfficiencyMode, ModeOption};

/// Rejected user input. Nothing is sent to the server when this occurs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Please enter a value.")]
    Empty,
    #[error("Please enter a valid number.")]
    NotANumber,
    #[error("Please enter a value greater than zero.")]
    NotPositive,
}

/// Parse a finite number strictly greater than zero
pub fn parse_positive(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let value: f64 = trimmed.parse().map_err(|_| ValidationError::NotANumber)?;
    if !value.is_finite() {
        return Err(ValidationError::NotANumber);
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive);
    }

    Ok(value)
}

/// Parse an optional positive number. Blank input means "not given".
pub fn parse_optional_positive(input: &str) -> Result<Option<f64>, ValidationError> {
    match parse_positive(input) {
        Ok(value) => Ok(Some(value)),
        Err(ValidationError::Empty) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Consumption entry form: category, optional efficiency mode and amount
#[derive(Debug, Clone, PartialEq)]
pub struct EntryForm {
    category: Category,
    modes: Vec<ModeOption>,
    mode: Option<EfficiencyMode>,
    pub amount_input: String,
}

impl Default for EntryForm {
    fn default() -> Self {
        let mut form = Self {
            category: Category::default(),
            modes: Vec::new(),
            mode: None,
            amount_input: String::new(),
        };
        form.select_category(Category::default());
        form
    }
}

impl EntryForm {
    /// Switch category. The mode selector is rebuilt from scratch.
    pub fn select_category(&mut self, category: Category) {
        self.category = category;
        self.modes = category.mode_options();
        self.mode = if self.modes.is_empty() {
            None
        } else {
            Some(EfficiencyMode::Standard)
        };
    }

    /// Pick a mode. Modes the current category does not offer are ignored.
    pub fn select_mode(&mut self, mode: EfficiencyMode) {
        if self.modes.iter().any(|o| o.mode == mode) {
            self.mode = Some(mode);
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn shape(&self) -> AmountShape {
        self.category.shape()
    }

    pub fn amount_label(&self) -> &'static str {
        self.shape().label()
    }

    pub fn placeholder(&self) -> &'static str {
        self.shape().placeholder()
    }

    pub fn shows_mode_selector(&self) -> bool {
        !self.modes.is_empty()
    }

    pub fn mode_options(&self) -> &[ModeOption] {
        &self.modes
    }

    pub fn selected_mode(&self) -> Option<EfficiencyMode> {
        self.mode
    }

    /// Category key, suffixed with the mode for appliance categories
    pub fn activity_key(&self) -> String {
        match self.mode {
            Some(mode) if self.shows_mode_selector() => {
                format!("{}{}", self.category.key(), mode.suffix())
            }
            _ => self.category.key().to_string(),
        }
    }

    pub fn parse_amount(&self) -> Result<f64, ValidationError> {
        parse_positive(&self.amount_input)
    }
}
