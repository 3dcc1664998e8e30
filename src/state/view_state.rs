use std::collections::BTreeSet;

use crate::models::Period;
use crate::state::generation::RequestGenerations;
use crate::view::charts::{ChartSlot, PieChart, TrendChart};
use crate::view::format::{compact, thousands};
use crate::view::status::streak_badge;
use crate::view::{BillTable, CostView, EntryForm, Notice, RichText, StatusView, WeatherPanel};

/// Button that can be busy while its request is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Control {
    AddConsumption,
    UpdateTarget,
    ResetToday,
    DeleteRecord(i64),
    EstimateFromPrice,
    AddEstimate,
    CalculateCost,
}

impl Control {
    pub fn idle_label(&self) -> &'static str {
        match self {
            Self::AddConsumption => "Save",
            Self::UpdateTarget => "Update target",
            Self::ResetToday => "Reset today",
            Self::DeleteRecord(_) => "Delete",
            Self::EstimateFromPrice => "Estimate usage",
            Self::AddEstimate => "Add as consumption",
            Self::CalculateCost => "Calculate",
        }
    }

    pub fn busy_label(&self) -> &'static str {
        match self {
            Self::AddConsumption => "Saving...",
            Self::UpdateTarget => "Updating...",
            Self::ResetToday => "Resetting...",
            Self::DeleteRecord(_) => "Deleting...",
            Self::EstimateFromPrice | Self::CalculateCost => "Calculating...",
            Self::AddEstimate => "Adding...",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryView {
    pub week: RichText,
    pub top_category: RichText,
}

/// Result of a reverse bill estimate
#[derive(Debug, Clone, PartialEq)]
pub struct EstimateView {
    pub usage: String,
    pub liters: String,
}

impl EstimateView {
    pub fn new(usage_m3: f64, liters: f64) -> Self {
        Self {
            usage: format!("{} m³", compact(usage_m3)),
            liters: format!("{} Liters", thousands(liters)),
        }
    }
}

/// Liters from the last reverse estimate, usable once
#[derive(Debug, Default)]
pub struct PendingEstimate {
    liters: Option<f64>,
}

impl PendingEstimate {
    /// Overwrites any earlier estimate
    pub fn store(&mut self, liters: f64) {
        self.liters = Some(liters);
    }

    pub fn take(&mut self) -> Option<f64> {
        self.liters.take()
    }

    pub fn peek(&self) -> Option<f64> {
        self.liters
    }
}

/// Everything the dashboard renders
#[derive(Debug)]
pub struct ViewState {
    pub status: StatusView,
    pub target_input: String,
    pub streak: Option<u32>,
    pub summary: SummaryView,
    pub period: Period,
    pub trend: ChartSlot<TrendChart>,
    pub pie: ChartSlot<PieChart>,
    pub bills: BillTable,
    pub form: EntryForm,
    pub weather: WeatherPanel,
    pub estimate: Option<EstimateView>,
    pub pending_estimate: PendingEstimate,
    pub cost: Option<CostView>,
    pub notice: Option<Notice>,
    pub generations: RequestGenerations,
    busy: BTreeSet<Control>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            status: StatusView::message("Loading..."),
            target_input: String::new(),
            streak: None,
            summary: SummaryView::default(),
            period: Period::default(),
            trend: ChartSlot::default(),
            pie: ChartSlot::default(),
            bills: BillTable::default(),
            form: EntryForm::default(),
            weather: WeatherPanel::Loading,
            estimate: None,
            pending_estimate: PendingEstimate::default(),
            cost: None,
            notice: None,
            generations: RequestGenerations::default(),
            busy: BTreeSet::new(),
        }
    }
}

impl ViewState {
    pub fn is_busy(&self, control: Control) -> bool {
        self.busy.contains(&control)
    }

    pub fn control_label(&self, control: Control) -> &'static str {
        if self.is_busy(control) {
            control.busy_label()
        } else {
            control.idle_label()
        }
    }

    /// Returns false if the control was already busy
    pub(crate) fn mark_busy(&mut self, control: Control) -> bool {
        self.busy.insert(control)
    }

    pub(crate) fn clear_busy(&mut self, control: Control) {
        self.busy.remove(&control);
    }

    pub fn streak_badge(&self) -> Option<String> {
        self.streak.and_then(streak_badge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_labels_follow_busy_state() {
        let mut state = ViewState::default();
        assert_eq!(state.control_label(Control::AddConsumption), "Save");

        assert!(state.mark_busy(Control::AddConsumption));
        assert!(!state.mark_busy(Control::AddConsumption));
        assert!(state.is_busy(Control::AddConsumption));
        assert_eq!(state.control_label(Control::AddConsumption), "Saving...");

        state.clear_busy(Control::AddConsumption);
        assert!(!state.is_busy(Control::AddConsumption));
    }

    #[test]
    fn test_delete_controls_are_per_record() {
        let mut state = ViewState::default();
        state.mark_busy(Control::DeleteRecord(1));
        assert!(state.is_busy(Control::DeleteRecord(1)));
        assert!(!state.is_busy(Control::DeleteRecord(2)));
    }

    #[test]
    fn test_pending_estimate_is_one_shot() {
        let mut pending = PendingEstimate::default();
        pending.store(1000.0);
        pending.store(2500.0);
        assert_eq!(pending.peek(), Some(2500.0));
        assert_eq!(pending.take(), Some(2500.0));
        assert_eq!(pending.take(), None);
    }

    #[test]
    fn test_estimate_view_format() {
        let view = EstimateView::new(12.5, 12500.4);
        assert_eq!(view.usage, "12.5 m³");
        assert_eq!(view.liters, "12,500 Liters");
    }

    #[test]
    fn test_streak_badge_hidden_until_loaded() {
        let mut state = ViewState::default();
        assert!(state.streak_badge().is_none());
        state.streak = Some(0);
        assert!(state.streak_badge().is_none());
        state.streak = Some(3);
        assert!(state.streak_badge().is_some());
    }
}
