//! Dashboard store: owns the view state and runs every fetch and mutation.
//!
//! The view state lives in an `RwSignal`, so components reading it through
//! [`Dashboard::state`] re-render on every write made here. No borrow of the
//! state is held across an `.await`.

use leptos::*;

use crate::api::{ApiError, DashboardApi};
use crate::models::{
    AddPayload, Category, CostRequest, EfficiencyMode, EstimateRequest, MutationResponse, Period,
    TargetPayload, UserType,
};
use crate::state::browser::Browser;
use crate::state::generation::Panel;
use crate::state::reminder::{KeyValueStore, Reminder, ReminderOutcome, REMINDER_PROMPT};
use crate::state::view_state::{Control, EstimateView, SummaryView, ViewState};
use crate::view::charts::{PieChart, TrendChart};
use crate::view::form::{parse_optional_positive, parse_positive};
use crate::view::format::thousands;
use crate::view::rich_text::{sanitize, RichText};
use crate::view::status::{format_target, target_input_value};
use crate::view::{BillTable, CostView, Notice, StatusView, ValidationError, WeatherPanel};

pub const AMOUNT_INPUT_ID: &str = "liters-entry";
pub const BILL_ACTIVITY: &str = "bill";

pub const SOMETHING_WENT_WRONG: &str = "Something went wrong. Please try again.";
pub const UNKNOWN_ERROR: &str = "Unknown error.";
pub const NO_SUMMARY_DATA: &str = "No data found yet.";
pub const SUMMARY_FAILED: &str = "Summary could not be loaded.";
pub const RESET_CONFIRM: &str =
    "Are you sure? All of today's water consumption records will be deleted!";
pub const DELETE_CONFIRM: &str = "Are you sure? This bill record will be permanently deleted!";

pub struct Dashboard<A, B> {
    api: A,
    browser: B,
    reload_delay_ms: u32,
    state: RwSignal<ViewState>,
}

impl<A: DashboardApi, B: Browser> Dashboard<A, B> {
    /// Must be called inside a reactive runtime
    pub fn new(api: A, browser: B) -> Self {
        Self {
            api,
            browser,
            reload_delay_ms: 1500,
            state: create_rw_signal(ViewState::default()),
        }
    }

    pub fn with_reload_delay(mut self, delay_ms: u32) -> Self {
        self.reload_delay_ms = delay_ms;
        self
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }

    /// Reactive handle on the view state
    pub fn state(&self) -> RwSignal<ViewState> {
        self.state
    }

    pub fn read<R>(&self, f: impl FnOnce(&ViewState) -> R) -> R {
        self.state.with_untracked(f)
    }

    pub fn update<R: Default>(&self, f: impl FnOnce(&mut ViewState) -> R) -> R {
        self.state.try_update(f).unwrap_or_default()
    }

    fn issue(&self, panel: Panel) -> u64 {
        self.state
            .try_update_untracked(|s| s.generations.issue(panel))
            .unwrap_or_default()
    }

    /// Apply a response unless a newer request for the panel was issued
    fn apply(&self, panel: Panel, generation: u64, f: impl FnOnce(&mut ViewState)) -> bool {
        if !self.read(|s| s.generations.is_latest(panel, generation)) {
            log::debug!("Discarding stale {:?} response (generation {})", panel, generation);
            return false;
        }
        self.update(f);
        true
    }

    // Refreshes

    /// Initial page load
    pub async fn load(&self) {
        log::info!("Loading dashboard");
        self.refresh_all().await;
    }

    /// Status, charts, streak and summary
    pub async fn refresh_all(&self) {
        futures::join!(
            self.refresh_status(),
            self.refresh_charts(),
            self.refresh_streak(),
            self.refresh_summary()
        );
    }

    pub async fn refresh_status(&self) {
        let generation = self.issue(Panel::Status);
        let result = self.api.today_status().await;

        self.apply(Panel::Status, generation, |state| match result {
            Ok(status) => {
                state.status = StatusView::from_status(&status);
                state.target_input = target_input_value(&status);
            }
            Err(e) => {
                log::error!("Failed to refresh status: {}", e);
                state.status = StatusView::unavailable();
            }
        });
    }

    pub async fn refresh_streak(&self) {
        let generation = self.issue(Panel::Streak);
        match self.api.streak().await {
            Ok(streak) => {
                self.apply(Panel::Streak, generation, |state| {
                    state.streak = Some(streak.streak)
                });
            }
            Err(e) => log::error!("Failed to refresh streak: {}", e),
        }
    }

    pub async fn refresh_summary(&self) {
        let generation = self.issue(Panel::Summary);
        let result = self.api.summary().await;

        self.apply(Panel::Summary, generation, |state| {
            state.summary = match result {
                Ok(summary) => SummaryView {
                    week: summary
                        .week_comparison_text
                        .as_deref()
                        .filter(|t| !t.trim().is_empty())
                        .map(sanitize)
                        .unwrap_or_else(|| RichText::plain(NO_SUMMARY_DATA)),
                    top_category: summary
                        .top_category_text
                        .as_deref()
                        .map(sanitize)
                        .unwrap_or_default(),
                },
                Err(e) => {
                    log::error!("Failed to refresh summary: {}", e);
                    SummaryView {
                        week: RichText::plain(SUMMARY_FAILED),
                        top_category: RichText::default(),
                    }
                }
            };
        });
    }

    /// Report data for the active period
    pub async fn refresh_charts(&self) {
        let period = self.read(|s| s.period);
        let generation = self.issue(Panel::Charts);

        match self.api.report(period).await {
            Ok(report) => {
                self.apply(Panel::Charts, generation, |state| {
                    state.trend.replace(TrendChart::build(period, &report.daily_trend));
                    state.pie.replace(PieChart::build(&report.category_pie));
                    state.bills = BillTable::from_records(&report.bill_history);
                });
            }
            Err(e) => log::error!("Failed to refresh charts: {}", e),
        }
    }

    pub async fn refresh_weather(&self) {
        let generation = self.issue(Panel::Weather);
        let panel = match self.api.weather_advice().await {
            Ok(advice) => WeatherPanel::from_advice(&advice),
            Err(e) => {
                log::error!("Failed to load weather advice: {}", e);
                WeatherPanel::Unavailable
            }
        };
        self.apply(Panel::Weather, generation, |state| state.weather = panel);
    }

    /// Switch the report period and re-fetch only the report
    pub async fn set_period(&self, period: Period) {
        self.update(|s| s.period = period);
        self.refresh_charts().await;
    }

    // Form edits

    pub fn select_category(&self, category: Category) {
        self.update(|s| s.form.select_category(category));
    }

    pub fn select_mode(&self, mode: EfficiencyMode) {
        self.update(|s| s.form.select_mode(mode));
    }

    pub fn set_amount_input(&self, value: String) {
        self.update(|s| s.form.amount_input = value);
    }

    pub fn set_target_input(&self, value: String) {
        self.update(|s| s.target_input = value);
    }

    pub fn dismiss_notice(&self) {
        self.update(|s| s.notice = None);
    }

    // Mutations

    fn warn(&self, error: ValidationError) {
        log::warn!("Rejected input: {}", error);
        self.update(|s| s.notice = Some(Notice::warning("Warning", error.to_string())));
    }

    fn begin(&self, control: Control) -> bool {
        self.update(|s| s.mark_busy(control))
    }

    fn finish(&self, control: Control) {
        self.update(|s| s.clear_busy(control));
    }

    /// Turn a mutation result into a notice. Returns whether it succeeded.
    fn settle(
        &self,
        result: Result<MutationResponse, ApiError>,
        failure_title: &str,
        on_success: impl FnOnce(&mut ViewState, &MutationResponse) -> Notice,
    ) -> bool {
        match result {
            Ok(response) if response.success => {
                self.update(|s| {
                    let notice = on_success(s, &response);
                    s.notice = Some(notice);
                });
                true
            }
            Ok(response) => {
                let message = response.message_or(UNKNOWN_ERROR);
                self.update(|s| s.notice = Some(Notice::error(failure_title, message)));
                false
            }
            Err(e) => {
                log::error!("{}: {}", failure_title, e);
                self.update(|s| s.notice = Some(Notice::error(failure_title, SOMETHING_WENT_WRONG)));
                false
            }
        }
    }

    /// Record the form's consumption entry
    pub async fn add_consumption(&self) {
        let prepared = self.read(|s| {
            s.form.parse_amount().map(|amount| AddPayload {
                activity: s.form.activity_key(),
                amount,
            })
        });
        let payload = match prepared {
            Ok(payload) => payload,
            Err(e) => return self.warn(e),
        };

        let control = Control::AddConsumption;
        if !self.begin(control) {
            return;
        }

        let result = self.api.add_consumption(&payload).await;
        let succeeded = self.settle(result, "Could not add record", |state, response| {
            state.form.amount_input.clear();
            Notice::success("Saved", response.message_or("Record added."))
        });
        self.finish(control);

        if succeeded {
            self.refresh_all().await;
        }
    }

    pub async fn update_target(&self) {
        let target = match self.read(|s| parse_positive(&s.target_input)) {
            Ok(target) => target,
            Err(e) => return self.warn(e),
        };

        let control = Control::UpdateTarget;
        if !self.begin(control) {
            return;
        }

        let result = self.api.update_target(&TargetPayload { target }).await;
        let succeeded = self.settle(result, "Could not update target", |state, response| {
            if let Some(new_target) = response.new_target {
                state.target_input = format_target(new_target);
            }
            Notice::success("Target", "Target updated!")
        });
        self.finish(control);

        if succeeded {
            self.refresh_all().await;
        }
    }

    /// Clear today's records after confirmation
    pub async fn reset_today(&self) {
        if !self.browser.confirm(RESET_CONFIRM) {
            return;
        }

        let control = Control::ResetToday;
        if !self.begin(control) {
            return;
        }

        let result = self.api.reset_today().await;
        let succeeded = self.settle(result, "Could not reset today", |_, response| {
            Notice::success("Reset", response.message_or("Today's records were cleared."))
        });
        self.finish(control);

        if succeeded {
            self.refresh_all().await;
        }
    }

    /// Delete one bill record after confirmation. The streak does not
    /// depend on bills, so it is not refreshed.
    pub async fn delete_record(&self, id: i64) {
        if !self.browser.confirm(DELETE_CONFIRM) {
            return;
        }

        let control = Control::DeleteRecord(id);
        if !self.begin(control) {
            return;
        }

        let result = self.api.delete_record(id).await;
        let succeeded = self.settle(result, "Could not delete record", |_, response| {
            Notice::success("Deleted", response.message_or("Record deleted."))
        });
        self.finish(control);

        if succeeded {
            futures::join!(
                self.refresh_charts(),
                self.refresh_status(),
                self.refresh_summary()
            );
        }
    }

    /// Ask the server which usage produces the given bill amount
    pub async fn estimate_from_price(&self, price_input: &str, user_type: UserType) {
        let price = match parse_positive(price_input) {
            Ok(price) => price,
            Err(e) => return self.warn(e),
        };

        let control = Control::EstimateFromPrice;
        if !self.begin(control) {
            return;
        }

        let request = EstimateRequest { price, user_type };
        match self.api.estimate_usage(&request).await {
            Ok(estimate) if estimate.success => match (estimate.usage_m3, estimate.liters) {
                (Some(usage_m3), Some(liters)) => self.update(|s| {
                    s.estimate = Some(EstimateView::new(usage_m3, liters));
                    s.pending_estimate.store(liters);
                }),
                _ => {
                    log::error!("Estimate response without usage: {:?}", estimate);
                    self.update(|s| {
                        s.notice = Some(Notice::error("Calculation error", SOMETHING_WENT_WRONG))
                    });
                }
            },
            Ok(estimate) => {
                let message = estimate
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
                self.update(|s| s.notice = Some(Notice::error("Calculation error", message)));
            }
            Err(e) => {
                log::error!("Failed to estimate usage: {}", e);
                self.update(|s| {
                    s.notice = Some(Notice::error("Calculation error", SOMETHING_WENT_WRONG))
                });
            }
        }

        self.finish(control);
    }

    /// Record the last estimate as a bill entry, then reload the page
    pub async fn add_estimate(&self) {
        let Some(liters) = self.update(|s| s.pending_estimate.take()) else {
            return;
        };

        let control = Control::AddEstimate;
        if !self.begin(control) {
            self.update(|s| s.pending_estimate.store(liters));
            return;
        }

        let payload = AddPayload {
            activity: BILL_ACTIVITY.to_string(),
            amount: liters,
        };
        let result = self.api.add_consumption(&payload).await;
        let succeeded = self.settle(result, "Could not add estimate", |state, _| {
            state.status = StatusView::message("Updating...");
            Notice::success(
                "Success",
                format!("Added {} liters of consumption!", thousands(liters)),
            )
        });

        if !succeeded {
            self.update(|s| s.pending_estimate.store(liters));
        }
        self.finish(control);

        if succeeded {
            self.browser.reload_after(self.reload_delay_ms);
        }
    }

    /// Itemised bill for a usage volume. Manual tier-1 rates are used only
    /// when both are given.
    pub async fn calculate_cost(
        &self,
        usage_input: &str,
        user_type: UserType,
        water_rate_input: &str,
        waste_rate_input: &str,
    ) {
        let parsed = parse_positive(usage_input).and_then(|usage| {
            let water = parse_optional_positive(water_rate_input)?;
            let waste = parse_optional_positive(waste_rate_input)?;
            Ok((usage, water, waste))
        });
        let (usage, water_tier1, waste_tier1) = match parsed {
            Ok(values) => values,
            Err(e) => return self.warn(e),
        };

        let manual = water_tier1.is_some() && waste_tier1.is_some();
        let request = CostRequest {
            usage,
            user_type,
            manual,
            water_tier1: water_tier1.filter(|_| manual),
            waste_tier1: waste_tier1.filter(|_| manual),
        };

        let control = Control::CalculateCost;
        if !self.begin(control) {
            return;
        }

        match self.api.calculate_cost(&request).await {
            Ok(response) => match response.data {
                Some(bill) if response.success => {
                    self.update(|s| s.cost = Some(CostView::from_breakdown(&bill)))
                }
                _ => {
                    let message = response
                        .message
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
                    self.update(|s| s.notice = Some(Notice::error("Calculation error", message)));
                }
            },
            Err(e) => {
                log::error!("Failed to calculate cost: {}", e);
                self.update(|s| {
                    s.notice = Some(Notice::error("Calculation error", SOMETHING_WENT_WRONG))
                });
            }
        }

        self.finish(control);
    }

    /// Once-per-day logging reminder; focuses the amount field on accept
    pub fn run_reminder<S: KeyValueStore>(
        &self,
        reminder: &Reminder<S>,
        today: &str,
    ) -> ReminderOutcome {
        let outcome = reminder.check(today, || self.browser.confirm(REMINDER_PROMPT));
        if outcome == ReminderOutcome::Accepted {
            self.browser.focus(AMOUNT_INPUT_ID);
        }
        outcome
    }
}
