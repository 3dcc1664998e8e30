pub mod browser;
pub mod context;
pub mod dashboard;
pub mod generation;
pub mod reminder;
pub mod view_state;

pub use browser::{Browser, WebBrowser};
pub use context::{provide_dashboard_context, use_dashboard, DashboardContext, WebDashboard};
pub use dashboard::Dashboard;
pub use generation::{Panel, RequestGenerations};
pub use reminder::{KeyValueStore, LocalStore, Reminder, ReminderOutcome};
pub use view_state::{Control, EstimateView, PendingEstimate, SummaryView, ViewState};
