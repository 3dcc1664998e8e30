mod bill_history_card;
mod charts_card;
mod dashboard;
mod entry_form_card;
mod status_card;
mod summary_card;
mod weather_card;

pub use dashboard::Dashboard;
