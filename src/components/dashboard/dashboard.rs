use leptos::*;

use crate::components::notice::NoticeBanner;
use crate::state::use_dashboard;

use super::bill_history_card::BillHistoryCard;
use super::charts_card::ChartsCard;
use super::entry_form_card::EntryFormCard;
use super::status_card::StatusCard;
use super::summary_card::SummaryCard;
use super::weather_card::WeatherCard;

/// Dashboard page: loads every panel once on mount
#[component]
pub fn Dashboard() -> impl IntoView {
    let dashboard = use_dashboard();
    let weather_enabled = dashboard.config().weather_enabled;

    let load = create_action(move |_: &()| {
        let store = dashboard.dashboard();
        async move { store.load().await }
    });
    load.dispatch(());

    view! {
        <div class="dashboard">
            <NoticeBanner />
            <div class="dashboard-grid">
                <StatusCard />
                <EntryFormCard />
                <SummaryCard />
                {weather_enabled.then(|| view! { <WeatherCard /> })}
                <ChartsCard />
                <BillHistoryCard />
            </div>
        </div>
    }
}
