use leptos::*;

use crate::components::notice::NoticeBanner;

use super::cost_card::CostCalculatorCard;
use super::estimate_card::ReverseEstimateCard;

/// Bill tools page: usage from a bill amount, and the cost calculator
#[component]
pub fn BillTools() -> impl IntoView {
    view! {
        <div class="bills-page">
            <NoticeBanner />
            <div class="dashboard-grid">
                <ReverseEstimateCard />
                <CostCalculatorCard />
            </div>
        </div>
    }
}
