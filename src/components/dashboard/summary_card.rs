use leptos::*;

use crate::components::rich_text::render_rich_text;
use crate::state::use_dashboard;

#[component]
pub fn SummaryCard() -> impl IntoView {
    let dashboard = use_dashboard();

    view! {
        <div class="card summary-card">
            <h3>"Weekly summary"</h3>
            <p id="summary-week-label">
                {move || dashboard.with(|s| render_rich_text(&s.summary.week))}
            </p>
            <p id="summary-category-label">
                {move || dashboard.with(|s| render_rich_text(&s.summary.top_category))}
            </p>
        </div>
    }
}
