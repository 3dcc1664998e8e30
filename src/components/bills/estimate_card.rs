use leptos::*;

use crate::models::UserType;
use crate::state::{use_dashboard, Control};

use super::user_type_select::UserTypeSelect;

/// Estimate usage from a bill's total, then optionally log it
#[component]
pub fn ReverseEstimateCard() -> impl IntoView {
    let dashboard = use_dashboard();
    let (price, set_price) = create_signal(String::new());
    let (user_type, set_user_type) = create_signal(UserType::default());

    let estimate_usage = create_action(move |input: &(String, UserType)| {
        let (price, user_type) = input.clone();
        let store = dashboard.dashboard();
        async move { store.estimate_from_price(&price, user_type).await }
    });
    let add_estimate = create_action(move |_: &()| {
        let store = dashboard.dashboard();
        async move { store.add_estimate().await }
    });

    let on_estimate = move |_: ev::MouseEvent| {
        estimate_usage.dispatch((price.get_untracked(), user_type.get_untracked()));
    };

    let result = move || {
        dashboard.with(|s| s.estimate.clone()).map(|estimate| {
            view! {
                <div id="rev-result" class="estimate-result">
                    <div>"Estimated usage: " <strong id="rev-usage">{estimate.usage}</strong></div>
                    <div>"Equivalent: " <strong id="rev-liters">{estimate.liters}</strong></div>
                    <button
                        class="button button-primary"
                        disabled=move || dashboard.with(|s| s.is_busy(Control::AddEstimate))
                        on:click=move |_| add_estimate.dispatch(())
                    >
                        {move || dashboard.with(|s| s.control_label(Control::AddEstimate))}
                    </button>
                </div>
            }
        })
    };

    view! {
        <div class="card estimate-card">
            <h3>"Usage from bill amount"</h3>
            <label for="calc-price">"Bill total"</label>
            <input
                id="calc-price"
                type="number"
                min="0"
                step="0.01"
                prop:value=price
                on:input=move |ev| set_price.set(event_target_value(&ev))
            />
            <label for="calc-type-rev">"Tariff"</label>
            <UserTypeSelect id="calc-type-rev" value=user_type set_value=set_user_type />
            <button
                class="button"
                disabled=move || dashboard.with(|s| s.is_busy(Control::EstimateFromPrice))
                on:click=on_estimate
            >
                {move || dashboard.with(|s| s.control_label(Control::EstimateFromPrice))}
            </button>
            {result}
        </div>
    }
}
