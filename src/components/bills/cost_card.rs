use leptos::*;

use crate::models::UserType;
use crate::state::{use_dashboard, Control};

use super::user_type_select::UserTypeSelect;

/// Cost breakdown for a usage volume. Custom unit rates apply only when
/// both are filled in.
#[component]
pub fn CostCalculatorCard() -> impl IntoView {
    let dashboard = use_dashboard();
    let (usage, set_usage) = create_signal(String::new());
    let (user_type, set_user_type) = create_signal(UserType::default());
    let (water_rate, set_water_rate) = create_signal(String::new());
    let (waste_rate, set_waste_rate) = create_signal(String::new());

    let calculate = create_action(move |input: &(String, UserType, String, String)| {
        let (usage, user_type, water_rate, waste_rate) = input.clone();
        let store = dashboard.dashboard();
        async move {
            store
                .calculate_cost(&usage, user_type, &water_rate, &waste_rate)
                .await
        }
    });

    let on_calculate = move |_: ev::MouseEvent| {
        calculate.dispatch((
            usage.get_untracked(),
            user_type.get_untracked(),
            water_rate.get_untracked(),
            waste_rate.get_untracked(),
        ));
    };

    let breakdown = move || {
        dashboard.with(|s| s.cost.clone()).map(|cost| {
            view! {
                <table class="cost-table">
                    <tbody>
                        {cost
                            .lines
                            .into_iter()
                            .map(|line| {
                                view! {
                                    <tr>
                                        <td>{line.label}</td>
                                        <td class="cost-value">{line.value}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                    <tfoot>
                        <tr class="cost-total">
                            <th>"Total"</th>
                            <th class="cost-value">{cost.total}</th>
                        </tr>
                    </tfoot>
                </table>
            }
        })
    };

    view! {
        <div class="card cost-card">
            <h3>"Cost calculator"</h3>
            <label for="calc-usage">"Usage (m³)"</label>
            <input
                id="calc-usage"
                type="number"
                min="0"
                step="any"
                prop:value=usage
                on:input=move |ev| set_usage.set(event_target_value(&ev))
            />
            <label for="calc-type">"Tariff"</label>
            <UserTypeSelect id="calc-type" value=user_type set_value=set_user_type />
            <details class="manual-rates">
                <summary>"Custom unit rates"</summary>
                <label for="water-rate">"Water (per m³)"</label>
                <input
                    id="water-rate"
                    type="number"
                    min="0"
                    step="any"
                    prop:value=water_rate
                    on:input=move |ev| set_water_rate.set(event_target_value(&ev))
                />
                <label for="waste-rate">"Wastewater (per m³)"</label>
                <input
                    id="waste-rate"
                    type="number"
                    min="0"
                    step="any"
                    prop:value=waste_rate
                    on:input=move |ev| set_waste_rate.set(event_target_value(&ev))
                />
            </details>
            <button
                class="button button-primary"
                disabled=move || dashboard.with(|s| s.is_busy(Control::CalculateCost))
                on:click=on_calculate
            >
                {move || dashboard.with(|s| s.control_label(Control::CalculateCost))}
            </button>
            {breakdown}
        </div>
    }
}
