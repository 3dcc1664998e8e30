use leptos::*;

use crate::models::{Category, EfficiencyMode};
use crate::state::dashboard::AMOUNT_INPUT_ID;
use crate::state::{use_dashboard, Control};

/// Consumption entry: category, appliance program and amount
#[component]
pub fn EntryFormCard() -> impl IntoView {
    let dashboard = use_dashboard();

    let on_category = move |ev: ev::Event| {
        let key = event_target_value(&ev);
        match Category::from_key(&key) {
            Some(category) => dashboard.dashboard().select_category(category),
            None => log::warn!("Unknown category '{}'", key),
        }
    };
    let on_mode = move |ev: ev::Event| {
        if let Some(mode) = EfficiencyMode::from_suffix(&event_target_value(&ev)) {
            dashboard.dashboard().select_mode(mode);
        }
    };
    let add_consumption = create_action(move |_: &()| {
        let store = dashboard.dashboard();
        async move { store.add_consumption().await }
    });

    let category_options = Category::ALL
        .into_iter()
        .map(|category| {
            view! {
                <option
                    value=category.key()
                    prop:selected=move || dashboard.with(|s| s.form.category() == category)
                >
                    {category.display_name()}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="card entry-card">
            <h3>"Log consumption"</h3>
            <label for="category-select">"Category"</label>
            <select id="category-select" on:change=on_category>
                {category_options}
            </select>

            <Show when=move || dashboard.with(|s| s.form.shows_mode_selector())>
                <div id="model-selection-group">
                    <label for="model-select">"Program"</label>
                    <select id="model-select" on:change=on_mode>
                        {move || {
                            let (options, selected) = dashboard
                                .with(|s| (s.form.mode_options().to_vec(), s.form.selected_mode()));
                            options
                                .into_iter()
                                .map(|option| {
                                    view! {
                                        <option
                                            value=option.mode.suffix()
                                            prop:selected={selected == Some(option.mode)}
                                        >
                                            {option.label}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
            </Show>

            <label id="amount-label" for=AMOUNT_INPUT_ID>
                {move || dashboard.with(|s| s.form.amount_label())}
            </label>
            <input
                id=AMOUNT_INPUT_ID
                type="number"
                step="any"
                min="0"
                placeholder=move || dashboard.with(|s| s.form.placeholder())
                prop:value=move || dashboard.with(|s| s.form.amount_input.clone())
                on:input=move |ev| dashboard.dashboard().set_amount_input(event_target_value(&ev))
            />
            <button
                id="add-button"
                class="button button-primary"
                disabled=move || dashboard.with(|s| s.is_busy(Control::AddConsumption))
                on:click=move |_| add_consumption.dispatch(())
            >
                {move || dashboard.with(|s| s.control_label(Control::AddConsumption))}
            </button>
        </div>
    }
}
