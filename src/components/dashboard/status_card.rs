use leptos::*;

use crate::state::{use_dashboard, Control};

/// Today's total against the target, the streak badge and target controls
#[component]
pub fn StatusCard() -> impl IntoView {
    let dashboard = use_dashboard();

    let update_target = create_action(move |_: &()| {
        let store = dashboard.dashboard();
        async move { store.update_target().await }
    });
    let reset_today = create_action(move |_: &()| {
        let store = dashboard.dashboard();
        async move { store.reset_today().await }
    });

    view! {
        <div class="card status-card">
            <h3>"Today"</h3>
            <div
                id="status-label"
                class=move || {
                    dashboard.with(|s| match s.status.severity {
                        Some(severity) => format!("status-label {}", severity.css_class()),
                        None => "status-label".to_string(),
                    })
                }
                style=move || dashboard.with(|s| s.status.style())
            >
                {move || dashboard.with(|s| s.status.text.clone())}
            </div>
            {move || {
                dashboard.with(|s| s.streak_badge()).map(|badge| {
                    view! { <div id="streak-label" class="streak-label">{badge}</div> }
                })
            }}
            <div class="target-form">
                <label for="target-entry">"Daily target (L)"</label>
                <input
                    id="target-entry"
                    type="number"
                    min="0"
                    step="any"
                    prop:value=move || dashboard.with(|s| s.target_input.clone())
                    on:input=move |ev| dashboard.dashboard().set_target_input(event_target_value(&ev))
                />
                <button
                    class="button"
                    disabled=move || dashboard.with(|s| s.is_busy(Control::UpdateTarget))
                    on:click=move |_| update_target.dispatch(())
                >
                    {move || dashboard.with(|s| s.control_label(Control::UpdateTarget))}
                </button>
            </div>
            <button
                class="button button-danger"
                disabled=move || dashboard.with(|s| s.is_busy(Control::ResetToday))
                on:click=move |_| reset_today.dispatch(())
            >
                {move || dashboard.with(|s| s.control_label(Control::ResetToday))}
            </button>
        </div>
    }
}
