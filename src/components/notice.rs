use leptos::*;

use crate::state::use_dashboard;

/// Toast-style banner for the latest success or failure
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let dashboard = use_dashboard();

    move || {
        dashboard.with(|s| s.notice.clone()).map(|notice| {
            view! {
                <div class=notice.level.css_class() role="status">
                    <strong class="notice-title">{notice.title}</strong>
                    <span class="notice-text">{notice.text}</span>
                    <button
                        class="notice-dismiss"
                        aria-label="Dismiss"
                        on:click=move |_| dashboard.dashboard().dismiss_notice()
                    >
                        "×"
                    </button>
                </div>
            }
        })
    }
}
