use leptos::*;

use crate::state::use_dashboard;
use crate::view::WeatherPanel;

#[component]
pub fn WeatherCard() -> impl IntoView {
    let dashboard = use_dashboard();

    let refresh_weather = create_action(move |_: &()| {
        let store = dashboard.dashboard();
        async move { store.refresh_weather().await }
    });
    refresh_weather.dispatch(());

    let content = move || match dashboard.with(|s| s.weather.clone()) {
        WeatherPanel::Ready {
            city,
            temp,
            advice,
            icon_url,
        } => view! {
            <div class="weather-ready">
                {icon_url.map(|src| view! { <img class="weather-icon" src=src alt="" /> })}
                <div>
                    <strong>{city}</strong>
                    " "
                    <span class="weather-temp">{format!("{}°C", temp)}</span>
                </div>
                <div class="weather-advice">{advice}</div>
            </div>
        }
        .into_view(),
        panel => view! {
            <span class="placeholder-text">{panel.status_text().unwrap_or_default()}</span>
        }
        .into_view(),
    };

    view! {
        <div class="card weather-card">
            <h3>"Weather"</h3>
            <div id="weather-info">{content}</div>
        </div>
    }
}
