use leptos::*;

use crate::models::Period;
use crate::state::use_dashboard;
use crate::view::charts::{PieChart, TrendChart, TrendPlot};

const TREND_WIDTH: f64 = 480.0;
const TREND_HEIGHT: f64 = 240.0;
const PIE_RADIUS: f64 = 90.0;

/// Trend line with period switcher, and the category breakdown
#[component]
pub fn ChartsCard() -> impl IntoView {
    let dashboard = use_dashboard();
    let set_period = create_action(move |period: &Period| {
        let period = *period;
        let store = dashboard.dashboard();
        async move { store.set_period(period).await }
    });

    let period_buttons = Period::ALL
        .into_iter()
        .map(|period| {
            view! {
                <button
                    class="btn-period"
                    class:active=move || dashboard.with(|s| s.period == period)
                    data-period=period.as_str()
                    on:click=move |_| set_period.dispatch(period)
                >
                    {period.button_label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="card chart-card">
            <div class="chart-header">
                <h3>"Consumption trend"</h3>
                <div class="period-buttons">{period_buttons}</div>
            </div>
            {move || {
                dashboard
                    .with(|s| s.trend.current().cloned())
                    .map(|instance| view! { <TrendSvg chart=instance.chart /> })
            }}
        </div>
        <div class="card chart-card">
            <h3>"Category breakdown"</h3>
            {move || {
                dashboard
                    .with(|s| s.pie.current().cloned())
                    .map(|instance| view! { <PieSvg chart=instance.chart /> })
            }}
        </div>
    }
}

#[component]
fn TrendSvg(chart: TrendChart) -> impl IntoView {
    if chart.is_empty() {
        return view! { <p class="placeholder-text">"No data for this period yet."</p> }
            .into_view();
    }

    let TrendPlot {
        width,
        height,
        actual_points,
        target_points,
        baseline_y,
        x_labels,
        y_max,
    } = chart.plot(TREND_WIDTH, TREND_HEIGHT);

    let labels = x_labels
        .into_iter()
        .map(|(x, label)| {
            view! {
                <text x=x y={height - 8.0} text-anchor="middle" class="chart-label">
                    {label}
                </text>
            }
        })
        .collect_view();

    view! {
        <figure class="trend-chart">
            <svg
                class="chart-svg"
                viewBox=format!("0 0 {} {}", width, height)
                role="img"
                aria-label=chart.title.clone()
            >
                <line x1="44" y1=baseline_y x2={width - 12.0} y2=baseline_y class="chart-axis" />
                <text x="4" y="16" class="chart-label">{format!("{:.0} L", y_max)}</text>
                <polyline
                    points=target_points
                    class="chart-target"
                    fill="none"
                    stroke="var(--status-bad)"
                    stroke-dasharray="5,5"
                />
                <polyline
                    points=actual_points
                    class="chart-actual"
                    fill="none"
                    stroke="var(--primary-color)"
                    stroke-width="2"
                />
                {labels}
            </svg>
            <figcaption class="chart-legend">
                <span class="legend-actual">{chart.actual.label.clone()}</span>
                <span class="legend-target">{chart.target.label.clone()}</span>
            </figcaption>
        </figure>
    }
    .into_view()
}

#[component]
fn PieSvg(chart: PieChart) -> impl IntoView {
    if chart.is_empty() {
        return view! { <p class="placeholder-text">"No consumption logged yet."</p> }.into_view();
    }

    let (cx, cy, r) = (PIE_RADIUS + 10.0, PIE_RADIUS + 10.0, PIE_RADIUS);
    let size = 2.0 * cx;

    let sectors = chart
        .slices
        .iter()
        .map(|slice| {
            if slice.is_full_circle() {
                view! { <circle cx=cx cy=cy r=r fill=slice.color /> }.into_view()
            } else {
                view! { <path d=slice.path(cx, cy, r) fill=slice.color /> }.into_view()
            }
        })
        .collect_view();

    let legend = chart
        .slices
        .iter()
        .map(|slice| {
            view! {
                <li>
                    <span
                        class="legend-swatch"
                        style=format!("background-color: {}", slice.color)
                    ></span>
                    {format!("{} ({:.0}%)", slice.label, slice.percent())}
                </li>
            }
        })
        .collect_view();

    view! {
        <figure class="pie-chart">
            <svg
                class="chart-svg"
                viewBox=format!("0 0 {} {}", size, size)
                role="img"
                aria-label=chart.title.clone()
            >
                {sectors}
            </svg>
            <ul class="chart-legend">{legend}</ul>
        </figure>
    }
    .into_view()
}
