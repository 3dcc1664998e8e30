use leptos::*;
use wasm_bindgen::JsCast;

use crate::state::{use_dashboard, Control};
use crate::view::bill_table::parse_record_id;
use crate::view::BillTable;

/// Imported bill records with per-row delete
#[component]
pub fn BillHistoryCard() -> impl IntoView {
    let dashboard = use_dashboard();

    let delete_record = create_action(move |id: &i64| {
        let id = *id;
        let store = dashboard.dashboard();
        async move { store.delete_record(id).await }
    });

    // Single listener on the body; rows are re-rendered on every refresh
    let on_table_click = move |ev: ev::MouseEvent| {
        if let Some(id) = record_id_from_event(&ev) {
            delete_record.dispatch(id);
        }
    };

    let rows = move || match dashboard.with(|s| s.bills.clone()) {
        BillTable::Placeholder { colspan, text } => view! {
            <tr>
                <td colspan=colspan class="placeholder-text">{text}</td>
            </tr>
        }
        .into_view(),
        BillTable::Rows(rows) => rows
            .into_iter()
            .map(|row| {
                let control = Control::DeleteRecord(row.id);
                view! {
                    <tr>
                        <td>{row.date}</td>
                        <td>{row.volume}</td>
                        <td>{row.liters}</td>
                        <td>
                            <button
                                class="button button-danger button-small"
                                data-record-id=row.id
                                aria-label="Delete bill record"
                                disabled=move || dashboard.with(|s| s.is_busy(control))
                            >
                                {move || dashboard.with(|s| s.control_label(control))}
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view(),
    };

    view! {
        <div class="card bill-card">
            <h3>"Bill history"</h3>
            <table class="bill-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Volume"</th>
                        <th>"Liters"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody id="bill-history-body" on:click=on_table_click>
                    {rows}
                </tbody>
            </table>
        </div>
    }
}

/// Record id of the delete button the click landed in, if any
fn record_id_from_event(ev: &ev::MouseEvent) -> Option<i64> {
    let target = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let button = target.closest("[data-record-id]").ok()??;
    parse_record_id(&button.get_attribute("data-record-id")?)
}
