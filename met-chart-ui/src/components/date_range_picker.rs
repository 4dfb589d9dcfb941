//! Date range picker with start and end date inputs.

use crate::state::AppState;
use dioxus::prelude::*;
use met_core::validate::validate_date_range;

/// Surface a validation problem through the shared error signal, or clear
/// a previous one once the range is valid again.
fn report_validation(mut state: AppState, start: &str, end: &str) {
    if start.is_empty() && end.is_empty() {
        return;
    }
    match validate_date_range(start, end) {
        Ok(_) => state.error_msg.set(None),
        Err(e) => state
            .error_msg
            .set(Some(format!("Invalid date range: {}", e))),
    }
}

/// Date range picker for observation requests.
///
/// Invalid ranges are reported through the shared error signal; the last
/// valid range stays applied.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let start = (state.start_date)();
    let end = (state.end_date)();

    let on_start_change = move |evt: Event<FormData>| {
        let value = evt.value();
        let end_now = (state.end_date)();
        report_validation(state, &value, &end_now);
        state.start_date.set(value);
    };

    let on_end_change = move |evt: Event<FormData>| {
        let value = evt.value();
        let start_now = (state.start_date)();
        report_validation(state, &start_now, &value);
        state.end_date.set(value);
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "From: "
                input {
                    r#type: "date",
                    value: "{start}",
                    onchange: on_start_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "To: "
                input {
                    r#type: "date",
                    value: "{end}",
                    onchange: on_end_change,
                }
            }
        }
    }
}
