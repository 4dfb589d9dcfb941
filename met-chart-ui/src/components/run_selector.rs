//! Dropdown selector for the model run reference time.

use crate::state::AppState;
use chrono::DateTime;
use dioxus::prelude::*;

/// Label shown for one run option ("14 Mar 12 UTC").
fn run_label(rfc3339: &str) -> String {
    match DateTime::parse_from_rfc3339(rfc3339) {
        Ok(t) => t.format("%d %b %H UTC").to_string(),
        Err(_) => rfc3339.to_string(),
    }
}

/// Model run dropdown selector.
/// Options come from the run list the app populated on startup.
#[component]
pub fn RunSelector() -> Element {
    let mut state = use_context::<AppState>();
    let runs = state.runs.read().clone();
    let selected = (state.run)();

    let on_change = move |evt: Event<FormData>| {
        state.run.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "run-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Model run: "
            }
            select {
                id: "run-select",
                onchange: on_change,
                for run in runs.iter() {
                    option {
                        value: "{run}",
                        selected: *run == selected,
                        {run_label(run)}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::run_label;

    #[test]
    fn test_run_label() {
        assert_eq!(run_label("2026-03-14T12:00:00Z"), "14 Mar 12 UTC");
        assert_eq!(run_label("garbage"), "garbage");
    }
}
