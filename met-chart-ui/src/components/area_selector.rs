//! Dropdown selector for choosing a geographic area.

use crate::state::AppState;
use dioxus::prelude::*;
use met_core::area::AREAS;

/// Area dropdown selector.
/// Reads the area catalog and updates the selected area code on change.
#[component]
pub fn AreaSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.area)();

    let on_change = move |evt: Event<FormData>| {
        state.area.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "area-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Area: "
            }
            select {
                id: "area-select",
                onchange: on_change,
                for area in AREAS.iter() {
                    option {
                        value: "{area.code}",
                        selected: area.code == selected,
                        "{area.name}"
                    }
                }
            }
        }
    }
}
