//! Dropdown selector for the model grid resolution.

use crate::state::AppState;
use dioxus::prelude::*;
use met_core::area::RESOLUTIONS;

/// Resolution dropdown selector.
#[component]
pub fn ResolutionSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.resolution)();

    let on_change = move |evt: Event<FormData>| {
        state.resolution.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "resolution-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Resolution: "
            }
            select {
                id: "resolution-select",
                onchange: on_change,
                for resolution in RESOLUTIONS.iter() {
                    option {
                        value: "{resolution}",
                        selected: *resolution == selected,
                        "{resolution}"
                    }
                }
            }
        }
    }
}
