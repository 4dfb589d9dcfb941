//! Dropdown selector for choosing a forecast field.

use crate::state::AppState;
use dioxus::prelude::*;
use met_core::field::FIELDS;

/// Props for FieldSelector
#[derive(Props, Clone, PartialEq)]
pub struct FieldSelectorProps {
    /// Restrict the dropdown to these field codes; empty shows the whole
    /// catalog.
    #[props(default)]
    pub codes: Vec<String>,
}

/// Field dropdown selector.
/// Reads the catalog and updates the selected field code on change.
#[component]
pub fn FieldSelector(props: FieldSelectorProps) -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.field)();

    let fields: Vec<_> = FIELDS
        .iter()
        .filter(|f| props.codes.is_empty() || props.codes.iter().any(|c| c == f.code))
        .collect();

    let on_change = move |evt: Event<FormData>| {
        state.field.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0;",
            label {
                r#for: "field-select",
                style: "font-weight: bold; margin-right: 8px;",
                "Field: "
            }
            select {
                id: "field-select",
                onchange: on_change,
                for field in fields {
                    option {
                        value: "{field.code}",
                        selected: field.code == selected,
                        "{field.name} [{field.unit}]"
                    }
                }
            }
        }
    }
}
