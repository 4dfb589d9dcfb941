//! Forecast Map Viewer
//!
//! Shows raster forecast maps for the selected field, area, resolution and
//! model run, with a play/pause time slider over the available forecast
//! offsets. A run from today starts at the current hour; older runs start
//! at the field's accumulation floor.

use chrono::{SecondsFormat, Utc};
use dioxus::prelude::*;
use met_chart_ui::components::{
    AreaSelector, ChartHeader, ErrorDisplay, FieldSelector, LoadingSpinner, MapViewer,
    ResolutionSelector, RunSelector,
};
use met_chart_ui::state::AppState;
use met_core::run::recent_runs;

/// Field codes with map products.
const MAP_FIELDS: [&str; 7] = [
    "temp2m", "wind10m", "mslp", "cloudcover", "prec1", "prec3", "prec6",
];

/// How many recent synoptic runs the run selector offers.
const RUN_CHOICES: usize = 4;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("map-forecast-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    use_effect(move || {
        state.field.set("prec3".to_string());
        let runs: Vec<String> = recent_runs(Utc::now(), RUN_CHOICES)
            .iter()
            .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
            .collect();
        if let Some(latest) = runs.first() {
            state.run.set(latest.clone());
        }
        state.runs.set(runs);
        state.loading.set(false);
    });

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Forecast Maps".to_string(),
                unit_description: "Model frames by forecast offset".to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            }
            if (state.loading)() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin-bottom: 8px;",
                    FieldSelector {
                        codes: MAP_FIELDS.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                    }
                    AreaSelector {}
                    ResolutionSelector {}
                    RunSelector {}
                }

                MapViewer {}
            }
        }
    }
}
