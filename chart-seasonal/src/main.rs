//! Monthly Climatology Chart
//!
//! Plots climatological monthly values for the selected area on an ordinal
//! month axis. Points arrive keyed by month name and are ordered by the
//! declared month domain, not by arrival order; marks sit centered in their
//! month band.

use chrono::{SecondsFormat, Utc};
use dioxus::prelude::*;
use met_chart::scale::ScaleKind;
use met_chart_ui::components::{
    AreaSelector, ChartContainer, ChartHeader, ErrorDisplay, FieldSelector, LoadingSpinner,
    SeriesChart,
};
use met_chart_ui::state::AppState;
use met_client::PortalClient;
use met_core::field::field_by_code;
use met_core::run::recent_runs;

/// Ordinal x-axis domain: calendar month order.
const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Climatology field codes offered by this app.
const CLIMATOLOGY_FIELDS: [&str; 2] = ["climtemp", "climprec"];

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("seasonal-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Climatology still addresses a model run; use the newest one.
    use_effect(move || {
        state.field.set("climtemp".to_string());
        let runs: Vec<String> = recent_runs(Utc::now(), 1)
            .iter()
            .map(|t| t.to_rfc3339_opts(SecondsFormat::Secs, true))
            .collect();
        if let Some(latest) = runs.first() {
            state.run.set(latest.clone());
        }
        state.runs.set(runs);
        state.loading.set(false);
    });

    use_effect(move || {
        let Some(filter) = state.filter() else {
            return;
        };

        let generation = state.next_generation();
        let client = PortalClient::default_portal();
        spawn(async move {
            match client.fetch_series(&filter).await {
                Ok(series) => {
                    if !state.is_current(generation) {
                        log::debug!("discarding stale climatology response");
                        return;
                    }
                    state.series.set(series);
                    state.error_msg.set(None);
                }
                Err(e) => {
                    log::error!("climatology fetch failed: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to fetch climatology: {}", e)));
                    state.series.set(Vec::new());
                }
            }
        });
    });

    let unit_description = field_by_code(&(state.field)())
        .map(|f| format!("{} ({})", f.name, f.unit))
        .unwrap_or_default();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Monthly Climatology".to_string(),
                unit_description,
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
                        codes: CLIMATOLOGY_FIELDS.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                    }
                    AreaSelector {}
                }

                ChartContainer {
                    loading: false,
                    min_height: 420,
                    SeriesChart {
                        series: (state.series)(),
                        kind: ScaleKind::Ordinal,
                        domain: MONTHS.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                    }
                }
            }
        }
    }
}
