//! Point Forecast Meteogram
//!
//! Displays the forecast series for the selected field, area and model run:
//! one line per series, precipitation as a filled area, and the model's
//! min/max spread as an uncertainty band.
//!
//! Data flow:
//! 1. On mount, the latest synoptic runs are listed and the newest selected.
//! 2. Every filter change bumps the request generation and fetches the
//!    series payload from the portal.
//! 3. Responses for superseded filters are dropped; current ones replace
//!    the plotted series wholesale.

use chrono::{SecondsFormat, Utc};
use dioxus::prelude::*;
use met_chart::scale::ScaleKind;
use met_chart_ui::components::{
    AreaSelector, ChartContainer, ChartHeader, DateRangePicker, ErrorDisplay, FieldSelector,
    LoadingSpinner, RunSelector, SeriesChart,
};
use met_chart_ui::state::AppState;
use met_client::PortalClient;
use met_core::field::field_by_code;
use met_core::run::recent_runs;
use met_core::series::Series;
use met_core::validate::validate_date_range;
use met_core::wind::wind_nomenclature;

/// Field codes offered by the meteogram (forecast fields only).
const FORECAST_FIELDS: [&str; 10] = [
    "temp2m", "rh2m", "wind10m", "winddir10m", "mslp", "cloudcover", "prec1", "prec3", "prec6",
    "snow3",
];

/// How many recent synoptic runs the run selector offers.
const RUN_CHOICES: usize = 4;

/// "Name: value" for a series' newest point. Wind directions get their
/// compass label instead of raw degrees.
fn latest_value_label(series: &Series) -> Option<String> {
    let last = series.points.last()?;
    if series.name == "Wind direction" {
        if let Some(label) = wind_nomenclature(last.value.round() as i32) {
            return Some(format!("{}: {}", series.name, label));
        }
    }
    Some(format!("{}: {:.1}", series.name, last.value))
}

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("meteogram-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // List the recent model runs and select the newest.
    use_effect(move || {
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

    // Fetch the series whenever the filter changes.
    use_effect(move || {
        let Some(mut filter) = state.filter() else {
            return;
        };

        let start_date = (state.start_date)();
        let end_date = (state.end_date)();
        if !start_date.is_empty() || !end_date.is_empty() {
            match validate_date_range(&start_date, &end_date) {
                Ok((start, end)) => filter = filter.with_range(start, end),
                Err(e) => {
                    state
                        .error_msg
                        .set(Some(format!("Invalid date range: {}", e)));
                    return;
                }
            }
        }

        let generation = state.next_generation();
        let client = PortalClient::default_portal();
        spawn(async move {
            match client.fetch_series(&filter).await {
                Ok(series) => {
                    if !state.is_current(generation) {
                        log::debug!("discarding stale series response");
                        return;
                    }
                    log::info!("fetched {} series", series.len());
                    state.series.set(series);
                    state.error_msg.set(None);
                }
                Err(e) => {
                    log::error!("series fetch failed: {}", e);
                    state
                        .error_msg
                        .set(Some(format!("Failed to fetch forecast series: {}", e)));
                    state.series.set(Vec::new());
                }
            }
        });
    });

    let unit_description = field_by_code(&(state.field)())
        .map(|f| format!("{} ({})", f.name, f.unit))
        .unwrap_or_default();

    let latest_labels: Vec<String> = (state.series)()
        .iter()
        .filter_map(latest_value_label)
        .collect();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: "Point Forecast Meteogram".to_string(),
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
                        codes: FORECAST_FIELDS.iter().map(|s| s.to_string()).collect::<Vec<_>>(),
                    }
                    AreaSelector {}
                    RunSelector {}
                    DateRangePicker {}
                }

                ChartContainer {
                    loading: false,
                    min_height: 420,
                    SeriesChart {
                        series: (state.series)(),
                        kind: ScaleKind::Time,
                        show_range: true,
                        area_series: vec!["Precipitation".to_string()],
                    }
                }

                div {
                    style: "display: flex; gap: 16px; font-size: 12px; color: #333; margin-top: 4px;",
                    for label in latest_labels.iter() {
                        span { "{label}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::latest_value_label;
    use met_core::series::{PointKey, Series, SeriesPoint};

    #[test]
    fn test_latest_value_label_wind_direction() {
        let series = Series {
            name: "Wind direction".to_string(),
            points: vec![SeriesPoint::new(PointKey::Number(0.0), 44.0)],
        };
        assert_eq!(
            latest_value_label(&series),
            Some("Wind direction: N-NE".to_string())
        );
    }

    #[test]
    fn test_latest_value_label_plain_series() {
        let series = Series {
            name: "Temperature".to_string(),
            points: vec![SeriesPoint::new(PointKey::Number(0.0), 11.25)],
        };
        assert_eq!(
            latest_value_label(&series),
            Some("Temperature: 11.2".to_string())
        );
    }

    #[test]
    fn test_latest_value_label_empty_series() {
        let series = Series {
            name: "Temperature".to_string(),
            points: Vec::new(),
        };
        assert_eq!(latest_value_label(&series), None);
    }
}
