//! Forecast map viewer: raster frames, legend and the time slider.
//!
//! Frames and legend are fetched once per filter change and cached only for
//! that filter's lifetime. Each filter change bumps the shared request
//! generation; completions stamped with an older generation are dropped, so
//! a slow response for a superseded filter can never overwrite a newer one.

use crate::components::TimeSlider;
use crate::state::AppState;
use base64::Engine as _;
use chrono::Utc;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use met_client::PortalClient;
use met_core::field::field_by_code;
use met_core::run::{initial_offset, offset_sequence, ModelRun, FORECAST_HORIZON_HOURS};
use met_core::slider::TimeSliderModel;
use std::collections::HashMap;

/// Interval between carousel steps while playing, in milliseconds.
const SLIDE_INTERVAL_MS: u32 = 750;

fn image_data_url(bytes: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

/// Props for MapViewer
#[derive(Props, Clone, PartialEq)]
pub struct MapViewerProps {
    /// Portal API root the viewer fetches from
    #[props(default = met_client::endpoints::DEFAULT_BASE_URL.to_string())]
    pub base_url: String,
}

/// Map viewer bound to the shared filter state.
#[component]
pub fn MapViewer(props: MapViewerProps) -> Element {
    let mut state = use_context::<AppState>();
    let mut slider = use_signal(|| TimeSliderModel::new(0, 0));
    let mut offsets = use_signal(Vec::<u32>::new);
    let mut frames = use_signal(HashMap::<u32, String>::new);
    let mut legend = use_signal(|| None::<String>);

    let base_url = props.base_url.clone();
    // Refetch legend and frames whenever the filter changes.
    use_effect(move || {
        let Some(filter) = state.filter() else {
            return;
        };

        let generation = state.next_generation();

        // The cache lives exactly as long as one filter value.
        frames.set(HashMap::new());
        legend.set(None);

        let field = match field_by_code(&filter.field) {
            Some(f) => f,
            None => {
                log::error!("unknown field code: {}", filter.field);
                state
                    .error_msg
                    .set(Some(format!("Unknown field: {}", filter.field)));
                return;
            }
        };

        let sequence = offset_sequence(field, FORECAST_HORIZON_HOURS);
        let start = initial_offset(field, filter.run, Utc::now());
        let start_index = sequence.iter().position(|&o| o >= start).unwrap_or(0);
        slider.set(TimeSliderModel::new(sequence.len(), start_index));
        offsets.set(sequence.clone());

        let client = PortalClient::new(base_url.clone());

        {
            let client = client.clone();
            let filter = filter.clone();
            spawn(async move {
                match client.fetch_legend(&filter).await {
                    Ok(bytes) => {
                        if !state.is_current(generation) {
                            log::debug!("discarding stale legend response");
                            return;
                        }
                        legend.set(Some(image_data_url(&bytes)));
                    }
                    Err(e) => {
                        log::error!("legend fetch failed: {}", e);
                        state
                            .error_msg
                            .set(Some(format!("Failed to fetch legend: {}", e)));
                    }
                }
            });
        }

        spawn(async move {
            for offset in sequence {
                match client.fetch_map_image(&filter, offset).await {
                    Ok(bytes) => {
                        if !state.is_current(generation) {
                            log::debug!("discarding stale frame response (+{} h)", offset);
                            return;
                        }
                        frames.write().insert(offset, image_data_url(&bytes));
                    }
                    Err(e) => {
                        // Missing frames leave a gap; the slider still works.
                        log::error!("map frame +{} h fetch failed: {}", offset, e);
                    }
                }
            }
        });
    });

    // Drive the carousel while playing.
    use_future(move || async move {
        loop {
            TimeoutFuture::new(SLIDE_INTERVAL_MS).await;
            if slider.peek().is_playing() {
                slider.write().advance();
            }
        }
    });

    let offsets_now = offsets();
    let current_frame = slider()
        .current(&offsets_now)
        .and_then(|offset| frames().get(offset).cloned());
    let run = state
        .filter()
        .map(|f| ModelRun::new("mesoscale", f.run));
    let legend_src = legend();

    rsx! {
        div {
            style: "display: flex; gap: 16px; align-items: flex-start;",
            div {
                style: "flex: 1;",
                if let Some(src) = current_frame {
                    img {
                        src: "{src}",
                        style: "width: 100%; border: 1px solid #ddd;",
                    }
                } else {
                    div {
                        style: "display: flex; justify-content: center; align-items: center; min-height: 320px; color: #666; border: 1px solid #ddd;",
                        "Loading map frames..."
                    }
                }
                TimeSlider {
                    slider,
                    offsets: offsets_now.clone(),
                    run,
                }
            }
            if let Some(src) = legend_src {
                img {
                    src: "{src}",
                    style: "width: 80px;",
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::image_data_url;

    #[test]
    fn test_image_data_url() {
        assert_eq!(image_data_url(b"abc"), "data:image/png;base64,YWJj");
    }
}
