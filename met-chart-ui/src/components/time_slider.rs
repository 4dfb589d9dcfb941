//! Range slider with play/pause for stepping through forecast frames.

use dioxus::prelude::*;
use met_core::run::ModelRun;
use met_core::slider::TimeSliderModel;

/// Props for TimeSlider
#[derive(Props, Clone, PartialEq)]
pub struct TimeSliderProps {
    /// The slider model, owned by the map viewer
    pub slider: Signal<TimeSliderModel>,
    /// Forecast offsets (hours) the slider steps over
    pub offsets: Vec<u32>,
    /// Run the offsets are relative to, for the valid-time label
    pub run: Option<ModelRun>,
}

/// Slider + play/pause control bound to a [`TimeSliderModel`].
#[component]
pub fn TimeSlider(props: TimeSliderProps) -> Element {
    let mut slider = props.slider;
    let model = (props.slider)();

    if model.is_empty() {
        return rsx! {
            div {
                style: "margin: 8px 0; color: #666; font-size: 12px;",
                "No frames available"
            }
        };
    }

    let max = model.len() - 1;
    let index = model.index();
    let label = match (&props.run, model.current(&props.offsets)) {
        (Some(run), Some(offset)) => format!(
            "{} (+{} h)",
            run.valid_time(*offset).format("%a %d %b %H:%M UTC"),
            offset
        ),
        _ => String::new(),
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            button {
                style: "width: 36px;",
                onclick: move |_| slider.write().toggle_play(),
                if model.is_playing() { "❚❚" } else { "▶" }
            }
            input {
                r#type: "range",
                style: "flex: 1;",
                min: "0",
                max: "{max}",
                value: "{index}",
                oninput: move |evt: Event<FormData>| {
                    if let Ok(i) = evt.value().parse::<usize>() {
                        slider.write().jump_to(i);
                    }
                },
            }
            span {
                style: "font-size: 12px; color: #333; min-width: 180px;",
                "{label}"
            }
        }
    }
}
