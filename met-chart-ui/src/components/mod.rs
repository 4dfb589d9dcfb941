//! Reusable Dioxus RSX components for the portal apps.

mod area_selector;
mod chart_container;
mod chart_header;
mod date_range_picker;
mod error_display;
mod field_selector;
mod loading_spinner;
mod map_viewer;
mod resolution_selector;
mod run_selector;
mod series_chart;
mod time_slider;

pub use area_selector::AreaSelector;
pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use date_range_picker::DateRangePicker;
pub use error_display::ErrorDisplay;
pub use field_selector::FieldSelector;
pub use loading_spinner::LoadingSpinner;
pub use map_viewer::MapViewer;
pub use resolution_selector::ResolutionSelector;
pub use run_selector::RunSelector;
pub use series_chart::SeriesChart;
pub use time_slider::TimeSlider;
