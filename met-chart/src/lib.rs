//! Chart math for the portal's SVG charts.
//!
//! This crate turns series data into renderable geometry:
//! - `scale`: domain-to-pixel mappings for linear, ordinal and time axes
//! - `sort`: point-ordering strategies selected by the axis scale kind
//! - `path`: SVG path strings for line, area and uncertainty-range traces

pub mod path;
pub mod scale;
pub mod sort;
