//! Point-ordering strategies, selected by the declared axis scale kind.
//!
//! All functions return a reordered copy and never touch point identity.
//! Sorting is stable, so equal keys keep their incoming order.

use crate::scale::ScaleKind;
use met_core::series::SeriesPoint;
use std::cmp::Ordering;

/// Sort direction for numeric ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Order points the way the declared x-axis expects: by timestamp for time
/// axes, by numeric key for linear axes, by declared domain order for
/// ordinal axes.
pub fn sort_for_axis(
    points: &[SeriesPoint],
    kind: ScaleKind,
    domain: &[String],
) -> Vec<SeriesPoint> {
    match kind {
        ScaleKind::Time => sort_by_time(points),
        ScaleKind::Linear => sort_by_number(points, SortDirection::Ascending),
        ScaleKind::Ordinal => sort_by_domain(points, domain),
    }
}

/// Ascending by timestamp. Points without a time key compare equal to
/// everything and keep their incoming position.
pub fn sort_by_time(points: &[SeriesPoint]) -> Vec<SeriesPoint> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| match (a.name.as_time(), b.name.as_time()) {
        (Some(ta), Some(tb)) => ta.cmp(&tb),
        _ => Ordering::Equal,
    });
    sorted
}

/// By numeric key. Points without a numeric key compare equal.
pub fn sort_by_number(points: &[SeriesPoint], direction: SortDirection) -> Vec<SeriesPoint> {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match (a.name.as_number(), b.name.as_number()) {
            (Some(va), Some(vb)) => va.partial_cmp(&vb).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

/// By index in the declared domain. Keys absent from the domain take index
/// −1, so they sort ahead of every domain member, keeping their relative
/// order among themselves.
pub fn sort_by_domain(points: &[SeriesPoint], domain: &[String]) -> Vec<SeriesPoint> {
    let index_of = |p: &SeriesPoint| -> i64 {
        p.name
            .as_category()
            .and_then(|c| domain.iter().position(|d| d == c))
            .map(|i| i as i64)
            .unwrap_or(-1)
    };
    let mut sorted = points.to_vec();
    sorted.sort_by_key(index_of);
    sorted
}
