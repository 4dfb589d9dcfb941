//! SVG path generators for line, area and uncertainty-range traces.
//!
//! Each generator maps an ordered point slice through the axis scales and
//! assembles a path string. Empty input yields an empty string; points whose
//! key the x-axis cannot resolve are skipped.

use crate::scale::{AxisScale, LinearScale};
use met_core::series::SeriesPoint;
use std::fmt::Write;

fn push_cmd(out: &mut String, cmd: char, x: f64, y: f64) {
    // Write into a String cannot fail.
    let _ = write!(out, "{}{:.1},{:.1}", cmd, x, y);
}

/// `M/L` polyline through each resolvable point.
pub fn line_path(points: &[SeriesPoint], x: &AxisScale, y: &LinearScale) -> String {
    let mut out = String::new();
    for point in points {
        let Some(px) = x.project(&point.name) else {
            continue;
        };
        let py = y.scale(point.value);
        let cmd = if out.is_empty() { 'M' } else { 'L' };
        push_cmd(&mut out, cmd, px, py);
    }
    out
}

/// Closed polygon filling from the y baseline up to each value.
///
/// The baseline is the pixel of domain value 0, clamped into the y range so
/// all-positive (or all-negative) domains fill from the chart edge.
pub fn area_path(points: &[SeriesPoint], x: &AxisScale, y: &LinearScale) -> String {
    let resolved: Vec<(f64, f64)> = points
        .iter()
        .filter_map(|p| x.project(&p.name).map(|px| (px, y.scale(p.value))))
        .collect();
    if resolved.is_empty() {
        return String::new();
    }

    let baseline = baseline_pixel(y);
    let mut out = String::new();
    for (i, (px, py)) in resolved.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        push_cmd(&mut out, cmd, *px, *py);
    }
    let (last_x, _) = resolved[resolved.len() - 1];
    let (first_x, _) = resolved[0];
    push_cmd(&mut out, 'L', last_x, baseline);
    push_cmd(&mut out, 'L', first_x, baseline);
    out.push('Z');
    out
}

/// Closed band between each point's `max` and `min`, walking the upper edge
/// forward and the lower edge back. A missing bound falls back to `value`,
/// collapsing that point's band to the trace itself.
pub fn range_path(points: &[SeriesPoint], x: &AxisScale, y: &LinearScale) -> String {
    let resolved: Vec<(f64, f64, f64)> = points
        .iter()
        .filter_map(|p| {
            let px = x.project(&p.name)?;
            let top = y.scale(p.max.unwrap_or(p.value));
            let bottom = y.scale(p.min.unwrap_or(p.value));
            Some((px, top, bottom))
        })
        .collect();
    if resolved.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    for (i, (px, top, _)) in resolved.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        push_cmd(&mut out, cmd, *px, *top);
    }
    for (px, _, bottom) in resolved.iter().rev() {
        push_cmd(&mut out, 'L', *px, *bottom);
    }
    out.push('Z');
    out
}

/// Pixel of domain value 0 on the y scale, clamped into the pixel range.
fn baseline_pixel(y: &LinearScale) -> f64 {
    let (r0, r1) = y.range();
    let (lo, hi) = if r0 <= r1 { (r0, r1) } else { (r1, r0) };
    y.scale(0.0).clamp(lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::BandScale;
    use met_core::series::PointKey;

    fn number_point(x: f64, value: f64) -> SeriesPoint {
        SeriesPoint::new(PointKey::Number(x), value)
    }

    fn identity_axis() -> AxisScale {
        AxisScale::Linear(LinearScale::new((0.0, 100.0), (0.0, 100.0)))
    }

    fn identity_y() -> LinearScale {
        LinearScale::new((0.0, 100.0), (0.0, 100.0))
    }

    #[test]
    fn test_empty_input_yields_empty_paths() {
        let x = identity_axis();
        let y = identity_y();
        assert_eq!(line_path(&[], &x, &y), "");
        assert_eq!(area_path(&[], &x, &y), "");
        assert_eq!(range_path(&[], &x, &y), "");
    }

    #[test]
    fn test_line_path() {
        let points = vec![number_point(0.0, 10.0), number_point(50.0, 20.0)];
        let path = line_path(&points, &identity_axis(), &identity_y());
        assert_eq!(path, "M0.0,10.0L50.0,20.0");
    }

    #[test]
    fn test_line_path_single_point() {
        let points = vec![number_point(25.0, 5.0)];
        let path = line_path(&points, &identity_axis(), &identity_y());
        assert_eq!(path, "M25.0,5.0");
    }

    #[test]
    fn test_line_path_skips_unresolvable_points() {
        let points = vec![
            number_point(0.0, 10.0),
            SeriesPoint::new(PointKey::Category("Jan".to_string()), 99.0),
            number_point(50.0, 20.0),
        ];
        let path = line_path(&points, &identity_axis(), &identity_y());
        assert_eq!(path, "M0.0,10.0L50.0,20.0");
    }

    #[test]
    fn test_line_path_centers_band_categories() {
        let domain: Vec<String> = ["DJF", "MAM"].iter().map(|s| s.to_string()).collect();
        let x = AxisScale::Band(BandScale::new(domain, (0.0, 200.0)));
        let points = vec![
            SeriesPoint::new(PointKey::Category("DJF".to_string()), 1.0),
            SeriesPoint::new(PointKey::Category("MAM".to_string()), 2.0),
        ];
        let path = line_path(&points, &x, &identity_y());
        // bandwidth 100, centers at 50 and 150
        assert_eq!(path, "M50.0,1.0L150.0,2.0");
    }

    #[test]
    fn test_area_path_closes_to_baseline() {
        let points = vec![number_point(0.0, 10.0), number_point(50.0, 20.0)];
        let path = area_path(&points, &identity_axis(), &identity_y());
        assert_eq!(path, "M0.0,10.0L50.0,20.0L50.0,0.0L0.0,0.0Z");
    }

    #[test]
    fn test_area_baseline_clamped_into_range() {
        // Domain 10..20 never crosses zero; the baseline clamps to the
        // bottom of an inverted y range.
        let y = LinearScale::new((10.0, 20.0), (100.0, 0.0));
        let x = identity_axis();
        let points = vec![number_point(0.0, 15.0)];
        let path = area_path(&points, &x, &y);
        assert_eq!(path, "M0.0,50.0L0.0,100.0L0.0,100.0Z");
    }

    #[test]
    fn test_range_path_uses_bounds() {
        let mut low = number_point(0.0, 10.0);
        low.min = Some(5.0);
        low.max = Some(15.0);
        let mut high = number_point(50.0, 20.0);
        high.min = Some(12.0);
        high.max = Some(28.0);
        let path = range_path(&[low, high], &identity_axis(), &identity_y());
        assert_eq!(path, "M0.0,15.0L50.0,28.0L50.0,12.0L0.0,5.0Z");
    }

    #[test]
    fn test_range_path_falls_back_to_value() {
        let points = vec![number_point(0.0, 10.0)];
        let path = range_path(&points, &identity_axis(), &identity_y());
        // min and max both collapse to the value
        assert_eq!(path, "M0.0,10.0L0.0,10.0Z");
    }
}
