//! Domain-to-pixel scale mapping for chart axes.
//!
//! A scale is rebuilt from the data extent on every render cycle and owned
//! by the chart component for that cycle only.

use chrono::{DateTime, Utc};
use met_core::series::PointKey;

/// Axis scale discriminant declared per chart axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaleKind {
    Ordinal,
    Time,
    Linear,
}

/// Linear value-to-pixel mapping.
///
/// The range may be inverted (larger pixel for smaller value), which is how
/// y-axes are expressed in SVG coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Pixel for a domain value. A degenerate (zero-span) domain maps
    /// everything to the range start rather than dividing by zero.
    pub fn scale(&self, value: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return self.range.0;
        }
        let t = (value - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// Round-stepped tick values covering the domain, at most one step
    /// outside `count` of them.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (a, b) = self.domain;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let span = hi - lo;
        if span == 0.0 || count == 0 {
            return vec![lo];
        }
        let step = tick_step(span, count);
        let mut tick = (lo / step).ceil() * step;
        let mut out = Vec::new();
        while tick <= hi + step * 1e-6 {
            out.push(tick);
            tick += step;
        }
        out
    }
}

/// Tick step of 1/2/5 × 10^k closest to `span / count`.
fn tick_step(span: f64, count: usize) -> f64 {
    let raw = span / count.max(1) as f64;
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * base
}

/// Ordinal scale dividing the range into one equal band per category.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
}

impl BandScale {
    pub fn new(domain: Vec<String>, range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    /// Width of one band; 0 for an empty domain.
    pub fn bandwidth(&self) -> f64 {
        if self.domain.is_empty() {
            return 0.0;
        }
        (self.range.1 - self.range.0) / self.domain.len() as f64
    }

    /// Pixel of the band's leading edge; None for categories not in the
    /// declared domain.
    pub fn position(&self, category: &str) -> Option<f64> {
        let index = self.domain.iter().position(|c| c == category)?;
        Some(self.range.0 + self.bandwidth() * index as f64)
    }

    /// Band midpoint, where centered marks are drawn.
    pub fn center(&self, category: &str) -> Option<f64> {
        Some(self.position(category)? + self.bandwidth() / 2.0)
    }
}

/// Time-to-pixel mapping, linear over UTC timestamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: (DateTime<Utc>, DateTime<Utc>),
    range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: (DateTime<Utc>, DateTime<Utc>), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        self.domain
    }

    pub fn scale(&self, t: DateTime<Utc>) -> f64 {
        let span = (self.domain.1 - self.domain.0).num_milliseconds() as f64;
        if span == 0.0 {
            return self.range.0;
        }
        let elapsed = (t - self.domain.0).num_milliseconds() as f64;
        self.range.0 + (elapsed / span) * (self.range.1 - self.range.0)
    }

    /// Tick times on round hour/day boundaries covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<DateTime<Utc>> {
        let (d0, d1) = self.domain;
        if count == 0 || d1 <= d0 {
            return vec![d0];
        }
        // Steps the portal's time axes use, in hours.
        const LADDER: [i64; 9] = [1, 2, 3, 6, 12, 24, 48, 72, 168];
        let span_hours = (d1 - d0).num_seconds() as f64 / 3600.0;
        let target = span_hours / count as f64;
        let step_hours = LADDER
            .iter()
            .copied()
            .find(|&s| s as f64 >= target)
            .unwrap_or(LADDER[LADDER.len() - 1]);
        let step = step_hours * 3600;

        let mut tick = d0.timestamp().div_euclid(step) * step;
        if tick < d0.timestamp() {
            tick += step;
        }
        let mut out = Vec::new();
        while tick <= d1.timestamp() {
            if let Some(t) = DateTime::from_timestamp(tick, 0) {
                out.push(t);
            }
            tick += step;
        }
        out
    }
}

/// The x-axis of a chart, resolving point keys to pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum AxisScale {
    Linear(LinearScale),
    Band(BandScale),
    Time(TimeScale),
}

impl AxisScale {
    /// Pixel for a point key, or None when the key does not fit the axis
    /// (wrong key type, or a category outside the band domain). Band
    /// categories resolve to their band center so marks sit mid-band.
    pub fn project(&self, key: &PointKey) -> Option<f64> {
        match (self, key) {
            (AxisScale::Linear(s), PointKey::Number(v)) => Some(s.scale(*v)),
            (AxisScale::Time(s), PointKey::Time(t)) => Some(s.scale(*t)),
            (AxisScale::Band(s), PointKey::Category(c)) => s.center(c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_linear_scale_maps_endpoints() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 500.0));
        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(10.0), 500.0);
        assert_eq!(scale.scale(5.0), 250.0);
    }

    #[test]
    fn test_linear_scale_inverted_range() {
        // SVG y-axis: value 0 at the bottom (pixel 400), max at the top.
        let scale = LinearScale::new((0.0, 20.0), (400.0, 0.0));
        assert_eq!(scale.scale(0.0), 400.0);
        assert_eq!(scale.scale(20.0), 0.0);
        assert_eq!(scale.scale(10.0), 200.0);
    }

    #[test]
    fn test_linear_scale_degenerate_domain() {
        let scale = LinearScale::new((7.0, 7.0), (0.0, 100.0));
        assert_eq!(scale.scale(7.0), 0.0);
        assert_eq!(scale.scale(99.0), 0.0);
    }

    #[test]
    fn test_linear_ticks_round_steps() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 1.0));
        assert_eq!(scale.ticks(5), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);

        let scale = LinearScale::new((0.0, 1.0), (0.0, 1.0));
        let ticks = scale.ticks(4);
        assert_eq!(ticks.first(), Some(&0.0));
        assert!(ticks.iter().all(|t| *t <= 1.0 + 1e-9));
        assert!(ticks.len() >= 3);
    }

    #[test]
    fn test_band_scale_positions() {
        let domain: Vec<String> = ["DJF", "MAM", "JJA", "SON"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let scale = BandScale::new(domain, (0.0, 400.0));
        assert_eq!(scale.bandwidth(), 100.0);
        assert_eq!(scale.position("DJF"), Some(0.0));
        assert_eq!(scale.position("JJA"), Some(200.0));
        // Centering adds half the band width.
        assert_eq!(scale.center("MAM"), Some(150.0));
        assert_eq!(scale.position("XXX"), None);
    }

    #[test]
    fn test_band_scale_empty_domain() {
        let scale = BandScale::new(Vec::new(), (0.0, 400.0));
        assert_eq!(scale.bandwidth(), 0.0);
        assert_eq!(scale.position("DJF"), None);
    }

    #[test]
    fn test_time_scale_maps_linearly() {
        let d0 = Utc.with_ymd_and_hms(2026, 3, 14, 0, 0, 0).unwrap();
        let d1 = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        let scale = TimeScale::new((d0, d1), (0.0, 600.0));
        assert_eq!(scale.scale(d0), 0.0);
        assert_eq!(scale.scale(d1), 600.0);
        let mid = Utc.with_ymd_and_hms(2026, 3, 14, 6, 0, 0).unwrap();
        assert_eq!(scale.scale(mid), 300.0);
    }

    #[test]
    fn test_time_ticks_on_round_boundaries() {
        let d0 = Utc.with_ymd_and_hms(2026, 3, 14, 0, 30, 0).unwrap();
        let d1 = Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).unwrap();
        let scale = TimeScale::new((d0, d1), (0.0, 600.0));
        let ticks = scale.ticks(8);
        // 23.5 h / 8 -> 3-hourly ticks, first one at 03:00
        assert_eq!(
            ticks.first(),
            Some(&Utc.with_ymd_and_hms(2026, 3, 14, 3, 0, 0).unwrap())
        );
        assert!(ticks.contains(&Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap()));
        assert_eq!(ticks.last(), Some(&d1));
    }

    #[test]
    fn test_axis_projection_rejects_mismatched_keys() {
        let scale = AxisScale::Linear(LinearScale::new((0.0, 1.0), (0.0, 1.0)));
        assert_eq!(scale.project(&PointKey::Category("Jan".to_string())), None);
        assert_eq!(scale.project(&PointKey::Number(0.5)), Some(0.5));
    }
}
