//! Series data model: named ordered sequences of plotted samples.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Key of a plotted sample: a timestamp, a plain number, or a category name.
///
/// The untagged representation matches the portal payload, where `name` is
/// an RFC 3339 string for time axes, a number for linear axes, and any other
/// string for ordinal axes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PointKey {
    Time(DateTime<Utc>),
    Number(f64),
    Category(String),
}

impl PointKey {
    pub fn as_time(&self) -> Option<DateTime<Utc>> {
        match self {
            PointKey::Time(t) => Some(*t),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PointKey::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_category(&self) -> Option<&str> {
        match self {
            PointKey::Category(c) => Some(c),
            _ => None,
        }
    }

    /// Label used for tooltips and tick fallback.
    pub fn label(&self) -> String {
        match self {
            PointKey::Time(t) => t.format("%Y-%m-%d %H:%M").to_string(),
            PointKey::Number(v) => v.to_string(),
            PointKey::Category(c) => c.clone(),
        }
    }
}

/// A single plotted sample.
///
/// `min`/`max` bound an uncertainty band when present; consumers fall back
/// to `value` for a missing bound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub name: PointKey,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl SeriesPoint {
    pub fn new(name: PointKey, value: f64) -> Self {
        Self {
            name,
            value,
            min: None,
            max: None,
        }
    }
}

/// A named, ordered sequence of points forming one chart trace.
///
/// Series are replaced wholesale when upstream data refreshes; points are
/// never mutated in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    /// Parse the portal's series payload (a JSON array of series).
    pub fn from_json(body: &str) -> Result<Vec<Series>, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Lowest and highest plotted value across all series, including any
    /// uncertainty bounds. None when no points exist.
    pub fn value_extent(series: &[Series]) -> Option<(f64, f64)> {
        let mut extent: Option<(f64, f64)> = None;
        for s in series {
            for p in &s.points {
                let lo = p.min.unwrap_or(p.value).min(p.value);
                let hi = p.max.unwrap_or(p.value).max(p.value);
                extent = Some(match extent {
                    Some((a, b)) => (a.min(lo), b.max(hi)),
                    None => (lo, hi),
                });
            }
        }
        extent
    }

    /// Earliest and latest time key across all series. None when no point
    /// carries a time key.
    pub fn time_extent(series: &[Series]) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let mut extent: Option<(DateTime<Utc>, DateTime<Utc>)> = None;
        for s in series {
            for p in &s.points {
                if let Some(t) = p.name.as_time() {
                    extent = Some(match extent {
                        Some((a, b)) => (a.min(t), b.max(t)),
                        None => (t, t),
                    });
                }
            }
        }
        extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // Shape returned by the series endpoint for a point forecast.
    const STR_RESULT: &str = r#"[
        {"name":"Temperature","points":[
            {"name":"2026-03-14T00:00:00Z","value":11.2,"min":9.8,"max":12.4},
            {"name":"2026-03-14T03:00:00Z","value":9.7,"min":8.1,"max":10.9}
        ]},
        {"name":"Precipitation","points":[
            {"name":"2026-03-14T03:00:00Z","value":0.4}
        ]}
    ]"#;

    #[test]
    fn test_from_json() {
        let series = Series::from_json(STR_RESULT).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "Temperature");
        assert_eq!(series[0].points[0].value, 11.2);
        assert_eq!(series[0].points[0].max, Some(12.4));
        assert_eq!(series[1].points[0].min, None);
    }

    #[test]
    fn test_point_key_untagged() {
        let time: PointKey = serde_json::from_str("\"2026-03-14T00:00:00Z\"").unwrap();
        assert!(time.as_time().is_some());

        let number: PointKey = serde_json::from_str("3.5").unwrap();
        assert_eq!(number.as_number(), Some(3.5));

        let category: PointKey = serde_json::from_str("\"Jan\"").unwrap();
        assert_eq!(category.as_category(), Some("Jan"));
    }

    #[test]
    fn test_value_extent_includes_bounds() {
        let series = Series::from_json(STR_RESULT).unwrap();
        let (lo, hi) = Series::value_extent(&series).unwrap();
        assert_eq!(lo, 0.4);
        assert_eq!(hi, 12.4);
    }

    #[test]
    fn test_time_extent() {
        let series = Series::from_json(STR_RESULT).unwrap();
        let (start, end) = Series::time_extent(&series).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2026, 3, 14, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2026, 3, 14, 3, 0, 0).unwrap());
    }

    #[test]
    fn test_extent_empty() {
        assert_eq!(Series::value_extent(&[]), None);
        assert_eq!(Series::time_extent(&[]), None);
    }
}
