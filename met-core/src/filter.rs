//! The filter record: one user selection, one fetch request.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Platform identifier sent with map requests.
pub const DEFAULT_PLATFORM: &str = "web";

/// User-selected query parameters determining which data to fetch.
///
/// Built by the form components, then passed by value to the fetch layer.
/// A filter is never mutated after construction; a new selection produces a
/// new filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    /// Field code (see [`crate::field::FIELDS`])
    pub field: String,
    /// Model run reference time (UTC)
    pub run: DateTime<Utc>,
    /// Grid resolution code (e.g. "0.05deg")
    pub resolution: String,
    /// Area code (see [`crate::area::AREAS`])
    pub area: String,
    /// Requesting platform, "web" for the portal SPA
    pub platform: String,
    /// Optional time-range start (observation requests)
    pub start: Option<NaiveDate>,
    /// Optional time-range end (observation requests)
    pub end: Option<NaiveDate>,
}

impl Filter {
    /// Filter with the default platform and no time range.
    pub fn new(
        field: impl Into<String>,
        run: DateTime<Utc>,
        resolution: impl Into<String>,
        area: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            run,
            resolution: resolution.into(),
            area: area.into(),
            platform: DEFAULT_PLATFORM.to_string(),
            start: None,
            end: None,
        }
    }

    /// Same filter with a time range attached.
    pub fn with_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Query-parameter pairs in the order the portal documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("field", self.field.clone()),
            (
                "run",
                self.run.to_rfc3339_opts(SecondsFormat::Secs, true),
            ),
            ("resolution", self.resolution.clone()),
            ("area", self.area.clone()),
            ("platform", self.platform.clone()),
        ];
        if let Some(start) = self.start {
            pairs.push(("start", start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end {
            pairs.push(("end", end.format("%Y-%m-%d").to_string()));
        }
        pairs
    }

    /// Pairs joined into a `k=v&k=v` query string.
    pub fn query_string(&self) -> String {
        self.query_pairs()
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_filter() -> Filter {
        let run = Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        Filter::new("prec3", run, "0.05deg", "iberia")
    }

    #[test]
    fn test_query_string() {
        let qs = sample_filter().query_string();
        assert_eq!(
            qs,
            "field=prec3&run=2026-03-14T12:00:00Z&resolution=0.05deg&area=iberia&platform=web"
        );
    }

    #[test]
    fn test_query_string_with_range() {
        let filter = sample_filter().with_range(
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
        );
        let qs = filter.query_string();
        assert!(qs.ends_with("start=2026-03-01&end=2026-03-14"));
    }

    #[test]
    fn test_filters_compare_by_value() {
        assert_eq!(sample_filter(), sample_filter());
        let mut other = sample_filter();
        other.area = "canary".to_string();
        assert_ne!(sample_filter(), other);
    }
}
