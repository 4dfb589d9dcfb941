//! Portal REST endpoint URL builders.
//!
//! Pure string assembly so the request shapes are testable without a
//! network. Parameter names and order follow the portal API docs.

use met_core::filter::Filter;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://data.meteoportal.example/api/v1";

/// Series data for a filter (point forecast or observation window).
pub fn series_url(base: &str, filter: &Filter) -> String {
    format!("{}/series?{}", base, filter.query_string())
}

/// Raster map frame for a filter at one forecast offset.
pub fn map_image_url(base: &str, filter: &Filter, offset: u32) -> String {
    format!("{}/maps/image?{}&offset={}", base, filter.query_string(), offset)
}

/// Color legend for a filter's field.
pub fn legend_url(base: &str, filter: &Filter) -> String {
    format!("{}/maps/legend?{}", base, filter.query_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use met_core::filter::Filter;

    fn sample_filter() -> Filter {
        let run = chrono::Utc.with_ymd_and_hms(2026, 3, 14, 12, 0, 0).unwrap();
        Filter::new("prec3", run, "0.05deg", "iberia")
    }

    #[test]
    fn test_series_url() {
        let url = series_url("https://example.test/api/v1", &sample_filter());
        assert_eq!(
            url,
            "https://example.test/api/v1/series?field=prec3&run=2026-03-14T12:00:00Z&resolution=0.05deg&area=iberia&platform=web"
        );
    }

    #[test]
    fn test_map_image_url_appends_offset() {
        let url = map_image_url("https://example.test/api/v1", &sample_filter(), 9);
        assert!(url.starts_with("https://example.test/api/v1/maps/image?field=prec3"));
        assert!(url.ends_with("&offset=9"));
    }

    #[test]
    fn test_legend_url() {
        let url = legend_url("https://example.test/api/v1", &sample_filter());
        assert!(url.starts_with("https://example.test/api/v1/maps/legend?field=prec3"));
    }
}
