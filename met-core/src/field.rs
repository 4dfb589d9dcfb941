//! Catalog of forecast fields offered by the portal.

/// A forecast or observation field the portal can serve.
///
/// Accumulated fields (precipitation, snowfall) carry the length of their
/// accumulation period; instantaneous fields carry `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Field {
    /// Portal field code used in query parameters (e.g. "prec3")
    pub code: &'static str,
    /// Human-readable name shown in selectors
    pub name: &'static str,
    /// Display unit for chart axes and legends
    pub unit: &'static str,
    /// Accumulation period in hours; None for instantaneous fields
    pub accumulation_hours: Option<u32>,
}

impl Field {
    /// Lowest forecast offset a map frame exists for.
    ///
    /// An N-hourly accumulated field has no frame before its first full
    /// accumulation period, so its floor is N. Instantaneous fields start
    /// at the analysis (offset 0).
    pub fn offset_floor(&self) -> u32 {
        self.accumulation_hours.unwrap_or(0)
    }
}

/// Fields available from the portal.
pub const FIELDS: &[Field] = &[
    Field {
        code: "temp2m",
        name: "Temperature (2 m)",
        unit: "°C",
        accumulation_hours: None,
    },
    Field {
        code: "rh2m",
        name: "Relative humidity (2 m)",
        unit: "%",
        accumulation_hours: None,
    },
    Field {
        code: "wind10m",
        name: "Wind speed (10 m)",
        unit: "km/h",
        accumulation_hours: None,
    },
    Field {
        code: "winddir10m",
        name: "Wind direction (10 m)",
        unit: "°",
        accumulation_hours: None,
    },
    Field {
        code: "mslp",
        name: "Mean sea level pressure",
        unit: "hPa",
        accumulation_hours: None,
    },
    Field {
        code: "cloudcover",
        name: "Total cloud cover",
        unit: "%",
        accumulation_hours: None,
    },
    Field {
        code: "prec1",
        name: "Precipitation (1 h)",
        unit: "mm",
        accumulation_hours: Some(1),
    },
    Field {
        code: "prec3",
        name: "Precipitation (3 h)",
        unit: "mm",
        accumulation_hours: Some(3),
    },
    Field {
        code: "prec6",
        name: "Precipitation (6 h)",
        unit: "mm",
        accumulation_hours: Some(6),
    },
    Field {
        code: "snow3",
        name: "Snowfall (3 h)",
        unit: "cm",
        accumulation_hours: Some(3),
    },
    Field {
        code: "climtemp",
        name: "Monthly temperature (climatology)",
        unit: "°C",
        accumulation_hours: None,
    },
    Field {
        code: "climprec",
        name: "Monthly precipitation (climatology)",
        unit: "mm",
        accumulation_hours: None,
    },
];

/// Look up a field by its portal code.
pub fn field_by_code(code: &str) -> Option<&'static Field> {
    FIELDS.iter().find(|f| f.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_by_code() {
        let prec3 = field_by_code("prec3").unwrap();
        assert_eq!(prec3.unit, "mm");
        assert_eq!(prec3.accumulation_hours, Some(3));
        assert!(field_by_code("bogus").is_none());
    }

    #[test]
    fn test_offset_floor() {
        assert_eq!(field_by_code("prec3").unwrap().offset_floor(), 3);
        assert_eq!(field_by_code("prec6").unwrap().offset_floor(), 6);
        assert_eq!(field_by_code("temp2m").unwrap().offset_floor(), 0);
    }
}
