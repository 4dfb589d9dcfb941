//! Catalog of geographic areas the portal serves maps and data for.

/// A selectable map/data area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    /// Portal area code used in query parameters
    pub code: &'static str,
    /// Human-readable name shown in selectors
    pub name: &'static str,
}

/// Areas available from the portal.
pub const AREAS: &[Area] = &[
    Area { code: "europe", name: "Europe" },
    Area { code: "iberia", name: "Iberian Peninsula" },
    Area { code: "pyrenees", name: "Pyrenees" },
    Area { code: "balearics", name: "Balearic Islands" },
    Area { code: "canary", name: "Canary Islands" },
];

/// Grid resolutions offered per model run.
pub const RESOLUTIONS: &[&str] = &["0.25deg", "0.05deg"];

/// Look up an area by its portal code.
pub fn area_by_code(code: &str) -> Option<&'static Area> {
    AREAS.iter().find(|a| a.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_by_code() {
        assert_eq!(area_by_code("iberia").unwrap().name, "Iberian Peninsula");
        assert!(area_by_code("atlantis").is_none());
    }
}
