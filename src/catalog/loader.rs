//! Load a territory catalog from TOML
//!
//! The file holds a `[[territory]]` array whose tables mirror `Territory`:
//!
//! ```toml
//! [[territory]]
//! id = "louisiana_1803"
//! name = "Louisiana Purchase"
//! year = 1803
//! area_sq_miles = 828000
//! cost = { nominal = 15000000, inflation_adjusted = 393000000 }
//! method = "Purchase"
//! from_entity = "France"
//! description = "The massive central corridor purchased from France."
//! comparison = "Doubled US Size"
//! path = "M 555,480 L 480,450 L 250,60 L 520,60 Z"
//! color = "#d97706"
//! label = { x = 480, y = 220 }
//! ```

use std::path::Path;

use ahash::AHashSet;
use serde::Deserialize;

use crate::catalog::{Catalog, Territory};
use crate::core::error::{Result, TimelineError};
use crate::core::types::{Point, MAP_HEIGHT, MAP_WIDTH, MAX_YEAR, MIN_YEAR};
use crate::geometry::path::parse_path;
use crate::render::colors::Color;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    territory: Vec<Territory>,
}

/// Load and validate a catalog file
pub fn load_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(&content)?;
    tracing::info!(
        path = %path.display(),
        territories = catalog.len(),
        "catalog.loaded"
    );
    Ok(catalog)
}

/// Parse and validate catalog TOML
pub fn parse_catalog(content: &str) -> Result<Catalog> {
    let file: CatalogFile = toml::from_str(content)?;

    let errors = validate_territories(&file.territory);
    if !errors.is_empty() {
        return Err(TimelineError::InvalidCatalog(errors));
    }

    let catalog = Catalog::new(file.territory);
    for year in catalog.shared_years() {
        tracing::warn!(year, "catalog.shared_year: auto-pause will only stop on the first record");
    }
    Ok(catalog)
}

/// Collect every problem with a record list; empty means valid
pub fn validate_territories(territories: &[Territory]) -> Vec<String> {
    let mut errors = Vec::new();

    if territories.is_empty() {
        errors.push("catalog has no territories".to_string());
        return errors;
    }

    let mut seen = AHashSet::new();
    for territory in territories {
        let id = territory.id.as_str();

        if id.trim().is_empty() {
            errors.push(format!("'{}': empty id", territory.name));
        } else if !seen.insert(id) {
            errors.push(format!("'{}': duplicate id", id));
        }

        if !(MIN_YEAR..=MAX_YEAR).contains(&territory.year) {
            errors.push(format!(
                "'{}': year {} outside {}..={}",
                id, territory.year, MIN_YEAR, MAX_YEAR
            ));
        }

        if !territory.area_sq_miles.is_finite() || territory.area_sq_miles <= 0.0 {
            errors.push(format!(
                "'{}': area must be positive, got {}",
                id, territory.area_sq_miles
            ));
        }

        match parse_path(&territory.path) {
            Ok(subpaths) if subpaths.is_empty() => {
                errors.push(format!("'{}': path draws nothing", id));
            }
            Ok(subpaths) => {
                let stray = subpaths
                    .iter()
                    .flat_map(|s| s.points.iter())
                    .find(|p| !on_canvas(p));
                if let Some(p) = stray {
                    errors.push(format!(
                        "'{}': point ({}, {}) outside the {}x{} canvas",
                        id, p.x, p.y, MAP_WIDTH, MAP_HEIGHT
                    ));
                }
            }
            Err(e) => errors.push(format!("'{}': {}", id, e)),
        }

        if Color::from_hex(&territory.color).is_none() {
            errors.push(format!("'{}': color '{}' is not #rrggbb", id, territory.color));
        }
    }

    errors
}

/// Finite and within the map canvas. NaN fails both range checks.
fn on_canvas(point: &Point) -> bool {
    (0.0..=MAP_WIDTH).contains(&point.x) && (0.0..=MAP_HEIGHT).contains(&point.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;

    const MINIMAL: &str = r##"
        [[territory]]
        id = "a"
        name = "Alpha"
        year = 1800
        area_sq_miles = 1000
        method = "Treaty"
        from_entity = "Nobody"
        description = "First"
        comparison = "Small"
        path = "M 0,0 L 10,0 L 10,10 Z"
        color = "#112233"
        label = { x = 5, y = 5 }

        [[territory]]
        id = "b"
        name = "Beta"
        year = 1810
        area_sq_miles = 2000.5
        cost = { nominal = 10, inflation_adjusted = 100 }
        method = "War Settlement"
        from_entity = "Somebody"
        description = "Second"
        comparison = "Bigger"
        path = "M 20,20 L 30,20 L 30,30 Z"
        color = "#445566"
        label = { x = 25, y = 25 }
    "##;

    #[test]
    fn test_parse_minimal_catalog() {
        let catalog = parse_catalog(MINIMAL).unwrap();
        assert_eq!(catalog.len(), 2);
        let beta = catalog.at(1).unwrap();
        assert_eq!(beta.adjusted_cost(), 100);
        assert_eq!(beta.method, crate::catalog::AcquisitionMethod::War);
    }

    #[test]
    fn test_builtin_records_validate() {
        assert!(validate_territories(&builtin::territories()).is_empty());
    }

    #[test]
    fn test_collects_every_error() {
        let mut records = builtin::territories();
        records[1].id = records[0].id.clone();
        records[2].year = 1700;
        records[3].area_sq_miles = 0.0;
        records[4].path = "M 1,2 Q 3,4".into();
        records[5].color = "orange".into();

        let errors = validate_territories(&records);
        assert_eq!(errors.len(), 5, "{:?}", errors);
        assert!(errors[0].contains("duplicate id"));
    }

    #[test]
    fn test_off_canvas_points_rejected() {
        for path in [
            "M 0,0 L inf,0 L inf,inf Z",
            "M 0,0 L 1e300,0 L 10,10 Z",
            "M -5,0 L 10,0 L 10,10 Z",
            "M 0,0 L 10,0 L 10,601 Z",
        ] {
            let mut records = builtin::territories();
            records[0].path = path.into();
            let errors = validate_territories(&records);
            assert_eq!(errors.len(), 1, "{}: {:?}", path, errors);
            assert!(errors[0].contains("outside"), "{:?}", errors);
        }
    }

    #[test]
    fn test_off_canvas_catalog_fails_before_geometry() {
        let broken = MINIMAL.replace(
            "path = \"M 0,0 L 10,0 L 10,10 Z\"",
            "path = \"M 0,0 L inf,0 L inf,inf Z\"",
        );
        assert!(matches!(
            parse_catalog(&broken).unwrap_err(),
            TimelineError::InvalidCatalog(_)
        ));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = parse_catalog("").unwrap_err();
        assert!(matches!(err, TimelineError::InvalidCatalog(_)));
    }

    #[test]
    fn test_half_cost_is_a_parse_error() {
        let broken = MINIMAL.replace(
            "cost = { nominal = 10, inflation_adjusted = 100 }",
            "cost = { nominal = 10 }",
        );
        assert!(matches!(
            parse_catalog(&broken).unwrap_err(),
            TimelineError::TomlError(_)
        ));
    }
}
