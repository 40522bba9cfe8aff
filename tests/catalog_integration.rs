//! Catalog and config loading integration tests

use std::path::PathBuf;

use serde::Serialize;

use territory_timeline::catalog::{builtin, loader, Catalog, Territory};
use territory_timeline::core::config::AppConfig;
use territory_timeline::core::error::TimelineError;
use territory_timeline::core::types::MAX_YEAR;
use territory_timeline::playback::Speed;
use territory_timeline::render::MapGeometry;
use territory_timeline::stats::AggregateStats;

#[derive(Serialize)]
struct CatalogFile {
    territory: Vec<Territory>,
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("territory_timeline_{}_{}", std::process::id(), name))
}

#[test]
fn test_bundled_catalog_survives_toml_file() {
    let file = CatalogFile {
        territory: builtin::territories(),
    };
    let path = temp_path("bundled.toml");
    std::fs::write(&path, toml::to_string(&file).unwrap()).unwrap();

    let loaded = loader::load_catalog(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let bundled = Catalog::builtin();
    assert_eq!(loaded.len(), bundled.len());
    for (a, b) in loaded.iter().zip(bundled.iter()) {
        assert_eq!(a, b);
    }
    assert_eq!(
        AggregateStats::compute(&loaded, MAX_YEAR),
        AggregateStats::compute(&bundled, MAX_YEAR)
    );
    assert!(MapGeometry::build(&loaded).is_ok());
}

#[test]
fn test_missing_catalog_file_is_io_error() {
    let err = loader::load_catalog(&temp_path("does_not_exist.toml")).unwrap_err();
    assert!(matches!(err, TimelineError::IoError(_)));
}

#[test]
fn test_invalid_catalog_reports_each_record() {
    let content = r##"
        [[territory]]
        id = "bad_year"
        name = "Too Early"
        year = 1700
        area_sq_miles = 10
        method = "Cession"
        from_entity = "Nobody"
        description = "Before the timeline"
        comparison = "Tiny"
        path = "M 0,0 L 10,0 L 10,10 Z"
        color = "#123456"
        label = { x = 1, y = 1 }

        [[territory]]
        id = "bad_path"
        name = "Scribble"
        year = 1800
        area_sq_miles = 10
        method = "Treaty"
        from_entity = "Nobody"
        description = "Unsupported verb"
        comparison = "Tiny"
        path = "M 0,0 A 5,5 0 0 1 10,10"
        color = "#123456"
        label = { x = 1, y = 1 }
    "##;

    match loader::parse_catalog(content) {
        Err(TimelineError::InvalidCatalog(errors)) => {
            assert_eq!(errors.len(), 2, "{:?}", errors);
            assert!(errors[0].contains("bad_year"));
            assert!(errors[1].contains("bad_path"));
        }
        other => panic!("expected InvalidCatalog, got {:?}", other),
    }
}

#[test]
fn test_config_file_round_trip() {
    let path = temp_path("config.toml");
    std::fs::write(
        &path,
        r#"
            initial_speed = 2
            auto_pause = false
            frame_interval_ms = 33
            stats_expanded = true
        "#,
    )
    .unwrap();

    let config = AppConfig::load(Some(&path)).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.initial_speed, Speed::Double);
    assert!(!config.auto_pause);
    assert_eq!(config.frame_interval_ms, 33);
    assert!(config.stats_expanded);
    assert!(config.catalog_path.is_none());
}

#[test]
fn test_config_rejects_bad_values() {
    assert!(matches!(
        AppConfig::from_toml_str("frame_interval_ms = 0"),
        Err(TimelineError::InvalidConfig(_))
    ));
    assert!(matches!(
        AppConfig::from_toml_str("initial_speed = 3"),
        Err(TimelineError::TomlError(_))
    ));
    assert!(matches!(
        AppConfig::from_toml_str("volume = 11"),
        Err(TimelineError::TomlError(_))
    ));
}
