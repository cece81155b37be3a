//! JSON config parsing and file loading.

#![allow(clippy::unwrap_used)]

use std::io::Write;

use wpm_sim::{load_config, parse_config};
use wpm_widget::{ConfigError, RangeMode, RenderConfig};

#[test]
fn empty_object_is_default() {
    assert_eq!(parse_config("{}").unwrap(), RenderConfig::default());
}

#[test]
fn fields_map_onto_config() {
    let cfg =
        parse_config(r#"{ "fixed_range": true, "fixed_range_max": 120, "inverted": true }"#)
            .unwrap();
    assert_eq!(cfg.range(), RangeMode::Fixed);
    assert_eq!(cfg.fixed_range_max(), 120);
    assert!(cfg.is_inverted());
}

#[test]
fn zero_max_is_rejected() {
    let err = parse_config(r#"{ "fixed_range_max": 0 }"#).unwrap_err();
    assert!(format!("{err:#}").contains("greater than zero"));
}

#[test]
fn config_error_converts_into_anyhow() {
    let err = anyhow::Error::from(ConfigError::ZeroRangeMax);
    assert!(err.downcast_ref::<ConfigError>().is_some());
    assert_eq!(err.to_string(), "fixed_range_max must be greater than zero");
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(parse_config(r#"{ "fixed_rang": true }"#).is_err());
}

#[test]
fn out_of_range_max_is_rejected() {
    assert!(parse_config(r#"{ "fixed_range_max": 300 }"#).is_err());
}

#[test]
fn no_path_means_defaults() {
    assert_eq!(load_config(None).unwrap(), RenderConfig::default());
}

#[test]
fn loads_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "fixed_range": true }}"#).unwrap();

    let cfg = load_config(Some(file.path())).unwrap();
    assert!(cfg.is_fixed_range());
    assert_eq!(cfg.fixed_range_max(), 100);
}

#[test]
fn missing_file_names_the_path() {
    let err = load_config(Some(std::path::Path::new("/nonexistent/wpm.json"))).unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/wpm.json"));
}
