//! Layer precedence: defaults < file < environment < CLI.

use std::collections::HashMap;
use std::path::PathBuf;

use kundali_config::{CliOverrides, ConfigError, KundaliConfig, OutputFormat};
use kundali_vedic::NavamsaConvention;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

fn write_config(name: &str, body: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("kundali_config_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

const FILE: &str = r#"
[chart]
navamsa = "parity-offset"
polar_latitude_limit_deg = 80.0

[output]
format = "json"

[logging]
filter = "warn"
"#;

#[test]
fn file_layer() {
    let path = write_config("file_layer.toml", FILE);
    let c = KundaliConfig::load_with_env(Some(&path), None, env_of(&[])).unwrap();
    assert_eq!(c.navamsa(), NavamsaConvention::ParityOffset);
    assert_eq!(c.polar_latitude_limit_deg(), 80.0);
    assert_eq!(c.format(), OutputFormat::Json);
    assert_eq!(c.log_filter(), "warn");
}

#[test]
fn env_beats_file() {
    let path = write_config("env_beats_file.toml", FILE);
    let env = env_of(&[
        ("KUNDALI_NAVAMSA", "standard"),
        ("KUNDALI_POLAR_LIMIT", "85.5"),
        ("KUNDALI_FORMAT", "text"),
        ("KUNDALI_LOG", "debug"),
    ]);
    let c = KundaliConfig::load_with_env(Some(&path), None, env).unwrap();
    assert_eq!(c.navamsa(), NavamsaConvention::Standard);
    assert_eq!(c.polar_latitude_limit_deg(), 85.5);
    assert_eq!(c.format(), OutputFormat::Text);
    assert_eq!(c.log_filter(), "debug");
}

#[test]
fn cli_beats_env() {
    let env = env_of(&[("KUNDALI_FORMAT", "text"), ("KUNDALI_POLAR_LIMIT", "85")]);
    let cli = CliOverrides {
        format: Some(OutputFormat::Json),
        navamsa: Some(NavamsaConvention::ParityOffset),
        ..CliOverrides::default()
    };
    let path = write_config("cli_beats_env.toml", "");
    let c = KundaliConfig::load_with_env(Some(&path), Some(&cli), env).unwrap();
    assert_eq!(c.format(), OutputFormat::Json);
    assert_eq!(c.navamsa(), NavamsaConvention::ParityOffset);
    assert_eq!(c.polar_latitude_limit_deg(), 85.0);
    assert_eq!(c.to_chart_options().polar_limit_deg, 85.0);
}

#[test]
fn bad_env_values_are_errors() {
    let path = write_config("bad_env.toml", "");
    let err = KundaliConfig::load_with_env(
        Some(&path),
        None,
        env_of(&[("KUNDALI_POLAR_LIMIT", "north")]),
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));

    let err = KundaliConfig::load_with_env(
        Some(&path),
        None,
        env_of(&[("KUNDALI_NAVAMSA", "krishnamurti")]),
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));

    let err = KundaliConfig::load_with_env(
        Some(&path),
        None,
        env_of(&[("KUNDALI_POLAR_LIMIT", "91")]),
    )
    .unwrap_err();
    assert!(err.to_string().contains("polar_latitude_limit_deg"));
}

#[test]
fn missing_explicit_file_is_error() {
    let path = std::env::temp_dir().join("kundali_config_does_not_exist.toml");
    let err = KundaliConfig::load_with_env(Some(&path), None, env_of(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn malformed_toml_is_parse_error() {
    let path = write_config("malformed.toml", "[chart\nnavamsa = ");
    let err = KundaliConfig::load_with_env(Some(&path), None, env_of(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn unknown_convention_in_file_is_parse_error() {
    let path = write_config("unknown_conv.toml", "[chart]\nnavamsa = \"d60\"\n");
    let err = KundaliConfig::load_with_env(Some(&path), None, env_of(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}
