//! Tests for config module.

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Parse config from YAML string (for testing).
fn from_yaml(yaml: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_yaml::from_str(yaml)?;
    Ok(config)
}

fn minimal_valid_yaml() -> String {
    r#"
app:
  name: ngkpay-tracking
  env: development

utmify:
  enabled: true
"#
    .to_string()
}

// ==================== YAML field loading tests ====================

#[test]
fn test_load_app_fields() {
    let yaml = r#"
app:
  name: ngkpay-tracking
  env: production
  log_level: debug

utmify:
  enabled: false
"#;
    let config = from_yaml(yaml).unwrap();
    assert_eq!(config.app.name, "ngkpay-tracking");
    assert_eq!(config.app.env, "production");
    assert_eq!(config.app.log_level.as_deref(), Some("debug"));
}

#[test]
fn test_load_utmify_fields() {
    let yaml = r#"
app:
  name: ngkpay-tracking
  env: development

utmify:
  enabled: true
  platform_name: CustomPay
  base_url: http://localhost:9000/orders
"#;
    let config = from_yaml(yaml).unwrap();
    assert!(config.utmify.enabled);
    assert_eq!(config.utmify.platform_name.as_deref(), Some("CustomPay"));
    assert_eq!(
        config.utmify.base_url.as_deref(),
        Some("http://localhost:9000/orders")
    );
    // The token never comes from YAML
    assert!(config.utmify.api_token.is_empty());
}

#[test]
fn test_utmify_enabled_defaults_to_false() {
    let yaml = r#"
app:
  name: ngkpay-tracking
  env: development

utmify: {}
"#;
    let config = from_yaml(yaml).unwrap();
    assert!(!config.utmify.enabled);
}

#[test]
fn test_load_storage_fields() {
    let yaml = r#"
app:
  name: ngkpay-tracking
  env: development

utmify:
  enabled: true

storage:
  enabled: true
  path: data/tracking.db
"#;
    let config = from_yaml(yaml).unwrap();
    let storage = config.storage.unwrap();
    assert!(storage.enabled);
    assert_eq!(storage.path.as_deref(), Some("data/tracking.db"));
}

#[test]
fn test_storage_section_optional() {
    let config = from_yaml(&minimal_valid_yaml()).unwrap();
    assert!(config.storage.is_none());
}

// ==================== Validation tests ====================

#[test]
fn test_validate_minimal_config() {
    let config = from_yaml(&minimal_valid_yaml()).unwrap();
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_empty_app_name() {
    let yaml = r#"
app:
  name: ""
  env: development

utmify:
  enabled: true
"#;
    let config = from_yaml(yaml).unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("app.name"));
}

#[test]
fn test_validate_production_requires_token() {
    let yaml = r#"
app:
  name: ngkpay-tracking
  env: production

utmify:
  enabled: true
"#;
    let config = from_yaml(yaml).unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("UTMIFY_API_TOKEN"));
}

#[test]
fn test_validate_production_disabled_utmify_needs_no_token() {
    let yaml = r#"
app:
  name: ngkpay-tracking
  env: production

utmify:
  enabled: false
"#;
    let config = from_yaml(yaml).unwrap();
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_enabled_storage_requires_path() {
    let yaml = r#"
app:
  name: ngkpay-tracking
  env: development

utmify:
  enabled: true

storage:
  enabled: true
"#;
    let config = from_yaml(yaml).unwrap();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("storage.path"));
}

// ==================== File loading tests ====================

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(minimal_valid_yaml().as_bytes()).unwrap();

    let config = Config::load(file.path().to_str().unwrap()).unwrap();
    assert_eq!(config.app.name, "ngkpay-tracking");
}

#[test]
fn test_load_missing_file() {
    let result = Config::load("does/not/exist.yaml");
    assert!(matches!(result, Err(ConfigError::ReadFile(_))));
}

#[test]
fn test_load_invalid_yaml() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"app: [not a mapping").unwrap();

    let result = Config::load(file.path().to_str().unwrap());
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}
