use std::fs;

use glownotes::Config;

#[test]
fn defaults_point_at_the_hosted_service() {
    let config = Config::default();

    assert!(config.api_key.is_none());
    assert_eq!(config.model, "gemini-3-flash-preview");
    assert_eq!(config.request_timeout_secs, 30);
    assert!(config.seed_sample_data);
    assert!(config
        .generate_url()
        .ends_with("/models/gemini-3-flash-preview:generateContent"));
}

#[test]
fn generate_url_tolerates_a_trailing_slash_on_the_base() {
    let mut config = Config::default();
    config.api_base_url = "http://localhost:8080/v1beta/".to_string();
    config.model = "test-model".to_string();

    assert_eq!(
        config.generate_url(),
        "http://localhost:8080/v1beta/models/test-model:generateContent"
    );
}

#[test]
fn partial_config_files_fall_back_to_defaults_per_field() {
    let path = std::env::temp_dir().join(format!("glownotes-config-{}.json", std::process::id()));
    fs::write(&path, r#"{ "model": "other-model" }"#).unwrap();

    let config = Config::load(Some(path.clone())).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(config.model, "other-model");
    assert_eq!(config.request_timeout_secs, 30);
    assert!(config.seed_sample_data);
}

#[test]
fn a_missing_config_file_is_not_an_error() {
    let path = std::env::temp_dir().join("glownotes-no-such-config.json");
    let config = Config::load(Some(path)).unwrap();
    assert_eq!(config.model, "gemini-3-flash-preview");
}

#[test]
fn a_malformed_config_file_is_an_error() {
    let path =
        std::env::temp_dir().join(format!("glownotes-bad-config-{}.json", std::process::id()));
    fs::write(&path, "{ not json").unwrap();

    let result = Config::load(Some(path.clone()));
    fs::remove_file(&path).ok();

    assert!(result.is_err());
}
