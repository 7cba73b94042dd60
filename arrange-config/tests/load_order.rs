use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use arrange_config::{
    CONFIG_JSON_ENV, CONFIG_PATH_ENV, ConfigLoader, ConfigSource,
    PRESETS_FILE_ENV,
};
use arrange_core::PresetConflictPolicy;
use arrange_model::SortColumn;
use tempfile::tempdir;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_is_configured() {
    let dir = tempdir().unwrap();
    let load = ConfigLoader::new()
        .with_search_root(dir.path())
        .load_with_env(env_of(&[]))
        .unwrap();
    assert_eq!(load.source, ConfigSource::Default);
    assert_eq!(load.config.log_level, "info");
}

#[test]
fn default_candidate_file_is_found() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("config")).unwrap();
    let path = dir.path().join("config").join("arrange.toml");
    fs::write(&path, "conflict_policy = \"reject\"\n").unwrap();

    let load = ConfigLoader::new()
        .with_search_root(dir.path())
        .load_with_env(env_of(&[]))
        .unwrap();
    assert_eq!(load.source, ConfigSource::File(path));
    assert_eq!(load.config.conflict_policy, PresetConflictPolicy::Reject);
}

#[test]
fn inline_json_beats_default_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("arrange.toml"), "include_hidden = false\n")
        .unwrap();

    let load = ConfigLoader::new()
        .with_search_root(dir.path())
        .load_with_env(env_of(&[(
            CONFIG_JSON_ENV,
            r#"{"include_hidden": true, "default_sort": {"column": "size"}}"#,
        )]))
        .unwrap();
    assert_eq!(load.source, ConfigSource::EnvInline);
    assert!(load.config.include_hidden);
    assert_eq!(load.config.default_sort.column, SortColumn::Size);
}

#[test]
fn env_path_beats_inline_json() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.json");
    fs::write(&path, r#"{"log_level": "trace"}"#).unwrap();

    let load = ConfigLoader::new()
        .with_search_root(dir.path())
        .load_with_env(env_of(&[
            (CONFIG_PATH_ENV, path.to_str().unwrap()),
            (CONFIG_JSON_ENV, r#"{"log_level": "warn"}"#),
        ]))
        .unwrap();
    assert_eq!(load.source, ConfigSource::EnvPath(path));
    assert_eq!(load.config.log_level, "trace");
}

#[test]
fn explicit_path_beats_environment() {
    let dir = tempdir().unwrap();
    let explicit = dir.path().join("explicit.toml");
    fs::write(&explicit, "parallel_threshold = 10\n").unwrap();

    let load = ConfigLoader::new()
        .with_explicit_path(Some(explicit.clone()))
        .with_search_root(dir.path())
        .load_with_env(env_of(&[(
            CONFIG_JSON_ENV,
            r#"{"parallel_threshold": 99}"#,
        )]))
        .unwrap();
    assert_eq!(load.source, ConfigSource::Explicit(explicit));
    assert_eq!(load.config.parallel_threshold, 10);
}

#[test]
fn presets_file_env_overrides_any_source() {
    let dir = tempdir().unwrap();
    let load = ConfigLoader::new()
        .with_search_root(dir.path())
        .load_with_env(env_of(&[
            (CONFIG_JSON_ENV, r#"{"presets_file": "/from/json.json"}"#),
            (PRESETS_FILE_ENV, "/from/env.json"),
        ]))
        .unwrap();
    assert_eq!(load.config.presets_file, PathBuf::from("/from/env.json"));
}

#[test]
fn blank_environment_values_are_ignored() {
    let dir = tempdir().unwrap();
    let load = ConfigLoader::new()
        .with_search_root(dir.path())
        .load_with_env(env_of(&[
            (CONFIG_PATH_ENV, "  "),
            (CONFIG_JSON_ENV, ""),
        ]))
        .unwrap();
    assert_eq!(load.source, ConfigSource::Default);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempdir().unwrap();
    let err = ConfigLoader::new()
        .with_explicit_path(Some(dir.path().join("absent.toml")))
        .load_with_env(env_of(&[]))
        .unwrap_err();
    assert!(format!("{err:#}").contains("failed to read config"));
}

#[test]
fn invalid_values_are_rejected_with_source() {
    let dir = tempdir().unwrap();
    let err = ConfigLoader::new()
        .with_search_root(dir.path())
        .load_with_env(env_of(&[(
            CONFIG_JSON_ENV,
            r#"{"blocking_threshold": 0}"#,
        )]))
        .unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("ARRANGE_CONFIG_JSON"), "{message}");
    assert!(message.contains("blocking_threshold"), "{message}");
}
