use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, anyhow};

use crate::models::{ArrangeConfig, ConfigSource};

pub const CONFIG_PATH_ENV: &str = "ARRANGE_CONFIG_PATH";
pub const CONFIG_JSON_ENV: &str = "ARRANGE_CONFIG_JSON";
pub const PRESETS_FILE_ENV: &str = "ARRANGE_PRESETS_FILE";

const DEFAULT_CANDIDATES: &[&str] =
    &["arrange.toml", "arrange.json", "config/arrange.toml"];

/// A loaded configuration together with where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLoad {
    pub config: ArrangeConfig,
    pub source: ConfigSource,
}

/// Resolves [`ArrangeConfig`] from files and environment variables.
///
/// Evaluation order:
/// 1) an explicit path (e.g. `--config`),
/// 2) `$ARRANGE_CONFIG_PATH` (TOML or JSON file),
/// 3) `$ARRANGE_CONFIG_JSON` (inline JSON),
/// 4) `arrange.toml`, `arrange.json`, `config/arrange.toml` under the
///    search root,
/// 5) defaults.
///
/// `$ARRANGE_PRESETS_FILE` then overrides `presets_file` whatever the
/// source.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    explicit_path: Option<PathBuf>,
    search_root: PathBuf,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self {
            explicit_path: None,
            search_root: PathBuf::from("."),
        }
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_explicit_path(mut self, path: Option<PathBuf>) -> Self {
        self.explicit_path = path;
        self
    }

    /// Directory the default candidate files are looked up in.
    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_root = root.into();
        self
    }

    /// Load using the process environment.
    pub fn load(&self) -> anyhow::Result<ConfigLoad> {
        self.load_with_env(|key| env::var(key).ok())
    }

    /// Load using `lookup` in place of the process environment.
    pub fn load_with_env<F>(&self, lookup: F) -> anyhow::Result<ConfigLoad>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank =
            |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let (mut config, source) = if let Some(path) = &self.explicit_path {
            (load_from_file(path)?, ConfigSource::Explicit(path.clone()))
        } else if let Some(path) = non_blank(CONFIG_PATH_ENV) {
            let path = PathBuf::from(path);
            (load_from_file(&path)?, ConfigSource::EnvPath(path))
        } else if let Some(raw) = non_blank(CONFIG_JSON_ENV) {
            let parsed = parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            (parsed, ConfigSource::EnvInline)
        } else if let Some(path) = self.find_default_file() {
            (load_from_file(&path)?, ConfigSource::File(path))
        } else {
            (ArrangeConfig::default(), ConfigSource::Default)
        };

        if let Some(presets_file) = non_blank(PRESETS_FILE_ENV) {
            config.presets_file = PathBuf::from(presets_file);
        }

        config
            .validate()
            .with_context(|| format!("invalid configuration from {source}"))?;

        Ok(ConfigLoad { config, source })
    }

    fn find_default_file(&self) -> Option<PathBuf> {
        DEFAULT_CANDIDATES
            .iter()
            .map(|candidate| self.search_root.join(candidate))
            .find(|path| path.is_file())
    }
}

/// Read a TOML or JSON config file, picking the format by extension and
/// sniffing when the extension says nothing.
pub fn load_from_file(path: &Path) -> anyhow::Result<ArrangeConfig> {
    let contents = fs::read_to_string(path).with_context(|| {
        format!("failed to read config from {}", path.display())
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_json(&contents)
            .with_context(|| format!("invalid config {}", path.display())),
        Some("toml") | Some("tml") => {
            toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid config {}: {}", path.display(), err)
            })
        }
        _ => parse_from_str(&contents, &path.display().to_string()),
    }
}

pub fn parse_from_str(
    contents: &str,
    origin: &str,
) -> anyhow::Result<ArrangeConfig> {
    toml::from_str(contents).or_else(|toml_err| {
        serde_json::from_str(contents).map_err(|json_err| {
            anyhow!(
                "failed to parse config {}: toml error: {}; json error: {}",
                origin,
                toml_err,
                json_err
            )
        })
    })
}

pub fn parse_json(raw: &str) -> anyhow::Result<ArrangeConfig> {
    serde_json::from_str(raw)
        .map_err(|err| anyhow!("invalid config json: {err}"))
}
