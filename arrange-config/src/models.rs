use std::{fmt, path::PathBuf};

use anyhow::bail;
use arrange_core::{
    ListingOptions, PresetConflictPolicy, ServiceOptions,
    service::DEFAULT_BLOCKING_THRESHOLD, sorting::DEFAULT_PARALLEL_THRESHOLD,
};
use arrange_model::SortSpecification;
use serde::{Deserialize, Serialize};

/// File name used for the preset document inside the data directory.
pub const PRESETS_FILE_NAME: &str = "presets.json";

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    /// Path passed explicitly by the caller (e.g. `--config`).
    Explicit(PathBuf),
    /// `$ARRANGE_CONFIG_PATH`
    EnvPath(PathBuf),
    /// `$ARRANGE_CONFIG_JSON`
    EnvInline,
    /// One of the default candidate files.
    File(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Default => f.write_str("built-in defaults"),
            ConfigSource::Explicit(path) => {
                write!(f, "{} (explicit)", path.display())
            }
            ConfigSource::EnvPath(path) => {
                write!(f, "{} (ARRANGE_CONFIG_PATH)", path.display())
            }
            ConfigSource::EnvInline => f.write_str("ARRANGE_CONFIG_JSON"),
            ConfigSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Settings shared by every Arrange front end.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArrangeConfig {
    /// JSON document holding saved presets.
    pub presets_file: PathBuf,
    /// Behaviour when saving a preset under an existing name.
    pub conflict_policy: PresetConflictPolicy,
    /// Listing size from which sort keys are extracted in parallel.
    pub parallel_threshold: usize,
    /// Listing size from which sorting leaves the async executor.
    pub blocking_threshold: usize,
    /// List dotfiles when reading directories.
    pub include_hidden: bool,
    /// Default `RUST_LOG` style filter when the environment sets none.
    pub log_level: String,
    /// Ordering used when the caller does not ask for one.
    pub default_sort: SortSpecification,
}

impl Default for ArrangeConfig {
    fn default() -> Self {
        Self {
            presets_file: default_presets_file(),
            conflict_policy: PresetConflictPolicy::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            blocking_threshold: DEFAULT_BLOCKING_THRESHOLD,
            include_hidden: false,
            log_level: "info".to_string(),
            default_sort: SortSpecification::default(),
        }
    }
}

impl ArrangeConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.presets_file.as_os_str().is_empty() {
            bail!("presets_file must not be empty");
        }
        if self.parallel_threshold == 0 {
            bail!("parallel_threshold must be at least 1");
        }
        if self.blocking_threshold < 2 {
            bail!("blocking_threshold must be at least 2");
        }
        if self.log_level.trim().is_empty() {
            bail!("log_level must not be empty");
        }
        Ok(())
    }

    pub fn service_options(&self) -> ServiceOptions {
        ServiceOptions {
            parallel_threshold: self.parallel_threshold,
            blocking_threshold: self.blocking_threshold,
            conflict_policy: self.conflict_policy,
        }
    }

    pub fn listing_options(&self) -> ListingOptions {
        ListingOptions::default().with_hidden(self.include_hidden)
    }
}

/// `<data dir>/arrange/presets.json`, or `./presets.json` on platforms
/// without a data directory.
pub fn default_presets_file() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("arrange").join(PRESETS_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(PRESETS_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrange_model::SortColumn;

    #[test]
    fn defaults_are_valid() {
        let config = ArrangeConfig::default();
        config.validate().unwrap();
        assert!(config.presets_file.ends_with(PRESETS_FILE_NAME));
        assert_eq!(config.parallel_threshold, 4_096);
        assert_eq!(config.blocking_threshold, 2_048);
        assert_eq!(config.conflict_policy, PresetConflictPolicy::Overwrite);
    }

    #[test]
    fn zero_thresholds_are_rejected() {
        let config = ArrangeConfig {
            parallel_threshold: 0,
            ..ArrangeConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ArrangeConfig {
            blocking_threshold: 1,
            ..ArrangeConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn converts_to_service_options() {
        let config = ArrangeConfig {
            conflict_policy: PresetConflictPolicy::Reject,
            blocking_threshold: 10,
            ..ArrangeConfig::default()
        };
        let options = config.service_options();
        assert_eq!(options.conflict_policy, PresetConflictPolicy::Reject);
        assert_eq!(options.blocking_threshold, 10);
    }

    #[test]
    fn serializes_to_toml() {
        let config = ArrangeConfig {
            presets_file: PathBuf::from("/tmp/presets.json"),
            default_sort: SortSpecification::new(SortColumn::Size),
            ..ArrangeConfig::default()
        };
        let rendered = toml::to_string(&config).unwrap();
        assert!(rendered.contains("conflict_policy = \"overwrite\""));
        assert!(rendered.contains("[default_sort]"));
        assert!(rendered.contains("column = \"size\""));
    }
}
