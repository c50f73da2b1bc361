//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/cattree/cattree.toml`
//! 3. Local config: file given with `--config`
//! 4. Environment variables: `CATTREE_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, PathOptions, DEFAULT_SEPARATOR};
use crate::domain::{CategoryId, LabelOptions, LanguageId, SortOptions, DEFAULT_INDENT_PREFIX, TOP_LEVEL};
use crate::infrastructure::lookup::ALIAS_PLACEHOLDER;

const ENV_PREFIX: &str = "CATTREE";

/// Unified configuration for cattree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Parent id whose children start the tree (default: 0)
    pub root_parent_id: CategoryId,
    /// Drop categories whose parent is not in the input
    pub ignore_orphans: bool,
    /// Indentation unit for labels (default: "--")
    pub indent_prefix: String,
    /// Language for localized names
    pub language_id: Option<LanguageId>,
    /// Show aliases in labels
    pub with_alias: bool,
    /// Breadcrumb separator (default: " » ")
    pub separator: String,
    /// Breadcrumb alias pattern, `{alias}` is replaced by the alias
    pub alias_pattern: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_parent_id: TOP_LEVEL,
            ignore_orphans: false,
            indent_prefix: DEFAULT_INDENT_PREFIX.to_string(),
            language_id: None,
            with_alias: true,
            separator: DEFAULT_SEPARATOR.to_string(),
            alias_pattern: None,
        }
    }
}

/// Raw settings for intermediate parsing (None → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub root_parent_id: Option<CategoryId>,
    pub ignore_orphans: Option<bool>,
    pub indent_prefix: Option<String>,
    pub language_id: Option<LanguageId>,
    pub with_alias: Option<bool>,
    pub separator: Option<String>,
    pub alias_pattern: Option<String>,
}

/// Get the XDG config directory for cattree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "cattree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("cattree.toml"))
}

/// Expand `~`, `$VAR` and `${VAR}` in a path given on the command line.
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    shellexpand::full(raw.as_ref())
        .map(|s| PathBuf::from(s.into_owned()))
        .unwrap_or_else(|_| path.to_path_buf())
}

/// An alias pattern must be empty or contain the `{alias}` placeholder.
pub fn check_alias_pattern(pattern: &str) -> Result<(), String> {
    if pattern.is_empty() || pattern.contains(ALIAS_PLACEHOLDER) {
        Ok(())
    } else {
        Err(format!("alias pattern {pattern:?} lacks {ALIAS_PLACEHOLDER}"))
    }
}

/// Unset keys are None; values of the wrong type are config errors.
fn env_value<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self: overlay wins where specified.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            root_parent_id: overlay.root_parent_id.unwrap_or(self.root_parent_id),
            ignore_orphans: overlay.ignore_orphans.unwrap_or(self.ignore_orphans),
            indent_prefix: overlay
                .indent_prefix
                .clone()
                .unwrap_or_else(|| self.indent_prefix.clone()),
            language_id: overlay.language_id.or(self.language_id),
            with_alias: overlay.with_alias.unwrap_or(self.with_alias),
            separator: overlay
                .separator
                .clone()
                .unwrap_or_else(|| self.separator.clone()),
            alias_pattern: overlay
                .alias_pattern
                .clone()
                .or_else(|| self.alias_pattern.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_config` - Optional config file; must exist when given
    pub fn load(local_config: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("global config: {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(local) = local_config {
            let local = expand_path(local);
            if !local.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", local.display()),
                });
            }
            debug!("local config: {}", local.display());
            current = current.merge_with(&load_raw_settings(&local)?);
        }

        let settings = Self::apply_env_overrides(current, None)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check values that parse but cannot be used.
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if let Some(pattern) = &self.alias_pattern {
            check_alias_pattern(pattern).map_err(|message| ApplicationError::Config { message })?;
        }
        Ok(())
    }

    /// Apply CATTREE_* variables as explicit overrides.
    ///
    /// `source` replaces the process environment (tests).
    pub fn apply_env_overrides(
        mut settings: Self,
        source: Option<config::Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .source(source),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value(config.get_int("root_parent_id"))? {
            settings.root_parent_id = val;
        }
        if let Some(val) = env_value(config.get_bool("ignore_orphans"))? {
            settings.ignore_orphans = val;
        }
        if let Some(val) = env_value(config.get_string("indent_prefix"))? {
            settings.indent_prefix = val;
        }
        if let Some(val) = env_value(config.get_int("language_id"))? {
            let language_id = LanguageId::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("language_id out of range: {val}"),
            })?;
            settings.language_id = Some(language_id);
        }
        if let Some(val) = env_value(config.get_bool("with_alias"))? {
            settings.with_alias = val;
        }
        if let Some(val) = env_value(config.get_string("separator"))? {
            settings.separator = val;
        }
        if let Some(val) = env_value(config.get_string("alias_pattern"))? {
            settings.alias_pattern = Some(val);
        }

        Ok(settings)
    }

    pub fn sort_options(&self) -> SortOptions {
        SortOptions::default()
            .root(self.root_parent_id)
            .ignore_orphans(self.ignore_orphans)
    }

    pub fn label_options(&self) -> LabelOptions {
        LabelOptions {
            indent_prefix: self.indent_prefix.clone(),
            language_id: self.language_id,
            with_alias: self.with_alias,
        }
    }

    pub fn path_options(&self) -> PathOptions {
        PathOptions {
            language_id: self.language_id,
            alias_pattern: self.alias_pattern.clone(),
            separator: self.separator.clone(),
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# cattree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/cattree/cattree.toml
#   Local:  file passed with --config
#   Env:    CATTREE_* environment variables (e.g. CATTREE_SEPARATOR)

# Parent id whose children form the top level of the tree
# root_parent_id = 0

# Drop categories whose parent is not part of the input
# ignore_orphans = false

# Indentation unit, repeated once per level below the top
# indent_prefix = "--"

# Language for localized names (unset: plain names)
# language_id = 2

# Append " (alias)" to labels
# with_alias = true

# Breadcrumb separator
# separator = " » "

# Breadcrumb alias pattern, {alias} is replaced by the alias
# alias_pattern = "({alias})"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(pairs: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn given_defaults_then_match_documented_flags() {
        let settings = Settings::default();
        assert_eq!(settings.root_parent_id, 0);
        assert!(!settings.ignore_orphans);
        assert_eq!(settings.indent_prefix, "--");
        assert_eq!(settings.language_id, None);
        assert!(settings.with_alias);
        assert_eq!(settings.separator, " » ");
        assert_eq!(settings.alias_pattern, None);
    }

    #[test]
    fn given_overlay_when_merging_then_specified_fields_win() {
        let base = Settings::default();
        let overlay = RawSettings {
            indent_prefix: Some("  ".to_string()),
            language_id: Some(2),
            ..Default::default()
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.indent_prefix, "  ");
        assert_eq!(merged.language_id, Some(2));
        assert_eq!(merged.separator, base.separator);
        assert_eq!(merged.with_alias, base.with_alias);
    }

    #[test]
    fn given_env_source_when_applying_then_overrides() {
        let source = env(&[
            ("CATTREE_ROOT_PARENT_ID", "5"),
            ("CATTREE_IGNORE_ORPHANS", "true"),
            ("CATTREE_SEPARATOR", " / "),
            ("CATTREE_LANGUAGE_ID", "3"),
            ("OTHER_SEPARATOR", "ignored"),
        ]);

        let settings = Settings::apply_env_overrides(Settings::default(), source).unwrap();

        assert_eq!(settings.root_parent_id, 5);
        assert!(settings.ignore_orphans);
        assert_eq!(settings.separator, " / ");
        assert_eq!(settings.language_id, Some(3));
        assert_eq!(settings.indent_prefix, "--");
    }

    #[test]
    fn given_out_of_range_language_when_applying_then_config_error() {
        let source = env(&[("CATTREE_LANGUAGE_ID", "99999999999")]);

        let result = Settings::apply_env_overrides(Settings::default(), source);

        assert!(matches!(result, Err(ApplicationError::Config { .. })));
    }

    #[test]
    fn given_env_pattern_without_placeholder_when_validating_then_config_error() {
        let source = env(&[("CATTREE_ALIAS_PATTERN", "[alias]")]);

        let settings = Settings::apply_env_overrides(Settings::default(), source).unwrap();

        assert!(matches!(
            settings.validate(),
            Err(ApplicationError::Config { .. })
        ));
    }

    #[test]
    fn given_alias_patterns_when_checking_then_placeholder_required() {
        assert!(check_alias_pattern("({alias})").is_ok());
        assert!(check_alias_pattern("").is_ok());
        assert!(check_alias_pattern("(alias)").is_err());
    }

    #[test]
    fn given_settings_when_serializing_then_round_trips_through_raw() {
        let settings = Settings {
            language_id: Some(2),
            alias_pattern: Some("({alias})".to_string()),
            ..Default::default()
        };

        let toml = settings.to_toml().unwrap();
        let raw: RawSettings = toml::from_str(&toml).unwrap();

        assert_eq!(Settings::default().merge_with(&raw), settings);
    }

    #[test]
    fn given_template_when_parsing_then_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.separator.is_none());
    }
}
