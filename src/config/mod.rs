//! Host-supplied overrides and the resolved plugin configuration.
//!
//! A host may drop an `admin-ui.toml` next to its other configuration (or
//! hand a [`Config`] over directly) to override any of the plugin defaults.
//! Every field is optional; an absent field means "use the default from
//! [`crate::defaults`]".
//!
//! The merge result is a [`ResolvedConfig`]: an immutable bundle built once
//! during bootstrap and passed by reference to whichever subsystem needs it.
//!
//! # Examples
//!
//! ```no_run
//! use admin_ui_plugin::config::{self, Config, ResolvedConfig};
//!
//! // Load host overrides, falling back to an empty override set.
//! let overrides = config::load().unwrap_or_default();
//!
//! // Merge once at bootstrap; share the result read-only afterwards.
//! let resolved = ResolvedConfig::resolve(&overrides).expect("valid overrides");
//! assert!(resolved.app_path.is_absolute());
//! ```

use crate::defaults::{DEFAULT_AVAILABLE_LANGUAGES, DEFAULT_LANGUAGE, DEFAULT_LOCALE, LOGGER_CTX};
use crate::error::{Error, Result};
use crate::language::LanguageCode;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use unic_langid::LanguageIdentifier;

const CONFIG_FILE: &str = "admin-ui.toml";
const APP_NAME: &str = "AdminUiPlugin";

/// Optional overrides for the plugin defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Directory of the compiled admin UI app, replacing the bundled one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_path: Option<PathBuf>,

    /// UI language shown when a user has not picked one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageCode>,

    /// Regional formatting locale (e.g. `"de-AT"`). Absent means the
    /// consuming system keeps its own default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,

    /// Languages offered in the picker, replacing the default seventeen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_languages: Option<Vec<LanguageCode>>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads overrides from the platform config directory, or an empty override
/// set when no file exists.
pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

/// Saves overrides to the platform config directory.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads overrides from an explicit path. Unparseable content falls back to
/// an empty override set rather than failing the bootstrap.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content).unwrap_or_default();
    debug!(path = %path.display(), "loaded admin UI overrides");
    Ok(config)
}

/// Saves overrides to an explicit path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// The plugin configuration after merging host overrides over the defaults.
///
/// Immutable by construction: build one during bootstrap, then share it
/// read-only. Any number of threads may read it concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Absolute directory of the admin UI app to serve.
    pub app_path: PathBuf,
    /// Tag for log lines emitted on behalf of this plugin.
    pub logger_ctx: &'static str,
    /// Fallback UI language.
    pub language: LanguageCode,
    /// Regional formatting locale; `None` means "inherit the host default".
    pub locale: Option<LanguageIdentifier>,
    /// Picker entries, in presentation order.
    pub available_languages: Vec<LanguageCode>,
}

impl ResolvedConfig {
    /// Merges `overrides` over the plugin defaults.
    ///
    /// Fails when the effective language is missing from the effective
    /// available-languages list, or when a locale override is not a valid
    /// language identifier. Resolving an empty override set always succeeds.
    pub fn resolve(overrides: &Config) -> Result<Self> {
        let app_path = match &overrides.app_path {
            Some(path) => path.clone(),
            None => paths::default_app_path().to_path_buf(),
        };

        let language = overrides.language.unwrap_or(DEFAULT_LANGUAGE);
        let available_languages = overrides
            .available_languages
            .clone()
            .unwrap_or_else(|| DEFAULT_AVAILABLE_LANGUAGES.to_vec());
        if !available_languages.contains(&language) {
            return Err(Error::Config(format!(
                "default language '{}' is not in the available languages list",
                language
            )));
        }

        let locale = match overrides.locale.as_deref().or(DEFAULT_LOCALE) {
            Some(raw) => Some(raw.parse::<LanguageIdentifier>().map_err(|_| {
                Error::Config(format!("'{}' is not a valid locale identifier", raw))
            })?),
            None => None,
        };

        debug!(
            language = %language,
            available = available_languages.len(),
            "resolved admin UI configuration"
        );

        Ok(Self {
            app_path,
            logger_ctx: LOGGER_CTX,
            language,
            locale,
            available_languages,
        })
    }

    /// The configured locale, or the process locale when none is configured.
    ///
    /// For hosts whose "own default" is the operating system locale, this is
    /// the intended way to consume an absent [`ResolvedConfig::locale`].
    /// Returns `None` when neither is available.
    pub fn locale_or_system(&self) -> Option<LanguageIdentifier> {
        if let Some(locale) = &self.locale {
            return Some(locale.clone());
        }
        sys_locale::get_locale().and_then(|raw| raw.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_overrides() {
        let config = Config {
            app_path: Some(PathBuf::from("/srv/admin-ui")),
            language: Some(LanguageCode::Fr),
            locale: Some("fr-CA".to_string()),
            available_languages: Some(vec![LanguageCode::Fr, LanguageCode::En]),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("admin-ui.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("admin-ui.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn empty_overrides_serialize_to_empty_document() {
        let content = toml::to_string_pretty(&Config::default()).expect("serialize");
        assert!(content.trim().is_empty());
    }

    #[test]
    fn resolve_without_overrides_matches_defaults() {
        let resolved = ResolvedConfig::resolve(&Config::default()).expect("defaults are valid");
        assert_eq!(resolved.language, DEFAULT_LANGUAGE);
        assert_eq!(resolved.locale, None);
        assert_eq!(resolved.logger_ctx, LOGGER_CTX);
        assert_eq!(
            resolved.available_languages,
            DEFAULT_AVAILABLE_LANGUAGES.to_vec()
        );
        assert!(resolved.app_path.is_absolute());
    }

    #[test]
    fn resolve_honors_language_and_list_overrides() {
        let overrides = Config {
            language: Some(LanguageCode::De),
            available_languages: Some(vec![LanguageCode::De, LanguageCode::En]),
            ..Config::default()
        };
        let resolved = ResolvedConfig::resolve(&overrides).expect("valid overrides");
        assert_eq!(resolved.language, LanguageCode::De);
        assert_eq!(
            resolved.available_languages,
            vec![LanguageCode::De, LanguageCode::En]
        );
    }

    #[test]
    fn resolve_rejects_language_outside_available_list() {
        let overrides = Config {
            language: Some(LanguageCode::Ja),
            available_languages: Some(vec![LanguageCode::En, LanguageCode::Fr]),
            ..Config::default()
        };
        let err = ResolvedConfig::resolve(&overrides).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(format!("{}", err).contains("ja"));
    }

    #[test]
    fn resolve_parses_locale_override() {
        let overrides = Config {
            locale: Some("de-AT".to_string()),
            ..Config::default()
        };
        let resolved = ResolvedConfig::resolve(&overrides).expect("valid locale");
        assert_eq!(resolved.locale.map(|l| l.to_string()), Some("de-AT".into()));
    }

    #[test]
    fn resolve_rejects_malformed_locale() {
        let overrides = Config {
            locale: Some("not a locale".to_string()),
            ..Config::default()
        };
        let err = ResolvedConfig::resolve(&overrides).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn locale_or_system_prefers_configured_locale() {
        let overrides = Config {
            locale: Some("pt-BR".to_string()),
            ..Config::default()
        };
        let resolved = ResolvedConfig::resolve(&overrides).expect("valid locale");
        assert_eq!(
            resolved.locale_or_system().map(|l| l.to_string()),
            Some("pt-BR".to_string())
        );
    }
}
