use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

pub const CONTENT_ENV: &str = "FOLIO_CONTENT";
pub const CONFIG_ENV: &str = "FOLIO_CONFIG";

/// Content root used when nothing else is configured
pub const DEFAULT_CONTENT_DIR: &str = "public/data";

/// Where content documents are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLocation {
    Dir(PathBuf),
    Url(String),
}

impl ContentLocation {
    /// `http://` and `https://` locations are remote, anything else is a
    /// directory (with tilde expansion).
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            ContentLocation::Url(trimmed.trim_end_matches('/').to_string())
        } else {
            ContentLocation::Dir(expand_tilde(trimmed))
        }
    }
}

impl fmt::Display for ContentLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentLocation::Dir(path) => write!(f, "{}", path.display()),
            ContentLocation::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Resolve the content location based on priority:
/// 1. Explicit location (`--content`)
/// 2. FOLIO_CONTENT environment variable
/// 3. `[content] source` in the config file
/// 4. ./public/data
pub fn resolve_content_location(explicit: Option<&str>, config: &Config) -> ContentLocation {
    resolve_content_with(explicit, std::env::var(CONTENT_ENV).ok(), config)
}

fn resolve_content_with(
    explicit: Option<&str>,
    env: Option<String>,
    config: &Config,
) -> ContentLocation {
    if let Some(raw) = explicit {
        return ContentLocation::parse(raw);
    }
    if let Some(raw) = env.filter(|v| !v.trim().is_empty()) {
        return ContentLocation::parse(&raw);
    }
    if let Some(raw) = config.content.source.as_deref() {
        return ContentLocation::parse(raw);
    }
    ContentLocation::Dir(PathBuf::from(DEFAULT_CONTENT_DIR))
}

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. FOLIO_CONFIG environment variable (with tilde expansion)
/// 3. <config dir>/folio/config.toml
pub fn resolve_config_path(explicit: Option<&str>) -> Result<PathBuf> {
    resolve_config_with(explicit, std::env::var(CONFIG_ENV).ok())
}

fn resolve_config_with(explicit: Option<&str>, env: Option<String>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(expand_tilde(path));
    }

    if let Some(env_path) = env.filter(|v| !v.trim().is_empty()) {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("folio").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".folio").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Directory or base URL holding the JSON documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Form-processing endpoint submissions are POSTed to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Dark => ThemeName::Light,
            ThemeName::Light => ThemeName::Dark,
        }
    }
}

fn default_tick_ms() -> u64 {
    50
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub theme: ThemeName,
    /// Redraw interval of the interactive view
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            tick_ms: default_tick_ms(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn contact_endpoint(&self) -> Result<&str> {
        self.contact
            .endpoint
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| {
                Error::Config("no contact endpoint configured ([contact] endpoint)".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.content.source, None);
        assert_eq!(config.ui.theme, ThemeName::Dark);
        assert_eq!(config.ui.tick_ms, 50);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.content.source = Some("https://example.com/data".to_string());
        config.contact.endpoint = Some("https://forms.example.com/f/abc".to_string());
        config.ui.theme = ThemeName::Light;

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);
        assert_eq!(loaded.contact_endpoint()?, "https://forms.example.com/f/abc");

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_partial_file_fills_defaults() -> Result<()> {
        let config: Config = toml::from_str("[ui]\ntheme = \"light\"\n")?;
        assert_eq!(config.ui.theme, ThemeName::Light);
        assert_eq!(config.ui.tick_ms, 50);
        assert!(config.contact_endpoint().is_err());
        Ok(())
    }

    #[test]
    fn test_content_priority() {
        let mut config = Config::default();
        config.content.source = Some("/srv/portfolio".to_string());

        assert_eq!(
            resolve_content_with(Some("./data"), Some("/env".into()), &config),
            ContentLocation::Dir(PathBuf::from("./data"))
        );
        assert_eq!(
            resolve_content_with(None, Some("https://cdn.example.com/data/".into()), &config),
            ContentLocation::Url("https://cdn.example.com/data".to_string())
        );
        assert_eq!(
            resolve_content_with(None, None, &config),
            ContentLocation::Dir(PathBuf::from("/srv/portfolio"))
        );
        assert_eq!(
            resolve_content_with(None, Some(String::new()), &Config::default()),
            ContentLocation::Dir(PathBuf::from(DEFAULT_CONTENT_DIR))
        );
    }

    #[test]
    fn test_config_path_priority() -> Result<()> {
        assert_eq!(
            resolve_config_with(Some("/etc/folio.toml"), Some("/env.toml".into()))?,
            PathBuf::from("/etc/folio.toml")
        );
        assert_eq!(
            resolve_config_with(None, Some("/env.toml".into()))?,
            PathBuf::from("/env.toml")
        );
        Ok(())
    }
}
