//! Configuration loading for Folio.
//!
//! The config file lives at `~/.folio/config.toml` unless `FOLIO_CONFIG`
//! points elsewhere. Every section is optional; a missing file is not an error.
//!
//! ```toml
//! [app]
//! reduced_motion = false
//!
//! [theme]
//! accent = "#00fc00"
//!
//! [github]
//! user = "octocat"
//! token = "${GITHUB_TOKEN}"
//!
//! [profile]
//! name = "Ada"
//! ```

use std::{
    env, fmt,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

use folio_types::Profile;
use folio_types::ui::UiOptions;

pub use folio_types::ui::{ColorParseError, DEFAULT_ACCENT, Rgb};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "FOLIO_CONFIG";

const DEFAULT_MAX_REPOS: u8 = 30;

#[derive(Debug, Default, Deserialize)]
pub struct FolioConfig {
    pub app: Option<AppConfig>,
    pub theme: Option<ThemeConfig>,
    pub github: Option<GitHubConfig>,
    /// Static project list, used when `[github]` is absent.
    #[serde(default)]
    pub projects: Vec<ProjectEntry>,
    pub profile: Option<Profile>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for bullets and borders.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable entrance animations and typing effects.
    #[serde(default)]
    pub reduced_motion: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ThemeConfig {
    /// Hex colour, `#rrggbb` or `rrggbb`.
    pub accent: Option<String>,
}

/// GitHub repository listing used as the project source.
///
/// ```toml
/// [github]
/// user = "octocat"
/// token = "${GITHUB_TOKEN}"
/// max_repos = 12
/// include_forks = false
/// ```
#[derive(Default, Deserialize)]
pub struct GitHubConfig {
    pub user: String,
    pub token: Option<String>,
    pub max_repos: Option<u8>,
    #[serde(default)]
    pub include_forks: bool,
    /// Override for GitHub Enterprise or tests.
    pub api_base: Option<String>,
}

// Manual Debug impl to prevent leaking the token in logs.
impl fmt::Debug for GitHubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GitHubConfig")
            .field("user", &self.user)
            .field(
                "token",
                &if self.token.is_some() {
                    "[REDACTED]"
                } else {
                    "None"
                },
            )
            .field("max_repos", &self.max_repos)
            .field("include_forks", &self.include_forks)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl GitHubConfig {
    /// Token with `${VAR}` references expanded. Empty results count as absent.
    #[must_use]
    pub fn resolved_token(&self) -> Option<String> {
        self.token
            .as_deref()
            .map(expand_env_vars)
            .filter(|token| !token.trim().is_empty())
    }

    #[must_use]
    pub fn max_repos(&self) -> u8 {
        self.max_repos.unwrap_or(DEFAULT_MAX_REPOS).clamp(1, 100)
    }
}

/// One entry of a static `[[projects]]` list.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
}

/// Expand `${VAR}` references. Unset variables become empty strings.
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        let after = &rest[start + 2..];
        let Some(end) = after.find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let var = &after[..end];
        if !var.is_empty() {
            out.push_str(&env::var(var).unwrap_or_default());
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

impl FolioConfig {
    /// Load the config from its default location.
    ///
    /// Returns `Ok(None)` when there is no config file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let mut options = self
            .app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
                reduced_motion: app.reduced_motion,
                ..UiOptions::default()
            })
            .unwrap_or_default();
        options.accent = self.accent();
        options
    }

    /// Configured accent colour, falling back to the default on absence or parse failure.
    #[must_use]
    pub fn accent(&self) -> Rgb {
        let Some(raw) = self.theme.as_ref().and_then(|t| t.accent.as_deref()) else {
            return DEFAULT_ACCENT;
        };
        Rgb::parse_hex(raw).unwrap_or_else(|err| {
            tracing::warn!("{err}; using default accent");
            DEFAULT_ACCENT
        })
    }

    #[must_use]
    pub fn profile(&self) -> Profile {
        self.profile.clone().unwrap_or_default()
    }
}

/// `$FOLIO_CONFIG` if set, otherwise `~/.folio/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = env::var_os(CONFIG_PATH_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(explicit));
    }
    dirs::home_dir().map(|home| home.join(".folio").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn expand_env_vars_no_vars() {
        assert_eq!(expand_env_vars("hello world"), "hello world");
    }

    #[test]
    fn expand_env_vars_single_var() {
        unsafe {
            std::env::set_var("FOLIO_TEST_TOKEN", "secret");
        }
        assert_eq!(expand_env_vars("Bearer ${FOLIO_TEST_TOKEN}"), "Bearer secret");
        unsafe {
            std::env::remove_var("FOLIO_TEST_TOKEN");
        }
    }

    #[test]
    fn expand_env_vars_missing_var_becomes_empty() {
        unsafe {
            std::env::remove_var("FOLIO_MISSING_VAR");
        }
        assert_eq!(expand_env_vars("a ${FOLIO_MISSING_VAR} b"), "a  b");
    }

    #[test]
    fn expand_env_vars_unclosed_brace_preserved() {
        assert_eq!(expand_env_vars("test ${UNCLOSED"), "test ${UNCLOSED");
    }

    #[test]
    fn expand_env_vars_empty_var_name_dropped() {
        assert_eq!(expand_env_vars("test ${} more"), "test  more");
    }

    #[test]
    fn accent_flows_into_ui_options() {
        let config: FolioConfig = toml::from_str("[theme]\naccent = \"#ff00ff\"").unwrap();
        assert_eq!(config.ui_options().accent, Rgb(255, 0, 255));
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config: FolioConfig = toml::from_str("").unwrap();
        assert_eq!(config.accent(), DEFAULT_ACCENT);
        assert_eq!(config.ui_options(), UiOptions::default());
        assert_eq!(config.profile(), Profile::default());
        assert!(config.projects.is_empty());
    }

    #[test]
    fn invalid_accent_falls_back() {
        let config: FolioConfig = toml::from_str("[theme]\naccent = \"green\"").unwrap();
        assert_eq!(config.accent(), DEFAULT_ACCENT);
    }

    #[test]
    fn profile_overrides_are_partial() {
        let config: FolioConfig = toml::from_str(
            r#"
            [profile]
            name = "Ada"

            [[profile.work_history]]
            title = "Engineer"
            organization = "Analytical Engines"
            "#,
        )
        .unwrap();
        let profile = config.profile();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.headline, Profile::default().headline);
        assert_eq!(profile.work_history.len(), 1);
        assert!(profile.work_history[0].period.is_empty());
    }

    #[test]
    fn github_section() {
        let config: FolioConfig = toml::from_str(
            r#"
            [github]
            user = "octocat"
            token = ""
            max_repos = 200
            "#,
        )
        .unwrap();
        let github = config.github.unwrap();
        assert_eq!(github.user, "octocat");
        assert_eq!(github.resolved_token(), None);
        assert_eq!(github.max_repos(), 100);
        assert!(!github.include_forks);
    }

    #[test]
    fn github_debug_redacts_token() {
        let github = GitHubConfig {
            user: "octocat".to_string(),
            token: Some("ghp_secret".to_string()),
            ..Default::default()
        };
        let rendered = format!("{github:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("ghp_secret"));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[app]\nreduced_motion = true\n\n[[projects]]\nname = \"folio\"\nurl = \"https://example.com\""
        )
        .unwrap();

        let config = FolioConfig::load_from(file.path()).unwrap();
        assert!(config.ui_options().reduced_motion);
        assert_eq!(config.projects.len(), 1);
        assert!(config.projects[0].description.is_empty());
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[app").unwrap();

        let err = FolioConfig::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), &file.path().to_path_buf());
    }
}
