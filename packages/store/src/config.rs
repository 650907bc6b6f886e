//! # Client configuration: `finance.toml`
//!
//! Defines the TOML configuration read by every frontend (filename:
//! [`ClientConfig::filename`] = `"finance.toml"`), plus environment overrides.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000/api"
//!
//! [auth]
//! login_route = "/login"
//! home_route = "/dashboard"
//! public_routes = ["/login", "/signup", "/forgot-password"]
//! revalidate_interval_secs = 900   # 0 disables background revalidation
//!
//! [display]
//! locale = "en"                    # or "pt-br"
//! currency_symbol = "$"
//! ```
//!
//! ## Environment
//!
//! | Variable | Overrides |
//! |----------|-----------|
//! | `FINANCE_API_URL` | `api.base_url` |
//! | `FINANCE_LOCALE` | `display.locale` |
//!
//! Native builds read these at runtime (a `.env` file is honoured via
//! `dotenvy`). WASM builds have no process environment, so the values are
//! baked in at compile time.
//!
//! All structs derive `Default` so a missing or empty file equals the default
//! configuration.

use serde::{Deserialize, Serialize};

pub const API_URL_VAR: &str = "FINANCE_API_URL";
pub const LOCALE_VAR: &str = "FINANCE_LOCALE";

/// Top-level configuration stored in `finance.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// REST backend location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

/// Session lifecycle and routing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_login_route")]
    pub login_route: String,
    #[serde(default = "default_home_route")]
    pub home_route: String,
    /// Routes rendered without a session.
    #[serde(default = "default_public_routes")]
    pub public_routes: Vec<String>,
    /// Background token revalidation period in seconds. 0 disables it.
    #[serde(default = "default_revalidate_interval")]
    pub revalidate_interval_secs: u64,
}

fn default_login_route() -> String {
    "/login".to_string()
}

fn default_home_route() -> String {
    "/dashboard".to_string()
}

fn default_public_routes() -> Vec<String> {
    ["/login", "/signup", "/forgot-password"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_revalidate_interval() -> u64 {
    15 * 60
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            login_route: default_login_route(),
            home_route: default_home_route(),
            public_routes: default_public_routes(),
            revalidate_interval_secs: default_revalidate_interval(),
        }
    }
}

impl AuthConfig {
    pub fn is_public(&self, path: &str) -> bool {
        let path = normalize_path(path);
        self.public_routes.iter().any(|r| normalize_path(r) == path)
    }
}

// "/login/" and "/login?next=x" both count as "/login".
fn normalize_path(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Language of user-facing strings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "pt-br")]
    PtBr,
}

impl Locale {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-us" => Some(Locale::En),
            "pt" | "pt-br" => Some(Locale::PtBr),
            _ => None,
        }
    }
}

/// Presentation preferences.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub locale: Locale,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl ClientConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "finance.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Builder method to set the API base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }

    /// Builder method to set the revalidation interval.
    pub fn with_revalidate_interval(mut self, secs: u64) -> Self {
        self.auth.revalidate_interval_secs = secs;
        self
    }

    /// Defaults plus environment overrides.
    pub fn from_env() -> Self {
        Self::default().apply_env()
    }

    /// Apply environment overrides on top of this config.
    pub fn apply_env(mut self) -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            dotenvy::dotenv().ok();
            if let Ok(url) = std::env::var(API_URL_VAR) {
                self.api.base_url = url;
            }
            if let Some(locale) = std::env::var(LOCALE_VAR).ok().and_then(|l| Locale::parse(&l)) {
                self.display.locale = locale;
            }
        }
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(url) = option_env!("FINANCE_API_URL") {
                self.api.base_url = url.to_string();
            }
            if let Some(locale) = option_env!("FINANCE_LOCALE").and_then(Locale::parse) {
                self.display.locale = locale;
            }
        }
        self
    }

    /// Load `finance.toml` from `path` (defaults when missing) and apply
    /// environment overrides.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, crate::StoreError> {
        let config = match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_toml(&raw).map_err(|e| crate::StoreError::Malformed {
                key: path.display().to_string(),
                reason: e.to_string(),
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::default(),
            Err(e) => {
                return Err(crate::StoreError::Write {
                    key: path.display().to_string(),
                    reason: e.to_string(),
                })
            }
        };
        Ok(config.apply_env())
    }

    /// Background revalidation period, `None` when disabled.
    pub fn revalidate_interval(&self) -> Option<std::time::Duration> {
        match self.auth.revalidate_interval_secs {
            0 => None,
            secs => Some(std::time::Duration::from_secs(secs)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert_eq!(config.auth.revalidate_interval_secs, 900);
        assert_eq!(
            config.revalidate_interval(),
            Some(std::time::Duration::from_secs(900))
        );
    }

    #[test]
    fn test_partial_file() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://finance.example.com/api"

            [auth]
            revalidate_interval_secs = 0

            [display]
            locale = "pt-br"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://finance.example.com/api");
        assert_eq!(config.auth.login_route, "/login");
        assert_eq!(config.revalidate_interval(), None);
        assert_eq!(config.display.locale, Locale::PtBr);
        assert_eq!(config.display.currency_symbol, "$");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:9000/api")
            .with_revalidate_interval(60);
        let parsed = ClientConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_public_routes() {
        let auth = AuthConfig::default();
        assert!(auth.is_public("/login"));
        assert!(auth.is_public("/login/"));
        assert!(auth.is_public("/signup?next=/dashboard"));
        assert!(auth.is_public("/forgot-password"));
        assert!(!auth.is_public("/dashboard"));
        assert!(!auth.is_public("/"));
        assert!(!auth.is_public("/login/extra"));
    }

    #[test]
    fn test_locale_parse() {
        assert_eq!(Locale::parse("EN"), Some(Locale::En));
        assert_eq!(Locale::parse("pt_BR"), Some(Locale::PtBr));
        assert_eq!(Locale::parse("fr"), None);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig::load(&dir.path().join(ClientConfig::filename())).unwrap();
        assert_eq!(config.auth, AuthConfig::default());
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(ClientConfig::filename());
        std::fs::write(&path, "[api\nbase_url = ").unwrap();
        assert!(ClientConfig::load(&path).is_err());
    }
}
