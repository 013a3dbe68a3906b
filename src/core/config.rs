//! Application configuration.
//!
//! - Server: load using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! - Browser: `ProviderConfig::from_build_env()` reads the identity provider
//!   settings baked in at compile time (`SUPABASE_URL`, `SUPABASE_ANON_KEY`).

use crate::core::error::AuthError;

/// Connection settings for the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Project URL
    /// Example: https://abcdefgh.supabase.co
    pub url: String,

    /// Public (anon) API key sent with every request
    pub anon_key: String,
}

impl ProviderConfig {
    pub fn new(url: impl Into<String>, anon_key: impl Into<String>) -> Self {
        Self {
            url: url.into().trim_end_matches('/').to_string(),
            anon_key: anon_key.into(),
        }
    }

    /// Provider settings compiled into the bundle.
    ///
    /// Missing or empty values mean sign-in is unavailable.
    pub fn from_build_env() -> Result<Self, AuthError> {
        Self::from_parts(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
    }

    fn from_parts(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, AuthError> {
        match (url, anon_key) {
            (Some(url), Some(key)) if !url.trim().is_empty() && !key.trim().is_empty() => {
                Ok(Self::new(url.trim(), key.trim()))
            }
            _ => Err(AuthError::NotConfigured),
        }
    }

    /// Endpoint under the auth API, e.g. `endpoint("/user")`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1{}", self.url, path)
    }

    /// Key the provider's browser client persists the session under:
    /// `sb-<project-ref>-auth-token`, where the project ref is the first
    /// label of the project host.
    pub fn storage_key(&self) -> String {
        let host = self
            .url
            .split("://")
            .nth(1)
            .unwrap_or(&self.url)
            .split(['/', ':'])
            .next()
            .unwrap_or_default();
        let project_ref = host.split('.').next().unwrap_or(host);
        format!("sb-{}-auth-token", project_ref)
    }
}

/// Server configuration loaded from environment variables.
#[cfg(feature = "ssr")]
#[derive(Debug, Clone)]
pub struct Config {
    /// Identity provider project URL
    pub supabase_url: Option<String>,

    /// Identity provider public API key
    pub supabase_anon_key: Option<String>,
}

#[cfg(feature = "ssr")]
impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self {
            supabase_url: std::env::var("SUPABASE_URL").ok(),
            supabase_anon_key: std::env::var("SUPABASE_ANON_KEY").ok(),
        }
    }

    /// Check if the provider URL is configured
    pub fn has_supabase_url(&self) -> bool {
        self.supabase_url.is_some()
    }

    /// Check if the provider key is configured
    pub fn has_supabase_anon_key(&self) -> bool {
        self.supabase_anon_key.is_some()
    }

    /// Provider settings, if both values are present
    pub fn provider(&self) -> Result<ProviderConfig, AuthError> {
        ProviderConfig::from_parts(
            self.supabase_url.as_deref(),
            self.supabase_anon_key.as_deref(),
        )
    }
}

#[cfg(feature = "ssr")]
impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_config_trims_trailing_slash() {
        let config = ProviderConfig::new("https://abcdefgh.supabase.co/", "anon");

        assert_eq!(config.url, "https://abcdefgh.supabase.co");
        assert_eq!(
            config.endpoint("/token?grant_type=password"),
            "https://abcdefgh.supabase.co/auth/v1/token?grant_type=password"
        );
    }

    #[test]
    fn test_storage_key_uses_project_ref() {
        let config = ProviderConfig::new("https://abcdefgh.supabase.co", "anon");

        assert_eq!(config.storage_key(), "sb-abcdefgh-auth-token");
    }

    #[test]
    fn test_storage_key_for_local_instance() {
        let config = ProviderConfig::new("http://localhost:54321", "anon");

        assert_eq!(config.storage_key(), "sb-localhost-auth-token");
    }

    #[test]
    fn test_from_parts_requires_both_values() {
        assert_eq!(
            ProviderConfig::from_parts(Some("https://x.supabase.co"), None),
            Err(AuthError::NotConfigured)
        );
        assert_eq!(
            ProviderConfig::from_parts(None, Some("anon")),
            Err(AuthError::NotConfigured)
        );
        assert_eq!(
            ProviderConfig::from_parts(Some("  "), Some("anon")),
            Err(AuthError::NotConfigured)
        );
        assert!(ProviderConfig::from_parts(Some("https://x.supabase.co"), Some("anon")).is_ok());
    }

    // ========================================================================
    // Server Config Tests (no env var dependencies - thread safe)
    // ========================================================================

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_with_all_fields() {
        let config = Config {
            supabase_url: Some("https://abcdefgh.supabase.co".to_string()),
            supabase_anon_key: Some("anon-key".to_string()),
        };

        assert!(config.has_supabase_url());
        assert!(config.has_supabase_anon_key());
        assert_eq!(
            config.provider(),
            Ok(ProviderConfig::new("https://abcdefgh.supabase.co", "anon-key"))
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_with_no_fields() {
        let config = Config {
            supabase_url: None,
            supabase_anon_key: None,
        };

        assert!(!config.has_supabase_url());
        assert!(!config.has_supabase_anon_key());
        assert_eq!(config.provider(), Err(AuthError::NotConfigured));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_with_empty_string_values() {
        // Empty strings still count as "having" the variable, but not as a usable provider
        let config = Config {
            supabase_url: Some(String::new()),
            supabase_anon_key: Some(String::new()),
        };

        assert!(config.has_supabase_url());
        assert!(config.provider().is_err());
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_from_env_returns_config() {
        // Actual values depend on environment, so we don't assert specific values
        let config = Config::from_env();

        let _ = config.has_supabase_url();
        let _ = config.has_supabase_anon_key();
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_config_debug() {
        let config = Config {
            supabase_url: Some("https://abcdefgh.supabase.co".to_string()),
            supabase_anon_key: None,
        };

        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("supabase_url"));
    }
}
