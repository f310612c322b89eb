//! Configuration management

use serde::{Deserialize, Serialize};

// ============================================================================
// Server Configuration Constants
// ============================================================================

/// Default server host binding.
pub const DEFAULT_SERVER_HOST: &str = "127.0.0.1";

/// Default server port.
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Default shutdown timeout in seconds.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 30;

/// Default CORS allowed origin.
pub const DEFAULT_CORS_ALLOWED_ORIGIN: &str = "*";

// ============================================================================
// Upstream Configuration Constants
// ============================================================================

/// UniProt REST API base URL.
pub const DEFAULT_UNIPROT_BASE_URL: &str = "https://rest.uniprot.org";

/// RCSB PDB file server base URL.
pub const DEFAULT_STRUCTURE_BASE_URL: &str = "https://files.rcsb.org";

/// Timeout for a single upstream request in seconds.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;

/// User agent sent to upstream services.
pub const DEFAULT_UPSTREAM_USER_AGENT: &str = concat!("protscope/", env!("CARGO_PKG_VERSION"));

/// Server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub cors: CorsConfig,
}

/// Server-specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout_secs: u64,
}

/// Outbound HTTP configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub uniprot_base_url: String,
    pub structure_base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allow_credentials: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SERVER_HOST.to_string(),
            port: DEFAULT_SERVER_PORT,
            shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            uniprot_base_url: DEFAULT_UNIPROT_BASE_URL.to_string(),
            structure_base_url: DEFAULT_STRUCTURE_BASE_URL.to_string(),
            timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
            user_agent: DEFAULT_UPSTREAM_USER_AGENT.to_string(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![DEFAULT_CORS_ALLOWED_ORIGIN.to_string()],
            allow_credentials: false,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from `.env`, environment variables and defaults
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Config {
            server: ServerConfig {
                host: env_or("PROTSCOPE_HOST", DEFAULT_SERVER_HOST),
                port: env_parse("PROTSCOPE_PORT", DEFAULT_SERVER_PORT),
                shutdown_timeout_secs: env_parse(
                    "PROTSCOPE_SHUTDOWN_TIMEOUT",
                    DEFAULT_SHUTDOWN_TIMEOUT_SECS,
                ),
            },
            upstream: UpstreamConfig {
                uniprot_base_url: env_or("UNIPROT_BASE_URL", DEFAULT_UNIPROT_BASE_URL),
                structure_base_url: env_or("STRUCTURE_BASE_URL", DEFAULT_STRUCTURE_BASE_URL),
                timeout_secs: env_parse("UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS),
                user_agent: env_or("UPSTREAM_USER_AGENT", DEFAULT_UPSTREAM_USER_AGENT),
            },
            cors: CorsConfig {
                allowed_origins: env_or("CORS_ALLOWED_ORIGINS", DEFAULT_CORS_ALLOWED_ORIGIN)
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect(),
                allow_credentials: env_parse("CORS_ALLOW_CREDENTIALS", false),
            },
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port must be greater than 0");
        }

        for (name, url) in [
            ("UniProt base URL", &self.upstream.uniprot_base_url),
            ("Structure base URL", &self.upstream.structure_base_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                anyhow::bail!("{} must be an http(s) URL, got '{}'", name, url);
            }
        }

        if self.upstream.timeout_secs == 0 {
            anyhow::bail!("Upstream timeout must be greater than 0");
        }

        // CorsLayer panics on credentials combined with a wildcard origin;
        // an empty origin list is also served as a wildcard
        let wildcard =
            self.cors.allowed_origins.is_empty() || self.cors.allowed_origins.iter().any(|o| o == "*");
        if self.cors.allow_credentials && wildcard {
            anyhow::bail!("CORS credentials require an explicit list of allowed origins");
        }

        if self.cors.allowed_origins.is_empty() {
            tracing::warn!("No CORS origins configured - all origins will be allowed");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 9] = [
        "PROTSCOPE_HOST",
        "PROTSCOPE_PORT",
        "PROTSCOPE_SHUTDOWN_TIMEOUT",
        "UNIPROT_BASE_URL",
        "STRUCTURE_BASE_URL",
        "UPSTREAM_TIMEOUT_SECS",
        "UPSTREAM_USER_AGENT",
        "CORS_ALLOWED_ORIGINS",
        "CORS_ALLOW_CREDENTIALS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        clear_env();
        let config = Config::load().unwrap();

        assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
        assert_eq!(config.upstream.uniprot_base_url, DEFAULT_UNIPROT_BASE_URL);
        assert_eq!(config.cors.allowed_origins, vec!["*".to_string()]);
    }

    #[test]
    #[serial]
    fn test_load_from_env() {
        clear_env();
        std::env::set_var("PROTSCOPE_PORT", "8088");
        std::env::set_var("UNIPROT_BASE_URL", "http://localhost:9000");
        std::env::set_var("UPSTREAM_TIMEOUT_SECS", "5");
        std::env::set_var("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test,");
        std::env::set_var("CORS_ALLOW_CREDENTIALS", "true");

        let config = Config::load().unwrap();
        clear_env();

        assert_eq!(config.server.port, 8088);
        assert_eq!(config.upstream.uniprot_base_url, "http://localhost:9000");
        assert_eq!(config.upstream.timeout_secs, 5);
        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
        assert!(config.cors.allow_credentials);
    }

    #[test]
    #[serial]
    fn test_unparsable_values_fall_back_to_defaults() {
        clear_env();
        std::env::set_var("PROTSCOPE_PORT", "not-a-port");

        let config = Config::load().unwrap();
        clear_env();

        assert_eq!(config.server.port, DEFAULT_SERVER_PORT);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.upstream.structure_base_url = "files.rcsb.org".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.upstream.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.cors.allow_credentials = true;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.cors.allowed_origins.clear();
        config.cors.allow_credentials = true;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.cors.allowed_origins = vec!["http://localhost:3000".to_string()];
        config.cors.allow_credentials = true;
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_load_rejects_credentials_without_origins() {
        clear_env();
        std::env::set_var("CORS_ALLOWED_ORIGINS", "");
        std::env::set_var("CORS_ALLOW_CREDENTIALS", "true");

        let result = Config::load();
        clear_env();

        assert!(result.is_err());
    }
}
