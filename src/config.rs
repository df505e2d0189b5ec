use anyhow::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for the copydesk console
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CopydeskConfig {
    /// Remote data service settings
    pub service: ServiceConfig,
    /// List view defaults
    pub list: ListConfig,
    /// Crawler worker roster
    pub workers: WorkerRosterConfig,
    /// Observability settings
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Base URL of the editorial data service
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: u64,
    /// Rate limiting settings
    pub rate_limit: RateLimitConfig,
    /// TTL for cached GET responses in seconds
    pub cache_ttl_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RateLimitConfig {
    /// Requests per second limit
    pub requests_per_second: u32,
    /// Burst capacity
    pub burst_capacity: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListConfig {
    /// Page size sent when the operator does not pick one; None defers to
    /// the service-defined default
    pub default_page_size: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkerRosterConfig {
    /// Fixed roster of crawler workers, in display order
    pub roster: Vec<WorkerEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkerEntry {
    /// Stable key reported by the service's running-worker list
    pub key: String,
    /// Human-readable label for the console
    pub label: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    /// Log level filter (e.g. "info", "copydesk=debug")
    pub log_level: String,
    /// Emit JSON logs instead of the compact format
    pub json_logs: bool,
}

impl Default for CopydeskConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                base_url: "http://localhost:8080".to_string(),
                timeout_seconds: 10,
                rate_limit: RateLimitConfig {
                    requests_per_second: 5,
                    burst_capacity: 10,
                },
                cache_ttl_seconds: 30,
            },
            list: ListConfig {
                default_page_size: None,
            },
            workers: WorkerRosterConfig {
                roster: vec![
                    WorkerEntry {
                        key: "poj".to_string(),
                        label: "PKU Online Judge".to_string(),
                    },
                    WorkerEntry {
                        key: "hdu".to_string(),
                        label: "HDU Online Judge".to_string(),
                    },
                    WorkerEntry {
                        key: "cf".to_string(),
                        label: "Codeforces".to_string(),
                    },
                ],
            },
            observability: ObservabilityConfig {
                log_level: "info".to_string(),
                json_logs: false,
            },
        }
    }
}

impl CopydeskConfig {
    /// Load configuration with precedence:
    /// 1. Default values
    /// 2. copydesk.toml in the working directory
    /// 3. Environment variables (prefixed with COPYDESK_)
    pub fn load() -> Result<Self> {
        let defaults = Config::try_from(&CopydeskConfig::default())?;

        let mut builder = Config::builder().add_source(defaults);

        if Path::new("copydesk.toml").exists() {
            builder = builder.add_source(File::with_name("copydesk"));
        }

        builder = builder.add_source(
            Environment::with_prefix("COPYDESK")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let toml_content = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_content)?;
        Ok(())
    }

    /// Load .env file if it exists
    pub fn load_env_file() -> Result<()> {
        if Path::new(".env").exists() {
            dotenvy::dotenv()?;
            tracing::info!("Loaded environment variables from .env file");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable_without_a_file() {
        let config = CopydeskConfig::default();
        assert_eq!(config.service.base_url, "http://localhost:8080");
        assert!(config.service.rate_limit.requests_per_second > 0);
        assert!(!config.workers.roster.is_empty());
    }

    #[test]
    fn saved_config_round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("copydesk.toml");

        let config = CopydeskConfig::default();
        config.save_to_file(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let back: CopydeskConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.service.base_url, config.service.base_url);
        assert_eq!(back.workers.roster.len(), config.workers.roster.len());
    }
}
