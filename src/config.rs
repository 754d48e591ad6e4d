// src/config.rs
use std::{env, time::Duration};
use thiserror::Error;

/// Runtime tuning knobs. Everything has a sensible default; the environment
/// only needs to be populated to override.
#[derive(Clone, Debug)]
pub struct AppConfig {
    cache_detail_ttl: Duration,
    cache_list_ttl: Duration,
    default_page_size: u32,
    max_page_size: u32,
    latest_replies_per_comment: u32,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

const DEFAULT_CACHE_DETAIL_TTL_SECS: u64 = 300;
const DEFAULT_CACHE_LIST_TTL_SECS: u64 = 60;
const DEFAULT_PAGE_SIZE: u32 = 20;
const DEFAULT_MAX_PAGE_SIZE: u32 = 100;
const DEFAULT_LATEST_REPLIES: u32 = 3;

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_u32(key: &str, default: u32) -> u32 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(default)
}

impl AppConfig {
    /// Build configuration from environment variables. Uses defaults for
    /// absent keys and validates cross-field consistency.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let config = Self {
            cache_detail_ttl: Duration::from_secs(env_u64(
                "CACHE_DETAIL_TTL_SECS",
                DEFAULT_CACHE_DETAIL_TTL_SECS,
            )),
            cache_list_ttl: Duration::from_secs(env_u64(
                "CACHE_LIST_TTL_SECS",
                DEFAULT_CACHE_LIST_TTL_SECS,
            )),
            default_page_size: env_u32("DEFAULT_PAGE_SIZE", DEFAULT_PAGE_SIZE),
            max_page_size: env_u32("MAX_PAGE_SIZE", DEFAULT_MAX_PAGE_SIZE),
            latest_replies_per_comment: env_u32("LATEST_REPLIES_PER_COMMENT", DEFAULT_LATEST_REPLIES),
        };

        if config.default_page_size == 0 {
            return Err(ConfigError::Invalid(
                "DEFAULT_PAGE_SIZE must be positive".into(),
            ));
        }
        if config.max_page_size < config.default_page_size {
            return Err(ConfigError::Invalid(
                "MAX_PAGE_SIZE must be at least DEFAULT_PAGE_SIZE".into(),
            ));
        }

        Ok(config)
    }

    pub fn cache_detail_ttl(&self) -> Duration {
        self.cache_detail_ttl
    }

    pub fn cache_list_ttl(&self) -> Duration {
        self.cache_list_ttl
    }

    pub fn default_page_size(&self) -> u32 {
        self.default_page_size
    }

    pub fn max_page_size(&self) -> u32 {
        self.max_page_size
    }

    pub fn latest_replies_per_comment(&self) -> u32 {
        self.latest_replies_per_comment
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cache_detail_ttl: Duration::from_secs(DEFAULT_CACHE_DETAIL_TTL_SECS),
            cache_list_ttl: Duration::from_secs(DEFAULT_CACHE_LIST_TTL_SECS),
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            latest_replies_per_comment: DEFAULT_LATEST_REPLIES,
        }
    }
}
