use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub cache: CacheConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached reports (one entry per filter combination)
    pub max_entries: u64,
    /// How long a cached report stays valid
    pub ttl_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of randomized users loaded at startup, on top of the demo records
    pub users: usize,
}

impl CacheConfig {
    const fn default_max_entries() -> u64 {
        1_000
    }

    const fn default_ttl_secs() -> u64 {
        300
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("USERSCOPE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("USERSCOPE_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()?;

        let max_entries = std::env::var("REPORT_CACHE_MAX_ENTRIES")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or_else(CacheConfig::default_max_entries);

        let ttl_secs = std::env::var("REPORT_CACHE_TTL_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or_else(CacheConfig::default_ttl_secs);

        let seed_users = std::env::var("SEED_USERS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(50);

        Ok(Config {
            server: ServerConfig { host, port },
            cache: CacheConfig {
                max_entries,
                ttl_secs,
            },
            seed: SeedConfig { users: seed_users },
        })
    }
}
