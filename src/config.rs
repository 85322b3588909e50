use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    /// Delay applied to every data-service operation, standing in for a
    /// network round trip.
    pub api_latency_ms: u64,
    /// Load the demo users and roles on startup.
    pub seed_demo_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let api_latency_ms = env::var("API_LATENCY_MS")
            .unwrap_or_else(|_| "500".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidLatency)?;

        let seed_demo_data = env::var("SEED_DEMO_DATA")
            .map(|value| !matches!(value.to_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or(true);

        Ok(Config {
            api_latency_ms,
            seed_demo_data,
        })
    }

    pub fn api_latency(&self) -> Duration {
        Duration::from_millis(self.api_latency_ms)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid API_LATENCY_MS value")]
    InvalidLatency,
}
