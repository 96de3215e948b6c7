use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub default_slot_duration_minutes: u32,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            host: env::var("BIND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("BIND_PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or_else(|| {
                    warn!("BIND_PORT not set or invalid, using default 3000");
                    3000
                }),
            default_slot_duration_minutes: env::var("DEFAULT_SLOT_DURATION_MINUTES")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or_else(|| {
                    warn!("DEFAULT_SLOT_DURATION_MINUTES not set or invalid, using default 30");
                    30
                }),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            default_slot_duration_minutes: 30,
        }
    }
}
