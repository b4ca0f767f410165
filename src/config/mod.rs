use std::env;

/// Top-level configuration for the binary, sourced from the environment
/// (optionally via a `.env` file).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Self {
            telemetry: TelemetryConfig { log_level },
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub log_level: String,
}
