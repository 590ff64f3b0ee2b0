use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Employee name looked for when none is configured
pub const DEFAULT_TARGET_NAME: &str = "Rohan";

/// Upload size ceiling, enforced before the core ever runs
pub const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Main configuration structure for the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Employee name to extract schedules for
    pub target_name: String,
    /// Port the web server listens on
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment
    pub fn load() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        let target_name =
            env::var("TARGET_NAME").unwrap_or_else(|_| DEFAULT_TARGET_NAME.to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        Self { target_name, port }
    }
}
