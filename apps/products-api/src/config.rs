//! Configuration for Products API

use std::path::PathBuf;

use axum_helpers::CorsConfig;
use core_config::{app_info, env_or_default, server::ServerConfig, AppInfo, FromEnv};

pub use core_config::Environment;

/// Catalog file used when `DATA_FILE` is not set
pub const DEFAULT_DATA_FILE: &str = "db/db.json";

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub environment: Environment,
    pub cors: CorsConfig,
    /// Path of the JSON catalog file
    pub data_file: PathBuf,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?;
        let cors = CorsConfig::from_env()?;
        let data_file = PathBuf::from(env_or_default("DATA_FILE", DEFAULT_DATA_FILE));

        Ok(Self {
            app: app_info!(),
            server,
            environment,
            cors,
            data_file,
        })
    }
}
