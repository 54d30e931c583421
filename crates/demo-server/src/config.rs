//! Server configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `demo-server.{toml,yaml,json}` in the working directory, then `DEMO_*`
//! environment variables.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;

pub const ENV_PREFIX: &str = "DEMO";
const CONFIG_FILE: &str = "demo-server";

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";
pub const DEFAULT_DATABASE_PATH: &str = "database.db";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub database_path: String,
    pub max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self> {
        Self::build(None)
    }

    fn build(env_vars: Option<config::Map<String, String>>) -> Result<Self> {
        let environment = config::Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(env_vars);

        let settings = config::Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("database_path", DEFAULT_DATABASE_PATH)?
            .set_default("max_connections", i64::from(DEFAULT_MAX_CONNECTIONS))?
            .add_source(config::File::with_name(CONFIG_FILE).required(false))
            .add_source(environment)
            .build()
            .context("Failed to assemble configuration")?;

        let config: ServerConfig = settings
            .try_deserialize()
            .context("Invalid configuration")?;

        // Fail at startup rather than at bind time
        config.socket_addr()?;

        Ok(config)
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Invalid bind address: {}", self.bind_address))
    }
}
