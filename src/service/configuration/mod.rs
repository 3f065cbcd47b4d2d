mod telemetry;

pub use telemetry::*;

use crate::domain::InternalErrorPolicy;
use envconfig::Envconfig;
use std::collections::HashMap;
use std::fmt::Debug;

#[derive(Clone, Envconfig, Debug)]
pub struct ServerConfig {
    #[envconfig(from = "HOST", default = "localhost")]
    /// The host for the server
    host: String,
    #[envconfig(from = "PORT", default = "3007")]
    /// The port for the server
    port: u16,
}

impl ServerConfig {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn load() -> Result<Self, envconfig::Error> {
        // dotenv().ok() is already called in the main.rs
        ServerConfig::init_from_env()
    }
}

#[derive(Clone, Envconfig, Debug)]
pub struct ProjectionConfig {
    #[envconfig(from = "INTERNAL_ERROR_POLICY", default = "propagate")]
    /// Whether internal errors reach the fault boundary or get answered inline
    internal_error_policy: InternalErrorPolicy,
}

impl ProjectionConfig {
    pub fn internal_error_policy(&self) -> InternalErrorPolicy {
        self.internal_error_policy
    }

    pub fn load() -> Result<Self, envconfig::Error> {
        ProjectionConfig::init_from_env()
    }
}

#[derive(Clone)]
pub struct Config {
    server: ServerConfig,
    projection: ProjectionConfig,
}

impl Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.server.host)
            .field("port", &self.server.port)
            .field(
                "internal_error_policy",
                &self.projection.internal_error_policy.to_string(),
            )
            .finish()
    }
}

impl Config {
    pub fn new(server: ServerConfig, projection: ProjectionConfig) -> Self {
        Self { server, projection }
    }

    pub fn server(&self) -> &ServerConfig {
        &self.server
    }

    pub fn projection(&self) -> &ProjectionConfig {
        &self.projection
    }

    pub fn load() -> Result<Self, envconfig::Error> {
        Ok(Self {
            server: ServerConfig::load()?,
            projection: ProjectionConfig::load()?,
        })
    }
}

impl From<HashMap<&str, &str>> for ServerConfig {
    fn from(value: HashMap<&str, &str>) -> Self {
        let host = value.get("HOST").unwrap_or(&"localhost").to_string();
        let port = value
            .get("PORT")
            .and_then(|value| value.parse().ok())
            .unwrap_or(3007);

        Self { host, port }
    }
}

impl From<HashMap<&str, &str>> for ProjectionConfig {
    fn from(value: HashMap<&str, &str>) -> Self {
        let internal_error_policy = value
            .get("INTERNAL_ERROR_POLICY")
            .and_then(|value| value.parse().ok())
            .unwrap_or_default();

        Self {
            internal_error_policy,
        }
    }
}

impl From<HashMap<&str, &str>> for Config {
    fn from(value: HashMap<&str, &str>) -> Self {
        let server = ServerConfig::from(value.clone());
        let projection = ProjectionConfig::from(value);
        Self { server, projection }
    }
}
