use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::resolver::DEFAULT_THRESHOLD;
use crate::slack_auth::SigningSecret;

/// Environment variable holding the Slack signing secret. Deliberately not
/// part of the YAML config so it never lands in version control or logs.
pub const SIGNING_SECRET_ENV: &str = "SLACK_SIGNING_SECRET";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub directory: DirectoryConfig,
    #[serde(default)]
    pub resolver: ResolverConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DirectoryConfig {
    pub path: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            path: "experts.json".to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ResolverConfig {
    pub threshold: f64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl AppConfig {
    pub fn load(env: &str) -> anyhow::Result<Self> {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path))?;
        serde_yaml::from_str(&content).context("Failed to parse config yaml")
    }
}

/// Read the signing secret from the environment. Absence is represented,
/// not defaulted: the auth middleware fails closed on `None`.
pub fn load_signing_secret() -> Option<SigningSecret> {
    match std::env::var(SIGNING_SECRET_ENV) {
        Ok(s) if !s.is_empty() => Some(SigningSecret::new(s.into_bytes())),
        _ => None,
    }
}
