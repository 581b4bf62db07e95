use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

pub const DEFAULT_DATA_PATH: &str = "data/shoppingList.json";

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub data_path: PathBuf,
    pub enable_api_docs: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let data_path = env::var("SHOPPING_LIST_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH));

        let enable_api_docs = match env::var("ENABLE_API_DOCS") {
            Ok(value) => parse_flag(&value)
                .context("ENABLE_API_DOCS must be one of: true, false, 1, 0")?,
            Err(_) => false,
        };

        Ok(Config {
            service_port,
            service_host,
            data_path,
            enable_api_docs,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Shopping list file: {}", self.data_path.display());
        tracing::info!("  API docs: {}",
            if self.enable_api_docs { "enabled at /swagger-ui" } else { "disabled" });
        tracing::info!("  Service listening on: {}", self.bind_address());
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
