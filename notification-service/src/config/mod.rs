use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub service: ServiceConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub log_level: String,
    /// OTLP collector endpoint. Spans are only exported when set.
    pub otlp_endpoint: Option<String>,
    /// `*` allows any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            name: "notification-service".to_string(),
            log_level: "info".to_string(),
            otlp_endpoint: None,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

impl NotificationConfig {
    pub fn load() -> Result<Self, AppError> {
        let mut common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        // Hosting platforms conventionally hand out the port via PORT.
        if let Ok(port) = env::var("PORT") {
            common_config.port = parse_port(&port)?;
        }

        Ok(NotificationConfig {
            common: common_config,
            service: ServiceConfig {
                name: get_env("SERVICE_NAME", Some("notification-service"), is_prod)?,
                log_level: get_env("LOG_LEVEL", Some("info"), is_prod)?,
                otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
                cors_allowed_origins: parse_origins(&get_env(
                    "CORS_ALLOWED_ORIGINS",
                    Some("*"),
                    is_prod,
                )?),
            },
        })
    }
}

fn parse_port(value: &str) -> Result<u16, AppError> {
    value.trim().parse().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!("PORT '{}' is not a valid port: {}", value, e))
    })
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
