mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::str::FromStr;
use tracing::{debug, warn};

/// Loads the YAML file named by `CONFIG_PATH` (default `config.yaml`) and
/// applies environment overrides on top. A missing file yields the defaults.
pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    debug!("Loading configuration from: {}", config_path);

    let config = match tokio::fs::read_to_string(&config_path).await {
        Ok(config_str) => parse(&config_str)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No config file at {}, using defaults", config_path);
            Config::default()
        }
        Err(e) => return Err(e.into()),
    };

    apply_env_overrides(config, |key| env::var(key).ok())
}

pub fn parse(config_str: &str) -> Result<Config> {
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }
    Ok(serde_yaml::from_str(config_str)?)
}

/// Overrides individual settings from environment-style lookups.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("APP_NAME") {
        config.app.name = v;
    }
    if let Some(v) = lookup("APP_VERSION") {
        config.app.version = v;
    }
    if let Some(v) = lookup("ENV") {
        config.app.env = v;
    }
    if let Some(v) = lookup("HOST") {
        config.server.host = v;
    }
    if let Some(v) = lookup("PORT") {
        config.server.port = parse_number("PORT", &v)?;
    }
    if let Some(v) = lookup("DATABASE_PATH") {
        config.server.database_path = v;
    }
    if let Some(v) = lookup("CORS_ORIGINS") {
        config.server.cors_origins = v
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();
    }
    if let Some(v) = lookup("MAX_UPLOAD_BYTES") {
        config.server.max_upload_bytes = parse_number("MAX_UPLOAD_BYTES", &v)?;
    }
    if let Some(v) = lookup("LOG_LEVEL") {
        config.server.logs.level = v;
    }
    if let Some(v) = lookup("INFERENCE_SERVICE_URL") {
        config.inference.base_url = v;
    }
    if let Some(v) = lookup("INFERENCE_TIMEOUT_SECS") {
        config.inference.timeout_secs = parse_number("INFERENCE_TIMEOUT_SECS", &v)?;
    }
    if let Some(v) = lookup("INFERENCE_HEALTH_TIMEOUT_SECS") {
        config.inference.health_timeout_secs =
            parse_number("INFERENCE_HEALTH_TIMEOUT_SECS", &v)?;
    }

    if config.server.cors_origins.is_empty() {
        warn!("No CORS origins configured, cross-origin requests will be rejected");
    }

    Ok(config)
}

fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::config(format!("{key} must be a number, got '{value}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.app.name, "BeanSpect Backend Service");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.inference.base_url, "http://localhost:8001");
        assert_eq!(config.inference.timeout_secs, 30);
        assert_eq!(config.inference.health_timeout_secs, 2);
        assert_eq!(config.server.cors_origins.len(), 2);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = parse(
            r#"
server:
  port: 9090
inference:
  base_url: "http://inference:8000"
"#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.inference.base_url, "http://inference:8000");
        assert_eq!(config.inference.timeout_secs, 30);
        assert_eq!(config.app.version, "1.0.0");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = parse("   \n").unwrap();
        assert_eq!(config.server.database_path, "beanspect.db");
    }

    #[test]
    fn test_env_overrides() {
        let config = apply_env_overrides(
            Config::default(),
            lookup_from(&[
                ("PORT", "3001"),
                ("INFERENCE_SERVICE_URL", "http://ml:8000"),
                ("CORS_ORIGINS", "https://a.example, https://b.example"),
                ("DATABASE_PATH", ":memory:"),
            ]),
        )
        .unwrap();

        assert_eq!(config.server.port, 3001);
        assert_eq!(config.inference.base_url, "http://ml:8000");
        assert_eq!(
            config.server.cors_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.server.database_path, ":memory:");
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let result = apply_env_overrides(Config::default(), lookup_from(&[("PORT", "eighty")]));
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
