use std::env;

use crate::constants::{ENV_MODEL_DEPLOYMENT, ENV_PROJECT_CONNECTION};
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub model: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let connection = require_var(ENV_PROJECT_CONNECTION)?;
        let model = require_var(ENV_MODEL_DEPLOYMENT)?;
        Self::from_connection_string(&connection, &model)
    }

    // Accepts either a bare endpoint URL or a `endpoint=...;key=...`
    // connection string.
    pub fn from_connection_string(connection: &str, model: &str) -> Result<Self> {
        let (endpoint, api_key) = parse_connection(connection)?;
        Ok(Config {
            endpoint,
            api_key,
            model: model.to_string(),
        })
    }
}

fn require_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(Error::Config(format!("{} is not set", name))),
    }
}

fn parse_connection(connection: &str) -> Result<(String, Option<String>)> {
    let connection = connection.trim();
    if connection.starts_with("http://") || connection.starts_with("https://") {
        return Ok((connection.trim_end_matches('/').to_string(), None));
    }

    let mut endpoint = None;
    let mut api_key = None;
    for segment in connection.split(';').filter(|s| !s.trim().is_empty()) {
        let (name, value) = segment.split_once('=').ok_or_else(|| {
            Error::Config(format!("malformed connection string segment: {}", segment))
        })?;
        match name.trim().to_ascii_lowercase().as_str() {
            "endpoint" => endpoint = Some(value.trim().trim_end_matches('/').to_string()),
            "key" => api_key = Some(value.trim().to_string()),
            other => {
                return Err(Error::Config(format!(
                    "unknown connection string setting: {}",
                    other
                )))
            }
        }
    }

    match endpoint {
        Some(endpoint) if !endpoint.is_empty() => Ok((endpoint, api_key)),
        _ => Err(Error::Config(
            "connection string does not contain an endpoint".to_string(),
        )),
    }
}
