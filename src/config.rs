use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::{JSONSchema, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_CONFIG_PATH: &str = "./ratemymp.jsonc";
pub const API_BASE_URL_ENV: &str = "RATEMYMP_API_BASE_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

fn default_api_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

fn default_enabled_true() -> bool {
    true
}

fn default_logging_dir() -> PathBuf {
    PathBuf::from("./logs")
}

fn default_logging_filter() -> String {
    "info".to_string()
}

fn default_logging_rotation() -> LoggingRotation {
    LoggingRotation::Daily
}

fn default_logging_retention_days() -> usize {
    14
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    #[serde(default = "default_api_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_base_url(),
            request_timeout_ms: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingRotation {
    Daily,
    Hourly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_logging_filter")]
    pub filter: String,
    #[serde(default = "default_logging_rotation")]
    pub rotation: LoggingRotation,
    #[serde(default = "default_logging_retention_days")]
    pub retention_days: usize,
    #[serde(default = "default_enabled_true")]
    pub stderr_warn_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: default_logging_dir(),
            filter: default_logging_filter(),
            rotation: default_logging_rotation(),
            retention_days: default_logging_retention_days(),
            stderr_warn_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_enabled_true")]
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Config {
    /// Loads the config file when it exists, falls back to defaults when it
    /// does not, then applies the base URL override from the environment.
    pub fn resolve(config_path: &Path) -> Result<Self> {
        let mut config = if config_path.exists() {
            Self::load(config_path)?
        } else {
            Self::default()
        };

        config.apply_base_url_override(std::env::var(API_BASE_URL_ENV).ok());
        config.api.base_url = normalize_base_url(&config.api.base_url)?;
        Ok(config)
    }

    pub fn load(config_path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config_value: Value = json5::from_str(&config_content)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;

        let config_base = config_path.parent().unwrap_or_else(|| Path::new("."));
        let schema_path = resolve_schema_path(config_base, &config_value)?;
        ConfigSchema::load(&schema_path)?.check(&config_value)?;

        let mut config: Config =
            serde_json::from_value(config_value).context("failed to deserialize config")?;

        if !config.logging.dir.is_absolute() {
            config.logging.dir = config_base.join(&config.logging.dir);
        }
        config.api.base_url = normalize_base_url(&config.api.base_url)?;

        Ok(config)
    }

    pub fn apply_base_url_override(&mut self, value: Option<String>) {
        if let Some(value) = value.filter(|value| !value.trim().is_empty()) {
            self.api.base_url = value.trim().to_string();
        }
    }
}

fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        bail!("api.base_url must be an http or https url, got '{}'", raw);
    }
    Ok(trimmed.to_string())
}

fn resolve_schema_path(config_base: &Path, config_value: &Value) -> Result<PathBuf> {
    if let Some(path_text) = config_value.get("$schema").and_then(|value| value.as_str()) {
        let configured = PathBuf::from(path_text);
        if configured.is_absolute() {
            return Ok(configured);
        }
        return Ok(config_base.join(&configured));
    }

    let local_default = config_base.join("ratemymp.schema.json");
    if local_default.exists() {
        return Ok(local_default);
    }

    Err(anyhow!(
        "unable to resolve schema path: expected $schema in config or ratemymp.schema.json beside it"
    ))
}

/// Compiled config schema; violations are reported with the offending
/// config location.
struct ConfigSchema {
    compiled: JSONSchema,
}

impl ConfigSchema {
    fn load(schema_path: &Path) -> Result<Self> {
        let schema_text = fs::read_to_string(schema_path)
            .with_context(|| format!("failed to read schema {}", schema_path.display()))?;
        let schema: Value = serde_json::from_str(&schema_text)
            .with_context(|| format!("failed to parse schema {}", schema_path.display()))?;
        let compiled = JSONSchema::compile(&schema).map_err(|err| {
            anyhow!("schema {} does not compile: {}", schema_path.display(), err)
        })?;
        Ok(Self { compiled })
    }

    fn check(&self, config_value: &Value) -> Result<()> {
        let violations = match self.compiled.validate(config_value) {
            Ok(()) => return Ok(()),
            Err(errors) => errors.map(|error| describe_violation(&error)).collect::<Vec<_>>(),
        };
        bail!("config validation failed: {}", violations.join("; "))
    }
}

fn describe_violation(error: &ValidationError<'_>) -> String {
    let location = error.instance_path.to_string();
    if location.is_empty() {
        format!("(root): {}", error)
    } else {
        format!("{}: {}", location, error)
    }
}
