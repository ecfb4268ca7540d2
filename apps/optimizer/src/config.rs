use std::time::Duration;

use anyhow::{bail, Context, Result};

use crate::render::KeywordSelection;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/optimize";

/// Runtime configuration loaded from environment variables.
/// Every variable is optional; unparsable values fail at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub request_timeout: Duration,
    /// Perceived processing time before a simulated result is shown.
    pub fallback_delay: Duration,
    pub step_interval: Duration,
    pub keyword_selection: KeywordSelection,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(30),
            fallback_delay: Duration::from_millis(3000),
            step_interval: Duration::from_millis(1000),
            keyword_selection: KeywordSelection::default(),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();

        let step_interval = parse_millis("STEP_INTERVAL_MS")?.unwrap_or(defaults.step_interval);
        if step_interval.is_zero() {
            bail!("STEP_INTERVAL_MS must be greater than zero");
        }

        Ok(Config {
            endpoint: std::env::var("OPTIMIZER_ENDPOINT").unwrap_or(defaults.endpoint),
            request_timeout: optional_env("OPTIMIZER_TIMEOUT_SECS")?
                .map(|v| {
                    v.parse::<u64>()
                        .context("OPTIMIZER_TIMEOUT_SECS must be a whole number of seconds")
                })
                .transpose()?
                .map(Duration::from_secs)
                .unwrap_or(defaults.request_timeout),
            fallback_delay: parse_millis("FALLBACK_DELAY_MS")?.unwrap_or(defaults.fallback_delay),
            step_interval,
            keyword_selection: optional_env("KEYWORD_SELECTION")?
                .map(|v| parse_keyword_selection(&v))
                .transpose()?
                .unwrap_or(defaults.keyword_selection),
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn optional_env(key: &str) -> Result<Option<String>> {
    match std::env::var(key) {
        Ok(v) => Ok(Some(v)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Environment variable '{key}' is not valid UTF-8")),
    }
}

fn parse_millis(key: &str) -> Result<Option<Duration>> {
    let Some(raw) = optional_env(key)? else {
        return Ok(None);
    };
    let millis = raw
        .parse::<u64>()
        .with_context(|| format!("{key} must be a whole number of milliseconds"))?;
    Ok(Some(Duration::from_millis(millis)))
}

fn parse_keyword_selection(raw: &str) -> Result<KeywordSelection> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "leading" => Ok(KeywordSelection::Leading),
        "random" => Ok(KeywordSelection::RandomSubset),
        other => bail!("KEYWORD_SELECTION must be 'leading' or 'random', got '{other}'"),
    }
}
