use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

use crate::ranking::DEFAULT_TOP_N;
use crate::scoring::MatchMode;

const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Application configuration loaded from environment variables.
/// Startup fails if a variable is present but malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub scoring_mode: MatchMode,
    pub embedding: EmbeddingConfig,
    pub job_catalog_path: Option<PathBuf>,
    pub default_top_n: usize,
}

/// Remote embedding endpoint settings. `api_url = None` selects the local hashing embedder.
#[derive(Debug, Clone)]
pub struct EmbeddingConfig {
    pub api_url: Option<String>,
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let default_top_n = top_n_env("DEFAULT_TOP_N")?;

        Ok(Config {
            port: parse_env("PORT", 8080u16)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            scoring_mode: parse_env("SCORING_MODE", MatchMode::Lexical)?,
            embedding: EmbeddingConfig {
                api_url: optional_env("EMBEDDING_API_URL"),
                api_key: optional_env("EMBEDDING_API_KEY"),
                model: optional_env("EMBEDDING_MODEL")
                    .unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string()),
                timeout_secs: parse_env("EMBEDDING_TIMEOUT_SECS", 30u64)?,
            },
            job_catalog_path: optional_env("JOB_CATALOG_PATH").map(PathBuf::from),
            default_top_n,
        })
    }
}

/// Returns the variable's value, treating unset and blank the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Reads a top-N setting, falling back to the ranker's default. Zero is rejected.
fn top_n_env(key: &str) -> Result<usize> {
    let top_n = parse_env(key, DEFAULT_TOP_N)?;
    if top_n == 0 {
        bail!("{key} must be at least 1");
    }
    Ok(top_n)
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional_env(key) {
        None => Ok(default),
        Some(raw) => raw
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
    }
}
