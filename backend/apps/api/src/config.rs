//! Environment configuration

use anyhow::Context;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub frontend_origins: Vec<String>,
    pub bind_addr: SocketAddr,
    pub donation_campaign_tag: Option<String>,
    pub audit_queue_capacity: Option<usize>,
    pub cookie_secure: Option<bool>,
    pub provider_timeout: Option<Duration>,
}

impl AppConfig {
    /// Read from the process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read through `lookup`, which returns `None` for unset keys
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("{key} must be set in environment"))
        };

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(str::to_string)
            .collect();

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address")?;

        let audit_queue_capacity = lookup("AUDIT_QUEUE_CAPACITY")
            .map(|v| v.parse::<usize>())
            .transpose()
            .context("AUDIT_QUEUE_CAPACITY must be a positive integer")?;
        if audit_queue_capacity == Some(0) {
            anyhow::bail!("AUDIT_QUEUE_CAPACITY must be a positive integer");
        }

        let cookie_secure = lookup("COOKIE_SECURE")
            .map(|v| parse_bool(&v))
            .transpose()
            .context("COOKIE_SECURE must be true or false")?;

        let provider_timeout = lookup("PROVIDER_TIMEOUT_SECS")
            .map(|v| v.parse::<u64>().map(Duration::from_secs))
            .transpose()
            .context("PROVIDER_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            supabase_url: required("SUPABASE_URL")?,
            supabase_anon_key: required("SUPABASE_ANON_KEY")?,
            frontend_origins,
            bind_addr,
            donation_campaign_tag: lookup("DONATION_CAMPAIGN_TAG").filter(|v| !v.is_empty()),
            audit_queue_capacity,
            cookie_secure,
            provider_timeout,
        })
    }
}

fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => anyhow::bail!("not a boolean: {other}"),
    }
}
