use anyhow::{bail, Context};
use serde::Deserialize;

/// Substrings that mark a `DATABASE_URL` copied from a template and never filled in.
const DATABASE_URL_PLACEHOLDERS: &[&str] = &[
    "username:password",
    "user:password@host",
    "your-database",
    "your_database",
    "YOUR_",
    "<",
    "changeme",
];

/// 7 days.
const DEFAULT_TTL_MINUTES: i64 = 60 * 24 * 7;
/// One year; anything longer is a misconfiguration.
pub const MAX_TTL_MINUTES: i64 = 60 * 24 * 365;

/// Parses `JWT_TTL_MINUTES`, defaulting when unset. Must lie in `1..=MAX_TTL_MINUTES`.
fn ttl_minutes(raw: Option<&str>) -> anyhow::Result<i64> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_TTL_MINUTES);
    };
    let minutes = raw
        .trim()
        .parse::<i64>()
        .with_context(|| format!("JWT_TTL_MINUTES is not an integer: {raw:?}"))?;
    if !(1..=MAX_TTL_MINUTES).contains(&minutes) {
        bail!("JWT_TTL_MINUTES must be between 1 and {MAX_TTL_MINUTES}, got {minutes}");
    }
    Ok(minutes)
}

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let jwt = JwtConfig {
            secret: std::env::var("JWT_SECRET")?,
            issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "paydesk".into()),
            audience: std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| "paydesk-users".into()),
            ttl_minutes: ttl_minutes(std::env::var("JWT_TTL_MINUTES").ok().as_deref())?,
        };
        Ok(Self { database_url, jwt })
    }

    /// False when the database URL is empty or still carries a template placeholder.
    pub fn database_configured(&self) -> bool {
        let url = self.database_url.trim();
        !url.is_empty()
            && !DATABASE_URL_PLACEHOLDERS
                .iter()
                .any(|marker| url.contains(marker))
    }
}
