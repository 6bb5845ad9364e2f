use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;

use log::warn;

/// Accepted token lifetimes, one minute up to thirty days.
pub const TOKEN_TTL_RANGE: RangeInclusive<i64> = 1..=60 * 24 * 30;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
    pub admin_username: String,
    pub admin_password: String,
    pub bcrypt_cost: u32,
    /// Transport fee charged per student per semester.
    pub semester_fee: f64,
    pub latency: Duration,
    pub cors_origin: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            jwt_secret: "secret".to_string(),
            token_ttl_minutes: 60,
            admin_username: "admin".to_string(),
            admin_password: "password".to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            semester_fee: 10_000.0,
            latency: Duration::ZERO,
            cors_origin: None,
        }
    }
}

impl AppConfig {
    /// Reads the process environment (after `.env` has been loaded).
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: parse_var("PORT", defaults.port),
            jwt_secret: std::env::var("JWT_SECRET").unwrap_or(defaults.jwt_secret),
            token_ttl_minutes: parse_var_in(
                "TOKEN_TTL_MINUTES",
                defaults.token_ttl_minutes,
                TOKEN_TTL_RANGE,
            ),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or(defaults.admin_username),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            bcrypt_cost: parse_var("BCRYPT_COST", defaults.bcrypt_cost),
            semester_fee: parse_var("SEMESTER_FEE", defaults.semester_fee),
            latency: Duration::from_millis(parse_var("SIMULATED_LATENCY_MS", 0u64)),
            cors_origin: std::env::var("CORS_ORIGIN").ok().filter(|v| !v.trim().is_empty()),
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse_var<T: FromStr + Copy + std::fmt::Debug>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring unparseable {}={:?}, using {:?}", key, raw, default);
            default
        }),
        Err(_) => default,
    }
}

fn parse_var_in<T>(key: &str, default: T, range: RangeInclusive<T>) -> T
where
    T: FromStr + Copy + PartialOrd + std::fmt::Debug,
{
    let value = parse_var(key, default);
    if range.contains(&value) {
        value
    } else {
        warn!(
            "Ignoring out-of-range {}={:?} (expected {:?}), using {:?}",
            key, value, range, default
        );
        default
    }
}
