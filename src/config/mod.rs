//! Configuration module for the TuberTreats backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::fmt;
use std::net::SocketAddr;

/// How strictly a new order's customer reference is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerCheck {
    /// Accept any customer id, known or not.
    #[default]
    Lenient,
    /// Reject orders for customers that do not exist.
    Strict,
}

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug)]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value for {}: {:?}", self.var, self.value)
    }
}

impl std::error::Error for ConfigError {}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
    /// Load the sample drivers, customers, toppings and orders at startup
    pub seed: bool,
    /// Policy applied to the customer id of new orders
    pub customer_check: CustomerCheck,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            log_level: "info".to_string(),
            log_json: false,
            seed: true,
            customer_check: CustomerCheck::Lenient,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let bind_addr: SocketAddr = match env::var("TUBER_BIND_ADDR") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError {
                var: "TUBER_BIND_ADDR",
                value: raw,
            })?,
            Err(_) => defaults.bind_addr,
        };

        let log_level = env::var("TUBER_LOG_LEVEL").unwrap_or(defaults.log_level);

        let log_json = match env::var("TUBER_LOG_JSON") {
            Ok(raw) => parse_flag("TUBER_LOG_JSON", raw)?,
            Err(_) => defaults.log_json,
        };

        let seed = match env::var("TUBER_SEED") {
            Ok(raw) => parse_flag("TUBER_SEED", raw)?,
            Err(_) => defaults.seed,
        };

        let customer_check = match env::var("TUBER_ORDER_CUSTOMER_CHECK") {
            Ok(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "lenient" => CustomerCheck::Lenient,
                "strict" => CustomerCheck::Strict,
                _ => {
                    return Err(ConfigError {
                        var: "TUBER_ORDER_CUSTOMER_CHECK",
                        value: raw,
                    })
                }
            },
            Err(_) => defaults.customer_check,
        };

        Ok(Self {
            bind_addr,
            log_level,
            log_json,
            seed,
            customer_check,
        })
    }
}

fn parse_flag(var: &'static str, raw: String) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError { var, value: raw }),
    }
}
