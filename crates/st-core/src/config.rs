//! Configuration management for the stock-trader workspace

use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Runtime configuration, loaded once and passed explicitly to callers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Database connection string. `postgres://` URLs select PostgreSQL,
  /// anything else is treated as a SQLite path.
  pub database_url: String,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Self {
    dotenv().ok();

    let database_url =
      env::var("DATABASE_URL").unwrap_or_else(|_| crate::DEFAULT_DATABASE_URL.to_string());

    Config { database_url }
  }
}

impl Default for Config {
  fn default() -> Self {
    Config { database_url: crate::DEFAULT_DATABASE_URL.to_string() }
  }
}
