use anyhow::{Context, Result};
use tracing::info;

use st_core::Config;
use st_database::connection::{establish_connection, init_db};

pub fn execute(config: &Config) -> Result<()> {
  info!("initializing database at {}", config.database_url);

  let mut conn = establish_connection(&config.database_url)
    .with_context(|| format!("failed to connect to {}", config.database_url))?;
  init_db(&mut conn).context("failed to create database tables")?;

  info!("database tables created (if they didn't exist)");
  Ok(())
}
