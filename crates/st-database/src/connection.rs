use diesel::prelude::*;

use crate::repository::RepositoryResult;

#[cfg(not(any(feature = "sqlite", feature = "postgres")))]
compile_error!("at least one of the `sqlite` or `postgres` features must be enabled");

/// Connection over every storage backend this crate supports.
///
/// The connection string decides the backend at runtime: `postgres://` URLs
/// open PostgreSQL, anything else is treated as a SQLite path.
#[derive(diesel::MultiConnection)]
pub enum AnyConnection {
  #[cfg(feature = "postgres")]
  Postgresql(diesel::pg::PgConnection),
  #[cfg(feature = "sqlite")]
  Sqlite(diesel::sqlite::SqliteConnection),
}

/// Establish a database connection
pub fn establish_connection(database_url: &str) -> diesel::ConnectionResult<AnyConnection> {
  if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
    establish_postgres(database_url)
  } else {
    establish_sqlite(database_url)
  }
}

#[cfg(feature = "postgres")]
fn establish_postgres(database_url: &str) -> diesel::ConnectionResult<AnyConnection> {
  diesel::pg::PgConnection::establish(database_url).map(AnyConnection::Postgresql)
}

#[cfg(not(feature = "postgres"))]
fn establish_postgres(database_url: &str) -> diesel::ConnectionResult<AnyConnection> {
  Err(diesel::ConnectionError::InvalidConnectionUrl(format!(
    "{database_url}: built without the `postgres` feature"
  )))
}

#[cfg(feature = "sqlite")]
fn establish_sqlite(database_url: &str) -> diesel::ConnectionResult<AnyConnection> {
  diesel::sqlite::SqliteConnection::establish(database_url).map(AnyConnection::Sqlite)
}

#[cfg(not(feature = "sqlite"))]
fn establish_sqlite(database_url: &str) -> diesel::ConnectionResult<AnyConnection> {
  Err(diesel::ConnectionError::InvalidConnectionUrl(format!(
    "{database_url}: built without the `sqlite` feature"
  )))
}

/// Create all tables and secondary indexes if they do not exist. Idempotent.
pub fn init_db(conn: &mut AnyConnection) -> RepositoryResult<()> {
  let statements: &[&str] = match conn {
    #[cfg(feature = "postgres")]
    AnyConnection::Postgresql(_) => POSTGRES_DDL,
    #[cfg(feature = "sqlite")]
    AnyConnection::Sqlite(_) => SQLITE_DDL,
  };

  for statement in statements {
    if let Err(err) = diesel::sql_query(*statement).execute(conn) {
      log::error!("schema initialization failed: {err}");
      return Err(err.into());
    }
  }

  Ok(())
}

#[cfg(feature = "sqlite")]
const SQLITE_DDL: &[&str] = &[
  "CREATE TABLE IF NOT EXISTS stocks (
     id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
     symbol VARCHAR(50) NOT NULL UNIQUE,
     name VARCHAR(255) NOT NULL,
     exchange VARCHAR(10) NOT NULL
   )",
  "CREATE TABLE IF NOT EXISTS historical_prices (
     id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
     stock_id INTEGER NOT NULL REFERENCES stocks(id),
     date TIMESTAMP NOT NULL,
     open DOUBLE PRECISION NOT NULL,
     high DOUBLE PRECISION NOT NULL,
     low DOUBLE PRECISION NOT NULL,
     close DOUBLE PRECISION NOT NULL,
     volume BIGINT NOT NULL
   )",
  "CREATE TABLE IF NOT EXISTS live_prices (
     id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
     stock_id INTEGER NOT NULL REFERENCES stocks(id),
     timestamp TIMESTAMP NOT NULL,
     price DOUBLE PRECISION NOT NULL,
     volume BIGINT NOT NULL
   )",
  "CREATE TABLE IF NOT EXISTS sentiment_data (
     id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
     source VARCHAR(100) NOT NULL,
     timestamp TIMESTAMP NOT NULL,
     text TEXT,
     sentiment_score DOUBLE PRECISION NOT NULL,
     stock_symbol VARCHAR(50)
   )",
  "CREATE TABLE IF NOT EXISTS trading_tips (
     id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
     timestamp TIMESTAMP NOT NULL,
     stock_symbol VARCHAR(50) NOT NULL,
     tip_type VARCHAR(20) NOT NULL,
     action VARCHAR(10) NOT NULL,
     reason TEXT NOT NULL,
     confidence_score DOUBLE PRECISION
   )",
  "CREATE INDEX IF NOT EXISTS historical_prices_stock_id_date_idx
     ON historical_prices (stock_id, date)",
  "CREATE INDEX IF NOT EXISTS live_prices_stock_id_timestamp_idx
     ON live_prices (stock_id, timestamp)",
  "CREATE INDEX IF NOT EXISTS sentiment_data_stock_symbol_idx
     ON sentiment_data (stock_symbol)",
  "CREATE INDEX IF NOT EXISTS trading_tips_stock_symbol_idx
     ON trading_tips (stock_symbol)",
];

#[cfg(feature = "postgres")]
const POSTGRES_DDL: &[&str] = &[
  "CREATE TABLE IF NOT EXISTS stocks (
     id SERIAL PRIMARY KEY,
     symbol VARCHAR(50) NOT NULL UNIQUE,
     name VARCHAR(255) NOT NULL,
     exchange VARCHAR(10) NOT NULL
   )",
  "CREATE TABLE IF NOT EXISTS historical_prices (
     id SERIAL PRIMARY KEY,
     stock_id INTEGER NOT NULL REFERENCES stocks(id),
     date TIMESTAMP NOT NULL,
     open DOUBLE PRECISION NOT NULL,
     high DOUBLE PRECISION NOT NULL,
     low DOUBLE PRECISION NOT NULL,
     close DOUBLE PRECISION NOT NULL,
     volume BIGINT NOT NULL
   )",
  "CREATE TABLE IF NOT EXISTS live_prices (
     id SERIAL PRIMARY KEY,
     stock_id INTEGER NOT NULL REFERENCES stocks(id),
     timestamp TIMESTAMP NOT NULL,
     price DOUBLE PRECISION NOT NULL,
     volume BIGINT NOT NULL
   )",
  "CREATE TABLE IF NOT EXISTS sentiment_data (
     id SERIAL PRIMARY KEY,
     source VARCHAR(100) NOT NULL,
     timestamp TIMESTAMP NOT NULL,
     text TEXT,
     sentiment_score DOUBLE PRECISION NOT NULL,
     stock_symbol VARCHAR(50)
   )",
  "CREATE TABLE IF NOT EXISTS trading_tips (
     id SERIAL PRIMARY KEY,
     timestamp TIMESTAMP NOT NULL,
     stock_symbol VARCHAR(50) NOT NULL,
     tip_type VARCHAR(20) NOT NULL,
     action VARCHAR(10) NOT NULL,
     reason TEXT NOT NULL,
     confidence_score DOUBLE PRECISION
   )",
  "CREATE INDEX IF NOT EXISTS historical_prices_stock_id_date_idx
     ON historical_prices (stock_id, date)",
  "CREATE INDEX IF NOT EXISTS live_prices_stock_id_timestamp_idx
     ON live_prices (stock_id, timestamp)",
  "CREATE INDEX IF NOT EXISTS sentiment_data_stock_symbol_idx
     ON sentiment_data (stock_symbol)",
  "CREATE INDEX IF NOT EXISTS trading_tips_stock_symbol_idx
     ON trading_tips (stock_symbol)",
];
