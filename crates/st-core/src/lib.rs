pub mod config;
pub mod types;

pub use config::Config;
pub use types::{ActionType, Exchange, TipType};

/// Default development database: a SQLite file in the working directory.
pub const DEFAULT_DATABASE_URL: &str = "stock_trader_dev.db";
