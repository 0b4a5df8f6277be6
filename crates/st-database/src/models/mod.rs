pub mod price;
pub mod sentiment;
pub mod stock;
pub mod tip;

// Re-export commonly used types
pub use price::{HistoricalPrice, LivePrice, NewHistoricalPrice, NewLivePrice};
pub use sentiment::{NewSentimentData, SentimentData};
pub use stock::{NewStock, Stock};
pub use tip::{NewTradingTip, TradingTip};
