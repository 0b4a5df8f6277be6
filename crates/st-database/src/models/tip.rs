use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use st_core::{ActionType, TipType};

use crate::connection::AnyConnection;
use crate::repository::RepositoryResult;
use crate::schema::trading_tips;

/// A generated buy/sell/hold recommendation for a stock symbol. Associated
/// with stocks by symbol string only, no foreign key.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = trading_tips)]
pub struct TradingTip {
  pub id: i32,
  pub timestamp: NaiveDateTime,
  pub stock_symbol: String,
  pub tip_type: String,
  pub action: String,
  pub reason: String,
  pub confidence_score: Option<f64>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = trading_tips)]
pub struct NewTradingTip {
  pub timestamp: NaiveDateTime,
  pub stock_symbol: String,
  pub tip_type: String,
  pub action: String,
  pub reason: String,
  pub confidence_score: Option<f64>,
}

impl NewTradingTip {
  /// Insert a batch of tips as one transaction; all-or-nothing.
  pub fn bulk_insert(conn: &mut AnyConnection, records: Vec<Self>) -> RepositoryResult<usize> {
    const BATCH_SIZE: usize = 500;

    let total = conn.transaction::<usize, diesel::result::Error, _>(|conn| {
      let mut inserted = 0;
      for chunk in records.chunks(BATCH_SIZE) {
        for record in chunk {
          inserted += diesel::insert_into(trading_tips::table).values(record).execute(conn)?;
        }
      }
      Ok(inserted)
    })?;

    Ok(total)
  }
}

impl TradingTip {
  /// Record a tip. `confidence_score` is 0.0..1.0 by convention; the range
  /// is not enforced. `timestamp` defaults to the current UTC time, and the
  /// symbol is normalized to uppercase.
  pub fn create(
    conn: &mut AnyConnection,
    stock_symbol: &str,
    tip_type: TipType,
    action: ActionType,
    reason: &str,
    confidence_score: Option<f64>,
    timestamp: Option<NaiveDateTime>,
  ) -> RepositoryResult<Self> {
    let tip = NewTradingTip {
      timestamp: timestamp.unwrap_or_else(|| Utc::now().naive_utc()),
      stock_symbol: stock_symbol.to_uppercase(),
      tip_type: tip_type.to_string(),
      action: action.to_string(),
      reason: reason.to_string(),
      confidence_score,
    };

    diesel::insert_into(trading_tips::table).values(&tip).execute(conn)?;

    let row = trading_tips::table.order(trading_tips::id.desc()).first(conn)?;
    Ok(row)
  }

  pub fn find_by_id(conn: &mut AnyConnection, id: i32) -> RepositoryResult<Option<Self>> {
    let tip = trading_tips::table.find(id).first(conn).optional()?;
    Ok(tip)
  }

  /// Tips newest first. `page` is 1-based; offset = (page - 1) * limit.
  pub fn list(
    conn: &mut AnyConnection,
    stock_symbol: Option<&str>,
    limit: i64,
    page: i64,
  ) -> RepositoryResult<Vec<Self>> {
    let offset = (page.max(1) - 1) * limit;

    let mut query = trading_tips::table.into_boxed();

    if let Some(symbol) = stock_symbol {
      query = query.filter(trading_tips::stock_symbol.eq(symbol.to_uppercase()));
    }

    let results = query
      .order(trading_tips::timestamp.desc())
      .offset(offset)
      .limit(limit)
      .load(conn)?;
    Ok(results)
  }
}
