use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::connection::AnyConnection;
use crate::models::stock::Stock;
use crate::repository::RepositoryResult;
use crate::schema::{historical_prices, live_prices};

// Batch size for bulk inserts, kept under the engines' bind-parameter limits.
const BATCH_SIZE: usize = 500;

/// One end-of-day OHLCV bar for a stock.
#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = historical_prices)]
#[diesel(belongs_to(Stock, foreign_key = stock_id))]
pub struct HistoricalPrice {
  pub id: i32,
  pub stock_id: i32,
  pub date: NaiveDateTime,
  pub open: f64,
  pub high: f64,
  pub low: f64,
  pub close: f64,
  pub volume: i64,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = historical_prices)]
pub struct NewHistoricalPrice {
  pub stock_id: i32,
  pub date: NaiveDateTime,
  pub open: f64,
  pub high: f64,
  pub low: f64,
  pub close: f64,
  pub volume: i64,
}

impl NewHistoricalPrice {
  /// Insert a batch of bars as one transaction; all-or-nothing.
  pub fn bulk_insert(conn: &mut AnyConnection, records: Vec<Self>) -> RepositoryResult<usize> {
    let total = conn.transaction::<usize, diesel::result::Error, _>(|conn| {
      let mut inserted = 0;
      for chunk in records.chunks(BATCH_SIZE) {
        for record in chunk {
          inserted += diesel::insert_into(historical_prices::table).values(record).execute(conn)?;
        }
      }
      Ok(inserted)
    })?;

    Ok(total)
  }
}

impl HistoricalPrice {
  #[allow(clippy::too_many_arguments)]
  pub fn create(
    conn: &mut AnyConnection,
    stock_id: i32,
    date: NaiveDateTime,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: i64,
  ) -> RepositoryResult<Self> {
    let bar = NewHistoricalPrice { stock_id, date, open, high, low, close, volume };

    diesel::insert_into(historical_prices::table).values(&bar).execute(conn)?;

    // Read back by rowid; this layer assumes a single writer per connection.
    let row = historical_prices::table.order(historical_prices::id.desc()).first(conn)?;
    Ok(row)
  }

  pub fn find_by_id(conn: &mut AnyConnection, id: i32) -> RepositoryResult<Option<Self>> {
    let bar = historical_prices::table.find(id).first(conn).optional()?;
    Ok(bar)
  }

  /// Price history for a stock within a date range, oldest first.
  pub fn history(
    conn: &mut AnyConnection,
    stock_id: i32,
    start: NaiveDateTime,
    end: NaiveDateTime,
    offset: i64,
    limit: i64,
  ) -> RepositoryResult<Vec<Self>> {
    let results = historical_prices::table
      .filter(historical_prices::stock_id.eq(stock_id))
      .filter(historical_prices::date.ge(start))
      .filter(historical_prices::date.le(end))
      .order(historical_prices::date.asc())
      .offset(offset)
      .limit(limit)
      .load(conn)?;
    Ok(results)
  }
}

/// A single timestamped price/volume tick, distinct from end-of-day bars.
#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = live_prices)]
#[diesel(belongs_to(Stock, foreign_key = stock_id))]
pub struct LivePrice {
  pub id: i32,
  pub stock_id: i32,
  pub timestamp: NaiveDateTime,
  pub price: f64,
  pub volume: i64,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = live_prices)]
pub struct NewLivePrice {
  pub stock_id: i32,
  pub timestamp: NaiveDateTime,
  pub price: f64,
  pub volume: i64,
}

impl NewLivePrice {
  /// Insert a batch of ticks as one transaction; all-or-nothing.
  pub fn bulk_insert(conn: &mut AnyConnection, records: Vec<Self>) -> RepositoryResult<usize> {
    let total = conn.transaction::<usize, diesel::result::Error, _>(|conn| {
      let mut inserted = 0;
      for chunk in records.chunks(BATCH_SIZE) {
        for record in chunk {
          inserted += diesel::insert_into(live_prices::table).values(record).execute(conn)?;
        }
      }
      Ok(inserted)
    })?;

    Ok(total)
  }
}

impl LivePrice {
  /// Record a tick; `timestamp` defaults to the current UTC time.
  pub fn create(
    conn: &mut AnyConnection,
    stock_id: i32,
    price: f64,
    volume: i64,
    timestamp: Option<NaiveDateTime>,
  ) -> RepositoryResult<Self> {
    let tick = NewLivePrice {
      stock_id,
      timestamp: timestamp.unwrap_or_else(|| Utc::now().naive_utc()),
      price,
      volume,
    };

    diesel::insert_into(live_prices::table).values(&tick).execute(conn)?;

    let row = live_prices::table.order(live_prices::id.desc()).first(conn)?;
    Ok(row)
  }

  pub fn find_by_id(conn: &mut AnyConnection, id: i32) -> RepositoryResult<Option<Self>> {
    let tick = live_prices::table.find(id).first(conn).optional()?;
    Ok(tick)
  }

  /// Most recent tick for a stock.
  pub fn latest(conn: &mut AnyConnection, stock_id: i32) -> RepositoryResult<Option<Self>> {
    let tick = live_prices::table
      .filter(live_prices::stock_id.eq(stock_id))
      .order(live_prices::timestamp.desc())
      .first(conn)
      .optional()?;
    Ok(tick)
  }
}
