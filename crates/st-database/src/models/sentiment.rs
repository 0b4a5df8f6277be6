use chrono::{NaiveDateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::connection::AnyConnection;
use crate::repository::RepositoryResult;
use crate::schema::sentiment_data;

/// A scored text observation (news, social media), optionally tied to a
/// stock symbol. There is no foreign key; the association is by symbol
/// string only.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = sentiment_data)]
pub struct SentimentData {
  pub id: i32,
  pub source: String,
  pub timestamp: NaiveDateTime,
  pub text: Option<String>,
  pub sentiment_score: f64,
  pub stock_symbol: Option<String>,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = sentiment_data)]
pub struct NewSentimentData {
  pub source: String,
  pub timestamp: NaiveDateTime,
  pub text: Option<String>,
  pub sentiment_score: f64,
  pub stock_symbol: Option<String>,
}

impl NewSentimentData {
  /// Insert a batch of records as one transaction; all-or-nothing.
  pub fn bulk_insert(conn: &mut AnyConnection, records: Vec<Self>) -> RepositoryResult<usize> {
    const BATCH_SIZE: usize = 500;

    let total = conn.transaction::<usize, diesel::result::Error, _>(|conn| {
      let mut inserted = 0;
      for chunk in records.chunks(BATCH_SIZE) {
        for record in chunk {
          inserted += diesel::insert_into(sentiment_data::table).values(record).execute(conn)?;
        }
      }
      Ok(inserted)
    })?;

    Ok(total)
  }
}

impl SentimentData {
  /// Record a sentiment observation. `sentiment_score` is -1.0..1.0 by
  /// convention; the range is not enforced. `timestamp` defaults to the
  /// current UTC time, and `stock_symbol` is normalized to uppercase.
  pub fn create(
    conn: &mut AnyConnection,
    source: &str,
    text: Option<&str>,
    sentiment_score: f64,
    stock_symbol: Option<&str>,
    timestamp: Option<NaiveDateTime>,
  ) -> RepositoryResult<Self> {
    let record = NewSentimentData {
      source: source.to_string(),
      timestamp: timestamp.unwrap_or_else(|| Utc::now().naive_utc()),
      text: text.map(str::to_string),
      sentiment_score,
      stock_symbol: stock_symbol.map(str::to_uppercase),
    };

    diesel::insert_into(sentiment_data::table).values(&record).execute(conn)?;

    let row = sentiment_data::table.order(sentiment_data::id.desc()).first(conn)?;
    Ok(row)
  }

  pub fn find_by_id(conn: &mut AnyConnection, id: i32) -> RepositoryResult<Option<Self>> {
    let record = sentiment_data::table.find(id).first(conn).optional()?;
    Ok(record)
  }

  /// Sentiment records, newest first, with optional symbol and time filters
  /// applied conjunctively.
  pub fn list(
    conn: &mut AnyConnection,
    stock_symbol: Option<&str>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    limit: i64,
  ) -> RepositoryResult<Vec<Self>> {
    let mut query = sentiment_data::table.into_boxed();

    if let Some(symbol) = stock_symbol {
      query = query.filter(sentiment_data::stock_symbol.eq(symbol.to_uppercase()));
    }
    if let Some(start) = start {
      query = query.filter(sentiment_data::timestamp.ge(start));
    }
    if let Some(end) = end {
      query = query.filter(sentiment_data::timestamp.le(end));
    }

    let results = query.order(sentiment_data::timestamp.desc()).limit(limit).load(conn)?;
    Ok(results)
  }
}
