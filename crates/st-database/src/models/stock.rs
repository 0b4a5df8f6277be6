use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use st_core::Exchange;

use crate::connection::AnyConnection;
use crate::repository::RepositoryResult;
use crate::schema::stocks;

/// A listed security. `symbol` is unique and stored uppercase.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, Serialize, Deserialize)]
#[diesel(table_name = stocks)]
pub struct Stock {
  pub id: i32,
  pub symbol: String,
  pub name: String,
  pub exchange: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = stocks)]
pub struct NewStock {
  pub symbol: String,
  pub name: String,
  pub exchange: String,
}

impl Stock {
  /// Insert a stock, normalizing the symbol to uppercase.
  ///
  /// A duplicate symbol (case-insensitive) fails with a uniqueness violation
  /// surfaced from the storage engine.
  pub fn create(
    conn: &mut AnyConnection,
    symbol: &str,
    name: &str,
    exchange: Exchange,
  ) -> RepositoryResult<Self> {
    let symbol = symbol.to_uppercase();
    let new_stock = NewStock {
      symbol: symbol.clone(),
      name: name.to_string(),
      exchange: exchange.to_string(),
    };

    diesel::insert_into(stocks::table).values(&new_stock).execute(conn)?;

    let stock = stocks::table.filter(stocks::symbol.eq(&symbol)).first(conn)?;
    Ok(stock)
  }

  pub fn find_by_id(conn: &mut AnyConnection, id: i32) -> RepositoryResult<Option<Self>> {
    let stock = stocks::table.find(id).first(conn).optional()?;
    Ok(stock)
  }

  /// Lookup by symbol; matching is case-insensitive through normalization.
  pub fn find_by_symbol(conn: &mut AnyConnection, symbol: &str) -> RepositoryResult<Option<Self>> {
    let stock = stocks::table
      .filter(stocks::symbol.eq(symbol.to_uppercase()))
      .first(conn)
      .optional()?;
    Ok(stock)
  }

  pub fn list(conn: &mut AnyConnection, offset: i64, limit: i64) -> RepositoryResult<Vec<Self>> {
    let results = stocks::table
      .order(stocks::id.asc())
      .offset(offset)
      .limit(limit)
      .load(conn)?;
    Ok(results)
  }
}
