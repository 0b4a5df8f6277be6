/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Args, Subcommand};

use st_core::Config;
use st_database::connection::establish_connection;
use st_database::models::{HistoricalPrice, LivePrice, SentimentData, Stock, TradingTip};

#[derive(Args, Debug)]
pub struct QueryCommand {
  #[command(subcommand)]
  command: QuerySubcommands,
}

#[derive(Subcommand, Debug)]
enum QuerySubcommands {
  /// Query a stock by symbol
  Stock {
    /// Symbol to query
    symbol: String,
  },

  /// List stocks
  ListStocks {
    /// Limit results
    #[arg(short, long, default_value = "100")]
    limit: i64,

    /// Skip this many rows
    #[arg(short, long, default_value = "0")]
    offset: i64,
  },

  /// Price history for a symbol, oldest first
  History {
    /// Symbol to query
    symbol: String,

    /// Start date (YYYY-MM-DD)
    start: String,

    /// End date (YYYY-MM-DD, inclusive at midnight)
    end: String,

    /// Limit results
    #[arg(short, long, default_value = "1000")]
    limit: i64,
  },

  /// Latest live tick for a symbol
  Latest {
    /// Symbol to query
    symbol: String,
  },

  /// Sentiment records, newest first
  Sentiment {
    /// Filter by stock symbol
    #[arg(short, long)]
    symbol: Option<String>,

    /// Limit results
    #[arg(short, long, default_value = "100")]
    limit: i64,
  },

  /// Trading tips, newest first
  Tips {
    /// Filter by stock symbol
    #[arg(short, long)]
    symbol: Option<String>,

    /// Results per page
    #[arg(short, long, default_value = "20")]
    limit: i64,

    /// Page number (1-based)
    #[arg(short, long, default_value = "1")]
    page: i64,
  },
}

pub fn execute(cmd: QueryCommand, config: &Config) -> Result<()> {
  let mut conn = establish_connection(&config.database_url)
    .with_context(|| format!("failed to connect to {}", config.database_url))?;

  match cmd.command {
    QuerySubcommands::Stock { symbol } => match Stock::find_by_symbol(&mut conn, &symbol)? {
      Some(stock) => print_json(&stock),
      None => {
        println!("no stock found for {}", symbol.to_uppercase());
        Ok(())
      }
    },
    QuerySubcommands::ListStocks { limit, offset } => {
      print_json(&Stock::list(&mut conn, offset, limit)?)
    }
    QuerySubcommands::History { symbol, start, end, limit } => {
      let Some(stock) = Stock::find_by_symbol(&mut conn, &symbol)? else {
        println!("no stock found for {}", symbol.to_uppercase());
        return Ok(());
      };
      let start = parse_day(&start)?;
      let end = parse_day(&end)?;
      print_json(&HistoricalPrice::history(&mut conn, stock.id, start, end, 0, limit)?)
    }
    QuerySubcommands::Latest { symbol } => {
      let Some(stock) = Stock::find_by_symbol(&mut conn, &symbol)? else {
        println!("no stock found for {}", symbol.to_uppercase());
        return Ok(());
      };
      match LivePrice::latest(&mut conn, stock.id)? {
        Some(tick) => print_json(&tick),
        None => {
          println!("no live prices recorded for {}", stock.symbol);
          Ok(())
        }
      }
    }
    QuerySubcommands::Sentiment { symbol, limit } => {
      print_json(&SentimentData::list(&mut conn, symbol.as_deref(), None, None, limit)?)
    }
    QuerySubcommands::Tips { symbol, limit, page } => {
      print_json(&TradingTip::list(&mut conn, symbol.as_deref(), limit, page)?)
    }
  }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
  println!("{}", serde_json::to_string_pretty(value)?);
  Ok(())
}

fn parse_day(s: &str) -> Result<NaiveDateTime> {
  let date =
    NaiveDate::parse_from_str(s, "%Y-%m-%d").with_context(|| format!("invalid date: {s}"))?;
  Ok(date.and_time(NaiveTime::MIN))
}
