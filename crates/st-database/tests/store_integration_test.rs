//! Integration tests for the data-access layer, run against in-memory SQLite.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use pretty_assertions::assert_eq;

use st_core::{ActionType, Exchange, TipType};
use st_database::connection::{establish_connection, init_db, AnyConnection};
use st_database::models::{
  HistoricalPrice, LivePrice, NewHistoricalPrice, NewLivePrice, NewSentimentData, NewTradingTip,
  SentimentData, Stock, TradingTip,
};
use st_database::repository::RepositoryError;

fn setup() -> AnyConnection {
  let mut conn = establish_connection(":memory:").expect("in-memory SQLite connection");
  init_db(&mut conn).expect("schema initialization");
  conn
}

fn ts(date: &str) -> NaiveDateTime {
  NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date").and_time(NaiveTime::MIN)
}

fn day_bar(stock_id: i32, date: NaiveDateTime, close: f64) -> NewHistoricalPrice {
  NewHistoricalPrice {
    stock_id,
    date,
    open: close - 1.0,
    high: close + 2.0,
    low: close - 2.0,
    close,
    volume: 100_000,
  }
}

#[test]
fn symbol_is_normalized_and_lookup_is_case_insensitive() {
  let mut conn = setup();

  let stock = Stock::create(&mut conn, "infy", "Infosys Ltd", Exchange::NSE).unwrap();
  assert_eq!(stock.symbol, "INFY");
  assert_eq!(stock.exchange, "NSE");

  let fetched = Stock::find_by_symbol(&mut conn, "infy").unwrap().expect("stock present");
  assert_eq!(fetched.id, stock.id);
  assert_eq!(fetched.symbol, "INFY");

  let by_id = Stock::find_by_id(&mut conn, stock.id).unwrap().expect("stock present");
  assert_eq!(by_id.name, "Infosys Ltd");
}

#[test]
fn duplicate_symbol_fails_with_constraint_violation() {
  let mut conn = setup();

  Stock::create(&mut conn, "TCS", "Tata Consultancy Services", Exchange::NSE).unwrap();
  let err = Stock::create(&mut conn, "tcs", "Tata Consultancy Services", Exchange::BSE)
    .expect_err("duplicate symbol must fail");

  assert!(matches!(err, RepositoryError::ConstraintViolation(_)), "got {err:?}");
}

#[test]
fn missing_rows_are_absent_not_errors() {
  let mut conn = setup();

  assert!(Stock::find_by_id(&mut conn, 9999).unwrap().is_none());
  assert!(Stock::find_by_symbol(&mut conn, "none").unwrap().is_none());
  assert!(LivePrice::latest(&mut conn, 9999).unwrap().is_none());
  assert!(HistoricalPrice::find_by_id(&mut conn, 9999).unwrap().is_none());
}

#[test]
fn history_returns_range_in_ascending_date_order() {
  let mut conn = setup();
  let stock = Stock::create(&mut conn, "INFY", "Infosys Ltd", Exchange::NSE).unwrap();

  let bars: Vec<NewHistoricalPrice> = (1..=10)
    .map(|day| day_bar(stock.id, ts(&format!("2024-01-{day:02}")), 1500.0 + day as f64))
    .collect();
  let inserted = NewHistoricalPrice::bulk_insert(&mut conn, bars).unwrap();
  assert_eq!(inserted, 10);

  let history =
    HistoricalPrice::history(&mut conn, stock.id, ts("2024-01-03"), ts("2024-01-05"), 0, 1000)
      .unwrap();

  assert_eq!(history.len(), 3);
  let dates: Vec<NaiveDateTime> = history.iter().map(|bar| bar.date).collect();
  assert_eq!(dates, vec![ts("2024-01-03"), ts("2024-01-04"), ts("2024-01-05")]);
}

#[test]
fn history_respects_offset_and_limit() {
  let mut conn = setup();
  let stock = Stock::create(&mut conn, "INFY", "Infosys Ltd", Exchange::NSE).unwrap();

  let bars: Vec<NewHistoricalPrice> = (1..=10)
    .map(|day| day_bar(stock.id, ts(&format!("2024-01-{day:02}")), 1500.0))
    .collect();
  NewHistoricalPrice::bulk_insert(&mut conn, bars).unwrap();

  let page =
    HistoricalPrice::history(&mut conn, stock.id, ts("2024-01-01"), ts("2024-01-10"), 4, 3)
      .unwrap();

  assert_eq!(page.len(), 3);
  assert_eq!(page[0].date, ts("2024-01-05"));
  assert_eq!(page[2].date, ts("2024-01-07"));
}

#[test]
fn latest_live_price_wins_by_timestamp() {
  let mut conn = setup();
  let stock = Stock::create(&mut conn, "INFY", "Infosys Ltd", Exchange::NSE).unwrap();
  let base = ts("2024-06-03");

  // Inserted out of chronological order on purpose.
  LivePrice::create(&mut conn, stock.id, 1502.0, 300, Some(base + Duration::minutes(2))).unwrap();
  LivePrice::create(&mut conn, stock.id, 1503.0, 500, Some(base + Duration::minutes(3))).unwrap();
  LivePrice::create(&mut conn, stock.id, 1501.0, 200, Some(base + Duration::minutes(1))).unwrap();

  let latest = LivePrice::latest(&mut conn, stock.id).unwrap().expect("ticks present");
  assert_eq!(latest.price, 1503.0);
  assert_eq!(latest.timestamp, base + Duration::minutes(3));
}

#[test]
fn live_price_defaults_timestamp_to_now() {
  let mut conn = setup();
  let stock = Stock::create(&mut conn, "INFY", "Infosys Ltd", Exchange::NSE).unwrap();

  let before = chrono::Utc::now().naive_utc();
  let tick = LivePrice::create(&mut conn, stock.id, 1500.5, 100, None).unwrap();
  let after = chrono::Utc::now().naive_utc();

  assert!(tick.timestamp >= before && tick.timestamp <= after);
}

#[test]
fn bulk_live_insert_reports_row_count() {
  let mut conn = setup();
  let stock = Stock::create(&mut conn, "INFY", "Infosys Ltd", Exchange::NSE).unwrap();
  let base = ts("2024-06-03");

  let ticks: Vec<NewLivePrice> = (0..25)
    .map(|i| NewLivePrice {
      stock_id: stock.id,
      timestamp: base + Duration::seconds(i),
      price: 1500.0 + i as f64,
      volume: 10 * i,
    })
    .collect();

  assert_eq!(NewLivePrice::bulk_insert(&mut conn, ticks).unwrap(), 25);
}

#[test]
fn tip_listing_paginates_newest_first() {
  let mut conn = setup();
  let base = ts("2024-06-03");

  let tips: Vec<NewTradingTip> = (1..=50)
    .map(|i| NewTradingTip {
      timestamp: base + Duration::minutes(i),
      stock_symbol: "INFY".to_string(),
      tip_type: TipType::Intraday.to_string(),
      action: ActionType::Buy.to_string(),
      reason: format!("signal {i}"),
      confidence_score: Some(0.5),
    })
    .collect();
  assert_eq!(NewTradingTip::bulk_insert(&mut conn, tips).unwrap(), 50);

  // Page 2 of 20 covers descending ranks 21-40: minutes 30 down to 11.
  let page = TradingTip::list(&mut conn, None, 20, 2).unwrap();
  assert_eq!(page.len(), 20);
  assert_eq!(page[0].timestamp, base + Duration::minutes(30));
  assert_eq!(page[19].timestamp, base + Duration::minutes(11));
}

#[test]
fn tip_listing_filters_by_symbol() {
  let mut conn = setup();
  let base = ts("2024-06-03");

  TradingTip::create(
    &mut conn,
    "infy",
    TipType::Swing,
    ActionType::Buy,
    "high volume + positive sentiment",
    Some(0.8),
    Some(base + Duration::minutes(1)),
  )
  .unwrap();
  TradingTip::create(
    &mut conn,
    "TCS",
    TipType::Options,
    ActionType::Hold,
    "rangebound",
    None,
    Some(base + Duration::minutes(2)),
  )
  .unwrap();

  let tips = TradingTip::list(&mut conn, Some("infy"), 20, 1).unwrap();
  assert_eq!(tips.len(), 1);
  assert_eq!(tips[0].stock_symbol, "INFY");
  assert_eq!(tips[0].tip_type, "Swing");
  assert_eq!(tips[0].action, "Buy");
}

#[test]
fn sentiment_filter_by_symbol_newest_first() {
  let mut conn = setup();
  let base = ts("2024-06-03");

  let records: Vec<NewSentimentData> = (1..=6)
    .map(|i| NewSentimentData {
      source: "NewsAPI".to_string(),
      timestamp: base + Duration::minutes(i),
      text: Some(format!("headline {i}")),
      sentiment_score: 0.1 * i as f64,
      stock_symbol: if i % 2 == 0 { Some("TCS".to_string()) } else { Some("INFY".to_string()) },
    })
    .collect();
  assert_eq!(NewSentimentData::bulk_insert(&mut conn, records).unwrap(), 6);

  let tcs = SentimentData::list(&mut conn, Some("tcs"), None, None, 100).unwrap();
  assert_eq!(tcs.len(), 3);
  assert!(tcs.iter().all(|r| r.stock_symbol.as_deref() == Some("TCS")));
  assert_eq!(tcs[0].timestamp, base + Duration::minutes(6));
  assert_eq!(tcs[2].timestamp, base + Duration::minutes(2));
}

#[test]
fn sentiment_time_range_filter_is_conjunctive() {
  let mut conn = setup();
  let base = ts("2024-06-03");

  for i in 1..=5 {
    SentimentData::create(
      &mut conn,
      "Twitter",
      None,
      0.0,
      Some("INFY"),
      Some(base + Duration::hours(i)),
    )
    .unwrap();
  }

  let window = SentimentData::list(
    &mut conn,
    Some("INFY"),
    Some(base + Duration::hours(2)),
    Some(base + Duration::hours(4)),
    100,
  )
  .unwrap();

  assert_eq!(window.len(), 3);
  assert_eq!(window[0].timestamp, base + Duration::hours(4));
  assert_eq!(window[2].timestamp, base + Duration::hours(2));
}

#[test]
fn stock_listing_applies_offset_and_limit() {
  let mut conn = setup();

  for (symbol, name) in
    [("AAA", "Alpha"), ("BBB", "Beta"), ("CCC", "Gamma"), ("DDD", "Delta"), ("EEE", "Epsilon")]
  {
    Stock::create(&mut conn, symbol, name, Exchange::BSE).unwrap();
  }

  let page = Stock::list(&mut conn, 2, 2).unwrap();
  assert_eq!(page.len(), 2);
  assert_eq!(page[0].symbol, "CCC");
  assert_eq!(page[1].symbol, "DDD");
}

#[test]
fn init_db_is_idempotent_on_a_file_database() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("stocks.db");
  let url = path.to_str().unwrap();

  {
    let mut conn = establish_connection(url).unwrap();
    init_db(&mut conn).unwrap();
    Stock::create(&mut conn, "INFY", "Infosys Ltd", Exchange::NSE).unwrap();
  }

  let mut conn = establish_connection(url).unwrap();
  init_db(&mut conn).unwrap();

  let stock = Stock::find_by_symbol(&mut conn, "INFY").unwrap().expect("row survives re-init");
  assert_eq!(stock.name, "Infosys Ltd");
}
