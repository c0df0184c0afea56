//! Integration test: end-to-end placement scenarios
//!
//! Walks the engine through the canonical continuous-matching cases:
//! full cross, resting, partial maker, maker pricing, and no cross.

use pairmatch_matchcore::MatchingEngine;
use pairmatch_types::*;
use rust_decimal::Decimal;

fn dec(n: i64) -> Decimal {
    Decimal::new(n, 0)
}

fn btc() -> TradingPair {
    TradingPair::new("BTC", "USDT")
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn engine_with_btc() -> MatchingEngine {
    init_tracing();
    let engine = MatchingEngine::new();
    engine.create_pair(btc());
    engine
}

#[test]
fn scenario_full_cross_fills_both_orders() {
    let engine = engine_with_btc();
    let alice = UserId(1);
    let bob = UserId(2);

    let sell = engine
        .place_order(bob, &btc(), OrderSide::Sell, dec(100), Decimal::ONE)
        .unwrap();
    assert!(sell.trades.is_empty());
    assert_eq!(sell.order.status, OrderStatus::Open);

    let buy = engine
        .place_order(alice, &btc(), OrderSide::Buy, dec(100), Decimal::ONE)
        .unwrap();
    assert_eq!(buy.trades.len(), 1);
    let trade = &buy.trades[0];
    assert_eq!(trade.price, dec(100));
    assert_eq!(trade.quantity, Decimal::ONE);
    assert_eq!(trade.buy_order_id, buy.order.id);
    assert_eq!(trade.sell_order_id, sell.order.id);

    assert_eq!(buy.order.status, OrderStatus::Filled);
    assert_eq!(engine.order(sell.order.id).unwrap().status, OrderStatus::Filled);
    assert!(engine.depth(&btc(), 10).unwrap().is_empty());
    assert_eq!(engine.trades().len(), 1);
}

#[test]
fn scenario_buy_into_empty_book_rests() {
    let engine = engine_with_btc();
    let placed = engine
        .place_order(UserId(1), &btc(), OrderSide::Buy, dec(100), Decimal::ONE)
        .unwrap();
    assert!(placed.trades.is_empty());
    assert_eq!(placed.order.status, OrderStatus::Open);

    let depth = engine.depth(&btc(), 10).unwrap();
    assert_eq!(
        depth.bids,
        vec![DepthLevel {
            price: dec(100),
            quantity: Decimal::ONE
        }]
    );
    assert!(depth.asks.is_empty());
}

#[test]
fn scenario_partial_maker_remains_in_book() {
    let engine = engine_with_btc();
    let maker = engine
        .place_order(UserId(2), &btc(), OrderSide::Sell, dec(100), dec(2))
        .unwrap()
        .order;

    let taker = engine
        .place_order(UserId(1), &btc(), OrderSide::Buy, dec(100), Decimal::ONE)
        .unwrap();
    assert_eq!(taker.trades.len(), 1);
    assert_eq!(taker.trades[0].quantity, Decimal::ONE);
    assert_eq!(taker.trades[0].price, dec(100));
    assert_eq!(taker.order.status, OrderStatus::Filled);

    let maker = engine.order(maker.id).unwrap();
    assert_eq!(maker.status, OrderStatus::Partial);
    assert_eq!(maker.remaining(), Decimal::ONE);

    let shared = engine.get_order_book(&btc()).unwrap();
    let book = shared.lock();
    let head = book.best_ask().unwrap();
    assert_eq!(head.id, maker.id);
    assert_eq!(head.remaining(), Decimal::ONE);
}

#[test]
fn scenario_trade_executes_at_maker_price() {
    let engine = engine_with_btc();
    engine
        .place_order(UserId(1), &btc(), OrderSide::Buy, dec(105), Decimal::ONE)
        .unwrap();
    let sell = engine
        .place_order(UserId(2), &btc(), OrderSide::Sell, dec(100), Decimal::ONE)
        .unwrap();

    assert_eq!(sell.trades.len(), 1);
    assert_eq!(sell.trades[0].price, dec(105), "maker price, not taker's 100");
}

#[test]
fn scenario_non_crossing_buy_rests_as_best_bid() {
    let engine = engine_with_btc();
    engine
        .place_order(UserId(2), &btc(), OrderSide::Sell, dec(110), Decimal::ONE)
        .unwrap();
    let buy = engine
        .place_order(UserId(1), &btc(), OrderSide::Buy, dec(100), Decimal::ONE)
        .unwrap();

    assert!(buy.trades.is_empty());
    let depth = engine.depth(&btc(), 10).unwrap();
    assert_eq!(depth.best_bid().map(|l| l.price), Some(dec(100)));
    assert_eq!(
        depth.asks,
        vec![DepthLevel {
            price: dec(110),
            quantity: Decimal::ONE
        }]
    );
}

#[test]
fn equal_price_makers_are_matched_in_arrival_order() {
    let engine = engine_with_btc();
    let first = engine
        .place_order(UserId(1), &btc(), OrderSide::Sell, dec(100), Decimal::ONE)
        .unwrap()
        .order;
    let second = engine
        .place_order(UserId(2), &btc(), OrderSide::Sell, dec(100), Decimal::ONE)
        .unwrap()
        .order;

    let buy = engine
        .place_order(UserId(3), &btc(), OrderSide::Buy, dec(100), Decimal::ONE)
        .unwrap();
    assert_eq!(buy.trades[0].sell_order_id, first.id);
    assert_eq!(engine.order(second.id).unwrap().status, OrderStatus::Open);
}

#[test]
fn better_price_beats_earlier_time() {
    let engine = engine_with_btc();
    engine
        .place_order(UserId(1), &btc(), OrderSide::Buy, dec(100), Decimal::ONE)
        .unwrap();
    let better = engine
        .place_order(UserId(2), &btc(), OrderSide::Buy, dec(101), Decimal::ONE)
        .unwrap()
        .order;

    let sell = engine
        .place_order(UserId(3), &btc(), OrderSide::Sell, dec(99), Decimal::ONE)
        .unwrap();
    assert_eq!(sell.trades[0].buy_order_id, better.id);
    assert_eq!(sell.trades[0].price, dec(101));
}

#[test]
fn sell_only_matches_bids_at_or_above_its_price() {
    let engine = engine_with_btc();
    engine
        .place_order(UserId(1), &btc(), OrderSide::Buy, dec(99), Decimal::ONE)
        .unwrap();
    let sell = engine
        .place_order(UserId(2), &btc(), OrderSide::Sell, dec(100), Decimal::ONE)
        .unwrap();
    assert!(sell.trades.is_empty());

    let depth = engine.depth(&btc(), 10).unwrap();
    assert_eq!(depth.best_bid().map(|l| l.price), Some(dec(99)));
    assert_eq!(depth.best_ask().map(|l| l.price), Some(dec(100)));
}

#[test]
fn taker_sweeps_levels_and_rests_remainder() {
    let engine = engine_with_btc();
    for price in [101, 100, 102] {
        engine
            .place_order(UserId(1), &btc(), OrderSide::Sell, dec(price), Decimal::ONE)
            .unwrap();
    }

    let buy = engine
        .place_order(UserId(2), &btc(), OrderSide::Buy, dec(101), dec(3))
        .unwrap();
    let prices: Vec<Decimal> = buy.trades.iter().map(|t| t.price).collect();
    assert_eq!(prices, vec![dec(100), dec(101)]);
    assert_eq!(buy.order.status, OrderStatus::Partial);
    assert_eq!(buy.order.remaining(), Decimal::ONE);

    let depth = engine.depth(&btc(), 10).unwrap();
    assert_eq!(depth.best_bid().map(|l| (l.price, l.quantity)), Some((dec(101), Decimal::ONE)));
    assert_eq!(depth.best_ask().map(|l| l.price), Some(dec(102)));
}

#[test]
fn depth_is_sorted_by_priority_and_truncated() {
    let engine = engine_with_btc();
    for (price, qty) in [(95, 1), (99, 2), (97, 1), (99, 3), (90, 4)] {
        engine
            .place_order(UserId(1), &btc(), OrderSide::Buy, dec(price), dec(qty))
            .unwrap();
    }
    for (price, qty) in [(120, 1), (105, 2), (110, 1), (105, 1)] {
        engine
            .place_order(UserId(2), &btc(), OrderSide::Sell, dec(price), dec(qty))
            .unwrap();
    }

    let depth = engine.depth(&btc(), 2).unwrap();
    let bids: Vec<(Decimal, Decimal)> = depth.bids.iter().map(|l| (l.price, l.quantity)).collect();
    let asks: Vec<(Decimal, Decimal)> = depth.asks.iter().map(|l| (l.price, l.quantity)).collect();
    assert_eq!(bids, vec![(dec(99), dec(5)), (dec(97), dec(1))]);
    assert_eq!(asks, vec![(dec(105), dec(3)), (dec(110), dec(1))]);
}

#[test]
fn fractional_quantities_are_exact() {
    let engine = engine_with_btc();
    let tenth = Decimal::new(1, 1);
    for _ in 0..3 {
        engine
            .place_order(UserId(1), &btc(), OrderSide::Sell, dec(100), tenth)
            .unwrap();
    }
    let buy = engine
        .place_order(UserId(2), &btc(), OrderSide::Buy, dec(100), Decimal::new(3, 1))
        .unwrap();
    assert_eq!(buy.trades.len(), 3);
    assert_eq!(buy.order.status, OrderStatus::Filled);
    assert_eq!(buy.order.filled, Decimal::new(3, 1));
}

#[test]
fn unknown_depth_pair_is_none() {
    let engine = engine_with_btc();
    assert!(engine.depth(&TradingPair::new("DOGE", "USDT"), 10).is_none());
}
