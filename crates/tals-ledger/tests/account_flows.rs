//! Integration tests for full account flows.
//!
//! Each test drives an `Account` against the reference fixed-price oracle
//! (AAPL 170.0, TSLA 250.0, GOOGL 2700.0) and checks balances, holdings and
//! the transaction log after every step.

use std::sync::Arc;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tals_ledger::{Account, LedgerError};
use tals_models::{Symbol, TransactionKind};
use tals_pricing::{FixedPriceOracle, PriceError, PriceOracle};

fn oracle() -> Arc<dyn PriceOracle> {
    Arc::new(FixedPriceOracle::default())
}

// ============================================================
// Scenario 1: Trading session
// Open with 5000, buy 10 AAPL, sell 5, then overreach on GOOGL
// ============================================================

#[tokio::test]
async fn scenario_trading_session() {
    let mut account = Account::open("acc1", dec!(5000.0), oracle()).unwrap();

    account.buy_shares(&Symbol::new("AAPL"), 10).await.unwrap();
    assert_eq!(account.balance(), dec!(3300.0));
    assert_eq!(
        account.holdings_snapshot().get(&Symbol::new("AAPL")),
        Some(&10)
    );

    account.sell_shares(&Symbol::new("AAPL"), 5).await.unwrap();
    assert_eq!(account.balance(), dec!(4150.0));
    assert_eq!(
        account.holdings_snapshot().get(&Symbol::new("AAPL")),
        Some(&5)
    );

    // 5 GOOGL would cost 13500 against a 4150 balance.
    let err = account
        .buy_shares(&Symbol::new("GOOGL"), 5)
        .await
        .unwrap_err();
    match err {
        LedgerError::InsufficientFunds { needed, available } => {
            assert_eq!(needed, dec!(13500.0));
            assert_eq!(available, dec!(4150.0));
        }
        other => panic!("expected InsufficientFunds, got {other}"),
    }

    // The rejected buy changed nothing.
    assert_eq!(account.balance(), dec!(4150.0));
    assert_eq!(account.transaction_history().len(), 3);
}

// ============================================================
// Scenario 2: Rejected operations leave no trace
// ============================================================

#[tokio::test]
async fn scenario_negative_withdrawal() {
    let mut account = Account::open("acc1", dec!(500.0), oracle()).unwrap();

    let err = account.withdraw(dec!(-10.0)).unwrap_err();
    assert!(matches!(err, LedgerError::InvalidAmount(_)));
    assert_eq!(account.balance(), dec!(500.0));
    assert_eq!(account.transaction_history().len(), 1);
}

#[tokio::test]
async fn scenario_sell_without_holding() {
    let mut account = Account::open("acc1", dec!(500.0), oracle()).unwrap();

    let err = account
        .sell_shares(&Symbol::new("TSLA"), 1)
        .await
        .unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientShares { .. }));
    assert_eq!(account.transaction_history().len(), 1);
}

#[tokio::test]
async fn scenario_unknown_symbol_buy() {
    let mut account = Account::open("acc1", dec!(500.0), oracle()).unwrap();

    let err = account
        .buy_shares(&Symbol::new("ZZZZ"), 1)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        LedgerError::Price(PriceError::UnknownSymbol(s)) if s == "ZZZZ"
    ));
    assert_eq!(account.balance(), dec!(500.0));
    assert_eq!(account.transaction_history().len(), 1);
}

// ============================================================
// Scenario 3: Buy/sell round trip at constant prices
// ============================================================

#[tokio::test]
async fn scenario_round_trip_restores_balance() {
    let mut account = Account::open("acc1", dec!(2000.0), oracle()).unwrap();

    account.buy_shares(&Symbol::new("TSLA"), 4).await.unwrap();
    assert_eq!(account.balance(), dec!(1000.0));

    account.sell_shares(&Symbol::new("TSLA"), 4).await.unwrap();
    assert_eq!(account.balance(), dec!(2000.0));
    assert!(account.holdings_snapshot().is_empty());
}

// ============================================================
// Scenario 4: Valuation and profit/loss
// ============================================================

#[tokio::test]
async fn scenario_portfolio_value_after_open() {
    let account = Account::open("acc1", dec!(750.0), oracle()).unwrap();
    assert_eq!(account.portfolio_value().await.unwrap(), dec!(750.0));
}

#[tokio::test]
async fn scenario_profit_loss_ignores_later_deposits() {
    let mut account = Account::open("acc1", dec!(5000.0), oracle()).unwrap();
    account.buy_shares(&Symbol::new("AAPL"), 10).await.unwrap();

    // Prices have not moved, so holdings exactly offset the cash spent.
    assert_eq!(account.profit_loss().await.unwrap(), Decimal::ZERO);

    // A second deposit counts as gained value against the opening baseline.
    account.deposit(dec!(2500.0)).unwrap();
    assert_eq!(account.profit_loss().await.unwrap(), dec!(2500.0));

    let value = account.portfolio_value().await.unwrap();
    assert_eq!(account.profit_loss().await.unwrap(), value - dec!(5000.0));
}

// ============================================================
// Scenario 5: Invariants across a mixed operation sequence
// ============================================================

#[tokio::test]
async fn scenario_invariants_hold_after_each_step() {
    let mut account = Account::open("acc1", dec!(10000.0), oracle()).unwrap();

    account.deposit(dec!(500.0)).unwrap();
    account.buy_shares(&Symbol::new("AAPL"), 20).await.unwrap();
    account.buy_shares(&Symbol::new("TSLA"), 8).await.unwrap();
    account.sell_shares(&Symbol::new("AAPL"), 20).await.unwrap();
    account.withdraw(dec!(1000.0)).unwrap();

    assert!(account.balance() >= Decimal::ZERO);
    for (_, quantity) in account.holdings_snapshot() {
        assert!(quantity > 0);
    }

    let log = account.transaction_history();
    assert_eq!(log.len(), 6);
    assert_eq!(log[0].kind, TransactionKind::Deposit);
    for pair in log.windows(2) {
        assert!(pair[0].timestamp <= pair[1].timestamp);
    }
}
