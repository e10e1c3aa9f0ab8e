use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tals_models::{Symbol, Transaction, TransactionKind};
use tals_pricing::PriceOracle;
use tracing::info;

use crate::error::LedgerError;

/// A single trading account: cash balance, share holdings and an append-only
/// transaction log.
///
/// Every mutating operation validates fully before writing any field, so a
/// rejected call leaves the account untouched and usable. Mutations take
/// `&mut self` - exclusive access is the single-writer serialization the
/// ledger requires, and readers can never observe a half-applied operation.
pub struct Account {
    account_id: String,
    balance: Decimal,
    holdings: BTreeMap<Symbol, u64>,
    transactions: Vec<Transaction>,
    oracle: Arc<dyn PriceOracle>,
}

impl Account {
    /// Open an account with a non-negative opening deposit.
    ///
    /// The deposit is recorded as the log's first transaction even when zero.
    pub fn open(
        account_id: impl Into<String>,
        initial_deposit: Decimal,
        oracle: Arc<dyn PriceOracle>,
    ) -> Result<Self, LedgerError> {
        if initial_deposit < Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(initial_deposit));
        }

        let mut account = Self {
            account_id: account_id.into(),
            balance: initial_deposit,
            holdings: BTreeMap::new(),
            transactions: Vec::new(),
            oracle,
        };
        account.record(Transaction::cash(
            TransactionKind::Deposit,
            initial_deposit,
            Utc::now(),
        ));
        info!(account = %account.account_id, balance = %account.balance, "Account opened");
        Ok(account)
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Add cash to the balance. The amount must be strictly positive.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(amount));
        }

        self.balance += amount;
        self.record(Transaction::cash(
            TransactionKind::Deposit,
            amount,
            Utc::now(),
        ));
        info!(account = %self.account_id, amount = %amount, balance = %self.balance, "Deposit applied");
        Ok(())
    }

    /// Remove cash from the balance. No partial withdrawals: the full amount
    /// must be covered.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(amount));
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                needed: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        self.record(Transaction::cash(
            TransactionKind::Withdraw,
            amount,
            Utc::now(),
        ));
        info!(account = %self.account_id, amount = %amount, balance = %self.balance, "Withdrawal applied");
        Ok(())
    }

    /// Buy `quantity` shares of `symbol` at the oracle's current price.
    ///
    /// Balance and holdings are written only after the price is known and the
    /// cost is covered, so a slow or failing oracle cannot leave the account
    /// half-updated.
    pub async fn buy_shares(&mut self, symbol: &Symbol, quantity: i64) -> Result<(), LedgerError> {
        if quantity <= 0 {
            return Err(LedgerError::InvalidQuantity(quantity));
        }
        let quantity = quantity as u64;

        let unit_price = self.oracle.unit_price(symbol).await?;
        let cost = unit_price * Decimal::from(quantity);
        if cost > self.balance {
            return Err(LedgerError::InsufficientFunds {
                needed: cost,
                available: self.balance,
            });
        }

        self.balance -= cost;
        *self.holdings.entry(symbol.clone()).or_insert(0) += quantity;
        self.record(Transaction::trade(
            TransactionKind::Buy,
            symbol.clone(),
            quantity,
            unit_price,
            Utc::now(),
        ));
        info!(
            account = %self.account_id,
            symbol = %symbol,
            quantity,
            unit_price = %unit_price,
            balance = %self.balance,
            "Buy executed"
        );
        Ok(())
    }

    /// Sell `quantity` shares of `symbol` at the oracle's current price.
    ///
    /// The inventory check runs before the oracle is consulted. A holding
    /// that reaches zero is removed from the map entirely.
    pub async fn sell_shares(&mut self, symbol: &Symbol, quantity: i64) -> Result<(), LedgerError> {
        if quantity <= 0 {
            return Err(LedgerError::InvalidQuantity(quantity));
        }
        let quantity = quantity as u64;

        let held = self.holdings.get(symbol).copied().unwrap_or(0);
        if held < quantity {
            return Err(LedgerError::InsufficientShares {
                symbol: symbol.clone(),
                requested: quantity,
                held,
            });
        }

        let unit_price = self.oracle.unit_price(symbol).await?;
        let revenue = unit_price * Decimal::from(quantity);

        self.balance += revenue;
        let remaining = held - quantity;
        if remaining == 0 {
            self.holdings.remove(symbol);
        } else {
            self.holdings.insert(symbol.clone(), remaining);
        }
        self.record(Transaction::trade(
            TransactionKind::Sell,
            symbol.clone(),
            quantity,
            unit_price,
            Utc::now(),
        ));
        info!(
            account = %self.account_id,
            symbol = %symbol,
            quantity,
            unit_price = %unit_price,
            balance = %self.balance,
            "Sell executed"
        );
        Ok(())
    }

    /// Cash balance plus holdings marked at current oracle prices.
    pub async fn portfolio_value(&self) -> Result<Decimal, LedgerError> {
        let mut total = self.balance;
        for (symbol, quantity) in &self.holdings {
            let unit_price = self.oracle.unit_price(symbol).await?;
            total += unit_price * Decimal::from(*quantity);
        }
        Ok(total)
    }

    /// Portfolio value relative to the opening deposit.
    ///
    /// The baseline is the first deposit in the log - always the creating
    /// deposit - so later deposits never move it.
    pub async fn profit_loss(&self) -> Result<Decimal, LedgerError> {
        let baseline = self
            .transactions
            .iter()
            .find(|tx| tx.kind == TransactionKind::Deposit)
            .map(|tx| tx.price)
            .unwrap_or(Decimal::ZERO);
        Ok(self.portfolio_value().await? - baseline)
    }

    /// Owned copy of the holdings map.
    pub fn holdings_snapshot(&self) -> BTreeMap<Symbol, u64> {
        self.holdings.clone()
    }

    /// Owned copy of the transaction log, in recorded order.
    pub fn transaction_history(&self) -> Vec<Transaction> {
        self.transactions.clone()
    }

    /// Append to the log. The timestamp is clamped to the previous entry's so
    /// the sequence stays non-decreasing across wall-clock adjustments.
    fn record(&mut self, mut transaction: Transaction) {
        if let Some(last) = self.transactions.last() {
            if transaction.timestamp < last.timestamp {
                transaction.timestamp = last.timestamp;
            }
        }
        self.transactions.push(transaction);
    }
}
