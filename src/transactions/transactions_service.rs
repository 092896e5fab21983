//! Normalization of raw Trading 212 records and assembly of the export list.

use log::{info, warn};

use crate::constants::{RECIPIENT_CASH, RECIPIENT_DIVIDENDS, RECIPIENT_MARKETS};
use crate::trading212::{
    RawRecord, Trading212CashTransaction, Trading212Client, Trading212Dividend, Trading212Order,
};

use super::transactions_model::{EventDate, Transaction, TransactionKind};

/// Sentinel ticker for dividends whose instrument is missing upstream.
const DIVIDEND_TICKER_FALLBACK: &str = "DIV";

/// Sentinel ticker for orders whose instrument is missing upstream.
const ORDER_TICKER_FALLBACK: &str = "Unknown";

/// Map any raw record onto the canonical model.
pub fn normalize(record: &RawRecord) -> Transaction {
    match record {
        RawRecord::Order(order) => from_order(order),
        RawRecord::Dividend(dividend) => from_dividend(dividend),
        RawRecord::Cash(cash) => from_cash_transaction(cash),
    }
}

/// An order becomes a Buy or Sell trade; callers filter on `is_filled()`
/// before ever reaching this mapper.
pub fn from_order(order: &Trading212Order) -> Transaction {
    let date = EventDate::parse(order.date_created.as_deref()).into_inner();
    let ticker = order
        .ticker
        .clone()
        .unwrap_or_else(|| ORDER_TICKER_FALLBACK.to_string());
    let quantity = order.filled_quantity.unwrap_or(0.0);
    let price = order.fill_price.unwrap_or(0.0);

    let kind = if order.direction.as_deref() == Some("BUY") {
        TransactionKind::Buy
    } else {
        TransactionKind::Sell
    };

    Transaction {
        date,
        kind,
        amount: (quantity * price).abs(),
        description: format!("Order {} {} Stk @ {}", ticker, quantity, price),
        recipient: RECIPIENT_MARKETS.to_string(),
        ticker: Some(ticker),
        quantity: Some(quantity),
        price: Some(price),
    }
}

pub fn from_dividend(dividend: &Trading212Dividend) -> Transaction {
    let date = EventDate::parse(dividend.paid_on.as_deref()).into_inner();
    let ticker = dividend
        .ticker
        .clone()
        .unwrap_or_else(|| DIVIDEND_TICKER_FALLBACK.to_string());

    Transaction {
        date,
        kind: TransactionKind::Dividend,
        amount: dividend.amount.unwrap_or(0.0).abs(),
        description: format!("Dividende {}", ticker),
        recipient: RECIPIENT_DIVIDENDS.to_string(),
        ticker: Some(ticker),
        quantity: None,
        price: None,
    }
}

pub fn from_cash_transaction(cash: &Trading212CashTransaction) -> Transaction {
    let date = EventDate::parse(cash.date.as_deref()).into_inner();

    let (kind, description) = match cash.kind.as_deref() {
        Some("DEPOSIT") => (TransactionKind::Deposit, "Einzahlung auf Verrechnungskonto"),
        Some("WITHDRAWAL") => (
            TransactionKind::Withdrawal,
            "Abhebung oder Kartenzahlung",
        ),
        Some("INTEREST") => (TransactionKind::Interest, "Zinsen auf Guthaben"),
        _ => (TransactionKind::Other, "Transaktion"),
    };

    Transaction {
        date,
        kind,
        amount: cash.amount.unwrap_or(0.0).abs(),
        description: description.to_string(),
        recipient: RECIPIENT_CASH.to_string(),
        ticker: None,
        quantity: None,
        price: None,
    }
}

/// Normalize and concatenate the three listings in fetch order. Orders
/// that are not FILLED are dropped here, before normalization.
pub fn assemble(
    orders: &[Trading212Order],
    dividends: &[Trading212Dividend],
    cash: &[Trading212CashTransaction],
) -> Vec<Transaction> {
    let mut transactions = Vec::with_capacity(orders.len() + dividends.len() + cash.len());
    transactions.extend(orders.iter().filter(|o| o.is_filled()).map(from_order));
    transactions.extend(dividends.iter().map(from_dividend));
    transactions.extend(cash.iter().map(from_cash_transaction));
    transactions
}

pub struct TransactionSyncService;

impl TransactionSyncService {
    /// Fetch all three histories and normalize them into one list.
    ///
    /// Endpoint failures degrade to partial data and are logged; an empty
    /// return value is an expected outcome the caller reports, not an
    /// error.
    pub async fn collect_all(client: &Trading212Client) -> Vec<Transaction> {
        let orders = client.fetch_orders().await;
        if let Some(failure) = &orders.failure {
            warn!("order history incomplete: {}", failure);
        }

        let dividends = client.fetch_dividends().await;
        if let Some(failure) = &dividends.failure {
            warn!("dividend history incomplete: {}", failure);
        }

        let cash = client.fetch_cash_transactions().await;
        if let Some(failure) = &cash.failure {
            warn!("cash transaction history incomplete: {}", failure);
        }

        let transactions = assemble(&orders.items, &dividends.items, &cash.items);
        info!(
            "normalized {} transactions ({} orders, {} dividends, {} cash)",
            transactions.len(),
            orders.items.len(),
            dividends.items.len(),
            cash.items.len()
        );
        transactions
    }
}
