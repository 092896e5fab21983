//! Canonical transaction domain - model, normalization, and assembly.

mod transactions_model;
mod transactions_service;

#[cfg(test)]
mod transactions_model_tests;


pub use transactions_model::{EventDate, Transaction, TransactionKind};
pub use transactions_service::{
    assemble, from_cash_transaction, from_dividend, from_order, normalize,
    TransactionSyncService,
};
