//! Trading 212 API integration - raw record shapes and the paginated client.

mod trading212_client;
mod trading212_models;

#[cfg(test)]
mod trading212_client_tests;


pub use trading212_client::{FetchError, PagedFetch, Trading212Client};
pub use trading212_models::{
    Page, RawRecord, Trading212CashTransaction, Trading212Dividend, Trading212Order,
    ORDER_STATUS_FILLED,
};
