//! Canonical transaction model shared by the normalizer and the exporter.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Kind of a canonical transaction, driving the booking text and the
/// exported sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Buy,
    Sell,
    Dividend,
    Deposit,
    Withdrawal,
    Interest,
    Other,
}

impl TransactionKind {
    /// Fixed German booking text Finanzblick expects for this kind.
    pub fn booking_text(&self) -> &'static str {
        match self {
            TransactionKind::Buy => "Wertpapierkauf",
            TransactionKind::Sell => "Wertpapierverkauf",
            TransactionKind::Dividend => "Dividende",
            TransactionKind::Deposit => "Einlage",
            TransactionKind::Withdrawal => "Auszahlung / Kartennutzung",
            TransactionKind::Interest => "Zinsen",
            TransactionKind::Other => "Sonstiges",
        }
    }

    /// Kinds exported with a negative sign (money leaving the account).
    pub fn is_debit(&self) -> bool {
        matches!(self, TransactionKind::Buy | TransactionKind::Withdrawal)
    }
}

/// One normalized brokerage event. Constructed once per upstream record,
/// never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub date: NaiveDateTime,
    pub kind: TransactionKind,
    /// Non-negative magnitude in account currency; the exported sign is
    /// derived from `kind`, never stored.
    pub amount: f64,
    pub description: String,
    pub recipient: String,
    pub ticker: Option<String>,
    pub quantity: Option<f64>,
    pub price: Option<f64>,
}

impl Transaction {
    /// Day used for booking, value, and evaluation dates alike.
    pub fn booking_day(&self) -> NaiveDate {
        self.date.date()
    }

    /// Booking day in the German `DD.MM.YYYY` format.
    pub fn formatted_date(&self) -> String {
        self.date.format("%d.%m.%Y").to_string()
    }

    /// Amount with the kind-dependent debit/credit sign applied.
    pub fn signed_amount(&self) -> f64 {
        if self.kind.is_debit() {
            -self.amount.abs()
        } else {
            self.amount.abs()
        }
    }
}

/// Result of parsing an upstream timestamp, keeping the fallback visible.
///
/// A missing or malformed timestamp substitutes the current wall-clock
/// time instead of failing the record: lossy, but the output row must
/// never lack a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDate {
    Parsed(NaiveDateTime),
    Fallback(NaiveDateTime),
}

impl EventDate {
    /// Parse an ISO-8601 timestamp, stripping a trailing `Z` and any
    /// fractional-second suffix first. Date-only values parse as midnight.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.and_then(parse_naive_iso) {
            Some(dt) => EventDate::Parsed(dt),
            None => EventDate::Fallback(Local::now().naive_local()),
        }
    }

    pub fn into_inner(self) -> NaiveDateTime {
        match self {
            EventDate::Parsed(dt) | EventDate::Fallback(dt) => dt,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, EventDate::Fallback(_))
    }
}

fn parse_naive_iso(raw: &str) -> Option<NaiveDateTime> {
    let cleaned = raw.trim().trim_end_matches('Z');
    let cleaned = match cleaned.find('.') {
        Some(i) => &cleaned[..i],
        None => cleaned,
    };

    NaiveDateTime::parse_from_str(cleaned, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(cleaned, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
