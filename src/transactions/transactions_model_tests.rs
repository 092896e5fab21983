//! Tests for the canonical transaction model.

#[cfg(test)]
mod tests {
    use crate::transactions::transactions_model::*;
    use chrono::NaiveDate;

    fn transaction(kind: TransactionKind, amount: f64) -> Transaction {
        Transaction {
            date: NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            kind,
            amount,
            description: "test".to_string(),
            recipient: "test".to_string(),
            ticker: None,
            quantity: None,
            price: None,
        }
    }

    // ============================================================================
    // TransactionKind
    // ============================================================================

    #[test]
    fn test_booking_text_mapping() {
        assert_eq!(TransactionKind::Buy.booking_text(), "Wertpapierkauf");
        assert_eq!(TransactionKind::Sell.booking_text(), "Wertpapierverkauf");
        assert_eq!(TransactionKind::Dividend.booking_text(), "Dividende");
        assert_eq!(TransactionKind::Deposit.booking_text(), "Einlage");
        assert_eq!(
            TransactionKind::Withdrawal.booking_text(),
            "Auszahlung / Kartennutzung"
        );
        assert_eq!(TransactionKind::Interest.booking_text(), "Zinsen");
        assert_eq!(TransactionKind::Other.booking_text(), "Sonstiges");
    }

    #[test]
    fn test_only_buy_and_withdrawal_are_debits() {
        let debits = [TransactionKind::Buy, TransactionKind::Withdrawal];
        let credits = [
            TransactionKind::Sell,
            TransactionKind::Dividend,
            TransactionKind::Deposit,
            TransactionKind::Interest,
            TransactionKind::Other,
        ];

        for kind in debits {
            assert!(kind.is_debit(), "{:?}", kind);
        }
        for kind in credits {
            assert!(!kind.is_debit(), "{:?}", kind);
        }
    }

    // ============================================================================
    // Transaction
    // ============================================================================

    #[test]
    fn test_signed_amount_negates_debits() {
        assert_eq!(transaction(TransactionKind::Buy, 1505.0).signed_amount(), -1505.0);
        assert_eq!(
            transaction(TransactionKind::Withdrawal, 50.0).signed_amount(),
            -50.0
        );
        assert_eq!(transaction(TransactionKind::Sell, 1505.0).signed_amount(), 1505.0);
        assert_eq!(transaction(TransactionKind::Deposit, 50.0).signed_amount(), 50.0);
    }

    #[test]
    fn test_signed_amount_ignores_stored_sign() {
        // The magnitude invariant holds even if a negative slips through.
        assert_eq!(transaction(TransactionKind::Buy, -10.0).signed_amount(), -10.0);
        assert_eq!(transaction(TransactionKind::Deposit, -10.0).signed_amount(), 10.0);
    }

    #[test]
    fn test_formatted_date_is_german() {
        assert_eq!(
            transaction(TransactionKind::Buy, 1.0).formatted_date(),
            "02.01.2024"
        );
    }

    // ============================================================================
    // EventDate
    // ============================================================================

    #[test]
    fn test_parse_strips_zone_and_fraction() {
        let parsed = EventDate::parse(Some("2024-01-02T10:00:00.000Z"));
        assert!(!parsed.is_fallback());
        assert_eq!(
            parsed.into_inner(),
            NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_accepts_plain_timestamp() {
        let parsed = EventDate::parse(Some("2024-03-05T00:00:00"));
        assert!(!parsed.is_fallback());
    }

    #[test]
    fn test_parse_accepts_date_only_as_midnight() {
        let parsed = EventDate::parse(Some("2024-03-05"));
        assert!(!parsed.is_fallback());
        assert_eq!(
            parsed.into_inner(),
            NaiveDate::from_ymd_opt(2024, 3, 5)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_falls_back_on_garbage() {
        assert!(EventDate::parse(Some("yesterday")).is_fallback());
        assert!(EventDate::parse(Some("")).is_fallback());
        assert!(EventDate::parse(None).is_fallback());
    }

    #[test]
    fn test_fallback_is_close_to_now() {
        let fallback = EventDate::parse(None).into_inner();
        let now = chrono::Local::now().naive_local();
        assert!((now - fallback).num_seconds().abs() < 5);
    }
}
