// End-to-end ingestion: a bill document with mixed clean and malformed
// records must load, degrade per field, and reconcile without error. Only
// a document that is not a bill array at all is rejected.

use std::io::Cursor;

use rust_decimal_macros::dec;

use loomledger::billing::load_bills;
use loomledger::reconcile::Reconciler;

const MIXED_QUALITY_DOCUMENT: &str = r#"[
    {
        "billNumber": "B-2001",
        "date": "2026-04-02",
        "totalAmount": 600,
        "items": [
            {"productName": "Cotton Saree", "quantity": 3, "salePrice": 200, "purchaseCode": "DIN"}
        ]
    },
    {
        "billNumber": 2002,
        "date": "not a date",
        "totalAmount": "n/a",
        "items": [
            {"productName": "Towel", "quantity": "2", "salePrice": "50", "purchaseCode": "zzz"},
            {"productName": "Remnant", "quantity": "many", "salePrice": 80, "purchaseCode": "P"}
        ]
    },
    {
        "billNumber": "B-2003"
    }
]"#;

#[test]
fn test_mixed_quality_document_loads_and_reconciles() {
    let bills = load_bills(Cursor::new(MIXED_QUALITY_DOCUMENT)).unwrap();
    assert_eq!(bills.len(), 3);

    // field-level degradation
    assert_eq!(bills[1].bill_number, "2002");
    assert_eq!(bills[1].date, None);
    assert_eq!(bills[1].total_amount, None);
    assert_eq!(bills[1].items[1].quantity, 0);
    assert!(bills[2].items.is_empty());

    let report = Reconciler::new().reconcile(&bills);

    // B-2001: recorded total 600, cost 369, profit 231
    // 2002: item-sum fallback 100 (the zero-quantity item contributes
    //       nothing), undecodable code -> cost 0, profit 100
    // B-2003: nothing recorded, contributes zero
    assert_eq!(report.grand.total_sales, dec!(700));
    assert_eq!(report.grand.total_cost, dec!(369));
    assert_eq!(report.grand.total_profit, dec!(331));
}

#[test]
fn test_non_array_document_is_rejected() {
    let result = load_bills(Cursor::new(r#"{"billNumber": "B-1"}"#));
    assert!(result.is_err());
}

#[test]
fn test_unreadable_document_is_rejected() {
    let result = load_bills(Cursor::new("not json at all"));
    assert!(result.is_err());
}

#[test]
fn test_empty_array_is_a_valid_empty_collection() {
    let bills = load_bills(Cursor::new("[]")).unwrap();
    assert!(bills.is_empty());

    let report = Reconciler::new().reconcile(&bills);
    assert_eq!(report.grand.total_profit, dec!(0));
}
