// Property-based tests for the profit reconciliation pipeline.
//
// The pipeline is pure summation: totals must be order-independent,
// additive over disjoint bill sets, and never fail on malformed per-item
// data.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use loomledger::billing::{Bill, LineItem};
use loomledger::reconcile::Reconciler;

fn arb_item() -> impl Strategy<Value = LineItem> {
    // Valid codes, invalid codes, and empty codes all occur in real data
    (
        "([DINESHJATP]{1,5}|[XYZ]{1,3})?",
        0u32..20,
        0u64..5_000,
        proptest::option::of(0u64..1_000),
    )
        .prop_map(|(code, quantity, price, purchase_price)| LineItem {
            item_id: None,
            product_name: "Item".to_string(),
            quantity,
            sale_price: Decimal::from(price),
            purchase_code: code,
            purchase_price: purchase_price.map(Decimal::from),
        })
}

fn arb_bill() -> impl Strategy<Value = Bill> {
    (
        proptest::collection::vec(arb_item(), 0..5),
        proptest::option::of(0u64..100_000),
    )
        .prop_map(|(items, total)| Bill {
            bill_number: "B".to_string(),
            date: None,
            total_amount: total.map(Decimal::from),
            items,
        })
}

proptest! {
    #[test]
    fn test_totals_add_across_disjoint_sets(
        a in proptest::collection::vec(arb_bill(), 0..6),
        b in proptest::collection::vec(arb_bill(), 0..6),
    ) {
        let reconciler = Reconciler::new();
        let report_a = reconciler.reconcile(&a);
        let report_b = reconciler.reconcile(&b);

        let mut combined = a.clone();
        combined.extend(b.clone());
        let report_ab = reconciler.reconcile(&combined);

        prop_assert_eq!(
            report_ab.grand.total_profit,
            report_a.grand.total_profit + report_b.grand.total_profit
        );
        prop_assert_eq!(
            report_ab.grand.total_sales,
            report_a.grand.total_sales + report_b.grand.total_sales
        );
        prop_assert_eq!(
            report_ab.grand.total_cost,
            report_a.grand.total_cost + report_b.grand.total_cost
        );
    }

    #[test]
    fn test_totals_are_order_independent(bills in proptest::collection::vec(arb_bill(), 0..8)) {
        let reconciler = Reconciler::new();
        let forward = reconciler.reconcile(&bills);

        let mut reversed = bills.clone();
        reversed.reverse();
        let backward = reconciler.reconcile(&reversed);

        prop_assert_eq!(forward.grand.total_sales, backward.grand.total_sales);
        prop_assert_eq!(forward.grand.total_cost, backward.grand.total_cost);
        prop_assert_eq!(forward.grand.total_profit, backward.grand.total_profit);
    }

    #[test]
    fn test_reconcile_is_idempotent(bills in proptest::collection::vec(arb_bill(), 0..8)) {
        let reconciler = Reconciler::new();
        let first = reconciler.reconcile(&bills);
        let second = reconciler.reconcile(&bills);

        prop_assert_eq!(first.grand.total_sales, second.grand.total_sales);
        prop_assert_eq!(first.grand.total_cost, second.grand.total_cost);
        prop_assert_eq!(first.grand.total_profit, second.grand.total_profit);
    }

    #[test]
    fn test_profit_identity_without_recorded_totals(
        bills in proptest::collection::vec(arb_bill(), 0..8),
    ) {
        // With no recorded totals and no legacy cost fields, every bill's
        // sales figure is its item sum, so profit == sales - cost exactly
        let stripped: Vec<Bill> = bills
            .into_iter()
            .map(|mut bill| {
                bill.total_amount = None;
                for item in &mut bill.items {
                    item.purchase_price = None;
                }
                bill
            })
            .collect();

        let report = Reconciler::new().reconcile(&stripped);
        prop_assert_eq!(
            report.grand.total_profit,
            report.grand.total_sales - report.grand.total_cost
        );
    }

    #[test]
    fn test_never_panics_on_arbitrary_codes(code in "\\PC{0,12}", quantity in 0u32..10) {
        let bills = vec![Bill {
            bill_number: "B-1".to_string(),
            date: None,
            total_amount: None,
            items: vec![LineItem {
                item_id: None,
                product_name: "Item".to_string(),
                quantity,
                sale_price: dec!(10),
                purchase_code: code,
                purchase_price: None,
            }],
        }];

        let report = Reconciler::new().reconcile(&bills);
        prop_assert!(report.grand.total_cost >= Decimal::ZERO);
    }

    #[test]
    fn test_recorded_total_drives_sales(total in 0u64..100_000, bills in proptest::collection::vec(arb_bill(), 1..4)) {
        // Pin every bill's recorded total; sales must be their plain sum
        let total = Decimal::from(total);
        let pinned: Vec<Bill> = bills
            .into_iter()
            .map(|mut bill| {
                bill.total_amount = Some(total);
                bill
            })
            .collect();

        let report = Reconciler::new().reconcile(&pinned);
        prop_assert_eq!(
            report.grand.total_sales,
            total * Decimal::from(pinned.len() as u64)
        );
    }
}

#[test]
fn test_invalid_code_profit_equals_sale_revenue() {
    let bills = vec![Bill {
        bill_number: "B-1".to_string(),
        date: None,
        total_amount: None,
        items: vec![LineItem {
            item_id: None,
            product_name: "Bedsheet".to_string(),
            quantity: 2,
            sale_price: dec!(100),
            purchase_code: "ZZZ".to_string(),
            purchase_price: None,
        }],
    }];

    let report = Reconciler::new().reconcile(&bills);
    let item = &report.per_bill[0].per_item[0];
    assert_eq!(item.unit_cost, dec!(0));
    assert_eq!(item.profit, dec!(200));
    // an item profit equal to its full sale value is the visible signal
    // of an undecoded purchase code
    assert_eq!(item.profit, item.sale_value);
}
