use rust_decimal::Decimal;
use tracing::debug;

use crate::modules::billing::{Bill, LineItem};
use crate::modules::codec::PurchaseCode;
use crate::modules::reconcile::models::{BillBreakdown, GrandTotals, ItemBreakdown, ProfitReport};

/// Derives profit, COGS, and sales figures from a bill collection.
///
/// Pure and synchronous: no I/O, no state between calls, identical output
/// for identical input. The screen report, the Excel export, and the PDF
/// export all consume one `ProfitReport` produced here, so the three
/// surfaces cannot disagree on the numbers for the same dataset.
pub struct Reconciler;

impl Reconciler {
    pub fn new() -> Self {
        Self
    }

    /// Computes per-item profit, per-bill totals, and grand totals over the
    /// supplied bills.
    ///
    /// Bills are processed in the order received; summation is commutative,
    /// so the order never affects the totals. Data-quality problems degrade
    /// per record and never abort the run: an undecodable purchase code
    /// means zero unit cost for that item (its profit then equals its full
    /// sale revenue, which is how bad codes surface in the report).
    pub fn reconcile(&self, bills: &[Bill]) -> ProfitReport {
        let mut per_bill = Vec::with_capacity(bills.len());
        let mut grand = GrandTotals::zero();

        for bill in bills {
            let breakdown = self.reconcile_bill(bill);
            grand.total_sales += breakdown.sale_total;
            grand.total_cost += breakdown.cost_total;
            grand.total_profit += breakdown.profit_total;
            per_bill.push(breakdown);
        }

        debug!(
            bills = per_bill.len(),
            total_profit = %grand.total_profit,
            "reconciled bill collection"
        );

        ProfitReport { per_bill, grand }
    }

    fn reconcile_bill(&self, bill: &Bill) -> BillBreakdown {
        let mut per_item = Vec::with_capacity(bill.items.len());
        let mut sale_from_items = Decimal::ZERO;
        let mut cost_total = Decimal::ZERO;
        let mut profit_total = Decimal::ZERO;

        for (index, item) in bill.items.iter().enumerate() {
            let breakdown = self.reconcile_item(index, item);
            sale_from_items += breakdown.sale_value;
            cost_total += breakdown.cost_value;
            profit_total += breakdown.profit;
            per_item.push(breakdown);
        }

        // The recorded total is authoritative for the sales figure; the
        // item sum only stands in when no usable total was recorded. An
        // empty bill with no recorded total contributes zero.
        let sale_total = bill.total_amount.unwrap_or(sale_from_items);

        BillBreakdown {
            bill_id: bill.bill_number.clone(),
            date: bill.date,
            sale_total,
            cost_total,
            profit_total,
            per_item,
        }
    }

    fn reconcile_item(&self, index: usize, item: &LineItem) -> ItemBreakdown {
        let unit_cost = self.unit_cost(item);
        let quantity = Decimal::from(item.quantity);
        let sale_value = item.sale_price * quantity;
        let cost_value = unit_cost * quantity;

        ItemBreakdown {
            item_id: item
                .item_id
                .clone()
                .unwrap_or_else(|| (index + 1).to_string()),
            product_name: item.product_name.clone(),
            quantity: item.quantity,
            sale_price: item.sale_price,
            unit_cost,
            sale_value,
            cost_value,
            profit: (item.sale_price - unit_cost) * quantity,
        }
    }

    /// Resolves an item's unit cost.
    ///
    /// A valid decoded purchase code always wins; the legacy plain
    /// `purchase_price` field is consulted only when the code is invalid,
    /// and zero is the last resort.
    fn unit_cost(&self, item: &LineItem) -> Decimal {
        let decoded = PurchaseCode::decode(&item.purchase_code);
        if decoded.valid {
            return Decimal::from(decoded.value);
        }
        item.purchase_price.unwrap_or(Decimal::ZERO)
    }
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new()
    }
}
