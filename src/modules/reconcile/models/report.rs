use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Profit report over a bill collection
///
/// Recomputed from scratch on every invocation and never persisted. All
/// amounts are full-precision; rounding happens only in the presentation
/// adapters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfitReport {
    /// Per-bill breakdowns in the order the bills were supplied
    pub per_bill: Vec<BillBreakdown>,
    /// Totals across the whole collection
    pub grand: GrandTotals,
}

/// Profit figures for one bill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillBreakdown {
    /// The bill's number, reused as its identity
    pub bill_id: String,
    /// Bill date when recorded
    pub date: Option<NaiveDate>,
    /// The bill's sales contribution: recorded total when present,
    /// otherwise the sum of its items' sale values
    pub sale_total: Decimal,
    /// Decoded cost of goods sold across the bill's items
    pub cost_total: Decimal,
    /// Sum of per-item profits
    pub profit_total: Decimal,
    /// Per-item breakdowns in bill order
    pub per_item: Vec<ItemBreakdown>,
}

/// Profit figures for one line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemBreakdown {
    /// Item identifier from the source, or its 1-based position in the bill
    pub item_id: String,
    /// Product description
    pub product_name: String,
    /// Units sold
    pub quantity: u32,
    /// Sale price per unit
    pub sale_price: Decimal,
    /// Unit cost recovered from the purchase code (or the legacy plain
    /// field, or zero when neither is usable)
    pub unit_cost: Decimal,
    /// `sale_price × quantity`
    pub sale_value: Decimal,
    /// `unit_cost × quantity`
    pub cost_value: Decimal,
    /// `(sale_price − unit_cost) × quantity`
    pub profit: Decimal,
}

/// Totals across a bill collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrandTotals {
    pub total_sales: Decimal,
    pub total_cost: Decimal,
    pub total_profit: Decimal,
}

impl GrandTotals {
    pub fn zero() -> Self {
        Self {
            total_sales: Decimal::ZERO,
            total_cost: Decimal::ZERO,
            total_profit: Decimal::ZERO,
        }
    }
}

impl ProfitReport {
    /// Total number of line items across all bills
    pub fn item_count(&self) -> usize {
        self.per_bill.iter().map(|b| b.per_item.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.per_bill.is_empty()
    }
}
