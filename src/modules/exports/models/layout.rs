// Shared layout step for the three report surfaces.
//
// The screen table, the Excel workbook, and the PDF all render from one
// `ReportLayout`, so the same dataset can never show different numbers on
// different surfaces. This is also the single place where full-precision
// amounts are rounded to display scale.

use rust_decimal::Decimal;

use crate::core::money;
use crate::modules::reconcile::ProfitReport;

/// Column headers shared by every surface
pub const COLUMNS: [&str; 7] = [
    "Bill No",
    "Date",
    "Product",
    "Qty",
    "Sale Price",
    "Unit Cost",
    "Profit",
];

const DATE_FORMAT: &str = "%d-%m-%Y";

/// One rendered line-item row
///
/// Amounts are already display-rounded; text for them must come from
/// [`money::format_amount`] so every surface prints identical strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRow {
    pub bill_no: String,
    pub date: String,
    pub product: String,
    pub quantity: u32,
    pub sale_price: Decimal,
    pub unit_cost: Decimal,
    pub profit: Decimal,
}

/// The grand-totals row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsRow {
    pub sales: Decimal,
    pub cost: Decimal,
    pub profit: Decimal,
}

/// A profit report flattened into rows ready for rendering
#[derive(Debug, Clone)]
pub struct ReportLayout {
    pub title: String,
    pub rows: Vec<ItemRow>,
    pub totals: TotalsRow,
    pub bill_count: usize,
}

impl ReportLayout {
    /// Flattens a report into display rows.
    ///
    /// Bills without items produce no rows but still count toward the
    /// totals, which come from the report's grand figures, not from
    /// re-summing the rows.
    pub fn from_report(report: &ProfitReport, title: impl Into<String>) -> Self {
        let mut rows = Vec::with_capacity(report.item_count());

        for bill in &report.per_bill {
            let date = bill
                .date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_else(|| "-".to_string());

            for item in &bill.per_item {
                rows.push(ItemRow {
                    bill_no: bill.bill_id.clone(),
                    date: date.clone(),
                    product: item.product_name.clone(),
                    quantity: item.quantity,
                    sale_price: money::round_display(item.sale_price),
                    unit_cost: money::round_display(item.unit_cost),
                    profit: money::round_display(item.profit),
                });
            }
        }

        Self {
            title: title.into(),
            rows,
            totals: TotalsRow {
                sales: money::round_display(report.grand.total_sales),
                cost: money::round_display(report.grand.total_cost),
                profit: money::round_display(report.grand.total_profit),
            },
            bill_count: report.per_bill.len(),
        }
    }

    /// The totals row as formatted text: sales, COGS, profit
    pub fn totals_text(&self) -> [String; 3] {
        [
            money::format_amount(self.totals.sales),
            money::format_amount(self.totals.cost),
            money::format_amount(self.totals.profit),
        ]
    }
}
