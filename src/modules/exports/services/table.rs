// Plain-text table renderer, the on-screen report surface.

use crate::core::money;
use crate::modules::exports::models::{ItemRow, ReportLayout, COLUMNS};

const MIN_WIDTH: usize = 4;

/// Renders a report layout as an aligned text table.
pub struct TableRenderer;

impl TableRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, layout: &ReportLayout) -> String {
        let widths = self.column_widths(layout);
        let mut out = String::new();

        out.push_str(&layout.title);
        out.push('\n');
        out.push_str(&self.rule(&widths));

        out.push_str(&self.format_row(
            &widths,
            &COLUMNS.map(str::to_string),
        ));
        out.push_str(&self.rule(&widths));

        for row in &layout.rows {
            out.push_str(&self.format_row(&widths, &self.cells(row)));
        }

        out.push_str(&self.rule(&widths));
        let [sales, cost, profit] = layout.totals_text();
        out.push_str(&format!(
            "Bills: {}  |  Total Sales: {}  |  Total Cost: {}  |  Total Profit: {}\n",
            layout.bill_count, sales, cost, profit
        ));

        out
    }

    fn cells(&self, row: &ItemRow) -> [String; 7] {
        [
            row.bill_no.clone(),
            row.date.clone(),
            row.product.clone(),
            row.quantity.to_string(),
            money::format_amount(row.sale_price),
            money::format_amount(row.unit_cost),
            money::format_amount(row.profit),
        ]
    }

    fn column_widths(&self, layout: &ReportLayout) -> [usize; 7] {
        let mut widths = COLUMNS.map(|c| c.len().max(MIN_WIDTH));
        for row in &layout.rows {
            for (width, cell) in widths.iter_mut().zip(self.cells(row)) {
                *width = (*width).max(cell.len());
            }
        }
        widths
    }

    fn format_row(&self, widths: &[usize; 7], cells: &[String; 7]) -> String {
        let mut line = String::new();
        for (cell, &width) in cells.iter().zip(widths) {
            line.push_str(&format!("{:<width$}  ", cell, width = width));
        }
        line.truncate(line.trim_end().len());
        line.push('\n');
        line
    }

    fn rule(&self, widths: &[usize; 7]) -> String {
        // Two spaces of gutter between each pair of columns
        let total: usize = widths.iter().sum::<usize>() + (widths.len() - 1) * 2;
        let mut line = "-".repeat(total);
        line.push('\n');
        line
    }
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}
