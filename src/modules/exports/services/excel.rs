// Excel export surface, written with rust_xlsxwriter.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::info;

use crate::core::Result;
use crate::modules::exports::models::{ReportLayout, COLUMNS};

const MONEY_FORMAT: &str = "0.00";

/// Writes a report layout into an `.xlsx` workbook.
///
/// Amounts arrive already display-rounded from the layout and are written as
/// numbers with a two-decimal cell format, so the workbook shows exactly the
/// strings the table and PDF surfaces print.
pub struct ExcelWriter;

impl ExcelWriter {
    pub fn new() -> Self {
        Self
    }

    /// Writes the workbook to a file path.
    pub fn write_file(&self, layout: &ReportLayout, path: &std::path::Path) -> Result<()> {
        let mut workbook = self.build(layout)?;
        workbook.save(path)?;
        info!(path = %path.display(), rows = layout.rows.len(), "wrote Excel report");
        Ok(())
    }

    /// Writes the workbook to an in-memory buffer.
    pub fn write_buffer(&self, layout: &ReportLayout) -> Result<Vec<u8>> {
        let mut workbook = self.build(layout)?;
        Ok(workbook.save_to_buffer()?)
    }

    fn build(&self, layout: &ReportLayout) -> Result<Workbook> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Profit Report")?;

        let bold = Format::new().set_bold();
        let money = Format::new().set_num_format(MONEY_FORMAT);
        let bold_money = Format::new().set_bold().set_num_format(MONEY_FORMAT);

        worksheet.write_string_with_format(0, 0, &layout.title, &bold)?;

        for (col, header) in COLUMNS.iter().enumerate() {
            worksheet.write_string_with_format(2, col as u16, *header, &bold)?;
        }

        let mut row_index = 3u32;
        for row in &layout.rows {
            worksheet.write_string(row_index, 0, &row.bill_no)?;
            worksheet.write_string(row_index, 1, &row.date)?;
            worksheet.write_string(row_index, 2, &row.product)?;
            worksheet.write_number(row_index, 3, f64::from(row.quantity))?;
            self.write_amount(worksheet, row_index, 4, row.sale_price, &money)?;
            self.write_amount(worksheet, row_index, 5, row.unit_cost, &money)?;
            self.write_amount(worksheet, row_index, 6, row.profit, &money)?;
            row_index += 1;
        }

        row_index += 1;
        worksheet.write_string_with_format(row_index, 0, "Totals", &bold)?;
        worksheet.write_string_with_format(row_index, 3, "Sales", &bold)?;
        self.write_amount(worksheet, row_index, 4, layout.totals.sales, &bold_money)?;
        row_index += 1;
        worksheet.write_string_with_format(row_index, 3, "COGS", &bold)?;
        self.write_amount(worksheet, row_index, 4, layout.totals.cost, &bold_money)?;
        row_index += 1;
        worksheet.write_string_with_format(row_index, 3, "Profit", &bold)?;
        self.write_amount(worksheet, row_index, 4, layout.totals.profit, &bold_money)?;

        worksheet.set_column_width(0, 12)?;
        worksheet.set_column_width(1, 12)?;
        worksheet.set_column_width(2, 32)?;
        for col in 3..=6u16 {
            worksheet.set_column_width(col, 12)?;
        }

        Ok(workbook)
    }

    fn write_amount(
        &self,
        worksheet: &mut Worksheet,
        row: u32,
        col: u16,
        amount: Decimal,
        format: &Format,
    ) -> Result<()> {
        // Amounts are rounded to two decimals upstream, so the f64
        // conversion is exact for any realistic shop figure.
        worksheet.write_number_with_format(row, col, amount.to_f64().unwrap_or(0.0), format)?;
        Ok(())
    }
}

impl Default for ExcelWriter {
    fn default() -> Self {
        Self::new()
    }
}
