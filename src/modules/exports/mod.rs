// Exports module: the three presentation surfaces of the profit report.
//
// Every surface renders from the shared `ReportLayout`, which is the only
// place amounts are rounded; the surfaces themselves never re-derive or
// re-round a number.

pub mod models;
pub mod services;

pub use models::{ItemRow, ReportLayout, TotalsRow};
pub use services::{ExcelWriter, PdfWriter, TableRenderer};
