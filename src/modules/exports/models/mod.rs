pub mod layout;

pub use layout::{ItemRow, ReportLayout, TotalsRow, COLUMNS};
