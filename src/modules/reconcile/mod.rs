// Reconciliation module

pub mod models;
pub mod services;

pub use models::{BillBreakdown, GrandTotals, ItemBreakdown, ProfitReport};
pub use services::Reconciler;
