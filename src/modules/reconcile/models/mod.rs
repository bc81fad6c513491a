pub mod report;

pub use report::{BillBreakdown, GrandTotals, ItemBreakdown, ProfitReport};
