//! LoomLedger profit-reporting core
//!
//! Decodes the handloom shop's obfuscated purchase codes and reconciles
//! gross profit, COGS, and sales across a bill collection, then renders the
//! same numbers on three surfaces: a text table, an Excel workbook, and a
//! PDF report.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::billing;
pub use modules::codec;
pub use modules::exports;
pub use modules::reconcile;
