pub mod billing;
pub mod codec;
pub mod exports;
pub mod reconcile;
