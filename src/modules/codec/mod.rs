// Codec module

pub mod purchase_code;

pub use purchase_code::{DecodedCost, PurchaseCode};
