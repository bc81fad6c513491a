// Billing module: read-only bill inputs handed over by the calling layer

pub mod models;

use std::io::Read;

use crate::core::Result;

pub use models::{Bill, LineItem};

/// Reads a JSON array of bills from any reader.
///
/// This is the one fallible step of ingestion: a document that is not a bill
/// array is rejected, while malformed fields inside an individual bill
/// degrade silently (see the model deserializers).
pub fn load_bills<R: Read>(reader: R) -> Result<Vec<Bill>> {
    let bills = serde_json::from_reader(reader)?;
    Ok(bills)
}
