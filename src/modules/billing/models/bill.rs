// A bill as recorded by the shop front end.
//
// Read-only input to the reconciliation pipeline. `total_amount` is the
// authoritative recorded sales total; when it is absent or malformed the
// pipeline falls back to summing the line items instead.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::de;
use super::line_item::LineItem;

/// A customer bill with its ordered line items
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Bill number as printed; the shop reuses it as the bill's identity
    #[serde(default, deserialize_with = "de::lenient_string")]
    pub bill_number: String,

    /// Bill date; unparseable dates are treated as unrecorded
    #[serde(default, deserialize_with = "de::lenient_date")]
    pub date: Option<NaiveDate>,

    /// Recorded sales total; `None` when absent or non-numeric
    #[serde(default, deserialize_with = "de::lenient_opt_amount")]
    pub total_amount: Option<Decimal>,

    /// Line items in bill order
    #[serde(default)]
    pub items: Vec<LineItem>,
}
