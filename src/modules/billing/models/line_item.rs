// A bill line item as recorded by the shop front end.
//
// Read-only input to the reconciliation pipeline. The true unit cost is not
// stored here as a plain number: it lives in `purchase_code`, and only the
// codec can recover it. `purchase_price` is a legacy plain-cost field some
// older bills carry; a valid decoded code always takes precedence over it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::de;

/// A single product line on a bill
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Item identifier when the source assigned one
    #[serde(default)]
    pub item_id: Option<String>,

    /// Product description as printed on the bill
    #[serde(default)]
    pub product_name: String,

    /// Units sold; malformed or non-positive input coerces to 0, which
    /// removes the item from aggregation without erroring
    #[serde(default, deserialize_with = "de::lenient_quantity")]
    pub quantity: u32,

    /// Sale price per unit
    #[serde(default, deserialize_with = "de::lenient_amount")]
    pub sale_price: Decimal,

    /// Obfuscated unit cost, decoded by the codec at report time
    #[serde(default)]
    pub purchase_code: String,

    /// Plain unit cost on legacy bills, used only when the code is invalid
    #[serde(default, deserialize_with = "de::lenient_opt_amount")]
    pub purchase_price: Option<Decimal>,
}

impl LineItem {
    /// Sale revenue for this line: `sale_price × quantity`
    pub fn sale_value(&self) -> Decimal {
        self.sale_price * Decimal::from(self.quantity)
    }
}
