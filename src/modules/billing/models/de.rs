// Lenient field deserializers for bill documents.
//
// Bill data arrives from the shop's front end, where quantities and amounts
// are free-form inputs: a field may be a JSON number, a numeric string, or
// garbage. One malformed field must never reject the document, so every
// numeric field degrades to zero (or to "absent" for optional fields) and
// aggregation carries on over the rest of the set.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::str::FromStr;

fn decimal_from_value(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        Value::String(s) => Decimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

/// Amount field: number or numeric string; anything else (or a negative,
/// which cannot occur on a real bill) coerces to zero.
pub fn lenient_amount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decimal_from_value(&value)
        .filter(|d| *d >= Decimal::ZERO)
        .unwrap_or(Decimal::ZERO))
}

/// Optional amount field: absent or malformed becomes `None`, which lets the
/// caller distinguish "no recorded amount" from an explicit zero.
pub fn lenient_opt_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decimal_from_value(&value).filter(|d| *d >= Decimal::ZERO))
}

/// Quantity field: non-numeric or negative coerces to zero, which excludes
/// the item from aggregation without erroring.
pub fn lenient_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let quantity = match &value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(quantity
        .filter(|q| *q > 0)
        .and_then(|q| u32::try_from(q).ok())
        .unwrap_or(0))
}

/// Identifier field: bill numbers are entered as strings but some exports
/// round-trip them as JSON numbers.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Date field: `YYYY-MM-DD` or an ISO timestamp prefix; anything else is
/// treated as unrecorded.
pub fn lenient_date<'de, D>(deserializer: D) -> Result<Option<chrono::NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s
            .get(0..10)
            .and_then(|prefix| chrono::NaiveDate::from_str(prefix).ok()),
        _ => None,
    })
}
