//! Numeric request fields that accept either JSON numbers or text.
//!
//! Text goes through [`parse_quantity`], so `"12.5g"` reads as `12.5` and
//! unparseable input reads as `0`.

use nutrilog_engine::scale::{parse_quantity, quantity_or_zero};
use serde::{Deserialize, Deserializer};

fn from_value<E: serde::de::Error>(value: serde_json::Value) -> Result<Option<f64>, E> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(n) => Ok(Some(quantity_or_zero(n.as_f64().unwrap_or(0.0)))),
        serde_json::Value::String(s) if s.trim().is_empty() => Ok(None),
        serde_json::Value::String(s) => Ok(Some(parse_quantity(&s))),
        other => Err(E::custom(format!("expected number or string, got {other}"))),
    }
}

/// A quantity; absent, null or blank reads as `0`.
pub fn quantity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(from_value::<D::Error>(value)?.unwrap_or(0.0))
}

/// A quantity that may be left out; null or blank reads as `None`.
pub fn optional_quantity<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    from_value::<D::Error>(value)
}
