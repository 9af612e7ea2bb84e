//! Tolerant deserializers for record fields.
//!
//! The store API keeps records exactly as they were submitted, without a
//! schema. The admin forms submit every field as a string, other clients
//! send numbers, and some records carry `null`. These helpers accept any
//! scalar so that one odd record never fails a whole list.
//!
//! Values that cannot be interpreted fall back to the field's empty value
//! (`""`, `0`, `None`) instead of failing.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Deserialize;
use serde::de::{Deserializer, IgnoredAny};

/// Any JSON value, reduced to what the record fields need.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    /// Arrays and objects.
    Other(IgnoredAny),
}

impl Scalar {
    fn into_text(self) -> String {
        match self {
            Self::Bool(b) => b.to_string(),
            Self::Int(n) => n.to_string(),
            Self::UInt(n) => n.to_string(),
            Self::Float(f) => f.to_string(),
            Self::Text(s) => s,
            Self::Other(_) => String::new(),
        }
    }

    fn into_decimal(self) -> Option<Decimal> {
        match self {
            Self::Int(n) => Some(Decimal::from(n)),
            Self::UInt(n) => Some(Decimal::from(n)),
            Self::Float(f) => Decimal::try_from(f).ok(),
            Self::Text(s) => {
                let s = s.trim();
                Decimal::from_str(s)
                    .or_else(|_| Decimal::from_scientific(s))
                    .ok()
            }
            Self::Bool(_) | Self::Other(_) => None,
        }
    }
}

fn scalar<'de, D>(deserializer: D) -> Result<Option<Scalar>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Scalar>::deserialize(deserializer)
}

/// Deserialize a text field from any scalar. `null` becomes `""`.
///
/// # Errors
///
/// Only fails if the input is not valid JSON.
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar(deserializer)?.map(Scalar::into_text).unwrap_or_default())
}

/// Deserialize an optional text field from any scalar.
///
/// `null` and blank strings become `None`; numbers become their digits.
///
/// # Errors
///
/// Only fails if the input is not valid JSON.
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar(deserializer)?
        .map(Scalar::into_text)
        .filter(|s| !s.trim().is_empty()))
}

/// Deserialize a decimal amount from a number or a numeric string.
///
/// `null`, blank and non-numeric values become zero.
///
/// # Errors
///
/// Only fails if the input is not valid JSON.
pub fn decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar(deserializer)?
        .and_then(Scalar::into_decimal)
        .unwrap_or_default())
}

/// Deserialize a unit count from a number or a numeric string.
///
/// Decimal values such as `"2.0"` are truncated. `null`, negative and
/// non-numeric values become zero.
///
/// # Errors
///
/// Only fails if the input is not valid JSON.
pub fn quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar(deserializer)?
        .and_then(Scalar::into_decimal)
        .and_then(|d| d.trunc().to_u32())
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "super::quantity")]
        quantity: u32,
        #[serde(default, deserialize_with = "super::decimal")]
        price: Decimal,
        #[serde(default, deserialize_with = "super::text")]
        name: String,
        #[serde(default, deserialize_with = "super::optional_text")]
        phone: Option<String>,
    }

    fn holder(json: &str) -> Holder {
        serde_json::from_str(json).expect("holder should decode")
    }

    #[test]
    fn test_quantity_shapes() {
        assert_eq!(holder(r#"{"quantity": 3}"#).quantity, 3);
        assert_eq!(holder(r#"{"quantity": " 12 "}"#).quantity, 12);
        assert_eq!(holder(r#"{"quantity": "2.0"}"#).quantity, 2);
        assert_eq!(holder(r#"{"quantity": 2.7}"#).quantity, 2);
        assert_eq!(holder(r#"{"quantity": null}"#).quantity, 0);
        assert_eq!(holder(r#"{"quantity": "many"}"#).quantity, 0);
        assert_eq!(holder(r#"{"quantity": -4}"#).quantity, 0);
        assert_eq!(holder(r#"{"quantity": 5000000000}"#).quantity, 0);
        assert_eq!(holder("{}").quantity, 0);
    }

    #[test]
    fn test_decimal_shapes() {
        assert_eq!(holder(r#"{"price": "19.90"}"#).price, Decimal::new(1990, 2));
        assert_eq!(holder(r#"{"price": 15.5}"#).price, Decimal::new(155, 1));
        assert_eq!(holder(r#"{"price": 7}"#).price, Decimal::new(7, 0));
        assert_eq!(holder(r#"{"price": ""}"#).price, Decimal::ZERO);
        assert_eq!(holder(r#"{"price": null}"#).price, Decimal::ZERO);
        assert_eq!(holder(r#"{"price": "gratis"}"#).price, Decimal::ZERO);
    }

    #[test]
    fn test_text_shapes() {
        assert_eq!(holder(r#"{"name": "Ana"}"#).name, "Ana");
        assert_eq!(holder(r#"{"name": null}"#).name, "");
        assert_eq!(holder(r#"{"name": 42}"#).name, "42");
        assert_eq!(holder(r#"{"name": true}"#).name, "true");
        assert_eq!(holder(r#"{"name": {"first": "Ana"}}"#).name, "");
    }

    #[test]
    fn test_optional_text_shapes() {
        assert_eq!(
            holder(r#"{"phone": "555-0101"}"#).phone.as_deref(),
            Some("555-0101")
        );
        assert_eq!(holder(r#"{"phone": 5550101}"#).phone.as_deref(), Some("5550101"));
        assert_eq!(holder(r#"{"phone": null}"#).phone, None);
        assert_eq!(holder(r#"{"phone": "  "}"#).phone, None);
        assert_eq!(holder("{}").phone, None);
    }
}
