use std::str::FromStr as _;

use alloy::primitives::U256;
use serde::de::{Error as _, Unexpected};
use serde::ser::Error as _;
use serde::{Deserialize as _, Deserializer, Serialize as _, Serializer};
use serde_json::{Number, Value};
use serde_with::{DeserializeAs, SerializeAs};

/// Carries a [`U256`] as a bare JSON integer literal.
///
/// Reads integer literals of any width, and for leniency decimal or `0x` strings.
/// Use with `#[serde_as(as = "IntegerLiteral")]`.
#[non_exhaustive]
#[derive(Clone, Copy, Debug)]
pub struct IntegerLiteral;

impl SerializeAs<U256> for IntegerLiteral {
    fn serialize_as<S: Serializer>(source: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        let number = Number::from_str(&source.to_string()).map_err(S::Error::custom)?;
        number.serialize(serializer)
    }
}

impl<'de> DeserializeAs<'de, U256> for IntegerLiteral {
    fn deserialize_as<D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(number) => {
                let literal = number.to_string();
                U256::from_str_radix(&literal, 10)
                    .or_else(|e| match number.as_f64() {
                        // Round integers past u64 read back out of a `Value` arrive as exact
                        // floats in shortest exponent form.
                        Some(float) if literal == format!("{float:e}") => {
                            U256::from_str_radix(&float.to_string(), 10)
                        }
                        _ => Err(e),
                    })
                    .map_err(|_e| {
                        D::Error::invalid_value(Unexpected::Other(&literal), &"an unsigned integer")
                    })
            }
            Value::String(text) => U256::from_str(text.trim()).map_err(|_e| {
                D::Error::invalid_value(Unexpected::Str(&text), &"an unsigned integer string")
            }),
            other => Err(D::Error::invalid_type(
                unexpected(&other),
                &"an unsigned integer",
            )),
        }
    }
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
        Value::Number(_) | Value::String(_) => Unexpected::Other("literal"),
    }
}
