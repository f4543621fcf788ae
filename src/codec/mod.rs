//! JSON encoding that keeps on-chain integers exact.
//!
//! `serde_json` is compiled with `arbitrary_precision`, so a [`Value`] holds every number as the
//! literal the server sent. Domain types then map those literals onto [`U256`](crate::types::U256)
//! through [`IntegerLiteral`], and encode them back as bare integers.

mod integer;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use integer::IntegerLiteral;

use crate::Result;
use crate::error::Error;

/// Encoder/decoder shared by the transport and the request signer.
///
/// Encoding is deterministic: struct fields are written in declaration order and maps are
/// [`serde_json::Map`], which keeps keys sorted.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonCodec;

impl JsonCodec {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    pub fn encode<T: Serialize + ?Sized>(self, value: &T) -> Result<String> {
        Ok(serde_json::to_string(value)?)
    }

    /// Parses `text`, failing on malformed JSON.
    pub fn try_decode(self, text: &str) -> Result<Value> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parses `text`, passing it through as a JSON string if it is not valid JSON.
    ///
    /// Shape validation in [`JsonCodec::decode_as`] is where a passed-through body will fail.
    #[must_use]
    pub fn decode(self, text: &str) -> Value {
        match self.try_decode(text) {
            Ok(value) => value,
            #[cfg_attr(
                not(feature = "tracing"),
                expect(unused_variables, reason = "only reported through tracing")
            )]
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(error = %e, len = text.len(), "response body is not JSON, passing it through");
                Value::String(text.to_owned())
            }
        }
    }

    /// Converts a decoded [`Value`] into a domain type.
    pub fn decode_as<T: DeserializeOwned>(self, value: Value) -> Result<T> {
        #[cfg(feature = "tracing")]
        {
            let mut ignored = Vec::new();
            let result: std::result::Result<T, _> =
                serde_path_to_error::deserialize(serde_ignored::Deserializer::new(
                    value,
                    &mut |path: serde_ignored::Path<'_>| ignored.push(path.to_string()),
                ));

            match result {
                Ok(parsed) => {
                    if !ignored.is_empty() {
                        tracing::warn!(
                            r#type = std::any::type_name::<T>(),
                            ?ignored,
                            "response contained unknown fields"
                        );
                    }
                    Ok(parsed)
                }
                Err(e) => Err(Error::codec(format!(
                    "{} at `{}`: {}",
                    std::any::type_name::<T>(),
                    e.path(),
                    e.inner()
                ))),
            }
        }

        #[cfg(not(feature = "tracing"))]
        {
            serde_json::from_value(value).map_err(|e| {
                Error::codec(format!("{}: {e}", std::any::type_name::<T>()))
            })
        }
    }
}
