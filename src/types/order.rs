use bon::Builder;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::Result;
use crate::codec::IntegerLiteral;
use crate::error::Error;
use crate::types::{OrderSide, U256};

/// An order placed against the dark pool by a party outside it.
///
/// Exactly one of `base_amount`, `quote_amount`, `exact_base_output` or `exact_quote_output`
/// sizes the order; the rest stay zero.
#[non_exhaustive]
#[serde_as]
#[derive(Builder, Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[builder(on(String, into))]
pub struct ExternalOrder {
    pub quote_mint: String,
    pub base_mint: String,
    pub side: OrderSide,
    #[serde_as(as = "IntegerLiteral")]
    #[serde(default)]
    #[builder(default)]
    pub base_amount: U256,
    #[serde_as(as = "IntegerLiteral")]
    #[serde(default)]
    #[builder(default)]
    pub quote_amount: U256,
    #[serde_as(as = "IntegerLiteral")]
    #[serde(default)]
    #[builder(default)]
    pub exact_base_output: U256,
    #[serde_as(as = "IntegerLiteral")]
    #[serde(default)]
    #[builder(default)]
    pub exact_quote_output: U256,
    /// Smallest fill the order accepts; zero means any.
    #[serde_as(as = "IntegerLiteral")]
    #[serde(default)]
    #[builder(default)]
    pub min_fill_size: U256,
}

impl ExternalOrder {
    /// Checks the order is sized by a single amount before it is sent.
    ///
    /// `min_fill_size` is left to the server, which interprets it against the sizing amount.
    pub fn validate(&self) -> Result<()> {
        if self.quote_mint.trim().is_empty() || self.base_mint.trim().is_empty() {
            return Err(Error::validation("order mints must not be empty"));
        }

        let sizes = [
            self.base_amount,
            self.quote_amount,
            self.exact_base_output,
            self.exact_quote_output,
        ];
        match sizes.iter().filter(|amount| !amount.is_zero()).count() {
            1 => Ok(()),
            0 => Err(Error::validation(
                "order must set one of base_amount, quote_amount, exact_base_output or exact_quote_output",
            )),
            _ => Err(Error::validation(
                "order may set only one of base_amount, quote_amount, exact_base_output or exact_quote_output",
            )),
        }
    }
}
