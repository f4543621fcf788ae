use std::result::Result as StdResult;
use std::str::FromStr as _;

use chrono::{DateTime, Utc};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::{TimestampMilliSeconds, serde_as};

use crate::Result;
use crate::codec::IntegerLiteral;
use crate::error::Error;
use crate::types::{Decimal, ExternalOrder, OrderSide, U256};

/// Amounts a match settles at.
#[non_exhaustive]
#[serde_as]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ApiExternalMatchResult {
    pub quote_mint: String,
    pub base_mint: String,
    #[serde_as(as = "IntegerLiteral")]
    pub quote_amount: U256,
    #[serde_as(as = "IntegerLiteral")]
    pub base_amount: U256,
    /// Side from the external party's point of view.
    pub direction: OrderSide,
}

#[non_exhaustive]
#[serde_as]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct FeeTake {
    #[serde_as(as = "IntegerLiteral")]
    pub relayer_fee: U256,
    #[serde_as(as = "IntegerLiteral")]
    pub protocol_fee: U256,
}

impl FeeTake {
    #[must_use]
    pub fn total(&self) -> U256 {
        self.relayer_fee.saturating_add(self.protocol_fee)
    }
}

#[non_exhaustive]
#[serde_as]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ApiExternalAssetTransfer {
    pub mint: String,
    #[serde_as(as = "IntegerLiteral")]
    pub amount: U256,
}

/// Price as reported by the server, quote units per base unit.
#[non_exhaustive]
#[serde_as]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ApiTimestampedPrice {
    pub price: String,
    #[serde_as(as = "TimestampMilliSeconds<i64>")]
    pub timestamp: DateTime<Utc>,
}

impl ApiTimestampedPrice {
    pub fn as_decimal(&self) -> Result<Decimal> {
        Decimal::from_str(&self.price)
            .or_else(|_e| Decimal::from_scientific(&self.price))
            .map_err(|e| Error::codec(format!("unparseable price {}: {e}", self.price)))
    }
}

/// A quote as issued by the server. Re-encoded verbatim when it is assembled.
#[non_exhaustive]
#[serde_as]
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ApiExternalQuote {
    pub order: ExternalOrder,
    pub match_result: ApiExternalMatchResult,
    pub fees: FeeTake,
    pub send: ApiExternalAssetTransfer,
    pub receive: ApiExternalAssetTransfer,
    pub price: ApiTimestampedPrice,
    #[serde_as(as = "TimestampMilliSeconds<i64>")]
    pub timestamp: DateTime<Utc>,
    /// Fields this client does not model. The server signed them, so they go back unchanged.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

const QUOTE_FIELDS: [&str; 7] = [
    "order",
    "match_result",
    "fees",
    "send",
    "receive",
    "price",
    "timestamp",
];

impl<'de> Deserialize<'de> for ApiExternalQuote {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        #[serde_as]
        #[derive(Deserialize)]
        struct Known {
            order: ExternalOrder,
            match_result: ApiExternalMatchResult,
            fees: FeeTake,
            send: ApiExternalAssetTransfer,
            receive: ApiExternalAssetTransfer,
            price: ApiTimestampedPrice,
            #[serde_as(as = "TimestampMilliSeconds<i64>")]
            timestamp: DateTime<Utc>,
        }

        // Buffered as a map: flattened deserialization does not carry arbitrary precision
        // numbers through.
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;
        let known: Known =
            serde_json::from_value(Value::Object(fields.clone())).map_err(de::Error::custom)?;
        fields.retain(|name, _| !QUOTE_FIELDS.contains(&name.as_str()));

        Ok(Self {
            order: known.order,
            match_result: known.match_result,
            fees: known.fees,
            send: known.send,
            receive: known.receive,
            price: known.price,
            timestamp: known.timestamp,
            extra: fields,
        })
    }
}

/// Quote plus the server's signature over it, the shape `assemble` expects.
#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ApiSignedQuote {
    pub quote: ApiExternalQuote,
    pub signature: String,
}

#[non_exhaustive]
#[serde_as]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GasSponsorshipInfo {
    /// Amount refunded to the caller, in wei when `refund_native_eth` is set and in the buy
    /// token otherwise.
    #[serde_as(as = "IntegerLiteral")]
    pub refund_amount: U256,
    pub refund_native_eth: bool,
    #[serde(default)]
    pub refund_address: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SignedGasSponsorshipInfo {
    pub gas_sponsorship_info: GasSponsorshipInfo,
    #[serde(default)]
    pub signature: Option<String>,
}

/// A quote the caller can hand back to [`Client::assemble_quote`](crate::Client::assemble_quote).
#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct SignedExternalQuote {
    pub quote: ApiExternalQuote,
    pub signature: String,
    pub gas_sponsorship_info: Option<SignedGasSponsorshipInfo>,
}

impl SignedExternalQuote {
    /// Amount the caller receives, net of fees.
    #[must_use]
    pub fn receive_amount(&self) -> U256 {
        self.quote.receive.amount
    }

    #[must_use]
    pub fn send_amount(&self) -> U256 {
        self.quote.send.amount
    }

    pub fn price(&self) -> Result<Decimal> {
        self.quote.price.as_decimal()
    }

    /// The `{quote, signature}` pair without any gas sponsorship metadata.
    #[must_use]
    pub fn to_api_signed_quote(&self) -> ApiSignedQuote {
        ApiSignedQuote {
            quote: self.quote.clone(),
            signature: self.signature.clone(),
        }
    }
}

impl From<ExternalQuoteResponse> for SignedExternalQuote {
    fn from(response: ExternalQuoteResponse) -> Self {
        let ApiSignedQuote { quote, signature } = response.signed_quote;
        Self {
            quote,
            signature,
            gas_sponsorship_info: response.gas_sponsorship_info,
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug, Serialize)]
pub struct ExternalQuoteRequest<'a> {
    pub external_order: &'a ExternalOrder,
}

#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ExternalQuoteResponse {
    pub signed_quote: ApiSignedQuote,
    #[serde(default)]
    pub gas_sponsorship_info: Option<SignedGasSponsorshipInfo>,
}
