//! Request and response records for the external match API.
//!
//! Amounts are [`U256`] and travel as bare JSON integers so nothing is rounded on the way.

mod bundle;
mod order;
mod quote;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

pub use alloy::primitives::{Address, U256};
pub use bundle::{
    AssembleExternalMatchRequest, AtomicMatchApiBundle, ExternalMatchRequest,
    ExternalMatchResponse, SettlementTransaction,
};
pub use order::ExternalOrder;
pub use quote::{
    ApiExternalAssetTransfer, ApiExternalMatchResult, ApiExternalQuote, ApiSignedQuote,
    ApiTimestampedPrice, ExternalQuoteRequest, ExternalQuoteResponse, FeeTake,
    GasSponsorshipInfo, SignedExternalQuote, SignedGasSponsorshipInfo,
};
pub use rust_decimal::Decimal;

#[non_exhaustive]
#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize)]
pub enum OrderSide {
    Buy,
    Sell,
}
