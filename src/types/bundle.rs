use alloy::primitives::{Address, Bytes};
use serde::{Deserialize, Serialize};

use crate::types::{
    ApiExternalAssetTransfer, ApiExternalMatchResult, ApiSignedQuote, ExternalOrder, FeeTake,
    GasSponsorshipInfo, U256,
};

/// Transaction that settles a match on-chain. Submitting it is left to the caller's wallet.
///
/// Quantities use the Ethereum JSON-RPC hex encoding.
#[non_exhaustive]
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct SettlementTransaction {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub tx_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<U256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<U256>,
}

impl SettlementTransaction {
    /// Calldata, whichever of `input`/`data` the server filled in.
    #[must_use]
    pub fn calldata(&self) -> Option<&Bytes> {
        self.input.as_ref().or(self.data.as_ref())
    }
}

/// A match ready for settlement: resolved amounts plus the transaction that settles them.
#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AtomicMatchApiBundle {
    pub match_result: ApiExternalMatchResult,
    pub fees: FeeTake,
    pub receive: ApiExternalAssetTransfer,
    pub send: ApiExternalAssetTransfer,
    pub settlement_tx: SettlementTransaction,
}

#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ExternalMatchResponse {
    pub match_bundle: AtomicMatchApiBundle,
    #[serde(default)]
    pub gas_sponsored: bool,
    #[serde(default)]
    pub gas_sponsorship_info: Option<GasSponsorshipInfo>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Serialize)]
pub struct AssembleExternalMatchRequest<'a> {
    pub do_gas_estimation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_address: Option<&'a str>,
    pub signed_quote: ApiSignedQuote,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_order: Option<&'a ExternalOrder>,
}

#[non_exhaustive]
#[derive(Clone, Debug, Serialize)]
pub struct ExternalMatchRequest<'a> {
    pub do_gas_estimation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receiver_address: Option<&'a str>,
    pub external_order: &'a ExternalOrder,
}
