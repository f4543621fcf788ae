use bon::Builder;
use serde::Serialize;

use crate::Result;
use crate::types::ExternalOrder;

pub const REQUEST_EXTERNAL_QUOTE_ROUTE: &str = "/v0/matching-engine/quote";
pub const ASSEMBLE_EXTERNAL_MATCH_ROUTE: &str = "/v0/matching-engine/assemble-external-match";
pub const REQUEST_EXTERNAL_MATCH_ROUTE: &str = "/v0/matching-engine/request-external-match";

/// Query parameters shared by the gas sponsorship aware routes.
#[derive(Serialize)]
struct GasSponsorshipQuery<'a> {
    disable_gas_sponsorship: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    refund_address: Option<&'a str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    refund_native_eth: bool,
}

impl GasSponsorshipQuery<'_> {
    fn path(&self, route: &str) -> Result<String> {
        Ok(format!("{route}?{}", serde_html_form::to_string(self)?))
    }
}

/// Options for [`Client::request_quote_with_options`](crate::Client::request_quote_with_options).
#[non_exhaustive]
#[derive(Builder, Clone, Debug, Default, Eq, PartialEq)]
#[builder(on(String, into))]
pub struct RequestQuoteOptions {
    #[builder(default)]
    pub disable_gas_sponsorship: bool,
    /// Where the gas refund goes; the receiver by default.
    pub gas_refund_address: Option<String>,
    /// Refund in native ETH instead of the buy token.
    #[builder(default)]
    pub refund_native_eth: bool,
}

impl RequestQuoteOptions {
    /// Path and query for the quote route. `disable_gas_sponsorship` is always sent.
    pub fn request_path(&self) -> Result<String> {
        GasSponsorshipQuery {
            disable_gas_sponsorship: self.disable_gas_sponsorship,
            refund_address: self.gas_refund_address.as_deref(),
            refund_native_eth: self.refund_native_eth,
        }
        .path(REQUEST_EXTERNAL_QUOTE_ROUTE)
    }
}

/// Options for [`Client::assemble_quote_with_options`](crate::Client::assemble_quote_with_options).
#[non_exhaustive]
#[derive(Builder, Clone, Debug, Default, Eq, PartialEq)]
#[builder(on(String, into))]
pub struct AssembleQuoteOptions {
    /// Ask the server to estimate gas for the settlement transaction.
    #[builder(default)]
    pub do_gas_estimation: bool,
    /// Address that receives the buy side; the transaction sender by default.
    pub receiver_address: Option<String>,
    /// Replaces the quoted order, within the bounds the quote allows.
    pub updated_order: Option<ExternalOrder>,
    #[builder(default)]
    pub request_gas_sponsorship: bool,
    pub gas_refund_address: Option<String>,
}

impl AssembleQuoteOptions {
    /// Path and query for the assemble route.
    ///
    /// Without gas sponsorship or a refund address the bare route is used, matching requests
    /// from clients that predate sponsorship.
    pub fn request_path(&self) -> Result<String> {
        if !self.request_gas_sponsorship && self.gas_refund_address.is_none() {
            return Ok(ASSEMBLE_EXTERNAL_MATCH_ROUTE.to_owned());
        }

        GasSponsorshipQuery {
            disable_gas_sponsorship: !self.request_gas_sponsorship,
            refund_address: self.gas_refund_address.as_deref(),
            refund_native_eth: false,
        }
        .path(ASSEMBLE_EXTERNAL_MATCH_ROUTE)
    }
}

/// Options for [`Client::request_external_match_with_options`](crate::Client::request_external_match_with_options).
#[non_exhaustive]
#[derive(Builder, Clone, Debug, Default, Eq, PartialEq)]
#[builder(on(String, into))]
pub struct ExternalMatchOptions {
    #[builder(default)]
    pub do_gas_estimation: bool,
    pub receiver_address: Option<String>,
    #[builder(default)]
    pub disable_gas_sponsorship: bool,
    pub gas_refund_address: Option<String>,
    #[builder(default)]
    pub refund_native_eth: bool,
}

impl ExternalMatchOptions {
    pub fn request_path(&self) -> Result<String> {
        GasSponsorshipQuery {
            disable_gas_sponsorship: self.disable_gas_sponsorship,
            refund_address: self.gas_refund_address.as_deref(),
            refund_native_eth: self.refund_native_eth,
        }
        .path(REQUEST_EXTERNAL_MATCH_ROUTE)
    }
}
