#![allow(dead_code, reason = "shared across test binaries")]

use httpmock::MockServer;
use renegade_external_match_client::types::{ExternalOrder, OrderSide, U256};
use renegade_external_match_client::{Client, ClientConfig};
use secrecy::SecretString;
use tracing_subscriber::EnvFilter;
use url::Url;

pub const API_KEY: &str = "test-api-key";
pub const API_SECRET: &str = "cmVuZWdhZGUtdGVzdC1zZWNyZXQta2V5LTMyYnl0ZXM=";

/// Larger than both 2^53 and u64::MAX.
pub const BIG_QUOTE_AMOUNT: &str = "98765432109876543210987654321";

pub const SCENARIO_ORDER_BODY: &str = r#"{"external_order":{"quote_mint":"0xA","base_mint":"0xB","side":"Buy","base_amount":0,"quote_amount":20000000,"exact_base_output":0,"exact_quote_output":0,"min_fill_size":0}}"#;

/// Routes client logs to the test harness; set `RUST_LOG` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn client(server: &MockServer) -> Client {
    init_tracing();
    let host = Url::parse(&server.base_url()).expect("mock server url");
    let config = ClientConfig::new(host, API_KEY.to_owned(), SecretString::from(API_SECRET));
    Client::new(config).expect("client")
}

pub fn order() -> ExternalOrder {
    ExternalOrder::builder()
        .quote_mint("0xA")
        .base_mint("0xB")
        .side(OrderSide::Buy)
        .quote_amount(U256::from(20_000_000))
        .build()
}

pub fn quote_json() -> String {
    format!(
        r#"{{
            "quote": {{
                "order": {{
                    "quote_mint": "0xA",
                    "base_mint": "0xB",
                    "side": "Buy",
                    "base_amount": 0,
                    "quote_amount": 20000000,
                    "exact_base_output": 0,
                    "exact_quote_output": 0,
                    "min_fill_size": 0
                }},
                "match_result": {{
                    "quote_mint": "0xA",
                    "base_mint": "0xB",
                    "quote_amount": {BIG_QUOTE_AMOUNT},
                    "base_amount": 1000000000000000000,
                    "direction": "Buy"
                }},
                "fees": {{ "relayer_fee": 1000, "protocol_fee": 250 }},
                "send": {{ "mint": "0xA", "amount": {BIG_QUOTE_AMOUNT} }},
                "receive": {{ "mint": "0xB", "amount": 999999999999998750 }},
                "price": {{ "price": "0.0000000098765432", "timestamp": 1700000000000 }},
                "timestamp": 1700000000500
            }},
            "signature": "c2VydmVyLXNpZ25hdHVyZQ"
        }}"#
    )
}

pub fn quote_response_json() -> String {
    format!(
        r#"{{
            "signed_quote": {},
            "gas_sponsorship_info": {{
                "gas_sponsorship_info": {{
                    "refund_amount": 5000000000000000,
                    "refund_native_eth": true,
                    "refund_address": null
                }},
                "signature": "Z2FzLXNpZ25hdHVyZQ"
            }}
        }}"#,
        quote_json()
    )
}

pub fn match_response_json() -> String {
    format!(
        r#"{{
            "match_bundle": {{
                "match_result": {{
                    "quote_mint": "0xA",
                    "base_mint": "0xB",
                    "quote_amount": {BIG_QUOTE_AMOUNT},
                    "base_amount": 1000000000000000000,
                    "direction": "Buy"
                }},
                "fees": {{ "relayer_fee": 1000, "protocol_fee": 250 }},
                "receive": {{ "mint": "0xB", "amount": 999999999999998750 }},
                "send": {{ "mint": "0xA", "amount": {BIG_QUOTE_AMOUNT} }},
                "settlement_tx": {{
                    "to": "0x000000000000000000000000000000000000dead",
                    "data": "0xc0ffee",
                    "value": "0x0"
                }}
            }},
            "gas_sponsored": false
        }}"#
    )
}
