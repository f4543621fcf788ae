mod common;

use std::str::FromStr as _;

use httpmock::Method::POST;
use httpmock::MockServer;
use renegade_external_match_client::auth::AUTH_HEADER;
use renegade_external_match_client::error::Kind;
use renegade_external_match_client::types::{
    ExternalQuoteResponse, OrderSide, SignedExternalQuote, U256,
};
use renegade_external_match_client::{AssembleQuoteOptions, ExternalMatchOptions};
use reqwest::StatusCode;

use crate::common::{BIG_QUOTE_AMOUNT, SCENARIO_ORDER_BODY};

const ASSEMBLE_PATH: &str = "/v0/matching-engine/assemble-external-match";

fn signed_quote() -> SignedExternalQuote {
    let response: ExternalQuoteResponse =
        serde_json::from_str(&common::quote_response_json()).expect("quote fixture");
    SignedExternalQuote::from(response)
}

fn default_assemble_body() -> String {
    format!(
        r#"{{"do_gas_estimation":false,"signed_quote":{}}}"#,
        serde_json::to_string(&signed_quote().to_api_signed_quote()).expect("serializes")
    )
}

#[tokio::test]
async fn default_assemble_sends_quote_without_sponsorship_metadata() -> anyhow::Result<()> {
    let body = default_assemble_body();
    assert!(
        body.contains(&format!(r#""quote_amount":{BIG_QUOTE_AMOUNT}"#)),
        "big amounts are re-sent as literals: {body}"
    );
    assert!(!body.contains("gas_sponsorship_info"), "metadata stripped");

    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(ASSEMBLE_PATH)
                .header_exists(AUTH_HEADER)
                .body(default_assemble_body());
            then.status(200)
                .header("content-type", "application/json")
                .body(common::match_response_json());
        })
        .await;

    let response = common::client(&server)
        .assemble_quote(&signed_quote())
        .await?
        .expect("bundle");

    let bundle = response.match_bundle;
    assert_eq!(
        bundle.send.amount,
        U256::from_str(BIG_QUOTE_AMOUNT)?,
        "exact send amount"
    );
    assert_eq!(bundle.match_result.direction, OrderSide::Buy, "direction");
    assert_eq!(
        bundle.settlement_tx.calldata().map(ToString::to_string),
        Some("0xc0ffee".to_owned()),
        "settlement calldata"
    );
    assert!(!response.gas_sponsored, "not sponsored");
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn default_assemble_has_no_query_string() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let with_query = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(ASSEMBLE_PATH)
                .query_param_exists("disable_gas_sponsorship");
            then.status(500);
        })
        .await;
    let bare = server
        .mock_async(|when, then| {
            when.method(POST).path(ASSEMBLE_PATH);
            then.status(204);
        })
        .await;

    let response = common::client(&server)
        .assemble_quote(&signed_quote())
        .await?;

    assert!(response.is_none(), "204 is an empty result");
    assert_eq!(with_query.hits_async().await, 0, "no query parameters");
    bare.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn requesting_sponsorship_adds_query_parameter() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(ASSEMBLE_PATH)
                .query_param("disable_gas_sponsorship", "false");
            then.status(204);
        })
        .await;

    let options = AssembleQuoteOptions::builder()
        .request_gas_sponsorship(true)
        .build();
    let response = common::client(&server)
        .assemble_quote_with_options(&signed_quote(), &options)
        .await?;

    assert!(response.is_none(), "empty");
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn assemble_options_are_merged_into_the_body() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let mut updated = common::order();
    updated.quote_amount = U256::from(10_000_000);
    let updated_json = serde_json::to_string(&updated)?;

    let expected = format!(
        r#"{{"do_gas_estimation":true,"receiver_address":"0xreceiver","signed_quote":{},"updated_order":{updated_json}}}"#,
        serde_json::to_string(&signed_quote().to_api_signed_quote())?
    );
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(ASSEMBLE_PATH).body(expected.as_str());
            then.status(204);
        })
        .await;

    let options = AssembleQuoteOptions::builder()
        .do_gas_estimation(true)
        .receiver_address("0xreceiver")
        .updated_order(updated)
        .build();
    common::client(&server)
        .assemble_quote_with_options(&signed_quote(), &options)
        .await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn unmodelled_quote_fields_reach_the_server() -> anyhow::Result<()> {
    let response = common::quote_response_json().replacen(
        r#""timestamp": 1700000000500"#,
        r#""timestamp": 1700000000500, "min_receive": 77"#,
        1,
    );
    let quote = SignedExternalQuote::from(serde_json::from_str::<ExternalQuoteResponse>(
        &response,
    )?);
    let expected = format!(
        r#"{{"do_gas_estimation":false,"signed_quote":{}}}"#,
        serde_json::to_string(&quote.to_api_signed_quote())?
    );
    assert!(expected.contains(r#""min_receive":77"#), "{expected}");

    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path(ASSEMBLE_PATH).body(expected.as_str());
            then.status(204);
        })
        .await;

    common::client(&server).assemble_quote(&quote).await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn assemble_failure_carries_status() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(ASSEMBLE_PATH);
            then.status(400).body("quote expired");
        })
        .await;

    let err = common::client(&server)
        .assemble_quote(&signed_quote())
        .await
        .expect_err("400");

    assert_eq!(err.kind(), Kind::Status, "kind");
    assert_eq!(err.status_code(), Some(StatusCode::BAD_REQUEST), "status");
    assert!(err.message().contains("quote expired"), "{err}");
    Ok(())
}

#[tokio::test]
async fn direct_match_wraps_the_order() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let expected = format!(
        r#"{{"do_gas_estimation":false,{}"#,
        SCENARIO_ORDER_BODY.trim_start_matches('{')
    );
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v0/matching-engine/request-external-match")
                .query_param("disable_gas_sponsorship", "true")
                .body(expected.as_str());
            then.status(200)
                .header("content-type", "application/json")
                .body(common::match_response_json());
        })
        .await;

    let options = ExternalMatchOptions::builder()
        .disable_gas_sponsorship(true)
        .build();
    let response = common::client(&server)
        .request_external_match_with_options(&common::order(), &options)
        .await?
        .expect("bundle");

    assert_eq!(
        response.match_bundle.match_result.quote_amount,
        U256::from_str(BIG_QUOTE_AMOUNT)?,
        "exact quote amount"
    );
    mock.assert_async().await;
    Ok(())
}
