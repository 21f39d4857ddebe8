//! End-to-end handler runs against a mocked service over real HTTP.

use std::cell::RefCell;

use checker_client::HttpCheckerApi;
use checker_core::{
    ClientConfig, CodeSubmission, PaymentOutcome, StatsView, ViewState, ViewStore, Workflow,
    mock::RecordingBrowser,
};
use httpmock::prelude::*;
use serde_json::json;

fn workflow(server: &MockServer) -> Workflow<HttpCheckerApi, RefCell<ViewState>, RecordingBrowser> {
    let config = ClientConfig::default()
        .with_api_base(server.url("/api"))
        .with_payment_base(server.base_url());
    Workflow::new(
        HttpCheckerApi::new(config.clone()).unwrap(),
        RefCell::new(ViewState::new()),
        RecordingBrowser::default(),
        config,
    )
}

#[tokio::test]
async fn submit_checks_once_and_refreshes_once() {
    let server = MockServer::start_async().await;
    let check = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/check");
            then.status(429).json_body(json!({
                "status": "error",
                "message": "You have used up all your API calls. Please purchase more API calls."
            }));
        })
        .await;
    let stats = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/stats");
            then.status(200)
                .json_body(json!({ "totalCalls": 10, "remainingCalls": 0 }));
        })
        .await;

    let wf = workflow(&server);
    wf.submit(CodeSubmission::new("int a = 5;")).await;

    check.assert_hits_async(1).await;
    stats.assert_hits_async(1).await;

    let state = wf.store().read();
    assert_eq!(
        state.result,
        "You have used up all your API calls. Please purchase more API calls."
    );
    assert_eq!(state.stats, StatsView::Summary(checker_core::QuotaSnapshot::new(10, 0)));
    assert!(state.pay_visible);
}

#[tokio::test]
async fn empty_submission_never_reaches_the_server() {
    let server = MockServer::start_async().await;
    let check = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/check");
            then.status(200).json_body(json!({ "result": "Valid" }));
        })
        .await;

    let wf = workflow(&server);
    wf.submit(CodeSubmission::new("   ")).await;

    check.assert_hits_async(0).await;
    assert_eq!(wf.store().read().result, "Please enter some code.");
}

#[tokio::test]
async fn payment_redirects_to_approval_url() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/paypal/makePayment")
                .query_param("amount", "1.00");
            then.status(200)
                .body("https://www.sandbox.paypal.com/cgi-bin/webscr?cmd=_express-checkout&token=EC-1");
        })
        .await;

    let wf = workflow(&server);
    let outcome = wf.buy_calls().await;

    let url = "https://www.sandbox.paypal.com/cgi-bin/webscr?cmd=_express-checkout&token=EC-1";
    assert_eq!(outcome, PaymentOutcome::Redirected(url.into()));
    assert_eq!(wf.browser().location().as_deref(), Some(url));
}
