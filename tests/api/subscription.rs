use crate::helpers::{
    MockUi, REDIRECT_SECONDS, create_orchestrator, expect_busy_then_outcome, expect_no_request,
    expect_rejection,
};
use sslnotify::{MessageTarget, Outcome, RedirectState, ValidationError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path, query_param},
};

#[tokio::test]
async fn empty_email_is_shown_in_dialog_without_request() {
    // Arrange
    let server = MockServer::start().await;
    expect_no_request(&server).await;

    let mut ui = MockUi::new();
    expect_rejection(
        &mut ui,
        MessageTarget::Dialog,
        "Please specify the Email address.",
    );
    ui.expect_close_subscription_dialog().never();
    let orchestrator = create_orchestrator(&server, ui);

    // Act
    let outcome = orchestrator
        .create_subscription("", "example.com", "30")
        .await;

    // Assert
    assert_eq!(outcome, Err(ValidationError::MissingEmail));
}

#[tokio::test]
async fn malformed_email_is_shown_in_dialog_without_request() {
    let server = MockServer::start().await;
    expect_no_request(&server).await;

    let mut ui = MockUi::new();
    expect_rejection(
        &mut ui,
        MessageTarget::Dialog,
        "Please specify a valid Email address.",
    );
    let orchestrator = create_orchestrator(&server, ui);

    let outcome = orchestrator
        .create_subscription("me@localhost", "example.com", "30")
        .await;

    assert_eq!(outcome, Err(ValidationError::InvalidEmail));
}

#[tokio::test]
async fn remind_me_opens_dialog_for_valid_form() {
    let server = MockServer::start().await;
    expect_no_request(&server).await;

    let mut ui = MockUi::new();
    ui.expect_clear().times(2).return_const(());
    ui.expect_open_subscription_dialog()
        .withf(|title| {
            title
                == "Register to receive alerts via email starting from 14 days before the SSL certificate for example.com will expire."
        })
        .times(1)
        .return_const(());
    let orchestrator = create_orchestrator(&server, ui);

    let request = orchestrator.remind_me("example.com", "14").unwrap();

    assert_eq!(request.host().as_str(), "example.com");
    assert_eq!(request.days().get(), 14);
}

#[tokio::test]
async fn remind_me_keeps_dialog_closed_for_invalid_days() {
    let server = MockServer::start().await;

    let mut ui = MockUi::new();
    expect_rejection(
        &mut ui,
        MessageTarget::Page,
        "Please provide the number of days",
    );
    ui.expect_open_subscription_dialog().never();
    let orchestrator = create_orchestrator(&server, ui);

    assert_eq!(
        orchestrator.remind_me("example.com", "").unwrap_err(),
        ValidationError::MissingDays
    );
}

#[tokio::test]
async fn subscription_is_created_and_dialog_closed() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/user/me@example.com"))
        .and(query_param("domain", "example.com"))
        .and(query_param("days", "30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            serde_json::json!({ "Message": "Please check your inbox to confirm." }),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let mut ui = MockUi::new();
    ui.expect_close_subscription_dialog()
        .times(1)
        .return_const(());
    expect_busy_then_outcome(
        &mut ui,
        Outcome::Success("Please check your inbox to confirm.".to_string()),
    );
    let orchestrator = create_orchestrator(&server, ui);

    let outcome = orchestrator
        .create_subscription("me@example.com", "example.com", "30")
        .await;

    assert!(outcome.unwrap().is_success());
}

#[tokio::test]
async fn refused_subscription_shows_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "Message": "days value must be a positive number" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut ui = MockUi::new();
    ui.expect_close_subscription_dialog().return_const(());
    expect_busy_then_outcome(
        &mut ui,
        Outcome::Error("days value must be a positive number".to_string()),
    );
    let orchestrator = create_orchestrator(&server, ui);

    let outcome = orchestrator
        .create_subscription("me@example.com", "example.com", "30")
        .await;

    assert_eq!(
        outcome,
        Ok(Outcome::Error("days value must be a positive number".to_string()))
    );
}

#[tokio::test]
async fn confirmation_link_confirms_and_starts_countdown() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/user/me@example.com"))
        .and(query_param("uuid", "0b6c-42"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "Message": "Subscription confirmed" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut ui = MockUi::new();
    expect_busy_then_outcome(&mut ui, Outcome::Success("Subscription confirmed".to_string()));
    let orchestrator = create_orchestrator(&server, ui);

    let (outcome, redirect) = orchestrator
        .confirm_subscription("https://sslnotify.me/confirm.html?user=me%40example.com&uuid=0b6c-42")
        .await
        .unwrap();

    assert!(outcome.is_success());
    assert_eq!(redirect.state(), RedirectState::CountingDown(REDIRECT_SECONDS));
}

#[tokio::test]
async fn failed_cancellation_still_starts_countdown() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/user/me"))
        .and(query_param("uuid", "nope"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_json(serde_json::json!({ "Message": "invalid uuid" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut ui = MockUi::new();
    expect_busy_then_outcome(&mut ui, Outcome::Error("invalid uuid".to_string()));
    let orchestrator = create_orchestrator(&server, ui);

    let (outcome, redirect) = orchestrator
        .cancel_subscription("?user=me&uuid=nope")
        .await
        .unwrap();

    assert_eq!(outcome, Outcome::Error("invalid uuid".to_string()));
    assert_eq!(redirect.state(), RedirectState::CountingDown(REDIRECT_SECONDS));
}

#[tokio::test]
async fn link_without_token_is_rejected_without_request() {
    let server = MockServer::start().await;
    expect_no_request(&server).await;

    let mut ui = MockUi::new();
    expect_rejection(
        &mut ui,
        MessageTarget::Page,
        "The link does not carry a subscription token",
    );
    let orchestrator = create_orchestrator(&server, ui);

    let outcome = orchestrator.cancel_subscription("?user=me").await;

    assert!(matches!(outcome, Err(ValidationError::MissingToken)));
}

#[tokio::test]
async fn feedback_is_posted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/feedback/"))
        .and(body_json(serde_json::json!({
            "email": "me@example.com",
            "message": "Love it"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "Message": "Thanks for your feedback!" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut ui = MockUi::new();
    expect_busy_then_outcome(
        &mut ui,
        Outcome::Success("Thanks for your feedback!".to_string()),
    );
    let orchestrator = create_orchestrator(&server, ui);

    let (outcome, _redirect) = orchestrator
        .send_feedback(Some("me@example.com"), "Love it")
        .await
        .unwrap();

    assert!(outcome.is_success());
}
