use awslogs_forwarder::config::{Config, message_policy::MessagePolicy};
use awslogs_forwarder::forwarder::{ForwardError, Forwarder};
use awslogs_forwarder::handler::handler;
use awslogs_forwarder::http::get_client;
use awslogs_forwarder::logs::event::{AwsLogs, AwsLogsEvent};
use httpmock::prelude::*;
use lambda_runtime::{Context, LambdaEvent};
use serde_json::json;

mod common;

fn forwarder_for(server: &MockServer, policy: MessagePolicy) -> Forwarder {
    let config = Config {
        api_endpoint: server.url("/logs"),
        missing_message_policy: policy,
        http_timeout: Some(5),
        ..Config::default()
    };
    Forwarder::new(get_client(&config), &config)
}

#[tokio::test]
async fn test_forward_logs() {
    let server = MockServer::start();
    let logs_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/logs")
            .header("Content-Type", "application/json")
            .json_body(json!({
                "log_group": "/aws/lambda/checkout",
                "log_stream": "2024/05/01/[$LATEST]abc",
                "messages": ["START RequestId: 42", "hello", "END RequestId: 42"]
            }));
        then.status(200).body("accepted");
    });

    let forwarder = forwarder_for(&server, MessagePolicy::Abort);
    let event = common::aws_logs_event(&json!({
        "messageType": "DATA_MESSAGE",
        "owner": "123456789012",
        "logGroup": "/aws/lambda/checkout",
        "logStream": "2024/05/01/[$LATEST]abc",
        "subscriptionFilters": ["to-api"],
        "logEvents": [
            {"id": "1", "timestamp": 1_714_521_600_000_i64, "message": "START RequestId: 42"},
            {"id": "2", "timestamp": 1_714_521_600_001_i64, "message": "hello"},
            {"id": "3", "timestamp": 1_714_521_600_002_i64, "message": "END RequestId: 42"}
        ]
    }));

    let response = handler(&forwarder, LambdaEvent::new(event, Context::default()))
        .await
        .expect("forwarding should succeed");

    logs_mock.assert();
    assert_eq!(response.status_code, 200);
    assert_eq!(
        response.body,
        r#"{"message":"Logs processed successfully","log_group":"/aws/lambda/checkout","log_stream":"2024/05/01/[$LATEST]abc","log_count":3}"#
    );
}

#[tokio::test]
async fn test_forward_empty_batch() {
    let server = MockServer::start();
    let logs_mock = server.mock(|when, then| {
        when.method(POST).path("/logs").json_body(json!({
            "log_group": null,
            "log_stream": null,
            "messages": []
        }));
        then.status(200);
    });

    let forwarder = forwarder_for(&server, MessagePolicy::Abort);
    let result = forwarder
        .forward(&common::aws_logs_event(&json!({})))
        .await
        .expect("forwarding should succeed");

    logs_mock.assert();
    assert_eq!(result.log_count, 0);
}

#[tokio::test]
async fn test_upstream_failure_is_propagated() {
    let server = MockServer::start();
    let logs_mock = server.mock(|when, then| {
        when.method(POST).path("/logs");
        then.status(500).body("internal error");
    });

    let forwarder = forwarder_for(&server, MessagePolicy::Abort);
    let err = forwarder
        .forward(&common::aws_logs_event(
            &json!({"logEvents": [{"message": "a"}]}),
        ))
        .await
        .expect_err("forwarding should fail");

    logs_mock.assert();
    match err {
        ForwardError::Upstream { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "internal error");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_base64_sends_nothing() {
    let server = MockServer::start();
    let logs_mock = server.mock(|when, then| {
        when.method(POST).path("/logs");
        then.status(200);
    });

    let forwarder = forwarder_for(&server, MessagePolicy::Abort);
    let event = AwsLogsEvent {
        awslogs: AwsLogs {
            data: "this is not base64!".to_string(),
        },
    };

    let err = handler(&forwarder, LambdaEvent::new(event, Context::default()))
        .await
        .expect_err("forwarding should fail");

    assert!(matches!(
        err.downcast_ref::<ForwardError>(),
        Some(ForwardError::Decode(_))
    ));
    logs_mock.assert_hits(0);
}

#[tokio::test]
async fn test_skip_policy_drops_events_without_message() {
    let server = MockServer::start();
    let logs_mock = server.mock(|when, then| {
        when.method(POST).path("/logs").json_body(json!({
            "log_group": "G",
            "log_stream": "S",
            "messages": ["kept"]
        }));
        then.status(200);
    });

    let forwarder = forwarder_for(&server, MessagePolicy::Skip);
    let result = forwarder
        .forward(&common::aws_logs_event(&json!({
            "logGroup": "G",
            "logStream": "S",
            "logEvents": [{"id": "1"}, {"id": "2", "message": "kept"}]
        })))
        .await
        .expect("forwarding should succeed");

    logs_mock.assert();
    assert_eq!(result.log_count, 1);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_transport_error() {
    let config = Config {
        // Nothing listens on the discard port
        api_endpoint: "http://127.0.0.1:9/logs".to_string(),
        http_timeout: Some(2),
        ..Config::default()
    };
    let forwarder = Forwarder::new(get_client(&config), &config);

    let err = forwarder
        .forward(&common::aws_logs_event(&json!({"logEvents": []})))
        .await
        .expect_err("forwarding should fail");

    assert!(matches!(err, ForwardError::Transport(_)));
}
