//! Integration tests for infrastructure crate
//!
//! Tests cover:
//! - HTTP processing collaborator against a mock server
//! - HTTP log sink delivery

use std::time::Duration;

use application::ApplicationError;
use application::ports::{LogSinkPort, MessageProcessorPort};
use chrono::Utc;
use domain::{AppError, InboundMessage, LogEntry, LogLevel};
use infrastructure::{HttpLogSink, HttpMessageProcessor};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn message() -> InboundMessage {
    InboundMessage {
        from: "+15551234567".to_string(),
        body: "Invoice attached".to_string(),
        media_urls: vec![
            "https://media.example.com/a".to_string(),
            "https://media.example.com/b".to_string(),
        ],
        timestamp: Utc::now(),
    }
}

// ============================================================================
// Processing collaborator
// ============================================================================

mod processor_tests {
    use super::*;

    fn processor(server: &MockServer) -> HttpMessageProcessor {
        HttpMessageProcessor::new(format!("{}/process", server.uri()), Duration::from_secs(5))
            .unwrap()
    }

    #[tokio::test]
    async fn posts_message_as_json() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/process"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({
                "from": "+15551234567",
                "body": "Invoice attached",
                "mediaUrls": ["https://media.example.com/a", "https://media.example.com/b"],
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true, "message": "Got it!"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = processor(&server).process(&message()).await.unwrap();
        assert!(result.success);
        assert_eq!(result.reply(), Some("Got it!"));
    }

    #[tokio::test]
    async fn failed_result_is_returned_not_raised() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": false, "error": "unreadable scan"})),
            )
            .mount(&server)
            .await;

        let result = processor(&server).process(&message()).await.unwrap();
        assert!(!result.success);
        assert_eq!(result.failure_reason(), Some("unreadable scan"));
    }

    #[tokio::test]
    async fn error_status_becomes_upstream_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(422).set_body_json(json!({"error": "unsupported file type"})),
            )
            .mount(&server)
            .await;

        let err = processor(&server).process(&message()).await.unwrap_err();
        match &err {
            ApplicationError::Upstream { status, message } => {
                assert_eq!(*status, 422);
                assert_eq!(message, "unsupported file type");
            },
            other => panic!("unexpected error: {other:?}"),
        }

        let normalized = AppError::from(err);
        assert_eq!(normalized.status_code(), 422);
        assert_eq!(normalized.message(), "unsupported file type");
    }

    #[tokio::test]
    async fn error_status_without_body_uses_status_text() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = processor(&server).process(&message()).await.unwrap_err();
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn malformed_body_is_external_service_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = processor(&server).process(&message()).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }

    #[tokio::test]
    async fn slow_processor_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"success": true}))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let processor = HttpMessageProcessor::new(
            format!("{}/process", server.uri()),
            Duration::from_millis(200),
        )
        .unwrap();
        let err = processor.process(&message()).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }

    #[tokio::test]
    async fn unreachable_processor_is_external_service_error() {
        let processor =
            HttpMessageProcessor::new("http://127.0.0.1:1/process", Duration::from_secs(1)).unwrap();
        let err = processor.process(&message()).await.unwrap_err();
        assert!(matches!(err, ApplicationError::ExternalService(_)));
    }
}

// ============================================================================
// Log sink
// ============================================================================

mod log_sink_tests {
    use super::*;

    #[tokio::test]
    async fn submits_entry_as_json() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/logs"))
            .and(body_partial_json(json!({
                "level": "error",
                "message": "Error processing SMS webhook",
                "error": "timeout",
            })))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let sink = HttpLogSink::new(format!("{}/logs", server.uri())).unwrap();
        let entry =
            LogEntry::new(LogLevel::Error, "Error processing SMS webhook").with_error(&"timeout");
        sink.submit(&entry).await.unwrap();
    }

    #[tokio::test]
    async fn collector_error_is_reported() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let sink = HttpLogSink::new(format!("{}/logs", server.uri())).unwrap();
        let entry = LogEntry::new(LogLevel::Error, "boom");
        let err = sink.submit(&entry).await.unwrap_err();
        assert!(err.to_string().contains("500"));
    }
}
