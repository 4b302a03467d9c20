//! Property-based tests for webhook media extraction and payload validation
#![allow(clippy::unwrap_used)]

use std::collections::{BTreeSet, HashMap};

use application::{WebhookPayload, extract_media_urls, parse_media_count, validate};
use domain::ErrorKind;
use proptest::prelude::*;
use serde_json::json;

fn media_url(index: usize) -> String {
    format!("https://media.example.com/{index}")
}

fn form_with_media(present: &BTreeSet<usize>) -> HashMap<String, String> {
    let mut fields: HashMap<String, String> = present
        .iter()
        .map(|index| (format!("MediaUrl{index}"), media_url(*index)))
        .collect();
    fields.insert("From".to_string(), "+15551234567".to_string());
    fields.insert("Body".to_string(), "scan".to_string());
    fields
}

// ============================================================================
// Media extraction
// ============================================================================

mod media_extraction_tests {
    use super::*;

    proptest! {
        #[test]
        fn extracts_present_indices_below_count_in_order(
            count in 0usize..12,
            present in prop::collection::btree_set(0usize..16, 0..16),
        ) {
            let fields = form_with_media(&present);
            let expected: Vec<String> = present
                .iter()
                .filter(|index| **index < count)
                .map(|index| media_url(*index))
                .collect();

            prop_assert_eq!(extract_media_urls(&fields, count), expected);
        }

        #[test]
        fn declared_count_round_trips(count in 0usize..10_000) {
            prop_assert_eq!(parse_media_count(Some(&count.to_string())), Some(count));
        }

        #[test]
        fn non_numeric_count_is_rejected(raw in "[a-zA-Z-][a-zA-Z0-9]{0,8}") {
            prop_assert_eq!(parse_media_count(Some(&raw)), None);
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

mod validation_tests {
    use super::*;

    proptest! {
        #[test]
        fn non_empty_sender_and_body_pass(
            from in "\\+[0-9]{8,15}",
            body in "[a-zA-Z0-9 ]{1,80}",
        ) {
            let payload: WebhookPayload =
                validate(json!({"from": from.clone(), "body": body.clone()})).unwrap();
            prop_assert_eq!(payload.from, from);
            prop_assert_eq!(payload.body, body);
        }

        #[test]
        fn relative_media_paths_fail_validation(path in "/[a-z]{1,12}") {
            let err = validate::<WebhookPayload>(json!({
                "from": "+15551234567",
                "body": "scan",
                "mediaUrls": [path],
            }))
            .unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::Validation);
            prop_assert_eq!(err.status_code(), 400);
        }
    }
}
