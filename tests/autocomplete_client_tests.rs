//! Client behavior against an in-process transport.
//!
//! These tests verify URL construction, error surfacing and the
//! one-request-per-call contract without touching the network.

use std::io;
use std::sync::Arc;

use futures_util::future::join_all;
use serde_json::json;

use dx_autocomplete::{
    AuthToken, AutocompleteClient, AutocompleteParams, ClientConfig, RecordingTransport,
};

const DOMAIN: &str = "https://api.example.com";

fn setup(transport: RecordingTransport) -> (AutocompleteClient, Arc<RecordingTransport>) {
    let transport = Arc::new(transport);
    let client = AutocompleteClient::from_domain(DOMAIN, transport.clone())
        .expect("Failed to create client");
    (client, transport)
}

#[test]
fn test_construct_from_domain_and_options_object() {
    let transport = Arc::new(RecordingTransport::responding(200, "{}"));

    assert!(AutocompleteClient::from_domain(DOMAIN, transport.clone()).is_ok());

    let config = ClientConfig::new(DOMAIN).with_token(AuthToken::in_header("secret", "X-Api-Key"));
    let client = AutocompleteClient::from_config(config, transport).expect("options object");
    assert_eq!(client.base_url(), DOMAIN);
    assert_eq!(client.config().token().map(|t| t.value()), Some("secret"));
}

#[test]
fn test_construct_with_empty_domain_fails() {
    let transport = Arc::new(RecordingTransport::responding(200, "{}"));

    let err = AutocompleteClient::from_domain("", transport.clone()).err().unwrap();
    assert!(err.is_configuration_error());

    let config = ClientConfig::from_json_str("{}").unwrap();
    let err = AutocompleteClient::from_config(config, transport).err().unwrap();
    assert!(err.is_configuration_error());
}

#[tokio::test]
async fn test_missing_input_rejects_without_request() {
    let (client, transport) = setup(RecordingTransport::responding(200, "{}"));

    let err = client
        .fetch_autocomplete(&AutocompleteParams::default())
        .await
        .unwrap_err();

    assert!(err.is_missing_parameter());
    assert_eq!(err.to_string(), "Missing required parameter: input");
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_missing_input_with_other_fields_still_rejects() {
    let (client, transport) = setup(RecordingTransport::responding(200, "{}"));

    let params = AutocompleteParams {
        language: Some("en".to_string()),
        ..Default::default()
    };
    let err = client.fetch_autocomplete(&params).await.unwrap_err();

    assert!(err.is_missing_parameter());
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_input_only_request_url() {
    let (client, transport) = setup(RecordingTransport::responding(200, r#"{"predictions":[]}"#));

    client
        .fetch_autocomplete(&AutocompleteParams::new("par"))
        .await
        .expect("fetch");

    let request = transport.last_request().unwrap();
    assert_eq!(
        request.url,
        "https://api.example.com/dx-customer/autocomplete?input=par"
    );
}

#[tokio::test]
async fn test_query_contains_all_defined_parameters() {
    let (client, transport) = setup(RecordingTransport::responding(200, "{}"));

    let params = AutocompleteParams::new("par")
        .with_language("en")
        .with_strictbounds(true);
    client.fetch_autocomplete(&params).await.expect("fetch");

    let request = transport.last_request().unwrap();
    let pairs: Vec<&str> = request.query().unwrap().split('&').collect();
    assert_eq!(pairs.len(), 3);
    assert!(pairs.contains(&"input=par"));
    assert!(pairs.contains(&"language=en"));
    assert!(pairs.contains(&"strictbounds=true"));
}

#[tokio::test]
async fn test_values_are_percent_encoded() {
    let (client, transport) = setup(RecordingTransport::responding(200, "{}"));

    let params = AutocompleteParams::new("rue de la paix & co")
        .with_components("country:fr")
        .with_sessiontoken("a=b");
    client.fetch_autocomplete(&params).await.expect("fetch");

    let request = transport.last_request().unwrap();
    let pairs: Vec<&str> = request.query().unwrap().split('&').collect();
    assert!(pairs.contains(&"input=rue%20de%20la%20paix%20%26%20co"));
    assert!(pairs.contains(&"components=country%3Afr"));
    assert!(pairs.contains(&"sessiontoken=a%3Db"));
}

#[tokio::test]
async fn test_extra_query_parameters_override() {
    let (client, transport) = setup(RecordingTransport::responding(200, "{}"));

    let params = AutocompleteParams::new("par")
        .with_types("geocode")
        .with_extra_query_parameter("types", "address")
        .with_extra_query_parameter("key", "abc");
    client.fetch_autocomplete(&params).await.expect("fetch");

    let request = transport.last_request().unwrap();
    let pairs: Vec<&str> = request.query().unwrap().split('&').collect();
    assert!(pairs.contains(&"types=address"));
    assert!(!pairs.contains(&"types=geocode"));
    assert!(pairs.contains(&"key=abc"));
}

#[tokio::test]
async fn test_success_resolves_with_body() {
    let (client, _) = setup(RecordingTransport::responding(200, r#"{"predictions":[]}"#));

    let value = client
        .fetch_autocomplete(&AutocompleteParams::new("par"))
        .await
        .expect("fetch");

    assert_eq!(value, json!({ "predictions": [] }));
}

#[tokio::test]
async fn test_error_status_with_json_body_resolves() {
    let (client, _) = setup(RecordingTransport::responding(
        500,
        r#"{"status":"UNKNOWN_ERROR"}"#,
    ));

    let value = client
        .fetch_autocomplete(&AutocompleteParams::new("par"))
        .await
        .expect("non-2xx JSON bodies still resolve");

    assert_eq!(value["status"], "UNKNOWN_ERROR");
}

#[tokio::test]
async fn test_non_json_body_rejects_with_parse_error() {
    let (client, transport) = setup(RecordingTransport::responding(200, "<html>oops</html>"));

    let err = client
        .fetch_autocomplete(&AutocompleteParams::new("par"))
        .await
        .unwrap_err();

    assert!(err.is_parse_error());
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_transport_error_is_surfaced_unchanged() {
    let (client, transport) = setup(RecordingTransport::failing(
        io::ErrorKind::ConnectionRefused,
        "connection refused",
    ));

    let err = client
        .fetch_autocomplete(&AutocompleteParams::new("par"))
        .await
        .unwrap_err();

    assert!(err.is_transport_error());
    assert_eq!(err.to_string(), "connection refused");
    let source = err
        .transport_source()
        .and_then(|e| e.downcast_ref::<io::Error>())
        .expect("original io::Error");
    assert_eq!(source.kind(), io::ErrorKind::ConnectionRefused);

    // No retries.
    assert_eq!(transport.request_count(), 1);
}

#[tokio::test]
async fn test_fetch_predictions() {
    let (client, _) = setup(RecordingTransport::responding(
        200,
        r#"{"predictions":[{"description":"Paris, France","place_id":"abc"}],"status":"OK"}"#,
    ));

    let response = client
        .fetch_predictions(&AutocompleteParams::new("par"))
        .await
        .expect("fetch");

    assert_eq!(response.predictions.len(), 1);
    assert_eq!(response.predictions[0].description, "Paris, France");
    assert_eq!(response.predictions[0].place_id.as_deref(), Some("abc"));
}

#[tokio::test]
async fn test_fetch_predictions_wrong_shape_is_parse_error() {
    let (client, _) = setup(RecordingTransport::responding(200, r#"{"predictions":"none"}"#));

    let err = client
        .fetch_predictions(&AutocompleteParams::new("par"))
        .await
        .unwrap_err();

    assert!(err.is_parse_error());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_concurrent_calls_are_independent() {
    let (client, transport) = setup(RecordingTransport::responding(200, r#"{"predictions":[]}"#));

    let inputs = ["par", "pari", "paris", "par"];
    let params: Vec<_> = inputs.iter().map(|i| AutocompleteParams::new(*i)).collect();
    let results = join_all(params.iter().map(|p| client.fetch_autocomplete(p))).await;

    assert!(results.iter().all(|r| r.is_ok()));
    // Identical calls are not deduplicated.
    assert_eq!(transport.request_count(), inputs.len());
}

#[test]
fn test_autocomplete_url_matches_sent_url() {
    let (client, _) = setup(RecordingTransport::responding(200, "{}"));

    let url = client
        .autocomplete_url(&AutocompleteParams::new("par").with_radius(500.0))
        .unwrap();
    assert_eq!(
        url,
        "https://api.example.com/dx-customer/autocomplete?input=par&radius=500"
    );

    assert!(client
        .autocomplete_url(&AutocompleteParams::default())
        .unwrap_err()
        .is_missing_parameter());
}
