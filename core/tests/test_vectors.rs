//! Verify the request builder and response parser against the JSON vectors in
//! `test-vectors/`.
//!
//! Each case names an endpoint, optional road-search parameters, the expected
//! request path, a simulated response, and either the expected payload or the
//! expected error. Payloads are compared as parsed JSON.

use navi_core::{ApiError, HttpRequest, HttpResponse, NaviClient};
use serde_json::Value;

fn build(client: &NaviClient, case: &Value) -> HttpRequest {
    let name = case["name"].as_str().unwrap();
    match case["endpoint"].as_str().unwrap() {
        "user" => client.build_user_data(),
        "map_info" => client.build_map_info(),
        "traffic" => client.build_traffic(),
        "weather" => client.build_weather(),
        "road" => {
            let params: Vec<(String, String)> = case["params"]
                .as_array()
                .unwrap()
                .iter()
                .map(|pair| {
                    let pair = pair.as_array().unwrap();
                    (pair[0].as_str().unwrap().to_string(), pair[1].as_str().unwrap().to_string())
                })
                .collect();
            client.build_search_road(params)
        }
        other => panic!("{name}: unknown endpoint: {other}"),
    }
}

#[test]
fn endpoint_test_vectors() {
    let raw = include_str!("../../test-vectors/endpoints.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let base_url = vectors["base_url"].as_str().unwrap();

    let client = NaviClient::new(base_url);
    let cases = vectors["cases"].as_array().unwrap();
    assert!(!cases.is_empty());

    for case in cases {
        let name = case["name"].as_str().unwrap();

        // Verify build
        let req = build(&client, case);
        let expected_path = case["expected_request"]["path"].as_str().unwrap();
        assert_eq!(req.url, format!("{base_url}{expected_path}"), "{name}: url");

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse::new(
            sim["status"].as_u64().unwrap() as u16,
            sim["body"].as_str().unwrap(),
        );
        let result = client.parse(response);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            if let Some(status) = expected_error.get("status") {
                let status = status.as_u64().unwrap() as u16;
                assert!(
                    matches!(&err, ApiError::HttpError { status: s, body } if *s == status && body == sim["body"].as_str().unwrap()),
                    "{name}: expected HttpError {status}, got {err:?}"
                );
            } else {
                match expected_error["kind"].as_str().unwrap() {
                    "DeserializationError" => assert!(
                        matches!(err, ApiError::DeserializationError(_)),
                        "{name}: expected DeserializationError"
                    ),
                    other => panic!("{name}: unknown expected_error: {other}"),
                }
            }
        } else {
            let value = result.unwrap();
            assert_eq!(value, case["expected_result"], "{name}: parsed result");
        }
    }
}
