use advisor::types::{Price, decode_analytics, decode_recommendations};

use super::*;

const ONE_CHAIR: &str = r#"[{"product":{"id":"p1","title":"Oak Chair","category":"Seating","image_url":"u","price":129.99},"generated_description":"..."}]"#;

#[test]
fn recommend_request_keeps_prompt_as_typed() {
    assert_eq!(
        recommend_request("  a modern wooden chair"),
        RecommendRequest { prompt: "  a modern wooden chair".to_owned() }
    );
}

#[test]
fn network_error_keeps_cause_text() {
    assert_eq!(network_error("connection refused"), ApiError::Network("connection refused".to_owned()));
}

#[test]
fn decode_response_accepts_success_body() {
    let recs = decode_response(200, ONE_CHAIR, decode_recommendations).unwrap();
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].product.price, Price::Known(129.99));
}

#[test]
fn decode_response_reports_status_before_parsing() {
    let err = decode_response(500, ONE_CHAIR, decode_recommendations).unwrap_err();
    assert_eq!(err, ApiError::Http { status: 500 });

    let err = decode_response(404, r#"{"detail":"Analytics file not found."}"#, decode_analytics).unwrap_err();
    assert_eq!(err, ApiError::Http { status: 404 });
}

#[test]
fn decode_response_flags_malformed_success_body() {
    let err = decode_response(200, "<html>proxy error</html>", decode_recommendations).unwrap_err();
    assert_eq!(err.kind(), "parse");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_calls_fail_without_network() {
    let err = futures::executor::block_on(HttpApi.recommend("chair")).unwrap_err();
    assert_eq!(err.kind(), "network");
    let err = futures::executor::block_on(HttpApi.analytics()).unwrap_err();
    assert_eq!(err.kind(), "network");
}
