use super::*;
use serde_json::json;

// =============================================================
// Price decoding
// =============================================================

#[test]
fn price_decodes_json_number() {
    assert_eq!(Price::from_value(&json!(129.99)), Price::Known(129.99));
    assert_eq!(Price::from_value(&json!(40)), Price::Known(40.0));
}

#[test]
fn price_nan_sentinel_is_unavailable_in_any_case() {
    assert_eq!(Price::from_value(&json!("nan")), Price::Unavailable);
    assert_eq!(Price::from_value(&json!("NaN")), Price::Unavailable);
    assert_eq!(Price::from_value(&json!(" nan ")), Price::Unavailable);
}

#[test]
fn price_strings_are_kept_verbatim() {
    assert_eq!(Price::from_value(&json!("24.50")), Price::Text("24.50".to_owned()));
    assert_eq!(Price::parse("N/A"), Price::Text("N/A".to_owned()));
}

#[test]
fn price_non_scalar_values_are_unavailable() {
    assert_eq!(Price::from_value(&json!(null)), Price::Unavailable);
    assert_eq!(Price::from_value(&json!(true)), Price::Unavailable);
    assert_eq!(Price::from_value(&json!({"amount": 5})), Price::Unavailable);
}

#[test]
fn price_display_is_verbatim_or_unavailable_label() {
    assert_eq!(Price::Known(129.99).to_string(), "129.99");
    assert_eq!(Price::Known(130.0).to_string(), "130");
    assert_eq!(Price::Text("call for price".to_owned()).to_string(), "call for price");
    assert_eq!(Price::Unavailable.to_string(), "Price not available");
}

#[test]
fn decoded_string_prices_render_as_sent() {
    let items: Vec<Value> = ["N/A", "24.50", "₹1,299", "NaN"]
        .iter()
        .enumerate()
        .map(|(i, price)| {
            json!({
                "product": {"id": format!("p{i}"), "title": "T", "category": "C", "image_url": "u", "price": price},
                "generated_description": "d"
            })
        })
        .collect();
    let body = Value::Array(items).to_string();

    let rendered: Vec<String> =
        decode_recommendations(&body).unwrap().iter().map(|r| r.product.price.to_string()).collect();

    assert_eq!(rendered, ["N/A", "24.50", "₹1,299", "Price not available"]);
}

#[test]
fn price_serializes_back_to_wire_shape() {
    assert_eq!(serde_json::to_value(Price::Known(5.5)).unwrap(), json!(5.5));
    assert_eq!(serde_json::to_value(Price::Text("N/A".to_owned())).unwrap(), json!("N/A"));
    assert_eq!(serde_json::to_value(Price::Unavailable).unwrap(), json!("nan"));
}

// =============================================================
// Recommendation payloads
// =============================================================

#[test]
fn decode_recommendations_preserves_order_and_fields() {
    let body = json!([
        {
            "product": {"id": "p1", "title": "Oak Chair", "category": "Seating", "image_url": "u", "price": 129.99},
            "generated_description": "Sturdy and warm."
        },
        {
            "product": {"id": "p2", "title": "Lamp", "brand": "Lumo", "category": "Lighting", "image_url": "v", "price": "nan"},
            "generated_description": "Soft glow."
        }
    ])
    .to_string();

    let recs = decode_recommendations(&body).unwrap();
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].product.id, "p1");
    assert_eq!(recs[0].product.brand, None);
    assert_eq!(recs[0].product.price, Price::Known(129.99));
    assert_eq!(recs[1].product.id, "p2");
    assert_eq!(recs[1].product.brand.as_deref(), Some("Lumo"));
    assert_eq!(recs[1].product.price, Price::Unavailable);
    assert_eq!(recs[1].generated_description, "Soft glow.");
}

#[test]
fn decode_recommendations_tolerates_null_category_and_missing_price() {
    let body = r#"[{"product":{"id":"p","title":"T","brand":null,"category":null,"image_url":""},"generated_description":"d"}]"#;
    let recs = decode_recommendations(body).unwrap();
    assert_eq!(recs[0].product.category, "");
    assert_eq!(recs[0].product.price, Price::Unavailable);
}

#[test]
fn decode_recommendations_tolerates_null_or_missing_image_url() {
    let body = r#"[
        {"product":{"id":"a","title":"T","category":"C","image_url":null,"price":1},"generated_description":"d"},
        {"product":{"id":"b","title":"T","category":"C","price":2},"generated_description":"d"}
    ]"#;
    let recs = decode_recommendations(body).unwrap();
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].product.image_url, "");
    assert_eq!(recs[1].product.image_url, "");
}

#[test]
fn decode_recommendations_rejects_object_body() {
    let err = decode_recommendations(r#"{"detail":"boom"}"#).unwrap_err();
    assert_eq!(err.kind(), "parse");
}

#[test]
fn byline_includes_brand_only_when_present() {
    let mut product = Product {
        id: "p".to_owned(),
        title: "Desk".to_owned(),
        brand: Some("Nordic".to_owned()),
        category: "Office".to_owned(),
        image_url: String::new(),
        price: Price::Known(10.0),
    };
    assert_eq!(product.byline(), "Nordic • Office");

    product.brand = Some("   ".to_owned());
    assert_eq!(product.byline(), "Office");

    product.brand = None;
    assert_eq!(product.byline(), "Office");
}

#[test]
fn recommend_request_serializes_prompt_field() {
    let req = RecommendRequest { prompt: "a modern wooden chair".to_owned() };
    assert_eq!(serde_json::to_value(&req).unwrap(), json!({"prompt": "a modern wooden chair"}));
}

// =============================================================
// Analytics payloads
// =============================================================

#[test]
fn decode_analytics_reads_camel_case_envelope() {
    let body = json!({
        "keyMetrics": {"totalProducts": 312, "uniqueBrands": 40, "averagePrice": 88.456, "uniqueCategories": 12},
        "productsByBrand": [{"brand": "A", "product_count": 9}],
        "avgPriceByCategory": [{"primary_category": "Home", "price": 42.0}],
        "materialDistribution": [{"material": "Wood", "count": 7}],
        "generatedAt": "ignored"
    })
    .to_string();

    let report = decode_analytics(&body).unwrap();
    assert_eq!(report.key_metrics.total_products, 312);
    assert_eq!(report.key_metrics.unique_brands, 40);
    assert_eq!(report.key_metrics.unique_categories, 12);
    assert_eq!(report.products_by_brand[0], BrandCount { brand: "A".to_owned(), product_count: 9 });
    assert_eq!(report.avg_price_by_category[0].primary_category, "Home");
    assert_eq!(report.material_distribution[0].count, 7);
}

#[test]
fn decode_analytics_requires_key_metrics() {
    let err = decode_analytics(r#"{"productsByBrand": []}"#).unwrap_err();
    assert_eq!(err.kind(), "parse");
}
