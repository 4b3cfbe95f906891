//! End-to-end behavior of `fetch_features` / `fetch_feature`.

use std::sync::Arc;

use baselyn_client::WebStatusClient;
use baselyn_core::{BaselineStatus, Category, EPOCH_DATE};

use crate::common::{
    catalog_entry, ids, list_body, metadata_body, metadata_pattern, MockTransport, Scripted,
};

fn client_over(transport: MockTransport) -> (WebStatusClient, Arc<MockTransport>) {
    let transport = Arc::new(transport);
    let client = WebStatusClient::with_transport(transport.clone());
    (client, transport)
}

#[tokio::test]
async fn test_empty_input_makes_no_requests() {
    let (client, transport) = client_over(MockTransport::new());

    let records = client.fetch_features(&[]).await;

    assert!(records.is_empty());
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_happy_path_normalizes_upstream_data() {
    let body = list_body(&[catalog_entry(
        "grid",
        "Grid",
        "widely",
        "2020-01-15",
        "https://drafts.csswg.org/css-grid/",
    )]);
    let (client, _) = client_over(
        MockTransport::new()
            .on_ok("/features?", body)
            .on_ok(&metadata_pattern("grid"), metadata_body("Two-dimensional layout.")),
    );

    let records = client.fetch_features(&ids(&["grid"])).await;

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.id, "grid");
    assert_eq!(record.name, "Grid");
    assert_eq!(record.description, "Two-dimensional layout.");
    assert_eq!(record.category, Category::Css);
    assert_eq!(record.status, BaselineStatus::Widely);
    assert_eq!(record.date, "2020-01-15");
}

#[tokio::test]
async fn test_missing_id_yields_fallback_record() {
    let body = list_body(&[catalog_entry(
        "grid",
        "Grid",
        "widely",
        "2020-01-15",
        "https://drafts.csswg.org/css-grid/",
    )]);
    let (client, _) = client_over(
        MockTransport::new()
            .on_ok("/features?", body)
            .on_ok(&metadata_pattern("grid"), metadata_body("desc"))
            .on_ok(&metadata_pattern("foo"), metadata_body("ignored")),
    );

    let records = client.fetch_features(&ids(&["grid", "foo"])).await;

    assert_eq!(records.len(), 2);
    let missing = &records[1];
    assert_eq!(missing.id, "foo");
    assert_eq!(missing.name, "foo");
    assert_eq!(missing.description, "Error loading data.");
    assert_eq!(missing.category, Category::WebPlatform);
    assert_eq!(missing.status, BaselineStatus::Unknown);
    assert_eq!(missing.date, EPOCH_DATE);
}

#[tokio::test]
async fn test_list_error_status_degrades_every_id_in_batch() {
    let (client, _) = client_over(
        MockTransport::new()
            .on("/features?", Scripted::Respond(503, "unavailable".to_string()))
            .on_ok(&metadata_pattern("a"), metadata_body("a desc"))
            .on_ok(&metadata_pattern("b"), metadata_body("b desc")),
    );

    let records = client.fetch_features(&ids(&["a", "b"])).await;

    assert_eq!(records.len(), 2);
    for record in &records {
        assert!(record.is_fallback(), "expected fallback, got {record:?}");
    }
}

#[tokio::test]
async fn test_list_transport_failure_degrades_every_id_in_batch() {
    let (client, _) = client_over(
        MockTransport::new()
            .on("/features?", Scripted::Fail)
            .on_ok(&metadata_pattern("a"), metadata_body("a desc")),
    );

    let records = client.fetch_features(&ids(&["a"])).await;

    assert_eq!(records.len(), 1);
    assert!(records[0].is_fallback());
}

#[tokio::test]
async fn test_malformed_list_body_degrades_every_id_in_batch() {
    let (client, _) = client_over(
        MockTransport::new()
            .on_ok("/features?", "<html>gateway error</html>")
            .on_ok(&metadata_pattern("a"), metadata_body("a desc")),
    );

    let records = client.fetch_features(&ids(&["a"])).await;

    assert!(records[0].is_fallback());
}

#[tokio::test]
async fn test_metadata_failure_only_clears_description() {
    let body = list_body(&[catalog_entry(
        "grid",
        "Grid",
        "newly",
        "2023-09-12",
        "https://drafts.csswg.org/css-grid-2/",
    )]);
    let (client, _) = client_over(
        MockTransport::new()
            .on_ok("/features?", body)
            .on(&metadata_pattern("grid"), Scripted::Fail),
    );

    let records = client.fetch_features(&ids(&["grid"])).await;

    let record = &records[0];
    assert_eq!(record.description, "");
    assert_eq!(record.name, "Grid");
    assert_eq!(record.status, BaselineStatus::Newly);
    assert_eq!(record.category, Category::Css);
    assert_eq!(record.date, "2023-09-12");
    assert!(!record.is_fallback());
}

#[tokio::test]
async fn test_metadata_error_status_only_clears_description() {
    let body = list_body(&[catalog_entry(
        "fetch",
        "Fetch",
        "widely",
        "2017-03-01",
        "https://fetch.spec.whatwg.org/",
    )]);
    let (client, _) = client_over(
        MockTransport::new()
            .on_ok("/features?", body)
            .on(&metadata_pattern("fetch"), Scripted::Respond(404, String::new())),
    );

    let records = client.fetch_features(&ids(&["fetch"])).await;

    assert_eq!(records[0].description, "");
    assert_eq!(records[0].name, "Fetch");
    assert_eq!(records[0].category, Category::Html);
}

#[tokio::test]
async fn test_batches_degrade_independently() {
    // Batch size 2 over four ids: ["aa", "ab"] fails at the list level,
    // ["ba", "bb"] succeeds.
    let batch_b = list_body(&[
        catalog_entry("ba", "BA", "widely", "2021-06-01", "https://tc39.es/ecma262/"),
        catalog_entry("bb", "BB", "newly", "2024-02-20", "https://tc39.es/proposal-temporal/"),
    ]);
    let transport = MockTransport::new()
        .on("q=id%3Aaa", Scripted::Fail)
        .on_ok("q=id%3Aba", batch_b)
        .on_ok(&metadata_pattern("aa"), metadata_body("aa"))
        .on_ok(&metadata_pattern("ab"), metadata_body("ab"))
        .on_ok(&metadata_pattern("ba"), metadata_body("ba desc"))
        .on_ok(&metadata_pattern("bb"), metadata_body("bb desc"));
    let transport = Arc::new(transport);
    let client = WebStatusClient::with_transport(transport.clone()).with_batch_size(2);

    let records = client.fetch_features(&ids(&["aa", "ab", "ba", "bb"])).await;

    assert_eq!(records.len(), 4);
    assert!(records[0].is_fallback());
    assert!(records[1].is_fallback());
    assert_eq!(records[2].name, "BA");
    assert_eq!(records[2].category, Category::JavaScript);
    assert_eq!(records[2].description, "ba desc");
    assert_eq!(records[3].name, "BB");
    assert_eq!(records[3].status, BaselineStatus::Newly);

    // Two list requests and four metadata requests.
    assert_eq!(transport.request_count(), 6);
}

#[tokio::test]
async fn test_output_order_matches_input_order() {
    // Catalog returns entries in reverse; assembly is positional, not
    // arrival/entry order.
    let body = list_body(&[
        catalog_entry("z", "Z", "widely", "2020-01-01", "https://example.com/none"),
        catalog_entry("a", "A", "widely", "2020-01-01", "https://example.com/none"),
    ]);
    let (client, _) = client_over(
        MockTransport::new()
            .on_ok("/features?", body)
            .on_ok(&metadata_pattern("a"), metadata_body("a"))
            .on_ok(&metadata_pattern("z"), metadata_body("z")),
    );

    let records = client.fetch_features(&ids(&["a", "z"])).await;

    let got: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(got, vec!["a", "z"]);
}

#[tokio::test]
async fn test_list_request_overfetches_page_size() {
    let (client, transport) = client_over(
        MockTransport::new()
            .on_ok("/features?", list_body(&[]))
            .on_ok("/feature-metadata", metadata_body("")),
    );

    client.fetch_features(&ids(&["a", "b", "c"])).await;

    let list_urls: Vec<String> = transport
        .requests()
        .into_iter()
        .filter(|u| u.contains("/features?"))
        .collect();
    assert_eq!(list_urls.len(), 1);
    assert!(list_urls[0].contains("page_size=6"), "got {}", list_urls[0]);
    assert!(list_urls[0].contains("q=id%3Aa+OR+id%3Ab+OR+id%3Ac"), "got {}", list_urls[0]);
}

#[tokio::test]
async fn test_fetch_feature_wraps_single_id() {
    let body = list_body(&[catalog_entry(
        "view-transitions",
        "View Transitions",
        "limited",
        "",
        "https://drafts.csswg.org/css-view-transitions/",
    )]);
    let (client, _) = client_over(
        MockTransport::new()
            .on_ok("/features?", body)
            .on_ok(&metadata_pattern("view-transitions"), metadata_body("Cross-fade.")),
    );

    let record = client.fetch_feature("view-transitions").await;

    assert_eq!(record.id, "view-transitions");
    assert_eq!(record.status, BaselineStatus::Limited);
    // Empty low_date falls back to the limited sentinel.
    assert_eq!(record.date, "9999-12-31");
}

#[tokio::test]
async fn test_fetch_feature_total_on_dead_transport() {
    let (client, _) = client_over(MockTransport::new());

    let record = client.fetch_feature("anything").await;

    assert!(record.is_fallback());
    assert_eq!(record.id, "anything");
}

#[tokio::test]
async fn test_repeated_calls_are_structurally_identical() {
    let body = list_body(&[catalog_entry(
        "grid",
        "Grid",
        "widely",
        "2020-01-15",
        "https://drafts.csswg.org/css-grid/",
    )]);
    let (client, _) = client_over(
        MockTransport::new()
            .on_ok("/features?", body)
            .on_ok(&metadata_pattern("grid"), metadata_body("desc")),
    );
    let wanted = ids(&["grid", "missing"]);

    let first = client.fetch_features(&wanted).await;
    let second = client.fetch_features(&wanted).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_every_id_yields_exactly_one_record() {
    let (client, _) = client_over(
        MockTransport::new()
            .on_ok("/features?", list_body(&[]))
            .on_ok("/feature-metadata", metadata_body("")),
    );
    let wanted = ids(&["a", "b", "c", "d", "e"]);

    let records = client.fetch_features(&wanted).await;

    let got: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(got, vec!["a", "b", "c", "d", "e"]);
}
