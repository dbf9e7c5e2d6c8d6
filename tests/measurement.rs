//! Pixel and offline event set endpoints against a mock server.

mod common;

use common::{ADVERTISER_ID, ok, page_info, query_value, setup, single_request};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::Mock;

#[tokio::test]
async fn list_pixels() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/open_api/v1.3/pixel/list/"))
        .and(query_param("advertiser_id", ADVERTISER_ID))
        .and(query_param("code", "PX123"))
        .respond_with(ok(json!({
            "list": [{"pixel_id": "p1", "pixel_code": "PX123", "pixel_status": "ACTIVE"}],
            "page_info": page_info(1, 10, 1, 1),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = client.list_pixels(ADVERTISER_ID);
    request.code = Some("PX123".into());
    let page = request.await.unwrap();
    assert_eq!(page.list[0].pixel_status, "ACTIVE");

    let sent = single_request(&server).await;
    assert_eq!(query_value(&sent, "name"), None);
    assert_eq!(query_value(&sent, "filtering"), None);
}

#[tokio::test]
async fn offline_event_sets_without_page_info() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/open_api/v1.3/offline/get/"))
        .respond_with(ok(json!({
            "list": [{"event_set_id": "es1", "name": "Store visits", "status": "ENABLE"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = client.get_offline_event_sets();
    request.event_set_ids = vec!["es1".into()];
    let sets = request.await.unwrap();

    assert_eq!(sets.list[0].name, "Store visits");
    assert_eq!(sets.page_info.total_page, 0);

    let sent = single_request(&server).await;
    assert_eq!(query_value(&sent, "advertiser_id"), None);
    assert_eq!(query_value(&sent, "event_set_ids").as_deref(), Some(r#"["es1"]"#));
}

#[tokio::test]
async fn offline_event_sets_for_advertiser() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ok(json!({"list": []})))
        .mount(&server)
        .await;

    let mut request = client.get_offline_event_sets();
    request.advertiser_id = ADVERTISER_ID.into();
    request.name = Some("Store".into());
    request.await.unwrap();

    let sent = single_request(&server).await;
    assert_eq!(query_value(&sent, "advertiser_id").as_deref(), Some(ADVERTISER_ID));
    assert_eq!(query_value(&sent, "name").as_deref(), Some("Store"));
    assert_eq!(query_value(&sent, "event_set_ids"), None);
}
