//! Advertiser info and custom audience endpoints against a mock server.

mod common;

use common::{ADVERTISER_ID, ok, page_info, query_value, query_values, setup, single_request};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::Mock;

#[tokio::test]
async fn advertiser_info_sends_json_arrays() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/open_api/v1.3/advertiser/info/"))
        .and(query_param("advertiser_ids", r#"["123456789","987654321"]"#))
        .and(query_param("fields", r#"["name","currency"]"#))
        .respond_with(ok(json!({
            "list": [
                {"advertiser_id": "123456789", "name": "Test Advertiser", "currency": "USD", "create_time": 1700000000},
                {"advertiser_id": "987654321", "name": "Other Advertiser", "currency": "JPY", "balance": 12.5}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut request =
        client.get_advertiser_info(vec![ADVERTISER_ID.into(), "987654321".into()]);
    request.fields = vec!["name".into(), "currency".into()];
    let info = request.await.unwrap();

    assert_eq!(info.list.len(), 2);
    assert_eq!(info.list[0].advertiser_name, "Test Advertiser");
    assert_eq!(info.list[0].create_time, 1700000000);
    assert_eq!(info.list[1].currency, "JPY");
    assert_eq!(info.list[1].balance, 12.5);
}

#[tokio::test]
async fn advertiser_info_without_fields_omits_them() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ok(json!({"list": []})))
        .mount(&server)
        .await;

    client
        .get_advertiser_info(vec![ADVERTISER_ID.into()])
        .await
        .unwrap();

    let sent = single_request(&server).await;
    assert_eq!(query_value(&sent, "fields"), None);
    assert_eq!(
        query_value(&sent, "advertiser_ids").as_deref(),
        Some(r#"["123456789"]"#)
    );
}

#[tokio::test]
async fn custom_audience_ids_repeat() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/open_api/v1.3/dmp/custom_audience/get/"))
        .respond_with(ok(json!({
            "list": [
                {"custom_audience_id": "aud1", "name": "Buyers", "size": 1500},
                {"custom_audience_id": "aud2", "name": "Visitors", "size": 30000}
            ]
        })))
        .mount(&server)
        .await;

    let mut request = client.get_custom_audiences(ADVERTISER_ID, vec!["aud1".into(), "aud2".into()]);
    request.history_size = Some(5);
    let audiences = request.await.unwrap();
    assert_eq!(audiences.list[1].size, 30000);

    let sent = single_request(&server).await;
    assert_eq!(query_values(&sent, "custom_audience_ids"), ["aud1", "aud2"]);
    assert_eq!(query_value(&sent, "history_size").as_deref(), Some("5"));
}

#[tokio::test]
async fn list_custom_audiences_pages() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/open_api/v1.3/dmp/custom_audience/list/"))
        .and(query_param("page", "2"))
        .and(query_param("page_size", "20"))
        .respond_with(ok(json!({
            "list": [{"custom_audience_id": "aud3", "audience_type": "CUSTOMER_FILE"}],
            "page_info": page_info(2, 20, 21, 2),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = client.list_custom_audiences(ADVERTISER_ID);
    request.page = Some(2);
    request.page_size = Some(20);
    let page = request.await.unwrap();

    assert_eq!(page.list[0].audience_type, "CUSTOMER_FILE");
    assert_eq!(page.page_info.total_number, 21);
}
