//! Creative and research ad library endpoints against a mock server.

mod common;

use common::{ADVERTISER_ID, ok, page_info, query_json, query_value, setup, single_request};
use serde_json::json;
use tiktok_business::creative::Filtering;
use tiktok_business::research::AdReportFiltering;
use wiremock::matchers::{method, path, query_param};
use wiremock::Mock;

#[tokio::test]
async fn get_creatives_single_page() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/open_api/v1.3/creative/get/"))
        .and(query_param("fields", r#"["creative_id","ad_text"]"#))
        .respond_with(ok(json!({
            "list": [{"creative_id": "cr1", "ad_text": "Hello", "image_ids": ["i1", "i2"]}],
            "page_info": page_info(1, 10, 1, 1),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = client.get_creatives(ADVERTISER_ID);
    request.fields = vec!["creative_id".into(), "ad_text".into()];
    request.filtering = Some(Filtering {
        ad_ids: vec!["3001".into()],
        ..Default::default()
    });
    let page = request.await.unwrap();
    assert_eq!(page.list[0].image_ids, ["i1", "i2"]);

    let sent = single_request(&server).await;
    let filtering: Filtering = query_json(&sent, "filtering");
    assert_eq!(filtering.ad_ids, ["3001"]);
}

#[tokio::test]
async fn all_creatives_walks_pages_and_keeps_filters() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/open_api/v1.3/creative/get/"))
        .and(query_param("page", "1"))
        .respond_with(ok(json!({
            "list": [{"creative_id": "cr1"}, {"creative_id": "cr2"}],
            "page_info": page_info(1, 100, 3, 2),
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/open_api/v1.3/creative/get/"))
        .and(query_param("page", "2"))
        .respond_with(ok(json!({
            "list": [{"creative_id": "cr3"}],
            "page_info": page_info(2, 100, 3, 2),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = client.get_creatives(ADVERTISER_ID);
    request.page = Some(7);
    request.filtering = Some(Filtering {
        campaign_ids: vec!["1001".into()],
        ..Default::default()
    });
    let creatives = request.all().await.unwrap();
    assert_eq!(creatives.len(), 3);
    assert_eq!(creatives[2].creative_id, "cr3");

    let requests = server.received_requests().await.unwrap();
    for sent in &requests {
        assert_eq!(query_value(sent, "page_size").as_deref(), Some("100"));
        let filtering: Filtering = query_json(sent, "filtering");
        assert_eq!(filtering.campaign_ids, ["1001"]);
    }
}

#[tokio::test]
async fn all_with_empty_result_makes_one_call() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ok(json!({"list": [], "page_info": page_info(1, 100, 0, 0)})))
        .expect(1)
        .mount(&server)
        .await;

    let creatives = client.get_creatives(ADVERTISER_ID).all().await.unwrap();
    assert!(creatives.is_empty());
}

#[tokio::test]
async fn ad_report_uses_v2_path() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/v2/research/adlib/ad/report/"))
        .and(query_param("search_term", "sneakers"))
        .and(query_param("country_code", "US"))
        .and(query_param("order_field", "impressions"))
        .respond_with(ok(json!({
            "list": [{"ad_id": "ad1", "impressions": 5000, "ctr": 0.012, "country": "US"}],
            "page_info": page_info(1, 10, 1, 1),
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut request = client.get_ad_report("sneakers");
    request.country_code = Some("US".into());
    request.order_field = Some("impressions".into());
    request.filtering = Some(AdReportFiltering {
        platforms: vec!["TIKTOK".into()],
        ..Default::default()
    });
    let page = request.await.unwrap();

    assert_eq!(page.list[0].impressions, 5000);
    assert_eq!(page.list[0].ctr, 0.012);

    let sent = single_request(&server).await;
    assert_eq!(query_value(&sent, "order_by"), None);
    let filtering: serde_json::Value = query_json(&sent, "filtering");
    assert_eq!(filtering, json!({"platforms": ["TIKTOK"]}));
}

#[tokio::test]
async fn all_ad_reports() {
    let (server, client) = setup().await;

    for page in 1..=2 {
        Mock::given(method("GET"))
            .and(path("/v2/research/adlib/ad/report/"))
            .and(query_param("page", page.to_string()))
            .respond_with(ok(json!({
                "list": [{"ad_id": format!("ad{page}")}],
                "page_info": page_info(page, 100, 2, 2),
            })))
            .expect(1)
            .mount(&server)
            .await;
    }

    let reports = client.get_ad_report("shoes").all().await.unwrap();
    let ids: Vec<_> = reports.iter().map(|r| r.ad_id.as_str()).collect();
    assert_eq!(ids, ["ad1", "ad2"]);
}
