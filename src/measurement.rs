//! Pixels and offline event sets

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    Client, Result,
    client::{Request, Route, paginated},
    params::QueryParams,
    types::{Page, Pagination},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pixel {
    pub pixel_id: String,
    pub pixel_name: String,
    pub pixel_code: String,
    pub advertiser_id: String,
    pub pixel_status: String,
    pub create_time: String,
    pub last_update_time: String,
}

/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1740858697598978)
#[derive(Debug, Clone, Default)]
pub struct ListPixels {
    pub advertiser_id: String,
    pub pixel_id: Option<String>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub order_by: Option<String>,
    pub filtering: Option<Value>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl Request for ListPixels {
    type Model = Page<Pixel>;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/pixel/list/";

    fn query(&self, query: &mut QueryParams) -> Result<()> {
        query.set("advertiser_id", &self.advertiser_id);
        query.set_optional("pixel_id", self.pixel_id.as_ref());
        query.set_optional("code", self.code.as_ref());
        query.set_optional("name", self.name.as_ref());
        query.set_optional("order_by", self.order_by.as_ref());
        query.json("filtering", &self.filtering)?;
        query.pagination(&Pagination {
            page: self.page,
            page_size: self.page_size,
        });
        Ok(())
    }
}

paginated!(ListPixels => Pixel);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfflineEventSet {
    pub event_set_id: String,
    pub name: String,
    pub advertiser_id: String,
    pub status: String,
    pub create_time: String,
    pub update_time: String,
}

/// Offline event sets, optionally scoped to one advertiser
///
/// `page_info` is often absent from this response and then comes back zeroed.
///
/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1765596808589313)
#[derive(Debug, Clone, Default)]
pub struct GetOfflineEventSets {
    /// Left out of the query when empty
    pub advertiser_id: String,
    pub event_set_ids: Vec<String>,
    pub name: Option<String>,
}

impl Request for GetOfflineEventSets {
    type Model = Page<OfflineEventSet>;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/offline/get/";

    fn query(&self, query: &mut QueryParams) -> Result<()> {
        if !self.advertiser_id.is_empty() {
            query.set("advertiser_id", &self.advertiser_id);
        }
        query.string_slice("event_set_ids", &self.event_set_ids)?;
        query.set_optional("name", self.name.as_ref());
        Ok(())
    }
}

impl Client {
    pub fn list_pixels(&self, advertiser_id: &str) -> Route<ListPixels> {
        self.request(ListPixels {
            advertiser_id: advertiser_id.into(),
            ..Default::default()
        })
    }

    pub fn get_offline_event_sets(&self) -> Route<GetOfflineEventSets> {
        self.request(GetOfflineEventSets::default())
    }
}
