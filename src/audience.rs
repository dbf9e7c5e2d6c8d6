//! Custom audiences (DMP)

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    Client, Result,
    client::{Request, Route, paginated},
    params::QueryParams,
    types::{Items, Page, Pagination},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomAudience {
    pub custom_audience_id: String,
    pub name: String,
    pub audience_type: String,
    pub size: i64,
    pub status: String,
    pub share_status: String,
    pub create_time: String,
    pub modify_time: String,
    pub advertiser_id: String,
    pub lookalike_type: String,
}

/// Details of specific audiences, ids are sent as repeated parameters
///
/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1739940507792385)
#[derive(Debug, Clone, Default)]
pub struct GetCustomAudiences {
    pub advertiser_id: String,
    pub custom_audience_ids: Vec<String>,
    pub history_size: Option<i64>,
}

impl Request for GetCustomAudiences {
    type Model = Items<CustomAudience>;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/dmp/custom_audience/get/";

    fn query(&self, query: &mut QueryParams) -> Result<()> {
        query.set("advertiser_id", &self.advertiser_id);
        for id in &self.custom_audience_ids {
            query.add("custom_audience_ids", id);
        }
        query.set_optional("history_size", self.history_size);
        Ok(())
    }
}

/// Every audience of an advertiser
///
/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1739940506015746)
#[derive(Debug, Clone, Default)]
pub struct ListCustomAudiences {
    pub advertiser_id: String,
    pub custom_audience_ids: Vec<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl Request for ListCustomAudiences {
    type Model = Page<CustomAudience>;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/dmp/custom_audience/list/";

    fn query(&self, query: &mut QueryParams) -> Result<()> {
        query.set("advertiser_id", &self.advertiser_id);
        for id in &self.custom_audience_ids {
            query.add("custom_audience_ids", id);
        }
        query.pagination(&Pagination {
            page: self.page,
            page_size: self.page_size,
        });
        Ok(())
    }
}

paginated!(ListCustomAudiences => CustomAudience);

impl Client {
    pub fn get_custom_audiences(
        &self,
        advertiser_id: &str,
        custom_audience_ids: Vec<String>,
    ) -> Route<GetCustomAudiences> {
        self.request(GetCustomAudiences {
            advertiser_id: advertiser_id.into(),
            custom_audience_ids,
            history_size: None,
        })
    }

    pub fn list_custom_audiences(&self, advertiser_id: &str) -> Route<ListCustomAudiences> {
        self.request(ListCustomAudiences {
            advertiser_id: advertiser_id.into(),
            ..Default::default()
        })
    }
}
