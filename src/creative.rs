//! Creative lookup

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    Client, Result,
    client::{Request, Route, paginated},
    params::QueryParams,
    types::{Page, Pagination},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Creative {
    pub creative_id: String,
    pub creative_name: String,
    pub ad_id: String,
    pub adgroup_id: String,
    pub campaign_id: String,
    pub advertiser_id: String,
    pub creative_type: String,
    pub image_ids: Vec<String>,
    pub video_id: String,
    pub ad_text: String,
    pub ad_format: String,
    pub call_to_action: String,
    pub landing_page_url: String,
    pub display_name: String,
    pub identity_id: String,
    pub identity_type: String,
    pub card_id: String,
    pub operation_status: String,
    pub create_time: String,
    pub modify_time: String,
    pub video_view_tracking_url: String,
    pub click_tracking_url: String,
    pub impression_tracking_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filtering {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub creative_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ad_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub adgroup_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub campaign_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creative_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_max: Option<String>,
}

/// Creatives of one advertiser, served by `creative/get`
///
/// [API Reference](https://business-api.tiktok.com/portal/docs)
#[derive(Debug, Clone, Default)]
pub struct GetCreatives {
    pub advertiser_id: String,
    pub filtering: Option<Filtering>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub fields: Vec<String>,
}

impl Request for GetCreatives {
    type Model = Page<Creative>;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/creative/get/";

    fn query(&self, query: &mut QueryParams) -> Result<()> {
        query.set("advertiser_id", &self.advertiser_id);
        query.pagination(&Pagination {
            page: self.page,
            page_size: self.page_size,
        });
        query.string_slice("fields", &self.fields)?;
        query.json("filtering", &self.filtering)?;
        Ok(())
    }
}

paginated!(GetCreatives => Creative);

impl Client {
    /// Await for one page, or call [Route::all] to walk every page
    pub fn get_creatives(&self, advertiser_id: &str) -> Route<GetCreatives> {
        self.request(GetCreatives {
            advertiser_id: advertiser_id.into(),
            ..Default::default()
        })
    }
}
