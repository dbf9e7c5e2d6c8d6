//! Ad management

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
pub struct Ad {
    pub ad_id: String,
    pub ad_name: String,
    pub adgroup_id: String,
    pub campaign_id: String,
    pub advertiser_id: String,
    pub image_ids: Vec<String>,
    pub video_id: String,
    pub ad_text: String,
    pub call_to_action: String,
    pub operation_status: String,
    pub primary_status: String,
    pub secondary_status: String,
    pub create_time: String,
    pub modify_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filtering {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ad_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub adgroup_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub campaign_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_max: Option<String>,
}

/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1735735588640770)
#[derive(Debug, Clone, Default)]
pub struct GetAds {
    pub advertiser_id: String,
    pub filtering: Option<Filtering>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub fields: Vec<String>,
}

impl Request for GetAds {
    type Model = Page<Ad>;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/ad/get/";

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

paginated!(GetAds => Ad);

/// One creative inside [CreateAd]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdCreative {
    pub ad_name: String,
    pub ad_text: String,
    pub ad_format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub image_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub call_to_action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landing_page_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_type: Option<String>,
}

/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1737172488964097)
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateAd {
    pub advertiser_id: String,
    pub adgroup_id: String,
    pub creatives: Vec<AdCreative>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreatedAd {
    pub ad_id: String,
}

impl Request for CreateAd {
    type Model = CreatedAd;
    type Body = Self;

    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/open_api/v1.3/ad/create/";

    fn body(&self) -> Option<Self::Body> {
        Some(self.clone())
    }
}

impl Client {
    pub fn get_ads(&self, advertiser_id: &str) -> Route<GetAds> {
        self.request(GetAds {
            advertiser_id: advertiser_id.into(),
            ..Default::default()
        })
    }

    pub fn create_ad(
        &self,
        advertiser_id: &str,
        adgroup_id: &str,
        creatives: Vec<AdCreative>,
    ) -> Route<CreateAd> {
        self.request(CreateAd {
            advertiser_id: advertiser_id.into(),
            adgroup_id: adgroup_id.into(),
            creatives,
            ..Default::default()
        })
    }
}
