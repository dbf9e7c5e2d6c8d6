//! Ad group management

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
pub struct AdGroup {
    pub adgroup_id: String,
    pub adgroup_name: String,
    pub campaign_id: String,
    pub advertiser_id: String,
    pub objective_type: String,
    pub budget: f64,
    pub budget_mode: String,
    pub billing_event: String,
    pub optimization_goal: String,
    pub placements: Vec<String>,
    pub locations: Vec<String>,
    pub age: Vec<String>,
    pub gender: String,
    pub languages: Vec<String>,
    pub operation_status: String,
    pub primary_status: String,
    pub secondary_status: String,
    pub create_time: String,
    pub modify_time: String,
    pub schedule_start_time: String,
    pub schedule_end_time: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filtering {
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
    pub billing_event: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_max: Option<String>,
}

/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1739314558673922)
#[derive(Debug, Clone, Default)]
pub struct GetAdGroups {
    pub advertiser_id: String,
    pub filtering: Option<Filtering>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub fields: Vec<String>,
}

impl Request for GetAdGroups {
    type Model = Page<AdGroup>;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/adgroup/get/";

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

paginated!(GetAdGroups => AdGroup);

/// Creates an ad group with the commonly used subset of settings
///
/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1739499616346114)
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateAdGroup {
    pub advertiser_id: String,
    pub campaign_id: String,
    pub adgroup_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promotion_type: Option<String>,
    pub placement_type: String,
    pub placements: Vec<String>,
    pub location_ids: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub age_groups: Vec<String>,
    pub budget_mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_end_time: Option<String>,
    pub billing_event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid_price: Option<f64>,
    pub optimization_goal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pacing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pixel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreatedAdGroup {
    pub adgroup_id: String,
}

impl Request for CreateAdGroup {
    type Model = CreatedAdGroup;
    type Body = Self;

    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/open_api/v1.3/adgroup/create/";

    fn body(&self) -> Option<Self::Body> {
        Some(self.clone())
    }
}

impl Client {
    pub fn get_adgroups(&self, advertiser_id: &str) -> Route<GetAdGroups> {
        self.request(GetAdGroups {
            advertiser_id: advertiser_id.into(),
            ..Default::default()
        })
    }

    /// Required fields without a sensible default (placements, targeting, budget,
    /// billing) are left for the caller to fill in through the returned route.
    pub fn create_adgroup(
        &self,
        advertiser_id: &str,
        campaign_id: &str,
        adgroup_name: &str,
    ) -> Route<CreateAdGroup> {
        self.request(CreateAdGroup {
            advertiser_id: advertiser_id.into(),
            campaign_id: campaign_id.into(),
            adgroup_name: adgroup_name.into(),
            ..Default::default()
        })
    }
}
