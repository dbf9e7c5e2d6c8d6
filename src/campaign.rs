//! Campaign management

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    Client, Result,
    client::{Request, Route, paginated},
    params::QueryParams,
    types::{Page, Pagination},
};

/// A campaign as returned by [GetCampaigns]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Campaign {
    pub campaign_id: String,
    pub campaign_name: String,
    pub advertiser_id: String,
    pub objective_type: String,
    pub budget: f64,
    pub budget_mode: String,
    pub operation_status: String,
    pub create_time: String,
    pub modify_time: String,
}

/// Criteria for [GetCampaigns], sent as the `filtering` JSON parameter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filtering {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub campaign_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_max: Option<String>,
}

/// Lists the campaigns of an advertiser
///
/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1739315828649986)
#[derive(Debug, Clone, Default)]
pub struct GetCampaigns {
    pub advertiser_id: String,
    pub filtering: Option<Filtering>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl Request for GetCampaigns {
    type Model = Page<Campaign>;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/campaign/get/";

    fn query(&self, query: &mut QueryParams) -> Result<()> {
        query.set("advertiser_id", &self.advertiser_id);
        query.pagination(&Pagination {
            page: self.page,
            page_size: self.page_size,
        });
        query.json("filtering", &self.filtering)?;
        Ok(())
    }
}

paginated!(GetCampaigns => Campaign);

/// Creates a campaign
///
/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1739318962329602)
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateCampaign {
    pub advertiser_id: String,
    pub campaign_name: String,
    pub objective_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_promotion_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_optimize_on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimization_goal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rf_campaign_type: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub special_industries: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreatedCampaign {
    pub campaign_id: String,
}

impl Request for CreateCampaign {
    type Model = CreatedCampaign;
    type Body = Self;

    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/open_api/v1.3/campaign/create/";

    fn body(&self) -> Option<Self::Body> {
        Some(self.clone())
    }
}

impl Client {
    pub fn get_campaigns(&self, advertiser_id: &str) -> Route<GetCampaigns> {
        self.request(GetCampaigns {
            advertiser_id: advertiser_id.into(),
            ..Default::default()
        })
    }

    pub fn create_campaign(
        &self,
        advertiser_id: &str,
        campaign_name: &str,
        objective_type: &str,
    ) -> Route<CreateCampaign> {
        self.request(CreateCampaign {
            advertiser_id: advertiser_id.into(),
            campaign_name: campaign_name.into(),
            objective_type: objective_type.into(),
            ..Default::default()
        })
    }
}
