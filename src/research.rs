//! Commercial Content Library (ad library research)

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
pub struct AdReport {
    pub ad_id: String,
    pub ad_name: String,
    pub advertiser_id: String,
    pub advertiser_name: String,
    pub campaign_id: String,
    pub campaign_name: String,
    pub adgroup_id: String,
    pub adgroup_name: String,
    pub country: String,
    pub region: String,
    pub language: String,
    pub platform: String,
    pub objective_type: String,
    pub call_to_action: String,
    pub video_id: String,
    pub video_title: String,
    pub video_duration: f64,
    pub thumbnail_url: String,
    pub landing_page_url: String,
    pub display_name: String,
    pub profile_image: String,
    pub ad_text: String,
    pub impressions: i64,
    pub clicks: i64,
    pub ctr: f64,
    pub reach: i64,
    pub frequency: f64,
    pub likes: i64,
    pub comments: i64,
    pub shares: i64,
    pub video_views: i64,
    pub video_view_rate: f64,
    pub average_video_play: f64,
    pub first_shown_date: String,
    pub last_shown_date: String,
    pub stat_time_period: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdReportFiltering {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub country_codes: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub region_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub objective_types: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub advertiser_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advertiser_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_shown_date_min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_shown_date_max: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_shown_date_min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_shown_date_max: Option<String>,
}

/// Searches ads in the library by keyword
///
/// Lives under `/v2/`, unlike the rest of the API.
///
/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1758579480845313)
#[derive(Debug, Clone, Default)]
pub struct GetAdReport {
    pub search_term: String,
    /// ISO 3166-1 alpha-2
    pub country_code: Option<String>,
    pub filtering: Option<AdReportFiltering>,
    pub fields: Vec<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub order_by: Option<String>,
    pub order_field: Option<String>,
}

impl Request for GetAdReport {
    type Model = Page<AdReport>;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/v2/research/adlib/ad/report/";

    fn query(&self, query: &mut QueryParams) -> Result<()> {
        query.set("search_term", &self.search_term);
        query.set_optional("country_code", self.country_code.as_ref());
        query.pagination(&Pagination {
            page: self.page,
            page_size: self.page_size,
        });
        query.string_slice("fields", &self.fields)?;
        query.json("filtering", &self.filtering)?;
        query.set_optional("order_by", self.order_by.as_ref());
        query.set_optional("order_field", self.order_field.as_ref());
        Ok(())
    }
}

paginated!(GetAdReport => AdReport);

impl Client {
    pub fn get_ad_report(&self, search_term: &str) -> Route<GetAdReport> {
        self.request(GetAdReport {
            search_term: search_term.into(),
            ..Default::default()
        })
    }
}
