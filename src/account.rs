//! Advertiser account information

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    Client, Result,
    client::{Request, Route},
    params::QueryParams,
    types::Items,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Advertiser {
    pub advertiser_id: String,
    #[serde(rename = "name")]
    pub advertiser_name: String,
    pub address: String,
    pub brand: String,
    pub company: String,
    pub contact_person: String,
    pub country: String,
    pub currency: String,
    pub description: String,
    pub email: String,
    pub industry: String,
    pub language: String,
    pub license_no: String,
    pub promotion_area: String,
    pub promotion_center_city: String,
    pub reason_for_advertising: String,
    pub telephone: String,
    pub timezone: String,
    pub display_timezone: String,
    pub advertiser_account_type: String,
    pub balance_mode: String,
    pub create_time: i64,
    pub status: String,
    pub balance: f64,
}

/// Fetches advertiser details, `advertiser_ids` and `fields` travel as JSON arrays
///
/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1739593083610113)
#[derive(Debug, Clone, Default)]
pub struct GetAdvertiserInfo {
    pub advertiser_ids: Vec<String>,
    pub fields: Vec<String>,
}

impl Request for GetAdvertiserInfo {
    type Model = Items<Advertiser>;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/advertiser/info/";

    fn query(&self, query: &mut QueryParams) -> Result<()> {
        query.string_slice("advertiser_ids", &self.advertiser_ids)?;
        query.string_slice("fields", &self.fields)?;
        Ok(())
    }
}

impl Client {
    pub fn get_advertiser_info(&self, advertiser_ids: Vec<String>) -> Route<GetAdvertiserInfo> {
        self.request(GetAdvertiserInfo {
            advertiser_ids,
            fields: Vec::new(),
        })
    }
}
