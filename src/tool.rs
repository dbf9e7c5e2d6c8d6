//! Targeting lookup tools

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::{
    Client, Result,
    client::{Request, Route},
    params::QueryParams,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Carrier {
    pub carrier_id: String,
    pub carrier_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Carriers {
    pub carriers: Vec<Carrier>,
}

/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1737168013095938)
#[derive(Debug, Clone, Default)]
pub struct GetCarriers {
    pub advertiser_id: String,
}

impl Request for GetCarriers {
    type Model = Carriers;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/tool/carrier/";

    fn query(&self, query: &mut QueryParams) -> Result<()> {
        query.set("advertiser_id", &self.advertiser_id);
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub language_code: String,
    pub language_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Languages {
    pub languages: Vec<Language>,
}

/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1737188554152962)
#[derive(Debug, Clone, Default)]
pub struct GetLanguages {
    pub advertiser_id: String,
}

impl Request for GetLanguages {
    type Model = Languages;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/tool/language/";

    fn query(&self, query: &mut QueryParams) -> Result<()> {
        query.set("advertiser_id", &self.advertiser_id);
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionCategory {
    pub action_category_id: String,
    pub action_category_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionCategories {
    pub action_categories: Vec<ActionCategory>,
}

/// Behavior categories usable for interest targeting
///
/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1737166752522241)
#[derive(Debug, Clone, Default)]
pub struct GetActionCategories {
    pub advertiser_id: String,
    /// Sent as repeated `special_industries` parameters
    pub special_industries: Vec<String>,
}

impl Request for GetActionCategories {
    type Model = ActionCategories;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/tool/action_category/";

    fn query(&self, query: &mut QueryParams) -> Result<()> {
        query.set("advertiser_id", &self.advertiser_id);
        for industry in &self.special_industries {
            query.add("special_industries", industry);
        }
        Ok(())
    }
}

impl Client {
    pub fn get_carriers(&self, advertiser_id: &str) -> Route<GetCarriers> {
        self.request(GetCarriers {
            advertiser_id: advertiser_id.into(),
        })
    }

    pub fn get_languages(&self, advertiser_id: &str) -> Route<GetLanguages> {
        self.request(GetLanguages {
            advertiser_id: advertiser_id.into(),
        })
    }

    pub fn get_action_categories(&self, advertiser_id: &str) -> Route<GetActionCategories> {
        self.request(GetActionCategories {
            advertiser_id: advertiser_id.into(),
            special_industries: Vec::new(),
        })
    }
}
