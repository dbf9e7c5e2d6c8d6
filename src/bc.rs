//! Business Center

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
pub struct Transaction {
    pub transaction_id: String,
    pub transaction_time: String,
    pub transaction_type: String,
    pub amount: f64,
    pub currency: String,
    pub advertiser_id: String,
    pub advertiser_name: String,
    pub description: String,
    pub balance: f64,
}

/// Transaction records of a Business Center or its ad accounts
///
/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1792849810925569)
#[derive(Debug, Clone, Default)]
pub struct GetAccountTransactions {
    pub bc_id: Option<String>,
    pub child_bc_id: Option<String>,
    pub transaction_level: Option<String>,
    pub filtering: Option<Value>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl Request for GetAccountTransactions {
    type Model = Page<Transaction>;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/bc/account/transaction/get/";

    fn query(&self, query: &mut QueryParams) -> Result<()> {
        query.set_optional("bc_id", self.bc_id.as_ref());
        query.set_optional("child_bc_id", self.child_bc_id.as_ref());
        query.set_optional("transaction_level", self.transaction_level.as_ref());
        query.json("filtering", &self.filtering)?;
        query.pagination(&Pagination {
            page: self.page,
            page_size: self.page_size,
        });
        Ok(())
    }
}

paginated!(GetAccountTransactions => Transaction);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
    pub asset_id: String,
    pub asset_type: String,
    pub asset_name: String,
}

/// Assets of a given type owned by a Business Center
///
/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1739593603696641)
#[derive(Debug, Clone, Default)]
pub struct GetAssets {
    pub bc_id: String,
    pub asset_type: String,
    pub asset_ids: Vec<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl Request for GetAssets {
    type Model = Page<Asset>;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/bc/asset/get/";

    fn query(&self, query: &mut QueryParams) -> Result<()> {
        query.set("bc_id", &self.bc_id);
        query.set("asset_type", &self.asset_type);
        query.string_slice("asset_ids", &self.asset_ids)?;
        query.pagination(&Pagination {
            page: self.page,
            page_size: self.page_size,
        });
        Ok(())
    }
}

paginated!(GetAssets => Asset);

impl Client {
    pub fn get_account_transactions(&self) -> Route<GetAccountTransactions> {
        self.request(GetAccountTransactions::default())
    }

    pub fn get_assets(&self, bc_id: &str, asset_type: &str) -> Route<GetAssets> {
        self.request(GetAssets {
            bc_id: bc_id.into(),
            asset_type: asset_type.into(),
            ..Default::default()
        })
    }
}
