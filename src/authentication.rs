//! OAuth: exchanging an auth code and listing the advertisers that granted access
//!
//! These endpoints work on a [Client] built without an access token.

use reqwest::Method;
use secrecy::{ExposeSecret as _, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::{
    Client, Result,
    client::{Auth, Request, Route},
    params::QueryParams,
    types::Items,
};

/// Trades an auth code for an access token
///
/// Sent without an `Access-Token` header.
///
/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1739965703387137)
#[derive(Debug)]
pub struct GetAccessToken {
    pub app_id: String,
    pub auth_code: String,
    pub secret: SecretString,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessToken {
    pub access_token: String,
    pub advertiser_ids: Vec<String>,
    pub advertiser_id: String,
    pub refresh_token: String,
    pub expires_in: i64,
    pub refresh_token_expires_in: i64,
    pub token_type: String,
    pub scope: String,
}

impl Request for GetAccessToken {
    type Model = AccessToken;
    type Body = Value;

    const METHOD: Method = Method::POST;
    const PATH: &'static str = "/open_api/v1.3/oauth2/access_token/";

    fn body(&self) -> Option<Self::Body> {
        Some(json!({
            "app_id": self.app_id,
            "auth_code": self.auth_code,
            "secret": self.secret.expose_secret(),
        }))
    }

    fn auth(&self) -> Auth<'_> {
        Auth::Anonymous
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorizedAdvertiser {
    pub advertiser_id: String,
    pub advertiser_name: String,
}

/// Advertisers that authorized `access_token`
///
/// The token travels with the request, not with the client.
///
/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1738455508553729)
#[derive(Debug)]
pub struct GetAdvertisers {
    pub app_id: String,
    pub secret: SecretString,
    pub access_token: SecretString,
}

impl Request for GetAdvertisers {
    type Model = Items<AuthorizedAdvertiser>;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/oauth2/advertiser/get/";

    fn query(&self, query: &mut QueryParams) -> Result<()> {
        query.set("app_id", &self.app_id);
        query.set("secret", self.secret.expose_secret());
        Ok(())
    }

    fn auth(&self) -> Auth<'_> {
        Auth::Token(&self.access_token)
    }
}

impl Client {
    pub fn get_access_token(
        &self,
        app_id: &str,
        auth_code: &str,
        secret: impl Into<SecretString>,
    ) -> Route<GetAccessToken> {
        self.request(GetAccessToken {
            app_id: app_id.into(),
            auth_code: auth_code.into(),
            secret: secret.into(),
        })
    }

    pub fn get_advertisers(
        &self,
        app_id: &str,
        secret: impl Into<SecretString>,
        access_token: impl Into<SecretString>,
    ) -> Route<GetAdvertisers> {
        self.request(GetAdvertisers {
            app_id: app_id.into(),
            secret: secret.into(),
            access_token: access_token.into(),
        })
    }
}
