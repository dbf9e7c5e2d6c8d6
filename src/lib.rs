#![warn(unreachable_pub, unused_qualifications)]

//! *A Rust client library for the TikTok Business API (Marketing API v1.3).*
//!
//! # Overview
//!
//! Every endpoint answers with the same envelope (`code`, `message`, `request_id`, `data`).
//! The client unwraps it, turns a non-zero `code` into [Error::Api] and decodes `data`
//! into the endpoint's model. Covered areas:
//!
//! - Accounts, campaigns, ad groups and ads
//! - Creatives and the asset library (videos, images, downloads)
//! - Custom audiences
//! - Integrated reports, report tasks and Smart+ material reports
//! - Business Center transactions and assets
//! - Pixels and offline event sets
//! - Targeting tools and the research ad library
//! - OAuth token exchange
//!
//! # Authentication
//!
//! Requests carry an `Access-Token` header. The token can be provided in two ways:
//! - Environment variable: `TIKTOK_ACCESS_TOKEN`
//! - Programmatically: `Client::new(access_token)`
//!
//! Set `TIKTOK_AD_IS_SANDBOX=true` to target the sandbox host instead of production.
//!
//! # Basic Usage
//!
//! ```rust,no_run
//! #[tokio::main]
//! async fn main() -> tiktok_business::Result<()> {
//!     let client = tiktok_business::client()?;
//!
//!     let mut campaigns = client.get_campaigns("123456789");
//!     campaigns.page = Some(1);
//!     campaigns.page_size = Some(10);
//!
//!     for campaign in campaigns.await?.list {
//!         println!("{}: {}", campaign.campaign_id, campaign.campaign_name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Pagination
//!
//! List endpoints return a [types::Page]. Awaiting a route fetches one page, while
//! [Route::all] walks every page and collects the items:
//!
//! ```rust,no_run
//! # async fn run(client: tiktok_business::Client) -> tiktok_business::Result<()> {
//! let creatives = client.get_creatives("123456789").all().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Raw access
//!
//! Endpoints without a typed wrapper can be reached through [Client::do_get] and
//! [Client::do_post], with [params::QueryParams] encoding the query string.

mod client;
mod error;
pub mod params;
pub mod types;

pub mod account;
pub mod ad;
pub mod adgroup;
pub mod audience;
pub mod authentication;
pub mod bc;
pub mod campaign;
pub mod creative;
pub mod file;
pub mod measurement;
pub mod reporting;
pub mod research;
pub mod tool;

pub type Result<T> = std::result::Result<T, Error>;

pub use client::{
    Auth, Client, ClientBuilder, ClientInner, Download, PRODUCTION_BASE_URI, Paginated, Request,
    Route, SANDBOX_BASE_URI,
};
pub use error::{ApiError, Error};

/// Creates a client from `TIKTOK_ACCESS_TOKEN` and `TIKTOK_AD_IS_SANDBOX`.
pub fn client() -> Result<Client> {
    Client::from_env()
}
