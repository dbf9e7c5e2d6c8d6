//! Asset library: video and image lookups
//!
//! Media files themselves are fetched with [Client::download].

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    Client, Error, Result,
    client::{Request, Route, paginated},
    params::QueryParams,
    types::{Items, Page, Pagination},
};

const MAX_VIDEO_IDS: usize = 60;
const MAX_IMAGE_IDS: usize = 100;

fn check_ids(key: &str, ids: &[String], max: usize) -> Result<()> {
    if ids.is_empty() {
        return Err(Error::Validation(format!("{key} cannot be empty")));
    }
    if ids.len() > max {
        return Err(Error::Validation(format!(
            "{key} cannot exceed {max} items"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub video_id: String,
    pub file_name: String,
    pub format: String,
    pub width: i64,
    pub height: i64,
    pub duration: f64,
    pub size: i64,
    pub material_id: String,
    pub poster_url: String,
    pub preview_url: String,
    /// Either a timestamp or a date string depending on the account
    pub preview_url_expire_time: Value,
    pub bit_rate: i64,
    pub allow_download: bool,
    pub allowed_placements: Vec<String>,
    pub create_time: String,
    pub modify_time: String,
}

/// Details of up to 60 videos
///
/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1740050161973250)
#[derive(Debug, Clone, Default)]
pub struct GetVideoInfo {
    pub advertiser_id: String,
    pub video_ids: Vec<String>,
}

impl Request for GetVideoInfo {
    type Model = Items<Video>;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/file/video/ad/info/";

    fn query(&self, query: &mut QueryParams) -> Result<()> {
        check_ids("video_ids", &self.video_ids, MAX_VIDEO_IDS)?;

        query.set("advertiser_id", &self.advertiser_id);
        query.string_slice("video_ids", &self.video_ids)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VideoFiltering {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub video_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ratio: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub video_tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time_max: Option<String>,
}

/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1740050472410114)
#[derive(Debug, Clone, Default)]
pub struct SearchVideos {
    pub advertiser_id: String,
    pub filtering: Option<VideoFiltering>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl Request for SearchVideos {
    type Model = Page<Video>;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/file/video/ad/search/";

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

paginated!(SearchVideos => Video);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub image_id: String,
    pub file_name: String,
    pub format: String,
    pub width: i64,
    pub height: i64,
    pub size: i64,
    pub material_id: String,
    pub image_url: String,
    pub signature: String,
    pub allowed_placements: Vec<String>,
    pub create_time: String,
    pub modify_time: String,
}

/// Details of up to 100 images
///
/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1740051721711618)
#[derive(Debug, Clone, Default)]
pub struct GetImageInfo {
    pub advertiser_id: String,
    pub image_ids: Vec<String>,
}

impl Request for GetImageInfo {
    type Model = Items<Image>;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/file/image/ad/info/";

    fn query(&self, query: &mut QueryParams) -> Result<()> {
        check_ids("image_ids", &self.image_ids, MAX_IMAGE_IDS)?;

        query.set("advertiser_id", &self.advertiser_id);
        query.string_slice("image_ids", &self.image_ids)?;
        Ok(())
    }
}

impl Client {
    pub fn get_video_info(&self, advertiser_id: &str, video_ids: Vec<String>) -> Route<GetVideoInfo> {
        self.request(GetVideoInfo {
            advertiser_id: advertiser_id.into(),
            video_ids,
        })
    }

    pub fn search_videos(&self, advertiser_id: &str) -> Route<SearchVideos> {
        self.request(SearchVideos {
            advertiser_id: advertiser_id.into(),
            ..Default::default()
        })
    }

    pub fn get_image_info(&self, advertiser_id: &str, image_ids: Vec<String>) -> Route<GetImageInfo> {
        self.request(GetImageInfo {
            advertiser_id: advertiser_id.into(),
            image_ids,
        })
    }
}
