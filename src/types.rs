//! Types shared by every endpoint

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

use crate::{Error, Result, error::ApiError};

/// The uniform wrapper around every Business API response
///
/// A `code` of `0` means success. A missing `code` is treated the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub data: Value,
}

impl Envelope {
    pub fn is_success(&self) -> bool {
        self.code.unwrap_or_default() == 0
    }

    /// Turns a non-zero `code` into [Error::Api]
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            return Ok(self);
        }

        Err(ApiError {
            code: self.code.unwrap_or_default(),
            message: self.message.unwrap_or_default(),
            request_id: self.request_id.unwrap_or_default(),
        }
        .into())
    }

    /// Decodes the `data` payload
    ///
    /// A missing or `null` payload decodes as an empty object when the model
    /// cannot take `null` itself, so models with defaulted fields come back zeroed.
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        if !self.data.is_null() {
            return serde_json::from_value(self.data).map_err(Error::Data);
        }

        serde_json::from_value(Value::Null).or_else(|null_err| {
            serde_json::from_value(Value::Object(Map::new())).map_err(|_| Error::Data(null_err))
        })
    }
}

/// Pagination metadata returned next to list results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    pub page: i64,
    pub page_size: i64,
    pub total_number: i64,
    pub total_page: i64,
}

/// Requested page, both halves optional so the server default applies when unset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// A paginated list result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
    #[serde(default)]
    pub page_info: PageInfo,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            list: Vec::new(),
            page_info: PageInfo::default(),
        }
    }
}

/// A list result without pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Items<T> {
    #[serde(default = "Vec::new")]
    pub list: Vec<T>,
}

impl<T> Default for Items<T> {
    fn default() -> Self {
        Self { list: Vec::new() }
    }
}
