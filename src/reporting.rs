//! Reporting: synchronous integrated reports, async task status and Smart+ material reports
//!
//! Report rows depend on the requested dimensions and metrics, so they are kept as
//! loose JSON objects.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{
    Client, Result,
    client::{Paginated, Request, Route, paginated},
    params::QueryParams,
    types::{Page, PageInfo, Pagination},
};

/// A report row keyed by dimension and metric names
pub type Row = Map<String, Value>;

/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1740302848100353)
#[derive(Debug, Clone, Default)]
pub struct GetIntegratedReport {
    pub report_type: String,
    pub advertiser_id: Option<String>,
    /// Sent as repeated `advertiser_ids` parameters
    pub advertiser_ids: Vec<String>,
    pub bc_id: Option<String>,
    pub service_type: Option<String>,
    pub data_level: Option<String>,
    pub dimensions: Vec<String>,
    pub metrics: Vec<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub query_lifetime: Option<bool>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub order_field: Option<String>,
    pub order_type: Option<String>,
    pub enable_total_metrics: Option<bool>,
    pub multi_adv_report_in_utc_time: Option<bool>,
    pub query_mode: Option<String>,
    pub filtering: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegratedReport {
    pub list: Vec<Row>,
    pub page_info: PageInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_metrics: Option<Row>,
}

impl Request for GetIntegratedReport {
    type Model = IntegratedReport;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/report/integrated/get/";

    fn query(&self, query: &mut QueryParams) -> Result<()> {
        query.set("report_type", &self.report_type);
        query.set_optional("advertiser_id", self.advertiser_id.as_ref());
        for id in &self.advertiser_ids {
            query.add("advertiser_ids", id);
        }
        query.set_optional("bc_id", self.bc_id.as_ref());
        query.set_optional("service_type", self.service_type.as_ref());
        query.set_optional("data_level", self.data_level.as_ref());
        query.string_slice("dimensions", &self.dimensions)?;
        query.string_slice("metrics", &self.metrics)?;
        query.set_optional("start_date", self.start_date.as_ref());
        query.set_optional("end_date", self.end_date.as_ref());
        query.set_optional("query_lifetime", self.query_lifetime);
        query.pagination(&Pagination {
            page: self.page,
            page_size: self.page_size,
        });
        query.set_optional("order_field", self.order_field.as_ref());
        query.set_optional("order_type", self.order_type.as_ref());
        query.set_optional("enable_total_metrics", self.enable_total_metrics);
        query.set_optional(
            "multi_adv_report_in_utc_time",
            self.multi_adv_report_in_utc_time,
        );
        query.set_optional("query_mode", self.query_mode.as_ref());
        query.json("filtering", &self.filtering)?;
        Ok(())
    }
}

impl Paginated for GetIntegratedReport {
    type Item = Row;

    fn set_page(&mut self, page: i64, page_size: i64) {
        self.page = Some(page);
        self.page_size = Some(page_size);
    }

    /// `total_metrics` only describes a single page and is dropped
    fn split(model: IntegratedReport) -> (Vec<Row>, PageInfo) {
        (model.list, model.page_info)
    }
}

/// Status of an asynchronous report task
///
/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1740302781443073)
#[derive(Debug, Clone, Default)]
pub struct CheckReportTask {
    pub task_id: String,
    pub advertiser_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportTask {
    pub task_id: String,
    pub status: String,
    pub download_url: String,
    pub total_count: i64,
}

impl Request for CheckReportTask {
    type Model = ReportTask;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/report/task/check/";

    fn query(&self, query: &mut QueryParams) -> Result<()> {
        query.set("task_id", &self.task_id);
        query.set("advertiser_id", &self.advertiser_id);
        Ok(())
    }
}

/// Smart+ material report broken down by dimension
///
/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1765936670832641)
#[derive(Debug, Clone, Default)]
pub struct GetMaterialReportBreakdown {
    pub advertiser_id: String,
    pub dimensions: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    pub metrics: Vec<String>,
    pub filtering: Option<Value>,
    pub sort_field: Option<String>,
    pub sort_type: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl Request for GetMaterialReportBreakdown {
    type Model = Page<Row>;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/smart_plus/material_report/breakdown/";

    fn query(&self, query: &mut QueryParams) -> Result<()> {
        query.set("advertiser_id", &self.advertiser_id);
        query.set("start_date", &self.start_date);
        query.set("end_date", &self.end_date);
        query.string_slice("dimensions", &self.dimensions)?;
        query.string_slice("metrics", &self.metrics)?;
        query.json("filtering", &self.filtering)?;
        query.set_optional("sort_field", self.sort_field.as_ref());
        query.set_optional("sort_type", self.sort_type.as_ref());
        query.pagination(&Pagination {
            page: self.page,
            page_size: self.page_size,
        });
        Ok(())
    }
}

/// Smart+ material report overview
///
/// [API Reference](https://business-api.tiktok.com/portal/docs?id=1765936643763201)
#[derive(Debug, Clone, Default)]
pub struct GetMaterialReportOverview {
    pub advertiser_id: String,
    pub dimensions: Vec<String>,
    pub metrics: Vec<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub query_lifetime: Option<bool>,
    pub filtering: Option<Value>,
    pub sort_field: Option<String>,
    pub sort_type: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl Request for GetMaterialReportOverview {
    type Model = Page<Row>;
    type Body = ();

    const METHOD: Method = Method::GET;
    const PATH: &'static str = "/open_api/v1.3/smart_plus/material_report/overview/";

    fn query(&self, query: &mut QueryParams) -> Result<()> {
        query.set("advertiser_id", &self.advertiser_id);
        query.string_slice("dimensions", &self.dimensions)?;
        query.string_slice("metrics", &self.metrics)?;
        query.set_optional("start_date", self.start_date.as_ref());
        query.set_optional("end_date", self.end_date.as_ref());
        query.set_optional("query_lifetime", self.query_lifetime);
        query.json("filtering", &self.filtering)?;
        query.set_optional("sort_field", self.sort_field.as_ref());
        query.set_optional("sort_type", self.sort_type.as_ref());
        query.pagination(&Pagination {
            page: self.page,
            page_size: self.page_size,
        });
        Ok(())
    }
}

paginated!(
    GetMaterialReportBreakdown => Row,
    GetMaterialReportOverview => Row,
);

impl Client {
    pub fn get_integrated_report(&self, report_type: &str) -> Route<GetIntegratedReport> {
        self.request(GetIntegratedReport {
            report_type: report_type.into(),
            ..Default::default()
        })
    }

    pub fn check_report_task(&self, task_id: &str, advertiser_id: &str) -> Route<CheckReportTask> {
        self.request(CheckReportTask {
            task_id: task_id.into(),
            advertiser_id: advertiser_id.into(),
        })
    }

    pub fn get_material_report_breakdown(
        &self,
        advertiser_id: &str,
        dimensions: Vec<String>,
        start_date: &str,
        end_date: &str,
    ) -> Route<GetMaterialReportBreakdown> {
        self.request(GetMaterialReportBreakdown {
            advertiser_id: advertiser_id.into(),
            dimensions,
            start_date: start_date.into(),
            end_date: end_date.into(),
            ..Default::default()
        })
    }

    pub fn get_material_report_overview(
        &self,
        advertiser_id: &str,
        dimensions: Vec<String>,
    ) -> Route<GetMaterialReportOverview> {
        self.request(GetMaterialReportOverview {
            advertiser_id: advertiser_id.into(),
            dimensions,
            ..Default::default()
        })
    }
}
