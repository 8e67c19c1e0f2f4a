//! Reports, their pages, and email subscriptions.

use serde::{Deserialize, Serialize};

use super::{ODataList, User};

/// Kind of report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportType {
    /// An interactive Power BI report.
    #[default]
    #[serde(rename = "PowerBIReport")]
    PowerBiReport,
    /// A paginated (RDL) report.
    PaginatedReport,
}

/// Access right of a principal on a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportUserAccessRight {
    /// No permission to content in the report.
    #[default]
    None,
    /// Read access.
    Read,
    /// Read and write access.
    ReadWrite,
    /// Read access, plus sharing.
    ReadReshare,
    /// Read access, plus copy.
    ReadCopy,
    /// Owner rights.
    Owner,
}

/// A principal's access to a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportUser {
    /// The principal.
    #[serde(flatten)]
    pub user: User,
    /// Access right on the report.
    #[serde(default)]
    pub report_user_access_right: ReportUserAccessRight,
}

/// An email subscription to a report or dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Subscription ID.
    pub id: String,
    /// Subscription title.
    #[serde(default)]
    pub title: String,
    /// Name of the subscribed artifact.
    #[serde(default)]
    pub artifact_display_name: String,
    /// ID of the subscribed artifact.
    #[serde(default)]
    pub artifact_id: String,
    /// Type of the subscribed artifact, e.g. `Report`.
    #[serde(default)]
    pub artifact_type: String,
    /// Attachment format, e.g. `PDF`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_format: Option<String>,
    /// Start of the subscription, ISO 8601.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// End of the subscription, ISO 8601.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    /// Delivery frequency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    /// Whether the subscription is active.
    #[serde(default)]
    pub is_enabled: bool,
    /// Whether the email links to the content.
    #[serde(default)]
    pub link_to_content: bool,
    /// Whether the email embeds a snapshot.
    #[serde(default)]
    pub preview_image: bool,
    /// Page name for report subscriptions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_artifact_display_name: Option<String>,
    /// Subscribers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<User>,
}

/// A Power BI report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Report ID.
    pub id: String,
    /// Report name.
    #[serde(default)]
    pub name: String,
    /// App the report belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    /// Dataset the report is built on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
    /// Report description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Embed URL of the report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    /// Whether the caller created the report.
    #[serde(default)]
    pub is_owned_by_me: bool,
    /// Report the app report was published from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_report_id: Option<String>,
    /// Kind of report.
    #[serde(default)]
    pub report_type: ReportType,
    /// Email subscriptions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subscriptions: Vec<Subscription>,
    /// Principals with access to the report.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<ReportUser>,
    /// Web URL of the report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
}

/// `{"value": [Report]}`
pub type ReportList = ODataList<Report>;

/// A page of a report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Page name, used in URLs.
    pub name: String,
    /// Display name of the page.
    #[serde(default)]
    pub display_name: String,
    /// Position of the page in the report.
    #[serde(default)]
    pub order: u32,
}

/// `{"value": [Page]}`
pub type PageList = ODataList<Page>;

/// Body of a clone-report call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloneReportRequest {
    /// Name of the new report.
    pub name: String,
    /// Dataset to bind the new report to; the original's when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_model_id: Option<String>,
    /// Workspace to create the report in; the original's when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_workspace_id: Option<String>,
}

/// Body of a rebind-report call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RebindReportRequest {
    /// Dataset to bind the report to.
    pub dataset_id: String,
}

/// Binds one data source of a paginated report to a gateway data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RdlBindDetail {
    /// Data source name in the report.
    pub data_source_name: String,
    /// Gateway data source ID.
    pub data_source_object_id: String,
}

/// Body of a paginated-report bind-to-gateway call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RdlBindToGatewayRequest {
    /// Gateway to bind to.
    pub gateway_object_id: String,
    /// Per data source bindings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bind_details: Vec<RdlBindDetail>,
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn report_type_wire_names() {
        let report: Report =
            serde_json::from_str(r#"{"id":"r1","reportType":"PowerBIReport"}"#).expect("valid JSON");
        check!(report.report_type == ReportType::PowerBiReport);

        let json = serde_json::to_string(&ReportType::PaginatedReport).expect("serializable");
        check!(json == r#""PaginatedReport""#);
    }

    #[test]
    fn clone_request_omits_absent_targets() {
        let request = CloneReportRequest {
            name: "Copy".to_string(),
            ..CloneReportRequest::default()
        };
        let json = serde_json::to_string(&request).expect("serializable");
        check!(json == r#"{"name":"Copy"}"#);
    }
}
