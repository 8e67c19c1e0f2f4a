//! Datasets, their data sources, and the DAX query endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ODataList, User};

/// A Power BI dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Dataset ID.
    pub id: String,
    /// Dataset name.
    #[serde(default)]
    pub name: String,
    /// Whether rows can be pushed through the API.
    #[serde(rename = "addRowsAPIEnabled", default)]
    pub add_rows_api_enabled: bool,
    /// Owner of the dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configured_by: Option<String>,
    /// Creation time, ISO 8601.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    /// Embed URL for creating reports on this dataset.
    #[serde(
        rename = "createReportEmbedURL",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub create_report_embed_url: Option<String>,
    /// Dataset description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether an effective identity is required to embed.
    #[serde(default)]
    pub is_effective_identity_required: bool,
    /// Whether row-level security roles are required to embed.
    #[serde(default)]
    pub is_effective_identity_roles_required: bool,
    /// Whether a gateway is required for refresh.
    #[serde(default)]
    pub is_on_prem_gateway_required: bool,
    /// Whether the dataset can be refreshed.
    #[serde(default)]
    pub is_refreshable: bool,
    /// Embed URL for Q&A on this dataset.
    #[serde(rename = "qnaEmbedURL", default, skip_serializing_if = "Option::is_none")]
    pub qna_embed_url: Option<String>,
    /// Storage mode, e.g. `Abf` or `PremiumFiles`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_storage_mode: Option<String>,
    /// Dataflows this dataset reads from.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub upstream_dataflows: Vec<DependentDataflow>,
    /// Principals with access to the dataset.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<DatasetUser>,
    /// Web URL of the dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
}

/// `{"value": [Dataset]}`
pub type DatasetList = ODataList<Dataset>;

/// A dataflow an artifact depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependentDataflow {
    /// Workspace of the dataflow.
    #[serde(default)]
    pub group_id: String,
    /// Dataflow ID.
    #[serde(default)]
    pub target_dataflow_id: String,
}

/// Access right of a principal on a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetUserAccessRight {
    /// Removes permission to the dataset.
    #[default]
    None,
    /// Read access to content.
    Read,
    /// Read and write access to content.
    ReadWrite,
    /// Read access, plus sharing.
    ReadReshare,
    /// Read and write access, plus sharing.
    ReadWriteReshare,
    /// Read access, plus explore.
    ReadExplore,
    /// Read access, plus sharing and explore.
    ReadReshareExplore,
    /// Read and write access, plus explore.
    ReadWriteExplore,
    /// Read and write access, plus sharing and explore.
    ReadWriteReshareExplore,
}

/// A principal's access to a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetUser {
    /// The principal.
    #[serde(flatten)]
    pub user: User,
    /// Access right on the dataset.
    #[serde(default)]
    pub dataset_user_access_right: DatasetUserAccessRight,
}

/// `{"value": [DatasetUser]}`
pub type DatasetUsersAccess = ODataList<DatasetUser>;

/// Connection details of a data source. Which fields are set depends on
/// the data source type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasourceConnectionDetails {
    /// Connection account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    /// Connection class information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_info: Option<String>,
    /// Connection database.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    /// Connection domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Connection email address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    /// Connection kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Connection login server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_server: Option<String>,
    /// Connection path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Connection server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    /// Connection URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A data source used by a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datasource {
    /// Bound data source ID; empty when not bound to a gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasource_id: Option<String>,
    /// Data source type.
    #[serde(default)]
    pub datasource_type: String,
    /// Connection details.
    #[serde(default)]
    pub connection_details: DatasourceConnectionDetails,
    /// Connection string; deprecated by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_string: Option<String>,
    /// Bound gateway ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_id: Option<String>,
    /// Data source name; deprecated by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// `{"value": [Datasource]}`
pub type DatasourceList = ODataList<Datasource>;

/// Body of a bind-to-gateway call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindToGatewayRequest {
    /// Gateway to bind to.
    pub gateway_object_id: String,
    /// Gateway data sources to bind; all matching ones when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub datasource_object_ids: Vec<String>,
}

/// One DAX query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetExecuteQueriesQuery {
    /// DAX query text.
    pub query: String,
}

/// Serialization settings for query results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetExecuteQueriesSerializationSettings {
    /// Whether null values are included in the result set.
    #[serde(default)]
    pub include_nulls: bool,
}

/// Body of an execute-queries call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetExecuteQueriesRequest {
    /// Queries to run; the service accepts exactly one.
    pub queries: Vec<DatasetExecuteQueriesQuery>,
    /// Result serialization settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serializer_settings: Option<DatasetExecuteQueriesSerializationSettings>,
    /// UPN of a user to impersonate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impersonated_user_name: Option<String>,
}

impl DatasetExecuteQueriesRequest {
    /// Request running a single DAX query.
    #[must_use]
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            queries: vec![DatasetExecuteQueriesQuery {
                query: query.into(),
            }],
            ..Self::default()
        }
    }
}

/// Rows of one table in a query result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetExecuteQueriesTableResult {
    /// Rows, each a JSON object keyed by column name.
    #[serde(default)]
    pub rows: Vec<Value>,
}

/// Result of one query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetExecuteQueriesQueryResult {
    /// Result tables.
    #[serde(default)]
    pub tables: Vec<DatasetExecuteQueriesTableResult>,
    /// Error details if the query failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

/// Response of an execute-queries call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetExecuteQueriesResponse {
    /// One result per query.
    #[serde(default)]
    pub results: Vec<DatasetExecuteQueriesQueryResult>,
    /// Error details if the whole request failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

/// Link between a dataset and an upstream dataflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetToDataflowLink {
    /// Dataset ID.
    #[serde(default)]
    pub dataset_object_id: String,
    /// Dataflow ID.
    #[serde(default)]
    pub dataflow_object_id: String,
    /// Workspace of the dataflow.
    #[serde(default)]
    pub workspace_object_id: String,
}

/// `{"value": [DatasetToDataflowLink]}`
pub type DatasetToDataflowLinksResponse = ODataList<DatasetToDataflowLink>;

/// Refresh schedule of a DirectQuery or LiveConnection dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectQueryRefreshSchedule {
    /// Days to run the refresh, e.g. `Monday`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days: Vec<String>,
    /// Minutes between refreshes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<u32>,
    /// Time zone ID, e.g. `UTC`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_time_zone_id: Option<String>,
    /// Times of day, `hh:mm`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub times: Vec<String>,
}

/// A Power Query parameter of a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MashupParameter {
    /// Parameter name.
    pub name: String,
    /// Parameter type, e.g. `Text`.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Current value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_value: Option<String>,
    /// Whether the parameter must have a value.
    #[serde(default)]
    pub is_required: bool,
    /// Suggested values.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggested_values: Vec<String>,
}

/// `{"value": [MashupParameter]}`
pub type MashupParameterList = ODataList<MashupParameter>;
