//! Organization-wide views of workspaces and their artifacts.

use serde::{Deserialize, Serialize};

use super::{
    DashboardUser, DatasetUser, DependentDataflow, Group, GroupUser, ODataList, Report,
    Subscription, User,
};
use crate::Query;

/// Query options for removing a workspace member as an administrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
pub struct DeleteUserOptions {
    /// The identifier names a security group.
    #[query(rename = "isGroup")]
    pub is_group: bool,
    /// Service principal profile the user belongs to.
    #[query(rename = "profileId")]
    pub profile_id: String,
}

/// Expansion of a single workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
pub struct GroupOptions {
    /// Related entities to inline, e.g. `users,reports`.
    #[query(rename = "$expand")]
    pub expand: String,
}

/// Query options for listing workspaces as an administrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
pub struct GroupsOptions {
    /// Expansion applied to every listed workspace.
    #[query(flatten)]
    pub group: GroupOptions,
    /// Number of entries to skip.
    #[query(rename = "$skip")]
    pub skip: u32,
    /// Maximum number of entries returned; the service requires it.
    #[query(rename = "$top")]
    pub top: u32,
    /// OData filter, passed through as written.
    #[query(rename = "$filter")]
    pub filter: String,
}

/// Query options for listing unused artifacts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
pub struct UnusedArtifactsOptions {
    /// Token from the previous page.
    #[query(rename = "continuationToken")]
    pub continuation_token: String,
}

/// Kind of workspace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupType {
    /// Admin monitoring workspace.
    AdminWorkspace,
    /// Personal workspace of a user (My workspace).
    PersonalGroup,
    /// Legacy personal workspace.
    Personal,
    /// Classic workspace backed by a Microsoft 365 group.
    Group,
    /// New-style workspace.
    #[default]
    Workspace,
}

/// Encryption state of a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EncryptionStatus {
    /// Unable to determine the state.
    #[default]
    Unknown,
    /// Encryption is not supported for this dataset.
    NotSupported,
    /// Encrypted with the workspace key.
    InSyncWithWorkspace,
    /// Not encrypted with the workspace key.
    NotInSyncWithWorkspace,
}

/// Encryption information of a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Encryption {
    /// Encryption state.
    #[serde(default)]
    pub encryption_status: EncryptionStatus,
}

/// Access right of a principal on a dataflow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataflowUserAccessRight {
    /// Removes permission to the dataflow.
    #[default]
    None,
    /// Read access.
    Read,
    /// Read and write access.
    ReadWrite,
    /// Read access, plus sharing.
    ReadReshare,
    /// Owner rights.
    Owner,
}

/// A principal's access to a dataflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataflowUser {
    /// The principal.
    #[serde(flatten)]
    pub user: User,
    /// Access right on the dataflow.
    #[serde(default)]
    pub dataflow_user_access_right: DataflowUserAccessRight,
}

/// A dashboard as seen by an administrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDashboard {
    /// Dashboard ID.
    pub id: String,
    /// Dashboard name.
    #[serde(default)]
    pub display_name: String,
    /// App the dashboard belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    /// Embed URL of the dashboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    /// Whether the dashboard is read-only.
    #[serde(default)]
    pub is_read_only: bool,
    /// Email subscriptions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subscriptions: Vec<Subscription>,
    /// Tiles on the dashboard.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tiles: Vec<AdminTile>,
    /// Principals with access to the dashboard.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<DashboardUser>,
    /// Web URL of the dashboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
    /// Workspace of the dashboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

/// A tile as seen by an administrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminTile {
    /// Tile ID.
    pub id: String,
    /// Tile title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Number of columns the tile spans.
    #[serde(default)]
    pub col_span: u32,
    /// Number of rows the tile spans.
    #[serde(default)]
    pub row_span: u32,
    /// Dataset behind the tile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
    /// Report the tile was pinned from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_id: Option<String>,
    /// Embed data of the tile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_data: Option<String>,
    /// Embed URL of the tile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
}

/// A dataflow as seen by an administrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDataflow {
    /// Dataflow ID.
    pub object_id: String,
    /// Dataflow name.
    #[serde(default)]
    pub name: String,
    /// Owner of the dataflow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub configured_by: Option<String>,
    /// Dataflow description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL of the dataflow definition file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
    /// Principals with access to the dataflow.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<DataflowUser>,
    /// Workspace of the dataflow.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

/// A dataset as seen by an administrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminDataset {
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
    /// Content provider, e.g. `PbixInImportMode`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_provider_type: Option<String>,
    /// Creation time, ISO 8601.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    /// Embed URL for creating reports on this dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_report_embed_url: Option<String>,
    /// Dataset description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Encryption information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encryption: Option<Encryption>,
    /// Whether an effective identity is required to embed.
    #[serde(default)]
    pub is_effective_identity_required: bool,
    /// Whether row-level security roles are required to embed.
    #[serde(default)]
    pub is_effective_identity_roles_required: bool,
    /// Whether the dataset can be shared outside the workspace.
    #[serde(default)]
    pub is_in_place_sharing_enabled: bool,
    /// Whether a gateway is required for refresh.
    #[serde(default)]
    pub is_on_prem_gateway_required: bool,
    /// Whether the dataset can be refreshed.
    #[serde(default)]
    pub is_refreshable: bool,
    /// Embed URL for Q&A on this dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qna_embed_url: Option<String>,
    /// Query scale-out settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_scale_out_settings: Option<serde_json::Value>,
    /// Storage mode.
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
    /// Workspace of the dataset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

/// A report as seen by an administrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminReport {
    /// The report.
    #[serde(flatten)]
    pub report: Report,
    /// Creator of the report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    /// Creation time, ISO 8601.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<String>,
    /// Last modifier of the report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
    /// Last modification time, ISO 8601.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_date_time: Option<String>,
    /// Workspace of the report.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
}

/// An Excel workbook in a workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workbook {
    /// Workbook name.
    #[serde(default)]
    pub name: String,
    /// Dataset the workbook is built on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
}

/// A workspace as seen by an administrator, with optional expansions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminGroup {
    /// The workspace.
    #[serde(flatten)]
    pub group: Group,
    /// Workspace description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the workspace has its own settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_workspace_level_settings: Option<bool>,
    /// Deployment pipeline the workspace is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<String>,
    /// Workspace state, e.g. `Active` or `Deleted`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Kind of workspace.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<GroupType>,
    /// Dashboards, when expanded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dashboards: Vec<AdminDashboard>,
    /// Dataflows, when expanded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dataflows: Vec<AdminDataflow>,
    /// Datasets, when expanded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub datasets: Vec<AdminDataset>,
    /// Reports, when expanded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reports: Vec<AdminReport>,
    /// Members, when expanded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<GroupUser>,
    /// Workbooks, when expanded.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub workbooks: Vec<Workbook>,
}

/// `{"value": [AdminGroup]}`
pub type AdminGroupList = ODataList<AdminGroup>;

/// An artifact nobody opened for at least 30 days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnusedArtifactEntity {
    /// Artifact ID.
    pub artifact_id: String,
    /// Artifact size in megabytes.
    #[serde(rename = "artifactSizeInMB", default)]
    pub artifact_size_in_mb: u64,
    /// Artifact type, e.g. `Report`.
    #[serde(default)]
    pub artifact_type: String,
    /// Creation time, ISO 8601.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<String>,
    /// Artifact name.
    #[serde(default)]
    pub display_name: String,
    /// Last access time, ISO 8601.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_accessed_date_time: Option<String>,
}

/// One page of unused artifacts.
///
/// Pass `continuation_token` back through [`UnusedArtifactsOptions`] to
/// fetch the next page; no more pages remain once it is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnusedArtifactsResponse {
    /// Token for the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_token: Option<String>,
    /// URI of the next page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub continuation_uri: Option<String>,
    /// Artifacts on this page.
    #[serde(default)]
    pub unused_artifact_entities: Vec<UnusedArtifactEntity>,
}

/// Body of a restore-workspace call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupRestoreRequest {
    /// Email of the user to make the workspace admin.
    pub email_address: String,
    /// New workspace name; unchanged when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
}
