//! Workspaces (groups) and their members.

use serde::{Deserialize, Serialize};

use super::{AzureResource, ODataList, PrincipalType, ServicePrincipalProfile};
use crate::Query;

/// Default storage format for new datasets in a workspace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetStorageFormat {
    /// Small dataset storage format.
    #[default]
    Small,
    /// Large dataset storage format.
    Large,
}

/// A Power BI workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Workspace ID.
    pub id: String,
    /// Workspace name.
    #[serde(default)]
    pub name: String,
    /// Capacity the workspace is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_id: Option<String>,
    /// Power BI dataflow storage account ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataflow_storage_id: Option<String>,
    /// Default storage format for datasets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_dataset_storage_format: Option<DatasetStorageFormat>,
    /// Whether the workspace runs on a dedicated capacity.
    #[serde(default)]
    pub is_on_dedicated_capacity: bool,
    /// Whether the workspace is read-only.
    #[serde(default)]
    pub is_read_only: bool,
    /// Log Analytics workspace linked to this workspace.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_analytics_workspace: Option<AzureResource>,
}

/// `{"value": [Group]}`
pub type GroupList = ODataList<Group>;

/// Body of a create-workspace call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    /// Name of the new workspace.
    pub name: String,
}

/// Body of an update-workspace call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGroupRequest {
    /// New workspace name.
    pub name: String,
    /// New default dataset storage format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_dataset_storage_format: Option<DatasetStorageFormat>,
}

/// Query options for creating a workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
pub struct CreateGroupOptions {
    /// Create a new-style workspace. Only `true` is sent.
    #[query(rename = "workspaceV2")]
    pub workspace_v2: bool,
}

/// Query options for listing workspaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
pub struct ListGroupsOptions {
    /// OData filter, passed through as written.
    #[query(rename = "$filter")]
    pub filter: String,
    /// Number of entries to skip.
    #[query(rename = "$skip")]
    pub skip: u32,
    /// Maximum number of entries returned.
    #[query(rename = "$top")]
    pub top: u32,
}

/// Access right of a principal on a workspace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupUserAccessRight {
    /// Removes permission to the workspace.
    #[default]
    None,
    /// Administrator rights.
    Admin,
    /// Read and explore rights, plus sharing.
    Member,
    /// Read and explore rights, plus content creation.
    Contributor,
    /// Read-only access.
    Viewer,
}

/// A principal's membership in a workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupUser {
    /// Access right on the workspace.
    pub group_user_access_right: GroupUserAccessRight,
    /// User principal name, object ID, or app ID depending on the principal type.
    pub identifier: String,
    /// Kind of principal.
    pub principal_type: PrincipalType,
    /// Display name of the principal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Email address of the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    /// Microsoft Graph object ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_id: Option<String>,
    /// Service principal profile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ServicePrincipalProfile>,
    /// Type of user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

/// `{"value": [GroupUser]}`
pub type GroupUserList = ODataList<GroupUser>;

/// Query options for removing a workspace member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
pub struct DeleteGroupUserOptions {
    /// Service principal profile the user belongs to.
    #[query(rename = "profileId")]
    pub profile_id: String,
}

/// Query options for listing workspace members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
pub struct ListGroupUsersOptions {
    /// Number of entries to skip.
    #[query(rename = "$skip")]
    pub skip: u32,
    /// Maximum number of entries returned.
    #[query(rename = "$top")]
    pub top: u32,
}
