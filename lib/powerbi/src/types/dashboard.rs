//! Dashboards and tiles.

use serde::{Deserialize, Serialize};

use super::{ODataList, Subscription, User};

/// Access right of a principal on a dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DashboardUserAccessRight {
    /// No permission to content in the dashboard.
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

/// A principal's access to a dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardUser {
    /// The principal.
    #[serde(flatten)]
    pub user: User,
    /// Access right on the dashboard.
    #[serde(default)]
    pub dashboard_user_access_right: DashboardUserAccessRight,
}

/// A Power BI dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
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
    /// Principals with access to the dashboard.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<DashboardUser>,
    /// Web URL of the dashboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_url: Option<String>,
}

/// `{"value": [Dashboard]}`
pub type DashboardList = ODataList<Dashboard>;

/// Body of an add-dashboard call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddDashboardRequest {
    /// Name of the new dashboard.
    pub name: String,
}

/// A tile on a dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
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

/// `{"value": [Tile]}`
pub type TileList = ODataList<Tile>;

/// What to do when a cloned tile's position is taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionConflictAction {
    /// Place the tile at the end of the dashboard.
    #[default]
    Tail,
    /// Fail the clone.
    Abort,
}

/// Body of a clone-tile call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloneTileRequest {
    /// Dashboard to clone the tile to.
    pub target_dashboard_id: String,
    /// Conflict handling; the service defaults to `Tail`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_conflict_action: Option<PositionConflictAction>,
    /// Dataset to rebind the cloned tile to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_model_id: Option<String>,
    /// Report to rebind the cloned tile to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_report_id: Option<String>,
    /// Workspace of the target dashboard; My workspace when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_workspace_id: Option<String>,
}
