//! Shapes shared by several resources.

use serde::{Deserialize, Serialize};

/// OData collection envelope: `{"value": [...]}`.
///
/// A missing `value` (or an empty body) yields an empty list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ODataList<T> {
    /// The listed items.
    #[serde(default = "Vec::new")]
    pub value: Vec<T>,
}

impl<T> Default for ODataList<T> {
    fn default() -> Self {
        Self { value: Vec::new() }
    }
}

impl<T> ODataList<T> {
    /// Unwrap the listed items.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.value
    }
}

/// Kind of principal an access entry refers to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrincipalType {
    /// No principal type; used for whole-organization access.
    #[default]
    None,
    /// A user.
    User,
    /// A security group.
    Group,
    /// A service principal.
    App,
}

/// Service principal profile, for multi-tenant embedding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServicePrincipalProfile {
    /// Profile display name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub display_name: String,
    /// Profile ID.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
}

/// A principal with access to an artifact.
///
/// Embedded in the per-artifact access entries (`DatasetUser`,
/// `ReportUser`, ...) which add their own access right.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User principal name, object ID, or app ID depending on the principal type.
    pub identifier: String,
    /// Display name of the principal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Email address of the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    /// Microsoft Graph object ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_id: Option<String>,
    /// Kind of principal.
    #[serde(default)]
    pub principal_type: PrincipalType,
    /// Service principal profile, when acting on behalf of one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ServicePrincipalProfile>,
    /// Type of user, e.g. `Member` or `Guest`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

/// An Azure resource, such as a Log Analytics workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureResource {
    /// Resource identifier in Power BI.
    pub id: String,
    /// Resource group within the subscription.
    #[serde(default)]
    pub resource_group: String,
    /// Name of the resource.
    #[serde(default)]
    pub resource_name: String,
    /// Azure subscription ID.
    #[serde(default)]
    pub subscription_id: String,
}
