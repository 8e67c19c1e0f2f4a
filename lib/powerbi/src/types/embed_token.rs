//! Embed token requests and the token itself.

use serde::{Deserialize, Serialize};

use super::DatasourceSelector;

/// An embed token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedToken {
    /// The token value.
    pub token: String,
    /// Unique token ID, useful when correlating audit logs.
    #[serde(default)]
    pub token_id: String,
    /// Expiry time, ISO 8601 UTC.
    #[serde(default)]
    pub expiration: String,
}

/// What an embed token allows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenAccessLevel {
    /// View only.
    #[default]
    View,
    /// View and edit; reports only.
    Edit,
    /// Create a new report; report creation only.
    Create,
}

/// Access token blob for a data source that supports single sign-on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityBlob {
    /// OAuth2 access token.
    pub value: String,
}

/// Identity applied to a row-level security enabled dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveIdentity {
    /// Effective user name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub username: String,
    /// Row-level security roles.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    /// Datasets the identity applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub datasets: Vec<String>,
    /// Value exposed to the `CUSTOMDATA()` DAX function.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<String>,
    /// Token for single sign-on data sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_blob: Option<IdentityBlob>,
    /// Context recorded in the audit log.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auditable_context: Option<String>,
    /// Paginated reports the identity applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reports: Vec<String>,
}

/// Identity used to connect to a set of data sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasourceIdentity {
    /// Access token blob.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub identity_blob: String,
    /// Data sources the identity applies to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub datasources: Vec<DatasourceSelector>,
}

/// Body of the single-artifact generate-token calls.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTokenRequest {
    /// Access level; the service defaults to `View`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_level: Option<TokenAccessLevel>,
    /// Whether an edited report may be saved as a new one.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub allow_save_as: bool,
    /// Dataset for report creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_id: Option<String>,
    /// Row-level security identities.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identities: Vec<EffectiveIdentity>,
    /// Token lifetime; capped by the Azure AD token lifetime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifetime_in_minutes: Option<u32>,
}

/// XMLA endpoint permissions granted by a token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum XmlaPermissions {
    /// No XMLA access.
    #[default]
    Off,
    /// Read-only XMLA access.
    ReadOnly,
}

/// Dataset entry of a multi-artifact token request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTokenRequestV2Dataset {
    /// Dataset ID.
    pub id: String,
    /// XMLA permissions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xmla_permissions: Option<XmlaPermissions>,
}

/// Report entry of a multi-artifact token request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTokenRequestV2Report {
    /// Report ID.
    pub id: String,
    /// Whether the report may be edited.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub allow_edit: bool,
}

/// Workspace a token may save new reports into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateTokenRequestV2TargetWorkspace {
    /// Workspace ID.
    pub id: String,
}

/// Body of the multi-artifact generate-token call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTokenRequestV2 {
    /// Datasets covered by the token.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub datasets: Vec<GenerateTokenRequestV2Dataset>,
    /// Identities for single sign-on data sources.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub datasource_identities: Vec<DatasourceIdentity>,
    /// Row-level security identities.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identities: Vec<EffectiveIdentity>,
    /// Token lifetime; capped by the Azure AD token lifetime.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifetime_in_minutes: Option<u32>,
    /// Reports covered by the token.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reports: Vec<GenerateTokenRequestV2Report>,
    /// Workspaces new reports may be saved into.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub target_workspaces: Vec<GenerateTokenRequestV2TargetWorkspace>,
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn v2_request_sends_only_what_is_set() {
        let request = GenerateTokenRequestV2 {
            datasets: vec![GenerateTokenRequestV2Dataset {
                id: "ds".to_string(),
                xmla_permissions: Some(XmlaPermissions::ReadOnly),
            }],
            reports: vec![GenerateTokenRequestV2Report {
                id: "r".to_string(),
                allow_edit: false,
            }],
            ..GenerateTokenRequestV2::default()
        };
        let json = serde_json::to_value(&request).expect("serializable");
        check!(
            json == serde_json::json!({
                "datasets": [{"id": "ds", "xmlaPermissions": "ReadOnly"}],
                "reports": [{"id": "r"}],
            })
        );
    }

    #[test]
    fn effective_identity_wire_names() {
        let identity = EffectiveIdentity {
            username: "john@contoso.com".to_string(),
            roles: vec!["Sales".to_string()],
            datasets: vec!["ds".to_string()],
            identity_blob: Some(IdentityBlob {
                value: "blob".to_string(),
            }),
            ..EffectiveIdentity::default()
        };
        let json = serde_json::to_value(&identity).expect("serializable");
        check!(
            json == serde_json::json!({
                "username": "john@contoso.com",
                "roles": ["Sales"],
                "datasets": ["ds"],
                "identityBlob": {"value": "blob"},
            })
        );
    }
}
