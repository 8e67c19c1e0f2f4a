//! On-premises data gateways and their data sources.

use serde::{Deserialize, Serialize};

use super::{DatasourceConnectionDetails, ODataList};

/// Public key of a gateway, used to encrypt credentials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayPublicKey {
    /// RSA public key exponent.
    #[serde(default)]
    pub exponent: String,
    /// RSA public key modulus.
    #[serde(default)]
    pub modulus: String,
}

/// A Power BI gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gateway {
    /// Gateway ID.
    pub id: String,
    /// Gateway name.
    #[serde(default)]
    pub name: String,
    /// Gateway metadata in JSON format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_annotation: Option<String>,
    /// Gateway connectivity status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gateway_status: Option<String>,
    /// Gateway public key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<GatewayPublicKey>,
    /// Gateway type, e.g. `Resource` or `Personal`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

/// `{"value": [Gateway]}`
pub type GatewayList = ODataList<Gateway>;

/// Kind of credentials a gateway data source uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CredentialType {
    /// User name and password.
    #[default]
    Basic,
    /// Windows credentials.
    Windows,
    /// No credentials.
    Anonymous,
    /// OAuth 2.0 token.
    OAuth2,
    /// Account key.
    Key,
    /// Shared access signature.
    #[serde(rename = "SAS")]
    Sas,
}

/// Credential settings of a gateway data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayDatasourceCredentialDetails {
    /// Whether end-user OAuth2 credentials are used for DirectQuery.
    #[serde(rename = "useEndUserOAuth2Credentials", default)]
    pub use_end_user_oauth2_credentials: bool,
}

/// A data source registered on a gateway.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayDatasource {
    /// Data source ID.
    pub id: String,
    /// Gateway the data source belongs to.
    #[serde(default)]
    pub gateway_id: String,
    /// Connection details as a JSON string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connection_details: Option<String>,
    /// Credential settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential_details: Option<GatewayDatasourceCredentialDetails>,
    /// Kind of credentials.
    #[serde(default)]
    pub credential_type: CredentialType,
    /// Data source name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasource_name: Option<String>,
    /// Data source type, e.g. `Sql`.
    #[serde(default)]
    pub datasource_type: String,
}

/// `{"value": [GatewayDatasource]}`
pub type GatewayDatasourceList = ODataList<GatewayDatasource>;

/// Selects a data source by type and connection details.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasourceSelector {
    /// Data source type.
    pub datasource_type: String,
    /// Connection details of the data source.
    pub connection_details: DatasourceConnectionDetails,
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;

    #[test]
    fn odd_wire_names() {
        let json = r#"{"id":"ds","gatewayId":"gw","credentialType":"SAS",
            "datasourceType":"AzureBlobs",
            "credentialDetails":{"useEndUserOAuth2Credentials":true}}"#;
        let datasource: GatewayDatasource = serde_json::from_str(json).expect("valid JSON");
        check!(datasource.credential_type == CredentialType::Sas);
        check!(
            datasource.credential_details
                == Some(GatewayDatasourceCredentialDetails {
                    use_end_user_oauth2_credentials: true
                })
        );
    }
}
