//! Embed token generation.

use crate::types::{EmbedToken, GenerateTokenRequest, GenerateTokenRequestV2};
use crate::{HttpClient, PowerBiClient, Result, escape_path};

/// Generates embed tokens for Power BI content.
///
/// Obtained from [`PowerBiClient::embed_tokens`].
#[derive(Debug)]
pub struct EmbedTokenService<'c, C> {
    client: &'c PowerBiClient<C>,
}

impl<'c, C> EmbedTokenService<'c, C> {
    pub(crate) fn new(client: &'c PowerBiClient<C>) -> Self {
        Self { client }
    }
}

impl<C: HttpClient> EmbedTokenService<'_, C> {
    async fn generate_at(&self, path: &str, request: &GenerateTokenRequest) -> Result<EmbedToken> {
        self.client
            .post(path, request)
            .await
            .and_then(PowerBiClient::<C>::decode)
    }

    /// Generate a token covering several reports, datasets and target
    /// workspaces at once.
    pub async fn generate(&self, request: &GenerateTokenRequestV2) -> Result<EmbedToken> {
        self.client
            .post("GenerateToken", request)
            .await
            .and_then(PowerBiClient::<C>::decode)
    }

    /// Generate a token to view a dashboard.
    pub async fn generate_for_dashboard_in_group(
        &self,
        group_id: &str,
        dashboard_id: &str,
        request: &GenerateTokenRequest,
    ) -> Result<EmbedToken> {
        let path = format!(
            "groups/{}/dashboards/{}/GenerateToken",
            escape_path(group_id),
            escape_path(dashboard_id)
        );
        self.generate_at(&path, request).await
    }

    /// Generate a token for a dataset, e.g. to embed Q&A.
    pub async fn generate_for_dataset_in_group(
        &self,
        group_id: &str,
        dataset_id: &str,
        request: &GenerateTokenRequest,
    ) -> Result<EmbedToken> {
        let path = format!(
            "groups/{}/datasets/{}/GenerateToken",
            escape_path(group_id),
            escape_path(dataset_id)
        );
        self.generate_at(&path, request).await
    }

    /// Generate a token to create a new report; set
    /// [`GenerateTokenRequest::dataset_id`].
    pub async fn generate_for_report_creation_in_group(
        &self,
        group_id: &str,
        request: &GenerateTokenRequest,
    ) -> Result<EmbedToken> {
        let path = format!("groups/{}/reports/GenerateToken", escape_path(group_id));
        self.generate_at(&path, request).await
    }

    /// Generate a token to view or edit a report.
    pub async fn generate_for_report_in_group(
        &self,
        group_id: &str,
        report_id: &str,
        request: &GenerateTokenRequest,
    ) -> Result<EmbedToken> {
        let path = format!(
            "groups/{}/reports/{}/GenerateToken",
            escape_path(group_id),
            escape_path(report_id)
        );
        self.generate_at(&path, request).await
    }

    /// Generate a token to view a single tile.
    pub async fn generate_for_tile_in_group(
        &self,
        group_id: &str,
        dashboard_id: &str,
        tile_id: &str,
        request: &GenerateTokenRequest,
    ) -> Result<EmbedToken> {
        let path = format!(
            "groups/{}/dashboards/{}/tiles/{}/GenerateToken",
            escape_path(group_id),
            escape_path(dashboard_id),
            escape_path(tile_id)
        );
        self.generate_at(&path, request).await
    }
}
