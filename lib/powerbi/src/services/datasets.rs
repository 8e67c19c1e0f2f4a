//! Dataset endpoints inside a workspace.

use crate::types::{
    BindToGatewayRequest, Dataset, DatasetExecuteQueriesRequest, DatasetExecuteQueriesResponse,
    DatasetList, DatasetToDataflowLink, DatasetToDataflowLinksResponse, DatasetUser,
    DatasetUsersAccess, Datasource, DatasourceList, DirectQueryRefreshSchedule, Gateway,
    GatewayDatasource, GatewayDatasourceList, GatewayList, MashupParameter, MashupParameterList,
};
use crate::{HttpClient, PowerBiClient, Result, escape_path};

/// Operations on the datasets of a workspace.
///
/// Obtained from [`PowerBiClient::datasets`].
#[derive(Debug)]
pub struct DatasetsService<'c, C> {
    client: &'c PowerBiClient<C>,
}

impl<'c, C> DatasetsService<'c, C> {
    pub(crate) fn new(client: &'c PowerBiClient<C>) -> Self {
        Self { client }
    }
}

fn datasets_path(group_id: &str) -> String {
    format!("groups/{}/datasets", escape_path(group_id))
}

fn dataset_path(group_id: &str, dataset_id: &str) -> String {
    format!("{}/{}", datasets_path(group_id), escape_path(dataset_id))
}

impl<C: HttpClient> DatasetsService<'_, C> {
    /// Bind a dataset to a gateway.
    pub async fn bind_to_gateway(
        &self,
        group_id: &str,
        dataset_id: &str,
        request: &BindToGatewayRequest,
    ) -> Result<()> {
        let path = format!("{}/Default.BindToGateway", dataset_path(group_id, dataset_id));
        self.client.post(&path, request).await.map(drop)
    }

    /// Cancel a running refresh.
    pub async fn cancel_refresh(
        &self,
        group_id: &str,
        dataset_id: &str,
        refresh_id: &str,
    ) -> Result<()> {
        let path = format!(
            "{}/refreshes/{}",
            dataset_path(group_id, dataset_id),
            escape_path(refresh_id)
        );
        self.client.delete(&path).await.map(drop)
    }

    /// Delete a dataset.
    pub async fn delete(&self, group_id: &str, dataset_id: &str) -> Result<()> {
        self.client
            .delete(&dataset_path(group_id, dataset_id))
            .await
            .map(drop)
    }

    /// List the gateways a dataset can be bound to.
    pub async fn discover_gateways(&self, group_id: &str, dataset_id: &str) -> Result<Vec<Gateway>> {
        let path = format!("{}/Default.DiscoverGateways", dataset_path(group_id, dataset_id));
        self.client
            .get(&path)
            .await
            .and_then(PowerBiClient::<C>::decode::<GatewayList>)
            .map(GatewayList::into_inner)
    }

    /// Run DAX queries against a dataset.
    ///
    /// A failed query may still come back with a success status; check
    /// [`DatasetExecuteQueriesResponse::error`] and the per-query errors.
    pub async fn execute_queries(
        &self,
        group_id: &str,
        dataset_id: &str,
        request: &DatasetExecuteQueriesRequest,
    ) -> Result<DatasetExecuteQueriesResponse> {
        let path = format!("{}/executeQueries", dataset_path(group_id, dataset_id));
        self.client
            .post(&path, request)
            .await
            .and_then(PowerBiClient::<C>::decode)
    }

    /// Get one dataset.
    pub async fn get(&self, group_id: &str, dataset_id: &str) -> Result<Dataset> {
        self.client
            .get(&dataset_path(group_id, dataset_id))
            .await
            .and_then(PowerBiClient::<C>::decode)
    }

    /// List the links between the workspace's datasets and upstream dataflows.
    pub async fn upstream_dataflows(&self, group_id: &str) -> Result<Vec<DatasetToDataflowLink>> {
        let path = format!("{}/upstreamDataflows", datasets_path(group_id));
        self.client
            .get(&path)
            .await
            .and_then(PowerBiClient::<C>::decode::<DatasetToDataflowLinksResponse>)
            .map(DatasetToDataflowLinksResponse::into_inner)
    }

    /// List the principals with access to a dataset.
    pub async fn users(&self, group_id: &str, dataset_id: &str) -> Result<Vec<DatasetUser>> {
        let path = format!("{}/users", dataset_path(group_id, dataset_id));
        self.client
            .get(&path)
            .await
            .and_then(PowerBiClient::<C>::decode::<DatasetUsersAccess>)
            .map(DatasetUsersAccess::into_inner)
    }

    /// List the datasets of a workspace.
    pub async fn list(&self, group_id: &str) -> Result<Vec<Dataset>> {
        self.client
            .get(&datasets_path(group_id))
            .await
            .and_then(PowerBiClient::<C>::decode::<DatasetList>)
            .map(DatasetList::into_inner)
    }

    /// List the data sources of a dataset.
    pub async fn datasources(&self, group_id: &str, dataset_id: &str) -> Result<Vec<Datasource>> {
        let path = format!("{}/datasources", dataset_path(group_id, dataset_id));
        self.client
            .get(&path)
            .await
            .and_then(PowerBiClient::<C>::decode::<DatasourceList>)
            .map(DatasourceList::into_inner)
    }

    /// Get the refresh schedule of a DirectQuery or LiveConnection dataset.
    pub async fn direct_query_refresh_schedule(
        &self,
        group_id: &str,
        dataset_id: &str,
    ) -> Result<DirectQueryRefreshSchedule> {
        let path = format!(
            "{}/directQueryRefreshSchedule",
            dataset_path(group_id, dataset_id)
        );
        self.client
            .get(&path)
            .await
            .and_then(PowerBiClient::<C>::decode)
    }

    /// List the gateway data sources a dataset is bound to.
    pub async fn gateway_datasources(
        &self,
        group_id: &str,
        dataset_id: &str,
    ) -> Result<Vec<GatewayDatasource>> {
        let path = format!(
            "{}/Default.GetBoundGatewayDatasources",
            dataset_path(group_id, dataset_id)
        );
        self.client
            .get(&path)
            .await
            .and_then(PowerBiClient::<C>::decode::<GatewayDatasourceList>)
            .map(GatewayDatasourceList::into_inner)
    }

    /// List the Power Query parameters of a dataset.
    pub async fn parameters(&self, group_id: &str, dataset_id: &str) -> Result<Vec<MashupParameter>> {
        let path = format!("{}/parameters", dataset_path(group_id, dataset_id));
        self.client
            .get(&path)
            .await
            .and_then(PowerBiClient::<C>::decode::<MashupParameterList>)
            .map(MashupParameterList::into_inner)
    }
}
