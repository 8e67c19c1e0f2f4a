//! Dashboard and tile endpoints in My workspace.

use crate::types::{
    AddDashboardRequest, CloneTileRequest, Dashboard, DashboardList, Tile, TileList,
};
use crate::{HttpClient, PowerBiClient, Result, escape_path};

/// Operations on the dashboards of My workspace.
///
/// Obtained from [`PowerBiClient::dashboards`].
#[derive(Debug)]
pub struct DashboardsService<'c, C> {
    client: &'c PowerBiClient<C>,
}

impl<'c, C> DashboardsService<'c, C> {
    pub(crate) fn new(client: &'c PowerBiClient<C>) -> Self {
        Self { client }
    }
}

fn dashboard_path(dashboard_id: &str) -> String {
    format!("dashboards/{}", escape_path(dashboard_id))
}

fn tile_path(dashboard_id: &str, tile_id: &str) -> String {
    format!("{}/tiles/{}", dashboard_path(dashboard_id), escape_path(tile_id))
}

impl<C: HttpClient> DashboardsService<'_, C> {
    /// Create an empty dashboard.
    pub async fn add(&self, request: &AddDashboardRequest) -> Result<Dashboard> {
        self.client
            .post("dashboards", request)
            .await
            .and_then(PowerBiClient::<C>::decode)
    }

    /// Clone a tile onto another dashboard.
    pub async fn clone_tile(
        &self,
        dashboard_id: &str,
        tile_id: &str,
        request: &CloneTileRequest,
    ) -> Result<Tile> {
        let path = format!("{}/Clone", tile_path(dashboard_id, tile_id));
        self.client
            .post(&path, request)
            .await
            .and_then(PowerBiClient::<C>::decode)
    }

    /// Delete a dashboard.
    pub async fn delete(&self, dashboard_id: &str) -> Result<()> {
        self.client
            .delete(&dashboard_path(dashboard_id))
            .await
            .map(drop)
    }

    /// Get one dashboard.
    pub async fn get(&self, dashboard_id: &str) -> Result<Dashboard> {
        self.client
            .get(&dashboard_path(dashboard_id))
            .await
            .and_then(PowerBiClient::<C>::decode)
    }

    /// List dashboards.
    pub async fn list(&self) -> Result<Vec<Dashboard>> {
        self.client
            .get("dashboards")
            .await
            .and_then(PowerBiClient::<C>::decode::<DashboardList>)
            .map(DashboardList::into_inner)
    }

    /// Get one tile of a dashboard.
    pub async fn get_tile(&self, dashboard_id: &str, tile_id: &str) -> Result<Tile> {
        self.client
            .get(&tile_path(dashboard_id, tile_id))
            .await
            .and_then(PowerBiClient::<C>::decode)
    }

    /// List the tiles of a dashboard.
    pub async fn list_tiles(&self, dashboard_id: &str) -> Result<Vec<Tile>> {
        let path = format!("{}/tiles", dashboard_path(dashboard_id));
        self.client
            .get(&path)
            .await
            .and_then(PowerBiClient::<C>::decode::<TileList>)
            .map(TileList::into_inner)
    }
}
