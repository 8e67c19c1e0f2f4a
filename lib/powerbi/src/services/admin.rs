//! Organization-wide administration endpoints.
//!
//! These require a Power BI administrator or a service principal with the
//! tenant's read-only admin API access.

use crate::types::{
    AdminGroup, AdminGroupList, DeleteUserOptions, GroupOptions, GroupRestoreRequest, GroupUser,
    GroupUserList, GroupsOptions, UnusedArtifactsOptions, UnusedArtifactsResponse,
};
use crate::{HttpClient, PowerBiClient, Result, add_options, escape_path};

/// Entry point for administration endpoints.
///
/// Obtained from [`PowerBiClient::admin`].
#[derive(Debug)]
pub struct AdminService<'c, C> {
    client: &'c PowerBiClient<C>,
}

impl<'c, C> AdminService<'c, C> {
    pub(crate) fn new(client: &'c PowerBiClient<C>) -> Self {
        Self { client }
    }

    /// Any workspace in the organization.
    #[must_use]
    pub fn groups(&self) -> AdminGroupsService<'c, C> {
        AdminGroupsService {
            client: self.client,
        }
    }
}

/// Operations on any workspace of the organization.
#[derive(Debug)]
pub struct AdminGroupsService<'c, C> {
    client: &'c PowerBiClient<C>,
}

fn admin_group_path(group_id: &str) -> String {
    format!("admin/groups/{}", escape_path(group_id))
}

impl<C: HttpClient> AdminGroupsService<'_, C> {
    /// Grant a principal access to a workspace.
    pub async fn add_user(&self, group_id: &str, user: &GroupUser) -> Result<()> {
        let path = format!("{}/users", admin_group_path(group_id));
        self.client.post(&path, user).await.map(drop)
    }

    /// Revoke a principal's access to a workspace.
    ///
    /// `user` is an email address, or an object ID for groups and apps.
    pub async fn delete_user(
        &self,
        group_id: &str,
        user: &str,
        options: Option<&DeleteUserOptions>,
    ) -> Result<()> {
        let path = format!("{}/users/{}", admin_group_path(group_id), escape_path(user));
        let path = add_options(&path, options);
        self.client.delete(&path).await.map(drop)
    }

    /// Get one workspace, optionally expanding related entities.
    pub async fn get(&self, group_id: &str, options: Option<&GroupOptions>) -> Result<AdminGroup> {
        let path = add_options(&admin_group_path(group_id), options);
        self.client
            .get(&path)
            .await
            .and_then(PowerBiClient::<C>::decode)
    }

    /// List the members of a workspace.
    pub async fn users(&self, group_id: &str) -> Result<Vec<GroupUser>> {
        let path = format!("{}/users", admin_group_path(group_id));
        self.client
            .get(&path)
            .await
            .and_then(PowerBiClient::<C>::decode::<GroupUserList>)
            .map(GroupUserList::into_inner)
    }

    /// List the workspaces of the organization.
    ///
    /// The service rejects the call unless `$top` is set.
    pub async fn list(&self, options: Option<&GroupsOptions>) -> Result<Vec<AdminGroup>> {
        let path = add_options("admin/groups", options);
        self.client
            .get(&path)
            .await
            .and_then(PowerBiClient::<C>::decode::<AdminGroupList>)
            .map(AdminGroupList::into_inner)
    }

    /// List artifacts of a workspace nobody opened in the last 30 days.
    ///
    /// Results are paged; feed the returned continuation token back in.
    pub async fn unused_artifacts(
        &self,
        group_id: &str,
        options: Option<&UnusedArtifactsOptions>,
    ) -> Result<UnusedArtifactsResponse> {
        let path = format!("{}/unused", admin_group_path(group_id));
        let path = add_options(&path, options);
        self.client
            .get(&path)
            .await
            .and_then(PowerBiClient::<C>::decode)
    }

    /// Restore a deleted workspace.
    pub async fn restore(&self, group_id: &str, request: &GroupRestoreRequest) -> Result<()> {
        let path = format!("{}/restore", admin_group_path(group_id));
        self.client.post(&path, request).await.map(drop)
    }

    /// Update the properties of a workspace.
    pub async fn update(&self, group_id: &str, group: &AdminGroup) -> Result<()> {
        self.client
            .patch(&admin_group_path(group_id), group)
            .await
            .map(drop)
    }
}
