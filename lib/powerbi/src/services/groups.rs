//! Workspace endpoints.

use crate::types::{
    CreateGroupOptions, CreateGroupRequest, DeleteGroupUserOptions, Group, GroupList, GroupUser,
    GroupUserList, ListGroupUsersOptions, ListGroupsOptions, UpdateGroupRequest,
};
use crate::{HttpClient, PowerBiClient, Result, add_options, escape_path};

/// Operations on workspaces and their members.
///
/// Obtained from [`PowerBiClient::groups`].
#[derive(Debug)]
pub struct GroupsService<'c, C> {
    client: &'c PowerBiClient<C>,
}

impl<'c, C> GroupsService<'c, C> {
    pub(crate) fn new(client: &'c PowerBiClient<C>) -> Self {
        Self { client }
    }
}

fn group_path(group_id: &str) -> String {
    format!("groups/{}", escape_path(group_id))
}

impl<C: HttpClient> GroupsService<'_, C> {
    /// Create a workspace.
    pub async fn create(
        &self,
        request: &CreateGroupRequest,
        options: Option<&CreateGroupOptions>,
    ) -> Result<Group> {
        let path = add_options("groups", options);
        self.client
            .post(&path, request)
            .await
            .and_then(PowerBiClient::<C>::decode)
    }

    /// Delete a workspace.
    pub async fn delete(&self, group_id: &str) -> Result<()> {
        self.client.delete(&group_path(group_id)).await.map(drop)
    }

    /// Get one workspace.
    pub async fn get(&self, group_id: &str) -> Result<Group> {
        self.client
            .get(&group_path(group_id))
            .await
            .and_then(PowerBiClient::<C>::decode)
    }

    /// List the workspaces the caller has access to.
    pub async fn list(&self, options: Option<&ListGroupsOptions>) -> Result<Vec<Group>> {
        let path = add_options("groups", options);
        self.client
            .get(&path)
            .await
            .and_then(PowerBiClient::<C>::decode::<GroupList>)
            .map(GroupList::into_inner)
    }

    /// Rename a workspace or change its default dataset storage format.
    pub async fn update(&self, group_id: &str, request: &UpdateGroupRequest) -> Result<Group> {
        self.client
            .patch(&group_path(group_id), request)
            .await
            .and_then(PowerBiClient::<C>::decode)
    }

    /// Grant a principal access to a workspace.
    pub async fn add_user(&self, group_id: &str, user: &GroupUser) -> Result<()> {
        let path = format!("{}/users", group_path(group_id));
        self.client.post(&path, user).await.map(drop)
    }

    /// Revoke a principal's access to a workspace.
    ///
    /// `user` is an email address, or an object ID for groups and apps.
    pub async fn delete_user(
        &self,
        group_id: &str,
        user: &str,
        options: Option<&DeleteGroupUserOptions>,
    ) -> Result<()> {
        let path = format!("{}/users/{}", group_path(group_id), escape_path(user));
        let path = add_options(&path, options);
        self.client.delete(&path).await.map(drop)
    }

    /// List the members of a workspace.
    pub async fn list_users(
        &self,
        group_id: &str,
        options: Option<&ListGroupUsersOptions>,
    ) -> Result<Vec<GroupUser>> {
        let path = add_options(&format!("{}/users", group_path(group_id)), options);
        self.client
            .get(&path)
            .await
            .and_then(PowerBiClient::<C>::decode::<GroupUserList>)
            .map(GroupUserList::into_inner)
    }

    /// Change a member's access right on a workspace.
    pub async fn update_user(&self, group_id: &str, user: &GroupUser) -> Result<()> {
        let path = format!("{}/users", group_path(group_id));
        self.client.put(&path, user).await.map(drop)
    }
}
