//! Request and response payloads, and the query options of each endpoint.
//!
//! Payloads are camelCase on the wire. Optional fields are omitted when
//! absent, and every type has a [`Default`] so an empty response body
//! decodes without error.

mod admin;
mod common;
mod dashboard;
mod dataset;
mod embed_token;
mod gateway;
mod group;
mod push_dataset;
mod report;

pub use admin::{
    AdminDashboard, AdminDataflow, AdminDataset, AdminGroup, AdminGroupList, AdminReport,
    AdminTile, DataflowUser, DataflowUserAccessRight, DeleteUserOptions, Encryption,
    EncryptionStatus, GroupOptions, GroupRestoreRequest, GroupType, GroupsOptions,
    UnusedArtifactEntity, UnusedArtifactsOptions, UnusedArtifactsResponse, Workbook,
};
pub use common::{AzureResource, ODataList, PrincipalType, ServicePrincipalProfile, User};
pub use dashboard::{
    AddDashboardRequest, CloneTileRequest, Dashboard, DashboardList, DashboardUser,
    DashboardUserAccessRight, PositionConflictAction, Tile, TileList,
};
pub use dataset::{
    BindToGatewayRequest, Dataset, DatasetExecuteQueriesQuery, DatasetExecuteQueriesQueryResult,
    DatasetExecuteQueriesRequest, DatasetExecuteQueriesResponse,
    DatasetExecuteQueriesSerializationSettings, DatasetExecuteQueriesTableResult, DatasetList,
    DatasetToDataflowLink, DatasetToDataflowLinksResponse, DatasetUser, DatasetUserAccessRight,
    DatasetUsersAccess, Datasource, DatasourceConnectionDetails, DatasourceList,
    DependentDataflow, DirectQueryRefreshSchedule, MashupParameter, MashupParameterList,
};
pub use embed_token::{
    DatasourceIdentity, EffectiveIdentity, EmbedToken, GenerateTokenRequest,
    GenerateTokenRequestV2, GenerateTokenRequestV2Dataset, GenerateTokenRequestV2Report,
    GenerateTokenRequestV2TargetWorkspace, IdentityBlob, TokenAccessLevel, XmlaPermissions,
};
pub use gateway::{
    CredentialType, DatasourceSelector, Gateway, GatewayDatasource,
    GatewayDatasourceCredentialDetails, GatewayDatasourceList, GatewayList, GatewayPublicKey,
};
pub use group::{
    CreateGroupOptions, CreateGroupRequest, DatasetStorageFormat, DeleteGroupUserOptions, Group,
    GroupList, GroupUser, GroupUserAccessRight, GroupUserList, ListGroupUsersOptions,
    ListGroupsOptions, UpdateGroupRequest,
};
pub use push_dataset::{
    Column, CreateDatasetRequest, DatasetOptions, DefaultRetentionPolicy, Measure,
    PostRowsRequest, Relationship, Table, TableList,
};
pub use report::{
    CloneReportRequest, Page, PageList, RdlBindDetail, RdlBindToGatewayRequest, RebindReportRequest,
    Report, ReportList, ReportType, ReportUser, ReportUserAccessRight, Subscription,
};
