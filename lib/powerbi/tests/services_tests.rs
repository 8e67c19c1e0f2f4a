//! Route and payload tests for each endpoint group.

use assert2::{check, let_assert};
use powerbi::PowerBiClient;
use powerbi::types::{
    AddDashboardRequest, BindToGatewayRequest, CloneReportRequest, CloneTileRequest,
    CreateDatasetRequest, DatasetExecuteQueriesRequest, DatasetOptions, DefaultRetentionPolicy,
    DeleteUserOptions, GenerateTokenRequest, GenerateTokenRequestV2,
    GenerateTokenRequestV2Report, GroupOptions, GroupRestoreRequest, GroupUser,
    GroupUserAccessRight, GroupsOptions, PostRowsRequest, PrincipalType, Table,
    UnusedArtifactsOptions,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, body_partial_json, method, path, query_param},
};

async fn client_for(server: &MockServer) -> PowerBiClient {
    PowerBiClient::builder()
        .token("secret-token")
        .base_url(format!("{}/v1.0/myorg/", server.uri()))
        .build()
        .expect("valid client")
}

fn ok_json(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

// ============================================================================
// Groups
// ============================================================================

#[tokio::test]
async fn group_members_round_trip_the_wire() {
    let server = MockServer::start().await;

    let member = GroupUser {
        group_user_access_right: GroupUserAccessRight::Contributor,
        identifier: "john@contoso.com".to_string(),
        principal_type: PrincipalType::User,
        ..GroupUser::default()
    };

    Mock::given(method("PUT"))
        .and(path("/v1.0/myorg/groups/g1/users"))
        .and(body_json(json!({
            "groupUserAccessRight": "Contributor",
            "identifier": "john@contoso.com",
            "principalType": "User",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1.0/myorg/groups/g1/users/john@contoso.com"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/groups/g1/users"))
        .and(query_param("$skip", "5"))
        .respond_with(ok_json(json!({"value": [{
            "groupUserAccessRight": "Admin",
            "identifier": "jane@contoso.com",
            "principalType": "User",
            "emailAddress": "jane@contoso.com",
        }]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let groups = client.groups();
    groups.update_user("g1", &member).await.expect("update");
    groups
        .delete_user("g1", "john@contoso.com", None)
        .await
        .expect("delete");

    let options = powerbi::types::ListGroupUsersOptions {
        skip: 5,
        ..Default::default()
    };
    let members = groups.list_users("g1", Some(&options)).await.expect("list");
    let_assert!([admin] = members.as_slice());
    check!(admin.group_user_access_right == GroupUserAccessRight::Admin);
    check!(admin.email_address.as_deref() == Some("jane@contoso.com"));
}

#[tokio::test]
async fn identifiers_are_escaped_as_one_segment() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/groups/a%2Fb%3Fc"))
        .respond_with(ok_json(json!({"id": "a/b?c", "name": "odd"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let group = client.groups().get("a/b?c").await.expect("group");
    check!(group.name == "odd");
}

#[tokio::test]
async fn dot_identifiers_never_reach_the_network() {
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    let_assert!(Err(err) = client.groups().delete_user("g1", "..", None).await);
    check!(err.is_local());
    check!(let powerbi::Error::InvalidRequest(_) = err);

    let_assert!(Err(err) = client.push_datasets().delete_rows("ds", "..").await);
    check!(err.is_local());

    let_assert!(Err(err) = client.reports().get_in_group(".", "r1").await);
    check!(err.is_local());

    let received = server.received_requests().await.expect("recording enabled");
    check!(received.is_empty());
}

// ============================================================================
// Datasets
// ============================================================================

#[tokio::test]
async fn dataset_actions_use_their_routes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1.0/myorg/groups/g1/datasets/d1/Default.BindToGateway"))
        .and(body_json(json!({"gatewayObjectId": "gw"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1.0/myorg/groups/g1/datasets/d1/refreshes/r9"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/groups/g1/datasets/d1/Default.DiscoverGateways"))
        .respond_with(ok_json(json!({"value": [{"id": "gw", "name": "Main", "type": "Resource"}]})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/groups/g1/datasets/upstreamDataflows"))
        .respond_with(ok_json(json!({"value": [{
            "datasetObjectId": "d1",
            "dataflowObjectId": "df",
            "workspaceObjectId": "g1",
        }]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let datasets = client.datasets();

    let request = BindToGatewayRequest {
        gateway_object_id: "gw".to_string(),
        ..BindToGatewayRequest::default()
    };
    datasets
        .bind_to_gateway("g1", "d1", &request)
        .await
        .expect("bind");
    datasets.cancel_refresh("g1", "d1", "r9").await.expect("cancel");

    let gateways = datasets.discover_gateways("g1", "d1").await.expect("gateways");
    let_assert!([gateway] = gateways.as_slice());
    check!(gateway.kind.as_deref() == Some("Resource"));

    let links = datasets.upstream_dataflows("g1").await.expect("links");
    let_assert!([link] = links.as_slice());
    check!(link.dataflow_object_id == "df");
}

#[tokio::test]
async fn execute_queries_posts_dax() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1.0/myorg/groups/g1/datasets/d1/executeQueries"))
        .and(body_json(json!({"queries": [{"query": "EVALUATE Sales"}]})))
        .respond_with(ok_json(json!({"results": [{"tables": [{"rows": [{"Sales[Amount]": 3}]}]}]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let response = client
        .datasets()
        .execute_queries("g1", "d1", &DatasetExecuteQueriesRequest::query("EVALUATE Sales"))
        .await
        .expect("results");

    let_assert!([result] = response.results.as_slice());
    let_assert!([table] = result.tables.as_slice());
    check!(table.rows == vec![json!({"Sales[Amount]": 3})]);
    check!(response.error.is_none());
}

// ============================================================================
// Reports
// ============================================================================

#[tokio::test]
async fn reports_in_my_workspace_and_in_a_group() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1.0/myorg/reports/r1/Clone"))
        .and(body_json(json!({"name": "Copy"})))
        .respond_with(ok_json(json!({"id": "r2", "name": "Copy"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/groups/g1/reports/r1/pages/ReportSection1"))
        .respond_with(ok_json(
            json!({"name": "ReportSection1", "displayName": "Overview", "order": 0}),
        ))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1.0/myorg/groups/g1/reports/r1/Rebind"))
        .and(body_json(json!({"datasetId": "d2"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let reports = client.reports();

    let request = CloneReportRequest {
        name: "Copy".to_string(),
        ..CloneReportRequest::default()
    };
    let copy = reports.clone("r1", &request).await.expect("clone");
    check!(copy.id == "r2");

    let page = reports
        .get_page_in_group("g1", "r1", "ReportSection1")
        .await
        .expect("page");
    check!(page.display_name == "Overview");

    let rebind = powerbi::types::RebindReportRequest {
        dataset_id: "d2".to_string(),
    };
    reports
        .rebind_in_group("g1", "r1", &rebind)
        .await
        .expect("rebind");
}

// ============================================================================
// Dashboards
// ============================================================================

#[tokio::test]
async fn dashboard_routes_have_a_single_prefix() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/dashboards/db1"))
        .respond_with(ok_json(json!({"id": "db1", "displayName": "Sales"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1.0/myorg/dashboards/db1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/dashboards/db1/tiles/t1"))
        .respond_with(ok_json(json!({"id": "t1", "title": "Revenue"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let dashboards = client.dashboards();

    let dashboard = dashboards.get("db1").await.expect("dashboard");
    check!(dashboard.display_name == "Sales");
    dashboards.delete("db1").await.expect("delete");
    let tile = dashboards.get_tile("db1", "t1").await.expect("tile");
    check!(tile.title.as_deref() == Some("Revenue"));
}

#[tokio::test]
async fn dashboard_lists_are_unwrapped_from_the_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/dashboards"))
        .respond_with(ok_json(json!({"value": [{"id": "db1", "displayName": "Sales"}]})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/dashboards/db1/tiles"))
        .respond_with(ok_json(json!({"value": [{"id": "t1"}, {"id": "t2"}]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let dashboards = client.dashboards().list().await.expect("dashboards");
    check!(dashboards.len() == 1);
    let tiles = client.dashboards().list_tiles("db1").await.expect("tiles");
    check!(tiles.iter().map(|tile| tile.id.as_str()).collect::<Vec<_>>() == ["t1", "t2"]);
}

#[tokio::test]
async fn add_dashboard_and_clone_tile() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1.0/myorg/dashboards"))
        .and(body_json(json!({"name": "New"})))
        .respond_with(ok_json(json!({"id": "db2", "displayName": "New"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1.0/myorg/dashboards/db%201/tiles/t%2F1/Clone"))
        .and(body_json(json!({"targetDashboardId": "db2"})))
        .respond_with(ok_json(json!({"id": "t9"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let dashboard = client
        .dashboards()
        .add(&AddDashboardRequest {
            name: "New".to_string(),
        })
        .await
        .expect("dashboard");
    check!(dashboard.id == "db2");

    let request = CloneTileRequest {
        target_dashboard_id: "db2".to_string(),
        ..CloneTileRequest::default()
    };
    let tile = client
        .dashboards()
        .clone_tile("db 1", "t/1", &request)
        .await
        .expect("tile");
    check!(tile.id == "t9");
}

// ============================================================================
// Embed tokens
// ============================================================================

#[tokio::test]
async fn embed_tokens_per_artifact() {
    let server = MockServer::start().await;
    let token = json!({"token": "H4sI", "tokenId": "49ae", "expiration": "2026-10-17T10:00:00Z"});

    Mock::given(method("POST"))
        .and(path("/v1.0/myorg/GenerateToken"))
        .and(body_json(json!({"reports": [{"id": "r1", "allowEdit": true}]})))
        .respond_with(ok_json(token.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1.0/myorg/groups/g1/dashboards/db1/tiles/t1/GenerateToken"))
        .and(body_json(json!({"accessLevel": "View"})))
        .respond_with(ok_json(token.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1.0/myorg/groups/g1/reports/GenerateToken"))
        .and(body_json(json!({"accessLevel": "Create", "datasetId": "d1"})))
        .respond_with(ok_json(token))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let embed = client.embed_tokens();

    let request = GenerateTokenRequestV2 {
        reports: vec![GenerateTokenRequestV2Report {
            id: "r1".to_string(),
            allow_edit: true,
        }],
        ..GenerateTokenRequestV2::default()
    };
    let issued = embed.generate(&request).await.expect("token");
    check!(issued.token == "H4sI");
    check!(issued.token_id == "49ae");

    let view = GenerateTokenRequest {
        access_level: Some(powerbi::types::TokenAccessLevel::View),
        ..GenerateTokenRequest::default()
    };
    embed
        .generate_for_tile_in_group("g1", "db1", "t1", &view)
        .await
        .expect("tile token");

    let create = GenerateTokenRequest {
        access_level: Some(powerbi::types::TokenAccessLevel::Create),
        dataset_id: Some("d1".to_string()),
        ..GenerateTokenRequest::default()
    };
    embed
        .generate_for_report_creation_in_group("g1", &create)
        .await
        .expect("create token");
}

// ============================================================================
// Admin
// ============================================================================

#[tokio::test]
async fn admin_delete_user_has_one_users_segment() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1.0/myorg/admin/groups/g1/users/sg1"))
        .and(query_param("isGroup", "true"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let options = DeleteUserOptions {
        is_group: true,
        ..DeleteUserOptions::default()
    };
    client
        .admin()
        .groups()
        .delete_user("g1", "sg1", Some(&options))
        .await
        .expect("delete");

    let received = server.received_requests().await.expect("recording enabled");
    let_assert!([request] = received.as_slice());
    check!(request.url.query() == Some("isGroup=true"));
}

#[tokio::test]
async fn admin_listing_inlines_the_expansion() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/admin/groups"))
        .and(query_param("$expand", "users,reports"))
        .and(query_param("$top", "100"))
        .respond_with(ok_json(json!({"value": [{
            "id": "g1",
            "name": "Sales",
            "type": "Workspace",
            "users": [{"groupUserAccessRight": "Admin", "identifier": "a@contoso.com", "principalType": "User"}],
        }]})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/admin/groups/g1"))
        .and(query_param("$expand", "datasets"))
        .respond_with(ok_json(json!({"id": "g1", "datasets": [{"id": "d1", "name": "Sales"}]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let admin = client.admin();

    let options = GroupsOptions {
        group: GroupOptions {
            expand: "users,reports".to_string(),
        },
        top: 100,
        ..GroupsOptions::default()
    };
    let groups = admin.groups().list(Some(&options)).await.expect("groups");
    let_assert!([group] = groups.as_slice());
    check!(group.group.name == "Sales");
    check!(group.users.len() == 1);

    let expand = GroupOptions {
        expand: "datasets".to_string(),
    };
    let group = admin.groups().get("g1", Some(&expand)).await.expect("group");
    let_assert!([dataset] = group.datasets.as_slice());
    check!(dataset.id == "d1");
}

#[tokio::test]
async fn admin_unused_artifacts_and_restore() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/admin/groups/g1/unused"))
        .and(query_param("continuationToken", "abc=="))
        .respond_with(ok_json(json!({"unusedArtifactEntities": []})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1.0/myorg/admin/groups/g1/restore"))
        .and(body_json(json!({"emailAddress": "john@contoso.com"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let groups = client.admin().groups();

    let options = UnusedArtifactsOptions {
        continuation_token: "abc==".to_string(),
    };
    let page = groups
        .unused_artifacts("g1", Some(&options))
        .await
        .expect("page");
    check!(page.continuation_token.is_none());
    check!(page.unused_artifact_entities.is_empty());

    let restore = GroupRestoreRequest {
        email_address: "john@contoso.com".to_string(),
        ..GroupRestoreRequest::default()
    };
    groups.restore("g1", &restore).await.expect("restore");
}

// ============================================================================
// Push datasets
// ============================================================================

#[tokio::test]
async fn push_dataset_lifecycle() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1.0/myorg/datasets"))
        .and(query_param("defaultRetentionPolicy", "basicFIFO"))
        .respond_with(ok_json(json!({"id": "d1", "name": "SalesMarketing", "addRowsAPIEnabled": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1.0/myorg/groups/g1/datasets/d1/tables/Product/rows"))
        .and(body_json(json!({"rows": [{"ProductID": 1}]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1.0/myorg/datasets/d1/tables/Product/rows"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/datasets/d1/tables"))
        .respond_with(ok_json(json!({"value": [{"name": "Product"}]})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v1.0/myorg/groups/g1/datasets/d1/tables/Product"))
        .respond_with(ok_json(json!({"name": "Product", "columns": [{"name": "ProductID", "dataType": "Int64"}]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let push = client.push_datasets();

    let request = CreateDatasetRequest {
        name: "SalesMarketing".to_string(),
        ..CreateDatasetRequest::default()
    };
    let options = DatasetOptions {
        default_retention_policy: Some(DefaultRetentionPolicy::BasicFifo),
    };
    let dataset = push
        .post_dataset(&request, Some(&options))
        .await
        .expect("dataset");
    check!(dataset.add_rows_api_enabled);

    let rows = PostRowsRequest {
        rows: vec![json!({"ProductID": 1})],
    };
    push.post_rows_in_group("g1", "d1", "Product", &rows)
        .await
        .expect("rows");
    push.delete_rows("d1", "Product").await.expect("clear");

    let tables = push.get_tables("d1").await.expect("tables");
    let_assert!([table] = tables.as_slice());
    check!(table.columns.is_empty());

    let schema = Table {
        name: "Product".to_string(),
        ..Table::default()
    };
    let table = push
        .put_table_in_group("g1", "d1", "Product", &schema)
        .await
        .expect("table");
    check!(table.columns.len() == 1);
}

// ============================================================================
// Remaining routes
// ============================================================================

#[tokio::test]
async fn group_update_and_membership_grant() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v1.0/myorg/groups/g1"))
        .and(body_json(json!({"name": "Renamed", "defaultDatasetStorageFormat": "Large"})))
        .respond_with(ok_json(json!({"id": "g1", "name": "Renamed"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1.0/myorg/groups/g1/users"))
        .and(body_json(json!({
            "groupUserAccessRight": "Viewer",
            "identifier": "app-id",
            "principalType": "App",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let groups = client.groups();

    let request = powerbi::types::UpdateGroupRequest {
        name: "Renamed".to_string(),
        default_dataset_storage_format: Some(powerbi::types::DatasetStorageFormat::Large),
    };
    let group = groups.update("g1", &request).await.expect("group");
    check!(group.name == "Renamed");

    let member = GroupUser {
        group_user_access_right: GroupUserAccessRight::Viewer,
        identifier: "app-id".to_string(),
        principal_type: PrincipalType::App,
        ..GroupUser::default()
    };
    groups.add_user("g1", &member).await.expect("grant");
}

#[tokio::test]
async fn dataset_metadata_listings() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/groups/g1/datasets/d1/users"))
        .respond_with(ok_json(json!({"value": [{
            "identifier": "jane@contoso.com",
            "principalType": "User",
            "datasetUserAccessRight": "ReadExplore",
        }]})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/groups/g1/datasets/d1/datasources"))
        .respond_with(ok_json(json!({"value": [{
            "datasourceType": "Sql",
            "connectionDetails": {"server": "db.contoso.com", "database": "Sales"},
            "gatewayId": "gw",
        }]})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/groups/g1/datasets/d1/directQueryRefreshSchedule"))
        .respond_with(ok_json(json!({
            "frequency": 15,
            "days": ["Monday", "Friday"],
            "localTimeZoneId": "UTC",
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/groups/g1/datasets/d1/Default.GetBoundGatewayDatasources"))
        .respond_with(ok_json(json!({"value": [{
            "id": "ds1",
            "gatewayId": "gw",
            "credentialType": "Windows",
            "datasourceType": "Sql",
        }]})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/groups/g1/datasets/d1/parameters"))
        .respond_with(ok_json(json!({"value": [{
            "name": "Region",
            "type": "Text",
            "currentValue": "EMEA",
            "isRequired": true,
        }]})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let datasets = client.datasets();

    let users = datasets.users("g1", "d1").await.expect("users");
    let_assert!([user] = users.as_slice());
    check!(user.user.identifier == "jane@contoso.com");
    check!(user.dataset_user_access_right == powerbi::types::DatasetUserAccessRight::ReadExplore);

    let sources = datasets.datasources("g1", "d1").await.expect("datasources");
    let_assert!([source] = sources.as_slice());
    check!(source.connection_details.server.as_deref() == Some("db.contoso.com"));
    check!(source.gateway_id.as_deref() == Some("gw"));

    let schedule = datasets
        .direct_query_refresh_schedule("g1", "d1")
        .await
        .expect("schedule");
    check!(schedule.frequency == Some(15));
    check!(schedule.days == ["Monday", "Friday"]);
    check!(schedule.times.is_empty());

    let bound = datasets
        .gateway_datasources("g1", "d1")
        .await
        .expect("gateway datasources");
    let_assert!([bound] = bound.as_slice());
    check!(bound.credential_type == powerbi::types::CredentialType::Windows);

    let parameters = datasets.parameters("g1", "d1").await.expect("parameters");
    let_assert!([parameter] = parameters.as_slice());
    check!(parameter.kind == "Text");
    check!(parameter.is_required);
}

#[tokio::test]
async fn report_lifecycle_in_my_workspace() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/reports"))
        .respond_with(ok_json(json!({"value": [{"id": "r1", "name": "Sales", "reportType": "PowerBIReport"}]})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/reports/r1"))
        .respond_with(ok_json(json!({"id": "r1", "name": "Sales", "datasetId": "d1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/reports/r1/pages"))
        .respond_with(ok_json(json!({"value": [
            {"name": "ReportSection1", "displayName": "Overview", "order": 0},
            {"name": "ReportSection2", "displayName": "Details", "order": 1},
        ]})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/reports/r1/pages/ReportSection2"))
        .respond_with(ok_json(json!({"name": "ReportSection2", "displayName": "Details", "order": 1})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1.0/myorg/reports/r1/Rebind"))
        .and(body_json(json!({"datasetId": "d2"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1.0/myorg/reports/r1/Default.BindToGateway"))
        .and(body_json(json!({"gatewayObjectId": "gw"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1.0/myorg/reports/r1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let reports = client.reports();

    let listed = reports.list().await.expect("reports");
    let_assert!([listed] = listed.as_slice());
    check!(listed.report_type == powerbi::types::ReportType::PowerBiReport);

    let report = reports.get("r1").await.expect("report");
    check!(report.dataset_id.as_deref() == Some("d1"));

    let pages = reports.list_pages("r1").await.expect("pages");
    check!(pages.iter().map(|page| page.order).collect::<Vec<_>>() == [0, 1]);
    let page = reports.get_page("r1", "ReportSection2").await.expect("page");
    check!(page.display_name == "Details");

    let rebind = powerbi::types::RebindReportRequest {
        dataset_id: "d2".to_string(),
    };
    reports.rebind("r1", &rebind).await.expect("rebind");

    let bind = powerbi::types::RdlBindToGatewayRequest {
        gateway_object_id: "gw".to_string(),
        ..Default::default()
    };
    reports.bind_to_gateway("r1", &bind).await.expect("bind");
    reports.delete("r1").await.expect("delete");
}

#[tokio::test]
async fn report_lifecycle_in_a_group() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/groups/g1/reports"))
        .respond_with(ok_json(json!({"value": [{"id": "r1"}]})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/groups/g1/reports/r1"))
        .respond_with(ok_json(json!({"id": "r1", "reportType": "PaginatedReport"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/groups/g1/reports/r1/pages"))
        .respond_with(ok_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1.0/myorg/groups/g1/reports/r1/Clone"))
        .and(body_json(json!({"name": "Copy", "targetWorkspaceId": "g2"})))
        .respond_with(ok_json(json!({"id": "r2", "name": "Copy"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1.0/myorg/groups/g1/reports/r1/Default.BindToGateway"))
        .and(body_json(json!({
            "gatewayObjectId": "gw",
            "bindDetails": [{"dataSourceName": "Sales", "dataSourceObjectId": "ds1"}],
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1.0/myorg/groups/g1/reports/r1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let reports = client.reports();

    let listed = reports.list_in_group("g1").await.expect("reports");
    check!(listed.len() == 1);

    let report = reports.get_in_group("g1", "r1").await.expect("report");
    check!(report.report_type == powerbi::types::ReportType::PaginatedReport);

    let pages = reports.list_pages_in_group("g1", "r1").await.expect("pages");
    check!(pages.is_empty());

    let request = CloneReportRequest {
        name: "Copy".to_string(),
        target_workspace_id: Some("g2".to_string()),
        ..CloneReportRequest::default()
    };
    let copy = reports
        .clone_in_group("g1", "r1", &request)
        .await
        .expect("clone");
    check!(copy.id == "r2");

    let bind = powerbi::types::RdlBindToGatewayRequest {
        gateway_object_id: "gw".to_string(),
        bind_details: vec![powerbi::types::RdlBindDetail {
            data_source_name: "Sales".to_string(),
            data_source_object_id: "ds1".to_string(),
        }],
    };
    reports
        .bind_to_gateway_in_group("g1", "r1", &bind)
        .await
        .expect("bind");
    reports.delete_in_group("g1", "r1").await.expect("delete");
}

#[tokio::test]
async fn embed_tokens_in_a_group() {
    let server = MockServer::start().await;
    let token = json!({"token": "H4sI", "tokenId": "49ae", "expiration": "2026-10-17T10:00:00Z"});

    for route in [
        "/v1.0/myorg/groups/g1/dashboards/db1/GenerateToken",
        "/v1.0/myorg/groups/g1/datasets/d1/GenerateToken",
        "/v1.0/myorg/groups/g1/reports/r1/GenerateToken",
    ] {
        Mock::given(method("POST"))
            .and(path(route))
            .and(body_json(json!({"accessLevel": "View", "lifetimeInMinutes": 30})))
            .respond_with(ok_json(token.clone()))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_for(&server).await;
    let embed = client.embed_tokens();
    let request = GenerateTokenRequest {
        access_level: Some(powerbi::types::TokenAccessLevel::View),
        lifetime_in_minutes: Some(30),
        ..GenerateTokenRequest::default()
    };

    let dashboard = embed
        .generate_for_dashboard_in_group("g1", "db1", &request)
        .await
        .expect("dashboard token");
    let dataset = embed
        .generate_for_dataset_in_group("g1", "d1", &request)
        .await
        .expect("dataset token");
    let report = embed
        .generate_for_report_in_group("g1", "r1", &request)
        .await
        .expect("report token");

    for issued in [dashboard, dataset, report] {
        check!(issued.token_id == "49ae");
    }
}

#[tokio::test]
async fn admin_membership_and_update() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1.0/myorg/admin/groups/g1/users"))
        .and(body_json(json!({
            "groupUserAccessRight": "Member",
            "identifier": "sg1",
            "principalType": "Group",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/admin/groups/g1/users"))
        .respond_with(ok_json(json!({"value": [{
            "groupUserAccessRight": "Member",
            "identifier": "sg1",
            "principalType": "Group",
        }]})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/v1.0/myorg/admin/groups/g1"))
        .and(body_partial_json(json!({"name": "Sales EMEA", "description": "Regional"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let admin = client.admin();
    let groups = admin.groups();

    let member = GroupUser {
        group_user_access_right: GroupUserAccessRight::Member,
        identifier: "sg1".to_string(),
        principal_type: PrincipalType::Group,
        ..GroupUser::default()
    };
    groups.add_user("g1", &member).await.expect("grant");

    let users = groups.users("g1").await.expect("users");
    let_assert!([user] = users.as_slice());
    check!(user.principal_type == PrincipalType::Group);

    let update = powerbi::types::AdminGroup {
        group: powerbi::types::Group {
            id: "g1".to_string(),
            name: "Sales EMEA".to_string(),
            ..powerbi::types::Group::default()
        },
        description: Some("Regional".to_string()),
        ..powerbi::types::AdminGroup::default()
    };
    groups.update("g1", &update).await.expect("update");
}

#[tokio::test]
async fn push_dataset_routes_mirror_between_workspaces() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1.0/myorg/groups/g1/datasets"))
        .and(body_json(json!({"name": "Telemetry", "tables": [{"name": "Events", "columns": []}]})))
        .respond_with(ok_json(json!({"id": "d1", "name": "Telemetry"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/myorg/groups/g1/datasets/d1/tables"))
        .respond_with(ok_json(json!({"value": [{"name": "Events"}]})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1.0/myorg/groups/g1/datasets/d1/tables/Events/rows"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1.0/myorg/datasets/d1/tables/Events/rows"))
        .and(body_json(json!({"rows": [{"Level": "warn"}, {"Level": "info"}]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v1.0/myorg/datasets/d1/tables/Events"))
        .and(body_json(json!({"name": "Events", "columns": []})))
        .respond_with(ok_json(json!({"name": "Events"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let push = client.push_datasets();

    let request = CreateDatasetRequest {
        name: "Telemetry".to_string(),
        tables: vec![Table {
            name: "Events".to_string(),
            ..Table::default()
        }],
        ..CreateDatasetRequest::default()
    };
    let dataset = push
        .post_dataset_in_group("g1", &request, None)
        .await
        .expect("dataset");
    check!(dataset.id == "d1");

    let tables = push.get_tables_in_group("g1", "d1").await.expect("tables");
    check!(tables.len() == 1);
    push.delete_rows_in_group("g1", "d1", "Events")
        .await
        .expect("clear");

    let rows = PostRowsRequest {
        rows: vec![json!({"Level": "warn"}), json!({"Level": "info"})],
    };
    push.post_rows("d1", "Events", &rows).await.expect("rows");

    let schema = Table {
        name: "Events".to_string(),
        ..Table::default()
    };
    let table = push.put_table("d1", "Events", &schema).await.expect("table");
    check!(table.name == "Events");
}
