//! Endpoint groups of the Power BI REST API.
//!
//! Each service borrows the [`PowerBiClient`](crate::PowerBiClient) it was
//! obtained from and maps one method to one remote operation. Caller
//! supplied identifiers are escaped as single path segments.

mod admin;
mod dashboards;
mod datasets;
mod embed_token;
mod groups;
mod push_datasets;
mod reports;

pub use admin::{AdminGroupsService, AdminService};
pub use dashboards::DashboardsService;
pub use datasets::DatasetsService;
pub use embed_token::EmbedTokenService;
pub use groups::GroupsService;
pub use push_datasets::PushDatasetsService;
pub use reports::ReportsService;
