//! Report endpoints.
//!
//! Every operation comes in two flavors: the plain one targets My
//! workspace, the `_in_group` one a given workspace.

use crate::types::{
    CloneReportRequest, Page, PageList, RdlBindToGatewayRequest, RebindReportRequest, Report,
    ReportList,
};
use crate::{HttpClient, PowerBiClient, Result, escape_path};

/// Operations on reports and their pages.
///
/// Obtained from [`PowerBiClient::reports`].
#[derive(Debug)]
pub struct ReportsService<'c, C> {
    client: &'c PowerBiClient<C>,
}

impl<'c, C> ReportsService<'c, C> {
    pub(crate) fn new(client: &'c PowerBiClient<C>) -> Self {
        Self { client }
    }
}

/// `reports` in My workspace, `groups/{id}/reports` otherwise.
fn reports_path(group_id: Option<&str>) -> String {
    match group_id {
        Some(group_id) => format!("groups/{}/reports", escape_path(group_id)),
        None => "reports".to_string(),
    }
}

fn report_path(group_id: Option<&str>, report_id: &str) -> String {
    format!("{}/{}", reports_path(group_id), escape_path(report_id))
}

impl<C: HttpClient> ReportsService<'_, C> {
    async fn bind(
        &self,
        group_id: Option<&str>,
        report_id: &str,
        request: &RdlBindToGatewayRequest,
    ) -> Result<()> {
        let path = format!("{}/Default.BindToGateway", report_path(group_id, report_id));
        self.client.post(&path, request).await.map(drop)
    }

    async fn clone_report(
        &self,
        group_id: Option<&str>,
        report_id: &str,
        request: &CloneReportRequest,
    ) -> Result<Report> {
        let path = format!("{}/Clone", report_path(group_id, report_id));
        self.client
            .post(&path, request)
            .await
            .and_then(PowerBiClient::<C>::decode)
    }

    async fn remove(&self, group_id: Option<&str>, report_id: &str) -> Result<()> {
        self.client
            .delete(&report_path(group_id, report_id))
            .await
            .map(drop)
    }

    async fn page(&self, group_id: Option<&str>, report_id: &str, page_name: &str) -> Result<Page> {
        let path = format!(
            "{}/pages/{}",
            report_path(group_id, report_id),
            escape_path(page_name)
        );
        self.client
            .get(&path)
            .await
            .and_then(PowerBiClient::<C>::decode)
    }

    async fn pages(&self, group_id: Option<&str>, report_id: &str) -> Result<Vec<Page>> {
        let path = format!("{}/pages", report_path(group_id, report_id));
        self.client
            .get(&path)
            .await
            .and_then(PowerBiClient::<C>::decode::<PageList>)
            .map(PageList::into_inner)
    }

    async fn report(&self, group_id: Option<&str>, report_id: &str) -> Result<Report> {
        self.client
            .get(&report_path(group_id, report_id))
            .await
            .and_then(PowerBiClient::<C>::decode)
    }

    async fn reports(&self, group_id: Option<&str>) -> Result<Vec<Report>> {
        self.client
            .get(&reports_path(group_id))
            .await
            .and_then(PowerBiClient::<C>::decode::<ReportList>)
            .map(ReportList::into_inner)
    }

    async fn rebind_report(
        &self,
        group_id: Option<&str>,
        report_id: &str,
        request: &RebindReportRequest,
    ) -> Result<()> {
        let path = format!("{}/Rebind", report_path(group_id, report_id));
        self.client.post(&path, request).await.map(drop)
    }

    /// Bind a paginated report's data sources to a gateway.
    pub async fn bind_to_gateway(
        &self,
        report_id: &str,
        request: &RdlBindToGatewayRequest,
    ) -> Result<()> {
        self.bind(None, report_id, request).await
    }

    /// Bind a paginated report's data sources to a gateway.
    pub async fn bind_to_gateway_in_group(
        &self,
        group_id: &str,
        report_id: &str,
        request: &RdlBindToGatewayRequest,
    ) -> Result<()> {
        self.bind(Some(group_id), report_id, request).await
    }

    /// Clone a report.
    pub async fn clone(&self, report_id: &str, request: &CloneReportRequest) -> Result<Report> {
        self.clone_report(None, report_id, request).await
    }

    /// Clone a report.
    pub async fn clone_in_group(
        &self,
        group_id: &str,
        report_id: &str,
        request: &CloneReportRequest,
    ) -> Result<Report> {
        self.clone_report(Some(group_id), report_id, request).await
    }

    /// Delete a report.
    pub async fn delete(&self, report_id: &str) -> Result<()> {
        self.remove(None, report_id).await
    }

    /// Delete a report.
    pub async fn delete_in_group(&self, group_id: &str, report_id: &str) -> Result<()> {
        self.remove(Some(group_id), report_id).await
    }

    /// Get one page of a report by its name.
    pub async fn get_page(&self, report_id: &str, page_name: &str) -> Result<Page> {
        self.page(None, report_id, page_name).await
    }

    /// Get one page of a report by its name.
    pub async fn get_page_in_group(
        &self,
        group_id: &str,
        report_id: &str,
        page_name: &str,
    ) -> Result<Page> {
        self.page(Some(group_id), report_id, page_name).await
    }

    /// List the pages of a report.
    pub async fn list_pages(&self, report_id: &str) -> Result<Vec<Page>> {
        self.pages(None, report_id).await
    }

    /// List the pages of a report.
    pub async fn list_pages_in_group(&self, group_id: &str, report_id: &str) -> Result<Vec<Page>> {
        self.pages(Some(group_id), report_id).await
    }

    /// Get one report.
    pub async fn get(&self, report_id: &str) -> Result<Report> {
        self.report(None, report_id).await
    }

    /// Get one report.
    pub async fn get_in_group(&self, group_id: &str, report_id: &str) -> Result<Report> {
        self.report(Some(group_id), report_id).await
    }

    /// List reports.
    pub async fn list(&self) -> Result<Vec<Report>> {
        self.reports(None).await
    }

    /// List reports.
    pub async fn list_in_group(&self, group_id: &str) -> Result<Vec<Report>> {
        self.reports(Some(group_id)).await
    }

    /// Rebind a report to another dataset.
    pub async fn rebind(&self, report_id: &str, request: &RebindReportRequest) -> Result<()> {
        self.rebind_report(None, report_id, request).await
    }

    /// Rebind a report to another dataset.
    pub async fn rebind_in_group(
        &self,
        group_id: &str,
        report_id: &str,
        request: &RebindReportRequest,
    ) -> Result<()> {
        self.rebind_report(Some(group_id), report_id, request).await
    }
}
