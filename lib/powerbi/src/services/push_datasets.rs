//! Push dataset endpoints.
//!
//! Each operation targets My workspace; the `_in_group` variant targets a
//! given workspace.

use crate::types::{
    CreateDatasetRequest, Dataset, DatasetOptions, PostRowsRequest, Table, TableList,
};
use crate::{HttpClient, PowerBiClient, Result, add_options, escape_path};

/// Operations on push datasets, their tables and rows.
///
/// Obtained from [`PowerBiClient::push_datasets`].
#[derive(Debug)]
pub struct PushDatasetsService<'c, C> {
    client: &'c PowerBiClient<C>,
}

impl<'c, C> PushDatasetsService<'c, C> {
    pub(crate) fn new(client: &'c PowerBiClient<C>) -> Self {
        Self { client }
    }
}

/// `datasets` in My workspace, `groups/{id}/datasets` otherwise.
fn datasets_path(group_id: Option<&str>) -> String {
    match group_id {
        Some(group_id) => format!("groups/{}/datasets", escape_path(group_id)),
        None => "datasets".to_string(),
    }
}

fn tables_path(group_id: Option<&str>, dataset_id: &str) -> String {
    format!("{}/{}/tables", datasets_path(group_id), escape_path(dataset_id))
}

fn table_path(group_id: Option<&str>, dataset_id: &str, table_name: &str) -> String {
    format!(
        "{}/{}",
        tables_path(group_id, dataset_id),
        escape_path(table_name)
    )
}

impl<C: HttpClient> PushDatasetsService<'_, C> {
    async fn clear_rows(
        &self,
        group_id: Option<&str>,
        dataset_id: &str,
        table_name: &str,
    ) -> Result<()> {
        let path = format!("{}/rows", table_path(group_id, dataset_id, table_name));
        self.client.delete(&path).await.map(drop)
    }

    async fn tables(&self, group_id: Option<&str>, dataset_id: &str) -> Result<Vec<Table>> {
        self.client
            .get(&tables_path(group_id, dataset_id))
            .await
            .and_then(PowerBiClient::<C>::decode::<TableList>)
            .map(TableList::into_inner)
    }

    async fn create(
        &self,
        group_id: Option<&str>,
        request: &CreateDatasetRequest,
        options: Option<&DatasetOptions>,
    ) -> Result<Dataset> {
        let path = add_options(&datasets_path(group_id), options);
        self.client
            .post(&path, request)
            .await
            .and_then(PowerBiClient::<C>::decode)
    }

    async fn add_rows(
        &self,
        group_id: Option<&str>,
        dataset_id: &str,
        table_name: &str,
        request: &PostRowsRequest,
    ) -> Result<()> {
        let path = format!("{}/rows", table_path(group_id, dataset_id, table_name));
        self.client.post(&path, request).await.map(drop)
    }

    async fn replace_table(
        &self,
        group_id: Option<&str>,
        dataset_id: &str,
        table_name: &str,
        table: &Table,
    ) -> Result<Table> {
        self.client
            .put(&table_path(group_id, dataset_id, table_name), table)
            .await
            .and_then(PowerBiClient::<C>::decode)
    }

    /// Delete every row of a table.
    pub async fn delete_rows(&self, dataset_id: &str, table_name: &str) -> Result<()> {
        self.clear_rows(None, dataset_id, table_name).await
    }

    /// Delete every row of a table.
    pub async fn delete_rows_in_group(
        &self,
        group_id: &str,
        dataset_id: &str,
        table_name: &str,
    ) -> Result<()> {
        self.clear_rows(Some(group_id), dataset_id, table_name).await
    }

    /// List the tables of a push dataset.
    pub async fn get_tables(&self, dataset_id: &str) -> Result<Vec<Table>> {
        self.tables(None, dataset_id).await
    }

    /// List the tables of a push dataset.
    pub async fn get_tables_in_group(&self, group_id: &str, dataset_id: &str) -> Result<Vec<Table>> {
        self.tables(Some(group_id), dataset_id).await
    }

    /// Create a push dataset.
    pub async fn post_dataset(
        &self,
        request: &CreateDatasetRequest,
        options: Option<&DatasetOptions>,
    ) -> Result<Dataset> {
        self.create(None, request, options).await
    }

    /// Create a push dataset.
    pub async fn post_dataset_in_group(
        &self,
        group_id: &str,
        request: &CreateDatasetRequest,
        options: Option<&DatasetOptions>,
    ) -> Result<Dataset> {
        self.create(Some(group_id), request, options).await
    }

    /// Append rows to a table.
    pub async fn post_rows(
        &self,
        dataset_id: &str,
        table_name: &str,
        request: &PostRowsRequest,
    ) -> Result<()> {
        self.add_rows(None, dataset_id, table_name, request).await
    }

    /// Append rows to a table.
    pub async fn post_rows_in_group(
        &self,
        group_id: &str,
        dataset_id: &str,
        table_name: &str,
        request: &PostRowsRequest,
    ) -> Result<()> {
        self.add_rows(Some(group_id), dataset_id, table_name, request)
            .await
    }

    /// Replace the schema of a table.
    pub async fn put_table(&self, dataset_id: &str, table_name: &str, table: &Table) -> Result<Table> {
        self.replace_table(None, dataset_id, table_name, table).await
    }

    /// Replace the schema of a table.
    pub async fn put_table_in_group(
        &self,
        group_id: &str,
        dataset_id: &str,
        table_name: &str,
        table: &Table,
    ) -> Result<Table> {
        self.replace_table(Some(group_id), dataset_id, table_name, table)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_names_are_single_segments() {
        assert_eq!(
            table_path(None, "ds", "Sales/2024"),
            "datasets/ds/tables/Sales%2F2024"
        );
        assert_eq!(
            table_path(Some("g"), "ds", "Product"),
            "groups/g/datasets/ds/tables/Product"
        );
    }
}
