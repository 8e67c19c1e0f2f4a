//! Push datasets: schemas defined and rows supplied through the API.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Datasource, ODataList};
use crate::Query;

/// A column of a push dataset table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Data type, e.g. `Int64`, `Double`, `Boolean`, `Datetime` or `String`.
    pub data_type: String,
    /// Optional display format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_string: Option<String>,
}

/// A DAX measure of a push dataset table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Measure {
    /// Measure name.
    pub name: String,
    /// DAX expression.
    pub expression: String,
    /// Optional display format.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format_string: Option<String>,
}

/// A push dataset table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// Table name.
    pub name: String,
    /// Column schema.
    #[serde(default)]
    pub columns: Vec<Column>,
    /// Measures defined on the table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub measures: Vec<Measure>,
    /// Initial rows.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<Value>,
}

/// `{"value": [Table]}`
pub type TableList = ODataList<Table>;

/// A relationship between two push dataset tables.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    /// Relationship name.
    pub name: String,
    /// Table on the many side.
    pub from_table: String,
    /// Column on the many side.
    pub from_column: String,
    /// Table on the one side.
    pub to_table: String,
    /// Column on the one side.
    pub to_column: String,
    /// Filter direction, e.g. `OneDirection` or `BothDirections`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cross_filtering_behavior: Option<String>,
}

/// Body of a create-push-dataset call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDatasetRequest {
    /// Dataset name.
    pub name: String,
    /// Dataset mode, e.g. `Push` or `PushStreaming`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_mode: Option<String>,
    /// Table schemas.
    pub tables: Vec<Table>,
    /// Data sources of the dataset.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub datasources: Vec<Datasource>,
    /// Relationships between tables.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relationships: Vec<Relationship>,
}

/// How rows are retained once a push table fills up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DefaultRetentionPolicy {
    /// Rows accumulate until the table limit.
    #[default]
    None,
    /// Oldest rows are dropped first past 200,000 rows.
    BasicFifo,
}

impl fmt::Display for DefaultRetentionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "None",
            Self::BasicFifo => "basicFIFO",
        })
    }
}

/// Query options for creating a push dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Query)]
pub struct DatasetOptions {
    /// Retention policy; only sent when set.
    #[query(rename = "defaultRetentionPolicy")]
    pub default_retention_policy: Option<DefaultRetentionPolicy>,
}

/// Body of an add-rows call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostRowsRequest {
    /// Rows, each a JSON object keyed by column name.
    pub rows: Vec<Value>,
}

#[cfg(test)]
mod tests {
    use assert2::check;

    use super::*;
    use crate::ToQueryPairs;

    #[test]
    fn retention_policy_wire_value() {
        let options = DatasetOptions {
            default_retention_policy: Some(DefaultRetentionPolicy::BasicFifo),
        };
        check!(
            options.to_query_pairs()
                == vec![("defaultRetentionPolicy".to_string(), "basicFIFO".to_string())]
        );
        check!(DatasetOptions::default().to_query_pairs().is_empty());
    }

    #[test]
    fn create_dataset_body() {
        let request = CreateDatasetRequest {
            name: "SalesMarketing".to_string(),
            default_mode: Some("Push".to_string()),
            tables: vec![Table {
                name: "Product".to_string(),
                columns: vec![Column {
                    name: "ProductID".to_string(),
                    data_type: "Int64".to_string(),
                    format_string: None,
                }],
                ..Table::default()
            }],
            ..CreateDatasetRequest::default()
        };
        let json = serde_json::to_value(&request).expect("serializable");
        check!(
            json == serde_json::json!({
                "name": "SalesMarketing",
                "defaultMode": "Push",
                "tables": [{
                    "name": "Product",
                    "columns": [{"name": "ProductID", "dataType": "Int64"}],
                }],
            })
        );
    }
}
