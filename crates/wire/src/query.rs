//! Cube query data carrier

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An OLAP query description.
///
/// A pure carrier: fields are public, and the `with_*` methods exist only to
/// make construction read well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CubeQuery {
    /// Caller-assigned query id
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,

    /// Target cube
    #[serde(rename = "cubeName", default, skip_serializing_if = "Option::is_none")]
    pub cube_name: Option<String>,

    /// Measures to aggregate, in order
    #[serde(rename = "measures", default, skip_serializing_if = "Option::is_none")]
    pub measures: Option<Vec<String>>,

    /// Levels to group by, in order
    #[serde(rename = "groupBySet", default, skip_serializing_if = "Option::is_none")]
    pub group_by_set: Option<Vec<String>>,

    /// Selection predicates; shape is owned by the producer
    #[serde(rename = "selection", default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<Vec<Value>>,
}

impl CubeQuery {
    /// Empty query with every field absent
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the query id
    pub fn with_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the cube name
    pub fn with_cube_name(mut self, cube_name: impl Into<String>) -> Self {
        self.cube_name = Some(cube_name.into());
        self
    }

    /// Set the measures
    pub fn with_measures(mut self, measures: Vec<String>) -> Self {
        self.measures = Some(measures);
        self
    }

    /// Set the group-by set
    pub fn with_group_by_set(mut self, group_by_set: Vec<String>) -> Self {
        self.group_by_set = Some(group_by_set);
        self
    }

    /// Set the selection
    pub fn with_selection(mut self, selection: Vec<Value>) -> Self {
        self.selection = Some(selection);
        self
    }
}
