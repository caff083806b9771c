//! Query result model structs.

use serde::Serialize;

/// One sheet row projected onto a single year column.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DepartmentValue {
    /// `NAME_3` key of the row.
    pub department: String,
    /// Observation for the selected year; `None` when the cell was blank or
    /// not numeric.
    pub value: Option<f64>,
}
