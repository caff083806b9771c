//! Read queries over cached index sheets.
//!
//! Each query parses the requested sheet on first use (see
//! [`IndexStore::load_sheet`]); later calls only hit SQLite.

use crate::models::DepartmentValue;
use crate::{IndexStore, Resource, StoreError};
use bfci_index::IndexFamily;
use rusqlite::params;

impl IndexStore {
    /// Year labels of the sheet of `family`, in column order.
    pub fn years(&self, workbook: &Resource, family: IndexFamily) -> Result<Vec<String>, StoreError> {
        self.ensure_sheet(workbook, family)?;
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT year FROM sheet_years
             WHERE workbook = ?1 AND family = ?2
             ORDER BY position",
        )?;
        let years = stmt
            .query_map(params![workbook.id(), family.sheet_name()], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(years)
    }

    /// Whether the sheet of `family` has a column labelled `year`.
    pub fn has_year(&self, workbook: &Resource, family: IndexFamily, year: &str) -> Result<bool, StoreError> {
        self.ensure_sheet(workbook, family)?;
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sheet_years
             WHERE workbook = ?1 AND family = ?2 AND year = ?3",
            params![workbook.id(), family.sheet_name(), year],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Distinct department names of the sheet of `family`, in the order
    /// they first appear.
    pub fn departments(&self, workbook: &Resource, family: IndexFamily) -> Result<Vec<String>, StoreError> {
        self.ensure_sheet(workbook, family)?;
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT department FROM sheet_rows
             WHERE workbook = ?1 AND family = ?2
             GROUP BY department
             ORDER BY MIN(row_position)",
        )?;
        let departments = stmt
            .query_map(params![workbook.id(), family.sheet_name()], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(departments)
    }

    /// Every sheet row projected onto `year`, in sheet order.
    ///
    /// Rows keep their position even when the value is missing. A `year`
    /// that is not a column of the sheet yields rows with no values; check
    /// [`IndexStore::has_year`] first when that matters.
    pub fn year_values(
        &self,
        workbook: &Resource,
        family: IndexFamily,
        year: &str,
    ) -> Result<Vec<DepartmentValue>, StoreError> {
        self.ensure_sheet(workbook, family)?;
        let conn = self.conn.borrow();
        let mut stmt = conn.prepare(
            "SELECT r.department, v.value
             FROM sheet_rows r
             LEFT JOIN index_values v
               ON v.workbook = r.workbook
              AND v.family = r.family
              AND v.row_position = r.row_position
              AND v.year = ?3
             WHERE r.workbook = ?1 AND r.family = ?2
             ORDER BY r.row_position",
        )?;
        let values = stmt
            .query_map(params![workbook.id(), family.sheet_name(), year], |row| {
                Ok(DepartmentValue {
                    department: row.get(0)?,
                    value: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        log::info!(
            "[BFCI Debug] queries: {} rows for {} {}",
            values.len(),
            family,
            year
        );
        Ok(values)
    }
}
