//! Loading functions that populate the store's caches.
//!
//! # Sheet layout
//!
//! Every index sheet has a header row. The first header (trimmed) must be
//! `NAME_3`; every other non-blank header is a year label. Header cells are
//! stringified the way the workbook shows them, so a numeric `2020` header
//! becomes the label `"2020"`.
//!
//! ```text
//! NAME_3   | 2019 | 2020 | 2021
//! Kaya     | 0.84 | 1.02 |
//! Dori     | 0.66 | 0.91 | 1.2
//! ```

use crate::{IndexStore, Resource, StoreError, Workbook};
use bfci_index::boundary::{BoundarySet, FADA_NGOURMA};
use bfci_index::department::DEPARTMENT_KEY;
use bfci_index::IndexFamily;
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use rusqlite::params;
use std::collections::hash_map::Entry;
use std::io::Cursor;
use std::rc::Rc;

/// Text of a cell as shown to users: trimmed, integral numbers without a
/// decimal part.
pub(crate) fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.is_finite() && f.fract() == 0.0 => format!("{}", *f as i64),
        other => other.to_string().trim().to_string(),
    }
}

/// Numeric observation held by a cell, if any.
///
/// Blank, boolean, date and error cells are missing; text is accepted only
/// when it parses as a number.
pub(crate) fn cell_value(cell: &Data) -> Option<f64> {
    match cell {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        Data::String(s) => s.trim().replace(',', ".").parse::<f64>().ok(),
        _ => None,
    }
    .filter(|v| !v.is_nan())
}

/// Year columns of a header row as `(column index, label)`, skipping the
/// key column, blank labels and repeated labels.
fn year_columns(sheet: &str, labels: &[String]) -> Vec<(usize, String)> {
    let mut years: Vec<(usize, String)> = Vec::new();
    for (column, label) in labels.iter().enumerate().skip(1) {
        if label.is_empty() {
            log::warn!(
                "[BFCI Debug] loader: sheet '{}' column {} has no header, ignored",
                sheet,
                column
            );
            continue;
        }
        if years.iter().any(|(_, year)| year == label) {
            log::warn!(
                "[BFCI Debug] loader: sheet '{}' repeats year '{}' in column {}, keeping the first",
                sheet,
                label,
                column
            );
            continue;
        }
        years.push((column, label.clone()));
    }
    years
}

impl IndexStore {
    /// Department boundaries for `resource`, parsed and corrected on first use.
    pub fn boundaries(&self, resource: &Resource) -> Result<Rc<BoundarySet>, StoreError> {
        let id = resource.id();
        if let Some(cached) = self.boundaries.borrow().get(&id) {
            return Ok(Rc::clone(cached));
        }

        let data = resource.read()?;
        let invalid = |source| StoreError::Boundaries {
            resource: resource.to_string(),
            source,
        };
        let mut set = BoundarySet::from_geojson_slice(&data).map_err(invalid)?;
        set.apply_correction(&FADA_NGOURMA).map_err(invalid)?;

        let duplicates = set.duplicate_names();
        if !duplicates.is_empty() {
            log::warn!(
                "[BFCI Debug] loader: {} has repeated department names: {:?}",
                resource,
                duplicates
            );
        }
        log::info!(
            "[BFCI Debug] loader: Loaded {} departments from {}",
            set.len(),
            resource
        );

        let set = Rc::new(set);
        self.boundaries.borrow_mut().insert(id, Rc::clone(&set));
        Ok(set)
    }

    /// Whether the sheet of `family` from workbook `workbook_id` is cached.
    pub fn is_sheet_loaded(&self, workbook_id: &str, family: IndexFamily) -> Result<bool, StoreError> {
        let conn = self.conn.borrow();
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM sheets WHERE workbook = ?1 AND family = ?2",
            params![workbook_id, family.sheet_name()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Parse the sheet of `family` into the database unless already cached.
    pub(crate) fn ensure_sheet(&self, workbook: &Resource, family: IndexFamily) -> Result<(), StoreError> {
        let id = workbook.id();
        if self.is_sheet_loaded(&id, family)? {
            return Ok(());
        }
        let range = self.read_sheet(workbook, family)?;
        self.load_sheet(&id, family, &range)?;
        Ok(())
    }

    /// Read one worksheet, opening (and caching) the workbook if needed.
    fn read_sheet(&self, workbook: &Resource, family: IndexFamily) -> Result<Range<Data>, StoreError> {
        let unreadable = |source| StoreError::Workbook {
            resource: workbook.to_string(),
            source,
        };

        let mut workbooks = self.workbooks.borrow_mut();
        let sheets = match workbooks.entry(workbook.id()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let data = workbook.read()?;
                let opened: Workbook =
                    open_workbook_auto_from_rs(Cursor::new(data)).map_err(unreadable)?;
                log::info!(
                    "[BFCI Debug] loader: Opened workbook {} with sheets {:?}",
                    workbook,
                    opened.sheet_names()
                );
                entry.insert(opened)
            }
        };

        let sheet = family.sheet_name();
        if !sheets.sheet_names().iter().any(|name| name == sheet) {
            return Err(StoreError::SheetNotFound {
                resource: workbook.to_string(),
                sheet: sheet.to_string(),
            });
        }
        sheets.worksheet_range(sheet).map_err(unreadable)
    }

    /// Load a parsed worksheet as the sheet of `family` in `workbook_id`.
    ///
    /// Rows with a blank department are skipped. Loading the same sheet
    /// again replaces its previous contents. Returns the number of rows
    /// stored.
    pub fn load_sheet(
        &self,
        workbook_id: &str,
        family: IndexFamily,
        range: &Range<Data>,
    ) -> Result<usize, StoreError> {
        let sheet = family.sheet_name();
        let mut rows = range.rows();
        let labels: Vec<String> = rows
            .next()
            .map(|header| header.iter().map(cell_text).collect())
            .unwrap_or_default();
        let key = labels.first().map(String::as_str).unwrap_or_default();
        if key != DEPARTMENT_KEY {
            return Err(StoreError::MissingKeyColumn {
                sheet: sheet.to_string(),
                found: key.to_string(),
            });
        }
        let years = year_columns(sheet, &labels);

        let mut conn = self.conn.borrow_mut();
        let tx = conn.transaction()?;
        for table in ["sheets", "sheet_years", "sheet_rows", "index_values"] {
            tx.execute(
                &format!("DELETE FROM {} WHERE workbook = ?1 AND family = ?2", table),
                params![workbook_id, sheet],
            )?;
        }

        for (position, (_, year)) in years.iter().enumerate() {
            tx.execute(
                "INSERT INTO sheet_years (workbook, family, position, year)
                 VALUES (?1, ?2, ?3, ?4)",
                params![workbook_id, sheet, position as i64, year],
            )?;
        }

        let mut count = 0usize;
        let mut skipped = 0u32;
        for row in rows {
            let department = row.first().map(cell_text).unwrap_or_default();
            if department.is_empty() {
                skipped += 1;
                continue;
            }
            tx.execute(
                "INSERT INTO sheet_rows (workbook, family, row_position, department)
                 VALUES (?1, ?2, ?3, ?4)",
                params![workbook_id, sheet, count as i64, department],
            )?;
            for (column, year) in &years {
                let value = row.get(*column).and_then(cell_value);
                tx.execute(
                    "INSERT INTO index_values (workbook, family, row_position, year, value)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![workbook_id, sheet, count as i64, year, value],
                )?;
            }
            count += 1;
        }

        tx.execute(
            "INSERT INTO sheets (workbook, family, row_count) VALUES (?1, ?2, ?3)",
            params![workbook_id, sheet, count as i64],
        )?;
        tx.commit()?;

        log::info!(
            "[BFCI Debug] loader: Loaded sheet '{}' with {} rows and {} years, skipped {} rows without department",
            sheet,
            count,
            years.len(),
            skipped
        );
        Ok(count)
    }
}
