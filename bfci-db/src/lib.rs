//! Cached loaders and in-memory SQLite store for Burkina Faso climate index data.
//!
//! This crate owns every expensive read of the dashboard:
//! - boundary GeoJSON, parsed once per [`Resource`] and corrected (record 195)
//! - workbook handles, opened once per [`Resource`]
//! - index sheets, parsed once per (workbook, family) into SQLite tables
//!
//! Nothing is invalidated: resources are treated as static for the lifetime
//! of the store.
//!
//! # Architecture
//!
//! - `Rc<RefCell<..>>` wrappers for interior mutability in single-threaded WASM
//! - In-memory SQLite via `rusqlite` for parsed sheets
//! - Workbooks read with `calamine` from in-memory buffers, so the same code
//!   path serves files on disk (CLI) and assets embedded with `include_bytes!`
//!   (dashboard)
//!
//! # Usage
//!
//! ```rust,no_run
//! use bfci_db::{IndexStore, Resource};
//! use bfci_index::IndexFamily;
//!
//! let store = IndexStore::new().unwrap();
//! let workbook = Resource::file("fixtures/index_data.xlsx");
//! let years = store.years(&workbook, IndexFamily::Wrsi).unwrap();
//! let values = store.year_values(&workbook, IndexFamily::Wrsi, &years[0]).unwrap();
//! ```
//!
//! # Tables
//!
//! See [`schema::create_schema`].

pub mod schema;
mod error;
mod loader;
mod queries;
pub mod models;
mod resource;

pub use error::StoreError;
pub use resource::Resource;

use bfci_index::boundary::BoundarySet;
use calamine::Sheets;
use rusqlite::Connection;
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Cursor;
use std::rc::Rc;

/// An open workbook, backed by its bytes.
pub(crate) type Workbook = Sheets<Cursor<Vec<u8>>>;

/// Process-lifetime cache of boundaries, workbooks and parsed sheets.
///
/// This struct is cheaply cloneable (via `Rc`) and suitable for sharing
/// across Dioxus components in a single-threaded WASM environment.
#[derive(Clone)]
pub struct IndexStore {
    conn: Rc<RefCell<Connection>>,
    boundaries: Rc<RefCell<HashMap<String, Rc<BoundarySet>>>>,
    workbooks: Rc<RefCell<HashMap<String, Workbook>>>,
}

impl IndexStore {
    /// Create an empty store with the schema applied.
    pub fn new() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(schema::create_schema())?;
        Ok(Self {
            conn: Rc::new(RefCell::new(conn)),
            boundaries: Rc::new(RefCell::new(HashMap::new())),
            workbooks: Rc::new(RefCell::new(HashMap::new())),
        })
    }

    /// Number of workbook handles currently open.
    pub fn open_workbooks(&self) -> usize {
        self.workbooks.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_creates_successfully() {
        let store = IndexStore::new();
        assert!(store.is_ok(), "Store should create without errors");
    }

    #[test]
    fn store_starts_empty() {
        let store = IndexStore::new().unwrap();
        assert_eq!(store.open_workbooks(), 0);
        let count: i64 = store
            .conn
            .borrow()
            .query_row("SELECT COUNT(*) FROM sheets", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
