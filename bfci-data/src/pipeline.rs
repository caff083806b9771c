//! One render cycle: load, validate, classify, join, focus.
//!
//! [`run`] is shared by the dashboard and the CLI. It is a pure function of
//! its inputs and of what the store has cached, so running the same
//! selection twice yields the same frame.

use crate::animation::{AnimationAssets, AnimationLookup};
use crate::choropleth::{self, ChoroplethSpec};
use crate::join::{
    classify_rows, find_detail, focus, left_join, validate_year, ClassifiedObservation,
    DepartmentDetail, JoinError, JoinedMapRow,
};
use crate::view::MapView;
use bfci_db::{IndexStore, Resource, StoreError};
use bfci_index::boundary::BoundarySet;
use bfci_index::department::ALL_DEPARTMENTS;
use bfci_index::{DepartmentFilter, IndexFamily};
use std::rc::Rc;

/// Errors that abort a render cycle before anything is presented.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Join(#[from] JoinError),
}

/// The two resources every render reads.
#[derive(Debug, Clone, PartialEq)]
pub struct Sources {
    pub boundaries: Resource,
    pub workbook: Resource,
}

/// What the user picked.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub family: IndexFamily,
    pub year: String,
    pub department: DepartmentFilter,
}

impl Selection {
    pub fn new(family: IndexFamily, year: impl Into<String>, department: DepartmentFilter) -> Self {
        Selection {
            family,
            year: year.into(),
            department,
        }
    }
}

/// Result of one render cycle.
#[derive(Debug, Clone)]
pub struct MapFrame {
    pub selection: Selection,
    pub boundaries: Rc<BoundarySet>,
    /// Every sheet row for the selected year, classified, in sheet order.
    pub observations: Vec<ClassifiedObservation>,
    /// Joined rows shown on the map, after department focus.
    pub rows: Vec<JoinedMapRow>,
    pub view: MapView,
}

impl MapFrame {
    pub fn to_choropleth(&self) -> ChoroplethSpec {
        choropleth::build(&self.boundaries, &self.rows, &self.selection.year, self.view)
    }

    /// Detail of the selected department; `None` when all are shown.
    pub fn detail(&self) -> Option<DepartmentDetail> {
        self.selection
            .department
            .department()
            .map(|name| find_detail(&self.observations, name, &self.selection.year))
    }
}

/// Year to select after the family changed: `current` if the sheet still
/// has it, otherwise the first year.
pub fn resolve_year(years: &[String], current: &str) -> Option<String> {
    if years.iter().any(|y| y == current) {
        Some(current.to_string())
    } else {
        years.first().cloned()
    }
}

/// Selector options of one index sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetOptions {
    pub years: Vec<String>,
    pub departments: Vec<String>,
    /// Year to select; empty when the sheet has no year column.
    pub year: String,
    /// Department to select: the current one if still listed, else `Tous`.
    pub department: String,
}

/// Everything the dashboard refreshes when the index family changes.
#[derive(Debug)]
pub struct SheetListing {
    pub family: IndexFamily,
    /// Looked up even when the sheet cannot be read.
    pub animation: AnimationLookup,
    pub options: Result<SheetOptions, StoreError>,
}

/// Read the years and departments of `family` and look up its animation.
pub fn list_sheet(
    store: &IndexStore,
    workbook: &Resource,
    family: IndexFamily,
    animations: &AnimationAssets,
    current_year: &str,
    current_department: &str,
) -> SheetListing {
    let animation = animations.lookup(family);
    let options = store.years(workbook, family).and_then(|years| {
        let departments = store.departments(workbook, family)?;
        let year = resolve_year(&years, current_year).unwrap_or_default();
        let department = if departments.iter().any(|d| d == current_department) {
            current_department.to_string()
        } else {
            ALL_DEPARTMENTS.to_string()
        };
        Ok(SheetOptions {
            years,
            departments,
            year,
            department,
        })
    });
    if let Err(e) = &options {
        log::warn!("[BFCI Debug] pipeline: cannot list sheet {}: {}", family, e);
    }
    SheetListing {
        family,
        animation,
        options,
    }
}

pub fn run(store: &IndexStore, sources: &Sources, selection: &Selection) -> Result<MapFrame, PipelineError> {
    let boundaries = store.boundaries(&sources.boundaries)?;
    let years = store.years(&sources.workbook, selection.family)?;
    validate_year(selection.family, &years, &selection.year)?;

    let values = store.year_values(&sources.workbook, selection.family, &selection.year)?;
    let observations = classify_rows(selection.family, &selection.year, &values);
    let joined = left_join(&boundaries, &observations);
    let (rows, view) = focus(&boundaries, joined, &selection.department);

    log::info!(
        "[BFCI Debug] pipeline: {} {} {} -> {} rows ({} observations)",
        selection.family,
        selection.year,
        selection.department.as_selection(),
        rows.len(),
        observations.len()
    );

    Ok(MapFrame {
        selection: selection.clone(),
        boundaries,
        observations,
        rows,
        view,
    })
}
