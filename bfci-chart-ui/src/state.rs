//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use bfci_data::animation::AnimationLookup;
use bfci_data::DepartmentDetail;
use bfci_db::IndexStore;
use bfci_index::department::ALL_DEPARTMENTS;
use bfci_index::IndexFamily;
use dioxus::prelude::*;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Store instance (None until created)
    pub store: Signal<Option<IndexStore>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message of the last render cycle
    pub error_msg: Signal<Option<String>>,
    /// Currently selected index family
    pub selected_family: Signal<IndexFamily>,
    /// Family whose sheet `years` and `departments` were read from
    pub sheet_family: Signal<Option<IndexFamily>>,
    /// Year columns of the selected family's sheet
    pub years: Signal<Vec<String>>,
    /// Currently selected year label
    pub selected_year: Signal<String>,
    /// Distinct departments of the selected family's sheet
    pub departments: Signal<Vec<String>>,
    /// Selector value for the department (`Tous` for all)
    pub selected_department: Signal<String>,
    /// Detail of the selected department, if one is selected
    pub detail: Signal<Option<DepartmentDetail>>,
    /// Animation lookup for the selected family
    pub animation: Signal<Option<AnimationLookup>>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            store: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_family: Signal::new(IndexFamily::Wrsi),
            sheet_family: Signal::new(None),
            years: Signal::new(Vec::new()),
            selected_year: Signal::new(String::new()),
            departments: Signal::new(Vec::new()),
            selected_department: Signal::new(ALL_DEPARTMENTS.to_string()),
            detail: Signal::new(None),
            animation: Signal::new(None),
        }
    }
}
