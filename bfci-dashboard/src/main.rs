//! Climate index dashboard for Burkina Faso.
//!
//! Shows one climate index (WRSI, NDVI, CPS, SPI or residual water) for one
//! year as a Plotly choropleth of the country's departments, colored by
//! climatic category, with per-department detail and the pre-rendered
//! animation of the selected index.
//!
//! Data flow:
//! 1. `build.rs` gzips the boundary GeoJSON and copies the index workbook
//!    into `OUT_DIR`; `include_bytes!` embeds both into the WASM binary.
//! 2. On mount: create the store and load the map script.
//! 3. On index change: look up the animation, then read the sheet's years
//!    and departments and pick a year.
//! 4. On any selection change: run the pipeline and re-render the map.
//!
//! The host page must load Plotly and provide a `bfci-dashboard-root`
//! element. Animation GIFs are served from `animations/` next to the app.

use bfci_chart_ui::components::{
    AnimationPanel, CategoryLegend, ChartHeader, DepartmentDetailPanel, DepartmentSelector,
    ErrorDisplay, IndexSelector, LoadingSpinner, MapContainer, YearSelector,
};
use bfci_chart_ui::js_bridge;
use bfci_chart_ui::state::AppState;
use bfci_data::animation::AnimationAssets;
use bfci_data::pipeline::{self, Selection, Sources};
use bfci_db::{IndexStore, Resource};
use bfci_index::DepartmentFilter;
use dioxus::prelude::*;

const BOUNDARIES_GZ: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/gadm41_BFA_3.json.gz"));
const WORKBOOK: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/index_data.xlsx"));
const ANIMATION_MANIFEST: &str = include_str!(concat!(env!("OUT_DIR"), "/animations.txt"));

/// DOM id for the Plotly map container div.
const MAP_CONTAINER_ID: &str = "bfci-map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("bfci-dashboard-root"))
        .launch(App);
}

fn embedded_sources() -> Sources {
    Sources {
        boundaries: Resource::embedded("gadm41_BFA_3.json.gz", BOUNDARIES_GZ),
        workbook: Resource::embedded("index_data.xlsx", WORKBOOK),
    }
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let sources = use_hook(embedded_sources);
    let animations = use_hook(|| AnimationAssets::from_manifest(ANIMATION_MANIFEST));

    // ─── Effect 1: Create the store once on mount ───
    use_effect(move || {
        match IndexStore::new() {
            Ok(store) => state.store.set(Some(store)),
            Err(e) => state.error_msg.set(Some(e.to_string())),
        }
        state.loading.set(false);

        // Initialize the Plotly map script (one-time)
        js_bridge::init_maps();
    });

    // ─── Effect 2: Read the selected sheet's years and departments ───
    // Re-runs whenever the store or the selected family change. The
    // animation is looked up even when the sheet fails to load.
    let sheet_sources = sources.clone();
    use_effect(move || {
        let family = (state.selected_family)();
        let Some(store) = state.store.read().clone() else {
            return;
        };

        let current_year = state.selected_year.peek().clone();
        let current_department = state.selected_department.peek().clone();
        let listing = pipeline::list_sheet(
            &store,
            &sheet_sources.workbook,
            family,
            &animations,
            &current_year,
            &current_department,
        );
        state.animation.set(Some(listing.animation));

        match listing.options {
            Ok(options) => {
                if options.department != current_department {
                    state.selected_department.set(options.department);
                }
                state.years.set(options.years);
                state.departments.set(options.departments);
                state.selected_year.set(options.year);
                state.sheet_family.set(Some(family));
            }
            Err(e) => {
                state.error_msg.set(Some(e.to_string()));
                state.years.set(Vec::new());
                state.departments.set(Vec::new());
                state.sheet_family.set(None);
                state.detail.set(None);
                js_bridge::destroy_map(MAP_CONTAINER_ID);
            }
        }
    });

    // ─── Effect 3: Run the pipeline and render the map ───
    // Re-runs whenever the family, year or department change.
    use_effect(move || {
        let family = (state.selected_family)();
        let year = (state.selected_year)();
        let department = (state.selected_department)();
        let sheet_family = (state.sheet_family)();

        // Wait until Effect 2 has caught up with the family.
        if sheet_family != Some(family) || year.is_empty() {
            return;
        }
        let Some(store) = state.store.read().clone() else {
            return;
        };

        let selection = Selection::new(family, year, DepartmentFilter::from_selection(&department));
        match pipeline::run(&store, &sources, &selection) {
            Ok(frame) => {
                state.detail.set(frame.detail());
                match frame.to_choropleth().to_json() {
                    Ok(spec_json) => {
                        state.error_msg.set(None);
                        js_bridge::render_choropleth_map(MAP_CONTAINER_ID, &spec_json);
                    }
                    Err(e) => {
                        state.error_msg.set(Some(e.to_string()));
                        js_bridge::destroy_map(MAP_CONTAINER_ID);
                    }
                }
            }
            Err(e) => {
                log::warn!("[BFCI Debug] dashboard: render failed: {}", e);
                state.error_msg.set(Some(e.to_string()));
                state.detail.set(None);
                js_bridge::destroy_map(MAP_CONTAINER_ID);
            }
        }
    });

    let family = (state.selected_family)();
    let subtitle = format!("{} - {}", family.label(), (state.selected_year)());

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            h2 {
                style: "margin: 0 0 12px 0;",
                "Visualisation des Indices Climatiques - Burkina Faso"
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                div {
                    style: "display: flex; gap: 16px; align-items: flex-start;",
                    div {
                        style: "flex: 0 0 260px;",
                        IndexSelector {}
                        YearSelector {}
                        DepartmentSelector {}
                    }
                    div {
                        style: "flex: 1 1 auto; min-width: 0;",
                        ChartHeader {
                            title: "Catégories climatiques par département".to_string(),
                            subtitle: subtitle,
                        }
                        MapContainer {
                            id: MAP_CONTAINER_ID.to_string(),
                            loading: state.sheet_family.read().is_none() && state.error_msg.read().is_none(),
                            CategoryLegend {}
                        }

                        if let Some(detail) = state.detail.read().clone() {
                            DepartmentDetailPanel {
                                department: (state.selected_department)(),
                                detail: detail,
                            }
                        }

                        if let Some(lookup) = state.animation.read().clone() {
                            AnimationPanel {
                                label: family.label().to_string(),
                                lookup: lookup,
                            }
                        }
                    }
                }
            }
        }
    }
}
