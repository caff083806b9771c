//! Reusable Dioxus RSX components for the climate index dashboard.

mod animation_panel;
mod category_legend;
mod chart_header;
mod department_detail;
mod department_selector;
mod error_display;
mod index_selector;
mod loading_spinner;
mod map_container;
mod warning_display;
mod year_selector;

pub use animation_panel::AnimationPanel;
pub use category_legend::CategoryLegend;
pub use chart_header::ChartHeader;
pub use department_detail::DepartmentDetailPanel;
pub use department_selector::DepartmentSelector;
pub use error_display::ErrorDisplay;
pub use index_selector::IndexSelector;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use warning_display::WarningDisplay;
pub use year_selector::YearSelector;
