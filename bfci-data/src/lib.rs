//! Data processing for climate index maps.
//!
//! This crate turns cached boundaries and index sheets into the frames the
//! dashboard and the CLI present: year validation, classification, the
//! boundary left join, department focus, and the serializable choropleth
//! description handed to the map renderer.

pub mod animation;
pub mod choropleth;
pub mod join;
pub mod pipeline;
pub mod view;

pub use choropleth::ChoroplethSpec;
pub use join::{ClassifiedObservation, DepartmentDetail, JoinError, JoinedMapRow};
pub use pipeline::{MapFrame, PipelineError, Selection, Sources};
pub use view::MapView;
