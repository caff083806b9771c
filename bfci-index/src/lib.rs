pub mod boundary;
pub mod category;
pub mod classifier;
pub mod department;
pub mod index_family;

pub use category::Category;
pub use classifier::{classify, classify_sheet};
pub use department::DepartmentFilter;
pub use index_family::IndexFamily;
