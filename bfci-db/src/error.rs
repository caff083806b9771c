use bfci_index::boundary::BoundaryError;

/// Failures while loading or querying source data.
///
/// Every variant is fatal for the render cycle that hit it.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decompress {resource}: {source}")]
    Decompress {
        resource: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid boundaries in {resource}: {source}")]
    Boundaries {
        resource: String,
        #[source]
        source: BoundaryError,
    },

    #[error("cannot read workbook {resource}: {source}")]
    Workbook {
        resource: String,
        #[source]
        source: calamine::Error,
    },

    #[error("sheet '{sheet}' not found in workbook {resource}")]
    SheetNotFound { resource: String, sheet: String },

    #[error("sheet '{sheet}' must start with a NAME_3 column, found '{found}'")]
    MissingKeyColumn { sheet: String, found: String },

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}
