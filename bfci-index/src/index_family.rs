use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One of the five climate metrics published in the index workbook.
///
/// Each family maps to exactly one worksheet, named after
/// [`IndexFamily::sheet_name`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexFamily {
    /// Water Requirement Satisfaction Index
    Wrsi,
    /// Normalized Difference Vegetation Index
    Ndvi,
    /// Crop production status
    Cps,
    /// Standardized Precipitation Index (signed, z-score-like)
    Spi,
    /// Residual water indicator (1 = flooding observed)
    Resid,
}

/// Error returned when a string does not name an index family.
#[derive(Debug, PartialEq, Eq, Clone, thiserror::Error)]
#[error("unknown index family '{0}'")]
pub struct UnknownFamily(pub String);

impl IndexFamily {
    /// All families, in selector order.
    pub const ALL: [IndexFamily; 5] = [
        IndexFamily::Wrsi,
        IndexFamily::Ndvi,
        IndexFamily::Cps,
        IndexFamily::Spi,
        IndexFamily::Resid,
    ];

    /// Worksheet name holding this family's observations.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            IndexFamily::Wrsi => "wrsi",
            IndexFamily::Ndvi => "ndvi",
            IndexFamily::Cps => "cps",
            IndexFamily::Spi => "spi",
            IndexFamily::Resid => "resid",
        }
    }

    /// Label shown in the index selector.
    pub fn label(&self) -> &'static str {
        match self {
            IndexFamily::Wrsi => "Indice WRSI",
            IndexFamily::Ndvi => "Indice NDVI",
            IndexFamily::Cps => "Indice CPS",
            IndexFamily::Spi => "Indice SPI",
            IndexFamily::Resid => "Eau résiduelle",
        }
    }

    /// Resolve a selector label back to its family.
    pub fn from_label(label: &str) -> Option<IndexFamily> {
        IndexFamily::ALL.into_iter().find(|f| f.label() == label)
    }
}

impl fmt::Display for IndexFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sheet_name())
    }
}

impl FromStr for IndexFamily {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        IndexFamily::ALL
            .into_iter()
            .find(|f| f.sheet_name() == key)
            .or_else(|| IndexFamily::from_label(s.trim()))
            .ok_or_else(|| UnknownFamily(s.to_string()))
    }
}
