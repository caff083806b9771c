//! Value -> category classification.
//!
//! Thresholds are inclusive upper bounds evaluated in order; the first
//! matching bound wins and anything above the last bound is a severe flood.

use crate::{Category, IndexFamily};

/// Shared table for the ratio indices (WRSI, NDVI, CPS), centred on 1.0.
const RATIO_THRESHOLDS: [(f64, Category); 5] = [
    (0.7, Category::SevereDrought),
    (0.8, Category::ModerateDrought),
    (0.9, Category::MildDrought),
    (1.0, Category::Normal),
    (1.1, Category::ModerateFlood),
];

/// SPI table, centred on 0.
const SPI_THRESHOLDS: [(f64, Category); 5] = [
    (-2.0, Category::SevereDrought),
    (-1.5, Category::ModerateDrought),
    (-1.0, Category::MildDrought),
    (1.0, Category::Normal),
    (1.5, Category::ModerateFlood),
];

/// Residual-water value that marks an observed flood.
const FLOOD_OBSERVED: f64 = 1.0;

fn by_thresholds(table: &[(f64, Category)], value: f64) -> Category {
    table
        .iter()
        .find(|(upper, _)| value <= *upper)
        .map(|(_, category)| *category)
        .unwrap_or(Category::SevereFlood)
}

/// Classify one observation.
///
/// A missing value (`None` or NaN) is always [`Category::MissingValue`],
/// whatever the family.
pub fn classify(family: IndexFamily, value: Option<f64>) -> Category {
    let value = match value {
        Some(v) if !v.is_nan() => v,
        _ => return Category::MissingValue,
    };
    match family {
        IndexFamily::Wrsi | IndexFamily::Ndvi | IndexFamily::Cps => {
            by_thresholds(&RATIO_THRESHOLDS, value)
        }
        IndexFamily::Spi => by_thresholds(&SPI_THRESHOLDS, value),
        IndexFamily::Resid => {
            if value == FLOOD_OBSERVED {
                Category::FloodObserved
            } else {
                Category::NoFloodObserved
            }
        }
    }
}

/// Classify using a raw sheet identifier.
///
/// Identifiers that do not name an index family yield [`Category::Unknown`]
/// for present values.
pub fn classify_sheet(sheet: &str, value: Option<f64>) -> Category {
    match sheet.parse::<IndexFamily>() {
        Ok(family) => classify(family, value),
        Err(_) if value.map_or(true, f64::is_nan) => Category::MissingValue,
        Err(_) => Category::Unknown,
    }
}
