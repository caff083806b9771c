//! Selector listings and the animation check.

use bfci_data::animation::{AnimationAssets, AnimationLookup};
use bfci_data::pipeline::Sources;
use bfci_db::IndexStore;
use bfci_index::department::selector_options;
use bfci_index::IndexFamily;
use std::io::Write;

/// Print the year columns of the sheet of `family`, one per line.
pub fn write_years(
    store: &IndexStore,
    sources: &Sources,
    family: IndexFamily,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for year in store.years(&sources.workbook, family)? {
        writeln!(out, "{}", year)?;
    }
    Ok(())
}

/// Print the department selector options: `Tous`, then every department of
/// the sheet in first-appearance order.
pub fn write_departments(
    store: &IndexStore,
    sources: &Sources,
    family: IndexFamily,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let departments = store.departments(&sources.workbook, family)?;
    for option in selector_options(&departments) {
        writeln!(out, "{}", option)?;
    }
    Ok(())
}

/// Report where the animation of `family` is, or warn that it is missing.
/// A missing animation is not an error.
pub fn write_animation(
    assets: &AnimationAssets,
    family: IndexFamily,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let lookup = assets.lookup(family);
    match &lookup {
        AnimationLookup::Found { path } => writeln!(out, "{}: {}", family.label(), path)?,
        AnimationLookup::Missing { .. } => {
            writeln!(out, "{}", lookup.warning().unwrap_or_default())?
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use std::fs;

    #[test]
    fn test_write_years() {
        let (store, sources) = fixtures::store();
        let mut out = Vec::new();
        write_years(&store, &sources, IndexFamily::Spi, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "2019\n2020\n");
    }

    #[test]
    fn test_write_departments() {
        let (store, sources) = fixtures::store();
        let mut out = Vec::new();
        write_departments(&store, &sources, IndexFamily::Spi, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Tous\nKaya\nDori\nGorom\n");
    }

    #[test]
    fn test_listing_unreadable_workbook() {
        let (store, sources) = fixtures::store();
        let mut out = Vec::new();
        let err = write_years(&store, &sources, IndexFamily::Ndvi, &mut out).unwrap_err();
        assert!(err.to_string().contains("index_data.xlsx"));
    }

    #[test]
    fn test_write_animation() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("animations")).unwrap();
        fs::write(root.path().join("animations/wrsi.gif"), b"GIF89a").unwrap();
        let assets = AnimationAssets::Directory(root.path().to_path_buf());

        let mut found = Vec::new();
        write_animation(&assets, IndexFamily::Wrsi, &mut found).unwrap();
        let found = String::from_utf8(found).unwrap();
        assert!(found.starts_with("Indice WRSI: "));
        assert!(found.trim_end().ends_with("wrsi.gif"));

        let mut missing = Vec::new();
        write_animation(&assets, IndexFamily::Resid, &mut missing).unwrap();
        assert!(String::from_utf8(missing)
            .unwrap()
            .starts_with("Animation non trouvée"));
    }
}
