//! Map, detail and CSV export commands.

use bfci_data::choropleth::CATEGORY_FIELD;
use bfci_data::join::format_value;
use bfci_data::pipeline::{self, Selection, Sources};
use bfci_data::DepartmentDetail;
use bfci_db::IndexStore;
use bfci_index::department::DEPARTMENT_KEY;
use std::io::Write;

/// Run the pipeline and write the choropleth description as JSON.
pub fn write_map(
    store: &IndexStore,
    sources: &Sources,
    selection: &Selection,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let frame = pipeline::run(store, sources, selection)?;
    serde_json::to_writer_pretty(&mut *out, &frame.to_choropleth())?;
    writeln!(out)?;
    Ok(())
}

/// Print the detail of the selected department.
pub fn write_detail(
    store: &IndexStore,
    sources: &Sources,
    selection: &Selection,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let frame = pipeline::run(store, sources, selection)?;
    let (Some(department), Some(detail)) = (selection.department.department(), frame.detail()) else {
        anyhow::bail!("Choose a department other than 'Tous' to show its detail");
    };

    writeln!(out, "Informations climatiques pour : {}", department)?;
    match &detail {
        DepartmentDetail::Found(observation) => {
            writeln!(out, "- Valeur : {}", format_value(observation.value))?;
            writeln!(out, "- Catégorie : {}", observation.category)?;
        }
        DepartmentDetail::NoData { .. } => writeln!(out, "{}", detail.message())?,
    }
    Ok(())
}

/// Write every classified observation of the selected year as CSV
/// (`NAME_3,<year>,Category`), in sheet order. Returns the row count.
pub fn write_export(
    store: &IndexStore,
    sources: &Sources,
    selection: &Selection,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    let frame = pipeline::run(store, sources, selection)?;
    let mut writer = csv::Writer::from_writer(&mut *out);
    writer.write_record([DEPARTMENT_KEY, selection.year.as_str(), CATEGORY_FIELD])?;
    for observation in &frame.observations {
        let value = observation.value.map(|v| v.to_string()).unwrap_or_default();
        writer.write_record([
            observation.department.as_str(),
            value.as_str(),
            observation.category.label(),
        ])?;
    }
    writer.flush()?;
    Ok(frame.observations.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use bfci_index::{DepartmentFilter, IndexFamily};

    fn selection(year: &str, department: &str) -> Selection {
        Selection::new(IndexFamily::Spi, year, DepartmentFilter::from_selection(department))
    }

    #[test]
    fn test_write_map_json() {
        let (store, sources) = fixtures::store();
        let mut out = Vec::new();
        write_map(&store, &sources, &selection("2020", "Tous"), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let features = value["geojson"]["features"].as_array().unwrap();
        assert_eq!(features.len(), 196);
        assert_eq!(features[0]["properties"]["NAME_3"], "Kaya");
        assert_eq!(features[0]["properties"]["Category"], "Condition normale");
        assert_eq!(features[1]["properties"]["Category"], "Inondation sévère");
        assert_eq!(features[2]["properties"]["Category"], "Valeur Manquante");
        assert_eq!(value["hoverFields"][0], "2020");
    }

    #[test]
    fn test_write_map_focused() {
        let (store, sources) = fixtures::store();
        let mut out = Vec::new();
        write_map(&store, &sources, &selection("2020", "Dori"), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["geojson"]["features"].as_array().unwrap().len(), 1);
        assert_eq!(value["zoom"], 8.0);
    }

    #[test]
    fn test_write_map_missing_year() {
        let (store, sources) = fixtures::store();
        let mut out = Vec::new();
        let err = write_map(&store, &sources, &selection("1990", "Tous"), &mut out).unwrap_err();
        assert!(err.to_string().contains("1990"));
        assert!(out.is_empty(), "Nothing should be written on failure");
    }

    #[test]
    fn test_write_detail() {
        let (store, sources) = fixtures::store();
        let mut out = Vec::new();
        write_detail(&store, &sources, &selection("2019", "Kaya"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Informations climatiques pour : Kaya"));
        assert!(text.contains("- Valeur : -2"));
        assert!(text.contains("- Catégorie : Sécheresse sévère"));
    }

    #[test]
    fn test_write_detail_no_data() {
        let (store, sources) = fixtures::store();
        let mut out = Vec::new();
        write_detail(&store, &sources, &selection("2020", "Boromo"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Aucune donnée pour ce département / cette année"));
    }

    #[test]
    fn test_write_detail_requires_department() {
        let (store, sources) = fixtures::store();
        let mut out = Vec::new();
        assert!(write_detail(&store, &sources, &selection("2020", "Tous"), &mut out).is_err());
    }

    #[test]
    fn test_write_export_csv() {
        let (store, sources) = fixtures::store();
        let mut out = Vec::new();
        let count = write_export(&store, &sources, &selection("2019", "Tous"), &mut out).unwrap();
        assert_eq!(count, 3);

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "NAME_3,2019,Category");
        assert_eq!(lines[1], "Kaya,-2,Sécheresse sévère");
        assert_eq!(lines[2], "Dori,,Valeur Manquante");
        assert_eq!(lines[3], "Gorom,0,Condition normale");
    }

    #[test]
    fn test_write_export_to_file() {
        let (store, sources) = fixtures::store();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spi_2020.csv");

        let mut buffer = Vec::new();
        write_export(&store, &sources, &selection("2020", "Tous"), &mut buffer).unwrap();
        crate::emit_output(Some(path.as_path()), &buffer).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("NAME_3,2020,Category\n"));
        assert!(text.contains("Gorom,-1.2,Sécheresse légère"));
    }
}
