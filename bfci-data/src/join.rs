//! Year projection, classification and the boundary left join.

use crate::view::MapView;
use bfci_db::models::DepartmentValue;
use bfci_index::boundary::BoundarySet;
use bfci_index::{classify, Category, DepartmentFilter, IndexFamily};
use serde::Serialize;
use std::collections::HashMap;

/// Message shown when a department has no row for the selected year.
pub const NO_DATA_MESSAGE: &str = "Aucune donnée pour ce département / cette année";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum JoinError {
    #[error("La colonne '{year}' n'existe pas dans la feuille '{sheet}'")]
    MissingYearColumn { year: String, sheet: String },
}

/// Check that `year` is one of the year columns of the sheet of `family`.
pub fn validate_year(family: IndexFamily, years: &[String], year: &str) -> Result<(), JoinError> {
    if years.iter().any(|y| y == year) {
        Ok(())
    } else {
        Err(JoinError::MissingYearColumn {
            year: year.to_string(),
            sheet: family.sheet_name().to_string(),
        })
    }
}

/// One sheet row for the selected year, with its category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassifiedObservation {
    pub department: String,
    pub year: String,
    pub family: IndexFamily,
    pub value: Option<f64>,
    pub category: Category,
}

/// Classify every projected row, keeping sheet order.
pub fn classify_rows(
    family: IndexFamily,
    year: &str,
    values: &[DepartmentValue],
) -> Vec<ClassifiedObservation> {
    values
        .iter()
        .map(|row| ClassifiedObservation {
            department: row.department.clone(),
            year: year.to_string(),
            family,
            value: row.value,
            category: classify(family, row.value),
        })
        .collect()
}

/// A boundary department paired with its observation, if the sheet has one.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedMapRow {
    /// Position of the department in the boundary set.
    pub boundary: usize,
    pub department: String,
    pub observation: Option<ClassifiedObservation>,
}

impl JoinedMapRow {
    pub fn value(&self) -> Option<f64> {
        self.observation.as_ref().and_then(|o| o.value)
    }

    /// Category of the observation; departments absent from the sheet are
    /// shown as missing values.
    pub fn category(&self) -> Category {
        self.observation
            .as_ref()
            .map(|o| o.category)
            .unwrap_or(Category::MissingValue)
    }
}

/// Left join of the boundary set onto classified observations by name.
///
/// Output follows boundary order. A department matching several sheet rows
/// yields one joined row per match, in sheet order. Sheet rows naming no
/// boundary department are dropped.
pub fn left_join(boundaries: &BoundarySet, observations: &[ClassifiedObservation]) -> Vec<JoinedMapRow> {
    let mut by_name: HashMap<&str, Vec<&ClassifiedObservation>> = HashMap::new();
    for observation in observations {
        by_name
            .entry(observation.department.as_str())
            .or_default()
            .push(observation);
    }

    let mut rows = Vec::with_capacity(boundaries.len());
    for (position, department) in boundaries.departments().iter().enumerate() {
        match by_name.get(department.name.as_str()) {
            Some(matches) => rows.extend(matches.iter().map(|o| JoinedMapRow {
                boundary: position,
                department: department.name.clone(),
                observation: Some((*o).clone()),
            })),
            None => rows.push(JoinedMapRow {
                boundary: position,
                department: department.name.clone(),
                observation: None,
            }),
        }
    }
    rows
}

/// Restrict joined rows to the selected department and pick the viewport.
///
/// A department without usable geometry keeps the national view and shows
/// nothing.
pub fn focus(
    boundaries: &BoundarySet,
    rows: Vec<JoinedMapRow>,
    filter: &DepartmentFilter,
) -> (Vec<JoinedMapRow>, MapView) {
    let name = match filter.department() {
        None => return (rows, MapView::national()),
        Some(name) => name,
    };

    match boundaries.find(name).and_then(|d| d.centroid()) {
        Some(center) => {
            let rows = rows.into_iter().filter(|r| r.department == name).collect();
            (rows, MapView::department(center))
        }
        None => {
            log::warn!(
                "[BFCI Debug] join: no geometry for department '{}', keeping national view",
                name
            );
            (Vec::new(), MapView::national())
        }
    }
}

/// What the detail panel shows for a selected department.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DepartmentDetail {
    Found(ClassifiedObservation),
    NoData { department: String, year: String },
}

impl DepartmentDetail {
    pub fn message(&self) -> String {
        match self {
            DepartmentDetail::Found(o) => format!(
                "Valeur : {} | Catégorie : {}",
                format_value(o.value),
                o.category
            ),
            DepartmentDetail::NoData { .. } => NO_DATA_MESSAGE.to_string(),
        }
    }
}

/// First observation of `department`, or `NoData`.
pub fn find_detail(observations: &[ClassifiedObservation], department: &str, year: &str) -> DepartmentDetail {
    observations
        .iter()
        .find(|o| o.department == department)
        .cloned()
        .map(DepartmentDetail::Found)
        .unwrap_or_else(|| DepartmentDetail::NoData {
            department: department.to_string(),
            year: year.to_string(),
        })
}

/// Display form of an observation value.
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v),
        None => "nan".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bfci_index::boundary::GeoPoint;
    use serde_json::json;

    fn boundaries(names: &[&str]) -> BoundarySet {
        let features: Vec<_> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let x = i as f64 * 2.0;
                json!({
                    "type": "Feature",
                    "properties": { "NAME_3": name },
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[x, 10.0], [x + 2.0, 10.0], [x + 2.0, 12.0], [x, 12.0], [x, 10.0]]]
                    }
                })
            })
            .collect();
        let data = json!({ "type": "FeatureCollection", "features": features }).to_string();
        BoundarySet::from_geojson_slice(data.as_bytes()).unwrap()
    }

    fn values(rows: &[(&str, Option<f64>)]) -> Vec<DepartmentValue> {
        rows.iter()
            .map(|(department, value)| DepartmentValue {
                department: department.to_string(),
                value: *value,
            })
            .collect()
    }

    #[test]
    fn test_validate_year() {
        let years = vec!["2019".to_string(), "2020".to_string()];
        assert!(validate_year(IndexFamily::Wrsi, &years, "2020").is_ok());
        let err = validate_year(IndexFamily::Spi, &years, "2031").unwrap_err();
        assert_eq!(
            err,
            JoinError::MissingYearColumn {
                year: "2031".into(),
                sheet: "spi".into()
            }
        );
        assert!(err.to_string().contains("2031"));
    }

    #[test]
    fn test_classify_rows() {
        let rows = classify_rows(
            IndexFamily::Wrsi,
            "2020",
            &values(&[("Kaya", Some(0.7)), ("Dori", None), ("Gorom", Some(1.2))]),
        );
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].category, Category::SevereDrought);
        assert_eq!(rows[1].category, Category::MissingValue);
        assert_eq!(rows[2].category, Category::SevereFlood);
        assert!(rows.iter().all(|r| r.year == "2020" && r.family == IndexFamily::Wrsi));
    }

    #[test]
    fn test_left_join_keeps_boundary_order() {
        let set = boundaries(&["Dori", "Kaya", "Boromo"]);
        let observations = classify_rows(
            IndexFamily::Ndvi,
            "2020",
            &values(&[("Kaya", Some(0.95)), ("Dori", Some(0.75)), ("Ailleurs", Some(1.0))]),
        );
        let rows = left_join(&set, &observations);

        let names: Vec<_> = rows.iter().map(|r| r.department.as_str()).collect();
        assert_eq!(names, vec!["Dori", "Kaya", "Boromo"]);
        assert_eq!(rows[0].category(), Category::ModerateDrought);
        assert_eq!(rows[1].category(), Category::Normal);
        assert_eq!(rows[2].category(), Category::MissingValue);
        assert!(rows[2].observation.is_none());
        assert_eq!(rows[2].boundary, 2);
    }

    #[test]
    fn test_left_join_repeats_duplicate_matches() {
        let set = boundaries(&["Kaya", "Dori"]);
        let observations = classify_rows(
            IndexFamily::Spi,
            "2020",
            &values(&[("Kaya", Some(-2.5)), ("Kaya", Some(0.0))]),
        );
        let rows = left_join(&set, &observations);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].category(), Category::SevereDrought);
        assert_eq!(rows[1].category(), Category::Normal);
        assert_eq!(rows[1].boundary, 0);
        assert_eq!(rows[2].department, "Dori");
    }

    #[test]
    fn test_focus_all() {
        let set = boundaries(&["Kaya", "Dori"]);
        let rows = left_join(&set, &[]);
        let (rows, view) = focus(&set, rows, &DepartmentFilter::All);
        assert_eq!(rows.len(), 2);
        assert_eq!(view, MapView::national());
    }

    #[test]
    fn test_focus_department() {
        let set = boundaries(&["Kaya", "Dori"]);
        let rows = left_join(&set, &[]);
        let (rows, view) = focus(&set, rows, &DepartmentFilter::Only("Dori".into()));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].department, "Dori");
        assert_eq!(view.zoom, 8.0);
        assert!((view.center.lon - 3.0).abs() < 1e-9);
        assert!((view.center.lat - 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_focus_unknown_department() {
        let set = boundaries(&["Kaya"]);
        let rows = left_join(&set, &[]);
        let (rows, view) = focus(&set, rows, &DepartmentFilter::Only("Nulle part".into()));
        assert!(rows.is_empty());
        assert_eq!(view.center, GeoPoint { lat: 12.5, lon: -1.5 });
    }

    #[test]
    fn test_find_detail() {
        let observations = classify_rows(
            IndexFamily::Resid,
            "2020",
            &values(&[("Kaya", Some(1.0)), ("Kaya", Some(0.0))]),
        );
        match find_detail(&observations, "Kaya", "2020") {
            DepartmentDetail::Found(o) => {
                assert_eq!(o.value, Some(1.0));
                assert_eq!(o.category, Category::FloodObserved);
            }
            other => panic!("Expected Found, got {:?}", other),
        }

        let missing = find_detail(&observations, "Dori", "2020");
        assert_eq!(
            missing,
            DepartmentDetail::NoData {
                department: "Dori".into(),
                year: "2020".into()
            }
        );
        assert_eq!(missing.message(), NO_DATA_MESSAGE);
    }

    #[test]
    fn test_detail_serializes_with_status() {
        let detail = DepartmentDetail::NoData {
            department: "Dori".into(),
            year: "2020".into(),
        };
        let value = serde_json::to_value(&detail).unwrap();
        assert_eq!(value["status"], "no_data");
        assert_eq!(value["department"], "Dori");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(Some(0.84)), "0.84");
        assert_eq!(format_value(Some(1.0)), "1");
        assert_eq!(format_value(None), "nan");
    }
}
