//! Serializable description of a choropleth map.
//!
//! The renderer (`choropleth-map.js` in the dashboard, or any consumer of
//! the CLI's `map` output) receives one JSON object:
//!
//! ```text
//! {
//!   "geojson":     FeatureCollection, feature id = row position,
//!                  properties NAME_3, <year>, Category
//!   "colorMap":    { "<category label>": "#rrggbb", ... },
//!   "center":      { "lat": 12.5, "lon": -1.5 },
//!   "zoom":        5.5,
//!   "opacity":     0.6,
//!   "mapStyle":    "carto-positron",
//!   "colorField":  "Category",
//!   "hoverFields": ["<year>", "Category"],
//!   "categories":  [every category label, legend order]
//! }
//! ```

use crate::join::JoinedMapRow;
use crate::view::{MapView, MAP_STYLE, OPACITY};
use bfci_index::boundary::{BoundarySet, Feature, FeatureCollection, GeoPoint};
use bfci_index::department::DEPARTMENT_KEY;
use bfci_index::Category;
use serde::Serialize;
use serde_json::{Map, Value};

/// Property holding the category label of each feature.
pub const CATEGORY_FIELD: &str = "Category";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoroplethSpec {
    pub geojson: FeatureCollection,
    pub color_map: Map<String, Value>,
    pub center: GeoPoint,
    pub zoom: f64,
    pub opacity: f64,
    pub map_style: String,
    pub color_field: String,
    pub hover_fields: Vec<String>,
    pub categories: Vec<String>,
}

impl ChoroplethSpec {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Build the map description for joined rows of `year`.
///
/// Rows whose boundary has no geometry are still emitted, with a null
/// geometry.
pub fn build(boundaries: &BoundarySet, rows: &[JoinedMapRow], year: &str, view: MapView) -> ChoroplethSpec {
    let features = rows
        .iter()
        .enumerate()
        .map(|(position, row)| {
            let department = boundaries.get(row.boundary);
            let mut properties = department
                .map(|d| d.properties.clone())
                .unwrap_or_default();
            properties.insert(DEPARTMENT_KEY.to_string(), Value::from(row.department.clone()));
            properties.insert(year.to_string(), row.value().map(Value::from).unwrap_or(Value::Null));
            properties.insert(CATEGORY_FIELD.to_string(), Value::from(row.category().label()));
            Feature {
                type_: "Feature".to_string(),
                id: Some(Value::from(position)),
                geometry: department.and_then(|d| d.geometry.clone()),
                properties: Some(properties),
            }
        })
        .collect();

    ChoroplethSpec {
        geojson: FeatureCollection {
            type_: "FeatureCollection".to_string(),
            features,
        },
        color_map: Category::color_map(),
        center: view.center,
        zoom: view.zoom,
        opacity: OPACITY,
        map_style: MAP_STYLE.to_string(),
        color_field: CATEGORY_FIELD.to_string(),
        hover_fields: vec![year.to_string(), CATEGORY_FIELD.to_string()],
        categories: Category::ALL.iter().map(|c| c.label().to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::join::{classify_rows, left_join};
    use bfci_db::models::DepartmentValue;
    use bfci_index::IndexFamily;
    use serde_json::json;

    fn boundaries() -> BoundarySet {
        let data = json!({
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": { "NAME_3": "Kaya", "GID_3": "BFA.1" },
                    "geometry": { "type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]] }
                },
                { "type": "Feature", "properties": { "NAME_3": "Dori" }, "geometry": null }
            ]
        });
        BoundarySet::from_geojson_slice(data.to_string().as_bytes()).unwrap()
    }

    fn spec() -> ChoroplethSpec {
        let set = boundaries();
        let observations = classify_rows(
            IndexFamily::Wrsi,
            "2020",
            &[DepartmentValue {
                department: "Kaya".into(),
                value: Some(0.85),
            }],
        );
        let rows = left_join(&set, &observations);
        build(&set, &rows, "2020", MapView::national())
    }

    #[test]
    fn test_feature_properties() {
        let spec = spec();
        let features = &spec.geojson.features;
        assert_eq!(features.len(), 2);

        let kaya = features[0].properties.as_ref().unwrap();
        assert_eq!(kaya["NAME_3"], "Kaya");
        assert_eq!(kaya["2020"], 0.85);
        assert_eq!(kaya["Category"], "Sécheresse légère");
        assert_eq!(kaya["GID_3"], "BFA.1");
        assert_eq!(features[0].id, Some(json!(0)));

        let dori = features[1].properties.as_ref().unwrap();
        assert_eq!(dori["2020"], Value::Null);
        assert_eq!(dori["Category"], "Valeur Manquante");
        assert!(features[1].geometry.is_none());
    }

    #[test]
    fn test_presentation_fields() {
        let value = serde_json::to_value(spec()).unwrap();
        assert_eq!(value["opacity"], 0.6);
        assert_eq!(value["zoom"], 5.5);
        assert_eq!(value["mapStyle"], "carto-positron");
        assert_eq!(value["colorField"], "Category");
        assert_eq!(value["hoverFields"], json!(["2020", "Category"]));
        assert_eq!(value["center"], json!({ "lat": 12.5, "lon": -1.5 }));
        assert_eq!(value["colorMap"]["Valeur Manquante"], "#D3D3D3");
        assert_eq!(value["categories"].as_array().unwrap().len(), 10);
        assert_eq!(value["geojson"]["type"], "FeatureCollection");
        assert_eq!(value["geojson"]["features"][0]["geometry"]["type"], "Polygon");
    }
}
