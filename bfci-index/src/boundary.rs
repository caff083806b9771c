//! Administrative boundary geometry read from a GeoJSON FeatureCollection.
//!
//! Only the parts of GeoJSON that the boundary file uses are modelled:
//! Polygon and MultiPolygon geometries plus a free-form property bag. The
//! department name is read from the [`DEPARTMENT_KEY`] property.

use crate::department::DEPARTMENT_KEY;
use geo::{Centroid, Coord, LineString, MultiPolygon, Polygon};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// A GeoJSON position, `[longitude, latitude, ...]`.
pub type Position = Vec<f64>;

/// Errors raised while building a [`BoundarySet`].
#[derive(Debug, thiserror::Error)]
pub enum BoundaryError {
    #[error("boundary GeoJSON could not be parsed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected a FeatureCollection, found '{0}'")]
    NotAFeatureCollection(String),

    #[error("cannot rename feature {position}: boundary file only has {count} features")]
    CorrectionOutOfRange { position: usize, count: usize },
}

/// Polygonal geometries found in the boundary file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Rings: first is the exterior, the rest are holes.
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
}

impl Geometry {
    /// Convert into a `geo` multipolygon; degenerate polygons are dropped.
    pub fn to_multi_polygon(&self) -> MultiPolygon<f64> {
        let polygons = match self {
            Geometry::Polygon { coordinates } => to_polygon(coordinates).into_iter().collect(),
            Geometry::MultiPolygon { coordinates } => {
                coordinates.iter().filter_map(|p| to_polygon(p)).collect()
            }
        };
        MultiPolygon::new(polygons)
    }

    /// Planar centroid in longitude/latitude space.
    pub fn centroid(&self) -> Option<GeoPoint> {
        self.to_multi_polygon().centroid().map(|p| GeoPoint {
            lat: p.y(),
            lon: p.x(),
        })
    }
}

fn to_ring(positions: &[Position]) -> LineString<f64> {
    positions
        .iter()
        .filter(|p| p.len() >= 2)
        .map(|p| Coord { x: p[0], y: p[1] })
        .collect()
}

fn to_polygon(rings: &[Vec<Position>]) -> Option<Polygon<f64>> {
    let (exterior, holes) = rings.split_first()?;
    let exterior = to_ring(exterior);
    if exterior.0.is_empty() {
        return None;
    }
    Some(Polygon::new(exterior, holes.iter().map(|h| to_ring(h)).collect()))
}

/// A latitude/longitude pair, serialized the way map renderers expect it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// A raw GeoJSON feature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Feature {
    #[serde(rename = "type")]
    pub type_: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    pub geometry: Option<Geometry>,

    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

/// A raw GeoJSON feature collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub type_: String,

    pub features: Vec<Feature>,
}

/// A department boundary: display name, geometry and source attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub name: String,
    pub geometry: Option<Geometry>,
    pub properties: Map<String, Value>,
}

impl Department {
    fn from_feature(feature: Feature) -> Self {
        let properties = feature.properties.unwrap_or_default();
        let name = properties
            .get(DEPARTMENT_KEY)
            .and_then(Value::as_str)
            .map(|s| s.trim().to_string())
            .unwrap_or_default();
        Department {
            name,
            geometry: feature.geometry,
            properties,
        }
    }

    pub fn centroid(&self) -> Option<GeoPoint> {
        self.geometry.as_ref().and_then(Geometry::centroid)
    }

    fn rename(&mut self, name: &str) {
        self.name = name.to_string();
        self.properties
            .insert(DEPARTMENT_KEY.to_string(), Value::from(name));
    }
}

/// A fixed rename applied to one feature, by position, at load time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NameCorrection {
    pub position: usize,
    pub name: &'static str,
}

/// The boundary file ships record 195 with a broken `NAME_3`.
pub const FADA_NGOURMA: NameCorrection = NameCorrection {
    position: 195,
    name: "Fada N'gourma",
};

/// All department boundaries, in file order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundarySet {
    departments: Vec<Department>,
}

impl BoundarySet {
    pub fn from_feature_collection(collection: FeatureCollection) -> Result<Self, BoundaryError> {
        if collection.type_ != "FeatureCollection" {
            return Err(BoundaryError::NotAFeatureCollection(collection.type_));
        }
        Ok(BoundarySet {
            departments: collection
                .features
                .into_iter()
                .map(Department::from_feature)
                .collect(),
        })
    }

    pub fn from_geojson_slice(data: &[u8]) -> Result<Self, BoundaryError> {
        let collection: FeatureCollection = serde_json::from_slice(data)?;
        Self::from_feature_collection(collection)
    }

    /// Rename the feature at `correction.position`, whatever it held before.
    pub fn apply_correction(&mut self, correction: &NameCorrection) -> Result<(), BoundaryError> {
        let count = self.departments.len();
        let department = self
            .departments
            .get_mut(correction.position)
            .ok_or(BoundaryError::CorrectionOutOfRange {
                position: correction.position,
                count,
            })?;
        if department.name != correction.name {
            log::info!(
                "[BFCI Debug] boundary: renaming feature {} from '{}' to '{}'",
                correction.position,
                department.name,
                correction.name
            );
        }
        department.rename(correction.name);
        Ok(())
    }

    pub fn departments(&self) -> &[Department] {
        &self.departments
    }

    pub fn get(&self, position: usize) -> Option<&Department> {
        self.departments.get(position)
    }

    /// First department with the given name.
    pub fn find(&self, name: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.name == name)
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }

    /// Names that appear on more than one feature, in first-seen order.
    pub fn duplicate_names(&self) -> Vec<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut duplicates = Vec::new();
        for department in &self.departments {
            let count = counts.entry(department.name.as_str()).or_insert(0);
            *count += 1;
            if *count == 2 {
                duplicates.push(department.name.as_str());
            }
        }
        duplicates
    }
}
