use serde::{Deserialize, Serialize};
use std::fmt;

/// Climatic category assigned to an observation.
///
/// Categories are always derived from an `(IndexFamily, value)` pair by
/// [`crate::classify`]; they are never read from the workbook.
/// Serialized form is the French display label, which is also the key of
/// the choropleth color map.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Sécheresse sévère")]
    SevereDrought,
    #[serde(rename = "Sécheresse modérée")]
    ModerateDrought,
    #[serde(rename = "Sécheresse légère")]
    MildDrought,
    #[serde(rename = "Condition normale")]
    Normal,
    #[serde(rename = "Inondation modérée")]
    ModerateFlood,
    #[serde(rename = "Inondation sévère")]
    SevereFlood,
    #[serde(rename = "Inondation constaté")]
    FloodObserved,
    #[serde(rename = "Pas d'inondation constaté")]
    NoFloodObserved,
    #[serde(rename = "Valeur Manquante")]
    MissingValue,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl Category {
    /// Every category, in legend order.
    pub const ALL: [Category; 10] = [
        Category::SevereDrought,
        Category::ModerateDrought,
        Category::MildDrought,
        Category::Normal,
        Category::ModerateFlood,
        Category::SevereFlood,
        Category::FloodObserved,
        Category::NoFloodObserved,
        Category::MissingValue,
        Category::Unknown,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::SevereDrought => "Sécheresse sévère",
            Category::ModerateDrought => "Sécheresse modérée",
            Category::MildDrought => "Sécheresse légère",
            Category::Normal => "Condition normale",
            Category::ModerateFlood => "Inondation modérée",
            Category::SevereFlood => "Inondation sévère",
            Category::FloodObserved => "Inondation constaté",
            Category::NoFloodObserved => "Pas d'inondation constaté",
            Category::MissingValue => "Valeur Manquante",
            Category::Unknown => "Unknown",
        }
    }

    /// Hex fill color used on the map and in the legend.
    pub fn color(&self) -> &'static str {
        match self {
            Category::SevereDrought => "#8B0000",
            Category::ModerateDrought => "#CD5C5C",
            Category::MildDrought => "#F08080",
            Category::Normal => "#A9A9A9",
            Category::ModerateFlood => "#87CEFA",
            Category::SevereFlood => "#4682B4",
            Category::FloodObserved => "#1E90FF",
            Category::NoFloodObserved => "#B0C4DE",
            Category::MissingValue => "#D3D3D3",
            Category::Unknown => "#000000",
        }
    }

    /// The fixed label -> color mapping handed to the map renderer.
    pub fn color_map() -> serde_json::Map<String, serde_json::Value> {
        Category::ALL
            .iter()
            .map(|c| (c.label().to_string(), serde_json::Value::from(c.color())))
            .collect()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
