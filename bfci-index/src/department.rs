use serde::{Deserialize, Serialize};

/// Attribute holding the department name, in both the boundary file and the
/// first column of every index sheet.
pub const DEPARTMENT_KEY: &str = "NAME_3";

/// Selector sentinel meaning "all departments".
pub const ALL_DEPARTMENTS: &str = "Tous";

/// Which departments a render cycle shows.
#[derive(Debug, PartialEq, Eq, Clone, Hash, Serialize, Deserialize, Default)]
pub enum DepartmentFilter {
    #[default]
    All,
    Only(String),
}

impl DepartmentFilter {
    /// Build a filter from a selector value; `Tous` and blank mean all.
    pub fn from_selection(selection: &str) -> Self {
        let selection = selection.trim();
        if selection.is_empty() || selection == ALL_DEPARTMENTS {
            DepartmentFilter::All
        } else {
            DepartmentFilter::Only(selection.to_string())
        }
    }

    pub fn department(&self) -> Option<&str> {
        match self {
            DepartmentFilter::All => None,
            DepartmentFilter::Only(name) => Some(name.as_str()),
        }
    }

    /// Selector value for this filter.
    pub fn as_selection(&self) -> &str {
        self.department().unwrap_or(ALL_DEPARTMENTS)
    }
}

/// Selector options: the `Tous` sentinel followed by the given departments.
pub fn selector_options(departments: &[String]) -> Vec<String> {
    std::iter::once(ALL_DEPARTMENTS.to_string())
        .chain(departments.iter().cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_selection() {
        assert_eq!(DepartmentFilter::from_selection("Tous"), DepartmentFilter::All);
        assert_eq!(DepartmentFilter::from_selection("  "), DepartmentFilter::All);
        assert_eq!(
            DepartmentFilter::from_selection("Fada N'gourma"),
            DepartmentFilter::Only("Fada N'gourma".to_string())
        );
    }

    #[test]
    fn test_as_selection_round_trip() {
        let only = DepartmentFilter::Only("Kaya".to_string());
        assert_eq!(only.as_selection(), "Kaya");
        assert_eq!(DepartmentFilter::All.as_selection(), "Tous");
        assert_eq!(DepartmentFilter::from_selection(only.as_selection()), only);
    }

    #[test]
    fn test_selector_options() {
        let options = selector_options(&["Kaya".to_string(), "Dori".to_string()]);
        assert_eq!(options, vec!["Tous", "Kaya", "Dori"]);
    }
}
