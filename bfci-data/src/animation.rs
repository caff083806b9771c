//! Lookup of the pre-rendered animation of each index family.
//!
//! Animations are GIFs produced outside this workspace and published as
//! `animations/<family>.gif`. Whether one exists is only known at render
//! time; a missing file is reported, never fatal.

use bfci_index::IndexFamily;
use serde::Serialize;
use std::path::PathBuf;

/// Directory holding the animations, relative to the asset root.
pub const ANIMATION_DIR: &str = "animations";

/// Relative path of the animation of `family`.
pub fn asset_path(family: IndexFamily) -> String {
    format!("{}/{}.gif", ANIMATION_DIR, family.sheet_name())
}

/// Outcome of an animation lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnimationLookup {
    Found { path: String },
    Missing { expected: String },
}

impl AnimationLookup {
    /// Warning to show when the animation is missing.
    pub fn warning(&self) -> Option<String> {
        match self {
            AnimationLookup::Found { .. } => None,
            AnimationLookup::Missing { expected } => {
                Some(format!("Animation non trouvée : {}", expected))
            }
        }
    }
}

/// Where animations are looked up.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationAssets {
    /// Asset root on disk; `animations/` is expected below it.
    Directory(PathBuf),
    /// Relative paths of the animations bundled with the build.
    Manifest(Vec<String>),
}

impl AnimationAssets {
    /// Parse a manifest with one relative path per line.
    pub fn from_manifest(text: &str) -> Self {
        AnimationAssets::Manifest(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn lookup(&self, family: IndexFamily) -> AnimationLookup {
        let relative = asset_path(family);
        let lookup = match self {
            AnimationAssets::Directory(root) => {
                let path = root.join(&relative).display().to_string();
                if root.join(&relative).is_file() {
                    AnimationLookup::Found { path }
                } else {
                    AnimationLookup::Missing { expected: path }
                }
            }
            AnimationAssets::Manifest(files) => {
                if files.iter().any(|f| *f == relative) {
                    AnimationLookup::Found { path: relative }
                } else {
                    AnimationLookup::Missing { expected: relative }
                }
            }
        };
        if let Some(warning) = lookup.warning() {
            log::warn!("[BFCI Debug] animation: {}", warning);
        }
        lookup
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_asset_path() {
        assert_eq!(asset_path(IndexFamily::Wrsi), "animations/wrsi.gif");
        assert_eq!(asset_path(IndexFamily::Resid), "animations/resid.gif");
    }

    #[test]
    fn test_directory_lookup() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir(root.path().join("animations")).unwrap();
        fs::write(root.path().join("animations/ndvi.gif"), b"GIF89a").unwrap();

        let assets = AnimationAssets::Directory(root.path().to_path_buf());
        match assets.lookup(IndexFamily::Ndvi) {
            AnimationLookup::Found { path } => assert!(path.ends_with("ndvi.gif")),
            other => panic!("Expected Found, got {:?}", other),
        }

        let missing = assets.lookup(IndexFamily::Spi);
        assert!(matches!(missing, AnimationLookup::Missing { ref expected } if expected.ends_with("animations/spi.gif")));
        assert!(missing.warning().unwrap().contains("spi.gif"));
    }

    #[test]
    fn test_manifest_lookup() {
        let assets = AnimationAssets::from_manifest("animations/wrsi.gif\n\n  animations/cps.gif \n");
        assert_eq!(
            assets.lookup(IndexFamily::Cps),
            AnimationLookup::Found {
                path: "animations/cps.gif".into()
            }
        );
        assert_eq!(
            assets.lookup(IndexFamily::Resid),
            AnimationLookup::Missing {
                expected: "animations/resid.gif".into()
            }
        );
        assert!(AnimationAssets::from_manifest("")
            .lookup(IndexFamily::Wrsi)
            .warning()
            .is_some());
    }
}
