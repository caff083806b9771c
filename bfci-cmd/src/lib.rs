//! Command implementations for BFCI CLI.
//!
//! Provides headless access to the dashboard pipeline: choropleth export,
//! department detail, selector listings, CSV export and animation checks.

use anyhow::Context;
use bfci_data::animation::AnimationAssets;
use bfci_data::pipeline::{Selection, Sources};
use bfci_db::{IndexStore, Resource};
use bfci_index::department::ALL_DEPARTMENTS;
use bfci_index::{DepartmentFilter, IndexFamily};
use clap::{Args, Subcommand};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub mod listing;
pub mod map;

/// Default boundary file, relative to the working directory.
pub const DEFAULT_BOUNDARIES: &str = "fixtures/gadm41_BFA_3.json";
/// Default index workbook, relative to the working directory.
pub const DEFAULT_WORKBOOK: &str = "fixtures/index_data.xlsx";
/// Default asset root holding `animations/`.
pub const DEFAULT_ASSET_DIR: &str = "fixtures";

/// Input files shared by every data subcommand.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Boundary GeoJSON with a NAME_3 property (plain or gzip)
    #[arg(long, default_value = DEFAULT_BOUNDARIES)]
    pub boundaries: PathBuf,

    /// Index workbook with one sheet per index family
    #[arg(long, default_value = DEFAULT_WORKBOOK)]
    pub workbook: PathBuf,
}

impl SourceArgs {
    pub fn sources(&self) -> Sources {
        Sources {
            boundaries: Resource::file(&self.boundaries),
            workbook: Resource::file(&self.workbook),
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Write the choropleth description (JSON) of one index and year
    Map {
        #[command(flatten)]
        sources: SourceArgs,

        /// Index family: wrsi, ndvi, cps, spi or resid
        #[arg(short, long)]
        index: IndexFamily,

        /// Year column label
        #[arg(short, long)]
        year: String,

        /// Department to focus on, or "Tous"
        #[arg(short, long, default_value = ALL_DEPARTMENTS)]
        department: String,

        /// Output path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the value and category of one department
    Detail {
        #[command(flatten)]
        sources: SourceArgs,

        #[arg(short, long)]
        index: IndexFamily,

        #[arg(short, long)]
        year: String,

        #[arg(short, long)]
        department: String,
    },

    /// List the year columns of an index sheet
    Years {
        #[command(flatten)]
        sources: SourceArgs,

        #[arg(short, long)]
        index: IndexFamily,
    },

    /// List the department selector options of an index sheet
    Departments {
        #[command(flatten)]
        sources: SourceArgs,

        #[arg(short, long)]
        index: IndexFamily,
    },

    /// Export classified observations of one year as CSV
    Export {
        #[command(flatten)]
        sources: SourceArgs,

        #[arg(short, long)]
        index: IndexFamily,

        #[arg(short, long)]
        year: String,

        /// Output CSV path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check whether the animation of an index is available
    Animation {
        #[arg(short, long)]
        index: IndexFamily,

        /// Asset root holding animations/<index>.gif
        #[arg(long, default_value = DEFAULT_ASSET_DIR)]
        dir: PathBuf,
    },
}

/// Write a finished output to `path`, or to stdout.
///
/// Commands render into memory first so a failed run never touches an
/// existing output file.
fn emit_output(path: Option<&Path>, bytes: &[u8]) -> anyhow::Result<()> {
    match path {
        Some(path) => fs::write(path, bytes)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut out = io::stdout().lock();
            out.write_all(bytes)?;
            out.flush()?;
            Ok(())
        }
    }
}

pub fn run(command: Command) -> anyhow::Result<()> {
    let store = IndexStore::new()?;
    match command {
        Command::Map {
            sources,
            index,
            year,
            department,
            output,
        } => {
            let selection = Selection::new(index, year, DepartmentFilter::from_selection(&department));
            let mut buffer = Vec::new();
            map::write_map(&store, &sources.sources(), &selection, &mut buffer)?;
            emit_output(output.as_deref(), &buffer)?;
            if let Some(path) = output {
                log::info!("[BFCI Debug] cmd: map written to {}", path.display());
            }
            Ok(())
        }
        Command::Detail {
            sources,
            index,
            year,
            department,
        } => {
            let selection = Selection::new(index, year, DepartmentFilter::from_selection(&department));
            map::write_detail(&store, &sources.sources(), &selection, &mut io::stdout().lock())
        }
        Command::Years { sources, index } => {
            listing::write_years(&store, &sources.sources(), index, &mut io::stdout().lock())
        }
        Command::Departments { sources, index } => {
            listing::write_departments(&store, &sources.sources(), index, &mut io::stdout().lock())
        }
        Command::Export {
            sources,
            index,
            year,
            output,
        } => {
            let selection = Selection::new(index, year, DepartmentFilter::All);
            let mut buffer = Vec::new();
            let count = map::write_export(&store, &sources.sources(), &selection, &mut buffer)?;
            emit_output(output.as_deref(), &buffer)?;
            log::info!("[BFCI Debug] cmd: exported {} observations", count);
            Ok(())
        }
        Command::Animation { index, dir } => {
            let assets = AnimationAssets::Directory(dir);
            listing::write_animation(&assets, index, &mut io::stdout().lock())
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use calamine::{Data, Range};
    use serde_json::json;

    /// Boundaries of 196 departments, as an embedded resource. The first
    /// three are Kaya, Dori and Boromo; feature 195 is corrected on load.
    pub fn boundaries() -> Resource {
        let features: Vec<_> = (0..196)
            .map(|i| {
                let name = match i {
                    0 => "Kaya".to_string(),
                    1 => "Dori".to_string(),
                    2 => "Boromo".to_string(),
                    _ => format!("Departement {}", i),
                };
                let x = -5.0 + i as f64 * 0.05;
                json!({
                    "type": "Feature",
                    "properties": { "NAME_3": name },
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[x, 12.0], [x + 0.05, 12.0], [x + 0.05, 12.05], [x, 12.05], [x, 12.0]]]
                    }
                })
            })
            .collect();
        let data = json!({ "type": "FeatureCollection", "features": features }).to_string();
        Resource::embedded("boundaries.json", data.as_bytes())
    }

    /// A store with an spi sheet preloaded for a workbook that is never
    /// opened.
    pub fn store() -> (IndexStore, Sources) {
        let store = IndexStore::new().unwrap();
        let sources = Sources {
            boundaries: boundaries(),
            workbook: Resource::file("/no/such/index_data.xlsx"),
        };
        let mut range = Range::new((0, 0), (3, 2));
        let cells = [
            [Data::String("NAME_3".into()), Data::Float(2019.0), Data::Float(2020.0)],
            [Data::String("Kaya".into()), Data::Float(-2.0), Data::Float(0.3)],
            [Data::String("Dori".into()), Data::Empty, Data::Float(1.7)],
            [Data::String("Gorom".into()), Data::Float(0.0), Data::Float(-1.2)],
        ];
        for (r, row) in cells.into_iter().enumerate() {
            for (c, cell) in row.into_iter().enumerate() {
                range.set_value((r as u32, c as u32), cell);
            }
        }
        store
            .load_sheet(&sources.workbook.id(), IndexFamily::Spi, &range)
            .unwrap();
        (store, sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn missing_sources(dir: &Path) -> SourceArgs {
        SourceArgs {
            boundaries: dir.join("gadm41_BFA_3.json"),
            workbook: dir.join("index_data.xlsx"),
        }
    }

    #[test]
    fn test_failed_map_keeps_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.json");
        fs::write(&path, "PREVIOUS MAP").unwrap();

        let result = run(Command::Map {
            sources: missing_sources(dir.path()),
            index: IndexFamily::Wrsi,
            year: "2020".to_string(),
            department: ALL_DEPARTMENTS.to_string(),
            output: Some(path.clone()),
        });
        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "PREVIOUS MAP");
    }

    #[test]
    fn test_failed_export_creates_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.csv");

        let result = run(Command::Export {
            sources: missing_sources(dir.path()),
            index: IndexFamily::Spi,
            year: "2020".to_string(),
            output: Some(path.clone()),
        });
        assert!(result.is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_emit_output_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "old").unwrap();
        emit_output(Some(path.as_path()), b"NAME_3,2020,Category\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "NAME_3,2020,Category\n");
    }
}
