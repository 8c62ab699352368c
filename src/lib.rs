//! Generation of per-club registration workbooks from a JSON list of
//! registrants.
//!
//! The pipeline is a single linear transform: `io::registrants::read` loads
//! the records, `group_by_club` partitions them, `sheet::fill` populates a
//! fresh copy of the template workbook for each club and `io::workbook`
//! persists it. `run` ties the stages together.

pub mod io;
pub mod sheet;

use std::collections::HashMap;
use std::fs::File;
use std::path::PathBuf;

use log::info;
use serde::Deserialize;
use thiserror::Error;

use crate::sheet::SheetLayout;

/// Registration category of a registrant: an age bracket for gymnasts or the
/// coach role (`trener`).
///
/// Values outside the six recognized ones are preserved as `Other`, so they
/// can be named in log output. They get no age column mark in the generated
/// sheet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Category {
    Rekrutt,
    Age13To14,
    Age15To16,
    Age17To18,
    Senior,
    Trener,
    Other(String),
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        match value.as_str() {
            "rekrutt" => Category::Rekrutt,
            "13-14" => Category::Age13To14,
            "15-16" => Category::Age15To16,
            "17-18" => Category::Age17To18,
            "senior" => Category::Senior,
            "trener" => Category::Trener,
            _ => Category::Other(value),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(match self {
            Category::Rekrutt => "rekrutt",
            Category::Age13To14 => "13-14",
            Category::Age15To16 => "15-16",
            Category::Age17To18 => "17-18",
            Category::Senior => "senior",
            Category::Trener => "trener",
            Category::Other(value) => value.as_str(),
        })
    }
}

impl Category {
    /// Whether this category marks the registrant as a coach instead of a
    /// competing gymnast
    pub fn is_coach(&self) -> bool {
        matches!(self, Category::Trener)
    }
}

/// Representation of one registrant record from the JSON source file
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Registrant {
    /// Full name, written to the name column verbatim
    #[serde(rename = "fullName")]
    pub full_name: String,
    /// Name of the club the registrant belongs to. Each club receives one
    /// output workbook.
    pub club: String,
    /// Age bracket or coach role
    pub category: Category,
    /// License number. The registration exports carry both JSON strings and
    /// plain numbers here, both are accepted.
    #[serde(
        rename = "licenseNumber",
        deserialize_with = "crate::io::registrants::string_or_number"
    )]
    pub license_number: String,
    /// Date of birth, written to the sheet verbatim
    pub dob: String,
}

/// All members of one club, in input order
#[derive(Debug, PartialEq)]
pub struct ClubGroup {
    pub club: String,
    pub members: Vec<Registrant>,
}

/// Partition the registrants into per-club groups.
///
/// Groups are ordered by the first appearance of their club in the input and
/// keep their members in input order. No deduplication, no sorting.
pub fn group_by_club(registrants: Vec<Registrant>) -> Vec<ClubGroup> {
    let mut groups: Vec<ClubGroup> = Vec::new();
    let mut group_index_by_club: HashMap<String, usize> = HashMap::new();
    for registrant in registrants {
        match group_index_by_club.get(&registrant.club) {
            Some(index) => groups[*index].members.push(registrant),
            None => {
                group_index_by_club.insert(registrant.club.clone(), groups.len());
                groups.push(ClubGroup {
                    club: registrant.club.clone(),
                    members: vec![registrant],
                });
            }
        }
    }
    groups
}

/// Error kinds of a generation run. Each of them is fatal for the run.
#[derive(Debug, Error)]
pub enum Error {
    /// The source JSON could not be read or decoded into registrant records
    #[error("could not read registrant data: {0}")]
    Parse(String),
    /// The template workbook could not be loaded or holds no worksheet
    #[error("could not load template: {0}")]
    Template(String),
    /// A filled workbook could not be written to the output directory
    #[error("could not write workbook for club '{club}': {message}")]
    Write { club: String, message: String },
}

/// Configuration of one generation run
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON file with the registrant records
    pub source_path: PathBuf,
    /// Template workbook (.xlsx) to fill for each club
    pub template_path: PathBuf,
    /// Directory the per-club workbooks are written to
    pub output_dir: PathBuf,
    /// Cell layout of the template variant
    pub layout: SheetLayout,
}

/// Run the full generation pipeline: load the registrants, group them by club
/// and write one filled workbook per club.
///
/// The template is re-loaded from disk for every club, so each workbook starts
/// from a pristine copy. Returns the paths of the written files, in club
/// order. The first failing stage aborts the run; files written up to that
/// point are reported via the log.
pub fn run(config: &Config) -> Result<Vec<PathBuf>, Error> {
    let file = File::open(&config.source_path)
        .map_err(|err| Error::Parse(format!("{}: {}", config.source_path.display(), err)))?;
    let registrants = io::registrants::read(file).map_err(Error::Parse)?;
    info!(
        "Read {} registrants from {}",
        registrants.len(),
        config.source_path.display()
    );

    let groups = group_by_club(registrants);
    info!("The registrants belong to {} clubs", groups.len());

    let mut written = Vec::with_capacity(groups.len());
    for group in &groups {
        let mut book =
            io::workbook::load_template(&config.template_path).map_err(Error::Template)?;
        sheet::fill(&mut book, group, &config.layout).map_err(Error::Template)?;
        let path = io::workbook::write_club_workbook(&book, &config.output_dir, &group.club)
            .map_err(|message| Error::Write {
                club: group.club.clone(),
                message,
            })?;
        info!("Wrote {} ({} members)", path.display(), group.members.len());
        written.push(path);
    }

    Ok(written)
}
