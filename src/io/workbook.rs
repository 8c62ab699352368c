//! IO functionality for loading the template workbook and writing the filled
//! per-club workbooks.

use std::path::{Path, PathBuf};

use umya_spreadsheet::{reader, writer, Spreadsheet};

/// File name prefix of every generated workbook
const FILE_PREFIX: &str = "pamelding_";

/// Load the template workbook from disk.
///
/// The template is opened read-only and freshly re-loaded for every club, so
/// no state leaks between the generated files.
pub fn load_template(path: &Path) -> Result<Spreadsheet, String> {
    reader::xlsx::read(path).map_err(|err| format!("{}: {}", path.display(), err))
}

/// Derive a file system friendly name part from a club name by replacing
/// spaces and forward slashes with underscores
pub fn sanitize_club_name(club: &str) -> String {
    club.replace(' ', "_").replace('/', "_")
}

/// Write the filled workbook for the given club into the output directory.
///
/// The file name is derived from the sanitized club name. Returns the path of
/// the written file.
///
/// # Errors
///
/// Fails with a string error message if the output directory is not writable
/// or the workbook cannot be serialized.
pub fn write_club_workbook(
    book: &Spreadsheet,
    output_dir: &Path,
    club: &str,
) -> Result<PathBuf, String> {
    let path = output_dir.join(format!("{}{}.xlsx", FILE_PREFIX, sanitize_club_name(club)));
    writer::xlsx::write(book, &path).map_err(|err| format!("{}: {}", path.display(), err))?;
    Ok(path)
}
