pub mod registrants;
pub mod workbook;

use std::fmt::Write;
use std::path::PathBuf;

/// Format the list of written workbook files into a human readable String
/// (e.g. to print it to stdout).
///
/// The output format will look like
/// ```text
/// Wrote 2 file(s):
///   out/pamelding_Oslo_Turnforening.xlsx
///   out/pamelding_Bergen_Turnforening.xlsx
/// ```
pub fn format_written_files(written: &[PathBuf]) -> String {
    let mut result = String::new();
    write!(result, "Wrote {} file(s):\n", written.len()).unwrap();
    for path in written {
        write!(result, "  {}\n", path.display()).unwrap();
    }
    result
}
