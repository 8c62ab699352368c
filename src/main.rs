use std::path::PathBuf;

use clap::{arg, command, value_parser};
use log::error;

use pamelding::sheet::SheetLayout;
use pamelding::{run, Config, Error};

fn main() {
    env_logger::init();

    let args = command!()
        .about("Generates one filled-in registration workbook per club from a JSON list of registrants")
        .arg(
            arg!(<INPUT> "JSON file with the registrant records")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(-t --template <FILE> "Template workbook (.xlsx) to fill for each club")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            arg!(-o --"output-dir" <DIR> "Directory to write the generated workbooks to")
                .required(false)
                .default_value(".")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(arg!(--"legacy-layout" "Fill the older template variant (header in row 8)"))
        .arg(
            arg!(--"header-row" <ROW> "Override the header row of the chosen layout")
                .required(false)
                .value_parser(value_parser!(u32)),
        )
        .arg(
            arg!(--"first-data-row" <ROW> "Override the first data row of the chosen layout")
                .required(false)
                .value_parser(value_parser!(u32)),
        )
        .arg(
            arg!(--"consent-label" <LABEL> "Override the consent column label of the chosen layout")
                .required(false),
        )
        .get_matches();

    let mut layout = if args.get_flag("legacy-layout") {
        SheetLayout::legacy()
    } else {
        SheetLayout::standard()
    };
    if let Some(row) = args.get_one::<u32>("header-row") {
        layout.header_row = *row;
    }
    if let Some(row) = args.get_one::<u32>("first-data-row") {
        layout.first_data_row = *row;
    }
    if let Some(label) = args.get_one::<String>("consent-label") {
        layout.consent_label = label.clone();
    }

    let config = Config {
        source_path: args.get_one::<PathBuf>("INPUT").unwrap().clone(),
        template_path: args.get_one::<PathBuf>("template").unwrap().clone(),
        output_dir: args.get_one::<PathBuf>("output-dir").unwrap().clone(),
        layout,
    };

    match run(&config) {
        Ok(written) => {
            print!("{}", pamelding::io::format_written_files(&written));
            std::process::exit(exitcode::OK);
        }
        Err(err) => {
            error!("{}", err);
            std::process::exit(match err {
                Error::Parse(_) => exitcode::DATAERR,
                Error::Template(_) => exitcode::NOINPUT,
                Error::Write { .. } => exitcode::CANTCREAT,
            });
        }
    }
}
