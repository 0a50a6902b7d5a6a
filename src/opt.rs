use std::path::PathBuf;

use church_calc::numeral;
use clap::Parser as ClapParser;
use log::error;

use crate::parser::Parser;

/// Church encodings and bird combinators, interactively.
#[derive(Debug, ClapParser)]
#[command(name = "church_calc", version, about)]
pub struct Options {
    /// Files to evaluate before the prompt starts.
    pub files: Vec<PathBuf>,

    /// Evaluate the files (or stdin, if none is given) and exit.
    #[arg(short = 'n', long)]
    pub no_interactive: bool,

    /// Largest numeral literal accepted.
    #[arg(long, value_name = "N", default_value_t = numeral::DEFAULT_CEILING)]
    pub max_numeral: u64,
}

pub fn parse_cmdline_options() -> Options {
    Options::parse()
}

// returns true if the REPL should be run afterwards, false otherwise.
pub fn load_files(options: &Options, parser: &mut Parser) -> bool {
    if options.no_interactive && options.files.is_empty() {
        load_file(None, parser);
        return false;
    }
    for name in &options.files {
        if !load_file(Some(name), parser) {
            return false;
        }
    }
    // never start interactive prompt when -n is used
    !options.no_interactive
}

fn load_file(filename: Option<&PathBuf>, parser: &mut Parser) -> bool {
    if let Err(e) = parser.parse_file(filename.map(PathBuf::as_path)) {
        error!("failed to load file: {}", e);
        return false;
    }
    true
}
