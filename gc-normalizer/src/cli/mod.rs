//! Command-line interface

mod handler;

use std::path::PathBuf;

use clap::{ArgAction, Parser};

pub use handler::handle_normalize_command;

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "fichier_transforme.xlsx";

/// Transformation automatique des colonnes pour permettre l'importation dans GC
#[derive(Parser, Debug)]
#[command(name = "gc-normalizer", version, about, long_about = None)]
pub struct NormalizeArgs {
    /// Spreadsheet to normalize (xlsx, xlsm, xls or ods)
    pub input: PathBuf,

    /// Output xlsx file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Sheet to read (defaults to the first sheet)
    #[arg(short, long)]
    pub sheet: Option<String>,

    /// Name of the output sheet (overrides the config file)
    #[arg(long)]
    pub sheet_name: Option<String>,

    /// TOML file overriding or extending column limits
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the first N normalized rows
    #[arg(long, value_name = "N")]
    pub preview: Option<usize>,

    /// Normalize and report without writing the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl NormalizeArgs {
    /// Log level used when RUST_LOG is not set
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = NormalizeArgs::try_parse_from(["gc-normalizer", "contacts.xlsx"]).unwrap();
        assert_eq!(args.input, PathBuf::from("contacts.xlsx"));
        assert_eq!(args.output, PathBuf::from(DEFAULT_OUTPUT));
        assert!(args.sheet.is_none());
        assert!(!args.dry_run);
        assert_eq!(args.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_all_flags() {
        let args = NormalizeArgs::try_parse_from([
            "gc-normalizer",
            "in.xls",
            "-o",
            "out.xlsx",
            "-s",
            "Clients",
            "--sheet-name",
            "Import",
            "-c",
            "gc.toml",
            "--preview",
            "5",
            "--dry-run",
            "--no-color",
            "-vv",
        ])
        .unwrap();

        assert_eq!(args.sheet.as_deref(), Some("Clients"));
        assert_eq!(args.sheet_name.as_deref(), Some("Import"));
        assert_eq!(args.config, Some(PathBuf::from("gc.toml")));
        assert_eq!(args.preview, Some(5));
        assert!(args.dry_run && args.no_color);
        assert_eq!(args.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_input_required() {
        assert!(NormalizeArgs::try_parse_from(["gc-normalizer"]).is_err());
    }
}
