use std::process::ExitCode;

use clap::Parser;

use gc_normalizer::cli::{NormalizeArgs, handle_normalize_command};

fn main() -> ExitCode {
    let args = NormalizeArgs::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    match handle_normalize_command(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{:?}", e);
            eprintln!("Erreur lors de la lecture ou du traitement du fichier : {:#}", e);
            ExitCode::FAILURE
        }
    }
}
