mod config;
mod error;
mod index;
mod report;
mod scanner;
mod types;

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base directory containing the photos/ and posts/ folders
    #[arg(long, short = 'r', default_value = ".")]
    root: PathBuf,

    /// Only report errors
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut results = Vec::new();
    for cfg in config::builtin() {
        log::debug!("indexing {} -> {}", cfg.folder, cfg.output_file);
        match index::generate_index(&args.root, &cfg, args.quiet) {
            Ok(outcome) => results.push((cfg, outcome)),
            Err(e) => {
                log::debug!("{e:?}");
                report::print_failure(&cfg, &e);
                std::process::exit(1);
            }
        }
    }

    if !args.quiet {
        report::print_summary(&results);
    }
}
