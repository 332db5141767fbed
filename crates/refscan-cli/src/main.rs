mod commands;
mod output;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "refscan",
    version,
    about = "Index and search reference numbers in PDF document collections"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build the identifier index for a directory of PDFs
    Index {
        /// Directory to scan (non-recursive)
        #[arg(default_value = "assets")]
        directory: PathBuf,

        /// Write the JSON index to this file
        #[arg(short = 'O', long = "out", value_name = "FILE", default_value = "search_index.json")]
        out: PathBuf,
    },
    /// Search PDFs for a literal term, reporting per-page matches
    Search {
        /// Term to look for (exact substring, case-sensitive)
        term: String,

        /// Directory to scan (non-recursive)
        #[arg(default_value = ".")]
        directory: PathBuf,

        /// Output format: text (default) or json
        #[arg(short, long, default_value = "text")]
        output: String,
    },
    /// Print the extracted text of one PDF, page by page
    Dump {
        /// Path to PDF file
        file: PathBuf,
    },
}

fn main() {
    // Usage errors (missing term, unknown flag) exit with status 1; --help
    // and --version are not errors and exit 0 as usual.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Index { directory, out } => commands::index::run(directory, out),
        Commands::Search {
            term,
            directory,
            output,
        } => commands::search::run(&term, directory, &output),
        Commands::Dump { file } => commands::dump::run(file),
    };

    // Runtime failures (missing directory, unreadable dump target) are
    // reported but keep the best-effort exit status 0; only usage errors
    // produce a non-zero exit.
    if let Err(e) = result {
        eprintln!("Error: {e}");
    }
}
