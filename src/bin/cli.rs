//! Command-line interface for the SBML flattening library
//!
//! This binary flattens SBML model files into plain data structures and
//! prints them as tables or writes them as JSON.
//!
//! # Usage
//!
//! ```bash
//! # Print the flattened model as tables
//! sbmlflat flatten --path model.xml
//!
//! # Write the flattened model as JSON
//! sbmlflat flatten --path model.xml --output flat.json
//!
//! # Show version information of the parsing stack
//! sbmlflat version
//! ```

use std::{fs::File, path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use colored::Colorize;
use sbmlflat::{
    flatten::extract::flatten,
    version::{dotted_version, version_number},
};

/// Main CLI configuration struct
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
enum Commands {
    /// Flatten an SBML model file into plain lists
    Flatten {
        /// Path to the SBML file to flatten
        #[arg(short, long)]
        path: PathBuf,

        /// Write the result as JSON to this path instead of printing tables
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print version information of the parsing stack
    Version,
}

/// Main entry point for the CLI application
pub fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Flatten { path, output } => {
            log::info!("flattening {}", path.display());
            let result = flatten(path);

            if result.is_err() {
                for error in &result.errors {
                    eprintln!("{}", error.red());
                }
                return ExitCode::FAILURE;
            }

            log::info!(
                "flattened {} unit parts, {} compartments, {} species, {} reactions",
                result.units.len(),
                result.compartments.len(),
                result.species.len(),
                result.reactions.len()
            );

            match output {
                Some(output) => {
                    let file = match File::create(output) {
                        Ok(file) => file,
                        Err(error) => {
                            let message = format!("failed to create {:?}: {}", output, error);
                            eprintln!("{}", message.red());
                            return ExitCode::FAILURE;
                        }
                    };
                    if let Err(error) = serde_json::to_writer_pretty(file, &result) {
                        eprintln!("{}", format!("failed to write JSON: {}", error).red());
                        return ExitCode::FAILURE;
                    }
                }
                None => println!("{}", result),
            }

            ExitCode::SUCCESS
        }
        Commands::Version => {
            println!("sbmlflat {} ({})", dotted_version(), version_number());
            ExitCode::SUCCESS
        }
    }
}
