use clap::{Parser, Subcommand};
use std::path::PathBuf;

use health_catalogue::{render, Catalogue, FETCH_ERROR_MESSAGE, NOT_FOUND_MESSAGE};
use health_core::{PatientForm, Registry};

#[derive(Parser)]
#[command(name = "health")]
#[command(about = "Health analysis patient registry CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest form submissions and print the statistical report
    Report {
        /// JSON file holding an array of form submissions
        #[arg(long)]
        input: PathBuf,
    },
    /// Look up a condition by name in the catalogue
    Lookup {
        /// Condition name (matched case-insensitively)
        name: String,
        /// Conditions catalogue file
        #[arg(long, default_value = "health_analysis.json")]
        data: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Report { input }) => {
            let text = std::fs::read_to_string(&input)?;
            let forms: Vec<PatientForm> = serde_json::from_str(&text)?;

            let mut registry = Registry::new();
            for (index, form) in forms.into_iter().enumerate() {
                if let Err(e) = registry.submit(form) {
                    eprintln!("Skipping entry {}: {}", index, e);
                }
            }

            print!("{}", registry.report());
        }
        Some(Commands::Lookup { name, data }) => match Catalogue::load(&data) {
            Ok(catalogue) => match catalogue.find(&name) {
                Some(record) => print!("{}", render::condition_details(record)),
                None => println!("{}", NOT_FOUND_MESSAGE),
            },
            Err(e) => {
                eprintln!("Error: {}", e);
                println!("{}", FETCH_ERROR_MESSAGE);
            }
        },
        None => {
            println!("Use 'health --help' for commands");
        }
    }

    Ok(())
}
