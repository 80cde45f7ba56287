use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::generator::generate_scaffold_from_sheet;
use crate::linter;
use crate::stack::{
    StackSelection, BACKENDS, DATABASES, DATA_FETCH_METHODS, FRONTENDS, INTERFACE_TYPES,
};

/// Command-line interface for ifacegen
///
/// Provides commands for generating scaffold files from metadata sheets
/// and for checking sheets before generation.
#[derive(Parser)]
#[command(name = "ifacegen")]
#[command(about = "ifacegen CLI", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands for ifacegen
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a scaffold file from a metadata sheet
    Generate {
        /// Path to the metadata sheet (CSV or JSON)
        #[arg(short, long)]
        sheet: PathBuf,

        /// Output directory for the scaffold file (default: current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Frontend framework (e.g. ReactJS, Angular, VueJS)
        #[arg(long)]
        frontend: String,

        /// Backend framework (e.g. NodeJS, Django, Flask)
        #[arg(long)]
        backend: String,

        /// Database (e.g. MySQL, PostgreSQL, MongoDB, SQLite)
        #[arg(long)]
        database: String,

        /// Data-fetch method (e.g. "REST API", GraphQL, WebSockets)
        #[arg(long)]
        data_fetch: String,

        /// Interface type (e.g. "Display Data", "Enter Data")
        #[arg(long)]
        interface_type: String,

        /// Overwrite an existing scaffold file without prompting
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Reject unrecognized selection values instead of omitting fragments
        #[arg(long, default_value_t = false)]
        strict: bool,
    },
    /// Lint a metadata sheet
    ///
    /// Checks the sheet for common issues before generation:
    /// - Missing 'Column Name' header
    /// - Empty sheet or blank column names
    /// - Duplicate or untrimmed names
    /// - Column name casing
    Lint {
        /// Path to the metadata sheet (CSV or JSON)
        #[arg(short, long)]
        sheet: PathBuf,

        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings and info)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
    /// List the recognized values for every selection field
    Options,
}

/// Execute the CLI command provided by the user
///
/// # Errors
///
/// Returns an error if:
/// - The metadata sheet cannot be loaded or fails validation
/// - A strict run encounters an unrecognized selection value
/// - Scaffold rendering or writing fails
pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate {
            sheet,
            output,
            frontend,
            backend,
            database,
            data_fetch,
            interface_type,
            force,
            strict,
        } => {
            let selection =
                StackSelection::from_inputs(frontend, backend, database, data_fetch, interface_type);
            let path = generate_scaffold_from_sheet(
                sheet,
                output.as_deref(),
                &selection,
                *force,
                *strict,
            )?;
            println!("✅ Scaffold written → {path:?}");
            Ok(())
        }
        Commands::Lint {
            sheet,
            fail_on_error,
            errors_only,
        } => {
            let issues = linter::lint_sheet(sheet)?;

            if *errors_only {
                let errors: Vec<_> = issues
                    .iter()
                    .filter(|i| i.severity == linter::LintSeverity::Error)
                    .cloned()
                    .collect();
                linter::print_lint_issues(&errors);
                if *fail_on_error && !errors.is_empty() {
                    linter::fail_if_errors(&errors);
                }
            } else {
                linter::print_lint_issues(&issues);
                if *fail_on_error {
                    linter::fail_if_errors(&issues);
                }
            }

            Ok(())
        }
        Commands::Options => {
            print_options();
            Ok(())
        }
    }
}

/// Print the recognized selection tables
fn print_options() {
    println!("Frontend frameworks:   {}", FRONTENDS.join(", "));
    println!("Backend frameworks:    {}", BACKENDS.join(", "));
    println!("Databases:             {}", DATABASES.join(", "));
    println!("Data-fetch methods:    {}", DATA_FETCH_METHODS.join(", "));
    println!("Interface types:       {}", INTERFACE_TYPES.join(", "));
}
