//! # CLI Module
//!
//! Command-line interface for the ifacegen scaffold generator.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Generate a scaffold file from a metadata sheet and a stack selection:
//!
//! ```bash
//! ifacegen generate --sheet metadata.csv \
//!     --frontend ReactJS --backend Flask --database SQLite \
//!     --data-fetch "REST API" --interface-type "Display Data"
//! ```
//!
//! Options:
//! - `--sheet <FILE>` - Metadata sheet, CSV or JSON (required)
//! - `--output <DIR>` - Output directory (default: current directory)
//! - `--force` - Overwrite an existing scaffold file
//! - `--strict` - Reject unrecognized selection values instead of
//!   emitting the section without a fragment
//!
//! ### `lint`
//!
//! Check a metadata sheet without generating anything:
//!
//! ```bash
//! ifacegen lint --sheet metadata.csv --fail-on-error
//! ```
//!
//! ### `options`
//!
//! Print the recognized values for every selection field:
//!
//! ```bash
//! ifacegen options
//! ```

mod commands;


pub use commands::{run_cli, Cli, Commands};
