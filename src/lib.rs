//! # ifacegen
//!
//! **ifacegen** generates interface scaffold files from spreadsheet column
//! metadata and a five-field technology stack selection (frontend, backend,
//! database, data-fetch method, interface type).
//!
//! ## Overview
//!
//! The deterministic template generator is the core: it maps the ordered
//! column names and the selection to a single scaffold text by
//! concatenating fixed boilerplate fragments, rendered through an Askama
//! template. Everything else is input loading, validation, and CLI glue.
//!
//! The library is organized into a few small modules:
//!
//! - **[`stack`]** - the selection enums, recognized-value tables, and the
//!   boilerplate fragment for each recognized value
//! - **[`metadata`]** - metadata sheet loading (CSV/JSON) with caller-side
//!   validation
//! - **[`generator`]** - template rendering and scaffold file writing
//! - **[`linter`]** - sheet checks with severities, for the `lint` command
//! - **[`cli`]** - the `ifacegen` binary's command definitions
//!
//! ## Generation Flow
//!
//! ```text
//! Metadata Sheet (CSV/JSON) ─┐
//!                            ├─► Template Rendering ─► Scaffold File
//! Stack Selection (strings) ─┘
//! ```
//!
//! Unrecognized selection values are not errors: the matching section is
//! emitted without a code fragment and a warning is logged. The `--strict`
//! CLI flag upgrades them to errors.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ifacegen::generator::generate_scaffold;
//! use ifacegen::stack::StackSelection;
//!
//! let selection =
//!     StackSelection::from_inputs("ReactJS", "Flask", "SQLite", "REST API", "Display Data");
//! let code = generate_scaffold(&["id".to_string(), "name".to_string()], &selection)?;
//! assert!(code.contains("# - id"));
//! ```

pub mod cli;
pub mod generator;
pub mod linter;
pub mod metadata;
pub mod stack;

pub use generator::{
    generate_scaffold, generate_scaffold_from_sheet, ScaffoldGenerator, TemplateGenerator,
    GENERATED_FILE_NAME,
};
pub use metadata::{column_names, load_sheet, ColumnMeta};
pub use stack::{Backend, DataFetch, Database, Frontend, InterfaceType, StackSelection};
