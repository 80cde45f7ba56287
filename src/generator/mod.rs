//! # Generator Module
//!
//! The generator module turns a list of metadata column names plus a
//! [`StackSelection`](crate::stack::StackSelection) into a scaffold source
//! file for the selected technology stack.
//!
//! ## Overview
//!
//! Generation is a fixed sequence of sections, each appended in order:
//!
//! 1. Header line naming the interface type, frontend, backend, and database
//! 2. One comment line per metadata column, in input order
//! 3. Backend-setup section (header always present, fragment only for a
//!    recognized backend)
//! 4. Frontend-setup section, same policy
//! 5. Data-fetch section, same policy
//! 6. Interface-type guidance comment, same policy
//!
//! The generator is deterministic and total: unrecognized selections omit
//! their fragment but never fail, and an empty column list still produces a
//! well-formed scaffold.
//!
//! ## Architecture
//!
//! Rendering uses an Askama template:
//!
//! ```text
//! Metadata Sheet → Sheet Loading → Selection Parsing → Template Rendering → Scaffold File
//! ```
//!
//! The [`ScaffoldGenerator`] trait marks the collaborator boundary: other
//! generation strategies (e.g. one backed by an external model) share the
//! same input/output contract, while [`TemplateGenerator`] is the
//! deterministic in-tree implementation.
//!
//! ## Usage
//!
//! ### CLI Usage
//!
//! ```bash
//! cargo run --bin ifacegen -- generate \
//!     --sheet metadata.csv \
//!     --frontend ReactJS --backend Flask --database SQLite \
//!     --data-fetch "REST API" --interface-type "Display Data"
//! ```
//!
//! ### Programmatic Usage
//!
//! ```rust,ignore
//! use ifacegen::generator::generate_scaffold;
//! use ifacegen::stack::StackSelection;
//!
//! let selection =
//!     StackSelection::from_inputs("ReactJS", "Flask", "SQLite", "REST API", "Display Data");
//! let code = generate_scaffold(&["id".to_string(), "name".to_string()], &selection)?;
//! ```
//!
//! ## Template Customization
//!
//! The scaffold layout lives in `templates/scaffold.py.txt`; the per-value
//! boilerplate fragments live in [`crate::stack`].

mod project;
mod templates;
#[cfg(test)]
mod tests;

pub use project::*;
pub use templates::*;
