//! # Engine Module
//!
//! The computational pipeline that turns an atom stream into styled plot series.
//!
//! ## Architecture
//!
//! - **Backbone Scanning** ([`scanner`]) - Single-pass state machine resolving phi/psi atom quintuples
//! - **Dihedral Evaluation** ([`evaluator`]) - Phi/psi angles from a site and a coordinate frame
//! - **Residue Filtering** ([`filter`]) - Residue-name selection with index remapping
//! - **Plot Assembly** ([`assembler`]) - Coloring, tagging and merging of one or more series
//! - **Configuration** ([`config`]) - Chain/residue selection and plot settings, TOML loadable
//! - **Progress Monitoring** ([`progress`]) - Optional callback-based progress events
//! - **Error Handling** ([`error`]) - Structured error kinds with the offending ids and indices
//!
//! Structural problems (inconsistent backbone numbering, coordinates missing for a
//! referenced atom) abort the whole operation; an excess highlight request only
//! downgrades the affected point.

pub mod assembler;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod filter;
pub mod progress;
pub mod scanner;
