//! # ramaplot Core Library
//!
//! Backbone dihedral extraction and Ramachandran plot assembly for protein structures.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture so that the numerical core stays
//! free of any rendering or file-format concerns and can be tested headlessly.
//!
//! - **[`core`]: The Foundation.** Immutable data models (`Atom`, `AtomSequence`,
//!   `DihedralSite`, `TaggedPoint`), pure geometry, the deterministic color/shape
//!   styling rules and the rendering seam (`Renderer`).
//!
//! - **[`engine`]: The Logic Core.** The backbone scanning state machine, dihedral
//!   evaluation, residue filtering and plot assembly, together with configuration,
//!   error types and progress reporting.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures that take an atom
//!   sequence, a coordinate frame and a configuration and hand a finished plot to a
//!   renderer.

pub mod core;
pub mod engine;
pub mod workflows;
