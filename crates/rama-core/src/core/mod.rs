//! # Core Module
//!
//! Stateless building blocks for Ramachandran analysis.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, atom sequences, dihedral sites and plot points
//! - **Geometry & Lookup Tables** ([`utils`]) - Dihedral math and backbone atom name tables
//! - **Visual Styling** ([`style`]) - Deterministic color ramps and highlight shapes
//! - **Rendering Seam** ([`io`]) - The `Renderer` capability and a CSV export
//!
//! Nothing in this module holds mutable state across calls; coordinate buffers are
//! always borrowed read-only from the caller.

pub mod io;
pub mod models;
pub mod style;
pub mod utils;
