//! # Workflows Module
//!
//! End-to-end entry points that turn an atom sequence and a coordinate frame into a
//! finished Ramachandran plot.
//!
//! ## Overview
//!
//! A workflow wires the engine stages together in the order a caller would
//! otherwise have to reproduce by hand: backbone scanning, residue filtering with
//! tag remapping, dihedral evaluation and styling, metadata, and finally handing
//! the plot to a [`Renderer`](crate::core::io::traits::Renderer). Progress is
//! reported through an optional callback, and any structural error aborts the run
//! before the renderer is touched.
//!
//! - **Ramachandran Workflow** ([`ramachandran`]) - Single-series and multi-series
//!   phi/psi plots driven by a [`PlotConfig`](crate::engine::config::PlotConfig).

pub mod ramachandran;
