//! # Core Models Module
//!
//! Data structures describing the input topology and the records derived from it.
//!
//! ## Key Components
//!
//! - [`atom`] - Immutable atoms and the ordered, caller-owned `AtomSequence`
//! - [`site`] - `DihedralSite`, the five backbone atom indices of one residue
//! - [`point`] - `DihedralAngle` and the styled `TaggedPoint` handed to renderers
//! - [`plot`] - Plot metadata and the assembled, renderer-ready `Plot`
//!
//! ## Usage
//!
//! ```ignore
//! use ramaplot::core::models::atom::{Atom, AtomSequence};
//!
//! let atoms: AtomSequence = vec![
//!     Atom::new('A', "N", 1, "GLY"),
//!     Atom::new('A', "CA", 1, "GLY"),
//!     Atom::new('A', "C", 1, "GLY"),
//! ]
//! .into_iter()
//! .collect();
//! assert_eq!(atoms.len(), 3);
//! ```

pub mod atom;
pub mod plot;
pub mod point;
pub mod site;
