//! Output side of the library.
//!
//! Rasterizing an image is left to an external graphics backend; this module only
//! defines the [`traits::Renderer`] capability the assembled plot is handed to, and
//! ships a headless CSV export of the styled points.

pub mod csv_export;
pub mod traits;
