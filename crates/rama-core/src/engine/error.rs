use crate::core::style::shape::TooManyTags;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlotError {
    #[error("Required input is empty: {what}")]
    NilInput { what: &'static str },

    #[error("Inconsistent data length for {what}: expected at least {expected}, found {found}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error(
        "Incorrect backbone around residue {residue_id} (N atom #{n_index}): \
         expected C(prev)/CA/C/N(next) residue ids {}/{residue_id}/{residue_id}/{}, \
         found {prev_c}/{ca}/{c}/{next_n}",
        .residue_id - 1,
        .residue_id + 1
    )]
    BackboneInconsistency {
        /// Residue id of the N atom, which defines the site.
        residue_id: isize,
        /// Index of that N atom in the atom sequence.
        n_index: usize,
        prev_c: isize,
        ca: isize,
        c: isize,
        next_n: isize,
    },

    #[error("Atom index {index} is out of range for a frame of {len} positions")]
    IndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    TooManyTags(#[from] TooManyTags),
}

impl PlotError {
    /// Whether the error must abort the operation it came from.
    ///
    /// Only an excess highlight request is recoverable, at the granularity of a
    /// single point.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, PlotError::TooManyTags(_))
    }
}
