use crate::core::style::color::Rgb;
use crate::core::style::shape::Shape;
use serde::Serialize;

/// A phi/psi pair in degrees, each within [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DihedralAngle {
    pub phi: f64,
    pub psi: f64,
}

impl DihedralAngle {
    pub fn new(phi: f64, psi: f64) -> Self {
        Self { phi, psi }
    }
}

/// A fully styled point, ready to be drawn at `(phi, psi)`.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedPoint {
    pub angle: DihedralAngle,
    /// Highlight rank within the series (0..=3), `None` for ordinary points.
    pub tag_rank: Option<usize>,
    pub color: Rgb,
    pub shape: Shape,
    pub residue_id: isize,
    pub residue_name: String,
}

impl TaggedPoint {
    pub fn x(&self) -> f64 {
        self.angle.phi
    }

    pub fn y(&self) -> f64 {
        self.angle.psi
    }

    pub fn is_tagged(&self) -> bool {
        self.tag_rank.is_some()
    }
}
