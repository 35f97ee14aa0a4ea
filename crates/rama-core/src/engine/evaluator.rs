use super::error::PlotError;
use crate::core::models::point::DihedralAngle;
use crate::core::models::site::DihedralSite;
use crate::core::utils::geometry::dihedral_angle_degrees;
use nalgebra::Point3;
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Read-only access to the atom positions of one coordinate frame.
///
/// Positions are indexed by atom index in the `AtomSequence` the sites were
/// scanned from.
pub trait CoordinateLookup {
    /// Number of positions in the frame.
    fn len(&self) -> usize;

    /// Position of atom `index`, or `None` if the frame has no such row.
    fn position(&self, index: usize) -> Option<Point3<f64>>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CoordinateLookup for [Point3<f64>] {
    fn len(&self) -> usize {
        <[Point3<f64>]>::len(self)
    }

    fn position(&self, index: usize) -> Option<Point3<f64>> {
        self.get(index).copied()
    }
}

impl CoordinateLookup for Vec<Point3<f64>> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn position(&self, index: usize) -> Option<Point3<f64>> {
        self.as_slice().get(index).copied()
    }
}

fn fetch<L: CoordinateLookup + ?Sized>(
    positions: &L,
    index: usize,
) -> Result<Point3<f64>, PlotError> {
    positions
        .position(index)
        .ok_or_else(|| PlotError::IndexOutOfRange {
            index,
            len: positions.len(),
        })
}

/// Phi and psi of one site, in degrees.
///
/// # Errors
///
/// Returns [`PlotError::IndexOutOfRange`] for the first site index (in torsion
/// order) that the frame does not cover.
pub fn evaluate<L: CoordinateLookup + ?Sized>(
    site: &DihedralSite,
    positions: &L,
) -> Result<DihedralAngle, PlotError> {
    let prev_c = fetch(positions, site.prev_c)?;
    let n = fetch(positions, site.n)?;
    let ca = fetch(positions, site.ca)?;
    let c = fetch(positions, site.c)?;
    let next_n = fetch(positions, site.next_n)?;

    Ok(DihedralAngle {
        phi: dihedral_angle_degrees(&prev_c, &n, &ca, &c),
        psi: dihedral_angle_degrees(&n, &ca, &c, &next_n),
    })
}

/// Evaluates every site against one frame. Fails as a whole on the first bad site.
pub fn evaluate_all<L: CoordinateLookup + ?Sized>(
    sites: &[DihedralSite],
    positions: &L,
) -> Result<Vec<DihedralAngle>, PlotError> {
    sites.iter().map(|site| evaluate(site, positions)).collect()
}

/// Evaluates the same sites over every frame of a trajectory, frames in parallel.
///
/// The result holds one angle list per frame, in frame order.
#[instrument(skip_all, fields(sites = sites.len(), frames = frames.len()))]
pub fn evaluate_frames<F>(
    sites: &[DihedralSite],
    frames: &[F],
) -> Result<Vec<Vec<DihedralAngle>>, PlotError>
where
    F: CoordinateLookup + Sync,
{
    if frames.is_empty() {
        return Err(PlotError::NilInput { what: "frames" });
    }
    let angles = frames
        .par_iter()
        .map(|frame| evaluate_all(sites, frame))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("Evaluated dihedrals for all frames.");
    Ok(angles)
}
