use super::error::PlotError;
use super::evaluator::{CoordinateLookup, evaluate_all};
use crate::core::models::point::{DihedralAngle, TaggedPoint};
use crate::core::models::site::DihedralSite;
use crate::core::style::color::color_for;
use crate::core::style::shape::{Shape, ShapeTagger};
use rayon::prelude::*;
use tracing::{debug, instrument, warn};

/// How colors are spread over the assembled points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    /// Every point is one step of the ramp within its series, first to last residue.
    PerPoint,
    /// Every series gets one color from a ramp over the series.
    PerSeries,
}

/// Turns dihedral sites into styled, renderer-ready points.
#[derive(Debug, Clone, Copy)]
pub struct PlotAssembler {
    scheme: ColorScheme,
}

impl PlotAssembler {
    /// Assembler for one flat series colored along the chain.
    pub fn single() -> Self {
        Self {
            scheme: ColorScheme::PerPoint,
        }
    }

    /// Assembler for several named sub-series sharing one angle space.
    pub fn parts() -> Self {
        Self {
            scheme: ColorScheme::PerSeries,
        }
    }

    pub fn scheme(&self) -> ColorScheme {
        self.scheme
    }

    /// Evaluates, colors and tags every series.
    ///
    /// `tags`, when given, holds one list per series of point indices to highlight.
    /// Every series owns its tag counter; a point asking for a fifth highlight is
    /// drawn untagged and the rest of the series is unaffected. Series are processed
    /// in parallel and returned in input order.
    ///
    /// # Errors
    ///
    /// - [`PlotError::NilInput`] if `series` is empty.
    /// - [`PlotError::LengthMismatch`] if fewer tag lists than series are supplied.
    /// - [`PlotError::IndexOutOfRange`] if a site references an atom outside `coords`.
    #[instrument(skip_all, fields(series = series.len(), scheme = ?self.scheme))]
    pub fn assemble<L>(
        &self,
        series: &[Vec<DihedralSite>],
        coords: &L,
        tags: Option<&[Vec<usize>]>,
    ) -> Result<Vec<Vec<TaggedPoint>>, PlotError>
    where
        L: CoordinateLookup + Sync + ?Sized,
    {
        if series.is_empty() {
            return Err(PlotError::NilInput { what: "series" });
        }
        if let Some(tags) = tags {
            if tags.len() < series.len() {
                return Err(PlotError::LengthMismatch {
                    what: "tag lists",
                    expected: series.len(),
                    found: tags.len(),
                });
            }
        }

        let total_series = series.len();
        let assembled = series
            .par_iter()
            .enumerate()
            .map(|(k, sites)| {
                let angles = evaluate_all(sites, coords)?;
                let series_tags = tags.map(|t| t[k].as_slice()).unwrap_or(&[]);
                Ok(self.style_series(k, total_series, sites, &angles, series_tags))
            })
            .collect::<Result<Vec<_>, PlotError>>()?;

        debug!(
            points = assembled.iter().map(Vec::len).sum::<usize>(),
            "Plot assembled."
        );
        Ok(assembled)
    }

    /// Single-series convenience wrapper around [`PlotAssembler::assemble`].
    pub fn assemble_one<L>(
        &self,
        sites: &[DihedralSite],
        coords: &L,
        tags: &[usize],
    ) -> Result<Vec<TaggedPoint>, PlotError>
    where
        L: CoordinateLookup + Sync + ?Sized,
    {
        let series = [sites.to_vec()];
        let tags = [tags.to_vec()];
        let mut assembled = self.assemble(&series, coords, Some(&tags[..]))?;
        Ok(assembled.pop().unwrap_or_default())
    }

    fn style_series(
        &self,
        series_index: usize,
        total_series: usize,
        sites: &[DihedralSite],
        angles: &[DihedralAngle],
        tags: &[usize],
    ) -> Vec<TaggedPoint> {
        let mut tagger = ShapeTagger::new();
        sites
            .iter()
            .zip(angles)
            .enumerate()
            .map(|(i, (site, angle))| {
                let color = match self.scheme {
                    ColorScheme::PerPoint => color_for(i, sites.len()),
                    ColorScheme::PerSeries => color_for(series_index, total_series),
                };
                let (tag_rank, shape) = if tags.contains(&i) {
                    match tagger.next_tag() {
                        Ok((rank, shape)) => (Some(rank), shape),
                        Err(e) => {
                            warn!(
                                series = series_index,
                                point = i,
                                residue = site.residue_id,
                                "{e}; drawing the point untagged."
                            );
                            (None, Shape::default())
                        }
                    }
                } else {
                    (None, Shape::default())
                };
                TaggedPoint {
                    angle: *angle,
                    tag_rank,
                    color,
                    shape,
                    residue_id: site.residue_id,
                    residue_name: site.residue_name.clone(),
                }
            })
            .collect()
    }
}
