use super::error::PlotError;
use crate::core::models::site::DihedralSite;
use serde::Deserialize;
use std::collections::HashSet;
use tracing::debug;

/// Keeps or drops dihedral sites by residue name (e.g., only GLY, or everything but PRO).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct ResidueFilter {
    /// Three-letter residue names to test against.
    pub names: HashSet<String>,
    /// Keep sites whose residue is in `names` when `true`, drop them when `false`.
    pub keep_if_present: bool,
}

/// A filtered site list together with the position of every original site in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredSites {
    pub sites: Vec<DihedralSite>,
    /// One entry per original site: its index in `sites`, or `None` if it was dropped.
    pub remap: Vec<Option<usize>>,
}

impl FilteredSites {
    /// Keeps every site in place.
    pub fn unfiltered(sites: &[DihedralSite]) -> Self {
        Self {
            sites: sites.to_vec(),
            remap: (0..sites.len()).map(Some).collect(),
        }
    }

    /// Translates indices into the original site list to indices into the filtered one.
    ///
    /// Tags pointing at dropped sites are discarded; relative order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::IndexOutOfRange`] if a tag points past the original list.
    pub fn remap_tags(&self, tags: &[usize]) -> Result<Vec<usize>, PlotError> {
        tags.iter()
            .filter_map(|&tag| match self.remap.get(tag) {
                Some(Some(new_index)) => Some(Ok(*new_index)),
                Some(None) => None,
                None => Some(Err(PlotError::IndexOutOfRange {
                    index: tag,
                    len: self.remap.len(),
                })),
            })
            .collect()
    }
}

impl ResidueFilter {
    pub fn new<I, S>(names: I, keep_if_present: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            keep_if_present,
        }
    }

    /// Filter keeping only the named residues.
    pub fn keep<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names, true)
    }

    /// Filter dropping the named residues.
    pub fn exclude<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names, false)
    }

    pub fn retains(&self, site: &DihedralSite) -> bool {
        self.names.contains(&site.residue_name) == self.keep_if_present
    }

    pub fn apply(&self, sites: &[DihedralSite]) -> FilteredSites {
        let mut kept = Vec::new();
        let mut remap = Vec::with_capacity(sites.len());
        for site in sites {
            if self.retains(site) {
                remap.push(Some(kept.len()));
                kept.push(site.clone());
            } else {
                remap.push(None);
            }
        }
        debug!(
            kept = kept.len(),
            dropped = sites.len() - kept.len(),
            "Residue filter applied."
        );
        FilteredSites { sites: kept, remap }
    }

    /// Filters every series and carries its tag list along.
    ///
    /// `tags`, when given, must hold one (possibly empty) tag list per series, with
    /// indices into that series' unfiltered sites.
    ///
    /// # Errors
    ///
    /// Returns [`PlotError::LengthMismatch`] if there are fewer tag lists than series,
    /// or [`PlotError::IndexOutOfRange`] if a tag points past its series.
    pub fn apply_series(
        &self,
        series: &[Vec<DihedralSite>],
        tags: Option<&[Vec<usize>]>,
    ) -> Result<Vec<(FilteredSites, Vec<usize>)>, PlotError> {
        if let Some(tags) = tags {
            if tags.len() < series.len() {
                return Err(PlotError::LengthMismatch {
                    what: "tag lists",
                    expected: series.len(),
                    found: tags.len(),
                });
            }
        }
        series
            .iter()
            .enumerate()
            .map(|(i, sites)| {
                let filtered = self.apply(sites);
                let remapped = match tags {
                    Some(tags) => filtered.remap_tags(&tags[i])?,
                    None => Vec::new(),
                };
                Ok((filtered, remapped))
            })
            .collect()
    }
}

/// Filters `sites` by residue-name membership in `names`.
pub fn filter_by_residue_name(
    sites: &[DihedralSite],
    names: &HashSet<String>,
    keep_if_present: bool,
) -> FilteredSites {
    ResidueFilter {
        names: names.clone(),
        keep_if_present,
    }
    .apply(sites)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(i: usize, name: &str) -> DihedralSite {
        DihedralSite {
            prev_c: 4 * i,
            n: 4 * i + 1,
            ca: 4 * i + 2,
            c: 4 * i + 3,
            next_n: 4 * i + 5,
            chain: 'A',
            residue_id: i as isize + 2,
            residue_name: name.to_string(),
        }
    }

    fn sample() -> Vec<DihedralSite> {
        ["ALA", "GLY", "PRO", "GLY", "SER", "GLY"]
            .iter()
            .enumerate()
            .map(|(i, n)| site(i, n))
            .collect()
    }

    fn present_entries(remap: &[Option<usize>]) -> Vec<usize> {
        remap.iter().flatten().copied().collect()
    }

    #[test]
    fn keep_retains_only_named_residues_in_order() {
        let filtered = ResidueFilter::keep(["GLY"]).apply(&sample());
        let ids: Vec<isize> = filtered.sites.iter().map(|s| s.residue_id).collect();
        assert_eq!(ids, vec![3, 5, 7]);
        assert_eq!(
            filtered.remap,
            vec![None, Some(0), None, Some(1), None, Some(2)]
        );
    }

    #[test]
    fn exclude_drops_named_residues() {
        let filtered = ResidueFilter::exclude(["GLY", "PRO"]).apply(&sample());
        let names: Vec<&str> = filtered
            .sites
            .iter()
            .map(|s| s.residue_name.as_str())
            .collect();
        assert_eq!(names, vec!["ALA", "SER"]);
        assert_eq!(filtered.remap.len(), 6);
    }

    #[test]
    fn complementary_filters_partition_the_input() {
        let sites = sample();
        let names: HashSet<String> = ["GLY".to_string(), "SER".to_string()].into();
        let kept = filter_by_residue_name(&sites, &names, true);
        let dropped = filter_by_residue_name(&sites, &names, false);

        assert_eq!(kept.sites.len() + dropped.sites.len(), sites.len());
        for i in 0..sites.len() {
            let in_kept = kept.remap[i].is_some();
            let in_dropped = dropped.remap[i].is_some();
            assert!(in_kept ^ in_dropped, "site {i} must be in exactly one output");
        }

        for remap in [&kept.remap, &dropped.remap] {
            let present = present_entries(remap);
            let expected: Vec<usize> = (0..present.len()).collect();
            assert_eq!(present, expected);
        }
    }

    #[test]
    fn filter_on_empty_list_is_empty() {
        let filtered = ResidueFilter::keep(["GLY"]).apply(&[]);
        assert!(filtered.sites.is_empty());
        assert!(filtered.remap.is_empty());
    }

    #[test]
    fn remap_tags_translates_and_drops_excluded() {
        let filtered = ResidueFilter::keep(["GLY"]).apply(&sample());
        assert_eq!(filtered.remap_tags(&[5, 0, 1]).unwrap(), vec![2, 0]);
    }

    #[test]
    fn unfiltered_keeps_every_site_and_tag() {
        let filtered = FilteredSites::unfiltered(&sample());
        assert_eq!(filtered.sites, sample());
        assert_eq!(filtered.remap_tags(&[5, 0]).unwrap(), vec![5, 0]);
        assert!(filtered.remap_tags(&[6]).is_err());
    }

    #[test]
    fn remap_tags_rejects_indices_past_the_original_list() {
        let filtered = ResidueFilter::keep(["GLY"]).apply(&sample());
        assert_eq!(
            filtered.remap_tags(&[1, 6]),
            Err(PlotError::IndexOutOfRange { index: 6, len: 6 })
        );
    }

    #[test]
    fn apply_series_requires_a_tag_list_per_series() {
        let series = vec![sample(), sample()];
        let tags = vec![vec![1]];
        let result = ResidueFilter::keep(["GLY"]).apply_series(&series, Some(tags.as_slice()));
        assert_eq!(
            result,
            Err(PlotError::LengthMismatch {
                what: "tag lists",
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn apply_series_filters_each_series_and_remaps_its_tags() {
        let series = vec![sample(), sample()[..3].to_vec()];
        let tags = vec![vec![3], vec![0, 1]];
        let result = ResidueFilter::keep(["GLY"])
            .apply_series(&series, Some(tags.as_slice()))
            .unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].0.sites.len(), 3);
        assert_eq!(result[0].1, vec![1]);
        assert_eq!(result[1].0.sites.len(), 1);
        assert_eq!(result[1].1, vec![0]);
    }

    #[test]
    fn apply_series_without_tags_yields_empty_tag_lists() {
        let series = vec![sample()];
        let result = ResidueFilter::exclude(["GLY"])
            .apply_series(&series, None)
            .unwrap();
        assert!(result[0].1.is_empty());
    }
}
