/// The five backbone atoms spanning the phi and psi torsions of one residue.
///
/// Indices refer to positions in the `AtomSequence` the site was scanned from and,
/// equivalently, to rows of any coordinate frame for that sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DihedralSite {
    /// Carbonyl carbon of the preceding residue.
    pub prev_c: usize,
    /// Amide nitrogen.
    pub n: usize,
    /// Alpha carbon.
    pub ca: usize,
    /// Carbonyl carbon.
    pub c: usize,
    /// Amide nitrogen of the following residue.
    pub next_n: usize,
    /// Chain the site was resolved in.
    pub chain: char,
    /// Residue sequence number of the central residue.
    pub residue_id: isize,
    /// Residue name of the central residue (e.g., "GLY").
    pub residue_name: String,
}

impl DihedralSite {
    /// Indices in torsion order: prevC, N, CA, C, nextN.
    pub fn indices(&self) -> [usize; 5] {
        [self.prev_c, self.n, self.ca, self.c, self.next_n]
    }

    /// Largest atom index referenced by the site.
    pub fn max_index(&self) -> usize {
        self.indices().into_iter().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> DihedralSite {
        DihedralSite {
            prev_c: 2,
            n: 4,
            ca: 5,
            c: 6,
            next_n: 8,
            chain: 'A',
            residue_id: 2,
            residue_name: "ALA".to_string(),
        }
    }

    #[test]
    fn indices_are_in_torsion_order() {
        assert_eq!(site().indices(), [2, 4, 5, 6, 8]);
    }

    #[test]
    fn max_index_returns_largest_reference() {
        let mut s = site();
        assert_eq!(s.max_index(), 8);
        s.prev_c = 20;
        assert_eq!(s.max_index(), 20);
    }
}
