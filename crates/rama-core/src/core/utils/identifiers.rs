use phf::{Map, phf_map};

/// Backbone atom roles the scanner tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackboneAtom {
    /// Amide nitrogen.
    N,
    /// Alpha carbon.
    Ca,
    /// Carbonyl carbon.
    C,
}

static BACKBONE_ATOMS: Map<&'static str, BackboneAtom> = phf_map! {
    "N" => BackboneAtom::N,
    "CA" => BackboneAtom::Ca,
    "C" => BackboneAtom::C,
};

/// Classifies an atom name as one of the three torsion-defining backbone atoms.
///
/// Surrounding whitespace is ignored; matching is case-sensitive, so the calcium
/// ion name "Ca" is not confused with the alpha carbon.
pub fn backbone_atom(atom_name: &str) -> Option<BackboneAtom> {
    BACKBONE_ATOMS.get(atom_name.trim()).copied()
}
