/// Chain marker used by formats that leave the chain column blank.
///
/// Atoms carrying this marker are accepted by every chain filter.
pub const NO_CHAIN: char = ' ';

/// Represents one atom of the input topology.
///
/// Only the fields needed to recognize the peptide backbone are kept; coordinates
/// live in a separate per-frame buffer indexed by the atom's position in its
/// [`AtomSequence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    /// Chain identifier (e.g., 'A'), or [`NO_CHAIN`].
    pub chain: char,
    /// The name of the atom (e.g., "CA", "N", "O").
    pub name: String,
    /// Residue sequence number, monotonic within a chain.
    pub residue_id: isize,
    /// Name of the parent residue (e.g., "ALA", "GLY").
    pub residue_name: String,
}

impl Atom {
    pub fn new(chain: char, name: &str, residue_id: isize, residue_name: &str) -> Self {
        Self {
            chain,
            name: name.to_string(),
            residue_id,
            residue_name: residue_name.to_string(),
        }
    }

    pub fn has_chain(&self) -> bool {
        self.chain != NO_CHAIN
    }
}

/// An ordered sequence of atoms in file (deposition) order.
///
/// The sequence is the sole owner of atom data; everything derived from it refers
/// back by index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomSequence {
    atoms: Vec<Atom>,
}

impl AtomSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Atom> {
        self.atoms.get(index)
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn iter(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.iter()
    }
}

impl From<Vec<Atom>> for AtomSequence {
    fn from(atoms: Vec<Atom>) -> Self {
        Self { atoms }
    }
}

impl FromIterator<Atom> for AtomSequence {
    fn from_iter<I: IntoIterator<Item = Atom>>(iter: I) -> Self {
        Self {
            atoms: iter.into_iter().collect(),
        }
    }
}
