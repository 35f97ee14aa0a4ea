use super::config::{ChainFilter, ResidueSelector};
use super::error::PlotError;
use crate::core::models::atom::AtomSequence;
use crate::core::models::site::DihedralSite;
use crate::core::utils::identifiers::{BackboneAtom, backbone_atom};
use tracing::{debug, instrument, trace};

/// An atom bound to one of the scan slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    index: usize,
    residue_id: isize,
}

/// The five-atom window sliding along one chain segment.
///
/// `prev_c` anchors the window: nothing else is accepted until it is filled, and
/// every later atom must belong to a residue after the one `prev_c` came from.
#[derive(Debug, Default)]
struct ScanWindow {
    prev_c: Option<Slot>,
    n: Option<Slot>,
    ca: Option<Slot>,
    c: Option<Slot>,
    next_n: Option<Slot>,
}

impl ScanWindow {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn offer(&mut self, role: BackboneAtom, slot: Slot) {
        let Some(prev_c) = self.prev_c else {
            if role == BackboneAtom::C {
                self.prev_c = Some(slot);
            }
            return;
        };
        if slot.residue_id <= prev_c.residue_id {
            return;
        }
        match role {
            BackboneAtom::C => self.c = Some(slot),
            BackboneAtom::Ca => self.ca = Some(slot),
            BackboneAtom::N => {
                if self.n.is_none() {
                    self.n = Some(slot);
                } else if self
                    .ca
                    .is_some_and(|ca| slot.residue_id > ca.residue_id)
                {
                    self.next_n = Some(slot);
                }
            }
        }
    }

    fn complete(&self) -> Option<[Slot; 5]> {
        Some([self.prev_c?, self.n?, self.ca?, self.c?, self.next_n?])
    }

    /// Shares the boundary atoms with the next residue.
    fn slide(&mut self) {
        self.prev_c = self.c.take();
        self.n = self.next_n.take();
        self.ca = None;
    }
}

fn check_numbering([prev_c, n, ca, c, next_n]: &[Slot; 5]) -> Result<(), PlotError> {
    let r = n.residue_id;
    if prev_c.residue_id == r - 1
        && ca.residue_id == r
        && c.residue_id == r
        && next_n.residue_id == r + 1
    {
        Ok(())
    } else {
        Err(PlotError::BackboneInconsistency {
            residue_id: r,
            n_index: n.index,
            prev_c: prev_c.residue_id,
            ca: ca.residue_id,
            c: c.residue_id,
            next_n: next_n.residue_id,
        })
    }
}

/// Resolves phi/psi atom quintuples from an ordered atom stream in a single pass.
#[derive(Debug, Clone, Copy)]
pub struct BackboneScanner<'a> {
    chains: &'a ChainFilter,
    residues: &'a ResidueSelector,
}

impl<'a> BackboneScanner<'a> {
    pub fn new(chains: &'a ChainFilter, residues: &'a ResidueSelector) -> Self {
        Self { chains, residues }
    }

    /// Scans `atoms` and returns one site per selected residue, in sequence order.
    ///
    /// A change of chain identifier between consecutive accepted atoms is a chain
    /// break: the window restarts, so the first and last residue of every segment
    /// produce no site.
    ///
    /// # Errors
    ///
    /// - [`PlotError::NilInput`] if `atoms` is empty.
    /// - [`PlotError::BackboneInconsistency`] if a completed window does not span
    ///   residues `r-1, r, r, r, r+1`. No sites are returned in that case.
    #[instrument(skip_all, fields(atoms = atoms.len()))]
    pub fn scan(&self, atoms: &AtomSequence) -> Result<Vec<DihedralSite>, PlotError> {
        if atoms.is_empty() {
            return Err(PlotError::NilInput {
                what: "atom sequence",
            });
        }

        let mut sites = Vec::new();
        let mut window = ScanWindow::default();
        let mut current_chain: Option<char> = None;

        for (index, atom) in atoms.iter().enumerate() {
            if !self.chains.accepts(atom.chain) {
                continue;
            }
            if current_chain != Some(atom.chain) {
                trace!(chain = %atom.chain, index, "Chain segment starts.");
                current_chain = Some(atom.chain);
                window.reset();
            }
            let Some(role) = backbone_atom(&atom.name) else {
                continue;
            };

            window.offer(
                role,
                Slot {
                    index,
                    residue_id: atom.residue_id,
                },
            );

            let Some(slots) = window.complete() else {
                continue;
            };
            check_numbering(&slots)?;

            let [prev_c, n, ca, c, next_n] = slots;
            if self.residues.selects(n.residue_id) {
                sites.push(DihedralSite {
                    prev_c: prev_c.index,
                    n: n.index,
                    ca: ca.index,
                    c: c.index,
                    next_n: next_n.index,
                    chain: atom.chain,
                    residue_id: n.residue_id,
                    residue_name: atoms.atoms()[ca.index].residue_name.clone(),
                });
            }
            window.slide();
        }

        debug!(sites = sites.len(), "Backbone scan complete.");
        Ok(sites)
    }
}

/// Convenience wrapper around [`BackboneScanner::scan`].
pub fn scan(
    atoms: &AtomSequence,
    chains: &ChainFilter,
    residues: &ResidueSelector,
) -> Result<Vec<DihedralSite>, PlotError> {
    BackboneScanner::new(chains, residues).scan(atoms)
}
