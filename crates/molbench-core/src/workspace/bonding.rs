//! Proximity bonding: the one rule that turns a drag release into a bond.

use super::Workspace;
use super::error::WorkspaceError;
use crate::core::models::bond::{Bond, BondOrder};
use crate::core::models::ids::AtomId;
use nalgebra::distance;

/// Two atoms closer than this (workspace units) are bonding candidates.
pub const BOND_DISTANCE: f64 = 80.0;

/// A bond formed or escalated by a proximity evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BondEvent {
    pub a: AtomId,
    pub b: AtomId,
    /// The order the bond ended up at.
    pub order: BondOrder,
}

impl BondEvent {
    pub fn links(&self, x: AtomId, y: AtomId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}

impl Workspace {
    /// Evaluates proximity bonding for the atom that just stopped moving.
    ///
    /// Scans every other atom in placement order and acts on the first
    /// candidate within [`BOND_DISTANCE`] while both sides still have open
    /// slots: an existing bond below triple is escalated, no bond means a
    /// new single bond, and a pair already at triple is skipped so the scan
    /// continues. A successful change costs each endpoint one open slot and
    /// ends the scan - one bond change per evaluation, which keeps each
    /// drag a single deliberate bonding action.
    pub fn evaluate_proximity(
        &mut self,
        moved_id: AtomId,
    ) -> Result<Option<BondEvent>, WorkspaceError> {
        let moved_index = self
            .index_of(moved_id)
            .ok_or(WorkspaceError::AtomNotFound(moved_id))?;

        for other_index in 0..self.atoms.len() {
            if other_index == moved_index {
                continue;
            }
            let moved = &self.atoms[moved_index];
            let other = &self.atoms[other_index];
            if !(distance(&moved.position, &other.position) < BOND_DISTANCE
                && moved.can_bond()
                && other.can_bond())
            {
                continue;
            }

            let (a, b) = (moved.id, other.id);
            let order = match self.bonds.iter_mut().find(|bond| bond.links(a, b)) {
                Some(bond) => match bond.order.bump() {
                    Some(escalated) => {
                        bond.order = escalated;
                        escalated
                    }
                    // Pair already at triple; this candidate is exhausted.
                    None => continue,
                },
                None => {
                    self.bonds.push(Bond::new(a, b, BondOrder::Single));
                    BondOrder::Single
                }
            };

            self.atoms[moved_index].open_slots -= 1;
            self.atoms[other_index].open_slots -= 1;
            self.refresh_identification();
            return Ok(Some(BondEvent { a, b, order }));
        }

        Ok(None)
    }
}
