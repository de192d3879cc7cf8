//! # Workspace Module
//!
//! The stateful layer: one [`Workspace`] per session, owned by the caller
//! and passed by reference into every operation. It holds the placed atoms
//! (in insertion order, which is also the proximity scan order), the bond
//! list, the id allocator, the single-slot active-drag state, and the
//! compound registry it identifies against.
//!
//! Every structural change ends by re-deriving the cached
//! [`Identification`], so the derived view state can never go stale. All
//! operations run to completion on the calling thread; a multi-session host
//! must give each workspace a single owner.
//!
//! - [`bonding`] - the proximity bonding evaluation
//! - [`identify`] - formula identification and its result type
//! - [`session`] - persisted-session snapshot and restore
//! - [`view`] - the presentation-surface contract

pub mod bonding;
pub mod error;
pub mod identify;
pub mod session;
pub mod view;

use crate::core::catalog::ElementCatalog;
use crate::core::compounds::CompoundRegistry;
use crate::core::models::atom::PlacedAtom;
use crate::core::models::bond::Bond;
use crate::core::models::element::Element;
use crate::core::models::ids::AtomId;
use crate::core::valence::bonding_slots;
use nalgebra::Point2;

use bonding::BondEvent;
use error::WorkspaceError;
use identify::{Identification, identify};

/// A molecule-building session.
#[derive(Debug, Clone)]
pub struct Workspace {
    atoms: Vec<PlacedAtom>,
    bonds: Vec<Bond>,
    next_id: AtomId,
    active_drag: Option<AtomId>,
    compounds: CompoundRegistry,
    identification: Identification,
}

impl Workspace {
    /// Creates an empty workspace that identifies against `compounds`.
    pub fn new(compounds: CompoundRegistry) -> Self {
        Self {
            atoms: Vec::new(),
            bonds: Vec::new(),
            next_id: AtomId(0),
            active_drag: None,
            compounds,
            identification: Identification::Idle,
        }
    }

    /// Atoms in placement order. This order is the bonding scan order.
    pub fn atoms(&self) -> &[PlacedAtom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn atom(&self, id: AtomId) -> Option<&PlacedAtom> {
        self.atoms.iter().find(|a| a.id == id)
    }

    /// The identification derived from the current atom multiset.
    pub fn identification(&self) -> &Identification {
        &self.identification
    }

    pub fn active_drag(&self) -> Option<AtomId> {
        self.active_drag
    }

    /// Places a new atom of `element` at `position`.
    ///
    /// Allocates a fresh id, computes the initial open slots from the
    /// valence rule, and refreshes the identification. Placement never
    /// forms bonds by itself; that takes a drag release.
    pub fn place(&mut self, element: &Element, position: Point2<f64>) -> AtomId {
        let id = self.next_id;
        self.next_id = self.next_id.next();
        let slots = bonding_slots(element);
        self.atoms
            .push(PlacedAtom::new(id, element.clone(), position, slots));
        self.refresh_identification();
        id
    }

    /// Resolves a drag payload (an atomic number) against `catalog` and
    /// places the element. An atomic number the catalog does not know is
    /// silently ignored: no atom is created and `None` is returned.
    pub fn drop_payload(
        &mut self,
        catalog: &ElementCatalog,
        atomic_number: u32,
        position: Point2<f64>,
    ) -> Option<AtomId> {
        catalog
            .by_number(atomic_number)
            .cloned()
            .map(|element| self.place(&element, position))
    }

    /// Updates an atom's position. Never triggers bonding; the proximity
    /// evaluation is a separate step taken on drag release.
    pub fn move_atom(&mut self, id: AtomId, position: Point2<f64>) -> Result<(), WorkspaceError> {
        let atom = self
            .atoms
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(WorkspaceError::AtomNotFound(id))?;
        atom.position = position;
        Ok(())
    }

    /// Starts tracking a pointer drag of `id`. A drag already in progress
    /// is superseded.
    pub fn begin_drag(&mut self, id: AtomId) -> Result<(), WorkspaceError> {
        if self.atom(id).is_none() {
            return Err(WorkspaceError::AtomNotFound(id));
        }
        self.active_drag = Some(id);
        Ok(())
    }

    /// Moves the actively dragged atom. A no-op when nothing is being
    /// dragged, matching a pointer-move with no pressed atom.
    pub fn drag_to(&mut self, position: Point2<f64>) {
        if let Some(id) = self.active_drag {
            // The atom cannot have vanished: atoms are only removed by
            // clear(), which resets the drag slot.
            let _ = self.move_atom(id, position);
        }
    }

    /// Finishes the active drag: runs exactly one proximity evaluation for
    /// the released atom, then clears the drag slot. Returns the bond event
    /// if the release formed or escalated a bond.
    pub fn release_drag(&mut self) -> Option<BondEvent> {
        let id = self.active_drag.take()?;
        self.evaluate_proximity(id).unwrap_or(None)
    }

    /// Abandons the active drag without evaluating bonds (pointer left the
    /// workspace).
    pub fn cancel_drag(&mut self) {
        self.active_drag = None;
    }

    /// Empties the workspace: atoms, bonds, drag state, and the id
    /// allocator all reset, and the identification returns to idle.
    pub fn clear(&mut self) {
        self.atoms.clear();
        self.bonds.clear();
        self.next_id = AtomId(0);
        self.active_drag = None;
        self.refresh_identification();
    }

    pub(crate) fn index_of(&self, id: AtomId) -> Option<usize> {
        self.atoms.iter().position(|a| a.id == id)
    }

    /// Re-derives the cached identification. Called at the end of every
    /// structural change so the derivation cannot be forgotten.
    pub(crate) fn refresh_identification(&mut self) {
        self.identification = identify(&self.atoms, &self.compounds);
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;
    use crate::core::catalog::ElementCatalog;

    fn workspace() -> Workspace {
        Workspace::new(registry())
    }

    mod placement {
        use super::*;

        #[test]
        fn place_allocates_sequential_ids() {
            let mut ws = workspace();
            let first = ws.place(&hydrogen(), Point2::new(0.0, 0.0));
            let second = ws.place(&hydrogen(), Point2::new(200.0, 0.0));
            assert_eq!(first, AtomId(0));
            assert_eq!(second, AtomId(1));
        }

        #[test]
        fn place_assigns_valence_slots() {
            let mut ws = workspace();
            let h = ws.place(&hydrogen(), Point2::origin());
            let o = ws.place(&oxygen(), Point2::new(500.0, 0.0));
            let he = ws.place(&helium(), Point2::new(900.0, 0.0));
            assert_eq!(ws.atom(h).unwrap().open_slots, 1);
            assert_eq!(ws.atom(o).unwrap().open_slots, 2);
            assert_eq!(ws.atom(he).unwrap().open_slots, 0);
        }

        #[test]
        fn place_refreshes_identification() {
            let mut ws = workspace();
            assert!(ws.identification().is_idle());
            ws.place(&hydrogen(), Point2::origin());
            assert_eq!(ws.identification().formula(), Some("H"));
        }

        #[test]
        fn drop_payload_ignores_unknown_atomic_number() {
            let mut ws = workspace();
            let catalog = ElementCatalog::default();
            assert_eq!(ws.drop_payload(&catalog, 42, Point2::origin()), None);
            assert!(ws.atoms().is_empty());
            assert!(ws.identification().is_idle());
        }
    }

    mod movement_and_drag {
        use super::*;

        #[test]
        fn move_atom_updates_position_without_bonding() {
            let mut ws = workspace();
            let a = ws.place(&hydrogen(), Point2::new(0.0, 0.0));
            ws.place(&hydrogen(), Point2::new(300.0, 0.0));

            ws.move_atom(a, Point2::new(290.0, 0.0)).unwrap();
            assert_eq!(ws.atom(a).unwrap().position, Point2::new(290.0, 0.0));
            assert!(ws.bonds().is_empty(), "move alone must not bond");
        }

        #[test]
        fn move_atom_fails_for_unknown_id() {
            let mut ws = workspace();
            assert_eq!(
                ws.move_atom(AtomId(9), Point2::origin()),
                Err(WorkspaceError::AtomNotFound(AtomId(9)))
            );
        }

        #[test]
        fn drag_release_forms_bond_and_clears_slot() {
            let mut ws = workspace();
            let a = ws.place(&hydrogen(), Point2::new(0.0, 0.0));
            ws.place(&hydrogen(), Point2::new(300.0, 0.0));

            ws.begin_drag(a).unwrap();
            ws.drag_to(Point2::new(250.0, 0.0));
            let event = ws.release_drag().unwrap();
            assert!(event.links(a, AtomId(1)));
            assert_eq!(ws.active_drag(), None);
            assert_eq!(ws.bonds().len(), 1);
        }

        #[test]
        fn release_without_active_drag_is_a_no_op() {
            let mut ws = workspace();
            ws.place(&hydrogen(), Point2::origin());
            assert!(ws.release_drag().is_none());
        }

        #[test]
        fn cancel_drag_skips_the_evaluation() {
            let mut ws = workspace();
            let a = ws.place(&hydrogen(), Point2::new(0.0, 0.0));
            ws.place(&hydrogen(), Point2::new(30.0, 0.0));

            ws.begin_drag(a).unwrap();
            ws.cancel_drag();
            assert!(ws.release_drag().is_none());
            assert!(ws.bonds().is_empty());
        }

        #[test]
        fn drag_to_without_active_drag_does_nothing() {
            let mut ws = workspace();
            let a = ws.place(&hydrogen(), Point2::new(5.0, 5.0));
            ws.drag_to(Point2::new(99.0, 99.0));
            assert_eq!(ws.atom(a).unwrap().position, Point2::new(5.0, 5.0));
        }

        #[test]
        fn begin_drag_supersedes_previous_drag() {
            let mut ws = workspace();
            let a = ws.place(&hydrogen(), Point2::new(0.0, 0.0));
            let b = ws.place(&hydrogen(), Point2::new(300.0, 0.0));
            ws.begin_drag(a).unwrap();
            ws.begin_drag(b).unwrap();
            assert_eq!(ws.active_drag(), Some(b));
        }
    }

    mod clearing {
        use super::*;

        #[test]
        fn clear_resets_everything_to_idle() {
            let mut ws = workspace();
            let a = ws.place(&hydrogen(), Point2::new(0.0, 0.0));
            ws.place(&hydrogen(), Point2::new(10.0, 0.0));
            ws.begin_drag(a).unwrap();
            ws.release_drag();
            assert!(!ws.bonds().is_empty());

            ws.clear();
            assert!(ws.atoms().is_empty());
            assert!(ws.bonds().is_empty());
            assert!(ws.identification().is_idle());
            assert_eq!(ws.active_drag(), None);

            // The allocator restarts from zero after a full reset.
            let id = ws.place(&hydrogen(), Point2::origin());
            assert_eq!(id, AtomId(0));
        }
    }
}
