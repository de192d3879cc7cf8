//! The presentation-surface contract.
//!
//! The engine never draws; it replays its state through a [`WorkspaceView`]
//! after each batch of mutations. Any surface - a canvas, a terminal, a
//! test recorder - implements the four hooks and decides what they mean.

use super::Workspace;
use super::identify::Identification;
use crate::core::models::atom::PlacedAtom;
use crate::core::models::bond::BondOrder;
use nalgebra::Point2;

pub trait WorkspaceView {
    /// An atom sits at its position; its visual class is the element's
    /// category tag.
    fn draw_atom(&mut self, atom: &PlacedAtom);

    /// A bond segment between two resolved endpoint positions, styled by
    /// order.
    fn draw_bond(&mut self, from: Point2<f64>, to: Point2<f64>, order: BondOrder);

    /// The current molecule headline: name plus formula.
    fn show_molecule(&mut self, result: &Identification);

    /// The informational panel: name plus description.
    fn show_info(&mut self, result: &Identification);
}

impl Workspace {
    /// Replays the whole workspace through a view: every atom, every
    /// drawable bond, then the identification hooks. Bonds whose endpoints
    /// are no longer present (possible after a partial restore) are
    /// skipped.
    pub fn render_to(&self, view: &mut dyn WorkspaceView) {
        for atom in self.atoms() {
            view.draw_atom(atom);
        }
        for bond in self.bonds() {
            let (Some(a), Some(b)) = (self.atom(bond.a), self.atom(bond.b)) else {
                continue;
            };
            view.draw_bond(a.position, b.position, bond.order);
        }
        view.show_molecule(self.identification());
        view.show_info(self.identification());
    }
}
