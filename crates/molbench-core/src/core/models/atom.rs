use super::element::Element;
use super::ids::AtomId;
use nalgebra::Point2;

/// An atom instance placed on a workspace.
///
/// Carries a snapshot of its catalog [`Element`] so that identification and
/// rendering never need to go back to the catalog, the workspace-local
/// position, and the remaining bonding capacity. Open slots only ever
/// decrease; they are consumed one per unit of bond order formed.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedAtom {
    pub id: AtomId,
    pub element: Element,
    pub position: Point2<f64>,
    pub open_slots: u8,
}

impl PlacedAtom {
    pub fn new(id: AtomId, element: Element, position: Point2<f64>, open_slots: u8) -> Self {
        Self {
            id,
            element,
            position,
            open_slots,
        }
    }

    /// Element symbol shorthand, used when tallying formulas.
    pub fn symbol(&self) -> &str {
        &self.element.symbol
    }

    pub fn can_bond(&self) -> bool {
        self.open_slots > 0
    }
}
