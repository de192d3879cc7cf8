//! The open-slot heuristic: how many bonds an element can take part in.
//!
//! This is deliberately not real chemistry. It is a slot-counting rule good
//! enough for an educational workbench: hydrogen gets one slot, inert and
//! unclassified elements get none, and everything else follows the octet
//! complement of its valence-electron count.

use super::models::element::{Element, ElementKind};

/// Number of open bonding slots a freshly placed atom of `element` starts
/// with.
///
/// Rules, in priority order:
/// 1. Atomic number 1 is always one slot, whatever the catalog says about
///    its category or valence.
/// 2. Noble gases and unclassified elements never bond.
/// 3. Otherwise, a valence-electron count `v <= 4` gives `v` slots and a
///    higher count gives `8 - v`. A missing count behaves as 0.
pub fn bonding_slots(element: &Element) -> u8 {
    if element.atomic_number == 1 {
        return 1;
    }
    if matches!(element.kind, ElementKind::NobleGas | ElementKind::Unknown) {
        return 0;
    }
    let valence = element.valence_electrons.unwrap_or(0);
    if valence <= 4 {
        valence
    } else {
        8u8.saturating_sub(valence)
    }
}
