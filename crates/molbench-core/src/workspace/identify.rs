use crate::core::compounds::CompoundRegistry;
use crate::core::formula;
use crate::core::models::atom::PlacedAtom;

const IDLE_NAME: &str = "Chemistry workbench";
const IDLE_DESCRIPTION: &str = "Place elements on the bench to form a compound.";
const UNKNOWN_NAME: &str = "Unknown compound";
const UNKNOWN_DESCRIPTION: &str = "No information recorded for this formula.";

/// Result of identifying the current contents of a workspace.
///
/// A lookup miss is not an error: an unrecognized formula is a perfectly
/// valid outcome with its own generic name and description. The idle state
/// stands in for an empty workspace so that a view always has something to
/// show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Identification {
    #[default]
    Idle,
    Known {
        formula: String,
        name: String,
        description: String,
    },
    Unknown {
        formula: String,
    },
}

impl Identification {
    pub fn display_name(&self) -> &str {
        match self {
            Identification::Idle => IDLE_NAME,
            Identification::Known { name, .. } => name,
            Identification::Unknown { .. } => UNKNOWN_NAME,
        }
    }

    /// The computed formula; `None` while the workspace is empty.
    pub fn formula(&self) -> Option<&str> {
        match self {
            Identification::Idle => None,
            Identification::Known { formula, .. } | Identification::Unknown { formula } => {
                Some(formula)
            }
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Identification::Idle => IDLE_DESCRIPTION,
            Identification::Known { description, .. } => description,
            Identification::Unknown { .. } => UNKNOWN_DESCRIPTION,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Identification::Idle)
    }
}

/// Identifies the molecule formed by `atoms` against `registry`.
///
/// Pure given the atom multiset and the registry: tally symbols, render the
/// canonical formula, resolve it. Bonds play no part; identification is a
/// composition lookup, not a structure match.
pub fn identify(atoms: &[PlacedAtom], registry: &CompoundRegistry) -> Identification {
    if atoms.is_empty() {
        return Identification::Idle;
    }

    let formula = formula::formula(atoms.iter().map(|a| a.symbol()));
    match registry.get(&formula) {
        Some(entry) => Identification::Known {
            formula,
            name: entry.name.clone(),
            description: entry.description.clone(),
        },
        None => Identification::Unknown { formula },
    }
}
