use super::ids::AtomId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Bond strength between two placed atoms.
///
/// Orders run 1 to 3; each unit consumes one open slot on both endpoints.
/// The integer coding is what the persisted session format stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum BondOrder {
    Single = 1,
    Double = 2,
    Triple = 3,
}

impl BondOrder {
    /// Escalates the order one step, or `None` at `Triple`.
    pub fn bump(self) -> Option<BondOrder> {
        match self {
            BondOrder::Single => Some(BondOrder::Double),
            BondOrder::Double => Some(BondOrder::Triple),
            BondOrder::Triple => None,
        }
    }
}

impl Default for BondOrder {
    fn default() -> Self {
        BondOrder::Single
    }
}

impl From<BondOrder> for u8 {
    fn from(order: BondOrder) -> u8 {
        order as u8
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid bond order '{0}', expected 1-3")]
pub struct InvalidBondOrder(pub String);

impl TryFrom<u8> for BondOrder {
    type Error = InvalidBondOrder;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(BondOrder::Single),
            2 => Ok(BondOrder::Double),
            3 => Ok(BondOrder::Triple),
            other => Err(InvalidBondOrder(other.to_string())),
        }
    }
}

impl FromStr for BondOrder {
    type Err = InvalidBondOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "s" | "single" => Ok(Self::Single),
            "2" | "d" | "double" => Ok(Self::Double),
            "3" | "t" | "triple" => Ok(Self::Triple),
            _ => Err(InvalidBondOrder(s.to_string())),
        }
    }
}

impl fmt::Display for BondOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Single => "Single",
                Self::Double => "Double",
                Self::Triple => "Triple",
            }
        )
    }
}

/// A bond between two placed atoms.
///
/// The pair is unordered: the workspace keeps at most one `Bond` per pair,
/// whichever way round it was first formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bond {
    pub a: AtomId,
    pub b: AtomId,
    pub order: BondOrder,
}

impl Bond {
    pub fn new(a: AtomId, b: AtomId, order: BondOrder) -> Self {
        Self { a, b, order }
    }

    pub fn contains(&self, atom_id: AtomId) -> bool {
        self.a == atom_id || self.b == atom_id
    }

    /// True when this bond joins exactly the given pair, either way round.
    pub fn links(&self, x: AtomId, y: AtomId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}
