use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an atom placed on a workspace.
///
/// Ids are allocated monotonically by the owning [`Workspace`](crate::workspace::Workspace)
/// and are unique within a session. They round-trip through the persisted
/// session format as plain integers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct AtomId(pub u32);

impl AtomId {
    pub fn next(self) -> AtomId {
        AtomId(self.0 + 1)
    }
}

impl fmt::Display for AtomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
