use crate::core::models::ids::AtomId;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WorkspaceError {
    #[error("No atom with id {0} on the workspace")]
    AtomNotFound(AtomId),
}
