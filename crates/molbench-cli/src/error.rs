use molbench::core::catalog::CatalogError;
use molbench::core::compounds::CompoundsError;
use molbench::workspace::error::WorkspaceError;
use molbench::workspace::session::SessionError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Element catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Compound registry error: {0}")]
    Compounds(#[from] CompoundsError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    Argument(String),
}
