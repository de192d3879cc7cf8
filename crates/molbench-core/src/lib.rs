//! # Molbench Core Library
//!
//! The engine behind an educational molecule workbench: elements are placed
//! on a workspace, bonds form between nearby atoms with open valence
//! capacity, and the resulting composition is identified against a table of
//! known compounds.
//!
//! ## Architectural Philosophy
//!
//! Two layers with a strict dependency direction:
//!
//! - **[`core`]: The Foundation.** Stateless reference data (the element
//!   catalog and compound registry), pure chemistry rules (valence slots,
//!   canonical formulas), and the data model.
//!
//! - **[`workspace`]: The Session.** The stateful layer - one `Workspace`
//!   per building session, owning atoms, bonds, the id allocator, and the
//!   drag state. Every structural change re-derives the identification, and
//!   the whole state can replay through a `WorkspaceView` or round-trip
//!   through a saved session file.
//!
//! This is deliberately not a physically accurate chemistry engine: no
//! energy minimization, no geometry, no kinetics. The bonding rule is a
//! valence-slot counting heuristic and identification is a flat
//! symbol-count lookup.

pub mod core;
pub mod workspace;
