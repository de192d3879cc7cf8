//! Saving and restoring a workbench session.
//!
//! The persisted document stores the atom list (id, atomic number, open
//! slots, position), the bond list, and the id allocator. Slot counts are
//! trusted on restore: a half-bonded atom comes back half-bonded without
//! re-running the valence rule.

use super::Workspace;
use crate::core::catalog::ElementCatalog;
use crate::core::models::atom::PlacedAtom;
use crate::core::models::bond::Bond;
use crate::core::models::ids::AtomId;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SavedAtom {
    pub id: AtomId,
    pub atomic_number: u32,
    pub open_slots: u8,
    pub x: f64,
    pub y: f64,
}

/// A serializable snapshot of one workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSession {
    pub next_id: AtomId,
    #[serde(default)]
    pub atoms: Vec<SavedAtom>,
    #[serde(default)]
    pub bonds: Vec<Bond>,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("Session parsing error for '{path}': {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("Session serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl SavedSession {
    /// Reads a saved session. A missing file is not an error - it is the
    /// "nothing saved yet" condition, reported as `Ok(None)`.
    pub fn load(path: &Path) -> Result<Option<Self>, SessionError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SessionError::Io {
                    path: path.to_string_lossy().to_string(),
                    source: e,
                });
            }
        };
        let session = toml::from_str(&content).map_err(|e| SessionError::Parse {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        Ok(Some(session))
    }

    pub fn save(&self, path: &Path) -> Result<(), SessionError> {
        let content = toml::to_string(self)?;
        std::fs::write(path, content).map_err(|e| SessionError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })
    }
}

impl Workspace {
    /// Snapshots the current atoms, bonds, and allocator state.
    pub fn snapshot(&self) -> SavedSession {
        SavedSession {
            next_id: self.next_id,
            atoms: self
                .atoms
                .iter()
                .map(|atom| SavedAtom {
                    id: atom.id,
                    atomic_number: atom.element.atomic_number,
                    open_slots: atom.open_slots,
                    x: atom.position.x,
                    y: atom.position.y,
                })
                .collect(),
            bonds: self.bonds.clone(),
        }
    }

    /// Replaces the workspace contents with a saved session.
    ///
    /// Clears first, then recreates each atom at its stored position with
    /// its stored id and slot count - the valence rule is not reapplied.
    /// Atoms whose atomic number the catalog no longer knows are skipped,
    /// mirroring the invalid-drop policy; bonds are restored verbatim.
    /// The id allocator always ends up past every restored id, so a later
    /// placement can never collide with a restored atom.
    pub fn restore(&mut self, session: &SavedSession, catalog: &ElementCatalog) {
        self.clear();

        for saved in &session.atoms {
            let Some(element) = catalog.by_number(saved.atomic_number) else {
                continue;
            };
            self.atoms.push(PlacedAtom::new(
                saved.id,
                element.clone(),
                Point2::new(saved.x, saved.y),
                saved.open_slots,
            ));
        }
        self.bonds = session.bonds.clone();

        let max_restored = session.atoms.iter().map(|a| a.id.next()).max();
        self.next_id = max_restored.unwrap_or(AtomId(0)).max(session.next_id);

        self.refresh_identification();
    }
}

#[cfg(test)]
mod tests {
    use super::super::fixtures::*;
    use super::*;
    use crate::core::models::bond::BondOrder;
    use std::fs;
    use tempfile::tempdir;

    const CATALOG_CSV: &str = "\
atomic_number,symbol,name,atomic_mass,kind,protons,electrons,neutrons,valence_electrons
1,H,Hydrogen,1.008,nonmetal,1,1,0,1
8,O,Oxygen,15.999,nonmetal,8,8,8,6";

    fn catalog() -> ElementCatalog {
        let dir = tempdir().unwrap();
        let path = dir.path().join("elements.csv");
        fs::write(&path, CATALOG_CSV).unwrap();
        ElementCatalog::load(&path).unwrap()
    }

    fn bonded_water_workspace() -> Workspace {
        let mut ws = Workspace::new(registry());
        let o = ws.place(&oxygen(), Point2::new(100.0, 100.0));
        ws.place(&hydrogen(), Point2::new(140.0, 100.0));
        ws.place(&hydrogen(), Point2::new(100.0, 140.0));
        while ws.evaluate_proximity(o).unwrap().is_some() {}
        ws
    }

    #[test]
    fn snapshot_restore_round_trips_exactly() {
        let ws = bonded_water_workspace();
        let saved = ws.snapshot();

        let mut restored = Workspace::new(registry());
        restored.restore(&saved, &catalog());

        assert_eq!(restored.snapshot(), saved);
        assert_eq!(restored.identification().display_name(), "Water");
    }

    #[test]
    fn file_round_trip_preserves_all_serialized_fields() {
        let ws = bonded_water_workspace();
        let saved = ws.snapshot();

        let dir = tempdir().unwrap();
        let path = dir.path().join("session.toml");
        saved.save(&path).unwrap();

        let loaded = SavedSession::load(&path).unwrap().unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn load_of_missing_file_is_nothing_to_load() {
        let dir = tempdir().unwrap();
        let result = SavedSession::load(&dir.path().join("absent.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn load_of_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.toml");
        fs::write(&path, "next_id = \"not a number\"").unwrap();
        assert!(matches!(
            SavedSession::load(&path),
            Err(SessionError::Parse { .. })
        ));
    }

    #[test]
    fn restore_trusts_stored_slot_counts() {
        let session = SavedSession {
            next_id: AtomId(5),
            atoms: vec![SavedAtom {
                id: AtomId(2),
                atomic_number: 8,
                open_slots: 1, // half-bonded oxygen, not the valence-rule 2
                x: 10.0,
                y: 20.0,
            }],
            bonds: vec![],
        };

        let mut ws = Workspace::new(registry());
        ws.restore(&session, &catalog());
        assert_eq!(ws.atom(AtomId(2)).unwrap().open_slots, 1);
    }

    #[test]
    fn restore_advances_allocator_past_restored_ids() {
        // A stale next_id below the restored ids must not be trusted.
        let session = SavedSession {
            next_id: AtomId(1),
            atoms: vec![SavedAtom {
                id: AtomId(7),
                atomic_number: 1,
                open_slots: 1,
                x: 0.0,
                y: 0.0,
            }],
            bonds: vec![],
        };

        let mut ws = Workspace::new(registry());
        ws.restore(&session, &catalog());
        let fresh = ws.place(&hydrogen(), Point2::origin());
        assert_eq!(fresh, AtomId(8));
    }

    #[test]
    fn restore_skips_atoms_missing_from_catalog() {
        let session = SavedSession {
            next_id: AtomId(2),
            atoms: vec![
                SavedAtom {
                    id: AtomId(0),
                    atomic_number: 1,
                    open_slots: 1,
                    x: 0.0,
                    y: 0.0,
                },
                SavedAtom {
                    id: AtomId(1),
                    atomic_number: 99, // not in the catalog
                    open_slots: 2,
                    x: 50.0,
                    y: 0.0,
                },
            ],
            bonds: vec![Bond::new(AtomId(0), AtomId(1), BondOrder::Single)],
        };

        let mut ws = Workspace::new(registry());
        ws.restore(&session, &catalog());
        assert_eq!(ws.atoms().len(), 1);
        // Bonds come back verbatim even when an endpoint was skipped;
        // views simply cannot draw the dangling one.
        assert_eq!(ws.bonds().len(), 1);
    }

    #[test]
    fn restore_replaces_previous_contents() {
        let mut ws = bonded_water_workspace();
        let saved = Workspace::new(registry()).snapshot();
        ws.restore(&saved, &catalog());
        assert!(ws.atoms().is_empty());
        assert!(ws.bonds().is_empty());
        assert!(ws.identification().is_idle());
    }
}
