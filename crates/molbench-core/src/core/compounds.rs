use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Descriptive metadata for one known compound.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CompoundEntry {
    pub name: String,
    pub description: String,
}

/// Read-only lookup from canonical formula to compound metadata.
///
/// The backing document is TOML, one table per formula:
///
/// ```toml
/// [H2O]
/// name = "Water"
/// description = "The universal solvent."
/// ```
#[derive(Debug, Clone, Default)]
pub struct CompoundRegistry {
    registry: HashMap<String, CompoundEntry>,
}

impl CompoundRegistry {
    pub fn load(path: &Path) -> Result<Self, CompoundsError> {
        let content = std::fs::read_to_string(path).map_err(|e| CompoundsError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let registry: HashMap<String, CompoundEntry> =
            toml::from_str(&content).map_err(|e| CompoundsError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
        Ok(Self { registry })
    }

    pub fn get(&self, formula: &str) -> Option<&CompoundEntry> {
        self.registry.get(formula)
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl FromIterator<(String, CompoundEntry)> for CompoundRegistry {
    fn from_iter<T: IntoIterator<Item = (String, CompoundEntry)>>(iter: T) -> Self {
        Self {
            registry: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CompoundsError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
}
