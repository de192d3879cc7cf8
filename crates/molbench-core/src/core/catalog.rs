use super::models::element::{Element, ElementKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Deserialize)]
struct ElementRecord {
    atomic_number: u32,
    symbol: String,
    name: String,
    atomic_mass: f64,
    kind: String,
    protons: u32,
    electrons: u32,
    neutrons: u32,
    valence_electrons: Option<u8>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("CSV parsing error for '{path}': {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Element {atomic_number} ('{symbol}') has an unrecognized category '{kind}'")]
    InvalidKind {
        atomic_number: u32,
        symbol: String,
        kind: String,
    },
    #[error("Duplicate element entry for {0}")]
    Duplicate(String),
}

/// Read-only catalog of chemical elements, loaded once at startup.
///
/// Entries keep their file order; lookups by atomic number (the drag
/// payload) and by symbol are indexed. A failed load is fatal to the
/// session per the startup policy, so there is no partial-catalog state.
#[derive(Debug, Clone, Default)]
pub struct ElementCatalog {
    elements: Vec<Element>,
    by_number: HashMap<u32, usize>,
    by_symbol: HashMap<String, usize>,
}

impl ElementCatalog {
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let mut reader = csv::Reader::from_path(path).map_err(|e| CatalogError::Csv {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;

        let mut catalog = Self::default();
        for result in reader.deserialize::<ElementRecord>() {
            let record = result.map_err(|e| CatalogError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
            let kind: ElementKind =
                record
                    .kind
                    .parse()
                    .map_err(|_| CatalogError::InvalidKind {
                        atomic_number: record.atomic_number,
                        symbol: record.symbol.clone(),
                        kind: record.kind.clone(),
                    })?;
            catalog.insert(Element {
                atomic_number: record.atomic_number,
                symbol: record.symbol,
                name: record.name,
                atomic_mass: record.atomic_mass,
                kind,
                protons: record.protons,
                electrons: record.electrons,
                neutrons: record.neutrons,
                valence_electrons: record.valence_electrons,
            })?;
        }
        Ok(catalog)
    }

    fn insert(&mut self, element: Element) -> Result<(), CatalogError> {
        if self.by_number.contains_key(&element.atomic_number) {
            return Err(CatalogError::Duplicate(format!(
                "atomic number {}",
                element.atomic_number
            )));
        }
        if self.by_symbol.contains_key(&element.symbol) {
            return Err(CatalogError::Duplicate(format!(
                "symbol '{}'",
                element.symbol
            )));
        }
        let index = self.elements.len();
        self.by_number.insert(element.atomic_number, index);
        self.by_symbol.insert(element.symbol.clone(), index);
        self.elements.push(element);
        Ok(())
    }

    /// Resolves a drag payload back to its full element record.
    pub fn by_number(&self, atomic_number: u32) -> Option<&Element> {
        self.by_number
            .get(&atomic_number)
            .map(|&i| &self.elements[i])
    }

    pub fn by_symbol(&self, symbol: &str) -> Option<&Element> {
        self.by_symbol.get(symbol).map(|&i| &self.elements[i])
    }

    /// All elements in catalog (file) order.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
