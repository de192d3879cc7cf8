use phf::{Map, phf_map};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Periodic-table category of an element.
///
/// The category drives two things: the open-slot rule (noble gases and
/// unclassified elements never bond) and the visual class a presentation
/// surface applies to a rendered atom. Every variant has a canonical
/// hyphenated tag, which is also the form accepted leniently by [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ElementKind {
    Nonmetal,
    Halogen,
    NobleGas,
    AlkaliMetal,
    AlkalineEarth,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Lanthanide,
    Actinide,
    /// Unclassified; such elements are treated as inert.
    #[default]
    Unknown,
}

static KIND_TAGS: Map<&'static str, ElementKind> = phf_map! {
    "nonmetal" => ElementKind::Nonmetal,
    "halogen" => ElementKind::Halogen,
    "noble-gas" => ElementKind::NobleGas,
    "alkali-metal" => ElementKind::AlkaliMetal,
    "alkaline-earth" => ElementKind::AlkalineEarth,
    "alkaline-earth-metal" => ElementKind::AlkalineEarth,
    "transition-metal" => ElementKind::TransitionMetal,
    "post-transition-metal" => ElementKind::PostTransitionMetal,
    "metalloid" => ElementKind::Metalloid,
    "lanthanide" => ElementKind::Lanthanide,
    "actinide" => ElementKind::Actinide,
    "unknown" => ElementKind::Unknown,
};

/// Folds a free-form category tag to its canonical hyphenated form:
/// lowercase, runs of whitespace/underscores/hyphens collapsed to a single
/// hyphen.
fn canonical_tag(raw: &str) -> String {
    let mut tag = String::with_capacity(raw.len());
    for ch in raw.trim().chars() {
        if ch.is_whitespace() || ch == '_' || ch == '-' {
            if !tag.ends_with('-') {
                tag.push('-');
            }
        } else {
            tag.extend(ch.to_lowercase());
        }
    }
    tag
}

impl ElementKind {
    /// Canonical tag, usable directly as a visual class name.
    pub fn tag(&self) -> &'static str {
        match self {
            ElementKind::Nonmetal => "nonmetal",
            ElementKind::Halogen => "halogen",
            ElementKind::NobleGas => "noble-gas",
            ElementKind::AlkaliMetal => "alkali-metal",
            ElementKind::AlkalineEarth => "alkaline-earth",
            ElementKind::TransitionMetal => "transition-metal",
            ElementKind::PostTransitionMetal => "post-transition-metal",
            ElementKind::Metalloid => "metalloid",
            ElementKind::Lanthanide => "lanthanide",
            ElementKind::Actinide => "actinide",
            ElementKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unrecognized element category '{0}'")]
pub struct ParseElementKindError(pub String);

impl FromStr for ElementKind {
    type Err = ParseElementKindError;

    /// Parses a category tag. Case and separator style are irrelevant
    /// ("Noble Gas", "noble_gas" and "noble-gas" are all the noble-gas
    /// category). An empty tag is `Unknown`; an unrecognized non-empty tag
    /// is an error so that bad catalog data fails loudly at load time.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = canonical_tag(s);
        if tag.is_empty() {
            return Ok(ElementKind::Unknown);
        }
        KIND_TAGS
            .get(tag.as_str())
            .copied()
            .ok_or_else(|| ParseElementKindError(s.to_string()))
    }
}

/// One entry of the element catalog.
///
/// Catalog entries are immutable reference data: the engine only ever reads
/// them. The valence-electron count may be absent for elements the source
/// data does not model; such elements get zero open slots.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
    pub atomic_mass: f64,
    pub kind: ElementKind,
    pub protons: u32,
    pub electrons: u32,
    pub neutrons: u32,
    pub valence_electrons: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_parses_canonical_tags() {
        assert_eq!("nonmetal".parse(), Ok(ElementKind::Nonmetal));
        assert_eq!("noble-gas".parse(), Ok(ElementKind::NobleGas));
        assert_eq!("alkali-metal".parse(), Ok(ElementKind::AlkaliMetal));
        assert_eq!("unknown".parse(), Ok(ElementKind::Unknown));
    }

    #[test]
    fn from_str_is_case_and_separator_insensitive() {
        assert_eq!("Noble Gas".parse(), Ok(ElementKind::NobleGas));
        assert_eq!("NOBLE_GAS".parse(), Ok(ElementKind::NobleGas));
        assert_eq!("alkaline  earth metal".parse(), Ok(ElementKind::AlkalineEarth));
        assert_eq!("Post-Transition Metal".parse(), Ok(ElementKind::PostTransitionMetal));
    }

    #[test]
    fn from_str_maps_empty_to_unknown() {
        assert_eq!("".parse(), Ok(ElementKind::Unknown));
        assert_eq!("   ".parse(), Ok(ElementKind::Unknown));
    }

    #[test]
    fn from_str_rejects_unrecognized_tags() {
        assert!("plasma".parse::<ElementKind>().is_err());
        assert!("metalx".parse::<ElementKind>().is_err());
    }

    #[test]
    fn tag_round_trips_through_from_str() {
        for kind in [
            ElementKind::Nonmetal,
            ElementKind::Halogen,
            ElementKind::NobleGas,
            ElementKind::AlkaliMetal,
            ElementKind::AlkalineEarth,
            ElementKind::TransitionMetal,
            ElementKind::PostTransitionMetal,
            ElementKind::Metalloid,
            ElementKind::Lanthanide,
            ElementKind::Actinide,
            ElementKind::Unknown,
        ] {
            assert_eq!(kind.tag().parse(), Ok(kind));
        }
    }

    #[test]
    fn display_matches_tag() {
        assert_eq!(ElementKind::NobleGas.to_string(), "noble-gas");
        assert_eq!(ElementKind::Unknown.to_string(), "unknown");
    }
}
