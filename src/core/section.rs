//! # Sections
//!
//! The fixed, ordered sequence of portfolio panels. The deck is built once
//! at startup and never changes — sections are configuration, not state.
//! The navigator only ever stores an index into this deck.

use std::fmt;

/// One full-viewport panel in the navigation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Skills,
    Experience,
    Projects,
    Education,
    Contact,
}

impl SectionId {
    /// All sections in canonical display order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Contact,
    ];

    /// Stable string identifier, used in config files and `GoTo` commands.
    pub fn id(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
        }
    }

    /// Human-readable title for the title bar.
    pub fn title(self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Education => "Education",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Immutable ordered sequence of sections with id → index lookup.
#[derive(Debug, Clone)]
pub struct SectionDeck {
    sections: Vec<SectionId>,
}

impl SectionDeck {
    pub fn new(sections: Vec<SectionId>) -> Self {
        debug_assert!(!sections.is_empty(), "deck must have at least one section");
        Self { sections }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<SectionId> {
        self.sections.get(index).copied()
    }

    /// Position of the section with the given string id, if present.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.sections.iter().copied()
    }
}

impl Default for SectionDeck {
    /// The full portfolio in canonical order.
    fn default() -> Self {
        Self::new(SectionId::ALL.to_vec())
    }
}
