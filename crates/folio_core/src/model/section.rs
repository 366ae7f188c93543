//! Navigable page sections.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Page section reachable from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Home,
    About,
    Projects,
    Contact,
}

/// Element id for the hero/header section.
pub const SECTION_HOME: &str = "home";
/// Element id for the about section.
pub const SECTION_ABOUT: &str = "about";
/// Element id for the projects section.
pub const SECTION_PROJECTS: &str = "projects";
/// Element id for the contact section.
pub const SECTION_CONTACT: &str = "contact";

impl SectionId {
    /// All sections in navigation order.
    pub const ALL: [SectionId; 4] = [Self::Home, Self::About, Self::Projects, Self::Contact];

    /// Stable document element id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => SECTION_HOME,
            Self::About => SECTION_ABOUT,
            Self::Projects => SECTION_PROJECTS,
            Self::Contact => SECTION_CONTACT,
        }
    }

    /// Navigation link label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

impl Display for SectionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses one section from its exact lowercase element id.
pub fn parse_section_id(value: &str) -> Result<SectionId, SectionParseError> {
    match value {
        "" => Err(SectionParseError::Empty),
        SECTION_HOME => Ok(SectionId::Home),
        SECTION_ABOUT => Ok(SectionId::About),
        SECTION_PROJECTS => Ok(SectionId::Projects),
        SECTION_CONTACT => Ok(SectionId::Contact),
        other => Err(SectionParseError::Unknown(other.to_string())),
    }
}

/// Section id parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionParseError {
    Empty,
    Unknown(String),
}

impl Display for SectionParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "section id must not be empty"),
            Self::Unknown(value) => write!(f, "unknown section id: {value}"),
        }
    }
}

impl Error for SectionParseError {}
