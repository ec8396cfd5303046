use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::BLANK_NODE_PREFIX;

/// An opaque graph node: an IRI or a blank node
///
/// Entities compare by value, so two `Entity::Iri` with the same IRI are
/// the same entity no matter where they were read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Entity {
    /// Named node
    Iri(String),
    /// Blank node, stored without the `_:` prefix
    Blank(String),
}

impl Entity {
    /// Create a named entity
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri(iri.into())
    }

    /// Create a blank node entity from its label
    pub fn blank(label: impl Into<String>) -> Self {
        Self::Blank(label.into())
    }

    /// Read an identifier, treating `_:label` as a blank node
    pub fn parse(identifier: &str) -> Self {
        match identifier.strip_prefix(BLANK_NODE_PREFIX) {
            Some(label) => Self::blank(label),
            None => Self::iri(identifier),
        }
    }

    /// The IRI form: the IRI itself, or `_:label` for blank nodes
    pub fn to_iri(&self) -> String {
        match self {
            Self::Iri(iri) => iri.clone(),
            Self::Blank(label) => format!("{BLANK_NODE_PREFIX}{label}"),
        }
    }

    /// Whether this is a blank node
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank(_))
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => write!(f, "<{iri}>"),
            Self::Blank(label) => write!(f, "{BLANK_NODE_PREFIX}{label}"),
        }
    }
}
