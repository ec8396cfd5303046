use std::fmt;

use serde::{Deserialize, Serialize};

use super::Entity;

/// A literal graph value: lexical form plus optional datatype IRI
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Literal {
    /// The string payload
    pub lexical: String,
    /// Datatype IRI, `None` for plain strings
    pub datatype: Option<String>,
}

/// A graph object: either a literal or a reference to another entity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
    /// Literal object
    Literal(Literal),
    /// Entity-valued object
    Entity(Entity),
}

impl Value {
    /// Plain string literal
    pub fn string(lexical: impl Into<String>) -> Self {
        Self::Literal(Literal {
            lexical: lexical.into(),
            datatype: None,
        })
    }

    /// Literal tagged with a datatype IRI
    pub fn typed(lexical: impl Into<String>, datatype: impl Into<String>) -> Self {
        Self::Literal(Literal {
            lexical: lexical.into(),
            datatype: Some(datatype.into()),
        })
    }

    /// Reference to a named entity
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Entity(Entity::iri(iri))
    }

    /// String payload of a literal; `None` for entity references
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Literal(literal) => Some(&literal.lexical),
            Self::Entity(_) => None,
        }
    }

    /// IRI form of an entity reference, or the lexical form of a literal
    pub fn to_iri(&self) -> String {
        match self {
            Self::Literal(literal) => literal.lexical.clone(),
            Self::Entity(entity) => entity.to_iri(),
        }
    }

    /// Datatype of a literal, if it has one
    pub fn type_tag(&self) -> Option<&str> {
        match self {
            Self::Literal(literal) => literal.datatype.as_deref(),
            Self::Entity(_) => None,
        }
    }

    /// The referenced entity, if this value is one
    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            Self::Entity(entity) => Some(entity),
            Self::Literal(_) => None,
        }
    }

    /// Scalar form handed to components: literal payload, else the IRI
    pub fn to_scalar(&self) -> String {
        self.as_str().map_or_else(|| self.to_iri(), str::to_string)
    }
}

impl From<Entity> for Value {
    fn from(entity: Entity) -> Self {
        Self::Entity(entity)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(Literal {
                lexical,
                datatype: Some(datatype),
            }) => write!(f, "{lexical:?}^^<{datatype}>"),
            Self::Literal(Literal { lexical, .. }) => write!(f, "{lexical:?}"),
            Self::Entity(entity) => entity.fmt(f),
        }
    }
}
