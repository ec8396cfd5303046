use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use graphbind_domain::constants::{BLANK_NODE_PREFIX, RDF_TYPE, XSD_NAMESPACE};
use graphbind_domain::error::{Error, Result};
use graphbind_domain::value_objects::{Entity, Literal, Triple, Value};
use serde_json::{Map, Value as Json};

// Every blank node, labelled or not, gets a label from this counter, so
// blank nodes from separate documents never merge.
static NEXT_BLANK: AtomicU64 = AtomicU64::new(0);

fn fresh_blank() -> Entity {
    Entity::blank(format!("b{}", NEXT_BLANK.fetch_add(1, Ordering::Relaxed)))
}

/// Parse a JSON graph document into triples
pub fn parse_document(text: &str) -> Result<Vec<Triple>> {
    let json: Json = serde_json::from_str(text)?;
    let mut parser = DocumentParser::default();

    match &json {
        Json::Object(map) => {
            if let Some(context) = map.get("@context") {
                parser.read_context(context)?;
            }
            match map.get("@graph") {
                Some(Json::Array(nodes)) => {
                    for node in nodes {
                        parser.node(node)?;
                    }
                }
                Some(_) => return Err(Error::parse("@graph must be an array")),
                None => {
                    parser.node(&json)?;
                }
            }
        }
        Json::Array(nodes) => {
            for node in nodes {
                parser.node(node)?;
            }
        }
        _ => return Err(Error::parse("document must be an object or an array")),
    }

    Ok(parser.triples)
}

#[derive(Default)]
struct DocumentParser {
    prefixes: HashMap<String, String>,
    /// Document-scoped `_:label` to store-wide blank node
    blank_labels: HashMap<String, Entity>,
    triples: Vec<Triple>,
}

impl DocumentParser {
    fn read_context(&mut self, context: &Json) -> Result<()> {
        let Json::Object(entries) = context else {
            return Err(Error::parse("@context must be an object"));
        };
        for (term, definition) in entries {
            let iri = match definition {
                Json::String(iri) => iri.clone(),
                Json::Object(map) => match map.get("@id") {
                    Some(Json::String(iri)) => iri.clone(),
                    _ => return Err(Error::parse(format!("context term {term} has no @id"))),
                },
                _ => return Err(Error::parse(format!("unsupported context term {term}"))),
            };
            self.prefixes.insert(term.clone(), iri);
        }
        Ok(())
    }

    /// Expand a compact IRI or term using the context
    fn expand(&self, term: &str) -> String {
        if term.starts_with(BLANK_NODE_PREFIX) {
            return term.to_string();
        }
        if let Some((prefix, suffix)) = term.split_once(':') {
            if !suffix.starts_with("//") {
                if let Some(namespace) = self.prefixes.get(prefix) {
                    return format!("{namespace}{suffix}");
                }
            }
            return term.to_string();
        }
        self.prefixes
            .get(term)
            .cloned()
            .unwrap_or_else(|| term.to_string())
    }

    fn entity(&mut self, identifier: &Json) -> Result<Entity> {
        let Json::String(id) = identifier else {
            return Err(Error::parse("@id must be a string"));
        };
        match id.strip_prefix(BLANK_NODE_PREFIX) {
            Some(label) => Ok(self
                .blank_labels
                .entry(label.to_string())
                .or_insert_with(fresh_blank)
                .clone()),
            None => Ok(Entity::iri(self.expand(id))),
        }
    }

    /// Read a node object, returning its subject
    fn node(&mut self, node: &Json) -> Result<Entity> {
        let Json::Object(map) = node else {
            return Err(Error::parse(format!("expected a node object, found {node}")));
        };
        // A node's context applies to that node and what it nests only.
        let Some(context) = map.get("@context") else {
            return self.node_body(map);
        };
        let outer = self.prefixes.clone();
        let subject = self
            .read_context(context)
            .and_then(|()| self.node_body(map));
        self.prefixes = outer;
        subject
    }

    fn node_body(&mut self, map: &Map<String, Json>) -> Result<Entity> {
        let subject = match map.get("@id") {
            Some(id) => self.entity(id)?,
            None => fresh_blank(),
        };

        for (key, value) in map {
            match key.as_str() {
                "@id" | "@context" => {}
                "@type" => self.types(&subject, value)?,
                keyword if keyword.starts_with('@') => {
                    return Err(Error::parse(format!("unsupported keyword {keyword}")));
                }
                property => {
                    let predicate = self.expand(property);
                    self.property(&subject, &predicate, value)?;
                }
            }
        }
        Ok(subject)
    }

    fn types(&mut self, subject: &Entity, types: &Json) -> Result<()> {
        let items = match types {
            Json::Array(items) => items.as_slice(),
            single => std::slice::from_ref(single),
        };
        for item in items {
            let object = Value::Entity(self.entity(item)?);
            self.triples
                .push(Triple::new(subject.clone(), RDF_TYPE, object));
        }
        Ok(())
    }

    fn property(&mut self, subject: &Entity, predicate: &str, value: &Json) -> Result<()> {
        let items = match value {
            Json::Array(items) => items.as_slice(),
            single => std::slice::from_ref(single),
        };
        for item in items {
            if let Some(object) = self.object(item)? {
                self.triples
                    .push(Triple::new(subject.clone(), predicate, object));
            }
        }
        Ok(())
    }

    fn object(&mut self, item: &Json) -> Result<Option<Value>> {
        let value = match item {
            Json::Null => return Ok(None),
            Json::String(text) => Value::string(text.as_str()),
            Json::Bool(_) | Json::Number(_) => Value::Literal(native_literal(item)),
            Json::Object(map) if map.contains_key("@value") => self.value_object(map)?,
            Json::Object(_) => Value::Entity(self.node(item)?),
            Json::Array(_) => return Err(Error::parse("nested arrays are not supported")),
        };
        Ok(Some(value))
    }

    fn value_object(&self, map: &Map<String, Json>) -> Result<Value> {
        let datatype = match map.get("@type") {
            Some(Json::String(datatype)) => Some(self.expand(datatype)),
            Some(_) => return Err(Error::parse("@type of a value must be a string")),
            None => None,
        };
        let literal = match map.get("@value") {
            Some(Json::String(lexical)) => Literal {
                lexical: lexical.clone(),
                datatype: None,
            },
            Some(native @ (Json::Bool(_) | Json::Number(_))) => native_literal(native),
            _ => return Err(Error::parse("@value must be a string, number or boolean")),
        };
        Ok(Value::Literal(Literal {
            datatype: datatype.or(literal.datatype),
            ..literal
        }))
    }
}

fn native_literal(item: &Json) -> Literal {
    let kind = match item {
        Json::Bool(_) => "boolean",
        Json::Number(n) if n.is_i64() || n.is_u64() => "integer",
        _ => "double",
    };
    Literal {
        lexical: item.to_string(),
        datatype: Some(format!("{XSD_NAMESPACE}{kind}")),
    }
}
