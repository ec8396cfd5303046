//! Unit tests for graph value objects

use graphbind_domain::constants::TYPE_NAME_DATATYPE;
use graphbind_domain::{Entity, Triple, Value};

#[test]
fn test_plain_literal_coercion() {
    let value = Value::string("42");
    assert_eq!(value.as_str(), Some("42"));
    assert_eq!(value.type_tag(), None);
    assert_eq!(value.to_scalar(), "42");
    assert!(value.as_entity().is_none());
}

#[test]
fn test_typed_literal_carries_tag() {
    let value = Value::typed("app::Server", TYPE_NAME_DATATYPE);
    assert_eq!(value.type_tag(), Some(TYPE_NAME_DATATYPE));
    assert_eq!(value.as_str(), Some("app::Server"));
}

#[test]
fn test_entity_value_coerces_to_iri() {
    let value = Value::iri("urn:app:db");
    assert_eq!(value.as_str(), None);
    assert_eq!(value.to_scalar(), "urn:app:db");
    assert_eq!(value.as_entity(), Some(&Entity::iri("urn:app:db")));

    let blank: Value = Entity::blank("n3").into();
    assert_eq!(blank.to_scalar(), "_:n3");
}

#[test]
fn test_entities_compare_by_value() {
    let a = Entity::iri(String::from("urn:app"));
    let b = Entity::parse("urn:app");
    assert_eq!(a, b);
    assert_ne!(Entity::iri("b0"), Entity::blank("b0"));
}

#[test]
fn test_value_display() {
    assert_eq!(Value::string("x").to_string(), "\"x\"");
    assert_eq!(Value::iri("urn:a").to_string(), "<urn:a>");
    assert_eq!(Value::typed("1", "urn:int").to_string(), "\"1\"^^<urn:int>");
}

#[test]
fn test_triple_new() {
    let triple = Triple::new(Entity::iri("urn:s"), "urn:p", Value::string("o"));
    assert_eq!(triple.predicate, "urn:p");
    assert_eq!(triple.object, Value::string("o"));
}
