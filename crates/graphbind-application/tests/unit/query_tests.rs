//! Tests for the binder query surface

use std::sync::Arc;

use graphbind_application::GraphBinder;
use graphbind_domain::constants::{IMPLEMENTATION, RDF_TYPE};
use graphbind_domain::ports::identity;
use graphbind_domain::{Binder, EmptyComponent, Entity, Error, Instance};

use crate::test_components::*;

const ROLE: &str = "urn:p:hasRole";
const ADMIN: &str = "urn:role:admin";

fn binder() -> GraphBinder {
    let store = plain_application(vec![
        literal("urn:app", "urn:p:port", "42"),
        literal("urn:app", "urn:p:alias", "one"),
        literal("urn:app", "urn:p:alias", "two"),
        link("urn:app", DATABASE, "urn:db"),
        link("urn:app", "urn:p:worker", "urn:w1"),
        link("urn:app", "urn:p:worker", "urn:w2"),
        implementation("urn:db", "test::Plain"),
        link("urn:u1", ROLE, ADMIN),
        link("urn:u2", ROLE, "urn:role:guest"),
        link("urn:u3", ROLE, ADMIN),
        link("urn:u4", ROLE, ADMIN),
    ]);
    GraphBinder::new(store, APP_TYPE, Arc::new(CountingActivator::default()))
        .expect("binder builds")
}

fn app(binder: &GraphBinder) -> Instance {
    binder.application().expect("application bound")
}

#[test]
fn test_properties_lists_distinct_predicates() {
    let binder = binder();
    let mut properties = binder.properties(app(&binder).as_ref()).expect("bound");
    properties.sort();
    assert_eq!(
        properties,
        vec![
            IMPLEMENTATION.to_string(),
            RDF_TYPE.to_string(),
            "urn:p:alias".to_string(),
            DATABASE.to_string(),
            "urn:p:port".to_string(),
            "urn:p:worker".to_string(),
        ]
    );
}

#[test]
fn test_value_coerces_literals_and_entities() {
    let binder = binder();
    let app = app(&binder);

    assert_eq!(
        binder.value(app.as_ref(), "urn:p:port").expect("bound"),
        Some("42".to_string())
    );
    assert_eq!(
        binder.value(app.as_ref(), DATABASE).expect("bound"),
        Some("urn:db".to_string())
    );
    assert_eq!(binder.value(app.as_ref(), "urn:p:missing").expect("bound"), None);

    // Reading the IRI does not bind the referenced entity.
    assert_eq!(binder.bound_count().expect("count"), 1);
}

#[test]
fn test_values_keep_store_order() {
    let binder = binder();
    let app = app(&binder);
    assert_eq!(
        binder.values(app.as_ref(), "urn:p:alias").expect("bound"),
        vec!["one", "two"]
    );
    assert!(binder.values(app.as_ref(), "urn:p:missing").expect("bound").is_empty());
}

#[test]
fn test_instance_follows_relation_lazily() {
    let binder = binder();
    let app = app(&binder);

    let db = binder
        .instance(app.as_ref(), DATABASE)
        .expect("resolves")
        .expect("database present");
    assert!(db.downcast_ref::<Plain>().is_some());
    assert_eq!(binder.entity_of(db.as_ref()).expect("bound"), Entity::iri("urn:db"));

    let again = binder
        .instance(app.as_ref(), DATABASE)
        .expect("resolves")
        .expect("database present");
    assert!(Arc::ptr_eq(&db, &again));

    assert!(binder.instance(app.as_ref(), "urn:p:missing").expect("bound").is_none());
}

#[test]
fn test_instances_resolve_every_object() {
    let binder = binder();
    let workers = binder
        .instances(app(&binder).as_ref(), "urn:p:worker")
        .expect("resolves");
    assert_eq!(workers.len(), 2);
    assert_eq!(binder.entity_of(workers[0].as_ref()).expect("bound"), Entity::iri("urn:w1"));
    assert_eq!(binder.entity_of(workers[1].as_ref()).expect("bound"), Entity::iri("urn:w2"));
}

#[test]
fn test_literal_relation_is_not_an_entity() {
    let binder = binder();
    let result = binder.instance(app(&binder).as_ref(), "urn:p:port");
    assert!(matches!(result, Err(Error::NotAnEntity { .. })));

    let result = binder.instances(app(&binder).as_ref(), "urn:p:alias");
    assert!(matches!(result, Err(Error::NotAnEntity { .. })));
}

#[test]
fn test_find_instances_by_role() {
    let binder = binder();

    let admins = binder.find_instances(ROLE, ADMIN).expect("resolves");
    let mut entities: Vec<Entity> = admins
        .iter()
        .map(|i| binder.entity_of(i.as_ref()).expect("bound"))
        .collect();
    entities.sort();
    assert_eq!(
        entities,
        vec![Entity::iri("urn:u1"), Entity::iri("urn:u3"), Entity::iri("urn:u4")]
    );

    for admin in &admins {
        let entity = binder.entity_of(admin.as_ref()).expect("bound");
        let resolved = binder.resolve(&entity).expect("resolves");
        assert!(Arc::ptr_eq(admin, &resolved));
    }
}

#[test]
fn test_find_instance_returns_first_match() {
    let binder = binder();
    let first = binder
        .find_instance(ROLE, ADMIN)
        .expect("resolves")
        .expect("an admin");
    assert_eq!(binder.entity_of(first.as_ref()).expect("bound"), Entity::iri("urn:u1"));
    assert!(binder.find_instance(ROLE, "urn:role:nobody").expect("resolves").is_none());
}

#[test]
fn test_instances_with_any_object() {
    let binder = binder();
    let users = binder.instances_with(ROLE).expect("resolves");
    assert_eq!(users.len(), 4);
}

#[test]
fn test_foreign_instance_is_not_bound() {
    let binder = binder();
    let stranger: Instance = Arc::new(EmptyComponent);

    assert!(matches!(
        binder.entity_of(stranger.as_ref()),
        Err(Error::NotBound { .. })
    ));
    assert!(matches!(
        binder.value(stranger.as_ref(), "urn:p:port"),
        Err(Error::NotBound { .. })
    ));
    assert!(matches!(
        binder.properties(stranger.as_ref()),
        Err(Error::NotBound { .. })
    ));
}

#[test]
fn test_binder_works_as_trait_object() {
    let activator = Arc::new(CountingActivator::default());
    let binder: Arc<dyn Binder> = Arc::new(
        GraphBinder::new(plain_application(vec![]), APP_TYPE, activator.clone())
            .expect("binder builds"),
    );
    let app = binder.application().expect("application bound");
    assert_ne!(identity(app.as_ref()), 0);

    // The activator handed back is the one injected.
    binder.activator().activate("test::Plain").expect("activates");
    assert_eq!(activator.count("test::Plain"), 2);
}
