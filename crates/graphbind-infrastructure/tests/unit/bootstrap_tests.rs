//! Home directory resolution and configuration graph loading

use std::fs;

use graphbind_domain::constants::{DEFAULT_APPLICATION_TYPE, HOME_DIRECTORY, RDF_TYPE};
use graphbind_domain::{Binder, Entity, GraphStore, Value};
use graphbind_infrastructure::bootstrap::{
    DEFAULT_CONFIGURATION, bootstrap_binder, bootstrap_graph, load_modules,
    resolve_home_directory,
};
use graphbind_infrastructure::config::{HomeConfig, ModulesConfig};
use graphbind_providers::MemoryGraphStore;
use tempfile::TempDir;

use crate::fixtures::{SERVICE_APPLICATION, Service, activator, isolated_config};

#[test]
fn test_no_home_directory() {
    let dir = TempDir::new().expect("temp dir");
    let config = HomeConfig {
        default_directory: dir.path().join("missing"),
        ..HomeConfig::default()
    };

    let home = resolve_home_directory(&config).expect("resolves");

    assert!(home.is_none());
    assert!(!dir.path().join("missing").exists());
}

#[test]
fn test_explicit_home_directory_created() {
    let dir = TempDir::new().expect("temp dir");
    let wanted = dir.path().join("nested").join("home");
    let config = HomeConfig {
        directory: Some(wanted.clone()),
        ..HomeConfig::default()
    };

    let home = resolve_home_directory(&config).expect("resolves");

    assert_eq!(home, Some(wanted.clone()));
    assert!(wanted.is_dir());
}

#[test]
fn test_default_home_directory_used_when_present() {
    let dir = TempDir::new().expect("temp dir");
    let config = HomeConfig {
        default_directory: dir.path().to_path_buf(),
        ..HomeConfig::default()
    };

    let home = resolve_home_directory(&config).expect("resolves");

    assert_eq!(home, Some(dir.path().to_path_buf()));
}

#[test]
fn test_builtin_configuration_without_home() {
    let dir = TempDir::new().expect("temp dir");

    let graph = bootstrap_graph(&isolated_config(dir.path())).expect("bootstraps");

    assert!(graph.home.is_none());
    let roots = graph
        .store
        .project(RDF_TYPE, &Value::iri(DEFAULT_APPLICATION_TYPE));
    assert_eq!(roots, vec![Entity::iri("urn:graphbind:application")]);
}

#[test]
fn test_default_document_written_to_new_home() {
    let dir = TempDir::new().expect("temp dir");
    let home = dir.path().join("home");
    let mut config = isolated_config(dir.path());
    config.home.directory = Some(home.clone());

    let graph = bootstrap_graph(&config).expect("bootstraps");

    let written = fs::read_to_string(home.join("application.json")).expect("document written");
    assert_eq!(written, DEFAULT_CONFIGURATION);
    assert!(!graph.store.is_empty());
}

#[test]
fn test_existing_home_document_is_read() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("application.json"), SERVICE_APPLICATION).expect("write");
    let mut config = isolated_config(dir.path());
    config.home.directory = Some(dir.path().to_path_buf());

    let graph = bootstrap_graph(&config).expect("bootstraps");

    let app = Entity::iri("urn:test:app");
    assert_eq!(
        graph.store.first(&app, "urn:test:name"),
        Some(Value::string("configured"))
    );
    // The stock document was not used
    assert!(
        graph
            .store
            .properties(&Entity::iri("urn:graphbind:application"))
            .is_empty()
    );
}

#[test]
fn test_unreadable_home_document_leaves_graph_empty() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("application.json"), "{ not json").expect("write");
    let mut config = isolated_config(dir.path());
    config.home.directory = Some(dir.path().to_path_buf());

    let graph = bootstrap_graph(&config).expect("bootstrap continues");
    assert!(graph.store.is_empty());

    let err = bootstrap_binder(&config, DEFAULT_APPLICATION_TYPE, activator())
        .expect_err("no application entity");
    assert!(err.is_configuration());
}

#[test]
fn test_module_documents_found_recursively() {
    let dir = TempDir::new().expect("temp dir");
    let first = dir.path().join("a");
    let second = dir.path().join("b").join("c");
    fs::create_dir_all(&first).expect("mkdir");
    fs::create_dir_all(&second).expect("mkdir");
    fs::write(first.join("graphbind.json"), r#"{"@id": "urn:m:a", "urn:p:x": "1"}"#)
        .expect("write");
    fs::write(second.join("graphbind.json"), r#"{"@id": "urn:m:c", "urn:p:x": "2"}"#)
        .expect("write");
    fs::write(second.join("other.json"), r#"{"@id": "urn:m:other", "urn:p:x": "3"}"#)
        .expect("write");

    let store = MemoryGraphStore::new();
    let loaded = load_modules(
        &store,
        &ModulesConfig {
            paths: vec![dir.path().to_path_buf()],
            ..ModulesConfig::default()
        },
    );

    assert_eq!(loaded, 2);
    assert_eq!(store.project_any("urn:p:x").len(), 2);
    assert!(store.properties(&Entity::iri("urn:m:other")).is_empty());
}

#[test]
fn test_broken_module_skipped() {
    let dir = TempDir::new().expect("temp dir");
    let good = dir.path().join("good");
    let bad = dir.path().join("bad");
    fs::create_dir_all(&good).expect("mkdir");
    fs::create_dir_all(&bad).expect("mkdir");
    fs::write(good.join("graphbind.json"), r#"{"@id": "urn:m:good", "urn:p:x": "1"}"#)
        .expect("write");
    fs::write(bad.join("graphbind.json"), "[1, 2").expect("write");

    let store = MemoryGraphStore::new();
    let loaded = load_modules(
        &store,
        &ModulesConfig {
            paths: vec![dir.path().to_path_buf(), dir.path().join("absent")],
            ..ModulesConfig::default()
        },
    );

    assert_eq!(loaded, 1);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_binder_records_home_directory() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("application.json"), SERVICE_APPLICATION).expect("write");
    let mut config = isolated_config(dir.path());
    config.home.directory = Some(dir.path().to_path_buf());

    let binder =
        bootstrap_binder(&config, DEFAULT_APPLICATION_TYPE, activator()).expect("binder builds");

    let application = binder.application().expect("application bound");
    let service = application
        .downcast_ref::<Service>()
        .expect("application is a Service");
    let expected = dir.path().display().to_string();
    assert_eq!(service.home.get(), Some(&Some(expected.clone())));
    assert_eq!(
        binder
            .store()
            .first(&Entity::iri("urn:test:app"), HOME_DIRECTORY),
        Some(Value::string(expected))
    );
}

#[test]
fn test_binder_without_home_has_no_annotation() {
    let dir = TempDir::new().expect("temp dir");

    let config = isolated_config(dir.path());

    let binder =
        bootstrap_binder(&config, DEFAULT_APPLICATION_TYPE, activator()).expect("binder builds");

    let application = binder.application().expect("application bound");
    assert_eq!(
        binder.value(application.as_ref(), HOME_DIRECTORY).expect("bound"),
        None
    );
}
