//! Tests for the query registry and repository definition files.

use std::io::Write;
use std::sync::Arc;
use std::thread;

use strquery::{
    BindError, DefinitionError, DefinitionWarning, ParamKind, QueryMethod, QueryRegistry, Value,
};
use tempfile::NamedTempFile;

const REPOSITORY: &str = r#"{
    "methods": [
        { "name": "findByAge", "query": "{ 'bool' : { 'must' : { 'term' : { 'age' : ?0 } } } }", "params": ["scalar"] },
        { "name": "findByAgeIn", "query": "{ 'bool' : { 'must' : { 'term' : { 'age' : ?0 } } } }", "params": ["scalar-collection"] },
        { "name": "findByName", "query": "{ 'bool' : { 'must' : { 'term' : { 'name' : '?0' } } } }", "params": ["string"] },
        { "name": "findByNameIn", "query": "{ 'bool' : { 'must' : { 'terms' : { 'name' : ?0 } } } }", "params": ["string-collection"] }
    ]
}"#;

fn registry() -> QueryRegistry {
    let mut registry = QueryRegistry::new();
    registry.load_json_str(REPOSITORY).unwrap();
    registry
}

#[test]
fn loads_methods_in_order() {
    let registry = registry();
    assert_eq!(registry.len(), 4);
    assert_eq!(
        registry.method_names().collect::<Vec<_>>(),
        vec!["findByAge", "findByAgeIn", "findByName", "findByNameIn"]
    );
}

#[test]
fn creates_queries_by_method_name() {
    let registry = registry();
    assert_eq!(
        registry.create_query("findByAge", &[Value::from(30)]).unwrap(),
        "{ 'bool' : { 'must' : { 'term' : { 'age' : 30 } } } }"
    );
    assert_eq!(
        registry
            .create_query("findByNameIn", &[Value::from(vec!["a", "b\"c"])])
            .unwrap(),
        r#"{ 'bool' : { 'must' : { 'terms' : { 'name' : ["a","b\"c"] } } } }"#
    );
}

#[test]
fn unknown_method_suggests_close_names() {
    let registry = registry();
    let err = registry
        .create_query("findByNam", &[Value::from("Luke")])
        .unwrap_err();
    match err {
        BindError::MethodNotFound { name, suggestions } => {
            assert_eq!(name, "findByNam");
            assert_eq!(suggestions[0], "findByName");
        }
        other => panic!("expected MethodNotFound, got {other:?}"),
    }
}

#[test]
fn unknown_method_without_close_names() {
    let registry = registry();
    let err = registry.create_query("deleteAll", &[]).unwrap_err();
    assert!(matches!(
        err,
        BindError::MethodNotFound { ref suggestions, .. } if suggestions.is_empty()
    ));
}

#[test]
fn duplicate_method_is_rejected() {
    let mut registry = registry();
    let duplicate = QueryMethod::new("findByAge", "?0", vec![ParamKind::Scalar]).unwrap();
    let err = registry.insert(duplicate).unwrap_err();
    assert!(matches!(err, DefinitionError::DuplicateMethod { ref name } if name == "findByAge"));
    assert_eq!(registry.len(), 4);
}

#[test]
fn invalid_method_reports_its_name() {
    let mut registry = QueryRegistry::new();
    let err = registry
        .load_json_str(r#"{ "methods": [ { "name": "bad", "query": "?1", "params": ["scalar"] } ] }"#)
        .unwrap_err();
    assert!(matches!(
        err,
        DefinitionError::IndexOutOfRange { ref method, index: 1, declared: 1 } if method == "bad"
    ));
}

#[test]
fn unknown_kind_is_a_json_error() {
    let mut registry = QueryRegistry::new();
    let err = registry
        .load_json_str(r#"{ "methods": [ { "name": "m", "query": "?0", "params": ["map"] } ] }"#)
        .unwrap_err();
    assert!(matches!(err, DefinitionError::Json { .. }));
}

#[test]
fn collects_warnings_across_methods() {
    let mut registry = QueryRegistry::new();
    registry
        .load_json_str(
            r#"{ "methods": [
                { "name": "a", "query": "?0", "params": ["scalar"] },
                { "name": "b", "query": "?1", "params": ["scalar", "string"] }
            ] }"#,
        )
        .unwrap();
    assert_eq!(
        registry.warnings(),
        vec![DefinitionWarning::UnusedParameter {
            method: "b".into(),
            index: 0,
        }]
    );
}

#[test]
fn loads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(REPOSITORY.as_bytes()).unwrap();

    let registry = QueryRegistry::from_file(file.path()).unwrap();
    assert_eq!(registry.len(), 4);
    assert!(registry.get("findByAgeIn").is_some());
}

#[test]
fn missing_file_reports_path() {
    let err = QueryRegistry::from_file("/nonexistent/repository.json").unwrap_err();
    match err {
        DefinitionError::Io { path, .. } => {
            assert!(path.ends_with("repository.json"));
        }
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn registry_is_shareable_across_threads() {
    let registry = Arc::new(registry());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                registry
                    .create_query("findByAgeIn", &[Value::from(vec![i, i + 1])])
                    .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let query = handle.join().unwrap();
        assert_eq!(
            query,
            format!(
                "{{ 'bool' : {{ 'must' : {{ 'term' : {{ 'age' : [{},{}] }} }} }} }}",
                i,
                i + 1
            )
        );
    }
}
