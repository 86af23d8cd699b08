//! Tests for query methods compiled against declared parameters.

use strquery::{
    BindError, DefinitionError, DefinitionWarning, ParamKind, ParseError, QueryMethod,
    QueryMethodDefinition, Value,
};

fn method(name: &str, query: &str, params: Vec<ParamKind>) -> QueryMethod {
    QueryMethod::new(name, query, params).unwrap()
}

// =========================================================================
// Compilation
// =========================================================================

#[test]
fn compile_keeps_definition_parts() {
    let m = method("findByName", "{ 'name' : '?0' }", vec![ParamKind::String]);
    assert_eq!(m.name(), "findByName");
    assert_eq!(m.source(), "{ 'name' : '?0' }");
    assert_eq!(m.params(), &[ParamKind::String]);
    assert_eq!(m.template().segments.len(), 3);
}

#[test]
fn builder_produces_definition() {
    let definition = QueryMethodDefinition::builder()
        .name("findAll")
        .query("{ 'match_all' : {} }")
        .build();
    assert!(definition.params.is_empty());
    let m = QueryMethod::compile(definition).unwrap();
    assert_eq!(m.create_query(&[]).unwrap(), "{ 'match_all' : {} }");
}

#[test]
fn placeholder_beyond_declared_parameters_fails_at_compile() {
    let err = QueryMethod::new(
        "findByAge",
        "{ 'age' : ?5 }",
        vec![ParamKind::Scalar, ParamKind::Scalar, ParamKind::Scalar],
    )
    .unwrap_err();
    match err {
        DefinitionError::IndexOutOfRange {
            method,
            index,
            declared,
        } => {
            assert_eq!(method, "findByAge");
            assert_eq!(index, 5);
            assert_eq!(declared, 3);
        }
        other => panic!("expected IndexOutOfRange, got {other:?}"),
    }
}

#[test]
fn malformed_template_fails_at_compile() {
    let err = QueryMethod::new("broken", "?99999999999999999999999", vec![ParamKind::Scalar])
        .unwrap_err();
    assert!(matches!(
        err,
        DefinitionError::Parse {
            source: ParseError::InvalidIndex { .. },
            ..
        }
    ));
}

// =========================================================================
// Invocation
// =========================================================================

#[test]
fn create_query_pairs_values_with_declared_kinds() {
    let m = method(
        "findByNameAndAges",
        "{ 'name' : '?0', 'age' : ?1 }",
        vec![ParamKind::String, ParamKind::ScalarCollection],
    );
    let query = m
        .create_query(&[Value::from(r#"R2 "D2""#), Value::from(vec![30, 35])])
        .unwrap();
    assert_eq!(query, r#"{ 'name' : 'R2 \"D2\"', 'age' : [30,35] }"#);
}

#[test]
fn same_method_serves_many_invocations() {
    let m = method("findByAge", "{ 'age' : ?0 }", vec![ParamKind::Scalar]);
    for age in [1, 20, 300] {
        assert_eq!(
            m.create_query(&[Value::from(age)]).unwrap(),
            format!("{{ 'age' : {age} }}")
        );
    }
}

#[test]
fn too_few_values_fail() {
    let m = method("findByAge", "{ 'age' : ?0 }", vec![ParamKind::Scalar]);
    let err = m.create_query(&[]).unwrap_err();
    assert!(matches!(
        err,
        BindError::ArgumentCount {
            expected: 1,
            got: 0,
            ..
        }
    ));
}

#[test]
fn too_many_values_fail() {
    let m = method("findByAge", "{ 'age' : ?0 }", vec![ParamKind::Scalar]);
    let err = m
        .create_query(&[Value::from(1), Value::from(2)])
        .unwrap_err();
    assert!(matches!(
        err,
        BindError::ArgumentCount {
            expected: 1,
            got: 2,
            ..
        }
    ));
}

#[test]
fn value_not_matching_declared_kind_fails() {
    let m = method("findByAge", "{ 'age' : ?0 }", vec![ParamKind::Scalar]);
    let err = m.create_query(&[Value::from("thirty")]).unwrap_err();
    assert!(matches!(err, BindError::Format { index: 0, .. }));
}

// =========================================================================
// Warnings
// =========================================================================

#[test]
fn unused_parameters_are_reported() {
    let m = method(
        "findByName",
        "{ 'name' : '?1' }",
        vec![ParamKind::String, ParamKind::String, ParamKind::Scalar],
    );
    assert_eq!(m.unused_parameters(), vec![0, 2]);
    assert_eq!(
        m.warnings(),
        vec![
            DefinitionWarning::UnusedParameter {
                method: "findByName".into(),
                index: 0,
            },
            DefinitionWarning::UnusedParameter {
                method: "findByName".into(),
                index: 2,
            },
        ]
    );
}

#[test]
fn fully_used_parameters_produce_no_warnings() {
    let m = method(
        "findWithRepeatedPlaceholder",
        "name:(?0, ?1, ?0)",
        vec![ParamKind::String, ParamKind::String],
    );
    assert!(m.warnings().is_empty());
}

// =========================================================================
// Serialized definitions
// =========================================================================

#[test]
fn definition_deserializes_kind_names() {
    let definition: QueryMethodDefinition = serde_json::from_str(
        r#"{ "name": "find", "query": "?0 ?1 ?2 ?3",
             "params": ["string", "scalar", "string-collection", "scalar-collection"] }"#,
    )
    .unwrap();
    assert_eq!(definition.params, ParamKind::ALL.to_vec());
}

#[test]
fn definition_params_default_to_empty() {
    let definition: QueryMethodDefinition =
        serde_json::from_str(r#"{ "name": "all", "query": "*" }"#).unwrap();
    assert!(definition.params.is_empty());
}
