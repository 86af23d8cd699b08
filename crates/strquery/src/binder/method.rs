//! Query methods: templates bound to declared parameter kinds.

use bon::Builder;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::binder::bind::bind_resolved;
use crate::binder::{BindError, DefinitionError, DefinitionWarning};
use crate::parser::{Template, parse_template};
use crate::types::{ParamKind, Value};

/// The declaration of a query method, as written by its author.
///
/// # Example
///
/// ```
/// use strquery::{ParamKind, QueryMethod, QueryMethodDefinition, Value};
///
/// let definition = QueryMethodDefinition::builder()
///     .name("findByAge")
///     .query("{ 'bool' : { 'must' : { 'term' : { 'age' : ?0 } } } }")
///     .params(vec![ParamKind::Scalar])
///     .build();
/// let method = QueryMethod::compile(definition).unwrap();
///
/// assert_eq!(
///     method.create_query(&[Value::from(30)]).unwrap(),
///     "{ 'bool' : { 'must' : { 'term' : { 'age' : 30 } } } }"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct QueryMethodDefinition {
    /// Method name, unique within a repository.
    #[builder(into)]
    pub name: String,

    /// Template text with `?<index>` placeholders.
    #[builder(into)]
    pub query: String,

    /// Declared kind of each parameter, in position order.
    #[builder(default)]
    #[serde(default)]
    pub params: Vec<ParamKind>,
}

/// A compiled query method.
///
/// The template is parsed and every placeholder index is checked against the
/// declared parameters once, at compile time. Invocations only format and
/// splice.
#[derive(Debug, Clone)]
pub struct QueryMethod {
    name: String,
    source: String,
    template: Template,
    params: Vec<ParamKind>,
}

impl QueryMethod {
    /// Compile a definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the template does not parse, or if a placeholder
    /// references a position with no declared parameter.
    pub fn compile(definition: QueryMethodDefinition) -> Result<Self, DefinitionError> {
        let QueryMethodDefinition {
            name,
            query,
            params,
        } = definition;

        let template = parse_template(&query).map_err(|source| DefinitionError::Parse {
            method: name.clone(),
            source,
        })?;

        if let Some(index) = template.placeholders().find(|&index| index >= params.len()) {
            return Err(DefinitionError::IndexOutOfRange {
                method: name,
                index,
                declared: params.len(),
            });
        }

        debug!(
            method = %name,
            params = params.len(),
            placeholders = template.placeholders().count(),
            "compiled query method"
        );

        Ok(Self {
            name,
            source: query,
            template,
            params,
        })
    }

    /// Compile from parts.
    pub fn new(
        name: impl Into<String>,
        query: impl Into<String>,
        params: Vec<ParamKind>,
    ) -> Result<Self, DefinitionError> {
        Self::compile(QueryMethodDefinition {
            name: name.into(),
            query: query.into(),
            params,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The template text as declared.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    /// Declared parameter kinds, in position order.
    pub fn params(&self) -> &[ParamKind] {
        &self.params
    }

    /// Create the query text for one invocation.
    ///
    /// `values` are paired positionally with the declared kinds.
    ///
    /// # Errors
    ///
    /// Returns an error if the number of values differs from the number of
    /// declared parameters, or if a value does not conform to its kind.
    pub fn create_query(&self, values: &[Value]) -> Result<String, BindError> {
        if values.len() != self.params.len() {
            return Err(BindError::ArgumentCount {
                method: self.name.clone(),
                expected: self.params.len(),
                got: values.len(),
            });
        }
        bind_resolved(&self.template, values.len(), |index| {
            Some((*self.params.get(index)?, values.get(index)?))
        })
    }

    /// Declared parameter positions that no placeholder references.
    pub fn unused_parameters(&self) -> Vec<usize> {
        let referenced = self.template.referenced_indices();
        (0..self.params.len())
            .filter(|index| !referenced.contains(index))
            .collect()
    }

    /// Warnings about this definition.
    pub fn warnings(&self) -> Vec<DefinitionWarning> {
        self.unused_parameters()
            .into_iter()
            .map(|index| DefinitionWarning::UnusedParameter {
                method: self.name.clone(),
                index,
            })
            .collect()
    }
}
