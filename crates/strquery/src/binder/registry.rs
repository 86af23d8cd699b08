//! Query registry: a repository of named query methods.

use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::binder::error::compute_suggestions;
use crate::binder::{BindError, DefinitionError, DefinitionWarning, QueryMethod, QueryMethodDefinition};
use crate::types::Value;

/// The on-disk form of a repository: a list of method definitions.
///
/// ```json
/// { "methods": [ { "name": "findByName", "query": "{ 'name' : '?0' }", "params": ["string"] } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDefinition {
    #[serde(default)]
    pub methods: Vec<QueryMethodDefinition>,
}

/// A registry for storing and looking up query methods by name.
///
/// Methods are compiled on insertion and immutable afterwards, so a
/// registry can be shared read-only across threads.
#[derive(Debug, Default)]
pub struct QueryRegistry {
    methods: HashMap<String, QueryMethod>,
    /// Insertion order, for stable listings.
    order: Vec<String>,
}

impl QueryRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a compiled method.
    ///
    /// Returns an error if a method with the same name is already present.
    pub fn insert(&mut self, method: QueryMethod) -> Result<(), DefinitionError> {
        let name = method.name().to_string();
        if self.methods.contains_key(&name) {
            return Err(DefinitionError::DuplicateMethod { name });
        }
        debug!(method = %name, "registered query method");
        self.order.push(name.clone());
        self.methods.insert(name, method);
        Ok(())
    }

    /// Compile and insert a definition.
    pub fn define(&mut self, definition: QueryMethodDefinition) -> Result<(), DefinitionError> {
        self.insert(QueryMethod::compile(definition)?)
    }

    /// Compile and insert every method of a repository definition.
    ///
    /// Stops at the first invalid method; methods before it stay registered.
    pub fn load(&mut self, repository: RepositoryDefinition) -> Result<(), DefinitionError> {
        for definition in repository.methods {
            self.define(definition)?;
        }
        Ok(())
    }

    /// Load a repository definition from JSON text.
    pub fn load_json_str(&mut self, json: &str) -> Result<(), DefinitionError> {
        let repository: RepositoryDefinition = serde_json::from_str(json)?;
        self.load(repository)
    }

    /// Load a repository definition file.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), DefinitionError> {
        let path = path.as_ref();
        let content = read_to_string(path).map_err(|source| DefinitionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading repository definition");
        self.load_json_str(&content)
    }

    /// Build a registry from a repository definition file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DefinitionError> {
        let mut registry = Self::new();
        registry.load_file(path)?;
        Ok(registry)
    }

    /// Get a method by name.
    pub fn get(&self, name: &str) -> Option<&QueryMethod> {
        self.methods.get(name)
    }

    /// Method names in insertion order.
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Methods in insertion order.
    pub fn methods(&self) -> impl Iterator<Item = &QueryMethod> {
        self.order.iter().filter_map(|name| self.methods.get(name))
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Create the query text for the named method.
    ///
    /// # Errors
    ///
    /// Returns [`BindError::MethodNotFound`], with close names as
    /// suggestions, if no such method exists, and otherwise any error of
    /// [`QueryMethod::create_query`].
    pub fn create_query(&self, name: &str, values: &[Value]) -> Result<String, BindError> {
        let method = self.get(name).ok_or_else(|| BindError::MethodNotFound {
            name: name.to_string(),
            suggestions: compute_suggestions(name, &self.order),
        })?;
        method.create_query(values)
    }

    /// Warnings for every registered method, in insertion order.
    pub fn warnings(&self) -> Vec<DefinitionWarning> {
        self.methods().flat_map(QueryMethod::warnings).collect()
    }
}
