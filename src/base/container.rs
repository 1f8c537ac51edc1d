//! Variables containers — one level of variable scope.

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

use super::error::ScopeError;
use super::variable::Variable;

/// Ordered map from variable name to variable.
pub type VariableMap = IndexMap<SmolStr, Variable, FxBuildHasher>;

/// An ordered collection of named variables (project, layout or object scope).
///
/// A [`ScopeChain`](crate::ScopeChain) compares containers by identity: two
/// containers with the same variables are still two scopes. There is no
/// `PartialEq`.
#[derive(Clone, Debug, Default)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct VariablesContainer {
    variables: VariableMap,
}

impl VariablesContainer {
    /// Create a new empty container.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, builder style.
    pub fn with(mut self, name: impl Into<SmolStr>, variable: impl Into<Variable>) -> Self {
        self.insert(name, variable);
        self
    }

    /// Insert or replace a variable.
    ///
    /// A replaced variable keeps its position; a new one is appended.
    pub fn insert(&mut self, name: impl Into<SmolStr>, variable: impl Into<Variable>) -> Option<Variable> {
        self.variables.insert(name.into(), variable.into())
    }

    /// Check if a variable is defined in this container.
    pub fn has(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.variables.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Variable> {
        self.variables.get_mut(name)
    }

    /// Remove a variable, keeping the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<Variable> {
        self.variables.shift_remove(name)
    }

    /// Rename a variable in place (its position is kept).
    pub fn rename(&mut self, old_name: &str, new_name: impl Into<SmolStr>) -> Result<(), ScopeError> {
        let new_name = new_name.into();
        if new_name.as_str() == old_name {
            return if self.has(old_name) {
                Ok(())
            } else {
                Err(ScopeError::VariableNotFound(SmolStr::new(old_name)))
            };
        }
        if self.has(&new_name) {
            return Err(ScopeError::NameTaken(new_name));
        }

        let (index, _, variable) = self
            .variables
            .shift_remove_full(old_name)
            .ok_or_else(|| ScopeError::VariableNotFound(SmolStr::new(old_name)))?;
        self.variables.shift_insert(index, new_name, variable);
        Ok(())
    }

    /// Position of a variable in declaration order.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.variables.get_index_of(name)
    }

    /// Iterate over `(name, variable)` in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Variable)> + '_ {
        self.variables.iter().map(|(name, var)| (name.as_str(), var))
    }

    /// Iterate over variable names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.variables.keys().map(SmolStr::as_str)
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    pub fn clear(&mut self) {
        self.variables.clear();
    }
}

impl<N: Into<SmolStr>> FromIterator<(N, Variable)> for VariablesContainer {
    fn from_iter<T: IntoIterator<Item = (N, Variable)>>(iter: T) -> Self {
        Self {
            variables: iter.into_iter().map(|(name, var)| (name.into(), var)).collect(),
        }
    }
}
