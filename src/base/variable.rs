//! Variable values.

use smol_str::SmolStr;
use std::fmt;

use super::container::VariableMap;

/// Returned by lenient lookups when no scope defines the requested name.
static BAD_VARIABLE: Variable = Variable::Number(0.0);

/// The kind of value held by a [`Variable`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VariableKind {
    Number,
    String,
    Boolean,
    Structure,
    Array,
}

/// A variable value stored in a [`VariablesContainer`](crate::VariablesContainer).
///
/// Structures keep their children in insertion order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "type", content = "value", rename_all = "lowercase")
)]
pub enum Variable {
    Number(f64),
    String(SmolStr),
    Boolean(bool),
    Structure(VariableMap),
    Array(Vec<Variable>),
}

impl Variable {
    /// The shared sentinel handed out for names that resolve nowhere.
    ///
    /// It holds the number `0`. Compare with [`Variable::is_bad`], not by value:
    /// a real variable may also hold `0`.
    #[inline]
    pub fn bad() -> &'static Variable {
        &BAD_VARIABLE
    }

    /// Check if this is the sentinel returned by [`Variable::bad`].
    #[inline]
    pub fn is_bad(&self) -> bool {
        std::ptr::eq(self, &BAD_VARIABLE)
    }

    /// Build a structure from `(name, child)` pairs.
    pub fn structure<I, N>(children: I) -> Self
    where
        I: IntoIterator<Item = (N, Variable)>,
        N: Into<SmolStr>,
    {
        Variable::Structure(
            children
                .into_iter()
                .map(|(name, child)| (name.into(), child))
                .collect(),
        )
    }

    /// Build an array from its elements.
    pub fn array(elements: impl IntoIterator<Item = Variable>) -> Self {
        Variable::Array(elements.into_iter().collect())
    }

    pub fn kind(&self) -> VariableKind {
        match self {
            Variable::Number(_) => VariableKind::Number,
            Variable::String(_) => VariableKind::String,
            Variable::Boolean(_) => VariableKind::Boolean,
            Variable::Structure(_) => VariableKind::Structure,
            Variable::Array(_) => VariableKind::Array,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Variable::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            Variable::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Variable::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Look up a child of a structure.
    ///
    /// Returns `None` for non-structures.
    pub fn child(&self, name: &str) -> Option<&Variable> {
        match self {
            Variable::Structure(children) => children.get(name),
            _ => None,
        }
    }

    /// Check if a structure has a child called `name`.
    pub fn has_child(&self, name: &str) -> bool {
        self.child(name).is_some()
    }

    /// Get an array element.
    pub fn at(&self, index: usize) -> Option<&Variable> {
        match self {
            Variable::Array(elements) => elements.get(index),
            _ => None,
        }
    }

    /// Number of children (structures) or elements (arrays); 0 for primitives.
    pub fn children_count(&self) -> usize {
        match self {
            Variable::Structure(children) => children.len(),
            Variable::Array(elements) => elements.len(),
            _ => 0,
        }
    }
}

impl Default for Variable {
    fn default() -> Self {
        Variable::Number(0.0)
    }
}

impl From<f64> for Variable {
    #[inline]
    fn from(n: f64) -> Self {
        Variable::Number(n)
    }
}

impl From<bool> for Variable {
    #[inline]
    fn from(b: bool) -> Self {
        Variable::Boolean(b)
    }
}

impl From<&str> for Variable {
    #[inline]
    fn from(s: &str) -> Self {
        Variable::String(SmolStr::new(s))
    }
}

impl From<SmolStr> for Variable {
    #[inline]
    fn from(s: SmolStr) -> Self {
        Variable::String(s)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variable::Number(n) => write!(f, "{}", n),
            Variable::String(s) => f.write_str(s),
            Variable::Boolean(b) => write!(f, "{}", b),
            Variable::Structure(children) => write!(f, "<structure: {} children>", children.len()),
            Variable::Array(elements) => write!(f, "<array: {} elements>", elements.len()),
        }
    }
}
