//! Foundation types for scoped variable resolution.
//!
//! This module provides the values the scope chain resolves to:
//! - [`Variable`], [`VariableKind`] - Typed variable values
//! - [`VariablesContainer`] - Ordered name → variable mapping (one scope)
//! - [`ScopeError`] - Errors of the strict lookup and rename APIs
//!
//! This module has NO dependencies on other gdscope modules.

mod container;
mod error;
mod variable;

pub use container::{VariableMap, VariablesContainer};
pub use error::ScopeError;
pub use variable::{Variable, VariableKind};
