//! # gdscope-base
//!
//! Scoped variable resolution for game projects.
//!
//! A [`ScopeChain`] borrows an ordered list of [`VariablesContainer`]s and
//! answers "is `x` visible from here?" and "give me `x`", with inner scopes
//! shadowing outer ones.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! scope   → ScopeChain: ordered, borrowed scopes + lookups
//!   ↓
//! project → Project and Layout, the owners of the containers
//!   ↓
//! base    → Primitives (Variable, VariablesContainer, ScopeError)
//! ```

/// Foundation types: variables, containers, errors
pub mod base;

/// Projects and layouts owning the variable containers
pub mod project;

/// Scope chains and name resolution
pub mod scope;

pub use base::{ScopeError, Variable, VariableKind, VariableMap, VariablesContainer};
pub use project::{Layout, Project};
pub use scope::ScopeChain;
