//! Scope chains — resolving variable names across nested scopes.
//!
//! A [`ScopeChain`] is an ordered list of borrowed
//! [`VariablesContainer`](crate::VariablesContainer)s, most local first.
//! Lookups walk the list in order and stop at the first container defining
//! the name, so inner scopes shadow outer ones:
//!
//! ```text
//! layout variables   score = 10, lives = 3    ← searched first
//! project variables  score = 0                ← shadowed for "score"
//! ```

mod chain;

pub use chain::ScopeChain;
