//! Errors for strict variable lookups and container edits.

use smol_str::SmolStr;

/// Error raised by the strict (non-lenient) APIs.
///
/// The lenient [`ScopeChain::get`](crate::ScopeChain::get) never produces one;
/// it falls back to [`Variable::bad`](crate::Variable::bad) instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScopeError {
    /// No visible container defines the variable.
    #[error("variable '{0}' not found")]
    VariableNotFound(SmolStr),

    /// A rename target is already used in the same container.
    #[error("a variable named '{0}' already exists")]
    NameTaken(SmolStr),

    /// The project has no layout with this name.
    #[error("unknown layout '{0}'")]
    UnknownLayout(SmolStr),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ScopeError::VariableNotFound("gold".into()).to_string(),
            "variable 'gold' not found"
        );
        assert_eq!(
            ScopeError::UnknownLayout("Level 2".into()).to_string(),
            "unknown layout 'Level 2'"
        );
    }
}
