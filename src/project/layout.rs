//! Layouts (scenes) and their scene variables.

use smol_str::SmolStr;

use crate::base::VariablesContainer;

/// A layout of a project, owning the scene-level variables.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    name: SmolStr,
    variables: VariablesContainer,
}

impl Layout {
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            variables: VariablesContainer::new(),
        }
    }

    /// Create a layout with an existing set of scene variables.
    pub fn with_variables(name: impl Into<SmolStr>, variables: VariablesContainer) -> Self {
        Self {
            name: name.into(),
            variables,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<SmolStr>) {
        self.name = name.into();
    }

    /// The scene variables.
    pub fn variables(&self) -> &VariablesContainer {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut VariablesContainer {
        &mut self.variables
    }
}
