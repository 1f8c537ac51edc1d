//! Projects and layouts — the owners of the variable containers.
//!
//! A [`Project`] holds the global variables and its [`Layout`]s; each layout
//! holds its own scene variables. A [`ScopeChain`](crate::ScopeChain) only
//! borrows these containers.

mod layout;

pub use layout::Layout;

use smol_str::SmolStr;

use crate::base::VariablesContainer;

/// A game project: global variables plus the list of layouts.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct Project {
    name: SmolStr,
    variables: VariablesContainer,
    layouts: Vec<Layout>,
}

impl Project {
    /// Create a new project with no variables and no layouts.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            variables: VariablesContainer::new(),
            layouts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The global (project-wide) variables.
    pub fn variables(&self) -> &VariablesContainer {
        &self.variables
    }

    pub fn variables_mut(&mut self) -> &mut VariablesContainer {
        &mut self.variables
    }

    /// Add a layout, replacing (in place) any layout with the same name.
    pub fn insert_layout(&mut self, layout: Layout) -> Option<Layout> {
        match self.layouts.iter_mut().find(|l| l.name() == layout.name()) {
            Some(existing) => Some(std::mem::replace(existing, layout)),
            None => {
                self.layouts.push(layout);
                None
            }
        }
    }

    /// Look up a layout by name.
    pub fn layout(&self, name: &str) -> Option<&Layout> {
        self.layouts.iter().find(|l| l.name() == name)
    }

    pub fn layout_mut(&mut self, name: &str) -> Option<&mut Layout> {
        self.layouts.iter_mut().find(|l| l.name() == name)
    }

    /// Check if a layout with this name exists.
    pub fn has_layout(&self, name: &str) -> bool {
        self.layout(name).is_some()
    }

    /// Check if `layout` is one of this project's layouts (same object, not same name).
    pub fn contains_layout(&self, layout: &Layout) -> bool {
        self.layouts.iter().any(|l| std::ptr::eq(l, layout))
    }

    /// Remove a layout by name, keeping the order of the others.
    pub fn remove_layout(&mut self, name: &str) -> Option<Layout> {
        let index = self.layouts.iter().position(|l| l.name() == name)?;
        Some(self.layouts.remove(index))
    }

    /// Iterate over layouts in project order.
    pub fn layouts(&self) -> impl Iterator<Item = &Layout> + '_ {
        self.layouts.iter()
    }

    pub fn layouts_count(&self) -> usize {
        self.layouts.len()
    }
}
