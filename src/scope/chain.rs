//! The scope chain and its lookups.

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

use crate::base::{ScopeError, Variable, VariablesContainer};
use crate::project::{Layout, Project};

/// An ordered, borrowed list of variable containers.
///
/// The first container defining a name wins. The chain never owns its
/// containers: the `'a` lifetime keeps every borrowed container alive (and
/// unmodified) for as long as the chain exists.
///
/// Chains are built by the factories ([`ScopeChain::for_project_and_layout`],
/// [`ScopeChain::empty`]) and are read-only afterwards.
///
/// A chain cannot outlive the project it was built from:
///
/// ```compile_fail
/// use gdscope::{Layout, Project, ScopeChain};
///
/// let chain = {
///     let mut project = Project::new("Platformer");
///     project.insert_layout(Layout::new("Level 1"));
///     ScopeChain::for_project_and_layout_named(&project, "Level 1").unwrap()
/// };
/// assert!(!chain.has("score"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScopeChain<'a> {
    /// Containers in lookup order (most local first).
    containers: Vec<&'a VariablesContainer>,
}

impl<'a> ScopeChain<'a> {
    /// Build the chain for a layout of a project: layout variables, then
    /// project variables.
    ///
    /// `layout` is expected to belong to `project`; this is not enforced.
    pub fn for_project_and_layout(project: &'a Project, layout: &'a Layout) -> Self {
        if !project.contains_layout(layout) {
            tracing::debug!(
                "[SCOPE] layout '{}' is not part of project '{}'",
                layout.name(),
                project.name()
            );
        }

        let mut chain = Self::empty();
        chain.push(layout.variables());
        chain.push(project.variables());

        tracing::debug!(
            "[SCOPE] built chain for project '{}' / layout '{}' ({} containers)",
            project.name(),
            layout.name(),
            chain.len()
        );
        chain
    }

    /// Like [`ScopeChain::for_project_and_layout`], looking the layout up by name.
    pub fn for_project_and_layout_named(project: &'a Project, layout_name: &str) -> Result<Self, ScopeError> {
        let layout = project
            .layout(layout_name)
            .ok_or_else(|| ScopeError::UnknownLayout(SmolStr::new(layout_name)))?;
        Ok(Self::for_project_and_layout(project, layout))
    }

    /// A chain with no containers: nothing is visible.
    pub fn empty() -> Self {
        Self { containers: Vec::new() }
    }

    /// Append a container with the lowest precedence so far.
    pub(crate) fn push(&mut self, container: &'a VariablesContainer) {
        self.containers.push(container);
    }

    /// Check if `name` is defined in any container of the chain.
    pub fn has(&self, name: &str) -> bool {
        self.containers.iter().any(|c| c.has(name))
    }

    /// Get the variable called `name` from the first container defining it.
    ///
    /// Callers should check [`ScopeChain::has`] first. For an unknown name this
    /// returns the shared [`Variable::bad`] sentinel instead of failing.
    pub fn get(&self, name: &str) -> &'a Variable {
        match self.find(name) {
            Some(variable) => variable,
            None => {
                tracing::warn!(
                    "[SCOPE] '{}' not found in any of {} containers, using bad variable",
                    name,
                    self.len()
                );
                Variable::bad()
            }
        }
    }

    /// Get the variable called `name`, or `None` if no container defines it.
    pub fn find(&self, name: &str) -> Option<&'a Variable> {
        self.find_with_container(name).map(|(_, variable)| variable)
    }

    /// Get the variable called `name`, failing with
    /// [`ScopeError::VariableNotFound`] if no container defines it.
    pub fn lookup(&self, name: &str) -> Result<&'a Variable, ScopeError> {
        self.find(name)
            .ok_or_else(|| ScopeError::VariableNotFound(SmolStr::new(name)))
    }

    /// Get the variable called `name` along with the container it resolved in.
    pub fn find_with_container(&self, name: &str) -> Option<(&'a VariablesContainer, &'a Variable)> {
        self.containers.iter().enumerate().find_map(|(depth, &container)| {
            let variable = container.get(name)?;
            tracing::trace!("[SCOPE] resolved '{}' at depth {}", name, depth);
            Some((container, variable))
        })
    }

    /// Check if this exact container (by identity, not contents) is part of the chain.
    pub fn has_container(&self, container: &VariablesContainer) -> bool {
        self.containers.iter().any(|&c| std::ptr::eq(c, container))
    }

    /// Iterate over the containers in lookup order.
    pub fn containers(&self) -> impl Iterator<Item = &'a VariablesContainer> + '_ {
        self.containers.iter().copied()
    }

    /// All names visible through the chain, each once, most local scope first.
    pub fn visible_names(&self) -> Vec<&'a str> {
        let mut names: IndexSet<&'a str, FxBuildHasher> = IndexSet::default();
        for &container in &self.containers {
            names.extend(container.names());
        }
        names.into_iter().collect()
    }

    /// Get the number of containers.
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Check if the chain has no containers.
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_project() -> Project {
        let mut project = Project::new("Platformer");
        project.variables_mut().insert("score", 0.0);
        project.variables_mut().insert("music", true);

        let layout = Layout::with_variables(
            "Level 1",
            VariablesContainer::new().with("score", 10.0).with("lives", 3.0),
        );
        project.insert_layout(layout);
        project
    }

    #[test]
    fn test_empty_chain() {
        let chain = ScopeChain::empty();

        assert!(chain.is_empty());
        assert!(!chain.has("score"));
        assert!(!chain.has(""));
        assert!(chain.find("score").is_none());
        assert!(chain.get("score").is_bad());
    }

    #[test]
    fn test_default_is_empty() {
        assert!(ScopeChain::default().is_empty());
    }

    #[test]
    fn test_project_and_layout_order() {
        let project = make_project();
        let layout = project.layout("Level 1").unwrap();
        let chain = ScopeChain::for_project_and_layout(&project, layout);

        assert_eq!(chain.len(), 2);
        let order: Vec<_> = chain.containers().collect();
        assert!(std::ptr::eq(order[0], layout.variables()));
        assert!(std::ptr::eq(order[1], project.variables()));
    }

    #[test]
    fn test_layout_shadows_project() {
        let project = make_project();
        let layout = project.layout("Level 1").unwrap();
        let chain = ScopeChain::for_project_and_layout(&project, layout);

        assert_eq!(chain.get("score").as_number(), Some(10.0));
        assert_eq!(chain.get("lives").as_number(), Some(3.0));
        assert_eq!(chain.get("music").as_bool(), Some(true));
        assert!(!chain.has("gold"));
    }

    #[test]
    fn test_find_with_container() {
        let project = make_project();
        let layout = project.layout("Level 1").unwrap();
        let chain = ScopeChain::for_project_and_layout(&project, layout);

        let (container, _) = chain.find_with_container("score").unwrap();
        assert!(std::ptr::eq(container, layout.variables()));

        let (container, _) = chain.find_with_container("music").unwrap();
        assert!(std::ptr::eq(container, project.variables()));

        assert!(chain.find_with_container("gold").is_none());
    }

    #[test]
    fn test_strict_lookup() {
        let project = make_project();
        let chain = ScopeChain::for_project_and_layout_named(&project, "Level 1").unwrap();

        assert_eq!(chain.lookup("lives").map(|v| v.as_number()), Ok(Some(3.0)));
        assert_eq!(
            chain.lookup("gold"),
            Err(ScopeError::VariableNotFound("gold".into()))
        );
    }

    #[test]
    fn test_named_factory_unknown_layout() {
        let project = make_project();
        let result = ScopeChain::for_project_and_layout_named(&project, "Level 9");

        assert_eq!(result.err(), Some(ScopeError::UnknownLayout("Level 9".into())));
    }

    #[test]
    fn test_has_container_identity() {
        let project = make_project();
        let layout = project.layout("Level 1").unwrap();
        let chain = ScopeChain::for_project_and_layout(&project, layout);

        let twin = layout.variables().clone();
        assert!(chain.has_container(layout.variables()));
        assert!(chain.has_container(project.variables()));
        assert!(!chain.has_container(&twin));
    }

    #[test]
    fn test_visible_names() {
        let project = make_project();
        let layout = project.layout("Level 1").unwrap();
        let chain = ScopeChain::for_project_and_layout(&project, layout);

        assert_eq!(chain.visible_names(), vec!["score", "lives", "music"]);
        assert!(ScopeChain::empty().visible_names().is_empty());
    }

    #[test]
    fn test_push_appends_lowest_precedence() {
        let local = VariablesContainer::new().with("x", 1.0);
        let outer = VariablesContainer::new().with("x", 2.0).with("y", 3.0);

        let mut chain = ScopeChain::empty();
        chain.push(&local);
        chain.push(&outer);

        assert_eq!(chain.get("x").as_number(), Some(1.0));
        assert_eq!(chain.get("y").as_number(), Some(3.0));
    }

    #[test]
    fn test_chain_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScopeChain<'static>>();
    }
}
