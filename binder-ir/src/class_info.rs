//! Per-class classification record.

use serde::Serialize;

use crate::ComponentType;

/// Everything the emitter needs to know about one qualifying class.
///
/// Built once during classification and consumed once by the emitter.
/// Invariant: `components` is non-empty — classes with no resolvable
/// component requirement are filtered out before a `ClassInfo` exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassInfo {
    /// Class name.
    pub name: String,
    /// Enclosing namespace, `None` for the global namespace.
    pub namespace: Option<String>,
    /// Required component types, in marker declaration order.
    pub components: Vec<ComponentType>,
    /// Whether the class declares the optional lifecycle hook method.
    pub has_hook: bool,
}

impl ClassInfo {
    /// Create a classification record.
    pub fn new(
        name: impl Into<String>,
        namespace: Option<String>,
        components: Vec<ComponentType>,
        has_hook: bool,
    ) -> Self {
        Self {
            name: name.into(),
            namespace,
            components,
            has_hook,
        }
    }

    /// Fully-qualified class name (e.g., "Game.Player").
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}.{}", ns, self.name),
            None => self.name.clone(),
        }
    }

    /// Returns true if the class sits in the global namespace.
    pub fn is_global(&self) -> bool {
        self.namespace.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qualified_name() {
        let info = ClassInfo::new(
            "Player",
            Some("Game".to_string()),
            vec![ComponentType::unqualified("Rigidbody")],
            false,
        );
        assert_eq!(info.qualified_name(), "Game.Player");
        assert!(!info.is_global());
    }

    #[test]
    fn test_qualified_name_global() {
        let info = ClassInfo::new(
            "Player",
            None,
            vec![ComponentType::unqualified("Rigidbody")],
            true,
        );
        assert_eq!(info.qualified_name(), "Player");
        assert!(info.is_global());
    }
}
