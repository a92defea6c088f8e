//! Type identities and component references.

use serde::Serialize;

/// Identity of a named type: simple name plus containing namespace.
///
/// Used for the designated base behavior type and the component-requirement
/// marker attribute. Two `TypeId`s are the same type when both the simple
/// name and the namespace match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TypeId {
    /// Simple type name (e.g., "MonoBehaviour").
    pub name: String,
    /// Containing namespace, `None` for the global namespace.
    pub namespace: Option<String>,
}

impl TypeId {
    /// Create a type identity inside a namespace.
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: Some(namespace.into()),
        }
    }

    /// Create a type identity in the global namespace.
    pub fn global(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
        }
    }

    /// Fully-qualified display form (e.g., "UnityEngine.MonoBehaviour").
    pub fn display(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}.{}", ns, self.name),
            None => self.name.clone(),
        }
    }
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// A resolved component type extracted from a requirement marker.
///
/// `name` drives field naming (first character lower-cased), `display` is the
/// fully-qualified form used for the emitted field type and component lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentType {
    /// Simple type name (e.g., "Rigidbody").
    pub name: String,
    /// Fully-qualified display form (e.g., "UnityEngine.Rigidbody").
    pub display: String,
}

impl ComponentType {
    /// Create a component reference from its simple and display names.
    pub fn new(name: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display: display.into(),
        }
    }

    /// Create a component reference whose display form equals its name.
    pub fn unqualified(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            display: name.clone(),
            name,
        }
    }
}

impl From<&TypeId> for ComponentType {
    fn from(id: &TypeId) -> Self {
        Self {
            name: id.name.clone(),
            display: id.display(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_id_display() {
        let id = TypeId::new("MonoBehaviour", "UnityEngine");
        assert_eq!(id.display(), "UnityEngine.MonoBehaviour");

        let global = TypeId::global("Player");
        assert_eq!(global.display(), "Player");
    }

    #[test]
    fn test_type_id_equality() {
        assert_eq!(
            TypeId::new("Collider", "UnityEngine"),
            TypeId::new("Collider", "UnityEngine")
        );
        assert_ne!(
            TypeId::new("Collider", "UnityEngine"),
            TypeId::global("Collider")
        );
    }

    #[test]
    fn test_component_from_type_id() {
        let component = ComponentType::from(&TypeId::new("Rigidbody", "UnityEngine"));
        assert_eq!(component.name, "Rigidbody");
        assert_eq!(component.display, "UnityEngine.Rigidbody");
    }
}
