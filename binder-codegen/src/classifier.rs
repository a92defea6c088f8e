//! Semantic classification of candidate classes.

use binder_host::{ClassDecl, SemanticModel};
use binder_ir::{ClassInfo, ComponentType};

use crate::config::BinderConfig;
use crate::diagnostics::{Diagnostic, Diagnostics};

const STEP: &str = "classify";

/// Decides whether a candidate class qualifies and, if so, extracts its
/// [`ClassInfo`].
///
/// A `None` answer is not an error: classes that lack the designated base
/// type or resolve no component requirement are silently excluded, with
/// warnings on the diagnostic channel where something looked intentional but
/// did not resolve.
#[derive(Debug)]
pub struct Classifier<'a> {
    config: &'a BinderConfig,
}

impl<'a> Classifier<'a> {
    pub fn new(config: &'a BinderConfig) -> Self {
        Self { config }
    }

    /// Classify one candidate class.
    pub fn classify(
        &self,
        class: &ClassDecl,
        model: &dyn SemanticModel,
        diagnostics: &mut Diagnostics,
    ) -> Option<ClassInfo> {
        if !self.derives_from_base(class, model) {
            return None;
        }

        let components = self.collect_components(class, model, diagnostics);
        if components.is_empty() {
            return None;
        }

        let has_hook = class.has_nullary_method(&self.config.hook_method);

        Some(ClassInfo::new(
            class.name.clone(),
            class.namespace.clone(),
            components,
            has_hook,
        ))
    }

    /// Walk the inheritance chain upward, matching each ancestor against the
    /// designated base identity. Tolerates multi-level inheritance; an empty
    /// chain (unknown symbol) simply fails the check.
    fn derives_from_base(&self, class: &ClassDecl, model: &dyn SemanticModel) -> bool {
        model
            .base_chain(class)
            .iter()
            .any(|ancestor| *ancestor == self.config.base_type)
    }

    /// Gather component types from marker attributes in declaration order.
    ///
    /// Each marker contributes at most one component: its first argument,
    /// when that is a `typeof` resolving to a concrete type. Duplicates keep
    /// their first occurrence.
    fn collect_components(
        &self,
        class: &ClassDecl,
        model: &dyn SemanticModel,
        diagnostics: &mut Diagnostics,
    ) -> Vec<ComponentType> {
        let location = qualified_name(class);
        let mut components: Vec<ComponentType> = Vec::new();

        for attr in &class.attributes {
            let is_marker = model
                .attribute_type(attr)
                .is_some_and(|id| id.name == self.config.marker.name);
            if !is_marker {
                continue;
            }

            let resolved = attr
                .first_argument()
                .and_then(|arg| model.resolve_type_argument(arg));

            match resolved {
                Some(component) => {
                    if components.contains(&component) {
                        diagnostics.push(
                            Diagnostic::warning(
                                STEP,
                                format!(
                                    "duplicate component requirement '{}' dropped",
                                    component.display
                                ),
                            )
                            .at(location.clone()),
                        );
                    } else {
                        components.push(component);
                    }
                }
                None => {
                    diagnostics.push(
                        Diagnostic::warning(
                            STEP,
                            "marker argument did not resolve to a type; marker ignored",
                        )
                        .at(location.clone()),
                    );
                }
            }
        }

        components
    }
}

fn qualified_name(class: &ClassDecl) -> String {
    match &class.namespace {
        Some(ns) => format!("{}.{}", ns, class.name),
        None => class.name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use binder_host::fixture::FixtureModel;
    use binder_host::{AttributeArg, AttributeSyntax};
    use binder_ir::TypeId;

    use super::*;

    fn unity_model() -> FixtureModel {
        FixtureModel::new()
            .declare(TypeId::new("MonoBehaviour", "UnityEngine"))
            .declare(TypeId::new("RequireComponent", "UnityEngine"))
            .declare(TypeId::new("Rigidbody", "UnityEngine"))
            .declare(TypeId::new("Collider", "UnityEngine"))
            .declare_extending(TypeId::new("Player", "Game"), "MonoBehaviour")
            .declare_extending(TypeId::new("Wizard", "Game"), "Player")
            .declare(TypeId::global("Loner"))
    }

    fn marker(component: &str) -> AttributeSyntax {
        AttributeSyntax::with_type_of("RequireComponent", component)
    }

    #[test]
    fn test_qualifying_class() {
        let config = BinderConfig::unity();
        let classifier = Classifier::new(&config);
        let mut diagnostics = Diagnostics::new();

        let class = ClassDecl::new("Player")
            .in_namespace("Game")
            .attribute(marker("Rigidbody"))
            .attribute(marker("Collider"))
            .method("OnAwake", 0);

        let info = classifier
            .classify(&class, &unity_model(), &mut diagnostics)
            .expect("Player should qualify");

        assert_eq!(info.name, "Player");
        assert_eq!(info.namespace.as_deref(), Some("Game"));
        assert!(info.has_hook);
        assert_eq!(
            info.components,
            vec![
                ComponentType::new("Rigidbody", "UnityEngine.Rigidbody"),
                ComponentType::new("Collider", "UnityEngine.Collider"),
            ]
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_transitive_base_qualifies() {
        let config = BinderConfig::unity();
        let classifier = Classifier::new(&config);
        let mut diagnostics = Diagnostics::new();

        let class = ClassDecl::new("Wizard")
            .in_namespace("Game")
            .attribute(marker("Rigidbody"));

        let info = classifier.classify(&class, &unity_model(), &mut diagnostics);
        assert!(info.is_some());
    }

    #[test]
    fn test_underived_class_excluded() {
        let config = BinderConfig::unity();
        let classifier = Classifier::new(&config);
        let mut diagnostics = Diagnostics::new();

        let class = ClassDecl::new("Loner").attribute(marker("Rigidbody"));

        assert!(
            classifier
                .classify(&class, &unity_model(), &mut diagnostics)
                .is_none()
        );
    }

    #[test]
    fn test_hook_requires_zero_arity() {
        let config = BinderConfig::unity();
        let classifier = Classifier::new(&config);
        let mut diagnostics = Diagnostics::new();

        let class = ClassDecl::new("Player")
            .in_namespace("Game")
            .attribute(marker("Rigidbody"))
            .method("OnAwake", 2);

        let info = classifier
            .classify(&class, &unity_model(), &mut diagnostics)
            .unwrap();
        assert!(!info.has_hook);
    }

    #[test]
    fn test_unresolvable_marker_skipped_with_warning() {
        let config = BinderConfig::unity();
        let classifier = Classifier::new(&config);
        let mut diagnostics = Diagnostics::new();

        let class = ClassDecl::new("Player")
            .in_namespace("Game")
            .attribute(AttributeSyntax::new("RequireComponent"))
            .attribute(
                AttributeSyntax::new("RequireComponent")
                    .argument(AttributeArg::Other("42".to_string())),
            );

        // Both markers are malformed, so the class is excluded entirely.
        assert!(
            classifier
                .classify(&class, &unity_model(), &mut diagnostics)
                .is_none()
        );
        assert_eq!(diagnostics.len(), 2);
        assert!(diagnostics.has_warnings());
    }

    #[test]
    fn test_partially_resolvable_markers() {
        let config = BinderConfig::unity();
        let classifier = Classifier::new(&config);
        let mut diagnostics = Diagnostics::new();

        let class = ClassDecl::new("Player")
            .in_namespace("Game")
            .attribute(AttributeSyntax::new("RequireComponent"))
            .attribute(marker("Collider"));

        let info = classifier
            .classify(&class, &unity_model(), &mut diagnostics)
            .expect("one resolvable marker is enough");
        assert_eq!(info.components.len(), 1);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_duplicate_components_deduplicated() {
        let config = BinderConfig::unity();
        let classifier = Classifier::new(&config);
        let mut diagnostics = Diagnostics::new();

        let class = ClassDecl::new("Player")
            .in_namespace("Game")
            .attribute(marker("Rigidbody"))
            .attribute(marker("Collider"))
            .attribute(marker("Rigidbody"));

        let info = classifier
            .classify(&class, &unity_model(), &mut diagnostics)
            .unwrap();
        assert_eq!(
            info.components
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>(),
            vec!["Rigidbody", "Collider"]
        );
        assert_eq!(diagnostics.len(), 1);
        let dropped = diagnostics.iter().next().unwrap();
        assert!(dropped.message.contains("UnityEngine.Rigidbody"));
        assert_eq!(dropped.location.as_deref(), Some("Game.Player"));
    }

    #[test]
    fn test_non_marker_attributes_ignored() {
        let config = BinderConfig::unity();
        let classifier = Classifier::new(&config);
        let mut diagnostics = Diagnostics::new();

        // "Obsolete" does not resolve in the fixture; even if it did, its
        // name would not match the marker.
        let class = ClassDecl::new("Player")
            .in_namespace("Game")
            .attribute(AttributeSyntax::new("Obsolete"))
            .attribute(marker("Rigidbody"));

        let info = classifier
            .classify(&class, &unity_model(), &mut diagnostics)
            .unwrap();
        assert_eq!(info.components.len(), 1);
        assert!(diagnostics.is_empty());
    }
}
