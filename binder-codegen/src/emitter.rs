//! Rendering of generated units.

use binder_ir::ClassInfo;

use crate::builder::CodeBuilder;
use crate::config::BinderConfig;
use crate::csharp::{ClassUnit, FieldDecl, Method, Namespace};
use crate::naming::field_name;

/// Renders one generated compilation unit per qualifying class.
///
/// Pure and deterministic: the same `ClassInfo` always renders to the same
/// bytes. The unit declares one protected field per component, an override
/// of the initialization method that calls the private injection helper and
/// then the hook (when present), and wraps everything in the source class's
/// namespace (omitted for global-scope classes).
#[derive(Debug)]
pub struct Emitter<'a> {
    config: &'a BinderConfig,
}

impl<'a> Emitter<'a> {
    pub fn new(config: &'a BinderConfig) -> Self {
        Self { config }
    }

    /// Render the generated unit for one class.
    pub fn render(&self, info: &ClassInfo) -> String {
        let builder = CodeBuilder::csharp().comment("<auto-generated>");

        let builder = builder
            .when(!self.config.usings.is_empty(), |b| {
                b.blank()
                    .each(&self.config.usings, |b, using| {
                        b.line(&format!("using {};", using))
                    })
            })
            .blank();

        let class = self.build_class(info);
        Namespace::new(info.namespace.clone())
            .render(builder, |b| class.render(b))
            .build()
    }

    fn build_class(&self, info: &ClassInfo) -> ClassUnit {
        let mut class = ClassUnit::new(&info.name);

        for component in &info.components {
            class = class.field(FieldDecl::protected(
                &component.display,
                field_name(&component.name),
            ));
        }

        let init = Method::new(&self.config.init_method, "protected virtual")
            .statement(format!("{}();", self.config.helper_method))
            .statement_if(info.has_hook, format!("{}();", self.config.hook_method));

        let helper = info.components.iter().fold(
            Method::new(&self.config.helper_method, "private"),
            |helper, component| {
                helper.statement(format!(
                    "{} = {}<{}>();",
                    field_name(&component.name),
                    self.config.lookup_method,
                    component.display
                ))
            },
        );

        class.method(init).method(helper)
    }
}

#[cfg(test)]
mod tests {
    use binder_ir::ComponentType;

    use super::*;

    fn player_info() -> ClassInfo {
        ClassInfo::new(
            "Player",
            Some("Game".to_string()),
            vec![
                ComponentType::new("Rigidbody", "UnityEngine.Rigidbody"),
                ComponentType::new("Collider", "UnityEngine.Collider"),
            ],
            true,
        )
    }

    #[test]
    fn test_render_namespaced_class_with_hook() {
        let config = BinderConfig::unity();
        let unit = Emitter::new(&config).render(&player_info());

        let expected = "\
// <auto-generated>

using UnityEngine;

namespace Game
{
    public partial class Player
    {
        protected UnityEngine.Rigidbody rigidbody;
        protected UnityEngine.Collider collider;

        protected virtual void Awake()
        {
            InjectComponents();
            OnAwake();
        }

        private void InjectComponents()
        {
            rigidbody = GetComponent<UnityEngine.Rigidbody>();
            collider = GetComponent<UnityEngine.Collider>();
        }
    }
}
";
        assert_eq!(unit, expected);
    }

    #[test]
    fn test_render_global_class_without_hook() {
        let config = BinderConfig::unity();
        let info = ClassInfo::new(
            "Loner",
            None,
            vec![ComponentType::new("Rigidbody", "UnityEngine.Rigidbody")],
            false,
        );
        let unit = Emitter::new(&config).render(&info);

        let expected = "\
// <auto-generated>

using UnityEngine;

public partial class Loner
{
    protected UnityEngine.Rigidbody rigidbody;

    protected virtual void Awake()
    {
        InjectComponents();
    }

    private void InjectComponents()
    {
        rigidbody = GetComponent<UnityEngine.Rigidbody>();
    }
}
";
        assert_eq!(unit, expected);
        // No dangling wrapper braces and no hook call-through
        assert!(!unit.contains("namespace"));
        assert!(!unit.contains("OnAwake"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = BinderConfig::unity();
        let emitter = Emitter::new(&config);
        let info = player_info();
        assert_eq!(emitter.render(&info), emitter.render(&info));
    }

    #[test]
    fn test_field_order_follows_component_order() {
        let config = BinderConfig::unity();
        let unit = Emitter::new(&config).render(&player_info());

        let rigidbody = unit.find("protected UnityEngine.Rigidbody rigidbody;").unwrap();
        let collider = unit.find("protected UnityEngine.Collider collider;").unwrap();
        assert!(rigidbody < collider);

        let assign_rigidbody = unit.find("rigidbody = GetComponent").unwrap();
        let assign_collider = unit.find("collider = GetComponent").unwrap();
        assert!(assign_rigidbody < assign_collider);
    }
}
