//! Pipeline configuration.

use binder_ir::TypeId;

/// Identities and names the pipeline keys on.
///
/// The defaults match the Unity shape this generator grew out of:
/// `[RequireComponent(typeof(T))]` classes deriving from
/// `UnityEngine.MonoBehaviour`, with an optional `OnAwake` hook invoked from
/// a generated `Awake` override.
#[derive(Debug, Clone)]
pub struct BinderConfig {
    /// The component-requirement marker attribute.
    pub marker: TypeId,
    /// The designated base behavior type a class must derive from.
    pub base_type: TypeId,
    /// Reserved name of the optional zero-argument lifecycle hook.
    pub hook_method: String,
    /// Name of the initialization method the generated class overrides.
    pub init_method: String,
    /// Name of the generated private injection helper.
    pub helper_method: String,
    /// Name of the component lookup invoked per field (`lookup<T>()`).
    pub lookup_method: String,
    /// Using directives emitted at the top of every generated unit.
    pub usings: Vec<String>,
    /// File extension of generated units (`cs` → `Player.g.cs`).
    pub extension: String,
}

impl BinderConfig {
    /// The Unity configuration.
    pub fn unity() -> Self {
        Self {
            marker: TypeId::new("RequireComponent", "UnityEngine"),
            base_type: TypeId::new("MonoBehaviour", "UnityEngine"),
            hook_method: "OnAwake".to_string(),
            init_method: "Awake".to_string(),
            helper_method: "InjectComponents".to_string(),
            lookup_method: "GetComponent".to_string(),
            usings: vec!["UnityEngine".to_string()],
            extension: "cs".to_string(),
        }
    }

    /// Override the marker attribute.
    pub fn with_marker(mut self, marker: TypeId) -> Self {
        self.marker = marker;
        self
    }

    /// Override the designated base type.
    pub fn with_base_type(mut self, base_type: TypeId) -> Self {
        self.base_type = base_type;
        self
    }

    /// Override the hook method name.
    pub fn with_hook_method(mut self, name: impl Into<String>) -> Self {
        self.hook_method = name.into();
        self
    }
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self::unity()
    }
}
