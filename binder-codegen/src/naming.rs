//! Naming helpers for generated fields and units.

use binder_ir::ClassInfo;

/// Derive a field name from a component type name: first character
/// lower-cased, remainder untouched (`Rigidbody` → `rigidbody`, `X` → `x`).
pub fn field_name(type_name: &str) -> String {
    let mut chars = type_name.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

/// Name of the generated unit for a class: `<qualified name>.g.<ext>`.
///
/// Qualifying by the full namespace path keeps units collision-free when two
/// classes share a simple name in different namespaces.
pub fn unit_name(info: &ClassInfo, extension: &str) -> String {
    format!("{}.g.{}", info.qualified_name(), extension)
}
