//! Semantic resolution queries provided by the host.

use binder_ir::{ComponentType, TypeId};

use crate::syntax::{AttributeArg, AttributeSyntax, ClassDecl};

/// Resolution queries over syntax nodes.
///
/// This is the seam that keeps the pipeline independent of any particular
/// compiler's semantic model. All three queries are total: an unresolvable
/// node answers `None` (or an empty chain) and the pipeline degrades by
/// omission, never by failing.
pub trait SemanticModel {
    /// The base-type chain of a class, nearest ancestor first.
    ///
    /// The declared class itself is not included. An unknown class resolves
    /// to an empty chain.
    fn base_chain(&self, class: &ClassDecl) -> Vec<TypeId>;

    /// The resolved type of an attribute, if the attribute name binds to one.
    fn attribute_type(&self, attribute: &AttributeSyntax) -> Option<TypeId>;

    /// The component type named by a `typeof(...)` attribute argument.
    ///
    /// Non-`typeof` arguments and unresolvable type expressions answer
    /// `None`.
    fn resolve_type_argument(&self, argument: &AttributeArg) -> Option<ComponentType>;
}
