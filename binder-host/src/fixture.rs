//! In-memory input collaborators.
//!
//! Only available with the `testing` feature or during tests. The fixture
//! model is a declared-type table with base edges: enough semantics to drive
//! the pipeline end to end without a real compiler behind it.

use binder_ir::{ComponentType, TypeId};
use indexmap::IndexMap;

use crate::semantic::SemanticModel;
use crate::syntax::{AttributeArg, AttributeSyntax, ClassDecl, SyntaxSource};

/// A compilation unit holding class declarations directly.
#[derive(Debug, Default)]
pub struct FixtureCompilation {
    classes: Vec<ClassDecl>,
}

impl FixtureCompilation {
    /// Create an empty compilation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a class declaration.
    pub fn class(mut self, class: ClassDecl) -> Self {
        self.classes.push(class);
        self
    }
}

impl SyntaxSource for FixtureCompilation {
    fn classes(&self) -> &[ClassDecl] {
        &self.classes
    }
}

#[derive(Debug)]
struct FixtureType {
    id: TypeId,
    base: Option<String>,
}

/// A semantic model backed by a declared-type table.
///
/// Types are keyed by simple name. Base edges name the simple name of the
/// parent type, letting tests build multi-level inheritance chains.
#[derive(Debug, Default)]
pub struct FixtureModel {
    types: IndexMap<String, FixtureType>,
}

impl FixtureModel {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a type with no base.
    pub fn declare(mut self, id: TypeId) -> Self {
        self.types
            .insert(id.name.clone(), FixtureType { id, base: None });
        self
    }

    /// Declare a type extending another declared type (by simple name).
    pub fn declare_extending(mut self, id: TypeId, base: impl Into<String>) -> Self {
        self.types.insert(
            id.name.clone(),
            FixtureType {
                id,
                base: Some(base.into()),
            },
        );
        self
    }

    fn lookup(&self, type_expr: &str) -> Option<&FixtureType> {
        // Accept either a simple name or a dotted expression whose last
        // segment is the declared simple name.
        self.types.get(type_expr).or_else(|| {
            let simple = type_expr.rsplit('.').next()?;
            let declared = self.types.get(simple)?;
            (declared.id.display() == type_expr).then_some(declared)
        })
    }
}

impl SemanticModel for FixtureModel {
    fn base_chain(&self, class: &ClassDecl) -> Vec<TypeId> {
        let mut chain = Vec::new();
        let mut seen = Vec::new();
        let mut current = self
            .types
            .get(&class.name)
            .and_then(|t| t.base.as_deref());

        while let Some(name) = current {
            if seen.contains(&name) {
                break;
            }
            seen.push(name);
            match self.types.get(name) {
                Some(ty) => {
                    chain.push(ty.id.clone());
                    current = ty.base.as_deref();
                }
                None => break,
            }
        }
        chain
    }

    fn attribute_type(&self, attribute: &AttributeSyntax) -> Option<TypeId> {
        self.lookup(&attribute.name).map(|t| t.id.clone())
    }

    fn resolve_type_argument(&self, argument: &AttributeArg) -> Option<ComponentType> {
        match argument {
            AttributeArg::TypeOf(expr) => self.lookup(expr).map(|t| ComponentType::from(&t.id)),
            AttributeArg::Other(_) => None,
        }
    }
}
