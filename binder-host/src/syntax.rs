//! Concrete syntax nodes handed over by the host.
//!
//! These structs are a deliberately small facade over whatever syntax tree
//! the host actually owns: just enough structure for the scan and classify
//! steps. Hosts map their own tree into these nodes; the pipeline never
//! reaches past them.

/// A class declaration in a compilation unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    /// Class name.
    pub name: String,
    /// Enclosing namespace as a dotted path, `None` for the global namespace.
    pub namespace: Option<String>,
    /// Attributes in declaration order.
    pub attributes: Vec<AttributeSyntax>,
    /// Declared methods.
    pub methods: Vec<MethodDecl>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            attributes: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Place the class inside a namespace (dotted path, e.g. "Foo.Bar").
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Append an attribute.
    pub fn attribute(mut self, attribute: AttributeSyntax) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Append a method declaration.
    pub fn method(mut self, name: impl Into<String>, arity: usize) -> Self {
        self.methods.push(MethodDecl {
            name: name.into(),
            arity,
        });
        self
    }

    /// Returns true if the class declares a zero-parameter method with the
    /// given name.
    pub fn has_nullary_method(&self, name: &str) -> bool {
        self.methods.iter().any(|m| m.name == name && m.arity == 0)
    }
}

/// An attribute applied to a class declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSyntax {
    /// Syntactic attribute name as written in source.
    pub name: String,
    /// Attribute arguments in declaration order.
    pub arguments: Vec<AttributeArg>,
}

impl AttributeSyntax {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: Vec::new(),
        }
    }

    /// Attribute with a single `typeof(...)` argument.
    pub fn with_type_of(name: impl Into<String>, type_expr: impl Into<String>) -> Self {
        Self::new(name).argument(AttributeArg::TypeOf(type_expr.into()))
    }

    /// Append an argument.
    pub fn argument(mut self, argument: AttributeArg) -> Self {
        self.arguments.push(argument);
        self
    }

    /// The first argument, if any.
    pub fn first_argument(&self) -> Option<&AttributeArg> {
        self.arguments.first()
    }
}

/// One attribute argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeArg {
    /// A `typeof(T)` expression; the payload is the syntactic type expression.
    TypeOf(String),
    /// Any other expression, kept verbatim. Never contributes a component.
    Other(String),
}

/// A method declaration, reduced to what hook detection needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDecl {
    /// Method name.
    pub name: String,
    /// Number of declared parameters.
    pub arity: usize,
}

/// The class declarations of one compilation unit.
///
/// The input collaborator: hosts implement this over their parsed tree. The
/// pipeline runs its candidate predicate over every declaration yielded here.
pub trait SyntaxSource {
    /// All class declarations, in source order.
    fn classes(&self) -> &[ClassDecl];
}
