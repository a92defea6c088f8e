//! Class and namespace wrappers.

use crate::builder::CodeBuilder;

use super::{FieldDecl, Method};

/// Builder for a generated partial class: fields first, then methods
/// separated by blank lines.
#[derive(Debug, Clone)]
pub struct ClassUnit {
    name: String,
    fields: Vec<FieldDecl>,
    methods: Vec<Method>,
}

impl ClassUnit {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldDecl) -> Self {
        self.fields.push(field);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    /// Render the class to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let header = format!("public partial class {}", self.name);
        builder.braced(&header, |b| {
            let b = self.fields.iter().fold(b, |b, f| f.render(b));
            self.methods.iter().enumerate().fold(b, |b, (i, m)| {
                let b = if i > 0 || !self.fields.is_empty() {
                    b.blank()
                } else {
                    b
                };
                m.render(b)
            })
        })
    }
}

/// Optional namespace wrapper around a rendered body.
///
/// A `None` namespace renders the body directly: no wrapper, no dangling
/// braces, matching classes declared in the global namespace.
#[derive(Debug, Clone)]
pub struct Namespace {
    name: Option<String>,
}

impl Namespace {
    pub fn new(name: Option<String>) -> Self {
        Self { name }
    }

    /// Render `f` inside the namespace block, or bare when there is none.
    pub fn render<F>(&self, builder: CodeBuilder, f: F) -> CodeBuilder
    where
        F: FnOnce(CodeBuilder) -> CodeBuilder,
    {
        match &self.name {
            Some(name) => builder.braced(&format!("namespace {}", name), f),
            None => f(builder),
        }
    }
}
