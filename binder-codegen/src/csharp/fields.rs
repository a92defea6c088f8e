//! C# field declaration builder.

use crate::builder::CodeBuilder;

/// A field declaration in a generated class.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub modifier: String,
    pub ty: String,
    pub name: String,
}

impl FieldDecl {
    /// A `protected` field, the visibility used for generated component
    /// fields so subclasses can reach them.
    pub fn protected(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            modifier: "protected".to_string(),
            ty: ty.into(),
            name: name.into(),
        }
    }

    /// Render the declaration to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        builder.line(&format!("{} {} {};", self.modifier, self.ty, self.name))
    }
}
