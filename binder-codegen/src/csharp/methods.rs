//! C# method builder.

use crate::builder::CodeBuilder;

/// Builder for a zero-parameter `void` method.
///
/// Generated units only ever need parameterless void methods (the
/// initialization override and the injection helper), so the builder does
/// not model parameters or return types.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    modifiers: String,
    statements: Vec<String>,
}

impl Method {
    pub fn new(name: impl Into<String>, modifiers: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: modifiers.into(),
            statements: Vec::new(),
        }
    }

    /// Append a statement line (terminating `;` included by the caller).
    pub fn statement(mut self, statement: impl Into<String>) -> Self {
        self.statements.push(statement.into());
        self
    }

    /// Append a statement only when `condition` holds; nothing is emitted
    /// otherwise, not even a placeholder.
    pub fn statement_if(self, condition: bool, statement: impl Into<String>) -> Self {
        if condition {
            self.statement(statement)
        } else {
            self
        }
    }

    /// Render the method to a CodeBuilder.
    pub fn render(&self, builder: CodeBuilder) -> CodeBuilder {
        let signature = format!("{} void {}()", self.modifiers, self.name);
        builder.braced(&signature, |b| {
            self.statements.iter().fold(b, |b, s| b.line(s))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_with_statements() {
        let code = Method::new("Awake", "protected virtual")
            .statement("InjectComponents();")
            .statement("OnAwake();")
            .render(CodeBuilder::csharp())
            .build();

        assert_eq!(
            code,
            "protected virtual void Awake()\n{\n    InjectComponents();\n    OnAwake();\n}\n"
        );
    }

    #[test]
    fn test_conditional_statement_omitted() {
        let code = Method::new("Awake", "protected virtual")
            .statement("InjectComponents();")
            .statement_if(false, "OnAwake();")
            .render(CodeBuilder::csharp())
            .build();

        assert!(!code.contains("OnAwake"));
    }

    #[test]
    fn test_empty_method_body() {
        let code = Method::new("InjectComponents", "private")
            .render(CodeBuilder::csharp())
            .build();
        assert_eq!(code, "private void InjectComponents()\n{\n}\n");
    }
}
