//! Host collaborator interfaces for the Binder component-binding generator.
//!
//! Binder never parses source text or talks to a compiler directly. A host
//! embedding the pipeline provides three collaborators:
//!
//! - [`SyntaxSource`] — the class declarations of one compilation unit,
//!   expressed with the concrete syntax node structs in [`syntax`]
//! - [`SemanticModel`] — resolution queries over those nodes (base-type
//!   chain, attribute types, `typeof` argument types)
//! - [`SourceSink`] — accepts generated units by name; [`MemorySink`] and
//!   [`FsSink`] cover the common cases
//!
//! The [`fixture`] module (feature `testing`, always on in tests) provides
//! in-memory implementations of the input collaborators so the pipeline can
//! be driven without a real compiler behind it.

pub mod syntax;

mod semantic;
mod sink;

#[cfg(any(test, feature = "testing"))]
pub mod fixture;

pub use semantic::SemanticModel;
pub use sink::{FsSink, MemorySink, SinkError, SourceSink};
pub use syntax::{AttributeArg, AttributeSyntax, ClassDecl, MethodDecl, SyntaxSource};
