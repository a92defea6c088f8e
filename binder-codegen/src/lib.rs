//! Scan-classify-render pipeline for the Binder component-binding generator.
//!
//! Binder inspects class declarations, keeps the ones annotated with a
//! component-requirement marker that derive (possibly transitively) from a
//! designated base behavior type, and renders one generated partial-class
//! unit per match: a typed field per required component plus an
//! initialization override that populates each field and optionally calls a
//! reserved-name hook.
//!
//! # Architecture
//!
//! ```text
//! SyntaxSource → Scanner (filter) → Classifier (ClassInfo) → Emitter → SourceSink
//! ```
//!
//! The host supplies the collaborators on both ends (see `binder-host`); the
//! pipeline itself is a stateless map with no I/O of its own.
//!
//! # Example
//!
//! ```
//! use binder_codegen::{BinderConfig, Generator};
//! use binder_host::fixture::{FixtureCompilation, FixtureModel};
//! use binder_host::{AttributeSyntax, ClassDecl, MemorySink};
//! use binder_ir::TypeId;
//!
//! let model = FixtureModel::new()
//!     .declare(TypeId::new("MonoBehaviour", "UnityEngine"))
//!     .declare(TypeId::new("RequireComponent", "UnityEngine"))
//!     .declare(TypeId::new("Rigidbody", "UnityEngine"))
//!     .declare_extending(TypeId::new("Player", "Game"), "MonoBehaviour");
//!
//! let source = FixtureCompilation::new().class(
//!     ClassDecl::new("Player")
//!         .in_namespace("Game")
//!         .attribute(AttributeSyntax::with_type_of("RequireComponent", "Rigidbody")),
//! );
//!
//! let mut sink = MemorySink::new();
//! let result = Generator::new(BinderConfig::unity())
//!     .run(&source, &model, &mut sink)
//!     .unwrap();
//! assert_eq!(result.generated, vec!["Game.Player.g.cs"]);
//! ```

mod classifier;
mod config;
mod diagnostics;
mod emitter;
mod generator;
mod naming;
mod scanner;

pub mod builder;
pub mod csharp;

pub use binder_ir::{ClassInfo, ComponentType, TypeId};
pub use classifier::Classifier;
pub use config::BinderConfig;
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use emitter::Emitter;
pub use generator::{Generator, RunResult};
pub use naming::{field_name, unit_name};
pub use scanner::Scanner;
