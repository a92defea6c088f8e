//! Typed C# emission primitives.
//!
//! The emitter composes these instead of interpolating raw template strings:
//! each node knows how to render itself through a [`CodeBuilder`], which
//! keeps the output deterministic and the pieces testable in isolation.
//!
//! [`CodeBuilder`]: crate::builder::CodeBuilder

mod fields;
mod methods;
mod units;

pub use fields::FieldDecl;
pub use methods::Method;
pub use units::{ClassUnit, Namespace};
