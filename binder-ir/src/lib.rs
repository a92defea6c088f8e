//! Data model for the Binder component-binding generator.
//!
//! This crate provides the unified type definitions shared across the Binder
//! pipeline. They sit between the host-provided syntax/semantic collaborators
//! and the code emitter:
//!
//! ```text
//! host syntax model → classification (ClassInfo) → emission
//! ```
//!
//! The types are designed to be:
//! - Host-agnostic (no dependency on any particular semantic model)
//! - Immutable once built (a `ClassInfo` is produced once per qualifying
//!   class and consumed once by the emitter)
//! - Self-contained (no dependencies beyond serde)

mod class_info;
mod types;

pub use class_info::ClassInfo;
pub use types::{ComponentType, TypeId};
