//! Syntactic pre-filter over class declarations.

use binder_host::ClassDecl;

use crate::config::BinderConfig;

/// Fast-reject predicate run over every declaration in a compilation unit.
///
/// Purely syntactic: a class is a candidate when any attribute is written
/// with the marker's simple name. No type resolution happens here — that is
/// the classifier's job — so false positives are fine and cheapness matters.
#[derive(Debug)]
pub struct Scanner<'a> {
    config: &'a BinderConfig,
}

impl<'a> Scanner<'a> {
    pub fn new(config: &'a BinderConfig) -> Self {
        Self { config }
    }

    /// Returns true if the class carries an attribute spelled like the
    /// marker.
    pub fn is_candidate(&self, class: &ClassDecl) -> bool {
        class
            .attributes
            .iter()
            .any(|attr| attr.name == self.config.marker.name)
    }
}
