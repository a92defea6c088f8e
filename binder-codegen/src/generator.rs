//! Pipeline orchestration.

use binder_host::{SemanticModel, SourceSink, SyntaxSource};
use eyre::Result;

use crate::classifier::Classifier;
use crate::config::BinderConfig;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::emitter::Emitter;
use crate::naming::unit_name;
use crate::scanner::Scanner;

/// Outcome of one generator run.
#[derive(Debug)]
pub struct RunResult {
    /// Names of registered units, in processing order.
    pub generated: Vec<String>,
    /// Number of class declarations that produced no unit.
    pub skipped: usize,
    /// Diagnostics recorded along the way (warnings only from the built-in
    /// steps).
    pub diagnostics: Vec<Diagnostic>,
}

impl RunResult {
    /// Returns true if at least one unit was generated.
    pub fn generated_any(&self) -> bool {
        !self.generated.is_empty()
    }
}

/// Drives filter → classify → render over a compilation unit.
///
/// Each class is processed independently with no shared state between
/// generations, so hosts are free to shard the class list and run several
/// generators in parallel; this one walks them in source order.
#[derive(Debug)]
pub struct Generator {
    config: BinderConfig,
}

impl Generator {
    pub fn new(config: BinderConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &BinderConfig {
        &self.config
    }

    /// Run the pipeline, registering one generated unit per qualifying
    /// class.
    ///
    /// Classes that fail the filter or classification are skipped, never an
    /// error. The only failure path is the sink rejecting a registration.
    pub fn run(
        &self,
        source: &dyn SyntaxSource,
        model: &dyn SemanticModel,
        sink: &mut dyn SourceSink,
    ) -> Result<RunResult> {
        let scanner = Scanner::new(&self.config);
        let classifier = Classifier::new(&self.config);
        let emitter = Emitter::new(&self.config);

        let mut diagnostics = Diagnostics::new();
        let mut generated = Vec::new();
        let mut skipped = 0;

        for class in source.classes() {
            if !scanner.is_candidate(class) {
                skipped += 1;
                continue;
            }

            let Some(info) = classifier.classify(class, model, &mut diagnostics) else {
                skipped += 1;
                continue;
            };

            let contents = emitter.render(&info);
            let name = unit_name(&info, &self.config.extension);
            sink.add_source(&name, &contents)?;
            generated.push(name);
        }

        Ok(RunResult {
            generated,
            skipped,
            diagnostics: diagnostics.into_vec(),
        })
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(BinderConfig::unity())
    }
}
