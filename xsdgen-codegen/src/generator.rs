//! Generation run driver and its builder.

use crate::context::GeneratorContext;
use crate::dispatch::{DispatchOutcome, Dispatcher, hook_name};
use crate::error::CodegenError;
use crate::source::prepare_output_dir;
use std::path::{Path, PathBuf};
use xsdgen_schema::{Language, NodeKind, SchemaNode};

/// What a run does after a hook fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record the failure and keep dispatching the remaining nodes.
    #[default]
    Continue,
    /// Stop at the first failure.
    Abort,
}

/// A hook failure recorded during a run.
#[derive(Debug)]
pub struct DispatchFailure {
    /// Name of the node being generated.
    pub node: String,
    /// Kind of the node.
    pub kind: NodeKind,
    /// Hook method that failed.
    pub method: String,
    /// Error returned by the hook.
    pub error: CodegenError,
}

/// Outcome of one generation run.
#[derive(Debug)]
pub struct GenerationReport {
    /// Target language of the run.
    pub language: Language,
    /// Generated text, without header.
    pub output: String,
    /// Nodes handled by a hook.
    pub handled: usize,
    /// Nodes with no registered hook.
    pub skipped: usize,
    /// Failed nodes, in document order.
    pub failures: Vec<DispatchFailure>,
    /// True if the run stopped early under [`FailurePolicy::Abort`].
    pub aborted: bool,
}

impl GenerationReport {
    /// Returns true if no hook failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Returns the number of failed nodes.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }
}

/// Builder for configuring a [`Generator`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorBuilder {
    language: Option<Language>,
    package: String,
    header: Option<String>,
    failure_policy: FailurePolicy,
}

impl GeneratorBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target language.
    #[must_use]
    pub fn language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Sets the target language from its identifier.
    ///
    /// # Errors
    /// Returns a schema error if `name` is not a supported language.
    pub fn language_name(self, name: &str) -> Result<Self, CodegenError> {
        let language = name.parse::<Language>()?;
        Ok(self.language(language))
    }

    /// Sets the package name exposed to hooks.
    #[must_use]
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Sets the header text written before generated code.
    #[must_use]
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    /// Sets the failure policy.
    #[must_use]
    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    /// Builds the generator.
    ///
    /// # Errors
    /// Returns `CodegenError::MissingLanguage` if no language was set.
    pub fn build(self) -> Result<Generator, CodegenError> {
        let language = self.language.ok_or(CodegenError::MissingLanguage)?;
        Ok(Generator {
            language,
            package: self.package,
            header: self.header,
            failure_policy: self.failure_policy,
        })
    }
}

/// Runs generation passes for one target language.
#[derive(Debug, Clone)]
pub struct Generator {
    language: Language,
    package: String,
    header: Option<String>,
    failure_policy: FailurePolicy,
}

impl Generator {
    /// Creates a generator with default settings for `language`.
    #[must_use]
    pub fn new(language: Language) -> Self {
        Self {
            language,
            package: String::new(),
            header: None,
            failure_policy: FailurePolicy::default(),
        }
    }

    /// Returns a builder.
    #[must_use]
    pub fn builder() -> GeneratorBuilder {
        GeneratorBuilder::new()
    }

    /// Returns the target language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Returns the failure policy.
    #[must_use]
    pub const fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    /// Dispatches every node of `nodes` in document order.
    ///
    /// Each run starts from a fresh context, so field name disambiguation
    /// never carries over between runs.
    #[must_use]
    pub fn run(&self, nodes: &[SchemaNode], dispatcher: &Dispatcher) -> GenerationReport {
        tracing::info!(
            "Generating {} code for {} schema nodes",
            self.language,
            nodes.len()
        );

        let mut ctx = GeneratorContext::new(self.language, nodes, &self.package);
        let mut handled = 0;
        let mut skipped = 0;
        let mut failures = Vec::new();
        let mut aborted = false;

        for node in nodes {
            let method = hook_name(self.language, node.kind());
            match dispatcher.dispatch(&method, &mut ctx, node) {
                Ok(DispatchOutcome::Handled) => handled += 1,
                Ok(DispatchOutcome::Skipped) => skipped += 1,
                Err(error) => {
                    tracing::warn!("Hook {} failed for {}: {}", method, node.name(), error);
                    failures.push(DispatchFailure {
                        node: node.name().to_string(),
                        kind: node.kind(),
                        method,
                        error,
                    });
                    if self.failure_policy == FailurePolicy::Abort {
                        aborted = true;
                        break;
                    }
                }
            }
        }

        tracing::info!(
            "Generated {} code: handled={} skipped={} failed={}",
            self.language,
            handled,
            skipped,
            failures.len()
        );

        GenerationReport {
            language: self.language,
            output: ctx.into_output(),
            handled,
            skipped,
            failures,
            aborted,
        }
    }

    /// Returns the report's output with the configured header prepended.
    #[must_use]
    pub fn render(&self, report: &GenerationReport) -> String {
        match &self.header {
            Some(header) => format!("{header}\n\n{}", report.output),
            None => report.output.clone(),
        }
    }

    /// Writes the rendered output to `dir/stem.<ext>`.
    ///
    /// # Errors
    /// Returns an IO error if the directory cannot be created or the file
    /// cannot be written.
    pub fn write_to(
        &self,
        report: &GenerationReport,
        dir: &Path,
        stem: &str,
    ) -> Result<PathBuf, CodegenError> {
        prepare_output_dir(dir)?;
        let path = dir.join(format!("{stem}.{}", self.language.extension()));
        std::fs::write(&path, self.render(report))?;
        tracing::debug!("Wrote {}", path.display());
        Ok(path)
    }
}
