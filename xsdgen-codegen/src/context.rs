//! Per-run generation context handed to every hook.

use crate::naming::{FieldNameCounter, sanitize_identifier, to_pascal_case};
use xsdgen_schema::{
    Language, ResolvedType, SchemaNode, SimpleType, resolve_base_of_simple_type,
    resolve_simple_type_node, resolve_type, trim_ns_prefix,
};

/// State of one generation run for one target language.
///
/// The context owns the run's [`FieldNameCounter`] and output buffer. The
/// schema document is borrowed read-only, so several contexts for different
/// languages can share it.
#[derive(Debug)]
pub struct GeneratorContext<'a> {
    language: Language,
    nodes: &'a [SchemaNode],
    package: &'a str,
    field_names: FieldNameCounter,
    output: String,
}

impl<'a> GeneratorContext<'a> {
    /// Creates a context with a fresh counter and an empty buffer.
    #[must_use]
    pub fn new(language: Language, nodes: &'a [SchemaNode], package: &'a str) -> Self {
        Self {
            language,
            nodes,
            package,
            field_names: FieldNameCounter::new(),
            output: String::new(),
        }
    }

    /// Returns the target language.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Returns the schema document.
    #[must_use]
    pub const fn nodes(&self) -> &'a [SchemaNode] {
        self.nodes
    }

    /// Returns the package (module, namespace) name of the output.
    #[must_use]
    pub const fn package(&self) -> &'a str {
        self.package
    }

    /// Resolves a type name for this context's language.
    #[must_use]
    pub fn resolve(&self, name: &str) -> ResolvedType {
        resolve_type(name, self.nodes, self.language)
    }

    /// Flattens `name` by one level of simple type aliasing.
    #[must_use]
    pub fn resolve_base(&self, name: &'a str) -> &'a str {
        resolve_base_of_simple_type(name, self.nodes)
    }

    /// Looks up the atomic simple type named `name`.
    #[must_use]
    pub fn simple_type(&self, name: &str) -> Option<&'a SimpleType> {
        resolve_simple_type_node(name, self.nodes)
    }

    /// Returns a field identifier for `name` that is unique within this run.
    pub fn field_name(&mut self, name: &str) -> String {
        let base = sanitize_identifier(&to_pascal_case(trim_ns_prefix(name)));
        self.field_names.unique(&base)
    }

    /// Returns the run's field name counter.
    #[must_use]
    pub const fn field_names(&self) -> &FieldNameCounter {
        &self.field_names
    }

    /// Appends generated text to the output buffer.
    pub fn emit(&mut self, text: &str) {
        self.output.push_str(text);
    }

    /// Returns the generated text so far.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Consumes the context and returns the generated text.
    #[must_use]
    pub fn into_output(self) -> String {
        self.output
    }
}
