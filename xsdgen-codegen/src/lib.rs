//! # xsdgen Codegen
//!
//! Per-language code generation over a resolved schema document.
//!
//! This crate provides:
//! - Identifier normalization and per-run field name disambiguation
//! - Deterministic ordering of name/value maps
//! - Name-based dispatch of per-language generation hooks
//! - A run driver that aggregates hook failures
//! - Schema fetching, file listing and output directory helpers

pub mod comment;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod generator;
pub mod naming;
pub mod ordering;
pub mod source;

pub use comment::field_comment;
pub use context::GeneratorContext;
pub use dispatch::{Backend, DispatchOutcome, Dispatcher, FnHook, Hook, hook_name};
pub use error::CodegenError;
pub use generator::{
    DispatchFailure, FailurePolicy, GenerationReport, Generator, GeneratorBuilder,
};
pub use naming::{
    FieldNameCounter, make_first_upper_case, sanitize_identifier, to_pascal_case, to_snake_case,
    to_title,
};
pub use ordering::{KvPair, to_sorted_pairs};
pub use source::{fetch_schema, is_valid_url, list_files, prepare_output_dir};

use xsdgen_schema::{Language, SchemaNode};

/// Runs one generation pass over `nodes` for `language`.
///
/// # Arguments
/// * `nodes` - Schema document
/// * `language` - Target language
/// * `dispatcher` - Registered hooks
///
/// # Returns
/// The run report; hook failures are listed in it rather than returned.
#[must_use]
pub fn generate(
    nodes: &[SchemaNode],
    language: Language,
    dispatcher: &Dispatcher,
) -> GenerationReport {
    Generator::new(language).run(nodes, dispatcher)
}

#[cfg(test)]
mod tests {
    use super::*;
    use xsdgen_schema::{ComplexType, SimpleType};

    #[test]
    fn test_generate_uses_default_settings() {
        let nodes: Vec<SchemaNode> = vec![
            SimpleType::new("Amount", "xs:decimal").into(),
            ComplexType::new("Party").into(),
        ];
        let mut dispatcher = Dispatcher::new();
        dispatcher.register_fn("GoSimpleType", |ctx, node| {
            let target = ctx.resolve(node.name());
            ctx.emit(&format!("type {} {}\n", node.name(), target.type_name()));
            Ok(())
        });

        let report = generate(&nodes, Language::Go, &dispatcher);

        assert_eq!(report.language, Language::Go);
        assert_eq!(report.output, "type Amount float64\n");
        assert_eq!(report.handled, 1);
        assert_eq!(report.skipped, 1);
        assert!(report.is_success());
        assert!(!report.aborted);
    }
}
