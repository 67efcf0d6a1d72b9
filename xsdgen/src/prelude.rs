//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! ```ignore
//! use xsdgen::prelude::*;
//! ```

// Schema types
pub use xsdgen_schema::{
    Attribute, AttributeGroup, ComplexType, Element, Group, Language, NodeKind, ResolvedType,
    Restriction, SchemaError, SchemaNode, SimpleType,
};

// Resolution
pub use xsdgen_schema::{
    builtin_type, flatten_alias_chain, ns_prefix, resolve_base_of_simple_type,
    resolve_simple_type_node, resolve_type, trim_ns_prefix,
};

// Code generation
pub use xsdgen_codegen::{
    Backend, CodegenError, DispatchOutcome, Dispatcher, FailurePolicy, FieldNameCounter,
    GenerationReport, Generator, GeneratorBuilder, GeneratorContext, Hook, hook_name,
};

// Naming and ordering
pub use xsdgen_codegen::{
    field_comment, make_first_upper_case, sanitize_identifier, to_pascal_case, to_snake_case,
    to_sorted_pairs,
};
