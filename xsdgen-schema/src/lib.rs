//! # xsdgen Schema
//!
//! XML schema node model and type resolution.
//!
//! This crate provides:
//! - Node definitions for simple types, complex types, elements, attributes
//!   and groups
//! - The built-in datatype table with per-language spellings
//! - Namespace-qualified name helpers
//! - Type resolution over an ordered schema document

pub mod builtin;
pub mod error;
pub mod names;
pub mod resolver;
pub mod types;

pub use builtin::{Language, builtin_names, builtin_type, builtin_type_by_lang, is_builtin};
pub use error::SchemaError;
pub use names::{QName, ns_prefix, trim_ns_prefix};
pub use resolver::{
    ResolvedType, flatten_alias_chain, resolve_base_of_simple_type, resolve_simple_type_node,
    resolve_type,
};
pub use types::{
    Attribute, AttributeGroup, ComplexType, Element, Group, NodeKind, Restriction, SchemaNode,
    SimpleType,
};
