//! Type resolution over a schema document.
//!
//! Resolution is two-tiered: a name is first looked up in the built-in
//! table, and only on a miss is the document scanned for a declaration.
//! [`resolve_base_of_simple_type`] flattens exactly one level per call and
//! [`flatten_alias_chain`] repeats the step for callers that need more.
//! [`resolve_type`] follows aliases until it reaches a shape worth emitting.
//!
//! Every scan is linear and first match in document order wins. A name that
//! matches nothing resolves to itself.

use crate::builtin::{Language, builtin_type, is_builtin};
use crate::names::trim_ns_prefix;
use crate::types::{Restriction, SchemaNode, SimpleType};
use std::collections::HashSet;

/// Outcome of resolving a type name for one target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedType {
    /// Built-in type with its target-language spelling.
    Primitive {
        /// Built-in type name.
        name: String,
        /// Spelling in the requested language.
        spelling: String,
    },
    /// Simple type carrying facets that must be kept in the output.
    Restricted {
        /// Declared type name.
        name: String,
        /// Declared base type name.
        base: String,
        /// Restriction facets.
        restriction: Restriction,
    },
    /// List of an item type.
    List {
        /// Declared type name.
        name: String,
        /// Item type, spelled for the target language when built-in.
        item: String,
    },
    /// Union of member types.
    Union {
        /// Declared type name.
        name: String,
        /// Member types, spelled for the target language when built-in.
        members: Vec<String>,
    },
    /// Complex type or group, emitted as its own structure.
    Structural {
        /// Declared name.
        name: String,
    },
    /// Nothing matched; the name is echoed back.
    Unresolved {
        /// The name as resolution left it.
        name: String,
    },
}

impl ResolvedType {
    /// Returns the name this type should be referred to by in generated code.
    #[must_use]
    pub fn type_name(&self) -> &str {
        match self {
            Self::Primitive { spelling, .. } => spelling,
            Self::Restricted { name, .. }
            | Self::List { name, .. }
            | Self::Union { name, .. }
            | Self::Structural { name }
            | Self::Unresolved { name } => name,
        }
    }

    /// Returns true if the type resolved to a built-in.
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive { .. })
    }

    /// Returns true if nothing matched the name.
    #[must_use]
    pub const fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved { .. })
    }
}

/// Resolves `name` to the base of a simple type, flattening one level.
///
/// Constrained simple types resolve to their own name, unconstrained atomic
/// ones to their base. Attributes and elements resolve to their declared
/// type. Unknown names are returned unchanged.
#[must_use]
pub fn resolve_base_of_simple_type<'a>(name: &'a str, nodes: &'a [SchemaNode]) -> &'a str {
    for node in nodes {
        match node {
            SchemaNode::SimpleType(s) if s.name == name && s.restriction.is_constrained() => {
                return &s.name;
            }
            SchemaNode::SimpleType(s) if s.name == name && s.is_atomic() => return &s.base,
            SchemaNode::Attribute(a) if a.name == name => return &a.type_name,
            SchemaNode::Element(e) if e.name == name => return &e.type_name,
            _ => {}
        }
    }
    name
}

/// Finds the atomic (neither list nor union) simple type named `name`.
#[must_use]
pub fn resolve_simple_type_node<'a>(name: &str, nodes: &'a [SchemaNode]) -> Option<&'a SimpleType> {
    nodes.iter().find_map(|node| match node {
        SchemaNode::SimpleType(s) if s.is_atomic() && s.name == name => Some(s),
        _ => None,
    })
}

fn spell(name: &str, lang: Language) -> String {
    let local = trim_ns_prefix(name);
    builtin_type(local, lang).unwrap_or(local).to_string()
}

fn find_declaration<'a>(local: &str, nodes: &'a [SchemaNode]) -> Option<&'a SchemaNode> {
    nodes.iter().find(|node| trim_ns_prefix(node.name()) == local)
}

/// Resolves `name` into a [`ResolvedType`] for `lang`.
///
/// Names are compared without their namespace prefix on both sides, so
/// `tns:Foo` finds a node declared as `Foo` and the other way round. Aliases
/// (unconstrained atomic simple types, attributes and elements) are followed
/// until a built-in or a declaration with its own shape is reached. A
/// reference that leads nowhere is echoed back as [`ResolvedType::Unresolved`]:
/// the input itself when it is undeclared, otherwise the dangling target.
#[must_use]
pub fn resolve_type(name: &str, nodes: &[SchemaNode], lang: Language) -> ResolvedType {
    let mut seen = HashSet::new();
    let mut current = name;

    loop {
        let local = trim_ns_prefix(current);
        if let Some(spelling) = builtin_type(local, lang) {
            return ResolvedType::Primitive {
                name: local.to_string(),
                spelling: spelling.to_string(),
            };
        }

        let Some(node) = find_declaration(local, nodes) else {
            return ResolvedType::Unresolved {
                name: current.to_string(),
            };
        };
        if !seen.insert(local) {
            tracing::warn!("Alias cycle detected while resolving '{}' at '{}'", name, local);
            return ResolvedType::Unresolved {
                name: name.to_string(),
            };
        }

        current = match node {
            SchemaNode::SimpleType(s) if s.restriction.is_constrained() => {
                return ResolvedType::Restricted {
                    name: local.to_string(),
                    base: s.base.clone(),
                    restriction: s.restriction.clone(),
                };
            }
            SchemaNode::SimpleType(s) if s.list => {
                let item = s.member_types.first().unwrap_or(&s.base);
                return ResolvedType::List {
                    name: local.to_string(),
                    item: spell(item, lang),
                };
            }
            SchemaNode::SimpleType(s) if s.union => {
                return ResolvedType::Union {
                    name: local.to_string(),
                    members: s.member_types.iter().map(|m| spell(m, lang)).collect(),
                };
            }
            SchemaNode::ComplexType(_) | SchemaNode::Group(_) | SchemaNode::AttributeGroup(_) => {
                return ResolvedType::Structural {
                    name: local.to_string(),
                };
            }
            SchemaNode::SimpleType(s) => s.base.as_str(),
            SchemaNode::Attribute(a) => a.type_name.as_str(),
            SchemaNode::Element(e) => e.type_name.as_str(),
        };
    }
}

/// Repeats [`resolve_base_of_simple_type`] until the name stops changing.
///
/// Stops early at a built-in name, and at the first repeated name when the
/// schema declares a cyclic alias chain.
#[must_use]
pub fn flatten_alias_chain(name: &str, nodes: &[SchemaNode]) -> String {
    let mut seen = HashSet::new();
    let mut current = trim_ns_prefix(name);

    loop {
        if is_builtin(current) {
            return current.to_string();
        }
        if !seen.insert(current) {
            tracing::warn!("Alias cycle detected while resolving '{}' at '{}'", name, current);
            return current.to_string();
        }
        let next = trim_ns_prefix(resolve_base_of_simple_type(current, nodes));
        if next == current {
            return current.to_string();
        }
        current = next;
    }
}
