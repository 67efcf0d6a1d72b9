//! Schema node definitions.
//!
//! This module contains the data structures representing parsed XML schema
//! declarations: simple types, complex types, elements, attributes and the
//! two kinds of named groups. A schema document is an ordered slice of
//! [`SchemaNode`] values.

use std::fmt;

/// A single top-level declaration in a schema document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    /// `xs:simpleType` declaration.
    SimpleType(SimpleType),
    /// `xs:complexType` declaration.
    ComplexType(ComplexType),
    /// `xs:element` declaration.
    Element(Element),
    /// `xs:attribute` declaration.
    Attribute(Attribute),
    /// `xs:group` declaration.
    Group(Group),
    /// `xs:attributeGroup` declaration.
    AttributeGroup(AttributeGroup),
}

impl SchemaNode {
    /// Returns the declared name of the node.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::SimpleType(s) => &s.name,
            Self::ComplexType(c) => &c.name,
            Self::Element(e) => &e.name,
            Self::Attribute(a) => &a.name,
            Self::Group(g) => &g.name,
            Self::AttributeGroup(g) => &g.name,
        }
    }

    /// Returns the kind discriminant of the node.
    #[must_use]
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::SimpleType(_) => NodeKind::SimpleType,
            Self::ComplexType(_) => NodeKind::ComplexType,
            Self::Element(_) => NodeKind::Element,
            Self::Attribute(_) => NodeKind::Attribute,
            Self::Group(_) => NodeKind::Group,
            Self::AttributeGroup(_) => NodeKind::AttributeGroup,
        }
    }

    /// Returns the documentation text attached to the node, if any.
    #[must_use]
    pub fn doc(&self) -> Option<&str> {
        match self {
            Self::SimpleType(s) => s.doc.as_deref(),
            Self::ComplexType(c) => c.doc.as_deref(),
            Self::Element(e) => e.doc.as_deref(),
            Self::Attribute(a) => a.doc.as_deref(),
            Self::Group(g) => g.doc.as_deref(),
            Self::AttributeGroup(g) => g.doc.as_deref(),
        }
    }

    /// Returns the inner simple type, if this is one.
    #[must_use]
    pub const fn as_simple_type(&self) -> Option<&SimpleType> {
        match self {
            Self::SimpleType(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the inner complex type, if this is one.
    #[must_use]
    pub const fn as_complex_type(&self) -> Option<&ComplexType> {
        match self {
            Self::ComplexType(c) => Some(c),
            _ => None,
        }
    }
}

impl From<SimpleType> for SchemaNode {
    fn from(value: SimpleType) -> Self {
        Self::SimpleType(value)
    }
}

impl From<ComplexType> for SchemaNode {
    fn from(value: ComplexType) -> Self {
        Self::ComplexType(value)
    }
}

impl From<Element> for SchemaNode {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

impl From<Attribute> for SchemaNode {
    fn from(value: Attribute) -> Self {
        Self::Attribute(value)
    }
}

impl From<Group> for SchemaNode {
    fn from(value: Group) -> Self {
        Self::Group(value)
    }
}

impl From<AttributeGroup> for SchemaNode {
    fn from(value: AttributeGroup) -> Self {
        Self::AttributeGroup(value)
    }
}

/// Discriminant of [`SchemaNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Simple type.
    SimpleType,
    /// Complex type.
    ComplexType,
    /// Element.
    Element,
    /// Attribute.
    Attribute,
    /// Group.
    Group,
    /// Attribute group.
    AttributeGroup,
}

impl NodeKind {
    /// Every node kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::SimpleType,
        Self::ComplexType,
        Self::Element,
        Self::Attribute,
        Self::Group,
        Self::AttributeGroup,
    ];

    /// Returns the stable name used to build hook method names.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SimpleType => "SimpleType",
            Self::ComplexType => "ComplexType",
            Self::Element => "Element",
            Self::Attribute => "Attribute",
            Self::Group => "Group",
            Self::AttributeGroup => "AttributeGroup",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Simple type declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimpleType {
    /// Type name.
    pub name: String,
    /// Base type name of the restriction (or list item type).
    pub base: String,
    /// True for `xs:list` derivations.
    pub list: bool,
    /// True for `xs:union` derivations.
    pub union: bool,
    /// Union member types, or the single item type of a list.
    pub member_types: Vec<String>,
    /// Restriction facets.
    pub restriction: Restriction,
    /// Documentation.
    pub doc: Option<String>,
}

impl SimpleType {
    /// Creates an unconstrained simple type aliasing `base`.
    #[must_use]
    pub fn new(name: impl Into<String>, base: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: base.into(),
            ..Self::default()
        }
    }

    /// Creates a list simple type over `item`.
    #[must_use]
    pub fn list_of(name: impl Into<String>, item: impl Into<String>) -> Self {
        let item = item.into();
        Self {
            name: name.into(),
            base: item.clone(),
            list: true,
            member_types: vec![item],
            ..Self::default()
        }
    }

    /// Creates a union simple type over `members`.
    #[must_use]
    pub fn union_of<I, S>(name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            union: true,
            member_types: members.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Sets the restriction facets.
    #[must_use]
    pub fn with_restriction(mut self, restriction: Restriction) -> Self {
        self.restriction = restriction;
        self
    }

    /// Returns true if this type is neither a list nor a union.
    #[must_use]
    pub const fn is_atomic(&self) -> bool {
        !self.list && !self.union
    }
}

/// Restriction facets of a simple type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Restriction {
    /// `xs:pattern` value.
    pub pattern: Option<String>,
    /// `xs:enumeration` values in document order.
    pub enumeration: Vec<String>,
    /// `xs:minLength` value.
    pub min_length: Option<u64>,
    /// `xs:maxLength` value.
    pub max_length: Option<u64>,
}

impl Restriction {
    /// Creates an enumeration restriction.
    #[must_use]
    pub fn enumeration<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enumeration: values.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Creates a pattern restriction.
    #[must_use]
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self {
            pattern: Some(pattern.into()),
            ..Self::default()
        }
    }

    /// Returns true if a `minLength` facet is present.
    #[must_use]
    pub const fn has_min_length(&self) -> bool {
        self.min_length.is_some()
    }

    /// Returns true if a `maxLength` facet is present.
    #[must_use]
    pub const fn has_max_length(&self) -> bool {
        self.max_length.is_some()
    }

    /// Returns true if any facet narrows the base type.
    #[must_use]
    pub fn is_constrained(&self) -> bool {
        self.pattern.is_some()
            || !self.enumeration.is_empty()
            || self.has_min_length()
            || self.has_max_length()
    }
}

/// Complex type declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComplexType {
    /// Type name.
    pub name: String,
    /// Base type of an extension, if any.
    pub base: Option<String>,
    /// Child elements.
    pub elements: Vec<Element>,
    /// Attributes.
    pub attributes: Vec<Attribute>,
    /// Referenced groups.
    pub groups: Vec<String>,
    /// Referenced attribute groups.
    pub attribute_groups: Vec<String>,
    /// Mixed content flag.
    pub mixed: bool,
    /// Documentation.
    pub doc: Option<String>,
}

impl ComplexType {
    /// Creates an empty complex type.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds a child element.
    pub fn add_element(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Adds an attribute.
    pub fn add_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }
}

/// Element declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    /// Element name.
    pub name: String,
    /// Declared type name.
    pub type_name: String,
    /// `maxOccurs` greater than one.
    pub plural: bool,
    /// `minOccurs` of zero.
    pub optional: bool,
    /// Documentation.
    pub doc: Option<String>,
}

impl Element {
    /// Creates a required, single-valued element.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            ..Self::default()
        }
    }
}

/// Attribute declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Declared type name.
    pub type_name: String,
    /// `use="optional"`.
    pub optional: bool,
    /// Default value.
    pub default: Option<String>,
    /// Documentation.
    pub doc: Option<String>,
}

impl Attribute {
    /// Creates a required attribute.
    #[must_use]
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            ..Self::default()
        }
    }
}

/// Named model group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    /// Group name.
    pub name: String,
    /// Elements in the group.
    pub elements: Vec<Element>,
    /// Documentation.
    pub doc: Option<String>,
}

/// Named attribute group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeGroup {
    /// Group name.
    pub name: String,
    /// Attributes in the group.
    pub attributes: Vec<Attribute>,
    /// Documentation.
    pub doc: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_name_and_kind() {
        let nodes: Vec<SchemaNode> = vec![
            SimpleType::new("Code", "string").into(),
            ComplexType::new("Party").into(),
            Element::new("Document", "Document").into(),
            Attribute::new("Ccy", "CurrencyCode").into(),
        ];

        let names: Vec<&str> = nodes.iter().map(SchemaNode::name).collect();
        assert_eq!(names, ["Code", "Party", "Document", "Ccy"]);
        assert_eq!(nodes[0].kind(), NodeKind::SimpleType);
        assert_eq!(nodes[3].kind(), NodeKind::Attribute);
    }

    #[test]
    fn test_node_kind_as_str() {
        assert_eq!(NodeKind::SimpleType.as_str(), "SimpleType");
        assert_eq!(NodeKind::AttributeGroup.to_string(), "AttributeGroup");
        assert_eq!(NodeKind::ALL.len(), 6);
    }

    #[test]
    fn test_restriction_is_constrained() {
        assert!(!Restriction::default().is_constrained());
        assert!(Restriction::pattern("[A-Z]{3}").is_constrained());
        assert!(Restriction::enumeration(["A", "B"]).is_constrained());
        assert!(!Restriction::enumeration(Vec::<String>::new()).is_constrained());

        let length = Restriction {
            max_length: Some(35),
            ..Restriction::default()
        };
        assert!(length.has_max_length());
        assert!(!length.has_min_length());
        assert!(length.is_constrained());
    }

    #[test]
    fn test_simple_type_constructors() {
        let list = SimpleType::list_of("Codes", "string");
        assert!(list.list);
        assert!(!list.is_atomic());
        assert_eq!(list.member_types, ["string"]);

        let union = SimpleType::union_of("DateOrTime", ["date", "time"]);
        assert!(union.union);
        assert_eq!(union.member_types.len(), 2);

        assert!(SimpleType::new("Max35Text", "string").is_atomic());
    }

    #[test]
    fn test_node_doc() {
        let mut element = Element::new("Amt", "decimal");
        element.doc = Some("Amount of money.".to_string());
        let node = SchemaNode::from(element);
        assert_eq!(node.doc(), Some("Amount of money."));
        assert!(node.as_simple_type().is_none());
    }

    #[test]
    fn test_complex_type_children() {
        let mut complex = ComplexType::new("Party");
        complex.add_element(Element::new("Nm", "Max140Text"));
        complex.add_attribute(Attribute::new("Id", "string"));
        assert_eq!(complex.elements.len(), 1);
        assert_eq!(complex.attributes.len(), 1);
    }
}
