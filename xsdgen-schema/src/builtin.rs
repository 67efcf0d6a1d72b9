//! Built-in XML schema datatypes and their target-language spellings.
//!
//! The table follows the W3C datatype list
//! (<https://www.w3.org/TR/xmlschema-2/#datatype>) plus the `xml:` namespace
//! pseudo-types. Every entry carries exactly one spelling per [`Language`].

use crate::error::SchemaError;
use std::fmt;
use std::str::FromStr;

/// Supported code generation target languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Go.
    Go,
    /// TypeScript.
    TypeScript,
    /// C.
    C,
    /// Java.
    Java,
    /// Rust.
    Rust,
}

impl Language {
    /// Every supported language, in table column order.
    pub const ALL: [Self; 5] = [Self::Go, Self::TypeScript, Self::C, Self::Java, Self::Rust];

    /// Returns the column of this language in the built-in table.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Go => 0,
            Self::TypeScript => 1,
            Self::C => 2,
            Self::Java => 3,
            Self::Rust => 4,
        }
    }

    /// Returns the language identifier.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Go => "Go",
            Self::TypeScript => "TypeScript",
            Self::C => "C",
            Self::Java => "Java",
            Self::Rust => "Rust",
        }
    }

    /// Returns the file extension of generated sources.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Go => "go",
            Self::TypeScript => "ts",
            Self::C => "h",
            Self::Java => "java",
            Self::Rust => "rs",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.name() == s)
            .ok_or_else(|| SchemaError::unsupported_language(s))
    }
}

/// Built-in name followed by Go, TypeScript, C, Java and Rust spellings.
type BuiltinEntry = (&'static str, [&'static str; 5]);

const STRING: [&str; 5] = ["string", "string", "char", "String", "String"];
const STRINGS: [&str; 5] = ["[]string", "Array<string>", "char[]", "List<String>", "Vec<String>"];
const BINARY: [&str; 5] = ["string", "Uint8Array", "char[]", "List<Byte>", "String"];

static BUILTIN_TYPES: &[BuiltinEntry] = &[
    ("anyType", STRING),
    ("ENTITIES", STRINGS),
    ("ENTITY", STRING),
    ("ID", STRING),
    ("IDREF", STRING),
    ("IDREFS", STRINGS),
    ("NCName", STRING),
    ("NMTOKEN", STRING),
    ("NMTOKENS", STRINGS),
    ("NOTATION", STRINGS),
    ("Name", STRING),
    ("QName", ["xml.Name", "any", "char", "String", "String"]),
    ("anyURI", ["string", "string", "char", "QName", "String"]),
    ("base64Binary", BINARY),
    ("boolean", ["bool", "boolean", "bool", "Boolean", "bool"]),
    ("byte", ["int8", "any", "char[]", "Byte", "u8"]),
    ("date", STRING),
    ("dateTime", STRING),
    ("decimal", ["float64", "number", "float", "Float", "f64"]),
    ("double", ["float64", "number", "float", "Float", "f64"]),
    ("duration", STRING),
    ("float", ["float32", "number", "float", "Float", "f64"]),
    ("gDay", STRING),
    ("gMonth", STRING),
    ("gMonthDay", STRING),
    ("gYear", STRING),
    ("gYearMonth", STRING),
    ("hexBinary", BINARY),
    ("int", ["int", "number", "int", "Integer", "i32"]),
    ("integer", ["int", "number", "int", "Integer", "i32"]),
    ("language", STRING),
    ("long", ["int64", "number", "int", "Long", "i64"]),
    ("negativeInteger", ["int", "number", "int", "Integer", "i32"]),
    ("nonNegativeInteger", ["int", "number", "int", "Integer", "u32"]),
    ("normalizedString", STRING),
    ("nonPositiveInteger", ["int", "number", "int", "Integer", "i32"]),
    ("positiveInteger", ["int", "number", "int", "Integer", "u32"]),
    ("short", ["int16", "number", "int", "Integer", "i16"]),
    ("string", STRING),
    ("time", ["time.Time", "string", "char", "String", "String"]),
    ("token", STRING),
    ("unsignedByte", ["uint8", "any", "char", "Byte", "u8"]),
    ("unsignedInt", ["uint32", "number", "unsigned int", "Integer", "u32"]),
    ("unsignedLong", ["uint64", "number", "unsigned int", "Long", "u64"]),
    ("unsignedShort", ["uint16", "number", "unsigned int", "Short", "u16"]),
    ("xml:lang", STRING),
    ("xml:space", STRING),
    ("xml:base", STRING),
    ("xml:id", STRING),
];

fn find(name: &str) -> Option<&'static [&'static str; 5]> {
    BUILTIN_TYPES
        .iter()
        .find(|(builtin, _)| *builtin == name)
        .map(|(_, spellings)| spellings)
}

/// Returns the spelling of built-in type `name` in `lang`.
///
/// `None` means `name` is not a built-in; callers fall back to structural
/// resolution.
#[must_use]
pub fn builtin_type(name: &str, lang: Language) -> Option<&'static str> {
    find(name).map(|spellings| spellings[lang.index()])
}

/// Same as [`builtin_type`], keyed by a language identifier.
///
/// # Errors
/// Returns `SchemaError::UnsupportedLanguage` if `lang` is not a supported
/// identifier, whether or not `name` is a built-in.
pub fn builtin_type_by_lang(name: &str, lang: &str) -> Result<Option<&'static str>, SchemaError> {
    let lang = lang.parse::<Language>()?;
    Ok(builtin_type(name, lang))
}

/// Returns true if `name` is a built-in type name.
#[must_use]
pub fn is_builtin(name: &str) -> bool {
    find(name).is_some()
}

/// Iterates over every built-in type name.
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_TYPES.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_has_every_language() {
        for name in builtin_names() {
            for lang in Language::ALL {
                let spelling = builtin_type(name, lang);
                assert!(
                    spelling.is_some_and(|s| !s.is_empty()),
                    "{name} has no {lang} spelling"
                );
            }
        }
    }

    #[test]
    fn test_unknown_name_is_not_builtin() {
        for lang in Language::ALL {
            assert_eq!(builtin_type("Max35Text", lang), None);
            assert_eq!(builtin_type("String", lang), None);
        }
        assert!(!is_builtin("xs:string"));
    }

    #[test]
    fn test_builtin_spellings() {
        assert_eq!(builtin_type("decimal", Language::Go), Some("float64"));
        assert_eq!(builtin_type("decimal", Language::TypeScript), Some("number"));
        assert_eq!(builtin_type("unsignedInt", Language::C), Some("unsigned int"));
        assert_eq!(builtin_type("boolean", Language::Java), Some("Boolean"));
        assert_eq!(builtin_type("IDREFS", Language::Rust), Some("Vec<String>"));
    }

    #[test]
    fn test_xml_pseudo_types_are_strings() {
        for name in ["xml:lang", "xml:space", "xml:base", "xml:id"] {
            for lang in Language::ALL {
                assert_eq!(builtin_type(name, lang), builtin_type("string", lang));
            }
        }
    }

    #[test]
    fn test_builtin_type_by_lang() {
        assert_eq!(builtin_type_by_lang("long", "Rust"), Ok(Some("i64")));
        assert_eq!(builtin_type_by_lang("Unknown", "Go"), Ok(None));
        assert_eq!(
            builtin_type_by_lang("string", "Kotlin"),
            Err(SchemaError::unsupported_language("Kotlin"))
        );
        assert!(builtin_type_by_lang("Unknown", "rust").is_err());
    }

    #[test]
    fn test_language_round_trip() {
        for lang in Language::ALL {
            assert_eq!(lang.name().parse::<Language>(), Ok(lang));
        }
        assert_eq!(Language::Rust.extension(), "rs");
        assert_eq!(Language::C.extension(), "h");
        assert_eq!(Language::TypeScript.to_string(), "TypeScript");
    }

    #[test]
    fn test_table_has_no_duplicates() {
        let mut names: Vec<&str> = builtin_names().collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
        assert_eq!(total, 49);
    }
}
