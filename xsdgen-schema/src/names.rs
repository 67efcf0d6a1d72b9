//! Namespace-qualified name helpers.
//!
//! A name is treated as prefixed only when it contains exactly one colon.
//! Names with no colon, or with more than one, pass through as unprefixed.

/// A qualified name split into its optional prefix and local part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QName<'a> {
    /// Namespace prefix, if the name had exactly one colon.
    pub prefix: Option<&'a str>,
    /// Local part.
    pub local: &'a str,
}

impl<'a> QName<'a> {
    /// Splits `s` into prefix and local part.
    #[must_use]
    pub fn parse(s: &'a str) -> Self {
        match split_once_exact(s) {
            Some((prefix, local)) => Self {
                prefix: Some(prefix),
                local,
            },
            None => Self {
                prefix: None,
                local: s,
            },
        }
    }
}

fn split_once_exact(s: &str) -> Option<(&str, &str)> {
    let (prefix, local) = s.split_once(':')?;
    if local.contains(':') {
        return None;
    }
    Some((prefix, local))
}

/// Returns the namespace prefix of `s`, or `""` when it has none.
#[must_use]
pub fn ns_prefix(s: &str) -> &str {
    split_once_exact(s).map_or("", |(prefix, _)| prefix)
}

/// Returns `s` without its namespace prefix.
#[must_use]
pub fn trim_ns_prefix(s: &str) -> &str {
    split_once_exact(s).map_or(s, |(_, local)| local)
}
