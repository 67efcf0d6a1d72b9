//! Field documentation comments.

/// Renders the doc comment emitted above a generated field.
///
/// `prefix` is the line comment marker of the target language (`//`, `///`).
/// Multi-line documentation is continued with the same marker and tabs are
/// dropped. Undocumented fields get a `name ...` placeholder.
#[must_use]
pub fn field_comment(name: &str, doc: &str, prefix: &str) -> String {
    if doc.is_empty() {
        return format!("\r\n{prefix} {name} ...\r\n");
    }
    let continuation = format!("\r\n{prefix} ");
    let doc = doc.replace('\t', "").replace('\n', &continuation);
    format!("\r\n{prefix} {name}: {doc}\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_doc() {
        assert_eq!(field_comment("Amt", "", "//"), "\r\n// Amt ...\r\n");
    }

    #[test]
    fn test_single_line_doc() {
        assert_eq!(
            field_comment("Amt", "Amount of money.", "///"),
            "\r\n/// Amt: Amount of money.\r\n"
        );
    }

    #[test]
    fn test_multi_line_doc() {
        assert_eq!(
            field_comment("Ccy", "Currency code.\n\tISO 4217.", "//"),
            "\r\n// Ccy: Currency code.\r\n// ISO 4217.\r\n"
        );
    }
}
