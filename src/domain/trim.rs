fn is_decoration(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | ';' | '"' | '\'')
}

/// Strips leading and trailing whitespace, separators (`,` `;`) and quotes
/// (`"` `'`). Shared by names and contacts.
pub(crate) fn trim_decorations(s: &str) -> &str {
    s.trim_matches(is_decoration)
}

#[cfg(test)]
mod tests {
    use super::trim_decorations;

    #[test]
    fn quotes_and_separators_are_stripped_from_both_ends() {
        assert_eq!(trim_decorations("  'Schulz-Müller, Tim Anton'    "), "Schulz-Müller, Tim Anton");
        assert_eq!(trim_decorations(";, \"Meyer\" ,;"), "Meyer");
    }

    #[test]
    fn interior_decorations_are_kept() {
        assert_eq!(trim_decorations("O'Brien; Pat"), "O'Brien; Pat");
    }

    #[test]
    fn decorations_only_trim_to_empty() {
        assert_eq!(trim_decorations(" \t'\";,\n"), "");
    }
}
