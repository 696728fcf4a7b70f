//! Common utility functions shared across the codebase.

/// Words that can never be used as plain Rust identifiers (strict and
/// reserved keywords across editions).
const RUST_KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "crate",
    "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "Self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Checks if `name` can be used verbatim as a Rust identifier in generated code.
///
/// # Examples
///
/// ```
/// use textloc::utils::is_valid_identifier;
///
/// assert!(is_valid_identifier("greetings"));
/// assert!(is_valid_identifier("_private"));
/// assert!(is_valid_identifier("Zażółć"));
/// assert!(!is_valid_identifier("2fast"));
/// assert!(!is_valid_identifier("my-key"));
/// assert!(!is_valid_identifier("type"));
/// assert!(!is_valid_identifier("_"));
/// assert!(!is_valid_identifier(""));
/// ```
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !(first == '_' || first.is_alphabetic()) {
        return false;
    }
    if !chars.all(|c| c == '_' || c.is_alphanumeric()) {
        return false;
    }
    name != "_" && !RUST_KEYWORDS.contains(&name)
}

/// Convert `PascalCase` or `camelCase` to `snake_case`.
///
/// Runs of capitals are kept together, so `HTMLText` becomes `html_text`.
pub fn to_snake_case(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut result = String::with_capacity(input.len() + 4);

    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary && !result.ends_with('_') {
                result.push('_');
            }
        }
        result.extend(ch.to_lowercase());
    }

    result
}

/// Convert `snake_case` (or any name) to `UpperCamelCase`.
///
/// Only the first letter of each `_`-separated part is changed.
pub fn to_upper_camel_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());

    for part in input.split('_') {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.push_str(chars.as_str());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use crate::utils::*;

    #[test]
    fn test_is_valid_identifier() {
        assert!(is_valid_identifier("greetings"));
        assert!(is_valid_identifier("Greetings2"));
        assert!(is_valid_identifier("snake_case_key"));
        assert!(is_valid_identifier("_x"));
        assert!(is_valid_identifier("__"));
        assert!(is_valid_identifier("привет"));

        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("_"));
        assert!(!is_valid_identifier("1st"));
        assert!(!is_valid_identifier("with space"));
        assert!(!is_valid_identifier("dotted.key"));
        assert!(!is_valid_identifier("dash-key"));
        assert!(!is_valid_identifier("fn"));
        assert!(!is_valid_identifier("self"));
        assert!(!is_valid_identifier("Self"));
        assert!(!is_valid_identifier("async"));
        assert!(!is_valid_identifier("abstract"));
        assert!(!is_valid_identifier("typeof"));
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("EnglishTextProvider"), "english_text_provider");
        assert_eq!(to_snake_case("Localization"), "localization");
        assert_eq!(to_snake_case("R"), "r");
        assert_eq!(to_snake_case("HTMLText"), "html_text");
        assert_eq!(to_snake_case("Text2Speech"), "text2_speech");
        assert_eq!(to_snake_case("already_snake"), "already_snake");
        assert_eq!(to_snake_case("Mixed_Case"), "mixed_case");
    }

    #[test]
    fn test_to_upper_camel_case() {
        assert_eq!(to_upper_camel_case("Table"), "Table");
        assert_eq!(to_upper_camel_case("table"), "Table");
        assert_eq!(to_upper_camel_case("r"), "R");
        assert_eq!(to_upper_camel_case("texts_table"), "TextsTable");
        assert_eq!(to_upper_camel_case("_strings"), "Strings");
    }
}
