//! Lexical splitting of template strings.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Non-greedy placeholder pattern. `(?s)` lets `.` span newlines so
    /// multiline placeholder content still matches.
    static ref PLACEHOLDER: Regex =
        Regex::new(r"(?s)\{\{.*?\}\}").expect("placeholder pattern is valid");
}

/// Split a template string into literal-text and placeholder tokens.
///
/// Placeholders are the shortest substrings between a `{{` and the next
/// `}}` and are preserved as their own tokens; zero-length fragments are
/// discarded. Blank input yields an empty sequence. A dangling `{{`
/// without a closing `}}` stays in the literal text untouched — grammar
/// validation happens later, in the placeholder parser.
pub fn split_tokens(input: &str) -> Vec<String> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    let mut tokens = Vec::new();
    let mut last = 0;

    for m in PLACEHOLDER.find_iter(input) {
        if m.start() > last {
            tokens.push(input[last..m.start()].to_string());
        }
        tokens.push(m.as_str().to_string());
        last = m.end();
    }

    if last < input.len() {
        tokens.push(input[last..].to_string());
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_only_returns_single_token() {
        let result = split_tokens("Hello World");

        assert_eq!(result, vec!["Hello World"]);
    }

    #[test]
    fn test_single_placeholder_returns_single_token() {
        let result = split_tokens("{{Name}}");

        assert_eq!(result, vec!["{{Name}}"]);
    }

    #[test]
    fn test_text_and_placeholder_returns_multiple_tokens() {
        let result = split_tokens("Hello {{Name}}!");

        assert_eq!(result, vec!["Hello ", "{{Name}}", "!"]);
    }

    #[test]
    fn test_adjacent_placeholders_keep_separator() {
        let result = split_tokens("{{FirstName}} {{LastName}}");

        assert_eq!(result, vec!["{{FirstName}}", " ", "{{LastName}}"]);
    }

    #[test]
    fn test_complex_template_returns_all_tokens() {
        let result = split_tokens("Name: {{Name}}, Age: {{Age}}, Active: {{IsActive}}");

        assert_eq!(
            result,
            vec![
                "Name: ",
                "{{Name}}",
                ", Age: ",
                "{{Age}}",
                ", Active: ",
                "{{IsActive}}"
            ]
        );
    }

    #[test]
    fn test_empty_input_returns_empty() {
        assert!(split_tokens("").is_empty());
    }

    #[test]
    fn test_whitespace_only_input_returns_empty() {
        assert!(split_tokens("   ").is_empty());
    }

    #[test]
    fn test_placeholder_with_pipe_stays_one_token() {
        let result = split_tokens("{{Date|datetime:format=%Y-%m-%d}}");

        assert_eq!(result, vec!["{{Date|datetime:format=%Y-%m-%d}}"]);
    }

    #[test]
    fn test_multiline_template_splits_per_placeholder() {
        let result = split_tokens("Line 1: {{Value1}}\nLine 2: {{Value2}}");

        assert_eq!(
            result,
            vec!["Line 1: ", "{{Value1}}", "\nLine 2: ", "{{Value2}}"]
        );
    }

    #[test]
    fn test_unclosed_delimiter_stays_literal() {
        let result = split_tokens("Hello {{Name");

        assert_eq!(result, vec!["Hello {{Name"]);
    }

    #[test]
    fn test_lazy_match_takes_shortest_placeholder() {
        let result = split_tokens("{{A}} and {{B}}");

        assert_eq!(result, vec!["{{A}}", " and ", "{{B}}"]);
    }
}
