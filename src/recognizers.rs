//! Recognizer predicates for the decl language.
//!
//! Pure boolean membership tests shared by the tokenizer and the structural
//! validator. Identifier grammars are expressed as lazily compiled regex
//! patterns; line recognizers that are dominated by trimming and prefix
//! logic are direct character scans. All recognizers are stateless: the
//! compiled patterns are immutable statics, so repeated calls are pure.

use crate::token::TokenKind;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Canonical spelling of the mandatory header directive.
pub const INCLUDE_DIRECTIVE: &str = "#include<stdio.h>";

/// Alternate accepted spelling, with a single space before the delimiter.
pub const INCLUDE_DIRECTIVE_SPACED: &str = "#include <stdio.h>";

/// Two-character comment marker.
pub const COMMENT_MARKER: &str = "//";

/// Fixed prefix that introduces a loop label.
pub const LOOP_LABEL_PREFIX: &str = "loop_";

static VARIABLE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^_[A-Za-z]+[0-9][A-Za-z]$").unwrap());

static FUNCTION_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z]+Fn$").unwrap());

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Keyword table shared by both pipelines, built once at first use.
static KEYWORDS: Lazy<HashMap<&'static str, TokenKind>> = Lazy::new(|| {
    HashMap::from([
        ("int", TokenKind::Type),
        ("dec", TokenKind::Type),
        ("while", TokenKind::While),
        ("printf", TokenKind::Printf),
        ("return", TokenKind::Return),
        ("break", TokenKind::Break),
        ("main", TokenKind::Main),
    ])
});

/// Look up the token kind for a keyword, if `ident` is one.
pub fn keyword_kind(ident: &str) -> Option<TokenKind> {
    KEYWORDS.get(ident).copied()
}

/// Variable names: one underscore, one or more letters, exactly one digit,
/// exactly one trailing letter. Full-string match, minimum length 4.
pub fn is_variable_name(s: &str) -> bool {
    s.len() >= 4 && VARIABLE_NAME.is_match(s)
}

/// Function names: one or more letters followed by the literal `Fn` suffix.
/// No digits or underscores anywhere; minimum total length 3.
pub fn is_function_name(s: &str) -> bool {
    FUNCTION_NAME.is_match(s)
}

/// Generic identifiers: letter or underscore, then letters/digits/underscores.
pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER.is_match(s)
}

/// Whether the trimmed line is one of the two accepted spellings of the
/// mandatory header directive.
pub fn is_include_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed == INCLUDE_DIRECTIVE || trimmed == INCLUDE_DIRECTIVE_SPACED
}

/// Whether the line is a comment: after leading whitespace it starts with
/// `//`, and the body holds only letters and whitespace. Punctuation in a
/// comment body is rejected; this restriction is part of the grammar.
pub fn is_comment_line(line: &str) -> bool {
    match line.trim_start().strip_prefix(COMMENT_MARKER) {
        Some(body) => body
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_names() {
        assert!(is_variable_name("_ab3c"));
        assert!(is_variable_name("_loopin0x"));
        assert!(is_variable_name("_a3c"));
        // too short: no letter after the digit
        assert!(!is_variable_name("_a3"));
        // two digits
        assert!(!is_variable_name("_ab33c"));
        // no leading underscore
        assert!(!is_variable_name("ab3c"));
        // trailing characters after the final letter
        assert!(!is_variable_name("_ab3cd"));
        assert!(!is_variable_name(""));
    }

    #[test]
    fn test_function_names() {
        assert!(is_function_name("sumFn"));
        assert!(is_function_name("aFn"));
        assert!(!is_function_name("Fn"));
        assert!(!is_function_name("sum1Fn"));
        assert!(!is_function_name("_sumFn"));
        assert!(!is_function_name("sumfn"));
    }

    #[test]
    fn test_identifiers() {
        assert!(is_identifier("x"));
        assert!(is_identifier("_loopin0x"));
        assert!(is_identifier("snake_case_9"));
        assert!(!is_identifier("9lives"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("a-b"));
    }

    #[test]
    fn test_include_lines() {
        assert!(is_include_line("#include<stdio.h>"));
        assert!(is_include_line("#include <stdio.h>"));
        assert!(is_include_line("   #include<stdio.h>   "));
        assert!(!is_include_line("#include <string.h>"));
        assert!(!is_include_line("#include  <stdio.h>"));
        assert!(!is_include_line(""));
    }

    #[test]
    fn test_comment_lines() {
        assert!(is_comment_line("// ok comment"));
        assert!(is_comment_line("   // indented comment"));
        assert!(is_comment_line("//"));
        assert!(!is_comment_line("// bad!comment"));
        assert!(!is_comment_line("// has 2 digits"));
        assert!(!is_comment_line("not a comment"));
    }

    #[test]
    fn test_keyword_table() {
        assert_eq!(keyword_kind("int"), Some(TokenKind::Type));
        assert_eq!(keyword_kind("dec"), Some(TokenKind::Type));
        assert_eq!(keyword_kind("while"), Some(TokenKind::While));
        assert_eq!(keyword_kind("printf"), Some(TokenKind::Printf));
        assert_eq!(keyword_kind("return"), Some(TokenKind::Return));
        assert_eq!(keyword_kind("break"), Some(TokenKind::Break));
        assert_eq!(keyword_kind("main"), Some(TokenKind::Main));
        assert_eq!(keyword_kind("Main"), None);
        assert_eq!(keyword_kind("for"), None);
    }
}
