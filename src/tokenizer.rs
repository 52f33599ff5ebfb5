//! Line-oriented tokenizer for the decl language.
//!
//! The tokenizer consumes a full document line by line and either produces a
//! complete [`TokenStream`] or halts with a line-numbered [`LexError`]. Line
//! handling, in order:
//!
//! 1. Line 1 must be the mandatory include directive and emits one INCLUDE
//!    token with the canonical lexeme.
//! 2. Blank lines are skipped.
//! 3. Later lines starting with `#` are accepted permissively as INCLUDE
//!    tokens without validation. The asymmetry with the strict line-1 check
//!    is intentional: it admits additional standard-library includes.
//! 4. `//` lines must satisfy the comment recognizer and emit COMMENT.
//! 5. Everything else is scanned character by character with the rule order
//!    of [`scan_line`]: loop label, identifier, number, statement
//!    terminator, string literal, char literal, symbol.
//!
//! There is no recovery: the first violation ends the scan. Buffers are
//! growable, but [`ScanLimits`] turns runaway token counts or lexeme lengths
//! into explicit capacity errors.

use crate::recognizers::{
    is_comment_line, is_function_name, is_include_line, is_variable_name, keyword_kind,
    COMMENT_MARKER, INCLUDE_DIRECTIVE, LOOP_LABEL_PREFIX,
};
use crate::token::{Token, TokenKind, TokenStream};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Characters accepted as single-character SYMBOL tokens.
pub const SYMBOLS: &[char] = &[
    '(', ')', '{', '}', '=', ',', '+', '-', '*', '/', '<', '>', ';', ':', '?', '[', ']', '|',
];

/// A chunk that ends with `:` must open with the prefix, then letters, then
/// exactly two digits, then the colon. Trailing characters after that colon
/// are tolerated as long as the chunk's final character is `:` (checked by
/// the caller), matching the reference recognizer.
static LOOP_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^loop_[A-Za-z]+[0-9]{2}:").unwrap());

/// Capacity bounds for one tokenizer invocation.
///
/// Exceeding a bound is reported as an explicit [`LexError`] instead of
/// silently truncating or overflowing.
#[derive(Debug, Clone, Copy)]
pub struct ScanLimits {
    /// Maximum number of tokens in one stream.
    pub max_tokens: usize,
    /// Maximum length of one lexeme, in characters.
    pub max_lexeme_len: usize,
}

impl Default for ScanLimits {
    fn default() -> Self {
        Self {
            max_tokens: 1024,
            max_lexeme_len: 256,
        }
    }
}

/// Lexical errors. Each carries the 1-based line it was raised on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// Line 1 is not the mandatory include directive.
    MandatoryInclude,
    /// A `//` line with punctuation in its body.
    InvalidComment { line: usize },
    /// A `loop_` chunk ending in `:` that does not follow the label grammar.
    InvalidLoopLabel { line: usize },
    /// A character no scanning rule accepts.
    InvalidCharacter { line: usize, ch: char },
    /// The token stream outgrew [`ScanLimits::max_tokens`].
    TokenLimitExceeded { line: usize, limit: usize },
    /// A single lexeme outgrew [`ScanLimits::max_lexeme_len`].
    LexemeTooLong { line: usize, limit: usize },
}

impl LexError {
    /// The 1-based line the error was raised on.
    pub fn line(&self) -> usize {
        match self {
            LexError::MandatoryInclude => 1,
            LexError::InvalidComment { line }
            | LexError::InvalidLoopLabel { line }
            | LexError::InvalidCharacter { line, .. }
            | LexError::TokenLimitExceeded { line, .. }
            | LexError::LexemeTooLong { line, .. } => *line,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::MandatoryInclude => {
                write!(f, "Error: first line must be {}", INCLUDE_DIRECTIVE)
            }
            LexError::InvalidComment { line } => {
                write!(f, "Error: invalid comment at line {}", line)
            }
            LexError::InvalidLoopLabel { line } => {
                write!(f, "Error: invalid loop label at line {}", line)
            }
            LexError::InvalidCharacter { line, ch } => {
                write!(f, "Error: invalid character '{}' at line {}", ch, line)
            }
            LexError::TokenLimitExceeded { line, limit } => {
                write!(f, "Error: token limit of {} exceeded at line {}", limit, line)
            }
            LexError::LexemeTooLong { line, limit } => {
                write!(
                    f,
                    "Error: token at line {} exceeds {} characters",
                    line, limit
                )
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Tokenize a full document with the default [`ScanLimits`].
pub fn tokenize(source: &str) -> Result<TokenStream, LexError> {
    tokenize_with_limits(source, ScanLimits::default())
}

/// Tokenize a full document. Pure: the result depends only on `source` and
/// `limits`, and identical inputs always yield identical streams.
pub fn tokenize_with_limits(source: &str, limits: ScanLimits) -> Result<TokenStream, LexError> {
    let mut stream = TokenStream::new();

    for (idx, line) in source.lines().enumerate() {
        let lineno = idx + 1;

        if lineno == 1 {
            if !is_include_line(line) {
                return Err(LexError::MandatoryInclude);
            }
            push_token(
                &mut stream,
                Token::new(TokenKind::Include, INCLUDE_DIRECTIVE, lineno),
                &limits,
            )?;
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        // Later preprocessor lines are taken as-is, unlike line 1.
        if trimmed.starts_with('#') {
            push_token(
                &mut stream,
                Token::new(TokenKind::Include, trimmed, lineno),
                &limits,
            )?;
            continue;
        }

        if let Some(body) = trimmed.strip_prefix(COMMENT_MARKER) {
            if !is_comment_line(trimmed) {
                return Err(LexError::InvalidComment { line: lineno });
            }
            push_token(
                &mut stream,
                Token::new(TokenKind::Comment, body, lineno),
                &limits,
            )?;
            continue;
        }

        scan_line(line, lineno, &limits, &mut stream)?;
    }

    Ok(stream)
}

/// Scan one code line left to right, skipping whitespace between tokens.
/// Rules are tried in priority order at each position; the first match
/// consumes input and restarts the loop.
fn scan_line(
    line: &str,
    lineno: usize,
    limits: &ScanLimits,
    stream: &mut TokenStream,
) -> Result<(), LexError> {
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        // Rule 1: loop label. Greedily take the chunk up to whitespace, '{'
        // or '('; only chunks ending in ':' are judged as labels. A chunk
        // without the colon is left for the identifier rule.
        if starts_with_at(&chars, i, LOOP_LABEL_PREFIX) {
            let mut j = i;
            while j < chars.len()
                && !chars[j].is_ascii_whitespace()
                && chars[j] != '{'
                && chars[j] != '('
            {
                j += 1;
            }
            let chunk: String = chars[i..j].iter().collect();
            if chunk.ends_with(':') {
                if !LOOP_LABEL.is_match(&chunk) {
                    return Err(LexError::InvalidLoopLabel { line: lineno });
                }
                push_token(stream, Token::new(TokenKind::LoopLabel, chunk, lineno), limits)?;
                i = j;
                continue;
            }
        }

        // Rule 2: identifier or keyword.
        if c.is_ascii_alphabetic() || c == '_' {
            let mut j = i;
            while j < chars.len() && (chars[j].is_ascii_alphanumeric() || chars[j] == '_') {
                j += 1;
            }
            let ident: String = chars[i..j].iter().collect();
            let kind = classify_identifier(&ident);
            push_token(stream, Token::new(kind, ident, lineno), limits)?;
            i = j;
            continue;
        }

        // Rule 3: number.
        if c.is_ascii_digit() {
            let mut j = i;
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            let num: String = chars[i..j].iter().collect();
            push_token(stream, Token::new(TokenKind::Num, num, lineno), limits)?;
            i = j;
            continue;
        }

        // Rule 4: statement terminator. A lone '.' is not a symbol and falls
        // through to the invalid-character rule.
        if c == '.' && chars.get(i + 1) == Some(&'.') {
            push_token(stream, Token::new(TokenKind::StmtEnd, "..", lineno), limits)?;
            i += 2;
            continue;
        }

        // Rule 5: string literal. Escapes are kept verbatim (backslash and
        // the following character); an unterminated literal runs to the end
        // of the line without error.
        if c == '"' {
            let mut lit = String::new();
            let mut j = i + 1;
            while j < chars.len() {
                if chars[j] == '\\' && j + 1 < chars.len() {
                    lit.push(chars[j]);
                    lit.push(chars[j + 1]);
                    j += 2;
                    continue;
                }
                if chars[j] == '"' {
                    j += 1;
                    break;
                }
                lit.push(chars[j]);
                j += 1;
            }
            push_token(stream, Token::new(TokenKind::Str, lit, lineno), limits)?;
            i = j;
            continue;
        }

        // Rule 6: char literal. One escape pair or one plain character, then
        // an optional closing quote.
        if c == '\'' {
            let mut lit = String::new();
            let mut j = i + 1;
            if chars.get(j) == Some(&'\\') && j + 1 < chars.len() {
                lit.push(chars[j]);
                lit.push(chars[j + 1]);
                j += 2;
            } else if j < chars.len() {
                lit.push(chars[j]);
                j += 1;
            }
            if chars.get(j) == Some(&'\'') {
                j += 1;
            }
            push_token(stream, Token::new(TokenKind::Char, lit, lineno), limits)?;
            i = j;
            continue;
        }

        // Rule 7: symbol.
        if SYMBOLS.contains(&c) {
            push_token(
                stream,
                Token::new(TokenKind::Symbol(c), c.to_string(), lineno),
                limits,
            )?;
            i += 1;
            continue;
        }

        // Rule 8: nothing matched.
        return Err(LexError::InvalidCharacter { line: lineno, ch: c });
    }

    Ok(())
}

/// Classify a maximal identifier run: keyword table first, then function
/// name, then variable name, then generic identifier.
fn classify_identifier(ident: &str) -> TokenKind {
    if let Some(kind) = keyword_kind(ident) {
        return kind;
    }
    if is_function_name(ident) {
        return TokenKind::FuncName;
    }
    if is_variable_name(ident) {
        return TokenKind::Var;
    }
    TokenKind::Ident
}

fn starts_with_at(chars: &[char], at: usize, prefix: &str) -> bool {
    let mut idx = at;
    for p in prefix.chars() {
        if chars.get(idx) != Some(&p) {
            return false;
        }
        idx += 1;
    }
    true
}

fn push_token(stream: &mut TokenStream, token: Token, limits: &ScanLimits) -> Result<(), LexError> {
    if token.lexeme.chars().count() > limits.max_lexeme_len {
        return Err(LexError::LexemeTooLong {
            line: token.line,
            limit: limits.max_lexeme_len,
        });
    }
    if stream.len() >= limits.max_tokens {
        return Err(LexError::TokenLimitExceeded {
            line: token.line,
            limit: limits.max_tokens,
        });
    }
    stream.push(token);
    Ok(())
}
