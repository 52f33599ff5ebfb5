//! Token types for the decl language.
//!
//! Tokens are immutable once produced: each carries its kind, the matched
//! lexeme, and the 1-based source line it was scanned from. The kind set is
//! closed; symbols carry their character inside the kind itself and are the
//! only kind rendered without a lexeme.

use serde::Serialize;
use std::fmt;

/// Closed set of lexical categories produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
    Include,
    Comment,
    Type,
    While,
    Printf,
    Return,
    Break,
    FuncName,
    Var,
    Main,
    Ident,
    Num,
    Str,
    Char,
    LoopLabel,
    StmtEnd,
    Symbol(char),
}

impl TokenKind {
    /// Whether tokens of this kind are rendered with their lexeme.
    /// Symbols carry their character in the kind label instead.
    pub fn has_lexeme(&self) -> bool {
        !matches!(self, TokenKind::Symbol(_))
    }

    /// The label used in the token dump and the flattened kind stream.
    pub fn label(&self) -> String {
        match self {
            TokenKind::Include => "INCLUDE".to_string(),
            TokenKind::Comment => "COMMENT".to_string(),
            TokenKind::Type => "TYPE".to_string(),
            TokenKind::While => "WHILE".to_string(),
            TokenKind::Printf => "PRINTF".to_string(),
            TokenKind::Return => "RETURN".to_string(),
            TokenKind::Break => "BREAK".to_string(),
            TokenKind::FuncName => "FUNC_NAME".to_string(),
            TokenKind::Var => "VAR".to_string(),
            TokenKind::Main => "MAIN".to_string(),
            TokenKind::Ident => "IDENT".to_string(),
            TokenKind::Num => "NUM".to_string(),
            TokenKind::Str => "STRING".to_string(),
            TokenKind::Char => "CHAR".to_string(),
            TokenKind::LoopLabel => "LOOP_LABEL".to_string(),
            TokenKind::StmtEnd => "STMT_END".to_string(),
            TokenKind::Symbol(c) => format!("SYM({})", c),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.label())
    }
}

/// A single token: kind, lexeme, and 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }
}

/// Ordered, append-only sequence of tokens owned by one tokenizer invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TokenStream {
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
