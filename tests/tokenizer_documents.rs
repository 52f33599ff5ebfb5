//! Tokenization tests for complete decl documents.
//!
//! These exercise whole-document scanning: the mandatory first line, the
//! permissive later preprocessor lines, and the full rule order over a
//! realistic program.

use declex::token::TokenKind;
use declex::tokenizer::{tokenize, LexError};

const SCENARIO_A: &str = "#include<stdio.h>\n\
int main() {\n\
dec _loopin0x = 0..\n\
while (_loopin0x < 3..) {\n\
printf(_loopin0x)..\n\
return 0..\n\
}\n";

#[test]
fn scenario_a_tokenizes_fully() {
    let stream = tokenize(SCENARIO_A).unwrap();
    let kinds: Vec<_> = stream.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            // line 1
            TokenKind::Include,
            // int main() {
            TokenKind::Type,
            TokenKind::Main,
            TokenKind::Symbol('('),
            TokenKind::Symbol(')'),
            TokenKind::Symbol('{'),
            // dec _loopin0x = 0..
            TokenKind::Type,
            TokenKind::Var,
            TokenKind::Symbol('='),
            TokenKind::Num,
            TokenKind::StmtEnd,
            // while (_loopin0x < 3..) {
            TokenKind::While,
            TokenKind::Symbol('('),
            TokenKind::Var,
            TokenKind::Symbol('<'),
            TokenKind::Num,
            TokenKind::StmtEnd,
            TokenKind::Symbol(')'),
            TokenKind::Symbol('{'),
            // printf(_loopin0x)..
            TokenKind::Printf,
            TokenKind::Symbol('('),
            TokenKind::Var,
            TokenKind::Symbol(')'),
            TokenKind::StmtEnd,
            // return 0..
            TokenKind::Return,
            TokenKind::Num,
            TokenKind::StmtEnd,
            // }
            TokenKind::Symbol('}'),
        ]
    );
}

#[test]
fn scenario_a_line_numbers() {
    let stream = tokenize(SCENARIO_A).unwrap();
    assert_eq!(stream.tokens()[0].line, 1);
    let return_token = stream
        .iter()
        .find(|t| t.kind == TokenKind::Return)
        .unwrap();
    assert_eq!(return_token.line, 6);
}

#[test]
fn scenario_b_missing_include_fails() {
    let source = "int main() {\nreturn 0..\n}\n";
    assert_eq!(tokenize(source).unwrap_err(), LexError::MandatoryInclude);
}

#[test]
fn scenario_c_bad_printf_argument_still_tokenizes() {
    // Structurally invalid, lexically fine: the tokenizer does not judge
    // printf arguments.
    let source = "#include<stdio.h>\nint main() {\nprintf(123)..\n}\n";
    let stream = tokenize(source).unwrap();
    let kinds: Vec<_> = stream
        .iter()
        .filter(|t| t.line == 3)
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Printf,
            TokenKind::Symbol('('),
            TokenKind::Num,
            TokenKind::Symbol(')'),
            TokenKind::StmtEnd,
        ]
    );
}

#[test]
fn tokenizing_is_deterministic() {
    let first = tokenize(SCENARIO_A).unwrap();
    let second = tokenize(SCENARIO_A).unwrap();
    assert_eq!(first, second);
}

#[test]
fn mixed_document_with_labels_comments_and_literals() {
    let source = "#include<stdio.h>\n\
#include <string.h>\n\
// a comment line\n\
int main() {\n\
loop_ab12: while (_ab3c < 'x'..) {\n\
printf(\"done\\n\")..\n\
break..\n\
}\n\
}\n";
    let stream = tokenize(source).unwrap();
    let kinds: Vec<_> = stream.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Include,
            TokenKind::Include,
            TokenKind::Comment,
            TokenKind::Type,
            TokenKind::Main,
            TokenKind::Symbol('('),
            TokenKind::Symbol(')'),
            TokenKind::Symbol('{'),
            TokenKind::LoopLabel,
            TokenKind::While,
            TokenKind::Symbol('('),
            TokenKind::Var,
            TokenKind::Symbol('<'),
            TokenKind::Char,
            TokenKind::StmtEnd,
            TokenKind::Symbol(')'),
            TokenKind::Symbol('{'),
            TokenKind::Printf,
            TokenKind::Symbol('('),
            TokenKind::Str,
            TokenKind::Symbol(')'),
            TokenKind::StmtEnd,
            TokenKind::Break,
            TokenKind::StmtEnd,
            TokenKind::Symbol('}'),
            TokenKind::Symbol('}'),
        ]
    );
}

#[test]
fn lexical_errors_cite_the_offending_line() {
    let source = "#include<stdio.h>\nint main() {\ndec _ab3c = 1..\n@\n}\n";
    let err = tokenize(source).unwrap_err();
    assert_eq!(err, LexError::InvalidCharacter { line: 4, ch: '@' });
    assert_eq!(err.line(), 4);
}
