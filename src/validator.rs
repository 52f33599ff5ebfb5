//! Line-level structural validator for the decl language.
//!
//! The validator re-scans the raw document independently of the tokenizer
//! and applies one grammar rule per line, short-circuiting on the first
//! failure. Rule order is observable and therefore fixed: a `while` line
//! that also contains a type keyword is judged by the declaration rule, not
//! the loop rule.
//!
//! Two whole-document preconditions run before the per-line pass: the
//! mandatory include on line 1, and the presence of a `main(` construct
//! somewhere in the document.
//!
//! The pass is linear with no backtracking and no brace matching. Lines that
//! match no rule are accepted unconditionally; that permissive fallback is
//! part of the grammar, not an oversight.

use crate::recognizers::{is_comment_line, is_identifier, is_include_line, is_variable_name,
    COMMENT_MARKER, INCLUDE_DIRECTIVE};
use std::fmt;

/// Structural rule violations. Line-numbered except for the two
/// whole-document preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    MissingInclude,
    MainNotFound,
    InvalidComment { line: usize },
    PrintfMissingParen { line: usize },
    PrintfInvalidArgument { line: usize, argument: String },
    PrintfMissingTerminator { line: usize },
    InvalidVariableName { line: usize, name: String },
    DeclarationMissingTerminator { line: usize },
    WhileMissingParens { line: usize },
    WhileMissingComparator { line: usize },
    WhileMissingTerminator { line: usize },
    LoopVariableNotFound { line: usize },
    ReturnMissingTerminator { line: usize },
    BreakMissingTerminator { line: usize },
}

impl StructuralError {
    /// The 1-based failing line, if the violation is line-scoped.
    pub fn line(&self) -> Option<usize> {
        match self {
            StructuralError::MissingInclude | StructuralError::MainNotFound => None,
            StructuralError::InvalidComment { line }
            | StructuralError::PrintfMissingParen { line }
            | StructuralError::PrintfInvalidArgument { line, .. }
            | StructuralError::PrintfMissingTerminator { line }
            | StructuralError::InvalidVariableName { line, .. }
            | StructuralError::DeclarationMissingTerminator { line }
            | StructuralError::WhileMissingParens { line }
            | StructuralError::WhileMissingComparator { line }
            | StructuralError::WhileMissingTerminator { line }
            | StructuralError::LoopVariableNotFound { line }
            | StructuralError::ReturnMissingTerminator { line }
            | StructuralError::BreakMissingTerminator { line } => Some(*line),
        }
    }
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralError::MissingInclude => {
                write!(f, "first line must be {}", INCLUDE_DIRECTIVE)
            }
            StructuralError::MainNotFound => write!(f, "main function not found"),
            StructuralError::InvalidComment { line } => {
                write!(f, "Line {}: invalid comment characters", line)
            }
            StructuralError::PrintfMissingParen { line } => {
                write!(f, "Line {}: printf missing closing parenthesis", line)
            }
            StructuralError::PrintfInvalidArgument { line, argument } => {
                write!(
                    f,
                    "Line {}: printf argument not valid variable '{}'",
                    line, argument
                )
            }
            StructuralError::PrintfMissingTerminator { line } => {
                write!(f, "Line {}: statement missing '..' or ';' terminator", line)
            }
            StructuralError::InvalidVariableName { line, name } => {
                write!(f, "Line {}: invalid variable name '{}'", line, name)
            }
            StructuralError::DeclarationMissingTerminator { line } => {
                write!(f, "Line {}: missing '..' or ';' terminator", line)
            }
            StructuralError::WhileMissingParens { line } => {
                write!(f, "Line {}: while parenthesis missing", line)
            }
            StructuralError::WhileMissingComparator { line } => {
                write!(f, "Line {}: while comparator expected '<'", line)
            }
            StructuralError::WhileMissingTerminator { line } => {
                write!(f, "Line {}: while condition missing '..' or ';'", line)
            }
            StructuralError::LoopVariableNotFound { line } => {
                write!(f, "Line {}: while variable not found", line)
            }
            StructuralError::ReturnMissingTerminator { line } => {
                write!(f, "Line {}: return missing '..' or ';'", line)
            }
            StructuralError::BreakMissingTerminator { line } => {
                write!(f, "Line {}: break missing '..' or ';'", line)
            }
        }
    }
}

impl std::error::Error for StructuralError {}

/// Terminal result of one validator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub accepted: bool,
    pub failing_line: Option<usize>,
    pub reason: Option<String>,
}

impl ValidationOutcome {
    fn accepted() -> Self {
        Self {
            accepted: true,
            failing_line: None,
            reason: None,
        }
    }

    fn rejected(error: &StructuralError) -> Self {
        Self {
            accepted: false,
            failing_line: error.line(),
            reason: Some(error.to_string()),
        }
    }
}

/// Validate a full document, producing a single [`ValidationOutcome`].
pub fn validate(source: &str) -> ValidationOutcome {
    match check_document(source) {
        Ok(()) => ValidationOutcome::accepted(),
        Err(error) => ValidationOutcome::rejected(&error),
    }
}

/// Validate a full document, exposing the specific violation.
pub fn check_document(source: &str) -> Result<(), StructuralError> {
    match source.lines().next() {
        Some(first) if is_include_line(first) => {}
        _ => return Err(StructuralError::MissingInclude),
    }

    if !source.lines().any(contains_main) {
        return Err(StructuralError::MainNotFound);
    }

    for (idx, line) in source.lines().enumerate() {
        let lineno = idx + 1;
        if lineno == 1 {
            continue;
        }
        check_line(line, lineno)?;
    }

    Ok(())
}

fn contains_main(line: &str) -> bool {
    line.contains("main(") || line.contains("main (")
}

/// Apply the per-construct rules to one line. First matching rule wins.
fn check_line(line: &str, lineno: usize) -> Result<(), StructuralError> {
    let trimmed = line.trim_start();

    if trimmed.is_empty() {
        return Ok(());
    }

    if trimmed.starts_with(COMMENT_MARKER) {
        if !is_comment_line(trimmed) {
            return Err(StructuralError::InvalidComment { line: lineno });
        }
        return Ok(());
    }

    // Function headers are skipped without further checks; this subsumes
    // main's own header line.
    if is_function_header(trimmed) {
        return Ok(());
    }

    if let Some(call) = line.find("printf(") {
        return check_printf(line, call, lineno);
    }

    if line.contains("dec ") || line.contains("int ") {
        return check_declaration(line, lineno);
    }

    if line.contains("while") {
        return check_while(line, lineno);
    }

    if line.contains("return") {
        return if has_terminator(line) {
            Ok(())
        } else {
            Err(StructuralError::ReturnMissingTerminator { line: lineno })
        };
    }

    if line.contains("break") {
        return if has_terminator(line) {
            Ok(())
        } else {
            Err(StructuralError::BreakMissingTerminator { line: lineno })
        };
    }

    // Permissive fallback: any other line is accepted.
    Ok(())
}

fn has_terminator(line: &str) -> bool {
    line.contains("..") || line.contains(';')
}

/// A header opens with a type keyword and its `(` appears before any `=` or
/// statement terminator.
fn is_function_header(trimmed: &str) -> bool {
    if !(trimmed.starts_with("int ") || trimmed.starts_with("dec ")) {
        return false;
    }
    let paren = match trimmed.find('(') {
        Some(at) => at,
        None => return false,
    };
    let before = |marker: &str| trimmed.find(marker).map_or(true, |at| paren < at);
    before("=") && before(";") && before("..")
}

/// The argument sits between `printf(` and the first following `)`. With
/// comma-separated arguments, only the last one is judged; it must be a
/// double-quoted literal or a valid variable name. The statement terminator
/// must appear at or after the closing parenthesis.
fn check_printf(line: &str, call: usize, lineno: usize) -> Result<(), StructuralError> {
    let after = &line[call + "printf(".len()..];
    let close = match after.find(')') {
        Some(at) => at,
        None => return Err(StructuralError::PrintfMissingParen { line: lineno }),
    };

    let inside = after[..close].trim();
    let argument = match inside.rfind(',') {
        Some(comma) => inside[comma + 1..].trim(),
        None => inside,
    };

    if !(argument.starts_with('"') || is_variable_name(argument)) {
        return Err(StructuralError::PrintfInvalidArgument {
            line: lineno,
            argument: argument.to_string(),
        });
    }

    if !has_terminator(&after[close..]) {
        return Err(StructuralError::PrintfMissingTerminator { line: lineno });
    }

    Ok(())
}

/// The declared name is the token after the type keyword, cut at the first
/// `=`, `;`, `.` or whitespace. A bare type keyword with nothing after it
/// passes through unchecked.
fn check_declaration(line: &str, lineno: usize) -> Result<(), StructuralError> {
    if contains_main(line) {
        return Ok(());
    }

    let type_at = match line.find("dec ").or_else(|| line.find("int ")) {
        Some(at) => at,
        None => return Ok(()),
    };

    let mut fields = line[type_at..].split_whitespace();
    let _type_keyword = fields.next();
    if let Some(raw) = fields.next() {
        let name: String = raw
            .chars()
            .take_while(|&c| c != '=' && c != ';' && c != '.')
            .collect();
        if !(is_variable_name(&name) || is_identifier(&name)) {
            return Err(StructuralError::InvalidVariableName {
                line: lineno,
                name,
            });
        }
        if !has_terminator(line) {
            return Err(StructuralError::DeclarationMissingTerminator { line: lineno });
        }
    }

    Ok(())
}

/// Loop lines need parentheses and a `<` comparator. Without a `{` after the
/// first `)` the line must carry the statement terminator. Some underscore-
/// prefixed run in the line must name a plausible loop variable.
fn check_while(line: &str, lineno: usize) -> Result<(), StructuralError> {
    if !(line.contains('(') && line.contains(')')) {
        return Err(StructuralError::WhileMissingParens { line: lineno });
    }
    if !line.contains('<') {
        return Err(StructuralError::WhileMissingComparator { line: lineno });
    }

    if let Some(close) = line.find(')') {
        let after = &line[close..];
        if !after.contains('{') && !has_terminator(line) {
            return Err(StructuralError::WhileMissingTerminator { line: lineno });
        }
    }

    let found = underscore_runs(line)
        .iter()
        .any(|cand| is_variable_name(cand) || is_identifier(cand));
    if !found {
        return Err(StructuralError::LoopVariableNotFound { line: lineno });
    }

    Ok(())
}

/// Maximal letters/digits/underscore runs starting at each `_` in the line.
fn underscore_runs(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut runs = Vec::new();
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            let run: String = chars[i..]
                .iter()
                .take_while(|c| c.is_ascii_alphanumeric() || **c == '_')
                .collect();
            runs.push(run);
        }
    }
    runs
}
