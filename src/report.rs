//! Output formatting for both pipelines.
//!
//! Rendering is kept apart from scanning so the tokenizer and validator stay
//! pure. The plain token dump prints one line per token, then the flattened
//! kind stream ten kinds per row between fixed banners; the JSON format
//! serializes the stream as-is for tooling.

use crate::token::TokenStream;
use crate::tokenizer::LexError;
use crate::validator::ValidationOutcome;
use std::fmt::Write;

/// Kinds per row in the flattened stream section.
pub const KINDS_PER_ROW: usize = 10;

pub const STREAM_HEADER: &str = "==== TOKEN STREAM ====";
pub const STREAM_FOOTER: &str = "==== END TOKEN STREAM ====";

/// Render the plain-text token dump: per-token lines, then the flattened
/// kind stream, then the end banner.
pub fn render_token_dump(stream: &TokenStream) -> String {
    let mut out = String::new();

    for token in stream {
        if token.kind.has_lexeme() {
            let _ = writeln!(out, "{:<20} : {}", token.kind, token.lexeme);
        } else {
            let _ = writeln!(out, "{}", token.kind);
        }
    }

    let _ = writeln!(out, "\n{}", STREAM_HEADER);
    for (i, token) in stream.iter().enumerate() {
        let _ = write!(out, "{} ", token.kind);
        if (i + 1) % KINDS_PER_ROW == 0 {
            out.push('\n');
        }
    }
    let _ = writeln!(out, "\n{}", STREAM_FOOTER);

    out
}

/// Render the token stream as pretty-printed JSON.
pub fn render_token_json(stream: &TokenStream) -> serde_json::Result<String> {
    serde_json::to_string_pretty(stream)
}

/// Render a tokenizer failure: the line-numbered diagnostic, then the
/// terminal failure message.
pub fn render_lex_failure(error: &LexError) -> String {
    format!("{}\nLexical analysis failed.\n", error)
}

/// Render a validator outcome as a single PARSE SUCCESS / PARSE ERROR line.
pub fn render_validation(outcome: &ValidationOutcome) -> String {
    if outcome.accepted {
        "PARSE SUCCESS: Program ACCEPTED\n".to_string()
    } else {
        let reason = outcome
            .reason
            .as_deref()
            .unwrap_or("structure validation failed");
        format!("PARSE ERROR: {}\n", reason)
    }
}
