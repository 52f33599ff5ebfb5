//! # declex
//!
//! A tokenizer and line-level structural validator for the decl language.
//!
//! The crate exposes two independent pipelines over the same source text:
//!
//! - [`tokenizer`] reduces a document to an ordered [`token::TokenStream`],
//!   applying priority-ordered scanning rules per character.
//! - [`validator`] re-scans the document line by line and checks each
//!   construct against the surface grammar, producing a single
//!   [`validator::ValidationOutcome`].
//!
//! Both pipelines share only the [`recognizers`] predicates and the keyword
//! table; neither consumes the other's output. [`report`] formats the
//! results of either pipeline for the command-line binary.

pub mod recognizers;
pub mod report;
pub mod token;
pub mod tokenizer;
pub mod validator;
