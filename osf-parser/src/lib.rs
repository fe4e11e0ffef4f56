//! Tokenizer, parser, and term model for the 亞 ("old subspecies") ordinal notation.
//!
//! Terms of the notation are built from zero, the binary head function `亞(sub, arg)`, and
//! left-to-right ordinal addition. The parser turns source text such as `亞(1,0)+w` into a
//! canonical [`Term`](parser::term::Term); the `osf-compute` crate implements the ordinal
//! algorithms over those terms.
//!
//! # Recursion
//!
//! Terms are plain recursive trees and every operation over them recurses structurally. Inputs
//! with pathological nesting depth can therefore exhaust the call stack; this is a deliberate
//! resource limit, kept in exchange for exactly matching the published definition of the
//! notation.

pub mod parser;
pub mod tokenizer;
