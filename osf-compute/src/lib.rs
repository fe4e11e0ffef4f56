//! The ordinal algorithms of the 亞 ("old subspecies") notation, together with the
//! term-to-string renderer.
//!
//! Everything in this crate is a pure function over the immutable
//! [`Term`](osf_parser::parser::term::Term) tree: [`ordinal::less_than`] decides the strict
//! total order of the notation, [`ordinal::dom`] classifies a term's limit behavior, and
//! [`ordinal::fund`] computes the fundamental-sequence value `x[y]`. The [`fmt`] module renders
//! terms back to text under configurable display conventions and abbreviates well-known shapes
//! (`1`, `ω`, `Ω`, numerals).
//!
//! All algorithms recurse structurally over their inputs, so recursion depth is bounded by term
//! size and deeply nested terms can exhaust the call stack. This limit is intentional; see the
//! `osf-parser` crate docs.

pub mod fmt;
pub mod ordinal;
