use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    /// The head symbol of the notation, either as its glyph or its ASCII substitute.
    #[token("亞")]
    #[token("A")]
    Head,

    /// The constant `ω`, shorthand for `亞(0,1)`.
    #[token("ω")]
    #[token("w")]
    Omega,

    /// The constant `Ω`, shorthand for `亞(1,0)`.
    #[token("Ω")]
    #[token("W")]
    LOmega,

    #[token("+")]
    Add,

    #[token(",")]
    Comma,

    #[token("_")]
    Underscore,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("{")]
    OpenBrace,

    #[token("}")]
    CloseBrace,

    #[regex(r"[0-9]+")]
    Int,

    /// Any other character. The parser rejects these with a syntax error; they are kept as
    /// tokens so the error can point at them.
    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
