use super::{
    error::{kind, Error},
    term::{Atom, Term, LOMEGA, OMEGA, ONE},
    token::{Add, Int, LOmega, Omega},
    Parse,
    Parser,
};
use crate::tokenizer::TokenKind;

/// Parses a numeral and desugars it: `0` is zero, and `n >= 1` is `n` copies of `亞(0,0)` folded
/// together with [`Term::plus`], so the result is canonical by construction.
fn numeral(input: &mut Parser) -> Result<Term, Error> {
    let token = input.try_parse::<Int>()?;
    let value = token
        .lexeme
        .parse::<usize>()
        .map_err(|_| Error::new_fatal(token.span.clone(), kind::InvalidNumeral))?;
    Ok((0..value).fold(Term::Zero, |acc, _| acc.plus(ONE.clone())))
}

/// Parses a single addend: a numeral, one of the `ω`/`Ω` constants, or an atom.
fn operand(input: &mut Parser) -> Result<Term, Error> {
    match input.try_parse_with_fn(numeral) {
        Ok(term) => return Ok(term),
        Err(err) if err.fatal => return Err(err),
        Err(_) => (),
    }

    if input.try_parse::<Omega>().is_ok() {
        return Ok(OMEGA.clone());
    }
    if input.try_parse::<LOmega>().is_ok() {
        return Ok(LOMEGA.clone());
    }

    input.try_parse::<Atom>().map(Term::from)
}

impl Parse for Term {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        // a leading `)` is always a stray closing parenthesis, never a missing term
        if input.peek_kind() == Some(TokenKind::CloseParen) {
            return Err(input.error_fatal(kind::UnclosedParenthesis { opening: false }));
        }

        let mut term = operand(input)?;
        while input.try_parse::<Add>().is_ok() {
            term = term.plus(operand(input)?);
        }
        Ok(term)
    }
}
