use super::{
    error::{kind, Error},
    term::{Atom, Term},
    token::{CloseBrace, CloseParen, Comma, Head, OpenBrace, OpenParen, Underscore},
    Parse,
    Parser,
};
use crate::tokenizer::TokenKind;

/// The token kinds that can begin a term, used to report missing subscripts.
const TERM_START: &[TokenKind] = &[
    TokenKind::Int,
    TokenKind::Omega,
    TokenKind::LOmega,
    TokenKind::Head,
    TokenKind::OpenBrace,
];

/// Parses the optional subscript between the head symbol and the opening parenthesis.
///
/// The original calculator documents the underscore and the braces as individually omittable, so
/// all of `亞_{x}(y)`, `亞_x(y)`, `亞{x}(y)` and `亞x(y)` denote the same atom. A subscript is
/// present whenever the token after the head (and optional underscore) can begin a term; braces
/// are required around nothing (`亞_{}(y)` is an error, like any other empty term).
fn subscript(input: &mut Parser) -> Result<Option<Term>, Error> {
    let underscore = input.try_parse::<Underscore>().is_ok();

    if let Ok(open) = input.try_parse::<OpenBrace>() {
        let sub = match input.try_parse::<Term>() {
            Ok(sub) => sub,
            Err(mut err) => {
                err.fatal = true;
                return Err(err);
            },
        };
        if input.try_parse::<CloseBrace>().is_err() {
            return Err(Error::new_fatal(open.span, kind::UnclosedBrace));
        }
        return Ok(Some(sub));
    }

    match input.peek_kind() {
        Some(TokenKind::Int | TokenKind::Omega | TokenKind::LOmega | TokenKind::Head) => {
            match input.try_parse::<Term>() {
                Ok(sub) => Ok(Some(sub)),
                Err(mut err) => {
                    err.fatal = true;
                    Err(err)
                },
            }
        },
        Some(found) if underscore => {
            // the underscore promises a subscript; `(` or anything else breaks that promise
            Err(input.error_fatal(kind::UnexpectedToken {
                expected: TERM_START,
                found,
            }))
        },
        None if underscore => Err(input.error_fatal(kind::UnexpectedEof)),
        _ => Ok(None),
    }
}

/// Parses one argument of an atom. An immediate `)` means the argument is missing, which is
/// reported as such rather than as a stray parenthesis; all other failures become fatal because
/// nothing else can follow an atom's opening parenthesis.
fn argument(input: &mut Parser) -> Result<Term, Error> {
    if input.peek_kind() == Some(TokenKind::CloseParen) {
        return Err(input.error_fatal(kind::UnexpectedToken {
            expected: TERM_START,
            found: TokenKind::CloseParen,
        }));
    }

    match input.try_parse::<Term>() {
        Ok(term) => Ok(term),
        Err(mut err) => {
            err.fatal = true;
            Err(err)
        },
    }
}

/// Consumes the closing parenthesis of an atom's argument list. On failure the error is fatal,
/// pointing either at the unmatched opening parenthesis (when the input simply ends) or at the
/// stray token that appeared instead.
fn close_args(input: &mut Parser, open: &OpenParen) -> Result<(), Error> {
    match input.try_parse::<CloseParen>() {
        Ok(_) => Ok(()),
        Err(mut err) => {
            if input.peek_kind().is_none() {
                Err(Error::new_fatal(
                    open.span.clone(),
                    kind::UnclosedParenthesis { opening: true },
                ))
            } else {
                err.fatal = true;
                Err(err)
            }
        },
    }
}

impl Parse for Atom {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        input.try_parse::<Head>()?;
        let sub = subscript(input)?;
        let open = input.try_parse::<OpenParen>()?;

        let first = argument(input)?;

        // the two-argument form `亞(sub, arg)` is only available without a subscript; a comma
        // after a subscripted atom's argument falls through to `close_args` and errors there
        if sub.is_none() && input.try_parse::<Comma>().is_ok() {
            let second = argument(input)?;
            close_args(input, &open)?;
            return Ok(Atom::new(first, second));
        }

        close_args(input, &open)?;
        Ok(Atom::new(sub.unwrap_or(Term::Zero), first))
    }
}
