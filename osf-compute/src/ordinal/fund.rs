use super::{degree::dom, error::InvariantViolation};
use osf_parser::parser::term::{Atom, Term, OMEGA, ONE};

/// Computes `x[y]`, the value of the fundamental sequence of `x` at index `y`.
///
/// Which of the five cases applies is decided by the degrees of the atom's sub-term and
/// argument (see [`dom`]); every branch must match the published definition exactly, including
/// which operand is indexed and which is merely classified. The only failures are the two
/// checkpoints where the definition assumes an intermediate degree value is an atom; those
/// surface as [`InvariantViolation`] and never occur for canonical terms.
pub fn fund(x: &Term, y: &Term) -> Result<Term, InvariantViolation> {
    match x {
        Term::Zero => Ok(Term::Zero),
        Term::Sum(atoms) => match atoms.split_last() {
            // only the tail of an additive chain evolves under indexing
            Some((last, rest)) => {
                let last_fund = fund_atom(last, y)?;
                Ok(Term::sum(rest.to_vec()).plus(last_fund))
            },
            None => Err(InvariantViolation::new("a sum term has no addends")),
        },
        Term::Atom(atom) => fund_atom(atom, y),
    }
}

fn fund_atom(x: &Atom, y: &Term) -> Result<Term, InvariantViolation> {
    let Atom { sub, arg } = x;
    let dom_sub = dom(sub);
    let dom_arg = dom(arg);

    if dom_arg == Term::Zero {
        if dom_sub == Term::Zero {
            Ok(Term::Zero)
        } else if dom_sub == *ONE {
            // the successor base case: indexing a degree-1 term yields the index itself
            Ok(y.clone())
        } else {
            Ok(Atom::new(fund(sub, y)?, arg.clone()).into())
        }
    } else if dom_arg == *ONE {
        if dom(y) == *ONE {
            // two-step expansion: fund at the predecessor step of y, plus a probe term built
            // from decrementing the argument
            let prev = fund_atom(x, &fund(y, &Term::Zero)?)?;
            let probe: Term = Atom::new(sub.clone(), fund(arg, &Term::Zero)?).into();
            Ok(prev.plus(probe))
        } else {
            Ok(Term::Zero)
        }
    } else if dom_arg == *OMEGA {
        Ok(Atom::new(sub.clone(), fund(arg, y)?).into())
    } else {
        let Term::Atom(dom_arg) = dom_arg else {
            return Err(InvariantViolation::new("the degree of an argument is not an atom"));
        };
        let c = &dom_arg.sub;
        if dom(y) == *ONE {
            let prev = fund_atom(x, &fund(y, &Term::Zero)?)?;
            let Term::Atom(prev) = prev else {
                return Err(InvariantViolation::new(
                    "the previous expansion step is not an atom",
                ));
            };
            let gamma = prev.arg;
            let index: Term = Atom::new(fund(c, &Term::Zero)?, gamma).into();
            Ok(Atom::new(sub.clone(), fund(arg, &index)?).into())
        } else {
            let index: Term = Atom::new(fund(c, &Term::Zero)?, Term::Zero).into();
            Ok(Atom::new(sub.clone(), fund(arg, &index)?).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use osf_parser::parser::parse_term;
    use osf_parser::parser::term::LOMEGA;

    /// Asserts that `x[y]` equals `expected`, with all three given as source text.
    fn assert_fund(x: &str, y: &str, expected: &str) {
        let x = parse_term(x).unwrap();
        let y = parse_term(y).unwrap();
        let expected = parse_term(expected).unwrap();
        assert_eq!(fund(&x, &y).unwrap(), expected);
    }

    #[test]
    fn zero_index_base_cases() {
        assert_fund("0", "w", "0");
        assert_fund("1", "w", "0");
        assert_fund("1", "0", "0");
    }

    #[test]
    fn degree_one_terms_yield_the_index() {
        // ω = 亞(0,亞(0,0)) has argument degree 1, so ω[n] = n
        assert_fund("w", "1", "1");
        assert_fund("w", "2", "2");
        assert_fund("w", "3", "3");
        // Ω = 亞(亞(0,0),0) has sub-term degree 1, so Ω[y] = y for every y
        assert_fund("W", "2", "2");
        assert_fund("W", "w", "w");
        let big = parse_term("亞(w,0)").unwrap();
        assert_eq!(fund(&LOMEGA, &big).unwrap(), big);
    }

    #[test]
    fn degree_one_argument_with_limit_index_collapses_to_zero() {
        // dom(ω) = ω ≠ 1, so ω[ω] = 0 under the published definition
        assert_fund("w", "w", "0");
    }

    #[test]
    fn only_the_last_addend_of_a_sum_evolves() {
        assert_fund("w+w", "2", "w+2");
        assert_fund("w+w+w", "1", "w+w+1");
        assert_fund("1+w", "3", "1+3");
    }

    #[test]
    fn index_propagates_into_a_limit_argument() {
        // 亞(0,ω) has argument degree ω, so the index goes straight into the argument
        assert_fund("亞(0,w)", "2", "亞(0,2)");
        assert_fund("亞(1,w)", "3", "亞(1,3)");
    }

    #[test]
    fn index_propagates_into_the_sub_term() {
        // 亞(ω,0) has argument degree 0 and sub-term degree ω
        assert_fund("亞(w,0)", "2", "亞(2,0)");
        assert_fund("亞(w,0)", "0", "亞(0,0)");
    }

    #[test]
    fn uncountable_degree_argument() {
        // dom(亞(0,Ω)) reaches the atom case: dom(Ω) = Ω
        assert_fund("亞(0,W)", "0", "w");
        assert_fund("亞(0,W)", "1", "亞(0,w)");
    }

    #[test]
    fn deeper_expansions() {
        // the uncountable case threads gamma from the previous step
        assert_fund("亞(0,W)", "2", "亞(0,亞(0,w))");
        // the two-step expansion duplicates the decremented atom
        assert_fund("亞(0,w+1)", "2", "亞(0,w)+亞(0,w)");
        assert_fund("W+w", "3", "W+3");
    }

    #[test]
    fn fund_then_degree_round() {
        // ω[2] = 2, whose degree is 1
        let two = fund(&OMEGA, &parse_term("2").unwrap()).unwrap();
        assert_eq!(dom(&two), *ONE);
    }
}
