use osf_parser::parser::term::{Atom, Term, OMEGA, ONE};

/// Classifies the limiting behavior of `t`, returning `0`, `1`, `ω`, or an atom.
///
/// The result drives the case split of [`fund`](super::fund): `0` for the empty term, `1` for
/// successor-like terms, `ω` for ω-type limits, and a larger atom for limits that climb through
/// an uncountable stage.
pub fn dom(t: &Term) -> Term {
    match t {
        Term::Zero => Term::Zero,
        // only the last addend of a sum is still being approached
        Term::Sum(atoms) => dom_atom(&atoms[atoms.len() - 1]),
        Term::Atom(atom) => dom_atom(atom),
    }
}

fn dom_atom(atom: &Atom) -> Term {
    let dom_sub = dom(&atom.sub);
    let dom_arg = dom(&atom.arg);
    if dom_arg == Term::Zero {
        if dom_sub == Term::Zero || dom_sub == *ONE {
            // the atom is its own degree: a successor-like point
            atom.clone().into()
        } else {
            dom_sub
        }
    } else {
        // any term whose argument is itself a limit is an ω-type limit
        OMEGA.clone()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use osf_parser::parser::parse_term;
    use osf_parser::parser::term::LOMEGA;

    #[test]
    fn base_degrees() {
        assert_eq!(dom(&Term::Zero), Term::Zero);
        assert_eq!(dom(&ONE), *ONE);
        assert_eq!(dom(&OMEGA), *OMEGA);
        assert_eq!(dom(&LOMEGA), *LOMEGA);
    }

    #[test]
    fn limit_argument_gives_omega() {
        assert_eq!(dom(&parse_term("亞(0,w)").unwrap()), *OMEGA);
        assert_eq!(dom(&parse_term("亞(1,w)").unwrap()), *OMEGA);
        assert_eq!(dom(&parse_term("亞(0,W)").unwrap()), *OMEGA);
    }

    #[test]
    fn degree_propagates_from_the_sub_term() {
        // dom(亞(ω,0)) = dom(ω) = ω
        assert_eq!(dom(&parse_term("亞(w,0)").unwrap()), *OMEGA);
        // dom(亞(Ω,0)) = dom(Ω) = Ω
        assert_eq!(dom(&parse_term("亞(W,0)").unwrap()), *LOMEGA);
    }

    #[test]
    fn sums_take_the_degree_of_their_last_addend() {
        assert_eq!(dom(&parse_term("w+1").unwrap()), *ONE);
        assert_eq!(dom(&parse_term("1+w").unwrap()), *OMEGA);
        assert_eq!(dom(&parse_term("3").unwrap()), *ONE);
    }
}
