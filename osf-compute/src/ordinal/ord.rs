use osf_parser::parser::term::{Atom, Term};

/// Compares two atoms lexicographically on `(sub, arg)`.
///
/// This is what encodes the ordinal order of the notation: the comparison is structural, not
/// numeric.
fn atom_lt(s: &Atom, t: &Atom) -> bool {
    less_than(&s.sub, &t.sub) || (s.sub == t.sub && less_than(&s.arg, &t.arg))
}

/// Returns true if `s` is strictly below `t` in the order of the notation.
///
/// Over canonical terms this is a strict total order: together with structural equality, exactly
/// one of `less_than(s, t)`, `s == t`, `less_than(t, s)` holds.
///
/// An atom compared against a sum is compared against the sum's leading addend only, counting
/// equality with the leading addend as "less" (a sum strictly exceeds its own first addend).
/// This conflation is part of the published definition and is load-bearing; do not refine it.
pub fn less_than(s: &Term, t: &Term) -> bool {
    match (s, t) {
        (Term::Zero, t) => *t != Term::Zero,
        (_, Term::Zero) => false,
        (Term::Atom(s), Term::Atom(t)) => atom_lt(s, t),
        (Term::Atom(s), Term::Sum(t_add)) => **s == t_add[0] || atom_lt(s, &t_add[0]),
        (Term::Sum(s_add), Term::Atom(t)) => atom_lt(&s_add[0], t),
        (Term::Sum(s_add), Term::Sum(t_add)) => {
            // compare leading addends, then recurse on the remainders
            atom_lt(&s_add[0], &t_add[0])
                || (s_add[0] == t_add[0]
                    && less_than(
                        &Term::sum(s_add[1..].to_vec()),
                        &Term::sum(t_add[1..].to_vec()),
                    ))
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use osf_parser::parser::parse_term;
    use osf_parser::parser::term::{LOMEGA, OMEGA, ONE};

    /// A ladder of terms expected to be in strictly increasing order.
    fn ladder() -> Vec<Term> {
        [
            "0",
            "1",
            "2",
            "3",
            "w",
            "w+1",
            "w+2",
            "w+w",
            "亞(0,2)",
            "亞(0,w)",
            "W",
            "W+w",
            "亞(1,1)",
            "亞(1,w)",
            "亞(2,0)",
            "亞(w,0)",
            "亞(W,0)",
        ]
        .into_iter()
        .map(|text| parse_term(text).unwrap())
        .collect()
    }

    #[test]
    fn fixed_facts() {
        assert!(less_than(&Term::Zero, &ONE));
        assert!(less_than(&OMEGA, &LOMEGA));
        assert!(!less_than(&LOMEGA, &OMEGA));
        assert!(!less_than(&ONE, &ONE));
    }

    #[test]
    fn ladder_is_strictly_increasing() {
        let terms = ladder();
        for (i, s) in terms.iter().enumerate() {
            for (j, t) in terms.iter().enumerate() {
                assert_eq!(
                    less_than(s, t),
                    i < j,
                    "less_than({:?}, {:?}) disagrees with ladder positions {} and {}",
                    s, t, i, j,
                );
            }
        }
    }

    #[test]
    fn trichotomy() {
        let terms = ladder();
        for s in &terms {
            for t in &terms {
                let cases = [less_than(s, t), s == t, less_than(t, s)];
                assert_eq!(
                    cases.iter().filter(|&&case| case).count(),
                    1,
                    "trichotomy failed for {:?} and {:?}",
                    s, t,
                );
            }
        }
    }

    #[test]
    fn transitivity() {
        let terms = ladder();
        for s in &terms {
            for t in &terms {
                for u in &terms {
                    if less_than(s, t) && less_than(t, u) {
                        assert!(less_than(s, u), "transitivity failed: {:?} {:?} {:?}", s, t, u);
                    }
                }
            }
        }
    }

    #[test]
    fn sum_exceeds_its_leading_addend() {
        let omega = parse_term("w").unwrap();
        let omega_plus_one = parse_term("w+1").unwrap();
        assert!(less_than(&omega, &omega_plus_one));
        assert!(!less_than(&omega_plus_one, &omega));
    }
}
