use once_cell::sync::Lazy;

/// An application of the head function: `亞(sub, arg)`.
///
/// Atoms are the only terms that can appear as the addends of a [`Term::Sum`], which is what
/// keeps sums flat by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    /// The first argument of the head function, written as a subscript in the subscript display
    /// form.
    pub sub: Term,

    /// The second argument of the head function.
    pub arg: Term,
}

impl Atom {
    /// Creates the atom `亞(sub, arg)`.
    pub fn new(sub: Term, arg: Term) -> Self {
        Self { sub, arg }
    }

    /// Returns true if this atom is `亞(0,0)`, the numeral `1`.
    pub fn is_one(&self) -> bool {
        self.sub == Term::Zero && self.arg == Term::Zero
    }
}

impl From<Atom> for Term {
    fn from(atom: Atom) -> Self {
        Term::Atom(Box::new(atom))
    }
}

/// A term of the notation, in canonical form.
///
/// Canonical form means sums are flat (their addends are [`Atom`]s, never zero or nested sums)
/// and have at least two addends. Terms built with [`Term::plus`] and [`Term::sum`] are always
/// canonical.
///
/// Equality is structural: two terms are equal exactly when they have the same shape. This is
/// the `PartialEq` derive, and it is the only equality used anywhere in the calculator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// The additive identity, `0`.
    Zero,

    /// Left-to-right ordinal addition of two or more atoms. Order is significant; ordinal
    /// addition does not commute.
    Sum(Vec<Atom>),

    /// A single application of the head function.
    Atom(Box<Atom>),
}

/// The numeral `1`, i.e. `亞(0,0)`.
pub static ONE: Lazy<Term> = Lazy::new(|| Atom::new(Term::Zero, Term::Zero).into());

/// The constant `ω`, i.e. `亞(0,1)`.
pub static OMEGA: Lazy<Term> = Lazy::new(|| Atom::new(Term::Zero, ONE.clone()).into());

/// The constant `Ω`, i.e. `亞(1,0)`.
pub static LOMEGA: Lazy<Term> = Lazy::new(|| Atom::new(ONE.clone(), Term::Zero).into());

impl Term {
    /// Adds two terms, maintaining canonical form: zero operands disappear, sums are
    /// concatenated rather than nested, and a single remaining atom is not wrapped in a sum.
    pub fn plus(self, other: Term) -> Term {
        match (self, other) {
            (Term::Zero, t) => t,
            (t, Term::Zero) => t,
            (Term::Sum(mut lhs), Term::Sum(rhs)) => {
                lhs.extend(rhs);
                Term::Sum(lhs)
            },
            (Term::Sum(mut lhs), Term::Atom(rhs)) => {
                lhs.push(*rhs);
                Term::Sum(lhs)
            },
            (Term::Atom(lhs), Term::Sum(rhs)) => {
                let mut atoms = Vec::with_capacity(rhs.len() + 1);
                atoms.push(*lhs);
                atoms.extend(rhs);
                Term::Sum(atoms)
            },
            (Term::Atom(lhs), Term::Atom(rhs)) => Term::Sum(vec![*lhs, *rhs]),
        }
    }

    /// Builds the sum of an already-flat sequence of atoms, collapsing degenerate cases: no
    /// atoms yield [`Term::Zero`] and a single atom yields itself, unwrapped.
    pub fn sum(mut atoms: Vec<Atom>) -> Term {
        match atoms.len() {
            0 => Term::Zero,
            1 => atoms.remove(0).into(),
            _ => Term::Sum(atoms),
        }
    }

    /// Returns the numeral value of this term, if it is one: zero, `亞(0,0)`, or a sum made up
    /// entirely of `亞(0,0)` addends. Any other term returns [`None`].
    pub fn as_numeral(&self) -> Option<usize> {
        match self {
            Term::Zero => Some(0),
            Term::Sum(atoms) => atoms.iter().all(Atom::is_one).then(|| atoms.len()),
            Term::Atom(atom) => atom.is_one().then_some(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// The numeral `n`, built the same way the parser builds it.
    fn numeral(n: usize) -> Term {
        (0..n).fold(Term::Zero, |acc, _| acc.plus(ONE.clone()))
    }

    #[test]
    fn plus_drops_zero() {
        assert_eq!(Term::Zero.plus(OMEGA.clone()), *OMEGA);
        assert_eq!(OMEGA.clone().plus(Term::Zero), *OMEGA);
        assert_eq!(Term::Zero.plus(Term::Zero), Term::Zero);
    }

    #[test]
    fn plus_flattens_sums() {
        let two = numeral(2);
        let four = two.clone().plus(two);
        match four {
            Term::Sum(atoms) => {
                assert_eq!(atoms.len(), 4);
                assert!(atoms.iter().all(Atom::is_one));
            },
            other => panic!("expected a flat sum, got {:?}", other),
        }
    }

    #[test]
    fn sum_collapses_degenerate_cases() {
        assert_eq!(Term::sum(vec![]), Term::Zero);
        assert_eq!(
            Term::sum(vec![Atom::new(Term::Zero, Term::Zero)]),
            *ONE,
        );
        assert_eq!(
            Term::sum(vec![
                Atom::new(Term::Zero, Term::Zero),
                Atom::new(Term::Zero, Term::Zero),
            ]),
            numeral(2),
        );
    }

    #[test]
    fn structural_equality() {
        assert_eq!(*OMEGA, Atom::new(Term::Zero, ONE.clone()).into());
        assert_ne!(*OMEGA, *LOMEGA);
        assert_ne!(numeral(2), numeral(3));
    }

    #[test]
    fn as_numeral() {
        assert_eq!(Term::Zero.as_numeral(), Some(0));
        assert_eq!(ONE.as_numeral(), Some(1));
        assert_eq!(numeral(5).as_numeral(), Some(5));
        assert_eq!(OMEGA.as_numeral(), None);
        assert_eq!(numeral(2).plus(OMEGA.clone()).as_numeral(), None);
    }
}
