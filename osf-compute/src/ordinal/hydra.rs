use osf_parser::parser::term::{Atom, Term};

/// One node of the hydra encoding: its depth in the tree and its numeral label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HydraNode {
    /// Depth of the node below the (implicit) root.
    pub depth: usize,

    /// The numeral value of the atom's sub-term.
    pub label: usize,
}

/// Encodes a term as the flat `(depth, label)` sequence consumed by the hydra visualization.
///
/// The encoding only exists for terms whose atoms all carry numeral-valued sub-terms; for any
/// other shape this returns [`None`] ("no encoding") and the caller is expected to fall back to
/// a textual message instead of a diagram.
pub fn hydra_sequence(t: &Term) -> Option<Vec<HydraNode>> {
    match t {
        Term::Zero => Some(Vec::new()),
        Term::Sum(atoms) => {
            let (first, rest) = atoms.split_first()?;
            let mut seq = atom_sequence(first)?;
            seq.extend(hydra_sequence(&Term::sum(rest.to_vec()))?);
            Some(seq)
        },
        Term::Atom(atom) => atom_sequence(atom),
    }
}

fn atom_sequence(atom: &Atom) -> Option<Vec<HydraNode>> {
    let label = atom.sub.as_numeral()?;
    let mut seq = vec![HydraNode { depth: 0, label }];
    seq.extend(
        hydra_sequence(&atom.arg)?
            .into_iter()
            .map(|node| HydraNode { depth: node.depth + 1, label: node.label }),
    );
    Some(seq)
}
