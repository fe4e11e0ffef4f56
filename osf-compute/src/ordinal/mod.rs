//! The three core algorithms of the notation: strict ordering, degree classification, and
//! fundamental sequences, plus the hydra encoding consumed by the tree visualization.
//!
//! Case analysis in this module follows the published definition of the 亞 function exactly; in
//! several places the definition relies on behavior that looks accidental (for example the
//! Atom-versus-Sum comparison rule), and those cases must not be "fixed".

pub mod degree;
pub mod error;
pub mod fund;
pub mod hydra;
pub mod ord;

pub use degree::dom;
pub use error::InvariantViolation;
pub use fund::fund;
pub use hydra::{hydra_sequence, HydraNode};
pub use ord::less_than;
