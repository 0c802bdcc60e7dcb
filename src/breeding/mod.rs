//! # Breeding Operators
//!
//! The operators that turn two parents into a child: [`crossover`] recombines the
//! parents position by position, and [`mutate`] swaps some of the child's genes for
//! catalog items it does not hold yet. [`duplicate_check`] detects parent pairs that
//! carry the same items, which are not worth recombining.
//!
//! None of the operators rescore the child. Call
//! [`Chromosome::evaluate`](crate::chromosome::Chromosome::evaluate) once breeding is done.
pub mod crossover;
pub mod mutation;

pub use crossover::{crossover, duplicate_check};
pub use mutation::{mutant_prob, mutate};
