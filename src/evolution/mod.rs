pub mod challenge;
pub mod launcher;
pub mod options;

pub use challenge::{Challenge, KnapsackChallenge};
pub use launcher::{EvolutionLauncher, EvolutionResult, Termination};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
