pub mod breeding;
pub mod chromosome;
pub mod error;
pub mod evolution;
pub mod item;
pub mod population;
pub mod rng;

// Re-export commonly used types for convenience
pub use chromosome::Chromosome;
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{EvolutionLauncher, EvolutionOptions, KnapsackChallenge};
pub use item::{Catalog, Item};
pub use population::Population;
