//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds the run parameters of the evolutionary loop:
//! how many generations to run, how big the population is, how long a chromosome is,
//! how often genes mutate, which fitness ends the run early and how much is logged.
//!
//! The defaults are the reference configuration: 5 generations of 35 chromosomes with
//! 3 genes each, a 0.30 mutation probability and a target fitness of 22.
//!
//! ## Example
//!
//! ```rust
//! use knapsack_ga::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with custom parameters
//! let custom_options = EvolutionOptions::new(10, LogLevel::Verbose, 50, 3, 0.2, None);
//! assert!(custom_options.validate().is_ok());
//!
//! // Or through the builder
//! let options = EvolutionOptions::builder()
//!     .num_generations(20)
//!     .population_size(64)
//!     .mutation_probability(0.5)
//!     .build();
//! assert_eq!(options.get_gene_count(), 3);
//! assert_eq!(options.get_target_fitness(), Some(22));
//! ```

use crate::error::{GeneticError, Result};

/// How much of a run is reported through `tracing`.
///
/// - `Verbose`: every chromosome of the initial and of each culled population.
/// - `Minimal`: one line per generation.
/// - `None`: nothing.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Verbose,
    Minimal,
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    num_generations: usize,
    log_level: LogLevel,
    population_size: usize,
    /// Number of genes in every chromosome
    gene_count: usize,
    /// Per-gene mutation probability, used in steps of 0.1
    mutation_probability: f64,
    /// Fitness that stops the run early; `None` always runs every generation
    target_fitness: Option<i64>,
}

impl EvolutionOptions {
    pub fn new(
        num_generations: usize,
        log_level: LogLevel,
        population_size: usize,
        gene_count: usize,
        mutation_probability: f64,
        target_fitness: Option<i64>,
    ) -> Self {
        Self {
            num_generations,
            log_level,
            population_size,
            gene_count,
            mutation_probability,
            target_fitness,
        }
    }

    pub fn get_num_generations(&self) -> usize {
        self.num_generations
    }

    pub fn get_log_level(&self) -> &LogLevel {
        &self.log_level
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_gene_count(&self) -> usize {
        self.gene_count
    }

    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn get_target_fitness(&self) -> Option<i64> {
        self.target_fitness
    }

    /// Sets the number of generations.
    pub fn set_num_generations(&mut self, num_generations: usize) {
        self.num_generations = num_generations;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the number of genes per chromosome.
    pub fn set_gene_count(&mut self, gene_count: usize) {
        self.gene_count = gene_count;
    }

    /// Sets the per-gene mutation probability.
    pub fn set_mutation_probability(&mut self, mutation_probability: f64) {
        self.mutation_probability = mutation_probability;
    }

    /// Sets the fitness that ends the run early.
    pub fn set_target_fitness(&mut self, target_fitness: Option<i64>) {
        self.target_fitness = target_fitness;
    }

    /// Checks the parameters that do not depend on the catalog.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the population size or gene count is
    /// zero, or if the mutation probability is not within `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.gene_count == 0 {
            return Err(GeneticError::Configuration(
                "Gene count cannot be zero".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(GeneticError::Configuration(format!(
                "Mutation probability must be within [0, 1], got {}",
                self.mutation_probability
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use knapsack_ga::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .num_generations(8)
    ///     .log_level(LogLevel::Minimal)
    ///     .population_size(40)
    ///     .gene_count(4)
    ///     .mutation_probability(0.1)
    ///     .target_fitness(None)
    ///     .build();
    ///
    /// assert_eq!(options.get_gene_count(), 4);
    /// assert_eq!(options.get_target_fitness(), None);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            num_generations: 5,
            log_level: LogLevel::None,
            population_size: 35,
            gene_count: 3,
            mutation_probability: 0.30,
            target_fitness: Some(22),
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Unset fields fall back to `EvolutionOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    num_generations: Option<usize>,
    log_level: Option<LogLevel>,
    population_size: Option<usize>,
    gene_count: Option<usize>,
    mutation_probability: Option<f64>,
    target_fitness: Option<Option<i64>>,
}

impl EvolutionOptionsBuilder {
    /// Sets the number of generations.
    pub fn num_generations(mut self, value: usize) -> Self {
        self.num_generations = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the number of genes per chromosome.
    pub fn gene_count(mut self, value: usize) -> Self {
        self.gene_count = Some(value);
        self
    }

    /// Sets the per-gene mutation probability.
    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = Some(value);
        self
    }

    /// Sets the fitness that ends the run early.
    pub fn target_fitness(mut self, value: Option<i64>) -> Self {
        self.target_fitness = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let default = EvolutionOptions::default();
        EvolutionOptions {
            num_generations: self.num_generations.unwrap_or(default.num_generations),
            log_level: self.log_level.unwrap_or(default.log_level),
            population_size: self.population_size.unwrap_or(default.population_size),
            gene_count: self.gene_count.unwrap_or(default.gene_count),
            mutation_probability: self
                .mutation_probability
                .unwrap_or(default.mutation_probability),
            target_fitness: self.target_fitness.unwrap_or(default.target_fitness),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_configuration() {
        let options = EvolutionOptions::default();

        assert_eq!(options.get_num_generations(), 5);
        assert_eq!(options.get_population_size(), 35);
        assert_eq!(options.get_gene_count(), 3);
        assert_eq!(options.get_mutation_probability(), 0.30);
        assert_eq!(options.get_target_fitness(), Some(22));
        assert_eq!(*options.get_log_level(), LogLevel::None);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let options = EvolutionOptions::builder()
            .population_size(10)
            .log_level(LogLevel::Verbose)
            .build();

        assert_eq!(options.get_population_size(), 10);
        assert_eq!(*options.get_log_level(), LogLevel::Verbose);
        assert_eq!(options.get_num_generations(), 5);
    }

    #[test]
    fn test_setters() {
        let mut options = EvolutionOptions::default();
        options.set_num_generations(12);
        options.set_gene_count(2);
        options.set_target_fitness(None);

        assert_eq!(options.get_num_generations(), 12);
        assert_eq!(options.get_gene_count(), 2);
        assert_eq!(options.get_target_fitness(), None);
    }

    #[test]
    fn test_validate_zero_population() {
        let options = EvolutionOptions::new(5, LogLevel::None, 0, 3, 0.3, Some(22));

        match options.validate() {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains("Population size cannot be zero"));
            }
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_validate_zero_gene_count() {
        let options = EvolutionOptions::builder().gene_count(0).build();

        match options.validate() {
            Err(GeneticError::Configuration(msg)) => {
                assert!(msg.contains("Gene count cannot be zero"));
            }
            _ => panic!("Expected Configuration error"),
        }
    }

    #[test]
    fn test_validate_probability_range() {
        for probability in [-0.1, 1.1, f64::NAN] {
            let options = EvolutionOptions::builder()
                .mutation_probability(probability)
                .build();
            assert!(matches!(
                options.validate(),
                Err(GeneticError::Configuration(_))
            ));
        }

        for probability in [0.0, 1.0] {
            let options = EvolutionOptions::builder()
                .mutation_probability(probability)
                .build();
            assert!(options.validate().is_ok());
        }
    }
}
