use tracing::{info, trace};

use super::{
    challenge::{Challenge, KnapsackChallenge},
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    breeding::{crossover, mutate},
    chromosome::Chromosome,
    error::{GeneticError, OptionExt, Result},
    item::Catalog,
    population::Population,
    rng::RandomNumberGenerator,
};

/// Why an evolution run stopped.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A generation produced a chromosome with the target fitness.
    TargetReached,
    /// Every configured generation ran without hitting the target.
    GenerationsExhausted,
    /// Culling left no parents to breed from.
    PopulationExhausted,
}

/// Represents the outcome of an evolution run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// The best chromosome found. When the target was reached this is the chromosome
    /// that reached it; otherwise it is the fittest chromosome any generation bred.
    /// `None` only if no generation bred anything.
    pub best: Option<Chromosome>,
    /// Number of generations that were bred.
    pub generations: usize,
    pub termination: Termination,
}

/// Runs the evolutionary loop against a fitness challenge.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionLauncher<Chall>
where
    Chall: Challenge<Chromosome>,
{
    challenge: Chall,
}

impl<Chall> EvolutionLauncher<Chall>
where
    Chall: Challenge<Chromosome>,
{
    /// Creates a new `EvolutionLauncher` scoring chromosomes with `challenge`.
    pub fn new(challenge: Chall) -> Self {
        Self { challenge }
    }

    pub fn challenge(&self) -> &Chall {
        &self.challenge
    }

    /// Evolves a population drawn from `catalog`.
    ///
    /// Each generation breeds `population_size` children from the current survivors:
    /// two distinct parents are picked uniformly, crossed over, mutated and scored. If
    /// the fittest child hits the target fitness the run stops right there. Otherwise
    /// the children replace the population, which is then culled to its fitter half.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if the options are invalid or the catalog
    /// holds fewer items than a chromosome has genes. Running out of generations is
    /// not an error; see [`EvolutionResult::termination`].
    pub fn evolve(
        &self,
        options: &EvolutionOptions,
        catalog: &Catalog,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult> {
        options.validate()?;

        if catalog.len() < options.get_gene_count() {
            return Err(GeneticError::Configuration(format!(
                "Catalog holds {} items but chromosomes need {} genes",
                catalog.len(),
                options.get_gene_count()
            )));
        }

        let log_level = *options.get_log_level();
        let mut population = Population::generate(
            options.get_population_size(),
            catalog,
            options.get_gene_count(),
            &self.challenge,
            rng,
        );

        if log_level == LogLevel::Verbose {
            info!("Initial population");
            population.log_members();
        }

        let mut best: Option<Chromosome> = None;

        for generation in 0..options.get_num_generations() {
            if population.is_empty() {
                if log_level != LogLevel::None {
                    info!(generation, "No parents left to breed");
                }
                return Ok(EvolutionResult {
                    best,
                    generations: generation,
                    termination: Termination::PopulationExhausted,
                });
            }

            let mut next_generation = self.breed(&population, options, catalog, rng)?;

            let fittest = next_generation.best()?.clone();
            trace!(generation, fitness = fittest.fitness(), "Bred next generation");

            if best
                .as_ref()
                .map_or(true, |current| fittest.fitness() > current.fitness())
            {
                best = Some(fittest.clone());
            }

            if options.get_target_fitness() == Some(fittest.fitness()) {
                if log_level != LogLevel::None {
                    info!(
                        cycles = generation + 1,
                        "Optimal result found in {} cycles",
                        generation + 1
                    );
                }
                return Ok(EvolutionResult {
                    best: Some(fittest),
                    generations: generation + 1,
                    termination: Termination::TargetReached,
                });
            }

            population.replace_members(next_generation.into_members());
            population.cull();

            match log_level {
                LogLevel::Minimal => info!(
                    generation,
                    survivors = population.len(),
                    best_fitness = fittest.fitness(),
                    "New generation"
                ),
                LogLevel::Verbose => {
                    info!(
                        generation,
                        survivors = population.len(),
                        best_fitness = fittest.fitness(),
                        "New generation"
                    );
                    population.log_members();
                }
                LogLevel::None => {}
            }
        }

        if log_level != LogLevel::None {
            info!(
                generations = options.get_num_generations(),
                best_fitness = best.as_ref().map(|chromosome| chromosome.fitness()),
                "No optimal result after {} cycles",
                options.get_num_generations()
            );
        }

        Ok(EvolutionResult {
            best,
            generations: options.get_num_generations(),
            termination: Termination::GenerationsExhausted,
        })
    }

    /// Breeds a full next generation from the members of `parents`.
    fn breed(
        &self,
        parents: &Population,
        options: &EvolutionOptions,
        catalog: &Catalog,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        let members = parents.members();
        let mut next_generation = Population::new(options.get_population_size());

        for _ in 0..next_generation.size() {
            let (x, y) = pick_parents(members.len(), rng)
                .ok_or_else_genetic(|| GeneticError::EmptyPopulation)?;

            let child = crossover(&members[x], &members[y], rng);
            let mut child = mutate(child, options.get_mutation_probability(), catalog, rng);
            child.evaluate(&self.challenge);

            next_generation.push(child);
        }

        Ok(next_generation)
    }
}

impl Default for EvolutionLauncher<KnapsackChallenge> {
    fn default() -> Self {
        Self::new(KnapsackChallenge::default())
    }
}

/// Picks two distinct member indices uniformly. A lone member is paired with itself.
fn pick_parents(len: usize, rng: &mut RandomNumberGenerator) -> Option<(usize, usize)> {
    let first = rng.gen_index(len)?;
    if len < 2 {
        return Some((first, first));
    }

    let mut second = rng.gen_index(len - 1)?;
    if second >= first {
        second += 1;
    }

    Some((first, second))
}
