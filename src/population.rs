//! # Population
//!
//! An ordered collection of chromosomes. Members keep insertion order until
//! [`Population::get_fittest`] sorts them by descending fitness, and
//! [`Population::cull`] keeps only the fitter half.

use tracing::info;

use crate::chromosome::Chromosome;
use crate::error::{GeneticError, OptionExt, Result};
use crate::evolution::Challenge;
use crate::item::Catalog;
use crate::rng::RandomNumberGenerator;

#[derive(Debug, Clone, Default)]
pub struct Population {
    members: Vec<Chromosome>,
    size: usize,
}

impl Population {
    /// Creates an empty population that expects `size` members.
    pub fn new(size: usize) -> Self {
        Self {
            members: Vec::with_capacity(size),
            size,
        }
    }

    /// Creates `size` random chromosomes, kept in creation order.
    pub fn generate<C>(
        size: usize,
        catalog: &Catalog,
        gene_count: usize,
        challenge: &C,
        rng: &mut RandomNumberGenerator,
    ) -> Self
    where
        C: Challenge<Chromosome>,
    {
        let members = (0..size)
            .map(|_| Chromosome::generate(catalog, gene_count, challenge, rng))
            .collect();

        Self { members, size }
    }

    pub fn members(&self) -> &[Chromosome] {
        &self.members
    }

    /// The member count this population is meant to hold.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn push(&mut self, chromosome: Chromosome) {
        self.members.push(chromosome);
    }

    /// Swaps in a new set of members. The target size is left untouched.
    pub fn replace_members(&mut self, members: Vec<Chromosome>) {
        self.members = members;
    }

    pub fn into_members(self) -> Vec<Chromosome> {
        self.members
    }

    /// Sorts the members by descending fitness.
    pub fn get_fittest(&mut self) {
        self.members.sort_by(|a, b| b.fitness().cmp(&a.fitness()));
    }

    /// Sorts, then keeps the fitter half (rounded down).
    ///
    /// A population of one is culled to nothing.
    pub fn cull(&mut self) {
        self.get_fittest();
        let length = self.members.len() / 2;
        self.members.truncate(length);
        self.size = length;
    }

    /// The highest-fitness member.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::EmptyPopulation` if there are no members.
    pub fn best(&mut self) -> Result<&Chromosome> {
        self.get_fittest();
        self.members
            .first()
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }

    /// Reports every member at info level.
    pub fn log_members(&self) {
        for (idx, chromosome) in self.members.iter().enumerate() {
            info!(member = idx, "{}", chromosome);
        }
    }
}
