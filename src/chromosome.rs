//! # Chromosome
//!
//! A `Chromosome` is one candidate solution: a short, ordered selection of catalog
//! items (its genes) plus the derived total weight, total value and fitness.
//!
//! The derived fields are a cache. Anything that changes the genes must be followed by
//! [`Chromosome::evaluate`] before the fitness is read again.
//!
//! ## Example
//!
//! ```rust
//! use knapsack_ga::chromosome::Chromosome;
//! use knapsack_ga::evolution::KnapsackChallenge;
//! use knapsack_ga::item::{Catalog, Item};
//! use knapsack_ga::rng::RandomNumberGenerator;
//!
//! let catalog = Catalog::new(vec![
//!     Item::new("a", 20, 6),
//!     Item::new("b", 30, 5),
//!     Item::new("c", 60, 8),
//!     Item::new("d", 90, 7),
//! ])
//! .unwrap();
//! let challenge = KnapsackChallenge::default();
//! let mut rng = RandomNumberGenerator::from_seed(1);
//!
//! let chromosome = Chromosome::generate(&catalog, 3, &challenge, &mut rng);
//! assert_eq!(chromosome.len(), 3);
//! assert_eq!(chromosome.total_weight(), chromosome.sum_weight());
//! ```

use std::fmt;
use std::sync::Arc;

use crate::evolution::Challenge;
use crate::item::{Catalog, Item};
use crate::rng::RandomNumberGenerator;

#[derive(Debug, Clone, PartialEq)]
pub struct Chromosome {
    genes: Vec<Arc<Item>>,
    total_weight: u64,
    total_value: u64,
    fitness: i64,
}

impl Chromosome {
    /// Draws a random chromosome of up to `gene_count` distinct items.
    ///
    /// The catalog is copied before shuffling, so its order is never disturbed. A
    /// catalog with fewer than `gene_count` items yields a shorter chromosome, and an
    /// empty catalog yields an empty one.
    pub fn generate<C>(
        catalog: &Catalog,
        gene_count: usize,
        challenge: &C,
        rng: &mut RandomNumberGenerator,
    ) -> Self
    where
        C: Challenge<Chromosome>,
    {
        let mut pool: Vec<Arc<Item>> = catalog.items().to_vec();
        rng.shuffle(&mut pool);
        pool.truncate(gene_count.min(pool.len()));

        let mut chromosome = Self::from_genes(pool);
        chromosome.evaluate(challenge);
        chromosome
    }

    /// Wraps the given genes without scoring them.
    ///
    /// Weight, value and fitness stay zero until [`Chromosome::evaluate`] is called.
    pub fn from_genes(genes: Vec<Arc<Item>>) -> Self {
        Self {
            genes,
            total_weight: 0,
            total_value: 0,
            fitness: 0,
        }
    }

    pub fn genes(&self) -> &[Arc<Item>] {
        &self.genes
    }

    pub(crate) fn genes_mut(&mut self) -> &mut [Arc<Item>] {
        &mut self.genes
    }

    pub(crate) fn push_gene(&mut self, gene: Arc<Item>) {
        self.genes.push(gene);
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Whether an item with this name is one of the genes.
    pub fn contains(&self, name: &str) -> bool {
        self.genes.iter().any(|gene| gene.name() == name)
    }

    /// The genes ordered by item name.
    pub fn sorted_genes(&self) -> Vec<Arc<Item>> {
        let mut sorted = self.genes.clone();
        sorted.sort_by(|a, b| a.name().cmp(b.name()));
        sorted
    }

    /// Summed in `u64` so totals of large `u32` weights do not wrap.
    pub fn sum_weight(&self) -> u64 {
        self.genes.iter().map(|gene| u64::from(gene.weight())).sum()
    }

    pub fn sum_value(&self) -> u64 {
        self.genes.iter().map(|gene| u64::from(gene.value())).sum()
    }

    pub fn calc_fitness<C>(&self, challenge: &C) -> i64
    where
        C: Challenge<Chromosome>,
    {
        challenge.score(self)
    }

    /// Recomputes total weight, total value and fitness from the current genes.
    pub fn evaluate<C>(&mut self, challenge: &C)
    where
        C: Challenge<Chromosome>,
    {
        self.total_weight = self.sum_weight();
        self.total_value = self.sum_value();
        self.fitness = self.calc_fitness(challenge);
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn total_value(&self) -> u64 {
        self.total_value
    }

    pub fn fitness(&self) -> i64 {
        self.fitness
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "weight: {} value: {} fitness: {} [",
            self.total_weight, self.total_value, self.fitness
        )?;
        for (idx, gene) in self.genes.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", gene)?;
        }
        write!(f, "]")
    }
}
