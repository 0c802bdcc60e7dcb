use std::sync::Arc;

use crate::chromosome::Chromosome;
use crate::item::{Catalog, Item};
use crate::rng::RandomNumberGenerator;

/// Decides whether one gene mutates.
///
/// The probability is applied in steps of 0.1: an integer drawn from `1..=10` must not
/// exceed `probability * 10`. A probability of 0 never mutates and 1 always does.
/// Values outside `[0, 1]` are rejected by `EvolutionOptions::validate` and are not
/// checked here.
pub fn mutant_prob(probability: f64, rng: &mut RandomNumberGenerator) -> bool {
    let draw = rng.gen_inclusive(1, 10);
    f64::from(draw) <= probability * 10.0
}

/// Replaces some of the child's genes with catalog items it does not hold.
///
/// Each position mutates independently with `probability`. A replacement is drawn
/// uniformly from the catalog items missing from the child and is then used up, so no
/// item is placed twice in one pass. Once the pool is exhausted further mutations are
/// skipped. The child's weight, value and fitness are left stale.
pub fn mutate(
    mut child: Chromosome,
    probability: f64,
    catalog: &Catalog,
    rng: &mut RandomNumberGenerator,
) -> Chromosome {
    let mut pool: Vec<Arc<Item>> = catalog
        .iter()
        .filter(|item| !child.contains(item.name()))
        .cloned()
        .collect();

    for idx in 0..child.len() {
        if !mutant_prob(probability, rng) {
            continue;
        }

        let Some(pick) = rng.gen_index(pool.len()) else {
            continue;
        };
        child.genes_mut()[idx] = pool.swap_remove(pick);
    }

    child
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::KnapsackChallenge;
    use std::collections::HashSet;

    fn demo_catalog() -> Catalog {
        Catalog::new(vec![
            Item::new("a", 20, 6),
            Item::new("b", 30, 5),
            Item::new("c", 60, 8),
            Item::new("d", 90, 7),
            Item::new("e", 50, 6),
            Item::new("f", 70, 9),
            Item::new("g", 30, 4),
        ])
        .unwrap()
    }

    fn chromosome_of(catalog: &Catalog, names: &[&str]) -> Chromosome {
        let mut chromosome = Chromosome::from_genes(
            names
                .iter()
                .map(|name| catalog.get(name).unwrap().clone())
                .collect(),
        );
        chromosome.evaluate(&KnapsackChallenge::default());
        chromosome
    }

    fn names(chromosome: &Chromosome) -> Vec<String> {
        chromosome
            .genes()
            .iter()
            .map(|gene| gene.name().to_string())
            .collect()
    }

    #[test]
    fn test_mutant_prob_extremes() {
        let mut rng = RandomNumberGenerator::from_seed(4);

        for _ in 0..200 {
            assert!(!mutant_prob(0.0, &mut rng));
            assert!(mutant_prob(1.0, &mut rng));
        }
    }

    #[test]
    fn test_mutant_prob_rate() {
        let mut rng = RandomNumberGenerator::from_seed(17);
        let hits = (0..10_000).filter(|_| mutant_prob(0.3, &mut rng)).count();

        // expected 3000
        assert!((2700..3300).contains(&hits), "hits = {}", hits);
    }

    #[test]
    fn test_mutate_with_zero_probability_changes_nothing() {
        let catalog = demo_catalog();
        let mut rng = RandomNumberGenerator::from_seed(6);
        let child = chromosome_of(&catalog, &["a", "b", "f"]);

        let mutated = mutate(child.clone(), 0.0, &catalog, &mut rng);
        assert_eq!(mutated, child);
    }

    #[test]
    fn test_mutate_with_full_probability_replaces_every_gene() {
        let catalog = demo_catalog();
        let mut rng = RandomNumberGenerator::from_seed(6);

        for _ in 0..50 {
            let child = chromosome_of(&catalog, &["a", "b", "f"]);
            let mutated = mutate(child, 1.0, &catalog, &mut rng);
            let genes = names(&mutated);

            assert_eq!(genes.len(), 3);
            assert!(genes.iter().all(|name| !["a", "b", "f"].contains(&name.as_str())));
            let unique: HashSet<&String> = genes.iter().collect();
            assert_eq!(unique.len(), 3);
        }
    }

    #[test]
    fn test_mutate_stops_when_pool_is_exhausted() {
        let catalog = Catalog::new(vec![
            Item::new("a", 20, 6),
            Item::new("b", 30, 5),
            Item::new("c", 60, 8),
            Item::new("d", 90, 7),
        ])
        .unwrap();
        let mut rng = RandomNumberGenerator::from_seed(10);
        let child = chromosome_of(&catalog, &["a", "b", "c"]);

        let mutated = mutate(child, 1.0, &catalog, &mut rng);

        // only "d" was available, so it lands in the first position
        assert_eq!(names(&mutated), vec!["d", "b", "c"]);
    }

    #[test]
    fn test_mutate_keeps_genes_distinct() {
        let catalog = demo_catalog();
        let challenge = KnapsackChallenge::default();
        let mut rng = RandomNumberGenerator::from_seed(12);

        for _ in 0..500 {
            let child = Chromosome::generate(&catalog, 3, &challenge, &mut rng);
            let mutated = mutate(child, 0.5, &catalog, &mut rng);

            let unique: HashSet<String> = names(&mutated).into_iter().collect();
            assert_eq!(unique.len(), 3);
            assert!(unique.iter().all(|name| catalog.contains(name)));
        }
    }

    #[test]
    fn test_mutate_leaves_derived_fields_stale() {
        let catalog = demo_catalog();
        let mut rng = RandomNumberGenerator::from_seed(6);
        let child = chromosome_of(&catalog, &["a", "b", "f"]);
        assert_eq!(child.fitness(), 22);

        let mut mutated = mutate(child, 1.0, &catalog, &mut rng);
        assert_eq!(mutated.fitness(), 22);
        assert_eq!(mutated.total_weight(), 120);

        mutated.evaluate(&KnapsackChallenge::default());
        assert_eq!(mutated.total_weight(), mutated.sum_weight());
        assert_ne!(mutated.total_weight(), 120);
    }
}
