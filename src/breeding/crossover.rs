use std::sync::Arc;

use crate::chromosome::Chromosome;
use crate::rng::RandomNumberGenerator;

/// Whether both chromosomes carry the same items, in any order.
pub fn duplicate_check(x: &Chromosome, y: &Chromosome) -> bool {
    x.len() == y.len()
        && x
            .sorted_genes()
            .iter()
            .map(|gene| gene.name())
            .eq(y.sorted_genes().iter().map(|gene| gene.name()))
}

/// Recombines two parents into a child.
///
/// Parents carrying the same items are not recombined: `x` is returned as is.
/// Otherwise both parents' genes are sorted by name and, for each position, a fair coin
/// picks which parent's gene the child takes. If that gene is already in the child the
/// other parent's gene at the same position is used, and if both are taken the slot
/// gets the first gene of either parent the child does not hold yet. A child of two
/// parents with distinct genes therefore never repeats an item.
///
/// The child is returned unscored.
///
/// ```rust
/// use knapsack_ga::breeding::crossover;
/// use knapsack_ga::chromosome::Chromosome;
/// use knapsack_ga::item::Item;
/// use knapsack_ga::rng::RandomNumberGenerator;
/// use std::sync::Arc;
///
/// fn genes(names: &[&str]) -> Chromosome {
///     Chromosome::from_genes(names.iter().map(|n| Arc::new(Item::new(*n, 10, 1))).collect())
/// }
/// let mut rng = RandomNumberGenerator::from_seed(3);
///
/// let child = crossover(&genes(&["a", "b", "c"]), &genes(&["d", "e", "f"]), &mut rng);
/// assert_eq!(child.len(), 3);
/// ```
pub fn crossover(x: &Chromosome, y: &Chromosome, rng: &mut RandomNumberGenerator) -> Chromosome {
    if duplicate_check(x, y) {
        return x.clone();
    }

    let first = x.sorted_genes();
    let second = y.sorted_genes();
    let mut child = Chromosome::from_genes(Vec::with_capacity(first.len()));

    for (idx, from_first) in first.iter().enumerate() {
        let from_second = second.get(idx).unwrap_or(from_first);
        let (preferred, fallback) = if rng.coin_flip() {
            (from_first, from_second)
        } else {
            (from_second, from_first)
        };

        let gene = if !child.contains(preferred.name()) {
            preferred
        } else if !child.contains(fallback.name()) {
            fallback
        } else {
            first
                .iter()
                .chain(second.iter())
                .find(|gene| !child.contains(gene.name()))
                .unwrap_or(fallback)
        };

        child.push_gene(Arc::clone(gene));
    }

    child
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evolution::KnapsackChallenge;
    use crate::item::{Catalog, Item};
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
    fn test_duplicate_check_ignores_order() {
        let catalog = demo_catalog();
        let x = chromosome_of(&catalog, &["a", "c", "f"]);
        let y = chromosome_of(&catalog, &["f", "a", "c"]);
        let z = chromosome_of(&catalog, &["a", "c", "g"]);

        assert!(duplicate_check(&x, &y));
        assert!(duplicate_check(&x, &x));
        assert!(!duplicate_check(&x, &z));
    }

    #[test]
    fn test_duplicate_check_different_lengths() {
        let catalog = demo_catalog();
        let x = chromosome_of(&catalog, &["a", "c"]);
        let y = chromosome_of(&catalog, &["a", "c", "f"]);

        assert!(!duplicate_check(&x, &y));
    }

    #[test]
    fn test_crossover_of_duplicates_returns_first_parent() {
        let catalog = demo_catalog();
        let x = chromosome_of(&catalog, &["c", "a", "f"]);
        let y = chromosome_of(&catalog, &["a", "f", "c"]);
        let mut rng = RandomNumberGenerator::from_seed(1);

        let child = crossover(&x, &y, &mut rng);
        assert_eq!(child, x);
        assert_eq!(names(&child), vec!["c", "a", "f"]);
    }

    #[test]
    fn test_crossover_draws_positionally_from_sorted_parents() {
        let catalog = demo_catalog();
        let x = chromosome_of(&catalog, &["c", "a", "b"]);
        let y = chromosome_of(&catalog, &["g", "e", "d"]);
        let mut rng = RandomNumberGenerator::from_seed(21);

        // sorted: x = [a, b, c], y = [d, e, g]
        for _ in 0..50 {
            let child = crossover(&x, &y, &mut rng);
            let genes = names(&child);

            assert_eq!(genes.len(), 3);
            assert!(genes[0] == "a" || genes[0] == "d");
            assert!(genes[1] == "b" || genes[1] == "e");
            assert!(genes[2] == "c" || genes[2] == "g");
        }
    }

    #[test]
    fn test_crossover_never_repeats_genes() {
        let catalog = demo_catalog();
        let challenge = KnapsackChallenge::default();
        let mut rng = RandomNumberGenerator::from_seed(8);

        for _ in 0..500 {
            let x = Chromosome::generate(&catalog, 3, &challenge, &mut rng);
            let y = Chromosome::generate(&catalog, 3, &challenge, &mut rng);
            let child = crossover(&x, &y, &mut rng);

            let unique: HashSet<String> = names(&child).into_iter().collect();
            assert_eq!(unique.len(), child.len());
            assert!(child
                .genes()
                .iter()
                .all(|gene| x.contains(gene.name()) || y.contains(gene.name())));
        }
    }

    #[test]
    fn test_crossover_fills_collisions_from_parents() {
        let catalog = demo_catalog();
        // sorted: x = [a, b, c], y = [b, c, d]; position 1 can collide on b and c
        let x = chromosome_of(&catalog, &["a", "b", "c"]);
        let y = chromosome_of(&catalog, &["b", "c", "d"]);
        let mut rng = RandomNumberGenerator::from_seed(13);

        for _ in 0..100 {
            let child = crossover(&x, &y, &mut rng);
            let unique: HashSet<String> = names(&child).into_iter().collect();
            assert_eq!(unique.len(), 3);
        }
    }

    #[test]
    fn test_crossover_child_is_unscored() {
        let catalog = demo_catalog();
        let x = chromosome_of(&catalog, &["a", "b", "f"]);
        let y = chromosome_of(&catalog, &["c", "d", "e"]);
        let mut rng = RandomNumberGenerator::from_seed(2);

        let mut child = crossover(&x, &y, &mut rng);
        assert_eq!(child.fitness(), 0);
        assert_eq!(child.total_weight(), 0);

        child.evaluate(&KnapsackChallenge::default());
        assert_eq!(child.total_weight(), child.sum_weight());
    }
}
