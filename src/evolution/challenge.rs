use crate::chromosome::Chromosome;

/// Scores a candidate. Higher is better.
pub trait Challenge<Pheno> {
    fn score(&self, phenotype: &Pheno) -> i64;
}

/// The knapsack fitness rules.
///
/// Fitness is the summed value of the genes. Every two units of weight above
/// `weight_limit` cost one point (rounded down), and hitting the limit exactly earns
/// `exact_weight_bonus`. Staying below the limit is neither rewarded nor punished.
///
/// ```rust
/// use knapsack_ga::chromosome::Chromosome;
/// use knapsack_ga::evolution::{Challenge, KnapsackChallenge};
/// use knapsack_ga::item::Item;
/// use std::sync::Arc;
///
/// let challenge = KnapsackChallenge::default();
/// let mut heavy = Chromosome::from_genes(vec![
///     Arc::new(Item::new("c", 60, 8)),
///     Arc::new(Item::new("d", 90, 7)),
/// ]);
/// heavy.evaluate(&challenge);
///
/// // 150 is 30 over the limit
/// assert_eq!(challenge.score(&heavy), 15 - 15);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnapsackChallenge {
    weight_limit: u32,
    exact_weight_bonus: i64,
}

impl KnapsackChallenge {
    pub fn new(weight_limit: u32, exact_weight_bonus: i64) -> Self {
        Self {
            weight_limit,
            exact_weight_bonus,
        }
    }

    pub fn get_weight_limit(&self) -> u32 {
        self.weight_limit
    }

    pub fn get_exact_weight_bonus(&self) -> i64 {
        self.exact_weight_bonus
    }
}

impl Default for KnapsackChallenge {
    fn default() -> Self {
        Self {
            weight_limit: 120,
            exact_weight_bonus: 2,
        }
    }
}

impl Challenge<Chromosome> for KnapsackChallenge {
    fn score(&self, phenotype: &Chromosome) -> i64 {
        let weight = phenotype.sum_weight();
        let limit = u64::from(self.weight_limit);
        let mut score = i64::try_from(phenotype.sum_value()).unwrap_or(i64::MAX);

        if weight > limit {
            let penalty = i64::try_from((weight - limit) / 2).unwrap_or(i64::MAX);
            score = score.saturating_sub(penalty);
        } else if weight == limit {
            score = score.saturating_add(self.exact_weight_bonus);
        }

        score
    }
}
