//! Reference run: seven items, 35 chromosomes of three genes, at most five generations.
//!
//! Pass a number as the first argument to seed the run.

use knapsack_ga::{
    evolution::LogLevel,
    rng::RandomNumberGenerator,
    Catalog, EvolutionLauncher, EvolutionOptions, Item, KnapsackChallenge, Result, ResultExt,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn reference_catalog() -> Result<Catalog> {
    Catalog::new(vec![
        Item::new("a", 20, 6),
        Item::new("b", 30, 5),
        Item::new("c", 60, 8),
        Item::new("d", 90, 7),
        Item::new("e", 50, 6),
        Item::new("f", 70, 9),
        Item::new("g", 30, 4),
    ])
}

fn run() -> Result<()> {
    let mut rng = match std::env::args().nth(1) {
        Some(raw) => RandomNumberGenerator::from_seed(raw.parse::<u64>().context("Invalid seed")?),
        None => RandomNumberGenerator::new(),
    };

    let catalog = reference_catalog()?;
    info!("Below are the items which will be used:");
    for item in catalog.iter() {
        info!("{}", item);
    }

    let options = EvolutionOptions::builder()
        .log_level(LogLevel::Verbose)
        .build();
    let launcher = EvolutionLauncher::new(KnapsackChallenge::default());
    let result = launcher.evolve(&options, &catalog, &mut rng)?;

    match result.best {
        Some(best) => {
            info!(
                termination = ?result.termination,
                generations = result.generations,
                "WINNER: value: {} fitness score: {} weight: {}",
                best.total_value(),
                best.fitness(),
                best.total_weight()
            );
            for gene in best.genes() {
                info!("{}", gene);
            }
        }
        None => warn!(termination = ?result.termination, "No solution found"),
    }

    Ok(())
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = run() {
        error!("{}", e);
        std::process::exit(1);
    }
}
