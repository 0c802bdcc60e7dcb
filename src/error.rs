//! # Error Types
//!
//! This module defines the error type shared by the knapsack solver. Evolution itself
//! has no recoverable failure paths: a poor run simply yields a poor chromosome.
//! Errors are reserved for invalid configuration and for asking an empty population
//! for its best member.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use knapsack_ga::error::{GeneticError, Result};
//!
//! fn check_size(size: usize) -> Result<usize> {
//!     if size == 0 {
//!         return Err(GeneticError::Configuration(
//!             "Population size cannot be zero".to_string(),
//!         ));
//!     }
//!     Ok(size)
//! }
//!
//! assert!(check_size(0).is_err());
//! assert_eq!(check_size(35).unwrap(), 35);
//! ```
//!
//! Using the `ResultExt` trait to add context to errors:
//!
//! ```rust
//! use knapsack_ga::error::{Result, ResultExt};
//!
//! fn parse_seed(raw: &str) -> Result<u64> {
//!     raw.parse::<u64>().context("Invalid seed")
//! }
//!
//! assert!(parse_seed("not-a-number").is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use knapsack_ga::error::{GeneticError, OptionExt};
//!
//! fn best_fitness(scores: &[i64]) -> knapsack_ga::error::Result<i64> {
//!     scores.iter().max().cloned().ok_or_else_genetic(||
//!         GeneticError::EmptyPopulation
//!     )
//! }
//!
//! assert_eq!(best_fitness(&[3, 9, 4]).unwrap(), 9);
//! ```

use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Represents errors that can occur while configuring or running the solver.
#[derive(Error, Debug)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// A generic error with a custom message.
    #[error("{0}")]
    Other(String),
}

/// A specialized Result type for solver operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Result to add context to errors.
///
/// ## Examples
///
/// ```rust
/// use knapsack_ga::error::ResultExt;
///
/// fn parse_generations(raw: &str) -> knapsack_ga::error::Result<usize> {
///     raw.parse::<usize>().context("Invalid generation count")
/// }
///
/// let err = parse_generations("five").unwrap_err();
/// assert!(err.to_string().starts_with("Invalid generation count"));
/// ```
pub trait ResultExt<T, E> {
    /// Adds context to an error.
    ///
    /// This method converts the error to a `GeneticError::Other` carrying the
    /// provided context followed by the original error message.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| GeneticError::Other(format!("{}: {}", context, e)))
    }
}

/// Extension trait for Option to convert to Result with a custom error.
pub trait OptionExt<T> {
    /// Converts an Option to a Result using a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
