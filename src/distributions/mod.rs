//! Batched probability distributions
//!
//! Distributions are written against the [`TensorEngine`](crate::ops::TensorEngine)
//! operation traits and implement the common [`Distribution`] interface.
//!
//! # Available distributions
//!
//! - [`Multinomial`] - counts of `k` classes over `total_count` trials
//!
//! # Validation
//!
//! Parameter and sample checks run only when
//! [`DistributionOptions::validate_args`] is set. Structural requirements
//! (ranks, broadcast compatibility) are always checked.

pub mod checks;
mod multinomial;
mod options;
pub mod params;
mod traits;

pub use multinomial::{Multinomial, MultinomialBuilder};
pub use options::DistributionOptions;
pub use params::{Parameterization, log_combinations, logits_and_probs};
pub use traits::{Distribution, ReparameterizationType};
