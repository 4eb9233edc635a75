//! # numdist
//!
//! **Batched probability distributions over n-dimensional tensors.**
//!
//! numdist provides parametric distributions whose parameters are tensors:
//! one distribution object describes a whole batch of independent
//! distributions, and sampling, densities and moments are evaluated for the
//! entire batch at once.
//!
//! ## Features
//!
//! - **Distributions**: [`Multinomial`](distributions::Multinomial), built
//!   from logits or probabilities, with sampling, `log_prob`, mean, variance
//!   and covariance
//! - **Broadcasting**: parameters and values broadcast NumPy-style
//! - **Validation on demand**: parameter and sample checks behind
//!   `validate_args`
//! - **Tensor engine**: operation traits with a CPU implementation
//!
//! ## Quick Start
//!
//! ```rust
//! use numdist::prelude::*;
//!
//! let client = CpuClient::new();
//! let dist = Multinomial::builder(Tensor::scalar(10.0f64))
//!     .logits(Tensor::from_slice(&[0.0, 1.0, 2.0], &[3]))
//!     .build(&client)?;
//!
//! let draws = dist.sample_n(5, Some(42))?; // shape [5, 3]
//! let log_p = dist.log_prob(&draws)?;      // shape [5]
//! assert_eq!(log_p.shape(), &[5]);
//! # Ok::<(), numdist::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded categorical sampling across batch rows
//!
//! ## Logging
//!
//! numdist emits [`tracing`] events (construction at `debug`, sampling and
//! density evaluation at `trace`) and never installs a subscriber.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod distributions;
pub mod dtype;
pub mod error;
pub mod ops;
pub mod runtime;
pub mod tensor;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::distributions::{
        Distribution, DistributionOptions, Multinomial, MultinomialBuilder, Parameterization,
    };
    pub use crate::dtype::{DType, Element, FloatElement};
    pub use crate::error::{Error, Result};
    pub use crate::ops::*;
    pub use crate::runtime::{CpuClient, RuntimeClient};
    pub use crate::tensor::{Layout, Tensor};
}
