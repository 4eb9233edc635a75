//! Random number generation operations.
//!
//! This module defines the `RandomOps` trait for drawing category indices.

use crate::dtype::FloatElement;
use crate::error::Result;
use crate::tensor::Tensor;

/// Random number generation operations
pub trait RandomOps {
    /// Draw independent category indices from unnormalized log-probabilities
    ///
    /// `logits` has shape `[batch, k]`. The result has shape
    /// `[batch, num_samples]` and holds indices in `[0, k)`, drawn with
    /// replacement with probabilities `softmax(logits[b])`.
    ///
    /// # Seeding
    ///
    /// With `seed = Some(s)` the result is a pure function of `(logits,
    /// num_samples, s)`: identical across calls, and independent of whether
    /// rows are processed in parallel. With `None` a fresh seed is drawn from
    /// the thread-local generator.
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if `logits` is not 2-D
    /// - `InvalidArgument` if `k == 0`, or a row contains NaN or `+inf`, or
    ///   every entry of a row is `-inf`
    ///
    /// # Example
    ///
    /// ```
    /// use numdist::prelude::*;
    ///
    /// let client = CpuClient::new();
    /// let logits = Tensor::from_slice(&[0.0f64, f64::NEG_INFINITY], &[1, 2]);
    /// let draws = client.categorical(&logits, 4, Some(7))?;
    /// assert_eq!(draws.to_vec(), vec![0, 0, 0, 0]);
    /// # Ok::<(), numdist::error::Error>(())
    /// ```
    fn categorical<T: FloatElement>(
        &self,
        logits: &Tensor<T>,
        num_samples: usize,
        seed: Option<u64>,
    ) -> Result<Tensor<i64>>;
}
