//! Matrix multiplication operations trait.

use crate::dtype::Element;
use crate::error::Result;
use crate::tensor::Tensor;

/// Matrix multiplication operations
pub trait MatmulOps {
    /// Batched matrix multiplication: `[..., m, k] @ [..., k, n] -> [..., m, n]`
    ///
    /// Leading batch dimensions are broadcast against each other. Both inputs
    /// must have at least two dimensions.
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if the inner dimensions disagree or an input has rank < 2
    /// - `BroadcastError` if the batch dimensions are not broadcastable
    fn matmul<T: Element>(&self, a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>>;
}
