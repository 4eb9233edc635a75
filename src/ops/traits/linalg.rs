//! Linear algebra helper operations trait.

use crate::dtype::Element;
use crate::error::Result;
use crate::tensor::Tensor;

/// Structural matrix operations
pub trait LinalgOps {
    /// Replace the main diagonal of each square matrix in `a`
    ///
    /// `a` has shape `[..., n, n]` and `diag` has shape `[..., n]` with the
    /// same batch dimensions.
    ///
    /// # Errors
    ///
    /// `ShapeMismatch` if `a` is not a batch of square matrices matching `diag`.
    fn set_diagonal<T: Element>(&self, a: &Tensor<T>, diag: &Tensor<T>) -> Result<Tensor<T>>;
}
