//! Reduction operations trait.

use crate::dtype::Element;
use crate::error::Result;
use crate::tensor::Tensor;

/// Reduction operations
pub trait ReduceOps {
    /// Sum along specified dimensions
    ///
    /// With `keepdim`, reduced dimensions stay in the output with size 1.
    /// An empty `dims` returns a copy of `a`.
    ///
    /// # Errors
    ///
    /// `InvalidDimension` if any entry of `dims` is out of range.
    fn sum<T: Element>(&self, a: &Tensor<T>, dims: &[usize], keepdim: bool) -> Result<Tensor<T>>;
}
