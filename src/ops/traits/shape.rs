//! Shape operations trait.

use crate::dtype::Element;
use crate::error::Result;
use crate::tensor::Tensor;

/// Shape operations that move data
///
/// Zero-copy reshapes live on [`Tensor`] itself (`reshape`, `unsqueeze`).
pub trait ShapeOps {
    /// Broadcast a tensor to a target shape and materialize the result
    ///
    /// # Errors
    ///
    /// `BroadcastError` if `a` cannot be broadcast to `shape`.
    fn broadcast_to<T: Element>(&self, a: &Tensor<T>, shape: &[usize]) -> Result<Tensor<T>>;

    /// Reorder dimensions: output dimension `i` is input dimension `dims[i]`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `dims` is not a permutation of `0..ndim`.
    fn permute<T: Element>(&self, a: &Tensor<T>, dims: &[usize]) -> Result<Tensor<T>>;
}
