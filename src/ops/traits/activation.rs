//! Activation operations trait.

use crate::dtype::FloatElement;
use crate::error::Result;
use crate::tensor::Tensor;

/// Normalizing activations over one dimension
pub trait ActivationOps {
    /// Softmax along a dimension: exp(a) / sum(exp(a))
    fn softmax<T: FloatElement>(&self, a: &Tensor<T>, dim: isize) -> Result<Tensor<T>>;
}
