//! Scalar operations trait.

use crate::dtype::Element;
use crate::error::Result;
use crate::tensor::Tensor;

/// Operations between a tensor and a scalar
///
/// The scalar is given as f64 and converted to the tensor's element type.
pub trait ScalarOps {
    /// Add scalar: a + scalar
    fn add_scalar<T: Element>(&self, a: &Tensor<T>, scalar: f64) -> Result<Tensor<T>>;
}
