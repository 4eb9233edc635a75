//! Unary operations trait.

use crate::dtype::FloatElement;
use crate::error::Result;
use crate::tensor::Tensor;

/// Element-wise unary operations on floating point tensors
pub trait UnaryOps {
    /// Negation: -a
    fn neg<T: FloatElement>(&self, a: &Tensor<T>) -> Result<Tensor<T>>;

    /// Exponential: e^a
    fn exp<T: FloatElement>(&self, a: &Tensor<T>) -> Result<Tensor<T>>;

    /// Natural logarithm: ln(a)
    fn log<T: FloatElement>(&self, a: &Tensor<T>) -> Result<Tensor<T>>;

    /// Square root
    fn sqrt<T: FloatElement>(&self, a: &Tensor<T>) -> Result<Tensor<T>>;

    /// Log-gamma: ln|Γ(a)|
    ///
    /// Evaluated in f64 (see [`crate::algorithm::special::lgamma`]) and rounded
    /// back to `T`.
    fn lgamma<T: FloatElement>(&self, a: &Tensor<T>) -> Result<Tensor<T>>;
}
