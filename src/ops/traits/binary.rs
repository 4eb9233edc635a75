//! Binary operations trait.
//!
//! This trait defines element-wise binary operations on tensors.

use crate::dtype::{Element, FloatElement};
use crate::error::Result;
use crate::tensor::Tensor;

/// Element-wise binary operations on tensors.
///
/// All binary operations support broadcasting.
///
/// # Broadcasting
///
/// Binary operations follow NumPy-style broadcasting rules:
/// - Dimensions are compared element-wise, from the trailing dimensions backward
/// - Two dimensions are compatible when they are equal, or when one of them is 1
/// - Dimensions of size 1 are stretched to match the other dimension
/// - The output has shape equal to the pairwise maximum of the input shapes
///
/// # Example
///
/// ```
/// use numdist::prelude::*;
///
/// let client = CpuClient::new();
///
/// let a = Tensor::from_slice(&[1.0f64, 2.0, 3.0, 4.0], &[2, 2]);
/// let b = Tensor::from_slice(&[10.0f64, 20.0], &[2]);
///
/// let c = client.add(&a, &b)?; // [11.0, 22.0, 13.0, 24.0]
/// # Ok::<(), numdist::error::Error>(())
/// ```
pub trait BinaryOps {
    /// Element-wise addition: a + b
    fn add<T: Element>(&self, a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>>;

    /// Element-wise subtraction: a - b
    fn sub<T: Element>(&self, a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>>;

    /// Element-wise multiplication: a * b
    fn mul<T: Element>(&self, a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>>;

    /// Element-wise division: a / b
    fn div<T: Element>(&self, a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>>;

    /// Element-wise `x * ln(y)`, defined as 0 wherever `x == 0` (so `0 * ln(0) = 0`)
    fn xlogy<T: FloatElement>(&self, x: &Tensor<T>, y: &Tensor<T>) -> Result<Tensor<T>>;
}
