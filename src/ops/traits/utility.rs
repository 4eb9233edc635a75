//! Utility operations trait.

use crate::dtype::Element;
use crate::error::Result;
use crate::tensor::Tensor;

/// Tensor construction helpers
pub trait UtilityOps {
    /// One-hot encode integer indices
    ///
    /// The output has one additional dimension of size `num_classes` appended,
    /// with `output[..., c] = 1` where `indices[...] == c` and 0 elsewhere.
    ///
    /// # Errors
    ///
    /// `IndexOutOfBounds` if an index is negative or not below `num_classes`.
    ///
    /// # Example
    ///
    /// ```
    /// use numdist::prelude::*;
    ///
    /// let client = CpuClient::new();
    /// let indices = Tensor::from_slice(&[0i64, 2, 1], &[3]);
    /// let oh: Tensor<f64> = client.one_hot(&indices, 3)?;
    /// assert_eq!(oh.to_vec(), vec![1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
    /// # Ok::<(), numdist::error::Error>(())
    /// ```
    fn one_hot<T: Element>(&self, indices: &Tensor<i64>, num_classes: usize) -> Result<Tensor<T>>;
}
