//! CPU implementation of structural matrix operations.

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::LinalgOps;
use crate::runtime::cpu::{CpuClient, kernels::set_diagonal_kernel};
use crate::tensor::Tensor;

/// LinalgOps implementation for CPU runtime.
impl LinalgOps for CpuClient {
    fn set_diagonal<T: Element>(&self, a: &Tensor<T>, diag: &Tensor<T>) -> Result<Tensor<T>> {
        let ndim = a.ndim();
        let square = ndim >= 2 && a.shape()[ndim - 1] == a.shape()[ndim - 2];
        if !square || diag.shape() != &a.shape()[..ndim - 1] {
            let mut expected = diag.shape().to_vec();
            expected.push(diag.shape().last().copied().unwrap_or(0));
            return Err(Error::shape_mismatch(&expected, a.shape()));
        }

        let n = a.shape()[ndim - 1];
        let mut data = a.to_vec();
        set_diagonal_kernel(&mut data, diag.as_slice(), n);
        Tensor::from_vec(data, a.shape())
    }
}
