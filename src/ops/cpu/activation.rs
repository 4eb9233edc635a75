//! CPU implementation of activation operations.

use crate::dtype::FloatElement;
use crate::error::{Error, Result};
use crate::ops::ActivationOps;
use crate::runtime::cpu::{CpuClient, kernels::softmax_dim_kernel};
use crate::tensor::Tensor;

fn resolve_dim<T: FloatElement>(a: &Tensor<T>, dim: isize) -> Result<usize> {
    a.layout().normalize_dim(dim).ok_or(Error::InvalidDimension {
        dim,
        ndim: a.ndim(),
    })
}

/// ActivationOps implementation for CPU runtime.
impl ActivationOps for CpuClient {
    fn softmax<T: FloatElement>(&self, a: &Tensor<T>, dim: isize) -> Result<Tensor<T>> {
        let dim = resolve_dim(a, dim)?;
        Tensor::from_vec(softmax_dim_kernel(a.as_slice(), a.shape(), dim), a.shape())
    }
}
