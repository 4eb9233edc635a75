//! CPU implementation of shape operations.

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::ShapeOps;
use crate::runtime::cpu::{CpuClient, kernels::gather_strided};
use crate::tensor::Tensor;

/// ShapeOps implementation for CPU runtime.
impl ShapeOps for CpuClient {
    fn broadcast_to<T: Element>(&self, a: &Tensor<T>, shape: &[usize]) -> Result<Tensor<T>> {
        if a.shape() == shape {
            return Ok(a.clone());
        }
        let view = a
            .layout()
            .broadcast_to(shape)
            .ok_or_else(|| Error::broadcast(a.shape(), shape))?;
        gather_strided(a, &view)
    }

    fn permute<T: Element>(&self, a: &Tensor<T>, dims: &[usize]) -> Result<Tensor<T>> {
        let view = a.layout().permute(dims).ok_or_else(|| {
            Error::invalid_argument(
                "dims",
                format!("{dims:?} is not a permutation of {} dimensions", a.ndim()),
            )
        })?;
        gather_strided(a, &view)
    }
}
