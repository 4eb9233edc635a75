//! CPU implementation of reduce operations.

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::ReduceOps;
use crate::runtime::cpu::{CpuClient, kernels::sum_dim_kernel};
use crate::tensor::Tensor;

/// ReduceOps implementation for CPU runtime.
impl ReduceOps for CpuClient {
    fn sum<T: Element>(&self, a: &Tensor<T>, dims: &[usize], keepdim: bool) -> Result<Tensor<T>> {
        let ndim = a.ndim();
        let mut sorted = dims.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        if let Some(&bad) = sorted.iter().find(|&&d| d >= ndim) {
            return Err(Error::InvalidDimension {
                dim: bad as isize,
                ndim,
            });
        }

        // Reduce from the last requested dim backward so earlier indices stay valid
        let mut shape = a.shape().to_vec();
        let mut data = a.to_vec();
        for &d in sorted.iter().rev() {
            data = sum_dim_kernel(&data, &shape, d);
            shape.remove(d);
        }

        let out_shape: Vec<usize> = if keepdim {
            a.shape()
                .iter()
                .enumerate()
                .map(|(i, &s)| if sorted.contains(&i) { 1 } else { s })
                .collect()
        } else {
            shape
        };

        Tensor::from_vec(data, &out_shape)
    }
}
