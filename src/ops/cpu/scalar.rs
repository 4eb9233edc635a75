//! CPU implementation of scalar operations.

use crate::dtype::Element;
use crate::error::Result;
use crate::ops::ScalarOps;
use crate::runtime::cpu::{CpuClient, kernels::unary_map};
use crate::tensor::Tensor;

/// ScalarOps implementation for CPU runtime.
impl ScalarOps for CpuClient {
    fn add_scalar<T: Element>(&self, a: &Tensor<T>, scalar: f64) -> Result<Tensor<T>> {
        let s = T::from_f64(scalar);
        unary_map(a, |x| x + s)
    }
}
