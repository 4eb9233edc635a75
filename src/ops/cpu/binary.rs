//! CPU implementation of binary operations.

use crate::dtype::{Element, FloatElement};
use crate::error::Result;
use crate::ops::BinaryOps;
use crate::runtime::cpu::{CpuClient, kernels::binary_broadcast};
use crate::tensor::Tensor;

/// BinaryOps implementation for CPU runtime.
impl BinaryOps for CpuClient {
    fn add<T: Element>(&self, a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>> {
        binary_broadcast(a, b, |x, y| x + y)
    }

    fn sub<T: Element>(&self, a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>> {
        binary_broadcast(a, b, |x, y| x - y)
    }

    fn mul<T: Element>(&self, a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>> {
        binary_broadcast(a, b, |x, y| x * y)
    }

    fn div<T: Element>(&self, a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>> {
        binary_broadcast(a, b, |x, y| x / y)
    }

    fn xlogy<T: FloatElement>(&self, x: &Tensor<T>, y: &Tensor<T>) -> Result<Tensor<T>> {
        binary_broadcast(x, y, |x, y| if x == T::zero() { T::zero() } else { x * y.ln() })
    }
}
