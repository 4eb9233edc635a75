//! CPU implementation of unary operations.

use crate::algorithm::special;
use crate::dtype::FloatElement;
use crate::error::Result;
use crate::ops::UnaryOps;
use crate::runtime::cpu::{CpuClient, kernels::unary_map};
use crate::tensor::Tensor;

/// UnaryOps implementation for CPU runtime.
impl UnaryOps for CpuClient {
    fn neg<T: FloatElement>(&self, a: &Tensor<T>) -> Result<Tensor<T>> {
        unary_map(a, |x| -x)
    }

    fn exp<T: FloatElement>(&self, a: &Tensor<T>) -> Result<Tensor<T>> {
        unary_map(a, |x| x.exp())
    }

    fn log<T: FloatElement>(&self, a: &Tensor<T>) -> Result<Tensor<T>> {
        unary_map(a, |x| x.ln())
    }

    fn sqrt<T: FloatElement>(&self, a: &Tensor<T>) -> Result<Tensor<T>> {
        unary_map(a, |x| x.sqrt())
    }

    fn lgamma<T: FloatElement>(&self, a: &Tensor<T>) -> Result<Tensor<T>> {
        unary_map(a, |x| T::from_f64(special::lgamma(x.as_f64())))
    }
}
