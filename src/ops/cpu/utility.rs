//! CPU implementation of utility operations.

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::UtilityOps;
use crate::runtime::cpu::CpuClient;
use crate::tensor::Tensor;

/// UtilityOps implementation for CPU runtime.
impl UtilityOps for CpuClient {
    fn one_hot<T: Element>(&self, indices: &Tensor<i64>, num_classes: usize) -> Result<Tensor<T>> {
        let mut out = vec![T::zero(); indices.numel() * num_classes];

        for (i, &idx) in indices.as_slice().iter().enumerate() {
            if idx < 0 {
                return Err(Error::invalid_argument(
                    "indices",
                    format!("negative class index {idx}"),
                ));
            }
            let idx = idx as usize;
            if idx >= num_classes {
                return Err(Error::IndexOutOfBounds {
                    index: idx,
                    size: num_classes,
                });
            }
            out[i * num_classes + idx] = T::one();
        }

        let mut shape = indices.shape().to_vec();
        shape.push(num_classes);
        Tensor::from_vec(out, &shape)
    }
}
