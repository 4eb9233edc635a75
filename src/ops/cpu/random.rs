//! CPU implementation of random operations.

use crate::dtype::FloatElement;
use crate::error::{Error, Result};
use crate::ops::RandomOps;
use crate::runtime::cpu::{CpuClient, kernels::categorical_kernel};
use crate::tensor::Tensor;
use rand::Rng;

/// RandomOps implementation for CPU runtime.
impl RandomOps for CpuClient {
    fn categorical<T: FloatElement>(
        &self,
        logits: &Tensor<T>,
        num_samples: usize,
        seed: Option<u64>,
    ) -> Result<Tensor<i64>> {
        if logits.ndim() != 2 {
            return Err(Error::shape_mismatch(&[0, 0], logits.shape()));
        }
        let (rows, k) = (logits.shape()[0], logits.shape()[1]);
        if k == 0 {
            return Err(Error::invalid_argument(
                "logits",
                "categorical sampling requires at least 1 category (last dim > 0)",
            ));
        }

        let seed = seed.unwrap_or_else(|| rand::rng().random());
        let mut out = vec![0i64; rows * num_samples];
        categorical_kernel(
            logits.as_slice(),
            k,
            num_samples,
            seed,
            &mut out,
            self.rayon_min_len(),
        )?;

        Tensor::from_vec(out, &[rows, num_samples])
    }
}
