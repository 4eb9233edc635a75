//! CPU implementation of matrix multiplication.

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::ops::{MatmulOps, ShapeOps};
use crate::runtime::cpu::{CpuClient, kernels::matmul_kernel};
use crate::tensor::{Tensor, broadcast_shapes};

/// MatmulOps implementation for CPU runtime.
impl MatmulOps for CpuClient {
    fn matmul<T: Element>(&self, a: &Tensor<T>, b: &Tensor<T>) -> Result<Tensor<T>> {
        for t in [a, b] {
            if t.ndim() < 2 {
                return Err(Error::shape_mismatch(&[0, 0], t.shape()));
            }
        }

        let (a_batch, a_mat) = a.shape().split_at(a.ndim() - 2);
        let (b_batch, b_mat) = b.shape().split_at(b.ndim() - 2);
        let (m, k) = (a_mat[0], a_mat[1]);
        let (k2, n) = (b_mat[0], b_mat[1]);
        if k != k2 {
            return Err(Error::shape_mismatch(&[k, n], b_mat));
        }

        let batch = broadcast_shapes(a_batch, b_batch)
            .ok_or_else(|| Error::broadcast(a.shape(), b.shape()))?;

        let mut a_shape = batch.to_vec();
        a_shape.extend_from_slice(&[m, k]);
        let mut b_shape = batch.to_vec();
        b_shape.extend_from_slice(&[k, n]);
        let a = self.broadcast_to(a, &a_shape)?;
        let b = self.broadcast_to(b, &b_shape)?;

        let batch_count: usize = batch.iter().product();
        let mut out = vec![T::zero(); batch_count * m * n];
        let (da, db) = (a.as_slice(), b.as_slice());
        for i in 0..batch_count {
            matmul_kernel(
                &da[i * m * k..(i + 1) * m * k],
                &db[i * k * n..(i + 1) * k * n],
                &mut out[i * m * n..(i + 1) * m * n],
                m,
                n,
                k,
            );
        }

        let mut out_shape = batch.to_vec();
        out_shape.extend_from_slice(&[m, n]);
        Tensor::from_vec(out, &out_shape)
    }
}
