//! Reduction kernels along a single dimension

use crate::dtype::{Element, FloatElement};

/// Split `shape` around `dim` into (outer, len, inner) extents.
#[inline]
pub fn split_at_dim(shape: &[usize], dim: usize) -> (usize, usize, usize) {
    let outer: usize = shape[..dim].iter().product();
    let len = shape[dim];
    let inner: usize = shape[dim + 1..].iter().product();
    (outer, len, inner)
}

/// Sum a contiguous buffer of `shape` along `dim`.
///
/// The result has `outer * inner` elements, i.e. `shape` with `dim` removed.
pub fn sum_dim_kernel<T: Element>(data: &[T], shape: &[usize], dim: usize) -> Vec<T> {
    let (outer, len, inner) = split_at_dim(shape, dim);
    let mut out = vec![T::zero(); outer * inner];

    for o in 0..outer {
        let base = o * len * inner;
        let dst = &mut out[o * inner..(o + 1) * inner];
        for j in 0..len {
            let src = &data[base + j * inner..base + (j + 1) * inner];
            for (acc, &x) in dst.iter_mut().zip(src) {
                *acc = *acc + x;
            }
        }
    }

    out
}

/// Numerically stable softmax along `dim` (max-subtracted).
///
/// Lanes whose maximum is `-inf` (every entry `-inf`) come out as NaN.
pub fn softmax_dim_kernel<T: FloatElement>(data: &[T], shape: &[usize], dim: usize) -> Vec<T> {
    let (outer, len, inner) = split_at_dim(shape, dim);
    let mut out = vec![T::zero(); data.len()];

    for o in 0..outer {
        for i in 0..inner {
            let at = |j: usize| o * len * inner + j * inner + i;

            let max = (0..len).fold(T::neg_infinity(), |m, j| m.max(data[at(j)]));
            let mut total = T::zero();
            for j in 0..len {
                let e = (data[at(j)] - max).exp();
                out[at(j)] = e;
                total = total + e;
            }
            for j in 0..len {
                out[at(j)] = out[at(j)] / total;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_dim_middle_axis() {
        // shape [2, 3, 2]
        let data: Vec<f64> = (0..12).map(|x| x as f64).collect();
        let out = sum_dim_kernel(&data, &[2, 3, 2], 1);
        assert_eq!(out, vec![6.0, 9.0, 24.0, 27.0]);
    }

    #[test]
    fn test_sum_dim_empty_axis_is_zero() {
        let out = sum_dim_kernel::<f64>(&[], &[2, 0], 1);
        assert_eq!(out, vec![0.0, 0.0]);
    }

    #[test]
    fn test_softmax_rows_sum_to_one() {
        let data = [1000.0f64, 1001.0, 1002.0, -1.0, 0.0, 1.0];
        let out = softmax_dim_kernel(&data, &[2, 3], 1);
        for row in out.chunks(3) {
            assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        }
        // Shift invariance
        for j in 0..3 {
            assert!((out[j] - out[3 + j]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_softmax_handles_neg_infinity() {
        let data = [f64::NEG_INFINITY, 0.0, 0.0];
        let out = softmax_dim_kernel(&data, &[3], 0);
        assert_eq!(out[0], 0.0);
        assert!((out[1] - 0.5).abs() < 1e-15);
    }
}
