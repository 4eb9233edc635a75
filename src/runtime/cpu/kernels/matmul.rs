//! Matrix kernels over contiguous row-major buffers

use crate::dtype::Element;

/// Matrix multiplication: C = A @ B
///
/// # Arguments
/// * `a` - Matrix A (m × k), row-major
/// * `b` - Matrix B (k × n), row-major
/// * `out` - Output matrix C (m × n), row-major; overwritten
pub fn matmul_kernel<T: Element>(a: &[T], b: &[T], out: &mut [T], m: usize, n: usize, k: usize) {
    debug_assert_eq!(a.len(), m * k);
    debug_assert_eq!(b.len(), k * n);
    debug_assert_eq!(out.len(), m * n);

    out.fill(T::zero());

    // ikj order: better cache locality for B
    for i in 0..m {
        let row = &mut out[i * n..(i + 1) * n];
        for kk in 0..k {
            let a_val = a[i * k + kk];
            for (acc, &b_val) in row.iter_mut().zip(&b[kk * n..(kk + 1) * n]) {
                *acc = *acc + a_val * b_val;
            }
        }
    }
}

/// Overwrite the main diagonal of each `n × n` matrix in `matrices` with the
/// matching length-`n` slice of `diag`.
pub fn set_diagonal_kernel<T: Element>(matrices: &mut [T], diag: &[T], n: usize) {
    let batch = if n == 0 { 0 } else { diag.len() / n };
    debug_assert_eq!(matrices.len(), batch * n * n);

    for b in 0..batch {
        let mat = &mut matrices[b * n * n..(b + 1) * n * n];
        for (i, &d) in diag[b * n..(b + 1) * n].iter().enumerate() {
            mat[i * n + i] = d;
        }
    }
}
