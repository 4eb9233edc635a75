//! Strided traversal kernels: broadcasting element-wise maps and gathers

use crate::dtype::Element;
use crate::error::{Error, Result};
use crate::tensor::{Layout, Shape, Tensor, broadcast_shapes};

/// Visit every multi-index of `shape` in row-major order.
///
/// For each position, `f` receives the element offset of each of the `N`
/// operands, computed from that operand's strides. Stride-0 dimensions
/// revisit the same element, which is how broadcasting is realized.
pub fn walk_strided<const N: usize>(
    shape: &[usize],
    strides: [&[isize]; N],
    mut f: impl FnMut([usize; N]),
) {
    let total: usize = shape.iter().product();
    if total == 0 {
        return;
    }

    let ndim = shape.len();
    let mut index = Shape::from_elem(0, ndim);
    let mut offsets = [0isize; N];

    for _ in 0..total {
        f(offsets.map(|o| o as usize));

        for d in (0..ndim).rev() {
            index[d] += 1;
            for (off, st) in offsets.iter_mut().zip(strides.iter()) {
                *off += st[d];
            }
            if index[d] < shape[d] {
                break;
            }
            for (off, st) in offsets.iter_mut().zip(strides.iter()) {
                *off -= st[d] * shape[d] as isize;
            }
            index[d] = 0;
        }
    }
}

/// Apply `f` element-wise to two tensors after broadcasting them together.
pub fn binary_broadcast<T: Element, U: Element>(
    a: &Tensor<T>,
    b: &Tensor<T>,
    f: impl Fn(T, T) -> U,
) -> Result<Tensor<U>> {
    let out_shape =
        broadcast_shapes(a.shape(), b.shape()).ok_or_else(|| Error::broadcast(a.shape(), b.shape()))?;
    let la = a
        .layout()
        .broadcast_to(&out_shape)
        .ok_or_else(|| Error::broadcast(a.shape(), b.shape()))?;
    let lb = b
        .layout()
        .broadcast_to(&out_shape)
        .ok_or_else(|| Error::broadcast(a.shape(), b.shape()))?;

    let (da, db) = (a.as_slice(), b.as_slice());
    let mut out = Vec::with_capacity(out_shape.iter().product());

    // Equal shapes walk both buffers in lockstep
    if a.shape() == b.shape() {
        out.extend(da.iter().zip(db).map(|(&x, &y)| f(x, y)));
    } else {
        walk_strided(&out_shape, [la.strides(), lb.strides()], |[ia, ib]| {
            out.push(f(da[ia], db[ib]))
        });
    }

    Tensor::from_vec(out, &out_shape)
}

/// Apply `f` to every element.
pub fn unary_map<T: Element, U: Element>(a: &Tensor<T>, f: impl Fn(T) -> U) -> Result<Tensor<U>> {
    Tensor::from_vec(a.as_slice().iter().map(|&x| f(x)).collect(), a.shape())
}

/// Materialize a strided view of `src` into a new contiguous tensor.
///
/// `view` must address only elements of `src` (a broadcast or permutation of
/// its layout).
pub fn gather_strided<T: Element>(src: &Tensor<T>, view: &Layout) -> Result<Tensor<T>> {
    let data = src.as_slice();
    let mut out = Vec::with_capacity(view.elem_count());
    walk_strided(view.shape(), [view.strides()], |[i]| out.push(data[i]));
    Tensor::from_vec(out, view.shape())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_strided_broadcast_offsets() {
        let mut seen = Vec::new();
        walk_strided(&[2, 3], [&[0, 1], &[1, 0]], |[a, b]| seen.push((a, b)));
        assert_eq!(
            seen,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn test_walk_strided_scalar_visits_once() {
        let mut count = 0;
        walk_strided::<1>(&[], [&[]], |[i]| {
            assert_eq!(i, 0);
            count += 1;
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn test_binary_broadcast_row_and_column() {
        let col = Tensor::from_slice(&[1.0f64, 2.0], &[2, 1]);
        let row = Tensor::from_slice(&[10.0f64, 20.0, 30.0], &[3]);
        let out = binary_broadcast(&col, &row, |x, y| x + y).unwrap();
        assert_eq!(out.shape(), &[2, 3]);
        assert_eq!(out.to_vec(), vec![11.0, 21.0, 31.0, 12.0, 22.0, 32.0]);
    }

    #[test]
    fn test_binary_broadcast_rejects_incompatible() {
        let a = Tensor::from_slice(&[1.0f64, 2.0, 3.0], &[3]);
        let b = Tensor::from_slice(&[1.0f64, 2.0], &[2]);
        let err = binary_broadcast(&a, &b, |x, y| x * y).unwrap_err();
        assert!(matches!(err, Error::BroadcastError { .. }));
    }

    #[test]
    fn test_gather_permuted() {
        let t = Tensor::from_slice(&[1i64, 2, 3, 4, 5, 6], &[2, 3]);
        let view = t.layout().permute(&[1, 0]).unwrap();
        let out = gather_strided(&t, &view).unwrap();
        assert_eq!(out.shape(), &[3, 2]);
        assert_eq!(out.to_vec(), vec![1, 4, 2, 5, 3, 6]);
    }
}
