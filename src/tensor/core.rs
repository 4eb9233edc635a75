//! Core Tensor type

use super::{Layout, Storage};
use crate::dtype::{DType, Element};
use crate::error::{Error, Result};
use std::fmt;

/// N-dimensional array stored in host memory
///
/// `Tensor` is the fundamental data structure in numdist. It consists of:
/// - **Storage**: Reference-counted, immutable element buffer
/// - **Layout**: Shape and (row-major) strides
/// - **Element type**: the Rust type `T`, mirrored at runtime by [`DType`]
///
/// Tensors are values: operations return new tensors and never write into an
/// existing buffer, so a tensor can be shared freely between callers and
/// threads. `reshape` and `unsqueeze` are zero-copy.
///
/// # Example
///
/// ```
/// use numdist::tensor::Tensor;
///
/// let a = Tensor::from_slice(&[1.0f64, 2.0, 3.0, 4.0], &[2, 2]);
/// let b = a.reshape(&[4])?; // shares storage with a
/// assert_eq!(b.shape(), &[4]);
/// # Ok::<(), numdist::error::Error>(())
/// ```
pub struct Tensor<T: Element = f64> {
    storage: Storage<T>,
    layout: Layout,
}

impl<T: Element> Tensor<T> {
    /// Create a tensor from storage and layout
    pub(crate) fn from_parts(storage: Storage<T>, layout: Layout) -> Self {
        debug_assert!(layout.is_contiguous());
        debug_assert_eq!(storage.len(), layout.elem_count());
        Self { storage, layout }
    }

    /// Create a tensor from a slice of data
    ///
    /// # Panics
    ///
    /// Panics if `data.len()` does not equal the product of the `shape` dimensions.
    /// For a fallible alternative, use [`Self::try_from_slice`].
    pub fn from_slice(data: &[T], shape: &[usize]) -> Self {
        Self::try_from_slice(data, shape).expect("Tensor::from_slice failed")
    }

    /// Create a tensor from a slice of data (fallible version)
    ///
    /// Returns an error if `data.len()` does not equal the product of the `shape` dimensions.
    pub fn try_from_slice(data: &[T], shape: &[usize]) -> Result<Self> {
        let expected_len: usize = shape.iter().product();
        if data.len() != expected_len {
            return Err(Error::ShapeMismatch {
                expected: shape.to_vec(),
                got: vec![data.len()],
            });
        }

        Ok(Self {
            storage: Storage::from_slice(data),
            layout: Layout::contiguous(shape),
        })
    }

    /// Create a tensor taking ownership of a vector
    pub fn from_vec(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let expected_len: usize = shape.iter().product();
        if data.len() != expected_len {
            return Err(Error::ShapeMismatch {
                expected: shape.to_vec(),
                got: vec![data.len()],
            });
        }

        Ok(Self {
            storage: Storage::from_vec(data),
            layout: Layout::contiguous(shape),
        })
    }

    /// Create a 0-dimensional tensor holding a single value
    pub fn scalar(value: T) -> Self {
        Self {
            storage: Storage::from_vec(vec![value]),
            layout: Layout::scalar(),
        }
    }

    /// Create a tensor filled with a value
    pub fn full(shape: &[usize], value: T) -> Self {
        let len: usize = shape.iter().product();
        Self {
            storage: Storage::from_vec(vec![value; len]),
            layout: Layout::contiguous(shape),
        }
    }

    /// Create a tensor filled with zeros
    pub fn zeros(shape: &[usize]) -> Self {
        Self::full(shape, T::zero())
    }

    /// Create a tensor filled with ones
    pub fn ones(shape: &[usize]) -> Self {
        Self::full(shape, T::one())
    }

    // ===== Accessors =====

    /// Get the storage
    #[inline]
    pub fn storage(&self) -> &Storage<T> {
        &self.storage
    }

    /// Get the layout
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    /// Get the strides
    #[inline]
    pub fn strides(&self) -> &[isize] {
        self.layout.strides()
    }

    /// Get the number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    /// Get the total number of elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.layout.elem_count()
    }

    /// Get the element type
    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Check if this is a scalar (0-dimensional tensor)
    #[inline]
    pub fn is_scalar(&self) -> bool {
        self.layout.is_scalar()
    }

    /// Get size along a dimension (supports negative indexing)
    pub fn size(&self, dim: isize) -> Option<usize> {
        self.layout.dim(dim)
    }

    /// Borrow the elements in row-major order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Copy the elements into a vector in row-major order
    pub fn to_vec(&self) -> Vec<T> {
        self.storage.as_slice().to_vec()
    }

    /// Extract the single value of a one-element tensor
    pub fn item(&self) -> Result<T> {
        match self.as_slice() {
            [value] => Ok(*value),
            _ => Err(Error::shape_mismatch(&[], self.shape())),
        }
    }

    // ===== Shape Operations (Zero-Copy) =====

    /// Reshape to a new shape with the same number of elements
    pub fn reshape(&self, shape: &[usize]) -> Result<Self> {
        let new_layout = self
            .layout
            .reshape(shape)
            .ok_or_else(|| Error::shape_mismatch(shape, self.shape()))?;

        Ok(Self {
            storage: self.storage.clone(),
            layout: new_layout,
        })
    }

    /// Flatten to 1D
    pub fn flatten(&self) -> Result<Self> {
        self.reshape(&[self.numel()])
    }

    /// Add a dimension of size 1 (-1 appends a trailing axis)
    pub fn unsqueeze(&self, dim: isize) -> Result<Self> {
        let new_layout = self
            .layout
            .unsqueeze(dim)
            .ok_or(Error::InvalidDimension {
                dim,
                ndim: self.ndim(),
            })?;

        Ok(Self {
            storage: self.storage.clone(),
            layout: Layout::contiguous(new_layout.shape()),
        })
    }
}

impl<T: Element> Clone for Tensor<T> {
    /// Shares the underlying storage
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.clone(),
            layout: self.layout.clone(),
        }
    }
}

impl<T: Element> PartialEq for Tensor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.as_slice() == other.as_slice()
    }
}

impl<T: Element> fmt::Debug for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("dtype", &T::DTYPE)
            .finish()
    }
}

impl<T: Element> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MAX_SHOWN: usize = 8;

        write!(f, "Tensor({:?}, {}, [", self.shape(), T::DTYPE)?;
        for (i, v) in self.as_slice().iter().take(MAX_SHOWN).enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        if self.numel() > MAX_SHOWN {
            f.write_str(", ...")?;
        }
        f.write_str("])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_shape_checked() {
        let t = Tensor::from_slice(&[1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]);
        assert_eq!(t.shape(), &[2, 3]);
        assert_eq!(t.numel(), 6);
        assert_eq!(t.dtype(), DType::F64);

        let err = Tensor::try_from_slice(&[1.0f64, 2.0], &[3]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }

    #[test]
    fn test_scalar_and_item() {
        let t = Tensor::scalar(4.0f64);
        assert!(t.is_scalar());
        assert_eq!(t.numel(), 1);
        assert_eq!(t.item().unwrap(), 4.0);

        let v = Tensor::from_slice(&[1.0f64, 2.0], &[2]);
        assert!(v.item().is_err());
    }

    #[test]
    fn test_reshape_shares_storage() {
        let t = Tensor::from_slice(&[1i64, 2, 3, 4], &[2, 2]);
        let r = t.reshape(&[4]).unwrap();
        assert_eq!(r.as_slice(), t.as_slice());
        assert_eq!(t.storage().ref_count(), 2);
        assert!(t.reshape(&[3]).is_err());
    }

    #[test]
    fn test_unsqueeze_trailing_axis() {
        let t = Tensor::from_slice(&[4.0f64, 5.0], &[2]);
        let u = t.unsqueeze(-1).unwrap();
        assert_eq!(u.shape(), &[2, 1]);

        let s = Tensor::scalar(4.0f64).unsqueeze(-1).unwrap();
        assert_eq!(s.shape(), &[1]);
    }

    #[test]
    fn test_display_truncates() {
        let t = Tensor::<f64>::zeros(&[10]);
        let shown = t.to_string();
        assert!(shown.starts_with("Tensor([10], f64, ["));
        assert!(shown.ends_with(", ...])"));
    }
}
