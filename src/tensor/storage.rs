//! Storage: host memory with Arc-based sharing

use crate::dtype::{DType, Element};
use std::sync::Arc;

/// Storage for tensor data
///
/// Storage wraps an immutable, reference-counted buffer. Cloning a tensor
/// clones the `Arc`, never the data, and no operation writes into an existing
/// buffer; every kernel allocates its output.
pub struct Storage<T: Element> {
    inner: Arc<[T]>,
}

impl<T: Element> Storage<T> {
    /// Take ownership of a vector as storage
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { inner: data.into() }
    }

    /// Copy a slice into new storage
    pub fn from_slice(data: &[T]) -> Self {
        Self { inner: data.into() }
    }

    /// Number of elements (not bytes)
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the storage holds no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Element type
    #[inline]
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }

    /// Size in bytes
    #[inline]
    pub fn size_in_bytes(&self) -> usize {
        self.inner.len() * T::DTYPE.size_in_bytes()
    }

    /// Borrow the elements
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.inner
    }

    /// Number of tensors sharing this buffer
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl<T: Element> Clone for Storage<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Element> std::fmt::Debug for Storage<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("len", &self.inner.len())
            .field("dtype", &T::DTYPE)
            .field("refs", &Arc::strong_count(&self.inner))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_buffer() {
        let s = Storage::from_vec(vec![1.0f64, 2.0, 3.0]);
        assert_eq!(s.ref_count(), 1);
        let t = s.clone();
        assert_eq!(s.ref_count(), 2);
        assert_eq!(t.as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(t.size_in_bytes(), 24);
    }
}
