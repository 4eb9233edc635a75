//! Scalar numerical algorithms shared by the backends
//!
//! Kernels call these element by element; keeping them backend-independent
//! means every engine evaluates special functions identically.

pub mod special;
