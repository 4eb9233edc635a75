//! CPU kernel implementations
//!
//! This module provides low-level compute kernels for CPU operations.
//! Kernels work on contiguous row-major slices (or strided walks over them)
//! and are generic over `T: Element`.

pub mod matmul;
pub mod random;
pub mod reduce;
pub mod strided;

pub use matmul::{matmul_kernel, set_diagonal_kernel};
pub use random::categorical_kernel;
pub use reduce::{softmax_dim_kernel, sum_dim_kernel};
pub use strided::{binary_broadcast, gather_strided, unary_map};
