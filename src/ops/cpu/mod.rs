//! CPU implementation of tensor operations.
//!
//! This module contains the operation trait implementations for the CPU runtime.
//! Each operation type has its own module.

pub mod activation;
pub mod binary;
pub mod linalg;
pub mod matmul;
pub mod random;
pub mod reduce;
pub mod scalar;
pub mod shape;
pub mod unary;
pub mod utility;
