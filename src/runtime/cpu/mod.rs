//! CPU runtime implementation
//!
//! The CPU runtime is the reference implementation for all tensor operations.
//!
//! # Broadcasting
//!
//! NumPy-style broadcasting is supported for binary arithmetic operations
//! (add, sub, mul, div, xlogy). Shapes are right-aligned and expanded where
//! one operand has size 1. Broadcast operands are read through a strided walk
//! with stride-0 dimensions instead of being copied first.

mod client;
pub(crate) mod kernels;

pub use crate::tensor::Tensor;
pub use client::CpuClient;
