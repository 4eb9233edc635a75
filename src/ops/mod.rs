//! Tensor operations
//!
//! This module defines operation traits and their CPU implementations.
//!
//! # Design
//!
//! Operations are defined as traits that are implemented by a
//! [`RuntimeClient`](crate::runtime::RuntimeClient). Methods are generic over
//! the element type, so one client serves f32 and f64 tensors alike.
//!
//! ```text
//! CpuClient
//!   └── implements TensorEngine
//!         ├── add, sub, mul, div, xlogy   (binary, broadcasting)
//!         ├── neg, exp, log, sqrt, lgamma (unary)
//!         ├── sum                         (reductions)
//!         ├── softmax                     (activations)
//!         ├── matmul, set_diagonal        (matrix operations)
//!         ├── one_hot, broadcast_to       (utility, shape)
//!         └── categorical                 (random)
//! ```
//!
//! Code that needs a backend takes `C: TensorEngine`; adding a backend means
//! implementing each trait in [`traits`] for its client.

pub(crate) mod cpu;
pub mod traits;

pub use traits::*;
