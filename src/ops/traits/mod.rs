//! Operation traits for tensor operations.
//!
//! This module contains trait definitions for the tensor operations the
//! distributions are written against. Implementations are in the
//! backend-specific modules (currently `cpu/`).

mod activation;
mod binary;
mod linalg;
mod matmul;
mod random;
mod reduce;
mod scalar;
mod shape;
mod unary;
mod utility;

pub use activation::ActivationOps;
pub use binary::BinaryOps;
pub use linalg::LinalgOps;
pub use matmul::MatmulOps;
pub use random::RandomOps;
pub use reduce::ReduceOps;
pub use scalar::ScalarOps;
pub use shape::ShapeOps;
pub use unary::UnaryOps;
pub use utility::UtilityOps;

use crate::runtime::RuntimeClient;

/// Every operation a distribution needs from its backend
///
/// Blanket-implemented for any client that implements all operation traits.
pub trait TensorEngine:
    RuntimeClient
    + ActivationOps
    + BinaryOps
    + LinalgOps
    + MatmulOps
    + RandomOps
    + ReduceOps
    + ScalarOps
    + ShapeOps
    + UnaryOps
    + UtilityOps
{
}

impl<C> TensorEngine for C where
    C: RuntimeClient
        + ActivationOps
        + BinaryOps
        + LinalgOps
        + MatmulOps
        + RandomOps
        + ReduceOps
        + ScalarOps
        + ShapeOps
            + UnaryOps
        + UtilityOps
{
}
