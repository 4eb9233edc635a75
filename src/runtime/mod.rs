//! Runtime backends for tensor computation
//!
//! This module defines the `RuntimeClient` trait and the CPU implementation.
//!
//! # Architecture
//!
//! ```text
//! RuntimeClient (dispatches operations)
//! └── CpuClient (host memory, optional rayon parallelism)
//! ```
//!
//! Operations are exposed through the traits in [`crate::ops`], implemented
//! per client. Code that only needs "some tensor engine" is generic over
//! [`crate::ops::TensorEngine`].

pub mod cpu;

pub use cpu::CpuClient;

/// Handle used to dispatch tensor operations to a backend
pub trait RuntimeClient: Clone + Send + Sync + std::fmt::Debug + 'static {
    /// Human-readable backend name (e.g. "cpu")
    fn backend_name(&self) -> &'static str;

    /// Wait for all queued work to finish
    ///
    /// Synchronous backends have nothing to wait for.
    fn synchronize(&self) {}
}
