//! CPU client

use crate::runtime::RuntimeClient;

/// Default minimum number of batch rows handed to one rayon task
const DEFAULT_RAYON_MIN_LEN: usize = 64;

/// CPU client for operation dispatch
///
/// Holds the tuning knobs of the CPU kernels. Cloning is cheap.
#[derive(Clone, Debug)]
pub struct CpuClient {
    rayon_min_len: usize,
}

impl CpuClient {
    /// Create a new CPU client with default settings
    pub fn new() -> Self {
        Self {
            rayon_min_len: DEFAULT_RAYON_MIN_LEN,
        }
    }

    /// Set the minimum number of rows a parallel task processes
    ///
    /// Has no effect when the `rayon` feature is disabled.
    pub fn with_rayon_min_len(mut self, min_len: usize) -> Self {
        self.rayon_min_len = min_len.max(1);
        self
    }

    /// Minimum number of rows a parallel task processes
    #[inline]
    pub fn rayon_min_len(&self) -> usize {
        self.rayon_min_len
    }
}

impl Default for CpuClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RuntimeClient for CpuClient {
    fn backend_name(&self) -> &'static str {
        "cpu"
    }
}
