//! Common test utilities
#![allow(dead_code)]

use numdist::distributions::{DistributionOptions, Multinomial, Parameterization};
use numdist::runtime::cpu::CpuClient;
use numdist::tensor::Tensor;
use std::sync::Once;

/// Create a CPU client for testing
pub fn create_cpu_client() -> CpuClient {
    init_tracing();
    CpuClient::new()
}

/// Install a `RUST_LOG`-filtered subscriber that writes through the test harness
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Multinomial over a single probability row
pub fn multinomial_from_probs(total_count: f64, probs: &[f64], validate: bool) -> Multinomial {
    let client = create_cpu_client();
    Multinomial::new(
        &client,
        Tensor::scalar(total_count),
        Parameterization::Probs(Tensor::from_slice(probs, &[probs.len()])),
        DistributionOptions::default().with_validate_args(validate),
    )
    .expect("valid multinomial")
}

/// All count vectors of length `k` with entries summing to `n`
pub fn compositions(n: usize, k: usize) -> Vec<Vec<f64>> {
    if k == 1 {
        return vec![vec![n as f64]];
    }
    let mut out = Vec::new();
    for first in 0..=n {
        for mut rest in compositions(n - first, k - 1) {
            rest.insert(0, first as f64);
            out.push(rest);
        }
    }
    out
}

/// ln(n choose m)
pub fn ln_binomial(n: u32, m: u32) -> f64 {
    let ln_fact = |x: u32| (1..=x).map(|i| (i as f64).ln()).sum::<f64>();
    ln_fact(n) - ln_fact(m) - ln_fact(n - m)
}
