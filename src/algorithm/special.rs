//! Special mathematical functions for probability distributions
//!
//! # Functions Provided
//!
//! - [`lgamma`] - Log-gamma function ln|Γ(x)| (numerically stable)
//!
//! Factorials are `ln(x!) = lgamma(x + 1)`.
//!
//! The Lanczos approximation (g=7, n=9) gives ~15 significant digits for
//! `x >= 0.5`; smaller arguments go through the reflection formula.

use std::f64::consts::PI;

/// ln(√(2π)) ≈ 0.9189385332046727 (used in Stirling's approximation)
pub const LN_SQRT_2PI: f64 = 0.9189385332046727417803297364056176398614;

/// Lanczos approximation parameter g.
///
/// Source: Numerical Recipes, 3rd Edition.
pub const LANCZOS_G: f64 = 7.0;

/// Lanczos coefficients for g=7.
pub const LANCZOS_COEFFICIENTS: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Compute lgamma(x) = ln(|Γ(x)|).
///
/// Poles at non-positive integers return `+inf`; NaN propagates.
pub fn lgamma(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x <= 0.0 && x == x.floor() {
        return f64::INFINITY;
    }
    if x.is_infinite() {
        return f64::INFINITY;
    }

    if x < 0.5 {
        // Reflection: lgamma(x) = ln(pi) - ln|sin(pi*x)| - lgamma(1-x)
        let sin_pi_x = (PI * x).sin().abs();
        PI.ln() - sin_pi_x.ln() - lgamma(1.0 - x)
    } else {
        lgamma_positive(x)
    }
}

/// lgamma for x >= 0.5 using the Lanczos approximation.
fn lgamma_positive(x: f64) -> f64 {
    let x = x - 1.0;

    let mut ag = LANCZOS_COEFFICIENTS[0];
    for (i, &c) in LANCZOS_COEFFICIENTS.iter().enumerate().skip(1) {
        ag += c / (x + i as f64);
    }

    let t = x + LANCZOS_G + 0.5;
    LN_SQRT_2PI + (x + 0.5) * t.ln() - t + ag.ln()
}
