//! Element traits for mapping Rust types to DType

use super::DType;
use num_traits::{Float, One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// Trait for types that can be elements of a tensor
///
/// This trait connects Rust's type system to numdist's runtime dtype system.
///
/// # Bounds
/// - `Copy + Send + Sync + 'static` - tensors share storage across threads
/// - `Zero + One` - identity values (num-traits)
/// - `Add + Sub + Mul + Div` - arithmetic operations (Output = Self)
/// - `PartialOrd` - comparison for validation and searches
pub trait Element:
    Copy
    + Send
    + Sync
    + fmt::Debug
    + fmt::Display
    + 'static
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + PartialOrd
{
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert to f64 for generic numeric operations
    fn as_f64(self) -> f64;

    /// Convert from f64 to this type
    ///
    /// Integer types truncate toward zero and saturate at their bounds.
    fn from_f64(v: f64) -> Self;
}

/// Floating point tensor elements.
///
/// Distribution parameters, densities and moments are computed in this type;
/// special functions evaluate in f64 and round back.
pub trait FloatElement: Element + Float {
    /// Tolerance used when checking that probabilities sum to one.
    ///
    /// Ten machine epsilons, applied both absolutely and relatively.
    fn sum_tolerance() -> Self {
        Self::from_f64(10.0) * Self::epsilon()
    }
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

impl Element for i64 {
    const DTYPE: DType = DType::I64;

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as i64
    }
}

impl FloatElement for f64 {}
impl FloatElement for f32 {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dtype_mapping() {
        assert_eq!(<f64 as Element>::DTYPE, DType::F64);
        assert_eq!(<f32 as Element>::DTYPE, DType::F32);
        assert_eq!(<i64 as Element>::DTYPE, DType::I64);
    }

    #[test]
    fn test_from_f64_truncates_ints() {
        assert_eq!(i64::from_f64(3.9), 3);
        assert_eq!(i64::from_f64(-2.5), -2);
        assert_eq!(f32::from_f64(0.5), 0.5f32);
    }

    #[test]
    fn test_sum_tolerance_scales_with_precision() {
        assert!(f32::sum_tolerance() > f64::sum_tolerance() as f32);
        assert!((f64::sum_tolerance() - 10.0 * f64::EPSILON).abs() < 1e-30);
    }
}
