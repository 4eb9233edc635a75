//! Runtime argument checks
//!
//! Each check returns `Ok(())` (or the checked tensor) when it passes and an
//! [`Error::InvalidArgument`] otherwise. Callers sequence a check before the
//! computation that depends on it with `?`.

use crate::dtype::{Element, FloatElement};
use crate::error::{Error, Result};
use crate::ops::TensorEngine;
use crate::tensor::Tensor;
use tracing::debug;

fn fail(arg: &'static str, reason: String) -> Error {
    debug!(arg, %reason, "argument check failed");
    Error::invalid_argument(arg, reason)
}

/// Every element is `>= 0` (NaN fails)
pub fn assert_non_negative<T: Element>(x: &Tensor<T>, arg: &'static str) -> Result<()> {
    match x.as_slice().iter().find(|&&v| !(v >= T::zero())) {
        Some(v) => Err(fail(arg, format!("must be non-negative, found {v}"))),
        None => Ok(()),
    }
}

/// Every element is a whole number (NaN and infinities fail)
pub fn assert_integer_form<T: FloatElement>(x: &Tensor<T>, arg: &'static str) -> Result<()> {
    match x
        .as_slice()
        .iter()
        .find(|&&v| !v.is_finite() || v.floor() != v)
    {
        Some(v) => Err(fail(arg, format!("must have integer form, found {v}"))),
        None => Ok(()),
    }
}

/// `x` has at least `rank` dimensions
pub fn assert_rank_at_least<T: Element>(x: &Tensor<T>, rank: usize, arg: &'static str) -> Result<()> {
    if x.ndim() < rank {
        return Err(fail(
            arg,
            format!("must have rank at least {rank}, got shape {:?}", x.shape()),
        ));
    }
    Ok(())
}

/// `a` and `b` are element-wise equal after broadcasting
pub fn assert_equal<T: FloatElement, C: TensorEngine>(
    client: &C,
    a: &Tensor<T>,
    b: &Tensor<T>,
    arg: &'static str,
) -> Result<()> {
    assert_near(client, a, b, T::zero(), arg)
}

/// `|a - b| <= tol` element-wise after broadcasting (NaN fails)
pub fn assert_near<T: FloatElement, C: TensorEngine>(
    client: &C,
    a: &Tensor<T>,
    b: &Tensor<T>,
    tol: T,
    arg: &'static str,
) -> Result<()> {
    let diff = client.sub(a, b)?;
    let Some(i) = diff.as_slice().iter().position(|&d| !(d.abs() <= tol)) else {
        return Ok(());
    };

    let found = client.broadcast_to(a, diff.shape())?.as_slice()[i];
    let expected = client.broadcast_to(b, diff.shape())?.as_slice()[i];
    Err(fail(
        arg,
        format!("expected {expected} but found {found} (element {i}, tolerance {tol})"),
    ))
}

/// Check that `x` holds non-negative whole numbers when `validate_args` is set
///
/// Returns `x` itself so the checked value can be bound in one step.
pub fn embed_check_nonnegative_integer_form<T: FloatElement>(
    x: &Tensor<T>,
    arg: &'static str,
    validate_args: bool,
) -> Result<Tensor<T>> {
    if validate_args {
        assert_non_negative(x, arg)?;
        assert_integer_form(x, arg)?;
    }
    Ok(x.clone())
}

/// Apply the `allow_nan_stats` policy to a computed statistic
///
/// With `allow_nan_stats` the value passes through unchanged; otherwise any
/// NaN turns into [`Error::UndefinedStatistic`].
pub fn check_statistic<T: FloatElement>(
    value: Tensor<T>,
    statistic: &'static str,
    allow_nan_stats: bool,
) -> Result<Tensor<T>> {
    if !allow_nan_stats && value.as_slice().iter().any(|v| v.is_nan()) {
        debug!(statistic, "statistic is undefined");
        return Err(Error::UndefinedStatistic { statistic });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::cpu::CpuClient;

    #[test]
    fn test_non_negative_rejects_nan_and_negatives() {
        assert!(assert_non_negative(&Tensor::from_slice(&[0.0f64, 3.0], &[2]), "x").is_ok());
        assert!(assert_non_negative(&Tensor::from_slice(&[1.0f64, -0.5], &[2]), "x").is_err());
        assert!(assert_non_negative(&Tensor::scalar(f64::NAN), "x").is_err());
    }

    #[test]
    fn test_integer_form() {
        assert!(assert_integer_form(&Tensor::from_slice(&[0.0f64, 4.0, -2.0], &[3]), "n").is_ok());
        let err = assert_integer_form(&Tensor::scalar(2.5f64), "n").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { arg: "n", .. }));
        assert!(assert_integer_form(&Tensor::scalar(f64::INFINITY), "n").is_err());
    }

    #[test]
    fn test_assert_equal_broadcasts() {
        let client = CpuClient::new();
        let sums = Tensor::from_slice(&[4.0f64, 4.0], &[2]);
        assert!(assert_equal(&client, &sums, &Tensor::scalar(4.0), "counts").is_ok());

        let sums = Tensor::from_slice(&[4.0f64, 3.0], &[2]);
        let err = assert_equal(&client, &sums, &Tensor::scalar(4.0), "counts").unwrap_err();
        match err {
            Error::InvalidArgument { arg, reason } => {
                assert_eq!(arg, "counts");
                assert!(reason.contains("expected 4 but found 3"), "{reason}");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_assert_near_tolerance() {
        let client = CpuClient::new();
        let a = Tensor::scalar(1.0f64 + 1e-15);
        let b = Tensor::scalar(1.0f64);
        assert!(assert_near(&client, &a, &b, 1e-14, "p").is_ok());
        assert!(assert_near(&client, &a, &b, 0.0, "p").is_err());
    }

    #[test]
    fn test_rank_at_least() {
        assert!(assert_rank_at_least(&Tensor::scalar(1.0f64), 1, "probs").is_err());
        assert!(assert_rank_at_least(&Tensor::<f64>::zeros(&[3]), 1, "probs").is_ok());
    }

    #[test]
    fn test_check_statistic_policy() {
        let t = Tensor::from_slice(&[1.0f64, f64::NAN], &[2]);
        assert!(check_statistic(t.clone(), "variance", true).is_ok());
        assert_eq!(
            check_statistic(t, "variance", false).unwrap_err(),
            Error::UndefinedStatistic {
                statistic: "variance"
            }
        );
    }
}
