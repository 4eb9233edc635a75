//! Drawing count vectors

use super::Multinomial;
use crate::dtype::FloatElement;
use crate::error::{Error, Result};
use crate::ops::TensorEngine;
use crate::tensor::Tensor;
use tracing::trace;

impl<T: FloatElement, C: TensorEngine> Multinomial<T, C> {
    /// Draw `n` count vectors per batch member, shaped `[n, *batch_shape, k]`
    ///
    /// Every batch member is flattened into one row of `B` categorical
    /// distributions. Each row draws `n * total_count` class indices; these
    /// are grouped into `n` runs of `total_count` trials, one-hot encoded and
    /// summed per run.
    ///
    /// `total_count` must be a finite scalar shared by the whole batch.
    /// Without `validate_args`, a negative count is treated as zero trials and
    /// a fractional one is truncated.
    ///
    /// # Errors
    ///
    /// - `NotImplemented` if `total_count` is not a scalar
    /// - `InvalidArgument` if `total_count` is NaN or infinite, or if the
    ///   number of draws does not fit in `usize`
    pub(super) fn sample_counts(&self, n: usize, seed: Option<u64>) -> Result<Tensor<T>> {
        if !self.total_count.is_scalar() {
            return Err(Error::NotImplemented {
                feature: "sampling with a non-scalar total_count",
            });
        }
        let total_count = self.total_count.item()?.as_f64();
        if !total_count.is_finite() {
            return Err(Error::invalid_argument(
                "total_count",
                format!("cannot sample {total_count} trials"),
            ));
        }
        // `as` saturates: negatives become 0
        let trials = total_count as usize;

        let k = self.num_classes();
        let rows: usize = self.batch_shape.iter().product();
        let draws_per_row = n.checked_mul(trials).ok_or_else(|| {
            Error::invalid_argument(
                "total_count",
                format!("{n} samples of {trials} trials overflow the draw count"),
            )
        })?;
        // The one-hot buffer holds rows * draws_per_row * k elements
        if draws_per_row
            .checked_mul(rows)
            .and_then(|d| d.checked_mul(k))
            .is_none()
        {
            return Err(Error::invalid_argument(
                "total_count",
                format!("{draws_per_row} draws over {rows} rows of {k} classes overflow"),
            ));
        }
        trace!(n, trials, rows, k, ?seed, "sampling multinomial");

        let client = &self.client;
        let logits = client
            .broadcast_to(&self.logits, self.mean.shape())?
            .reshape(&[rows, k])?;

        let draws = client.categorical(&logits, draws_per_row, seed)?;
        let draws = draws.reshape(&[rows, n, trials])?;
        let counts = client.sum(&client.one_hot::<T>(&draws, k)?, &[2], false)?;
        let counts = client.permute(&counts, &[1, 0, 2])?;

        let out_shape: Vec<usize> = std::iter::once(n)
            .chain(self.batch_shape.iter().copied())
            .chain(std::iter::once(k))
            .collect();
        counts.reshape(&out_shape)
    }
}

#[cfg(test)]
mod tests {
    use crate::distributions::{Distribution, DistributionOptions, Parameterization};
    use crate::error::Error;
    use crate::runtime::cpu::CpuClient;
    use crate::tensor::Tensor;

    use super::Multinomial;

    fn dist(total: Tensor<f64>, probs: Tensor<f64>) -> Multinomial {
        Multinomial::new(
            &CpuClient::new(),
            total,
            Parameterization::Probs(probs),
            DistributionOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_sample_shape_and_totals() {
        let d = dist(
            Tensor::scalar(6.0),
            Tensor::from_slice(&[0.1, 0.2, 0.7, 0.5, 0.25, 0.25], &[2, 3]),
        );
        let s = d.sample_n(10, Some(3)).unwrap();
        assert_eq!(s.shape(), &[10, 2, 3]);
        for draw in s.as_slice().chunks(3) {
            assert_eq!(draw.iter().sum::<f64>(), 6.0);
        }
    }

    #[test]
    fn test_sample_with_sample_shape() {
        let d = dist(Tensor::scalar(2.0), Tensor::from_slice(&[0.5, 0.5], &[2]));
        let s = d.sample(&[3, 4], Some(0)).unwrap();
        assert_eq!(s.shape(), &[3, 4, 2]);
    }

    #[test]
    fn test_zero_trials_and_zero_samples() {
        let d = dist(Tensor::scalar(0.0), Tensor::from_slice(&[0.5, 0.5], &[2]));
        let s = d.sample_n(4, Some(1)).unwrap();
        assert_eq!(s.shape(), &[4, 2]);
        assert!(s.as_slice().iter().all(|&c| c == 0.0));

        let d = dist(Tensor::scalar(3.0), Tensor::from_slice(&[0.5, 0.5], &[2]));
        let s = d.sample_n(0, Some(1)).unwrap();
        assert_eq!(s.shape(), &[0, 2]);
    }

    #[test]
    fn test_deterministic_classes() {
        let d = dist(Tensor::scalar(5.0), Tensor::from_slice(&[0.0, 1.0, 0.0], &[3]));
        let s = d.sample_n(3, None).unwrap();
        assert_eq!(s.to_vec(), vec![0.0, 5.0, 0.0, 0.0, 5.0, 0.0, 0.0, 5.0, 0.0]);
    }

    #[test]
    fn test_non_finite_total_count_is_an_error() {
        for total in [f64::INFINITY, f64::NAN] {
            let d = dist(Tensor::scalar(total), Tensor::from_slice(&[0.5, 0.5], &[2]));
            assert!(matches!(
                d.sample_n(2, Some(1)),
                Err(Error::InvalidArgument { arg: "total_count", .. })
            ));
        }
    }

    #[test]
    fn test_draw_count_overflow_is_an_error() {
        // 2^64 is integral and passes validation, but saturates to usize::MAX
        let d = Multinomial::new(
            &CpuClient::new(),
            Tensor::scalar(18_446_744_073_709_551_616.0),
            Parameterization::Probs(Tensor::from_slice(&[0.5, 0.5], &[2])),
            DistributionOptions::default().with_validate_args(true),
        )
        .unwrap();
        assert!(matches!(
            d.sample_n(2, Some(1)),
            Err(Error::InvalidArgument { arg: "total_count", .. })
        ));
        assert!(matches!(
            d.sample_n(1, Some(1)),
            Err(Error::InvalidArgument { arg: "total_count", .. })
        ));
    }

    #[test]
    fn test_non_scalar_total_count_not_implemented() {
        let d = dist(
            Tensor::from_slice(&[4.0, 5.0], &[2]),
            Tensor::from_slice(&[0.5, 0.5], &[2]),
        );
        assert!(matches!(
            d.sample_n(1, Some(0)),
            Err(Error::NotImplemented { .. })
        ));
    }
}
