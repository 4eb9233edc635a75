//! Builder for [`Multinomial`]

use super::Multinomial;
use crate::distributions::DistributionOptions;
use crate::distributions::params::Parameterization;
use crate::dtype::FloatElement;
use crate::error::Result;
use crate::ops::TensorEngine;
use crate::tensor::Tensor;

/// Collects the inputs of a [`Multinomial`] before validating them together
///
/// Exactly one of [`logits`](Self::logits) and [`probs`](Self::probs) must be
/// set by the time [`build`](Self::build) is called.
#[derive(Clone, Debug)]
pub struct MultinomialBuilder<T: FloatElement = f64> {
    total_count: Tensor<T>,
    logits: Option<Tensor<T>>,
    probs: Option<Tensor<T>>,
    options: DistributionOptions,
}

impl<T: FloatElement> MultinomialBuilder<T> {
    /// Start with `total_count` trials and default options
    pub fn new(total_count: Tensor<T>) -> Self {
        Self {
            total_count,
            logits: None,
            probs: None,
            options: DistributionOptions::default(),
        }
    }

    /// Class log-probabilities, shape `[.., k]`
    pub fn logits(mut self, logits: Tensor<T>) -> Self {
        self.logits = Some(logits);
        self
    }

    /// Class probabilities, shape `[.., k]`
    pub fn probs(mut self, probs: Tensor<T>) -> Self {
        self.probs = Some(probs);
        self
    }

    /// Replace all options at once
    pub fn options(mut self, options: DistributionOptions) -> Self {
        self.options = options;
        self
    }

    /// Enable or disable runtime argument validation
    pub fn validate_args(mut self, validate_args: bool) -> Self {
        self.options.validate_args = validate_args;
        self
    }

    /// Choose between NaN and an error for undefined statistics
    pub fn allow_nan_stats(mut self, allow_nan_stats: bool) -> Self {
        self.options.allow_nan_stats = allow_nan_stats;
        self
    }

    /// Set the diagnostic name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.options.name = name.into();
        self
    }

    /// Validate the inputs and construct the distribution
    ///
    /// # Errors
    ///
    /// `Configuration` if both or neither of logits and probs were set, plus
    /// everything [`Multinomial::new`] reports.
    pub fn build<C: TensorEngine>(self, client: &C) -> Result<Multinomial<T, C>> {
        let params = Parameterization::from_options(self.logits, self.probs)?;
        Multinomial::new(client, self.total_count, params, self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions::Distribution;
    use crate::error::Error;
    use crate::runtime::cpu::CpuClient;

    #[test]
    fn test_build_with_logits() {
        let client = CpuClient::new();
        let dist = Multinomial::builder(Tensor::scalar(3.0f64))
            .logits(Tensor::zeros(&[2, 4]))
            .name("uniform")
            .allow_nan_stats(false)
            .build(&client)
            .unwrap();

        assert_eq!(dist.name(), "uniform");
        assert!(!dist.allow_nan_stats());
        assert!(!dist.validate_args());
        assert_eq!(dist.batch_shape(), &[2]);
        assert!(dist.probs().to_vec().iter().all(|&p| (p - 0.25).abs() < 1e-15));
    }

    #[test]
    fn test_build_rejects_both_and_neither() {
        let client = CpuClient::new();

        let both = Multinomial::builder(Tensor::scalar(4.0f64))
            .logits(Tensor::from_slice(&[0.0, 0.0, 0.0], &[3]))
            .probs(Tensor::from_slice(&[0.3, 0.3, 0.4], &[3]))
            .build(&client);
        assert!(matches!(both, Err(Error::Configuration { .. })));

        let neither = Multinomial::builder(Tensor::scalar(4.0f64)).build(&client);
        assert!(matches!(neither, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_options_replace_defaults() {
        let client = CpuClient::new();
        let opts = DistributionOptions::named("m").with_validate_args(true);
        let err = Multinomial::builder(Tensor::scalar(1.5f64))
            .probs(Tensor::from_slice(&[0.5, 0.5], &[2]))
            .options(opts)
            .build(&client)
            .unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidArgument {
                arg: "total_count",
                ..
            }
        ));
    }
}
