//! Construction-time options shared by all distributions

/// Options recognized by every distribution constructor
///
/// # Example
///
/// ```
/// use numdist::distributions::DistributionOptions;
///
/// let opts = DistributionOptions::default()
///     .with_validate_args(true)
///     .with_name("dice");
/// assert!(opts.validate_args);
/// assert!(opts.allow_nan_stats);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistributionOptions {
    /// Check parameters and samples at runtime. When `false`, invalid inputs
    /// silently produce incorrect results.
    pub validate_args: bool,
    /// Return NaN for undefined statistics. When `false`, a statistic that
    /// contains NaN fails with [`Error::UndefinedStatistic`](crate::error::Error::UndefinedStatistic).
    pub allow_nan_stats: bool,
    /// Label used to scope diagnostics
    pub name: String,
}

impl DistributionOptions {
    /// Default options with the given name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Enable or disable runtime argument validation
    pub fn with_validate_args(mut self, validate_args: bool) -> Self {
        self.validate_args = validate_args;
        self
    }

    /// Choose between NaN and an error for undefined statistics
    pub fn with_allow_nan_stats(mut self, allow_nan_stats: bool) -> Self {
        self.allow_nan_stats = allow_nan_stats;
        self
    }

    /// Set the diagnostic name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

impl Default for DistributionOptions {
    fn default() -> Self {
        Self {
            validate_args: false,
            allow_nan_stats: true,
            name: "Multinomial".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = DistributionOptions::default();
        assert!(!opts.validate_args);
        assert!(opts.allow_nan_stats);
        assert_eq!(opts.name, "Multinomial");
    }

    #[test]
    fn test_builder_methods() {
        let opts = DistributionOptions::named("m")
            .with_validate_args(true)
            .with_allow_nan_stats(false);
        assert_eq!(
            opts,
            DistributionOptions {
                validate_args: true,
                allow_nan_stats: false,
                name: "m".into(),
            }
        );
    }
}
