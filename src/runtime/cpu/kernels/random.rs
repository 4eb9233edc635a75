//! Random sampling kernels

use crate::dtype::FloatElement;
use crate::error::{Error, Result};
use rand::{Rng, SeedableRng, rngs::StdRng};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Derive the generator seed of one batch row.
///
/// Rows get decorrelated streams from a single base seed, and the stream of
/// a row does not depend on how rows are scheduled across threads.
#[inline]
pub fn row_seed(seed: u64, row: usize) -> u64 {
    seed ^ (row as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Draw `num_samples` category indices per row of unnormalized log-probabilities.
///
/// Inverse-CDF sampling: each row's cumulative weights `exp(l - max)` are
/// searched with a uniform draw scaled to the row total.
///
/// # Arguments
/// * `logits` - Row-major `[rows, k]` buffer
/// * `out` - Output `[rows, num_samples]` buffer
/// * `min_len` - Minimum number of rows handed to one rayon task
///
/// # Errors
/// `InvalidArgument` if a row contains NaN or `+inf`, or has no finite entry.
pub fn categorical_kernel<T: FloatElement>(
    logits: &[T],
    k: usize,
    num_samples: usize,
    seed: u64,
    out: &mut [i64],
    min_len: usize,
) -> Result<()> {
    if num_samples == 0 || k == 0 {
        return Ok(());
    }
    debug_assert_eq!(logits.len() / k, out.len() / num_samples);

    #[cfg(feature = "rayon")]
    {
        out.par_chunks_mut(num_samples)
            .enumerate()
            .with_min_len(min_len.max(1))
            .try_for_each(|(row, dst)| {
                sample_row(&logits[row * k..(row + 1) * k], row_seed(seed, row), dst)
            })
    }

    #[cfg(not(feature = "rayon"))]
    {
        let _ = min_len;
        out.chunks_mut(num_samples)
            .enumerate()
            .try_for_each(|(row, dst)| {
                sample_row(&logits[row * k..(row + 1) * k], row_seed(seed, row), dst)
            })
    }
}

fn sample_row<T: FloatElement>(row: &[T], seed: u64, dst: &mut [i64]) -> Result<()> {
    let mut max = f64::NEG_INFINITY;
    for &l in row {
        let l = l.as_f64();
        if l.is_nan() || l == f64::INFINITY {
            return Err(Error::invalid_argument(
                "logits",
                format!("cannot sample from a row containing {l}"),
            ));
        }
        max = max.max(l);
    }
    if max == f64::NEG_INFINITY {
        return Err(Error::invalid_argument(
            "logits",
            "cannot sample from a row where every category has zero probability",
        ));
    }

    let mut cdf = Vec::with_capacity(row.len());
    let mut total = 0.0;
    for &l in row {
        total += (l.as_f64() - max).exp();
        cdf.push(total);
    }

    let last = row.len() - 1;
    let mut rng = StdRng::seed_from_u64(seed);
    for slot in dst.iter_mut() {
        let u = rng.random::<f64>() * total;
        *slot = cdf.partition_point(|&c| c <= u).min(last) as i64;
    }

    Ok(())
}
