//! Property-based tests for the Multinomial distribution

mod common;

use common::{compositions, create_cpu_client};
use numdist::prelude::*;
use proptest::prelude::*;

fn arb_probs() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.01f64..1.0, 2..6).prop_map(|w| {
        let total: f64 = w.iter().sum();
        w.into_iter().map(|x| x / total).collect()
    })
}

fn build(total_count: f64, probs: &[f64]) -> Multinomial {
    Multinomial::builder(Tensor::scalar(total_count))
        .probs(Tensor::from_slice(probs, &[probs.len()]))
        .build(&create_cpu_client())
        .unwrap()
}

proptest! {
    #[test]
    fn probs_survive_logits_round_trip(probs in arb_probs()) {
        let dist = build(1.0, &probs);
        let back = Multinomial::builder(Tensor::scalar(1.0f64))
            .logits(dist.logits().clone())
            .build(&create_cpu_client())
            .unwrap();

        for (p, q) in probs.iter().zip(back.probs().as_slice()) {
            prop_assert!((p - q).abs() <= 1e-12 * p.max(1e-300), "{} vs {}", p, q);
        }
    }

    #[test]
    fn probability_mass_sums_to_one(probs in arb_probs(), n in 0usize..6) {
        let dist = build(n as f64, &probs);
        let k = probs.len();
        let all = compositions(n, k);
        let flat: Vec<f64> = all.iter().flatten().copied().collect();
        let counts = Tensor::from_vec(flat, &[all.len(), k]).unwrap();

        let total: f64 = dist.prob(&counts).unwrap().as_slice().iter().sum();
        prop_assert!((total - 1.0).abs() < 1e-10, "total mass {}", total);
    }

    #[test]
    fn moments_are_consistent(probs in arb_probs(), n in 0u32..50) {
        let dist = build(n as f64, &probs);
        let k = probs.len();
        let mean = dist.mean().unwrap().to_vec();
        let var = dist.variance().unwrap().to_vec();
        let cov = dist.covariance().unwrap().to_vec();

        for i in 0..k {
            prop_assert!((mean[i] - n as f64 * probs[i]).abs() <= 1e-12 * n.max(1) as f64);
            prop_assert_eq!(cov[i * k + i], var[i]);
            prop_assert!(var[i] >= 0.0);
            for j in 0..k {
                prop_assert!((cov[i * k + j] - cov[j * k + i]).abs() <= 1e-12 * n.max(1) as f64);
            }
        }
    }

    #[test]
    fn samples_are_count_vectors(probs in arb_probs(), n in 0u32..20, seed in any::<u64>()) {
        let dist = build(n as f64, &probs);
        let samples = dist.sample_n(8, Some(seed)).unwrap();
        prop_assert_eq!(samples.shape(), &[8, probs.len()][..]);

        for draw in samples.as_slice().chunks(probs.len()) {
            prop_assert_eq!(draw.iter().sum::<f64>(), n as f64);
            prop_assert!(draw.iter().all(|&c| c >= 0.0 && c.fract() == 0.0));
        }
    }
}
