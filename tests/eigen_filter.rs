//! Eigenpair filter behaviour over random spectra.
//!
//! Tests cover:
//! - Partition completeness and order for every filter variant
//! - Monotonicity of the percentage filter in alpha
//! - Boundary alpha values and degenerate spectra
//! - Spectra built from an eigensolver's column layout

use clusterkit::{
    filter_by_percentage, EigenFilterConfig, EigenFilterError, EigenPair, EigenPairFilter,
    ErrorKind, FirstNEigenPairFilter, LimitEigenPairFilter, Matrix, PercentageEigenPairFilter,
    SignificantEigenPairFilter, SortedEigenPairs, Vector,
};
use ndarray::array;
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn spectrum_with_random_vectors(mut eigenvalues: Vec<f64>, seed: u64) -> SortedEigenPairs {
    let mut rng = StdRng::seed_from_u64(seed);
    let dim = eigenvalues.len();
    eigenvalues.sort_by(|a, b| b.partial_cmp(a).unwrap());
    let pairs = eigenvalues
        .into_iter()
        .map(|v| EigenPair::new(v, Vector::random_using(dim, Uniform::new(-1.0, 1.0), &mut rng)))
        .collect();
    SortedEigenPairs::new(pairs).unwrap()
}

fn all_filters() -> Vec<Box<dyn EigenPairFilter>> {
    vec![
        Box::new(PercentageEigenPairFilter::default()),
        Box::new(PercentageEigenPairFilter::new(0.3).unwrap()),
        Box::new(FirstNEigenPairFilter::new(2)),
        Box::new(LimitEigenPairFilter::default()),
        Box::new(LimitEigenPairFilter::new(1.0, true).unwrap()),
        Box::new(SignificantEigenPairFilter::default()),
    ]
}

#[test]
fn boundary_example_from_six_three_one() {
    let pairs = spectrum_with_random_vectors(vec![6.0, 3.0, 1.0], 7);
    let filtered = filter_by_percentage(&pairs, 0.85).unwrap();

    assert_eq!(filtered.strong_eigenvalues(), array![6.0, 3.0]);
    assert_eq!(filtered.weak_eigenvalues(), array![1.0]);
    assert_eq!(filtered.strong[0].eigenvector, pairs.as_slice()[0].eigenvector);
    assert_eq!(filtered.weak[0].eigenvector, pairs.as_slice()[2].eigenvector);
}

#[test]
fn alpha_boundaries() {
    let pairs = spectrum_with_random_vectors(vec![6.0, 3.0, 1.0], 8);

    for alpha in [0.0, 1.0] {
        let err = filter_by_percentage(&pairs, alpha).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(matches!(err, EigenFilterError::InvalidParameter { name: "alpha", .. }));
    }
    assert!(filter_by_percentage(&pairs, 0.5).is_ok());
}

#[test]
fn all_zero_spectrum_is_degenerate() {
    let pairs = spectrum_with_random_vectors(vec![0.0, 0.0, 0.0], 9);
    let err = filter_by_percentage(&pairs, 0.85).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Degenerate);
}

#[test]
fn empty_spectrum_is_rejected_before_filtering() {
    let err = SortedEigenPairs::new(Vec::new()).unwrap_err();
    assert_eq!(err, EigenFilterError::EmptySpectrum);
    assert_eq!(err.kind(), ErrorKind::Precondition);
}

#[test]
fn spectrum_from_eigensolver_layout() {
    let eigenvalues = array![0.2, 5.0, 1.0, 0.1];
    let eigenvectors = Matrix::eye(4);

    let pairs = SortedEigenPairs::from_decomposition(&eigenvalues, &eigenvectors).unwrap();
    let filtered = filter_by_percentage(&pairs, 0.8).unwrap();

    // 5.0 / 6.3 < 0.8, (5.0 + 1.0) / 6.3 >= 0.8
    assert_eq!(filtered.strong_eigenvalues(), array![5.0, 1.0]);
    assert_eq!(
        filtered.strong_basis(),
        array![[0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]]
    );
    assert_eq!(filtered.weak_eigenvalues(), array![0.2, 0.1]);
}

#[test]
fn filters_from_config_are_shareable_across_threads() {
    let filter = EigenFilterConfig::default().build().unwrap();
    let pairs = spectrum_with_random_vectors(vec![6.0, 3.0, 1.0], 10);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| filter.filter(&pairs).unwrap().strong_count()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
    });
}

proptest! {
    #[test]
    fn prop_filters_partition_input(
        eigenvalues in prop::collection::vec(0.0f64..100.0, 1..12),
        seed in any::<u64>(),
    ) {
        prop_assume!(eigenvalues.iter().sum::<f64>() > 0.0);
        let pairs = spectrum_with_random_vectors(eigenvalues, seed);

        for filter in all_filters() {
            let filtered = filter.filter(&pairs).unwrap();
            prop_assert_eq!(filtered.strong_count() + filtered.weak_count(), pairs.len());

            let rebuilt: Vec<EigenPair> = filtered
                .strong
                .iter()
                .chain(filtered.weak.iter())
                .cloned()
                .collect();
            prop_assert_eq!(rebuilt.as_slice(), pairs.as_slice());
        }
    }

    #[test]
    fn prop_percentage_monotone_in_alpha(
        eigenvalues in prop::collection::vec(0.0f64..100.0, 1..12),
        a in 0.01f64..0.99,
        b in 0.01f64..0.99,
    ) {
        prop_assume!(eigenvalues.iter().sum::<f64>() > 0.0);
        let pairs = spectrum_with_random_vectors(eigenvalues, 0);
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        let strong_low = filter_by_percentage(&pairs, low).unwrap().strong_count();
        let strong_high = filter_by_percentage(&pairs, high).unwrap().strong_count();
        prop_assert!(strong_low <= strong_high);
    }

    #[test]
    fn prop_percentage_keeps_at_least_one(
        eigenvalues in prop::collection::vec(0.0f64..100.0, 1..12),
        alpha in 0.01f64..0.99,
    ) {
        prop_assume!(eigenvalues.iter().sum::<f64>() > 0.0);
        let pairs = spectrum_with_random_vectors(eigenvalues, 1);
        let filtered = filter_by_percentage(&pairs, alpha).unwrap();
        prop_assert!(filtered.strong_count() >= 1);
    }
}
