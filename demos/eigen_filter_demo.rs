use clusterkit::{EigenFilterConfig, EigenPairFilter, Matrix, SortedEigenPairs, Vector};
use ndarray::{array, Axis};

/// Power iteration with deflation; good enough for a small symmetric matrix.
fn eigen_decomposition(matrix: &Matrix) -> (Vector, Matrix) {
    let n = matrix.nrows();
    let mut eigenvalues = Vector::zeros(n);
    let mut eigenvectors = Matrix::zeros((n, n));
    let mut a = matrix.clone();

    for i in 0..n {
        let mut v = Vector::ones(n);
        let mut lambda = 0.0;
        for _ in 0..500 {
            let av = a.dot(&v);
            let norm = av.mapv(|x| x * x).sum().sqrt();
            if norm < 1e-12 {
                break;
            }
            v = av / norm;
            let new_lambda = v.dot(&a.dot(&v));
            if (new_lambda - lambda).abs() < 1e-12 {
                lambda = new_lambda;
                break;
            }
            lambda = new_lambda;
        }
        eigenvalues[i] = lambda;
        eigenvectors.column_mut(i).assign(&v);

        let vv = v.view().insert_axis(Axis(1)).dot(&v.view().insert_axis(Axis(0)));
        a = &a - &(vv * lambda);
    }

    (eigenvalues, eigenvectors)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Strong and Weak Eigenvectors ===\n");

    // Points close to the plane z = x + y
    let x = array![
        [1.0, 2.0, 3.05],
        [2.0, 1.0, 2.95],
        [3.0, 3.0, 6.1],
        [4.0, 1.5, 5.4],
        [0.5, 4.0, 4.45],
        [2.5, 2.5, 5.02]
    ];

    let mean = x.mean_axis(Axis(0)).ok_or("empty dataset")?;
    let centered = &x - &mean.view().insert_axis(Axis(0));
    let cov = centered.t().dot(&centered) / (x.nrows() as f64 - 1.0);

    let (eigenvalues, eigenvectors) = eigen_decomposition(&cov);
    let pairs = SortedEigenPairs::from_decomposition(&eigenvalues, &eigenvectors)?;
    println!("Eigenvalues: {:.4}", pairs.eigenvalues());

    let configs = [
        r#"{"method": "percentage"}"#,
        r#"{"method": "percentage", "alpha": 0.999}"#,
        r#"{"method": "first_n", "n": 1}"#,
        r#"{"method": "limit", "delta": 0.05}"#,
        r#"{"method": "significant"}"#,
    ];

    for json in configs {
        let config: EigenFilterConfig = serde_json::from_str(json)?;
        let filter = config.build()?;
        let filtered = filter.filter(&pairs)?;
        println!(
            "{:<45} strong={} weak={}",
            json,
            filtered.strong_count(),
            filtered.weak_count()
        );
    }

    let rejected = EigenFilterConfig::Percentage { alpha: 1.0 }.build();
    if let Err(e) = rejected {
        println!("\nalpha = 1.0 rejected: {}", e);
    }

    Ok(())
}
