use clusterkit::{Linkage, LinkageMethod, Matrix};
use ndarray::array;

/// One merge step: the two clusters joined and the height they joined at.
struct Merge {
    a: usize,
    b: usize,
    height: f64,
    size: usize,
}

/// Naive O(n³) agglomeration over a point set, enough to show how a driver
/// consumes a linkage.
fn agglomerate(points: &Matrix, linkage: &dyn Linkage) -> Vec<Merge> {
    let n = points.nrows();
    let mut dist = Matrix::zeros((n, n));
    for i in 0..n {
        for j in (i + 1)..n {
            let d = (&points.row(i) - &points.row(j)).mapv(|x| x * x).sum().sqrt();
            let d = linkage.initial(d, false);
            dist[[i, j]] = d;
            dist[[j, i]] = d;
        }
    }

    let mut sizes = vec![1usize; n];
    let mut active = vec![true; n];
    let mut merges = Vec::with_capacity(n.saturating_sub(1));

    for _ in 1..n {
        let mut best = (0, 0, f64::INFINITY);
        for i in 0..n {
            for j in (i + 1)..n {
                if active[i] && active[j] && dist[[i, j]] < best.2 {
                    best = (i, j, dist[[i, j]]);
                }
            }
        }
        let (x, y, dist_xy) = best;

        for z in 0..n {
            if !active[z] || z == x || z == y {
                continue;
            }
            let d = linkage.combine(
                sizes[x],
                dist[[x, z]],
                sizes[y],
                dist[[y, z]],
                sizes[z],
                dist_xy,
            );
            dist[[x, z]] = d;
            dist[[z, x]] = d;
        }

        sizes[x] += sizes[y];
        active[y] = false;
        merges.push(Merge {
            a: x,
            b: y,
            height: linkage.restore(dist_xy, false),
            size: sizes[x],
        });
    }

    merges
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Agglomerative Clustering with Lance-Williams Updates ===\n");

    // Equilateral triangle plus a far point: centroid linkage shows a reversal.
    let x = array![
        [0.0, 0.0],
        [1.0, 0.0],
        [0.5, 0.866],
        [6.0, 6.0],
        [6.5, 6.2]
    ];

    println!("Dataset: {} samples, {} features\n", x.nrows(), x.ncols());

    let names = ["single", "complete", "upgma", "wpgma", "upgmc", "wpgmc", "ward", "flexible-beta"];
    for name in names {
        let method: LinkageMethod = name.parse()?;
        println!("{} (monotone: {})", method, method.is_monotone());

        let merges = agglomerate(&x, &method);
        let mut previous = f64::NEG_INFINITY;
        for merge in &merges {
            let marker = if merge.height < previous { "  <- reversal" } else { "" };
            println!(
                "  merge {:>2} + {:>2} at {:>8.4} (size {}){}",
                merge.a, merge.b, merge.height, merge.size, marker
            );
            previous = merge.height;
        }
        println!();
    }

    Ok(())
}
