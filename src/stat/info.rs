use num_traits::Float;

/* Information measures over discrete distributions given as probability
slices. Zero-probability entries of p contribute nothing, following the
convention 0 ln 0 = 0. */

fn check_len<F>(p : &[F], q : &[F]) {
    assert_eq!(p.len(), q.len(), "stat: distributions have different lengths");
}

/// Shannon entropy in nats.
pub fn entropy<F : Float>(p : &[F]) -> F {
    p.iter()
        .filter(|v| **v != F::zero() )
        .fold(F::zero(), |acc, v| acc - *v * v.ln() )
}

/// Cross entropy H(p, q) = -sum p ln q.
pub fn cross_entropy<F : Float>(p : &[F], q : &[F]) -> F {
    check_len(p, q);
    p.iter().zip(q.iter())
        .filter(|(a, _)| **a != F::zero() )
        .fold(F::zero(), |acc, (a, b)| acc - *a * b.ln() )
}

/// Kullback-Leibler divergence of q from p.
pub fn kullback_leibler<F : Float>(p : &[F], q : &[F]) -> F {
    check_len(p, q);
    p.iter().zip(q.iter())
        .filter(|(a, _)| **a != F::zero() )
        .fold(F::zero(), |acc, (a, b)| acc + *a * (*a / *b).ln() )
}

fn bhattacharyya_coef<F : Float>(p : &[F], q : &[F]) -> F {
    check_len(p, q);
    p.iter().zip(q.iter()).fold(F::zero(), |acc, (a, b)| acc + (*a * *b).sqrt() )
}

pub fn bhattacharyya<F : Float>(p : &[F], q : &[F]) -> F {
    -bhattacharyya_coef(p, q).ln()
}

pub fn hellinger<F : Float>(p : &[F], q : &[F]) -> F {
    (F::one() - bhattacharyya_coef(p, q)).max(F::zero()).sqrt()
}

/// Counts of x falling into each interval [dividers[i], dividers[i + 1]).
/// Values outside [first divider, last divider) are not counted.
///
/// # Panics
/// When fewer than two dividers are given or they are not ascending.
pub fn histogram(dividers : &[f64], x : &[f64], weights : Option<&[f64]>) -> Vec<f64> {
    assert!(dividers.len() >= 2, "stat: histogram requires at least two dividers");
    assert!(dividers.windows(2).all(|w| w[0] < w[1] ), "stat: dividers must be strictly ascending");
    super::check_weights(x.len(), weights);
    let mut counts = vec![0.0; dividers.len() - 1];
    let (lo, hi) = (dividers[0], dividers[dividers.len() - 1]);
    for (i, v) in x.iter().enumerate() {
        if *v < lo || *v >= hi || v.is_nan() {
            continue;
        }
        let bin = dividers.partition_point(|d| d <= v ) - 1;
        counts[bin] += super::weight(weights, i);
    }
    counts
}
