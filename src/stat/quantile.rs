use super::*;

/// How quantiles and the CDF treat the gaps between observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CumulantKind {

    /// Step function: the quantile is the first observation whose cumulative
    /// weight reaches p.
    Empirical,

    /// Linear interpolation between consecutive observations.
    LinInterp
}

fn check_sorted(x : &[f64]) {
    assert!(x.windows(2).all(|w| w[0] <= w[1] ), "stat: data must be sorted");
}

/// Quantile p of sorted, weighted data.
///
/// # Panics
/// When p is outside [0, 1], x is empty or unsorted, or weights and data
/// lengths differ.
pub fn quantile(p : f64, kind : CumulantKind, x : &[f64], weights : Option<&[f64]>) -> f64 {
    assert!((0.0..=1.0).contains(&p), "stat: quantile out of bounds");
    assert!(!x.is_empty(), "stat: quantile of empty data");
    check_weights(x.len(), weights);
    check_sorted(x);
    let fidx = p * sum_weights(x.len(), weights);
    let mut cumsum = 0.0;
    for i in 0..x.len() {
        let w = weight(weights, i);
        cumsum += w;
        if cumsum >= fidx {
            return match kind {
                CumulantKind::Empirical => x[i],
                CumulantKind::LinInterp => {
                    if i == 0 {
                        x[0]
                    } else {
                        let t = (cumsum - fidx) / w;
                        t * x[i - 1] + (1.0 - t) * x[i]
                    }
                }
            };
        }
    }
    x[x.len() - 1]
}

/// Fraction of the total weight at or below q.
pub fn cdf(q : f64, kind : CumulantKind, x : &[f64], weights : Option<&[f64]>) -> f64 {
    assert!(!x.is_empty(), "stat: cdf of empty data");
    check_weights(x.len(), weights);
    check_sorted(x);
    if q < x[0] {
        return 0.0;
    }
    if q >= x[x.len() - 1] {
        return 1.0;
    }
    let sw = sum_weights(x.len(), weights);
    let mut cumsum = 0.0;
    for i in 0..x.len() {
        if x[i] > q {
            return match kind {
                CumulantKind::Empirical => cumsum / sw,
                CumulantKind::LinInterp => {
                    // x[i - 1] <= q < x[i], and i > 0 since q >= x[0].
                    let t = (q - x[i - 1]) / (x[i] - x[i - 1]);
                    (cumsum + t * weight(weights, i)) / sw
                }
            };
        }
        cumsum += weight(weights, i);
    }
    1.0
}

/// Sorts x ascending, moving the weights along with their values.
pub fn sort_weighted(x : &mut [f64], weights : Option<&mut [f64]>) {
    match weights {
        None => x.sort_unstable_by(|a, b| a.total_cmp(b) ),
        Some(w) => {
            assert_eq!(x.len(), w.len(), "stat: data and weights lengths differ");
            let mut pairs : Vec<(f64, f64)> = x.iter().copied().zip(w.iter().copied()).collect();
            pairs.sort_by(|a, b| a.0.total_cmp(&b.0) );
            for (i, (v, wt)) in pairs.into_iter().enumerate() {
                x[i] = v;
                w[i] = wt;
            }
        }
    }
}

/// Empirical median of unsorted data. NaN for empty data.
pub fn median(x : &[f64]) -> f64 {
    if x.is_empty() {
        return f64::NAN;
    }
    let mut sorted = x.to_vec();
    sort_weighted(&mut sorted[..], None);
    quantile(0.5, CumulantKind::Empirical, &sorted[..], None)
}
