pub mod quantile;

pub mod info;

pub mod regression;

pub mod matrix;

pub mod decomp;

pub mod roc;

pub use quantile::*;

pub use info::*;

pub use regression::*;

pub use matrix::*;

pub use decomp::*;

pub use roc::*;

/* Every function in this module takes optional frequency weights. When
present, weights must have the same length as the data; a mismatch panics
just as indexing out of bounds would. */

pub(crate) fn check_weights(n : usize, weights : Option<&[f64]>) {
    if let Some(w) = weights {
        assert_eq!(n, w.len(), "stat: data and weights lengths differ");
    }
}

pub(crate) fn weight(weights : Option<&[f64]>, i : usize) -> f64 {
    weights.map(|w| w[i] ).unwrap_or(1.0)
}

pub(crate) fn sum_weights(n : usize, weights : Option<&[f64]>) -> f64 {
    match weights {
        Some(w) => w.iter().sum(),
        None => n as f64
    }
}

/// Weighted arithmetic mean.
///
/// # Panics
/// When weights and data lengths differ.
pub fn mean(x : &[f64], weights : Option<&[f64]>) -> f64 {
    check_weights(x.len(), weights);
    let total : f64 = x.iter().enumerate().map(|(i, v)| weight(weights, i) * v ).sum();
    total / sum_weights(x.len(), weights)
}

pub fn geometric_mean(x : &[f64], weights : Option<&[f64]>) -> f64 {
    check_weights(x.len(), weights);
    let logs : f64 = x.iter().enumerate().map(|(i, v)| weight(weights, i) * v.ln() ).sum();
    (logs / sum_weights(x.len(), weights)).exp()
}

pub fn harmonic_mean(x : &[f64], weights : Option<&[f64]>) -> f64 {
    check_weights(x.len(), weights);
    let inv : f64 = x.iter().enumerate().map(|(i, v)| weight(weights, i) / v ).sum();
    sum_weights(x.len(), weights) / inv
}

/// Weighted mean and unbiased variance, the latter computed with the
/// corrected two-pass algorithm.
pub fn mean_variance(x : &[f64], weights : Option<&[f64]>) -> (f64, f64) {
    let m = mean(x, weights);
    let (mut ss, mut comp) = (0.0, 0.0);
    for (i, v) in x.iter().enumerate() {
        let w = weight(weights, i);
        let d = v - m;
        ss += w * d * d;
        comp += w * d;
    }
    let sw = sum_weights(x.len(), weights);
    (m, (ss - comp * comp / sw) / (sw - 1.0))
}

pub fn variance(x : &[f64], weights : Option<&[f64]>) -> f64 {
    mean_variance(x, weights).1
}

/// Population variance: squared deviations divided by the total weight.
pub fn pop_variance(x : &[f64], weights : Option<&[f64]>) -> f64 {
    let sw = sum_weights(x.len(), weights);
    variance(x, weights) * (sw - 1.0) / sw
}

pub fn std_dev(x : &[f64], weights : Option<&[f64]>) -> f64 {
    variance(x, weights).sqrt()
}

pub fn mean_std_dev(x : &[f64], weights : Option<&[f64]>) -> (f64, f64) {
    let (m, v) = mean_variance(x, weights);
    (m, v.sqrt())
}

/// Standard error of the mean given a standard deviation and sample size.
pub fn std_err(std : f64, sample_size : f64) -> f64 {
    std / sample_size.sqrt()
}

pub fn std_score(x : f64, mean : f64, std : f64) -> f64 {
    (x - mean) / std
}

/// Unbiased weighted covariance between two equally sized samples.
///
/// # Panics
/// When the samples or the weights have different lengths.
pub fn covariance(x : &[f64], y : &[f64], weights : Option<&[f64]>) -> f64 {
    assert_eq!(x.len(), y.len(), "stat: covariance of samples with different lengths");
    let (mx, my) = (mean(x, weights), mean(y, weights));
    let (mut sxy, mut sx, mut sy) = (0.0, 0.0, 0.0);
    for i in 0..x.len() {
        let w = weight(weights, i);
        let (dx, dy) = (x[i] - mx, y[i] - my);
        sxy += w * dx * dy;
        sx += w * dx;
        sy += w * dy;
    }
    let sw = sum_weights(x.len(), weights);
    (sxy - sx * sy / sw) / (sw - 1.0)
}

/// Pearson correlation coefficient.
pub fn correlation(x : &[f64], y : &[f64], weights : Option<&[f64]>) -> f64 {
    covariance(x, y, weights) / (std_dev(x, weights) * std_dev(y, weights))
}

/// Weighted central moment of order `k`.
pub fn moment(k : f64, x : &[f64], weights : Option<&[f64]>) -> f64 {
    let m = mean(x, weights);
    let total : f64 = x.iter().enumerate().map(|(i, v)| weight(weights, i) * (v - m).powf(k) ).sum();
    total / sum_weights(x.len(), weights)
}

/// Sample skewness with the small-sample correction n / ((n - 1)(n - 2)).
pub fn skew(x : &[f64], weights : Option<&[f64]>) -> f64 {
    let (m, std) = mean_std_dev(x, weights);
    let s : f64 = x.iter().enumerate()
        .map(|(i, v)| {
            let z = (v - m) / std;
            weight(weights, i) * z * z * z
        })
        .sum();
    let n = sum_weights(x.len(), weights);
    s * (n / (n - 1.0)) * (1.0 / (n - 2.0))
}

/// Sample excess kurtosis with the usual small-sample correction.
pub fn ex_kurtosis(x : &[f64], weights : Option<&[f64]>) -> f64 {
    let (m, std) = mean_std_dev(x, weights);
    let e : f64 = x.iter().enumerate()
        .map(|(i, v)| {
            let z = (v - m) / std;
            weight(weights, i) * z * z * z * z
        })
        .sum();
    let n = sum_weights(x.len(), weights);
    let mul = ((n + 1.0) / (n - 1.0)) * (n / (n - 2.0)) * (1.0 / (n - 3.0));
    let offset = 3.0 * ((n - 1.0) / (n - 2.0)) * ((n - 1.0) / (n - 3.0));
    e * mul - offset
}

/// Most frequent value and its (weighted) count. Ties resolve to the
/// smallest value. Returns (NaN, 0) for empty data.
pub fn mode(x : &[f64], weights : Option<&[f64]>) -> (f64, f64) {
    check_weights(x.len(), weights);
    let mut pairs : Vec<(f64, f64)> = x.iter().enumerate().map(|(i, v)| (*v, weight(weights, i)) ).collect();
    pairs.sort_unstable_by(|a, b| a.0.total_cmp(&b.0) );
    let (mut best, mut best_count) = (f64::NAN, 0.0);
    let mut i = 0;
    while i < pairs.len() {
        let v = pairs[i].0;
        let mut count = 0.0;
        while i < pairs.len() && pairs[i].0 == v {
            count += pairs[i].1;
            i += 1;
        }
        if count > best_count {
            best = v;
            best_count = count;
        }
        if v.is_nan() {
            i += 1;
        }
    }
    (best, best_count)
}
