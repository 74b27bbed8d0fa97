use super::*;

/// Weighted least squares fit of y = alpha + beta * x. When `origin` is
/// set the intercept is forced to zero.
///
/// # Panics
/// When x, y or the weights have different lengths.
pub fn linear_regression(x : &[f64], y : &[f64], weights : Option<&[f64]>, origin : bool) -> (f64, f64) {
    assert_eq!(x.len(), y.len(), "stat: regression of samples with different lengths");
    check_weights(x.len(), weights);
    if origin {
        let (mut xy, mut xx) = (0.0, 0.0);
        for i in 0..x.len() {
            let w = weight(weights, i);
            xy += w * x[i] * y[i];
            xx += w * x[i] * x[i];
        }
        return (0.0, xy / xx);
    }
    let (xu, xv) = mean_variance(x, weights);
    let yu = mean(y, weights);
    let beta = covariance(x, y, weights) / xv;
    (yu - beta * xu, beta)
}

/// Coefficient of determination of the fitted line over the sample.
pub fn r_squared(x : &[f64], y : &[f64], weights : Option<&[f64]>, alpha : f64, beta : f64) -> f64 {
    assert_eq!(x.len(), y.len(), "stat: r squared of samples with different lengths");
    let yu = mean(y, weights);
    let (mut ss_res, mut ss_tot) = (0.0, 0.0);
    for i in 0..x.len() {
        let w = weight(weights, i);
        let fit = alpha + beta * x[i];
        ss_res += w * (y[i] - fit).powi(2);
        ss_tot += w * (y[i] - yu).powi(2);
    }
    1.0 - ss_res / ss_tot
}

/// Pearson's chi-square statistic of observed against expected counts.
pub fn chi_square(obs : &[f64], exp : &[f64]) -> f64 {
    assert_eq!(obs.len(), exp.len(), "stat: chi square of samples with different lengths");
    obs.iter().zip(exp.iter()).map(|(o, e)| (o - e).powi(2) / e ).sum()
}
