use nalgebra::{DMatrix, DVector};
use super::*;

// Subtracts the weighted column means, returning the centered matrix and the
// total weight.
pub(crate) fn center(x : &DMatrix<f64>, weights : Option<&[f64]>) -> (DMatrix<f64>, f64) {
    check_weights(x.nrows(), weights);
    let sw = sum_weights(x.nrows(), weights);
    let mut centered = x.clone();
    for mut col in centered.column_iter_mut() {
        let m : f64 = col.iter().enumerate().map(|(i, v)| weight(weights, i) * v ).sum::<f64>() / sw;
        col.add_scalar_mut(-m);
    }
    (centered, sw)
}

/// Unbiased covariance between the columns of x, whose rows are
/// observations.
///
/// # Panics
/// When weights are given and their length differs from the row count.
pub fn covariance_matrix(x : &DMatrix<f64>, weights : Option<&[f64]>) -> DMatrix<f64> {
    let (centered, sw) = center(x, weights);
    let weighted = match weights {
        Some(w) => {
            let mut wc = centered.clone();
            for (i, mut row) in wc.row_iter_mut().enumerate() {
                row *= w[i];
            }
            wc
        },
        None => centered.clone()
    };
    (centered.transpose() * weighted) / (sw - 1.0)
}

/// Pearson correlation between the columns of x.
pub fn correlation_matrix(x : &DMatrix<f64>, weights : Option<&[f64]>) -> DMatrix<f64> {
    let cov = covariance_matrix(x, weights);
    let sd : DVector<f64> = cov.diagonal().map(|v| v.sqrt() );
    let mut corr = cov;
    for i in 0..corr.nrows() {
        for j in 0..corr.ncols() {
            corr[(i, j)] /= sd[i] * sd[j];
        }
    }
    corr
}
