use nalgebra::{DMatrix, DVector, SymmetricEigen};
use crate::error::{Error, Result};
use super::*;

/// Principal directions (columns of `vectors`) and the variance of the data
/// projected on each of them, ordered from largest to smallest variance.
#[derive(Debug, Clone)]
pub struct PrincipalComponents {

    pub vectors : DMatrix<f64>,

    pub variances : DVector<f64>
}

/// Canonical correlations between two sets of variables, in decreasing order,
/// with the coefficients (columns of `left` for x, `right` for y) that
/// produce each pair of canonical variates.
#[derive(Debug, Clone)]
pub struct CanonicalCorrelations {

    pub correlations : DVector<f64>,

    pub left : DMatrix<f64>,

    pub right : DMatrix<f64>
}

fn descending(vals : &DVector<f64>) -> Vec<usize> {
    let mut order : Vec<usize> = (0..vals.len()).collect();
    order.sort_by(|a, b| vals[*b].total_cmp(&vals[*a]) );
    order
}

fn select_columns(m : &DMatrix<f64>, order : &[usize]) -> DMatrix<f64> {
    let cols : Vec<_> = order.iter().map(|j| m.column(*j).clone_owned() ).collect();
    DMatrix::from_columns(&cols[..])
}

/// Principal component analysis of x (rows are observations) through the
/// eigen decomposition of its weighted covariance matrix.
pub fn principal_components(x : &DMatrix<f64>, weights : Option<&[f64]>) -> Result<PrincipalComponents> {
    if x.nrows() < 2 || x.ncols() == 0 {
        return Err(Error::InvalidArgument(format!(
            "principal components need at least two observations and one variable (got {}x{})",
            x.nrows(), x.ncols()
        )));
    }
    let cov = covariance_matrix(x, weights);
    let eig = SymmetricEigen::new(cov);
    let order = descending(&eig.eigenvalues);
    let variances = DVector::from_iterator(order.len(), order.iter().map(|j| eig.eigenvalues[*j].max(0.0) ));
    Ok(PrincipalComponents { vectors : select_columns(&eig.eigenvectors, &order[..]), variances })
}

// S^{-1/2} for a symmetric positive definite S.
fn inv_sqrt(s : DMatrix<f64>, what : &str) -> Result<DMatrix<f64>> {
    let eig = SymmetricEigen::new(s);
    let max = eig.eigenvalues.iter().cloned().fold(0.0, f64::max);
    if eig.eigenvalues.iter().any(|l| *l <= max * 1e-12 || !l.is_finite() ) {
        return Err(Error::Numerical(format!("covariance of {} is singular", what)));
    }
    let d = DMatrix::from_diagonal(&eig.eigenvalues.map(|l| 1.0 / l.sqrt() ));
    Ok(&eig.eigenvectors * d * eig.eigenvectors.transpose())
}

/// Canonical correlation analysis between the columns of x and those of y,
/// whose rows are paired observations.
pub fn canonical_correlations(
    x : &DMatrix<f64>,
    y : &DMatrix<f64>,
    weights : Option<&[f64]>
) -> Result<CanonicalCorrelations> {
    if x.nrows() != y.nrows() {
        return Err(Error::InvalidArgument(format!("x has {} rows, y has {}", x.nrows(), y.nrows())));
    }
    let (xd, yd) = (x.ncols(), y.ncols());
    if xd == 0 || yd == 0 {
        return Err(Error::InvalidArgument("canonical correlations need variables on both sides".into()));
    }
    if x.nrows() <= xd.max(yd) {
        return Err(Error::InvalidArgument(format!(
            "{} observations are too few for {} and {} variables", x.nrows(), xd, yd
        )));
    }
    let mut joint = DMatrix::zeros(x.nrows(), xd + yd);
    joint.columns_mut(0, xd).copy_from(x);
    joint.columns_mut(xd, yd).copy_from(y);
    let cov = covariance_matrix(&joint, weights);
    let sxx = cov.slice((0, 0), (xd, xd)).clone_owned();
    let syy = cov.slice((xd, xd), (yd, yd)).clone_owned();
    let sxy = cov.slice((0, xd), (xd, yd)).clone_owned();
    let wx = inv_sqrt(sxx, "x")?;
    let wy = inv_sqrt(syy, "y")?;
    let m = &wx * sxy * &wy;
    let svd = m.svd(true, true);
    let u = svd.u.ok_or_else(|| Error::Numerical("SVD did not produce left vectors".into()) )?;
    let v_t = svd.v_t.ok_or_else(|| Error::Numerical("SVD did not produce right vectors".into()) )?;
    let order = descending(&svd.singular_values);
    let correlations = DVector::from_iterator(order.len(), order.iter().map(|j| svd.singular_values[*j].min(1.0) ));
    let left = wx * select_columns(&u, &order[..]);
    let right = wy * select_columns(&v_t.transpose(), &order[..]);
    Ok(CanonicalCorrelations { correlations, left, right })
}
