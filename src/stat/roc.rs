use super::*;

/// Points of a receiver operating characteristic curve. Observations whose
/// score is greater than or equal to `thresholds[i]` are classified as
/// positive when computing `tpr[i]` and `fpr[i]`. Thresholds decrease along
/// the curve, so both rates are non-decreasing.
#[derive(Debug, Clone, PartialEq)]
pub struct Roc {

    pub tpr : Vec<f64>,

    pub fpr : Vec<f64>,

    pub thresholds : Vec<f64>
}

/// ROC curve of scores y (ascending) against their true classes.
///
/// With empty `cutoffs` every distinct score is used, preceded by +inf, so
/// the curve has one more point than there are distinct scores and starts at
/// (0, 0). Otherwise `cutoffs` must be ascending and each yields one point,
/// reported from the largest cutoff to the smallest.
///
/// # Panics
/// When y is not sorted or y, classes and weights have different lengths.
pub fn roc(cutoffs : &[f64], y : &[f64], classes : &[bool], weights : Option<&[f64]>) -> Roc {
    assert_eq!(y.len(), classes.len(), "stat: scores and classes lengths differ");
    check_weights(y.len(), weights);
    assert!(y.windows(2).all(|w| w[0] <= w[1] ), "stat: scores must be sorted");
    assert!(cutoffs.windows(2).all(|w| w[0] <= w[1] ), "stat: cutoffs must be sorted");

    let thresholds : Vec<f64> = if cutoffs.is_empty() {
        let mut t = vec![f64::INFINITY];
        for v in y.iter().rev() {
            if t.last().map(|last| last != v ).unwrap_or(true) {
                t.push(*v);
            }
        }
        t
    } else {
        cutoffs.iter().rev().copied().collect()
    };

    let (mut pos_total, mut neg_total) = (0.0, 0.0);
    for (i, c) in classes.iter().enumerate() {
        if *c {
            pos_total += weight(weights, i);
        } else {
            neg_total += weight(weights, i);
        }
    }

    let (mut tp, mut fp) = (0.0, 0.0);
    let mut next = y.len();
    let mut tpr = Vec::with_capacity(thresholds.len());
    let mut fpr = Vec::with_capacity(thresholds.len());
    for t in thresholds.iter() {
        while next > 0 && y[next - 1] >= *t {
            next -= 1;
            if classes[next] {
                tp += weight(weights, next);
            } else {
                fp += weight(weights, next);
            }
        }
        tpr.push(tp / pos_total);
        fpr.push(fp / neg_total);
    }
    Roc { tpr, fpr, thresholds }
}

/// Area under the curve by the trapezoid rule over (fpr, tpr).
pub fn auc(curve : &Roc) -> f64 {
    curve.fpr.windows(2).zip(curve.tpr.windows(2))
        .map(|(f, t)| (f[1] - f[0]) * (t[1] + t[0]) / 2.0 )
        .sum()
}
