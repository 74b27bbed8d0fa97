use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;
use crate::grid::*;
use crate::error::{Error, Result};

/// Every row exactly once, in random order.
pub fn shuffle<'a, G : DataGrid, R : Rng>(grid : &'a G, rng : &mut R) -> Result<InstancesView<'a, G>> {
    let mut rows : Vec<usize> = (0..grid.rows()).collect();
    rows.shuffle(rng);
    InstancesView::from_rows(grid, rows)
}

/// `size` rows drawn uniformly with replacement (bootstrap sample).
pub fn sample_with_replacement<'a, G : DataGrid, R : Rng>(
    grid : &'a G,
    size : usize,
    rng : &mut R
) -> Result<InstancesView<'a, G>> {
    let n = grid.rows();
    if n == 0 && size > 0 {
        return Err(Error::InvalidArgument("cannot sample from empty instances".into()));
    }
    let rows = (0..size).map(|_| rng.gen_range(0..n) ).collect();
    InstancesView::from_rows(grid, rows)
}

/// Randomly assigns each row to either the training or the test view. Each
/// row independently lands in the test view with probability `test_fraction`.
pub fn train_test_split<'a, G : DataGrid, R : Rng>(
    grid : &'a G,
    test_fraction : f64,
    rng : &mut R
) -> Result<(InstancesView<'a, G>, InstancesView<'a, G>)> {
    if !(0.0..=1.0).contains(&test_fraction) {
        return Err(Error::InvalidArgument(format!("test fraction {} outside [0, 1]", test_fraction)));
    }
    let (mut train, mut test) = (Vec::new(), Vec::new());
    for row in 0..grid.rows() {
        if rng.gen::<f64>() < test_fraction {
            test.push(row);
        } else {
            train.push(row);
        }
    }
    debug!("Split {} rows into {} train / {} test", grid.rows(), train.len(), test.len());
    Ok((InstancesView::from_rows(grid, train)?, InstancesView::from_rows(grid, test)?))
}
