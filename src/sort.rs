use tracing::debug;
use crate::attribute::*;
use crate::attribute::pack::*;
use crate::grid::*;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending
}

// Maps the IEEE bits of a float into an unsigned key with the same order:
// negatives have every bit inverted, non-negatives get the sign bit set.
fn float_key(v : f64) -> u64 {
    let bits = v.to_bits();
    if bits >> 63 == 1 {
        !bits
    } else {
        bits | (1 << 63)
    }
}

fn radix_key(attr : &Attribute, val : &[u8]) -> Result<u64> {
    match attr.kind() {
        AttributeKind::Float => Ok(float_key(unpack_f64(val)?)),
        AttributeKind::Categorical => unpack_u64(val),
        AttributeKind::Binary => Ok(val.first().map(|b| (*b != 0) as u64 ).unwrap_or(0))
    }
}

// One stable LSD pass per byte of the key. Passes where every key shares
// the same byte leave the order untouched and are skipped.
fn radix_pass(order : Vec<usize>, keys : &[u64]) -> Vec<usize> {
    let mut order = order;
    let mut buffer = vec![0; order.len()];
    for shift in (0..64).step_by(8) {
        let mut counts = [0usize; 256];
        for ix in order.iter() {
            counts[((keys[*ix] >> shift) & 0xff) as usize] += 1;
        }
        if counts.iter().any(|c| *c == order.len() ) {
            continue;
        }
        let mut offsets = [0usize; 256];
        let mut acc = 0;
        for (b, c) in counts.iter().enumerate() {
            offsets[b] = acc;
            acc += c;
        }
        for ix in order.iter() {
            let b = ((keys[*ix] >> shift) & 0xff) as usize;
            buffer[offsets[b]] = *ix;
            offsets[b] += 1;
        }
        std::mem::swap(&mut order, &mut buffer);
    }
    order
}

/// Row permutation that sorts the grid by the informed attributes, the first
/// one being the most significant. Ties keep their original relative order.
pub fn sorted_order<G : DataGrid>(grid : &G, direction : SortDirection, specs : &[AttributeSpec]) -> Result<Vec<usize>> {
    let rows = grid.rows();
    let mut order : Vec<usize> = (0..rows).collect();
    let mut keys = vec![0u64; rows];
    for spec in specs.iter().rev() {
        for row in 0..rows {
            let k = radix_key(&spec.attribute, &grid.get(spec, row)?)?;
            keys[row] = match direction {
                SortDirection::Ascending => k,
                SortDirection::Descending => !k
            };
        }
        order = radix_pass(order, &keys[..]);
    }
    Ok(order)
}

/// Sorts the rows of the instances in place.
pub fn sort(inst : &mut DenseInstances, direction : SortDirection, specs : &[AttributeSpec]) -> Result<()> {
    let order = sorted_order(&*inst, direction, specs)?;
    debug!("Sorting {} rows by {} attribute(s)", order.len(), specs.len());
    inst.reorder_rows(&order[..])
}

/// Sorted view over the grid; the source keeps its row order.
pub fn lazy_sort<'a, G : DataGrid>(
    grid : &'a G,
    direction : SortDirection,
    specs : &[AttributeSpec]
) -> Result<InstancesView<'a, G>> {
    let order = sorted_order(grid, direction, specs)?;
    InstancesView::from_rows(grid, order)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn float_keys_preserve_order() {
        let vals = [f64::NEG_INFINITY, -10.5, -1.0, -0.0, 0.0, 1e-300, 2.0, 1e10, f64::INFINITY];
        for w in vals.windows(2) {
            assert!(float_key(w[0]) <= float_key(w[1]), "{} vs {}", w[0], w[1]);
        }
    }

    #[test]
    fn radix_pass_is_stable() {
        let keys = [3, 1, 3, 0, 1];
        let order = radix_pass((0..5).collect(), &keys);
        assert_eq!(order, vec![3, 1, 4, 0, 2]);
    }

}
