use std::collections::HashMap;
use tracing::{debug, warn};
use crate::attribute::*;
use crate::attribute::pack::*;
use crate::grid::DataGrid;
use crate::error::{Error, Result};
use super::*;

/// Discretizes float attributes into `bins` equal-width intervals spanning
/// the range observed during training. The replacement is a categorical
/// attribute of the same name whose values are the bin indices "0".."bins-1".
/// Values outside the trained range fall into the edge bins.
#[derive(Debug, Clone)]
pub struct BinningFilter {

    bins : usize,

    attrs : Vec<Attribute>,

    // Attribute -> (min, max) seen during training.
    ranges : HashMap<Attribute, (f64, f64)>
}

impl BinningFilter {

    pub fn new(bins : usize) -> Self {
        Self { bins, attrs : Vec::new(), ranges : HashMap::new() }
    }

    pub fn bins(&self) -> usize {
        self.bins
    }

    pub fn range(&self, attr : &Attribute) -> Option<(f64, f64)> {
        self.ranges.get(attr).copied()
    }

    fn binned_attribute(&self, old : &Attribute) -> Attribute {
        let labels : Vec<String> = (0..self.bins).map(|b| b.to_string() ).collect();
        let labels : Vec<&str> = labels.iter().map(|l| &l[..] ).collect();
        Attribute::categorical(old.name(), &labels[..])
    }

    /// Bin index of a value, given the trained range. Always 0 without bins.
    pub fn bin_of(&self, v : f64, min : f64, max : f64) -> usize {
        if self.bins == 0 || max <= min {
            return 0;
        }
        let intv = (max - min) / self.bins as f64;
        let b = ((v - min) / intv).floor();
        if b < 0.0 {
            0
        } else {
            (b as usize).min(self.bins - 1)
        }
    }

}

impl Filter for BinningFilter {

    fn add_attribute(&mut self, attr : &Attribute) -> Result<()> {
        if attr.kind() != AttributeKind::Float {
            return Err(Error::KindMismatch {
                name : attr.name().to_string(),
                expected : AttributeKind::Float,
                found : attr.kind()
            });
        }
        if !self.attrs.contains(attr) {
            self.attrs.push(attr.clone());
        }
        Ok(())
    }

    fn train<G : DataGrid>(&mut self, grid : &G) -> Result<()> {
        if self.bins == 0 {
            return Err(Error::InvalidArgument("binning requires at least one bin".into()));
        }
        for attr in self.attrs.iter() {
            let spec = grid.attribute_spec(attr)?;
            let (mut min, mut max) = (f64::INFINITY, f64::NEG_INFINITY);
            for row in 0..grid.rows() {
                let v = grid.get_f64(&spec, row)?;
                if v.is_nan() {
                    continue;
                }
                min = min.min(v);
                max = max.max(v);
            }
            if min > max {
                warn!("Attribute {} has no finite values; binning everything to 0", attr.name());
                min = 0.0;
                max = 0.0;
            } else if min == max {
                warn!("Attribute {} is constant; binning everything to 0", attr.name());
            }
            debug!("Binning {} over [{}, {}] into {} bins", attr.name(), min, max, self.bins);
            self.ranges.insert(attr.clone(), (min, max));
        }
        Ok(())
    }

    fn filtered_attributes(&self) -> Vec<FilteredAttribute> {
        self.attrs.iter()
            .map(|a| FilteredAttribute { old : a.clone(), new : self.binned_attribute(a) })
            .collect()
    }

    fn transform(&self, old : &Attribute, _new : &Attribute, val : &[u8]) -> Result<Vec<u8>> {
        let (min, max) = self.ranges.get(old)
            .copied()
            .ok_or_else(|| Error::InvalidArgument(format!("filter not trained for {}", old.name())) )?;
        let v = unpack_f64(val)?;
        if v.is_nan() {
            return Err(Error::InvalidValue { name : old.name().to_string(), value : "NaN".into() });
        }
        Ok(pack_u64(self.bin_of(v, min, max) as u64).to_vec())
    }

}
