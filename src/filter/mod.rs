use crate::attribute::Attribute;
use crate::grid::DataGrid;
use crate::error::Result;

mod binning;

pub use binning::*;

/// Pairs an attribute of the source grid with the attribute that replaces
/// it once a filter is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredAttribute {

    pub old : Attribute,

    pub new : Attribute
}

/// Value-wise transformation of some attributes of a grid, learned from the
/// grid itself and applied on read by `LazilyFilteredInstances`.
pub trait Filter {

    /// Registers an attribute the filter should transform.
    fn add_attribute(&mut self, attr : &Attribute) -> Result<()>;

    /// Learns whatever the transformation needs from the grid.
    fn train<G : DataGrid>(&mut self, grid : &G) -> Result<()>;

    fn filtered_attributes(&self) -> Vec<FilteredAttribute>;

    /// Maps a packed value of `old` into a packed value of `new`.
    fn transform(&self, old : &Attribute, new : &Attribute, val : &[u8]) -> Result<Vec<u8>>;

}
