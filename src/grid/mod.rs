use std::borrow::Cow;
use crate::attribute::*;
use crate::attribute::pack::*;
use crate::error::{Error, Result};

mod dense;

mod view;

mod lazy;

pub use dense::*;

pub use view::*;

pub use lazy::*;

/// Read access to a table of instances: a set of typed attributes (some of
/// which are flagged as class attributes) and a fixed number of rows.
pub trait DataGrid {

    /// Attributes in the order they were declared.
    fn attributes(&self) -> Vec<Attribute>;

    fn class_attributes(&self) -> Vec<Attribute>;

    /// Resolves the attribute into a locator usable with `get`. The returned
    /// spec carries the grid's current copy of the attribute.
    fn attribute_spec(&self, attr : &Attribute) -> Result<AttributeSpec>;

    fn add_class_attribute(&mut self, attr : &Attribute) -> Result<()>;

    fn remove_class_attribute(&mut self, attr : &Attribute) -> Result<()>;

    /// Packed value of the attribute at the informed row.
    fn get(&self, spec : &AttributeSpec, row : usize) -> Result<Cow<'_, [u8]>>;

    /// Number of attributes and number of rows.
    fn size(&self) -> (usize, usize);

    fn rows(&self) -> usize {
        self.size().1
    }

    fn get_f64(&self, spec : &AttributeSpec, row : usize) -> Result<f64> {
        expect_kind(&spec.attribute, AttributeKind::Float)?;
        unpack_f64(&self.get(spec, row)?)
    }

    fn get_string(&self, spec : &AttributeSpec, row : usize) -> Result<String> {
        let current = self.attribute_spec(&spec.attribute)?;
        current.attribute.str_from_sys_val(&self.get(spec, row)?)
    }

    /// Renders all attribute values of a row separated by spaces.
    fn row_string(&self, row : usize) -> Result<String> {
        let mut fields = Vec::new();
        for attr in self.attributes() {
            let spec = self.attribute_spec(&attr)?;
            fields.push(spec.attribute.str_from_sys_val(&self.get(&spec, row)?)?);
        }
        Ok(fields.join(" "))
    }

    /// Calls `f` with the packed values of `specs` for every row, in order.
    /// Iteration stops early when `f` returns `Ok(false)`; errors propagate.
    fn map_over_rows<F>(&self, specs : &[AttributeSpec], mut f : F) -> Result<()>
    where
        Self : Sized,
        F : FnMut(&[Cow<'_, [u8]>], usize) -> Result<bool>
    {
        let mut vals = Vec::with_capacity(specs.len());
        for row in 0..self.rows() {
            vals.clear();
            for spec in specs {
                vals.push(self.get(spec, row)?);
            }
            if !f(&vals[..], row)? {
                break;
            }
        }
        Ok(())
    }

}

/// A grid whose attribute set and values can be changed.
pub trait UpdatableDataGrid : DataGrid {

    fn set(&mut self, spec : &AttributeSpec, row : usize, val : &[u8]) -> Result<()>;

    /// Parses the string with the grid's own copy of the attribute, so
    /// categorical dictionaries grow inside the grid.
    fn set_string(&mut self, spec : &AttributeSpec, row : usize, value : &str) -> Result<()>;

    fn set_f64(&mut self, spec : &AttributeSpec, row : usize, value : f64) -> Result<()> {
        expect_kind(&spec.attribute, AttributeKind::Float)?;
        self.set(spec, row, &pack_f64(value))
    }

    fn add_attribute(&mut self, attr : Attribute) -> Result<AttributeSpec>;

    fn add_attribute_to_group(&mut self, attr : Attribute, group : &str) -> Result<AttributeSpec>;

    /// Width zero creates a bit-packed group for binary attributes.
    fn create_attribute_group(&mut self, name : &str, width : usize) -> Result<()>;

    /// Allocates the informed number of additional rows. Afterwards no
    /// attribute can be added.
    fn extend(&mut self, rows : usize) -> Result<()>;

}

pub(crate) fn expect_kind(attr : &Attribute, expected : AttributeKind) -> Result<()> {
    if attr.kind() == expected {
        Ok(())
    } else {
        Err(Error::KindMismatch { name : attr.name().to_string(), expected, found : attr.kind() })
    }
}

pub(crate) fn check_row(row : usize, rows : usize) -> Result<()> {
    if row < rows {
        Ok(())
    } else {
        Err(Error::RowOutOfBounds { row, rows })
    }
}
