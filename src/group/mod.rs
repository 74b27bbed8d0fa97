use std::borrow::Cow;
use std::fmt::{self, Display};
use crate::attribute::*;
use crate::error::{Error, Result};

mod fixed;

mod binary;

pub use fixed::*;

pub use binary::*;

/// A page of columnar storage holding same-typed attributes row by row.
#[derive(Debug, Clone)]
pub enum AttributeGroup {
    Fixed(FixedAttributeGroup),
    Binary(BinaryAttributeGroup)
}

impl AttributeGroup {

    /// Width zero creates a bit-packed group; any other width creates a
    /// byte-aligned group whose attributes take that many bytes each.
    pub fn new(name : &str, width : usize) -> Self {
        if width == 0 {
            AttributeGroup::Binary(BinaryAttributeGroup::new(name))
        } else {
            AttributeGroup::Fixed(FixedAttributeGroup::new(name, width))
        }
    }

    pub fn name(&self) -> &str {
        match self {
            AttributeGroup::Fixed(g) => &g.name[..],
            AttributeGroup::Binary(g) => &g.name[..]
        }
    }

    /// Bytes per attribute, or zero for bit-packed groups.
    pub fn width(&self) -> usize {
        match self {
            AttributeGroup::Fixed(g) => g.width(),
            AttributeGroup::Binary(_) => 0
        }
    }

    pub fn attributes(&self) -> &[Attribute] {
        match self {
            AttributeGroup::Fixed(g) => &g.attributes[..],
            AttributeGroup::Binary(g) => &g.attributes[..]
        }
    }

    pub(crate) fn attribute_mut(&mut self, pos : usize) -> Option<&mut Attribute> {
        match self {
            AttributeGroup::Fixed(g) => g.attributes.get_mut(pos),
            AttributeGroup::Binary(g) => g.attributes.get_mut(pos)
        }
    }

    pub fn rows(&self) -> usize {
        match self {
            AttributeGroup::Fixed(g) => g.rows,
            AttributeGroup::Binary(g) => g.rows
        }
    }

    /// Appends the attribute and returns its position in the group. Fails
    /// once storage holds rows, since that would shift every row.
    pub fn add_attribute(&mut self, attr : Attribute) -> Result<usize> {
        if self.rows() > 0 {
            return Err(Error::Frozen);
        }
        match self {
            AttributeGroup::Fixed(g) => g.add_attribute(attr),
            AttributeGroup::Binary(g) => g.add_attribute(attr)
        }
    }

    pub fn row_size(&self) -> usize {
        match self {
            AttributeGroup::Fixed(g) => g.row_size(),
            AttributeGroup::Binary(g) => g.row_size()
        }
    }

    pub fn storage(&self) -> &[u8] {
        match self {
            AttributeGroup::Fixed(g) => &g.storage[..],
            AttributeGroup::Binary(g) => &g.storage[..]
        }
    }

    fn parts_mut(&mut self) -> (&mut Vec<u8>, &mut usize) {
        match self {
            AttributeGroup::Fixed(g) => (&mut g.storage, &mut g.rows),
            AttributeGroup::Binary(g) => (&mut g.storage, &mut g.rows)
        }
    }

    /// Grows or shrinks storage to hold the informed number of rows. New
    /// rows are zeroed; existing rows keep their contents.
    pub fn resize(&mut self, rows : usize) {
        let row_size = self.row_size();
        let (storage, n) = self.parts_mut();
        storage.resize(rows * row_size, 0);
        *n = rows;
    }

    /// Replaces the raw storage, which must match the current row count.
    pub fn set_storage(&mut self, bytes : Vec<u8>) -> Result<()> {
        let expected = self.rows() * self.row_size();
        if bytes.len() != expected {
            return Err(Error::Format(format!(
                "group '{}' expects {} bytes, found {}", self.name(), expected, bytes.len()
            )));
        }
        let (storage, _) = self.parts_mut();
        *storage = bytes;
        Ok(())
    }

    pub fn get(&self, col : usize, row : usize) -> Cow<'_, [u8]> {
        match self {
            AttributeGroup::Fixed(g) => Cow::Borrowed(g.get(col, row)),
            AttributeGroup::Binary(g) => Cow::Owned(vec![g.get(col, row)])
        }
    }

    pub fn set(&mut self, col : usize, row : usize, val : &[u8]) -> Result<()> {
        match self {
            AttributeGroup::Fixed(g) => g.set(col, row, val),
            AttributeGroup::Binary(g) => g.set(col, row, val)
        }
    }

    /// Rearranges rows so that new row `i` holds old row `order[i]`.
    /// `order` may drop or repeat rows; the row count becomes its length.
    pub(crate) fn reorder_rows(&mut self, order : &[usize]) {
        let row_size = self.row_size();
        let (storage, n) = self.parts_mut();
        let mut reordered = Vec::with_capacity(order.len() * row_size);
        for &src in order {
            reordered.extend_from_slice(&storage[src * row_size..(src + 1) * row_size]);
        }
        *storage = reordered;
        *n = order.len();
    }

}

impl Display for AttributeGroup {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeGroup::Fixed(g) => write!(
                f, "FixedAttributeGroup({}, {} attributes, {} bytes/attribute, {} rows)",
                g.name, g.attributes.len(), g.width, g.rows
            ),
            AttributeGroup::Binary(g) => write!(
                f, "BinaryAttributeGroup({}, {} attributes, {} rows)",
                g.name, g.attributes.len(), g.rows
            )
        }
    }

}
