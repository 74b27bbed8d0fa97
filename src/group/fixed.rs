use crate::attribute::*;
use crate::error::{Error, Result};

/// Byte-aligned page: every attribute takes `width` bytes of each row, and
/// rows are laid out one after the other.
#[derive(Debug, Clone)]
pub struct FixedAttributeGroup {

    pub(crate) name : String,

    pub(crate) width : usize,

    pub(crate) attributes : Vec<Attribute>,

    pub(crate) storage : Vec<u8>,

    pub(crate) rows : usize
}

impl FixedAttributeGroup {

    pub fn new(name : &str, width : usize) -> Self {
        Self { name : name.to_string(), width, attributes : Vec::new(), storage : Vec::new(), rows : 0 }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn row_size(&self) -> usize {
        self.width * self.attributes.len()
    }

    pub fn add_attribute(&mut self, attr : Attribute) -> Result<usize> {
        if attr.kind() == AttributeKind::Binary {
            return Err(Error::KindMismatch {
                name : attr.name().to_string(),
                expected : AttributeKind::Float,
                found : AttributeKind::Binary
            });
        }
        if attr.value_width() != self.width {
            return Err(Error::WidthMismatch { expected : self.width, found : attr.value_width() });
        }
        self.attributes.push(attr);
        Ok(self.attributes.len() - 1)
    }

    fn offset(&self, col : usize, row : usize) -> usize {
        row * self.row_size() + col * self.width
    }

    pub fn get(&self, col : usize, row : usize) -> &[u8] {
        let start = self.offset(col, row);
        &self.storage[start..start + self.width]
    }

    pub fn set(&mut self, col : usize, row : usize, val : &[u8]) -> Result<()> {
        if val.len() != self.width {
            return Err(Error::WidthMismatch { expected : self.width, found : val.len() });
        }
        let start = self.offset(col, row);
        self.storage[start..start + self.width].copy_from_slice(val);
        Ok(())
    }

}
