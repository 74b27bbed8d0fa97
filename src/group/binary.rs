use crate::attribute::*;
use crate::error::{Error, Result};

/// Bit-packed page holding binary attributes only. Each row occupies
/// `ceil(attributes / 8)` bytes; attribute `col` is bit `col % 8` of byte
/// `col / 8` of its row.
#[derive(Debug, Clone)]
pub struct BinaryAttributeGroup {

    pub(crate) name : String,

    pub(crate) attributes : Vec<Attribute>,

    pub(crate) storage : Vec<u8>,

    pub(crate) rows : usize
}

impl BinaryAttributeGroup {

    pub fn new(name : &str) -> Self {
        Self { name : name.to_string(), attributes : Vec::new(), storage : Vec::new(), rows : 0 }
    }

    pub fn row_size(&self) -> usize {
        (self.attributes.len() + 7) / 8
    }

    pub fn add_attribute(&mut self, attr : Attribute) -> Result<usize> {
        if attr.kind() != AttributeKind::Binary {
            return Err(Error::KindMismatch {
                name : attr.name().to_string(),
                expected : AttributeKind::Binary,
                found : attr.kind()
            });
        }
        self.attributes.push(attr);
        Ok(self.attributes.len() - 1)
    }

    fn locate(&self, col : usize, row : usize) -> (usize, u8) {
        (row * self.row_size() + col / 8, 1u8 << (col % 8))
    }

    pub fn get(&self, col : usize, row : usize) -> u8 {
        let (byte, mask) = self.locate(col, row);
        if self.storage[byte] & mask != 0 { 1 } else { 0 }
    }

    pub fn set(&mut self, col : usize, row : usize, val : &[u8]) -> Result<()> {
        let bit = match val {
            [b] => *b != 0,
            _ => return Err(Error::WidthMismatch { expected : 1, found : val.len() })
        };
        let (byte, mask) = self.locate(col, row);
        if bit {
            self.storage[byte] |= mask;
        } else {
            self.storage[byte] &= !mask;
        }
        Ok(())
    }

}
