use serde::{Serialize, Deserialize};
use super::pack::*;
use crate::error::{Error, Result};

/// Continuous attribute stored as a little-endian f64. The precision only
/// governs how values are rendered back to text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatAttribute {

    pub name : String,

    pub precision : usize
}

impl FloatAttribute {

    pub fn new(name : &str) -> Self {
        Self { name : name.to_string(), precision : 2 }
    }

    pub fn with_precision(name : &str, precision : usize) -> Self {
        Self { name : name.to_string(), precision }
    }

    pub fn sys_val_from_str(&self, s : &str) -> Result<Vec<u8>> {
        let v : f64 = s.trim().parse().map_err(|_| Error::InvalidValue {
            name : self.name.clone(),
            value : s.to_string()
        })?;
        Ok(pack_f64(v).to_vec())
    }

    pub fn str_from_sys_val(&self, bytes : &[u8]) -> Result<String> {
        let v = unpack_f64(bytes)?;
        Ok(format!("{:.*}", self.precision, v))
    }

}
