use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};

/// Single-bit attribute. Cells read and write as one byte holding 0 or 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BinaryAttribute {
    pub name : String
}

impl BinaryAttribute {

    pub fn new(name : &str) -> Self {
        Self { name : name.to_string() }
    }

    pub fn sys_val_from_str(&self, s : &str) -> Result<Vec<u8>> {
        match s.trim() {
            "1" | "true" => Ok(vec![1]),
            "0" | "false" => Ok(vec![0]),
            other => Err(Error::InvalidValue { name : self.name.clone(), value : other.to_string() })
        }
    }

    pub fn str_from_sys_val(&self, bytes : &[u8]) -> Result<String> {
        match bytes {
            [b] => Ok(if *b != 0 { "1".to_string() } else { "0".to_string() }),
            _ => Err(Error::WidthMismatch { expected : 1, found : bytes.len() })
        }
    }

}
