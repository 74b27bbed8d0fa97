use serde::{Serialize, Deserialize};
use super::pack::*;
use crate::error::{Error, Result};

/// Dictionary-encoded attribute. Each distinct string is stored once in
/// `values`; cells carry its index as a little-endian u64.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalAttribute {

    pub name : String,

    pub values : Vec<String>
}

impl CategoricalAttribute {

    pub fn new(name : &str) -> Self {
        Self { name : name.to_string(), values : Vec::new() }
    }

    pub fn with_values(name : &str, values : &[&str]) -> Self {
        Self {
            name : name.to_string(),
            values : values.iter().map(|v| v.to_string() ).collect()
        }
    }

    /// Index of the informed value in the dictionary, if present.
    pub fn sys_index(&self, value : &str) -> Option<u64> {
        self.values.iter().position(|v| &v[..] == value).map(|ix| ix as u64 )
    }

    pub fn usr_value(&self, ix : u64) -> Option<&str> {
        self.values.get(ix as usize).map(|v| &v[..] )
    }

    /// Returns the packed index of the value, appending it to the dictionary
    /// when it was never seen before.
    pub fn sys_val_from_str(&mut self, s : &str) -> Result<Vec<u8>> {
        let ix = match self.sys_index(s) {
            Some(ix) => ix,
            None => {
                self.values.push(s.to_string());
                (self.values.len() - 1) as u64
            }
        };
        Ok(pack_u64(ix).to_vec())
    }

    pub fn str_from_sys_val(&self, bytes : &[u8]) -> Result<String> {
        let ix = unpack_u64(bytes)?;
        self.usr_value(ix)
            .map(|v| v.to_string() )
            .ok_or_else(|| Error::InvalidValue { name : self.name.clone(), value : format!("index {}", ix) })
    }

}
