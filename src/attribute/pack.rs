use std::convert::TryInto;
use crate::error::{Error, Result};

/// Width in bytes of the packed float and categorical representations.
pub const WORD : usize = 8;

pub fn pack_f64(v : f64) -> [u8; WORD] {
    v.to_le_bytes()
}

pub fn pack_u64(v : u64) -> [u8; WORD] {
    v.to_le_bytes()
}

pub fn unpack_f64(bytes : &[u8]) -> Result<f64> {
    let arr : [u8; WORD] = bytes.try_into()
        .map_err(|_| Error::WidthMismatch { expected : WORD, found : bytes.len() })?;
    Ok(f64::from_le_bytes(arr))
}

pub fn unpack_u64(bytes : &[u8]) -> Result<u64> {
    let arr : [u8; WORD] = bytes.try_into()
        .map_err(|_| Error::WidthMismatch { expected : WORD, found : bytes.len() })?;
    Ok(u64::from_le_bytes(arr))
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn little_endian_layout() {
        assert_eq!(pack_u64(1), [1, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(unpack_u64(&pack_u64(258)).unwrap(), 258);
        assert_eq!(unpack_f64(&pack_f64(-0.5)).unwrap(), -0.5);
    }

    #[test]
    fn short_slices_are_rejected() {
        assert!(unpack_f64(&[0, 1, 2]).is_err());
        assert!(unpack_u64(&[]).is_err());
    }

}
