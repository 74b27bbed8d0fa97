use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::convert::TryInto;
use serde::{Serialize, Deserialize};
use tracing::debug;
use crate::attribute::*;
use crate::group::AttributeGroup;
use crate::grid::*;
use crate::ops::dense_copy;
use crate::error::{Error, Result};

const MAGIC : &[u8; 4] = b"CLST";

const VERSION : u8 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct GroupLayout {

    name : String,

    // Zero for bit-packed groups.
    width : usize,

    attributes : Vec<Attribute>,

    bytes : usize
}

#[derive(Debug, Serialize, Deserialize)]
struct Header {

    rows : usize,

    groups : Vec<GroupLayout>,

    // (group, position) of each attribute in declaration order.
    order : Vec<(usize, usize)>,

    // Indices into `order`.
    class_attributes : Vec<usize>
}

/// Writes a snapshot of dense instances: magic, version, the length of a
/// JSON header describing the layout, the header, then the raw storage of
/// every attribute group in header order.
pub fn serialize_dense<W : Write>(inst : &DenseInstances, mut writer : W) -> Result<()> {
    let attrs = inst.attributes();
    let class_attributes = inst.class_attributes().iter()
        .filter_map(|c| attrs.iter().position(|a| a == c ) )
        .collect();
    let header = Header {
        rows : inst.rows(),
        groups : inst.attribute_groups().iter().map(|g| GroupLayout {
            name : g.name().to_string(),
            width : g.width(),
            attributes : g.attributes().to_vec(),
            bytes : g.storage().len()
        }).collect(),
        order : inst.layout().to_vec(),
        class_attributes
    };
    let header = serde_json::to_vec(&header)?;
    writer.write_all(MAGIC)?;
    writer.write_all(&[VERSION])?;
    writer.write_all(&(header.len() as u64).to_le_bytes())?;
    writer.write_all(&header[..])?;
    for g in inst.attribute_groups() {
        writer.write_all(g.storage())?;
    }
    writer.flush()?;
    debug!("Serialized {} rows in {} groups", inst.rows(), inst.attribute_groups().len());
    Ok(())
}

/// Writes a snapshot of any grid, materializing it first.
pub fn serialize<G : DataGrid, W : Write>(grid : &G, writer : W) -> Result<()> {
    serialize_dense(&dense_copy(grid)?, writer)
}

fn read_chunk<R : Read>(reader : &mut R, len : usize, what : &str) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    reader.by_ref().take(len as u64).read_to_end(&mut buf)?;
    if buf.len() != len {
        return Err(Error::Format(format!("truncated {}: expected {} bytes, found {}", what, len, buf.len())));
    }
    Ok(buf)
}

pub fn deserialize<R : Read>(mut reader : R) -> Result<DenseInstances> {
    let preamble = read_chunk(&mut reader, MAGIC.len() + 1 + 8, "preamble")?;
    if &preamble[..4] != &MAGIC[..] {
        return Err(Error::Format("bad magic".into()));
    }
    if preamble[4] != VERSION {
        return Err(Error::Format(format!("unsupported version {}", preamble[4])));
    }
    let len_bytes : [u8; 8] = preamble[5..13].try_into()
        .map_err(|_| Error::Format("bad header length".into()) )?;
    let header_len = u64::from_le_bytes(len_bytes) as usize;
    let header : Header = serde_json::from_slice(&read_chunk(&mut reader, header_len, "header")?[..])?;
    let mut groups = Vec::with_capacity(header.groups.len());
    for layout in header.groups {
        let mut g = AttributeGroup::new(&layout.name, layout.width);
        for a in layout.attributes {
            g.add_attribute(a)?;
        }
        let implied = header.rows.checked_mul(g.row_size())
            .ok_or_else(|| Error::Format(format!("group '{}' is too large for {} rows", layout.name, header.rows)) )?;
        if implied != layout.bytes {
            return Err(Error::Format(format!(
                "group '{}' declares {} bytes, layout implies {}", layout.name, layout.bytes, implied
            )));
        }
        g.resize(header.rows);
        let data = read_chunk(&mut reader, layout.bytes, &format!("group '{}'", layout.name))?;
        g.set_storage(data)?;
        groups.push(g);
    }
    let mut class_attrs = Vec::new();
    for ix in header.class_attributes {
        let (g, p) = *header.order.get(ix)
            .ok_or_else(|| Error::Format(format!("class attribute index {} out of range", ix)) )?;
        let attr = groups.get(g)
            .and_then(|grp : &AttributeGroup| grp.attributes().get(p) )
            .cloned()
            .ok_or_else(|| Error::Format(format!("no attribute at group {} position {}", g, p)) )?;
        class_attrs.push(attr);
    }
    let inst = DenseInstances::from_parts(groups, header.order, class_attrs, header.rows)?;
    debug!("Deserialized {} rows with {} attributes", inst.rows(), inst.size().0);
    Ok(inst)
}

pub fn save_to_path<G, P>(grid : &G, path : P) -> Result<()>
where
    G : DataGrid,
    P : AsRef<Path>
{
    let f = File::create(path)?;
    serialize(grid, BufWriter::new(f))
}

pub fn load_from_path<P>(path : P) -> Result<DenseInstances>
where
    P : AsRef<Path>
{
    let f = File::open(path)?;
    deserialize(BufReader::new(f))
}
