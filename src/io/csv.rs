use std::io::Write;
use std::fs::File;
use std::path::Path;
use crate::grid::DataGrid;
use crate::ops::resolve_all_attributes;
use crate::error::Result;

/// Writes a header with the attribute names, then one record per row with
/// every value rendered by its attribute.
pub fn write_csv<G : DataGrid, W : Write>(grid : &G, writer : W) -> Result<()> {
    let mut wtr = ::csv::Writer::from_writer(writer);
    let specs = resolve_all_attributes(grid)?;
    wtr.write_record(specs.iter().map(|s| s.attribute.name() ))?;
    let mut record = Vec::with_capacity(specs.len());
    for row in 0..grid.rows() {
        record.clear();
        for spec in specs.iter() {
            record.push(spec.attribute.str_from_sys_val(&grid.get(spec, row)?)?);
        }
        wtr.write_record(&record[..])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv_to_path<G, P>(grid : &G, path : P) -> Result<()>
where
    G : DataGrid,
    P : AsRef<Path>
{
    write_csv(grid, File::create(path)?)
}
