use nalgebra::DMatrix;
use crate::attribute::*;
use crate::grid::*;
use crate::error::{Error, Result};

/// Copies the informed float attributes into a rows x attributes matrix.
pub fn to_matrix<G : DataGrid>(grid : &G, attrs : &[Attribute]) -> Result<DMatrix<f64>> {
    let mut specs = Vec::with_capacity(attrs.len());
    for a in attrs.iter() {
        expect_kind(a, AttributeKind::Float)?;
        specs.push(grid.attribute_spec(a)?);
    }
    let mut m = DMatrix::zeros(grid.rows(), specs.len());
    for (j, spec) in specs.iter().enumerate() {
        for i in 0..grid.rows() {
            m[(i, j)] = grid.get_f64(spec, i)?;
        }
    }
    Ok(m)
}

/// Builds dense instances with one float attribute per matrix column. Columns
/// are named "0".."n-1" when no names are given.
pub fn from_matrix(names : Option<&[&str]>, data : &DMatrix<f64>) -> Result<DenseInstances> {
    let names : Vec<String> = match names {
        Some(names) => {
            if names.len() != data.ncols() {
                return Err(Error::InvalidArgument(format!(
                    "{} names for {} columns", names.len(), data.ncols()
                )));
            }
            names.iter().map(|n| n.to_string() ).collect()
        },
        None => (0..data.ncols()).map(|j| j.to_string() ).collect()
    };
    let mut inst = DenseInstances::new();
    let mut specs = Vec::with_capacity(names.len());
    for n in names.iter() {
        specs.push(inst.add_attribute(Attribute::float(n))?);
    }
    inst.extend(data.nrows())?;
    for (j, spec) in specs.iter().enumerate() {
        for i in 0..data.nrows() {
            inst.set_f64(spec, i, data[(i, j)])?;
        }
    }
    Ok(inst)
}
