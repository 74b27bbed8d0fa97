use std::collections::{BTreeMap, HashMap};
use crate::attribute::*;
use crate::grid::*;
use crate::error::{Error, Result};

mod sample;

pub use sample::*;

pub fn resolve_attributes<G : DataGrid>(grid : &G, attrs : &[Attribute]) -> Result<Vec<AttributeSpec>> {
    attrs.iter().map(|a| grid.attribute_spec(a) ).collect()
}

pub fn resolve_all_attributes<G : DataGrid>(grid : &G) -> Result<Vec<AttributeSpec>> {
    resolve_attributes(grid, &grid.attributes()[..])
}

pub fn attribute_by_name<G : DataGrid>(grid : &G, name : &str) -> Option<Attribute> {
    grid.attributes().into_iter().find(|a| a.name() == name )
}

pub fn non_class_attributes<G : DataGrid>(grid : &G) -> Vec<Attribute> {
    let class_attrs = grid.class_attributes();
    grid.attributes().into_iter().filter(|a| !class_attrs.contains(a) ).collect()
}

pub fn non_class_float_attributes<G : DataGrid>(grid : &G) -> Vec<Attribute> {
    non_class_attributes(grid).into_iter().filter(|a| a.kind() == AttributeKind::Float ).collect()
}

fn single_class_spec<G : DataGrid>(grid : &G) -> Result<AttributeSpec> {
    let class_attrs = grid.class_attributes();
    if class_attrs.len() != 1 {
        return Err(Error::ClassCount(class_attrs.len()));
    }
    grid.attribute_spec(&class_attrs[0])
}

/// Rendered value of the (only) class attribute at the informed row.
pub fn class_value<G : DataGrid>(grid : &G, row : usize) -> Result<String> {
    let spec = single_class_spec(grid)?;
    grid.get_string(&spec, row)
}

pub fn set_class<G : UpdatableDataGrid>(grid : &mut G, row : usize, value : &str) -> Result<()> {
    let spec = single_class_spec(grid)?;
    grid.set_string(&spec, row, value)
}

/// Number of rows per value of the (only) class attribute.
pub fn class_distribution<G : DataGrid>(grid : &G) -> Result<HashMap<String, usize>> {
    let spec = single_class_spec(grid)?;
    let mut dist = HashMap::new();
    for row in 0..grid.rows() {
        *dist.entry(grid.get_string(&spec, row)?).or_insert(0) += 1;
    }
    Ok(dist)
}

/// Attributes present in both grids (same name and kind), in the order of
/// the first grid.
pub fn check_compatible<A : DataGrid, B : DataGrid>(a : &A, b : &B) -> Vec<Attribute> {
    let other = b.attributes();
    a.attributes().into_iter().filter(|x| other.contains(x) ).collect()
}

/// True when both grids declare strictly equal attributes in the same order.
pub fn check_strictly_compatible<A : DataGrid, B : DataGrid>(a : &A, b : &B) -> bool {
    let (xs, ys) = (a.attributes(), b.attributes());
    xs.len() == ys.len() && xs.iter().zip(ys.iter()).all(|(x, y)| x.strictly_equal(y) )
}

/// True when both grids have the same attributes, class attributes, size,
/// and the same rendered value in every cell.
pub fn instances_equal<A : DataGrid, B : DataGrid>(a : &A, b : &B) -> Result<bool> {
    if a.size() != b.size() || !check_strictly_compatible(a, b) {
        return Ok(false);
    }
    let (ca, cb) = (a.class_attributes(), b.class_attributes());
    if ca.len() != cb.len() || ca.iter().any(|c| !cb.contains(c) ) {
        return Ok(false);
    }
    let specs_a = resolve_all_attributes(a)?;
    let specs_b = resolve_all_attributes(b)?;
    for row in 0..a.rows() {
        for (sa, sb) in specs_a.iter().zip(specs_b.iter()) {
            if a.get_string(sa, row)? != b.get_string(sb, row)? {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

/// Instances with the same attributes and class attributes, but no rows.
pub fn structural_copy<G : DataGrid>(grid : &G) -> Result<DenseInstances> {
    let mut inst = DenseInstances::new();
    for attr in grid.attributes() {
        inst.add_attribute(attr)?;
    }
    for c in grid.class_attributes() {
        inst.add_class_attribute(&c)?;
    }
    Ok(inst)
}

/// Materializes any grid (views and lazily filtered grids included) into
/// newly allocated dense instances.
pub fn dense_copy<G : DataGrid>(grid : &G) -> Result<DenseInstances> {
    let mut inst = structural_copy(grid)?;
    inst.extend(grid.rows())?;
    let src_specs = resolve_all_attributes(grid)?;
    let dst_specs = resolve_all_attributes(&inst)?;
    for row in 0..grid.rows() {
        for (s, d) in src_specs.iter().zip(dst_specs.iter()) {
            inst.set(d, row, &grid.get(s, row)?)?;
        }
    }
    Ok(inst)
}

/// Zeroed instances holding only the class attributes, with as many rows as
/// the grid. Classifiers fill it with their predictions.
pub fn prediction_vector<G : DataGrid>(grid : &G) -> Result<DenseInstances> {
    let mut inst = DenseInstances::new();
    for c in grid.class_attributes() {
        inst.add_attribute(c.clone())?;
        inst.add_class_attribute(&c)?;
    }
    inst.extend(grid.rows())?;
    Ok(inst)
}

/// Splits the rows by the rendered value of `attr`. Each view hides `attr`.
pub fn decompose_on_attribute_values<'a, G : DataGrid>(
    grid : &'a G,
    attr : &Attribute
) -> Result<BTreeMap<String, InstancesView<'a, G>>> {
    let spec = grid.attribute_spec(attr)?;
    let mut groups : BTreeMap<String, Vec<usize>> = BTreeMap::new();
    for row in 0..grid.rows() {
        groups.entry(grid.get_string(&spec, row)?).or_insert_with(Vec::new).push(row);
    }
    let rest : Vec<Attribute> = grid.attributes().into_iter().filter(|a| a != attr ).collect();
    let mut views = BTreeMap::new();
    for (value, rows) in groups {
        views.insert(value, InstancesView::from_visible(grid, rows, rest.clone())?);
    }
    Ok(views)
}

/// Splits the rows of a float attribute into those less than or equal to the
/// threshold and those greater than it.
pub fn decompose_on_numeric_threshold<'a, G : DataGrid>(
    grid : &'a G,
    attr : &Attribute,
    threshold : f64
) -> Result<(InstancesView<'a, G>, InstancesView<'a, G>)> {
    let spec = grid.attribute_spec(attr)?;
    let (mut le, mut gt) = (Vec::new(), Vec::new());
    for row in 0..grid.rows() {
        if grid.get_f64(&spec, row)? <= threshold {
            le.push(row);
        } else {
            gt.push(row);
        }
    }
    Ok((InstancesView::from_rows(grid, le)?, InstancesView::from_rows(grid, gt)?))
}

/// Float values of a column, in row order.
pub fn column_f64<G : DataGrid>(grid : &G, attr : &Attribute) -> Result<Vec<f64>> {
    let spec = grid.attribute_spec(attr)?;
    (0..grid.rows()).map(|row| grid.get_f64(&spec, row) ).collect()
}
