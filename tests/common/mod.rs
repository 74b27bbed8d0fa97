#![allow(dead_code)]

use colstat::*;

pub const EPS : f64 = 1E-8;

/// Six flowers with two measurements, a species class and a binary flag.
pub fn flowers() -> DenseInstances {
    let mut inst = DenseInstances::new();
    inst.add_attribute(Attribute::float("sepal")).unwrap();
    inst.add_attribute(Attribute::float("petal")).unwrap();
    inst.add_attribute(Attribute::categorical("species", &[])).unwrap();
    inst.add_attribute(Attribute::binary("flag")).unwrap();
    let rows = [
        ["5.1", "1.4", "setosa", "1"],
        ["7.0", "4.7", "versicolor", "0"],
        ["6.3", "6.0", "virginica", "1"],
        ["4.9", "1.4", "setosa", "0"],
        ["6.4", "4.5", "versicolor", "1"],
        ["5.8", "5.1", "virginica", "0"],
    ];
    for r in rows.iter() {
        inst.push_row(&r[..]).unwrap();
    }
    inst.add_class_attribute(&Attribute::categorical("species", &[])).unwrap();
    inst
}

pub fn spec<G : DataGrid>(grid : &G, name : &str) -> AttributeSpec {
    let attr = colstat::ops::attribute_by_name(grid, name).unwrap();
    grid.attribute_spec(&attr).unwrap()
}

pub fn column<G : DataGrid>(grid : &G, name : &str) -> Vec<String> {
    let s = spec(grid, name);
    (0..grid.rows()).map(|r| grid.get_string(&s, r).unwrap() ).collect()
}
