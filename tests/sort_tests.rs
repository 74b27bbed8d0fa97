mod common;

use colstat::*;
use colstat::sort::*;
use common::*;

fn signed() -> DenseInstances {
    let mut inst = DenseInstances::new();
    inst.add_attribute(Attribute::float("v")).unwrap();
    inst.add_attribute(Attribute::categorical("tag", &[])).unwrap();
    for (v, t) in [("3.5", "a"), ("-2", "b"), ("0", "c"), ("-10.25", "d"), ("3.5", "e"), ("1e6", "f")].iter() {
        inst.push_row(&[*v, *t]).unwrap();
    }
    inst
}

#[test]
fn ascending_handles_negative_floats() {
    let inst = signed();
    let order = sorted_order(&inst, SortDirection::Ascending, &[spec(&inst, "v")]).unwrap();
    assert_eq!(order, vec![3, 1, 2, 0, 4, 5]);
}

#[test]
fn descending_is_stable() {
    let inst = signed();
    let view = lazy_sort(&inst, SortDirection::Descending, &[spec(&inst, "v")]).unwrap();
    assert_eq!(column(&view, "tag"), vec!["f", "a", "e", "c", "b", "d"]);
    // The source keeps its order.
    assert_eq!(column(&inst, "tag"), vec!["a", "b", "c", "d", "e", "f"]);
}

#[test]
fn in_place_sort_by_two_attributes() {
    let mut inst = flowers();
    let specs = vec![spec(&inst, "species"), spec(&inst, "sepal")];
    sort(&mut inst, SortDirection::Ascending, &specs[..]).unwrap();
    assert_eq!(column(&inst, "species"), vec!["setosa", "setosa", "versicolor", "versicolor", "virginica", "virginica"]);
    assert_eq!(column(&inst, "sepal"), vec!["4.90", "5.10", "6.40", "7.00", "5.80", "6.30"]);
    // Bit-packed columns move with their rows.
    assert_eq!(column(&inst, "flag"), vec!["0", "1", "1", "0", "0", "1"]);
}

#[test]
fn binary_keys() {
    let inst = flowers();
    let order = sorted_order(&inst, SortDirection::Ascending, &[spec(&inst, "flag")]).unwrap();
    assert_eq!(order, vec![1, 3, 5, 0, 2, 4]);
}

#[test]
fn empty_specs_keep_order() {
    let inst = flowers();
    assert_eq!(sorted_order(&inst, SortDirection::Descending, &[]).unwrap(), (0..6).collect::<Vec<_>>());
}
