mod common;

use colstat::*;
use colstat::filter::*;
use colstat::attribute::pack::*;
use common::*;

#[test]
fn row_views_remap_and_repeat() {
    let inst = flowers();
    let view = InstancesView::from_rows(&inst, vec![2, 2, 0]).unwrap();
    assert_eq!(view.size(), (4, 3));
    assert_eq!(column(&view, "species"), vec!["virginica", "virginica", "setosa"]);
    assert_eq!(view.source_row(1).unwrap(), 2);
    assert!(view.get(&spec(&inst, "sepal"), 3).is_err());
    assert!(InstancesView::from_rows(&inst, vec![6]).is_err());
}

#[test]
fn attribute_views_hide_columns() {
    let inst = flowers();
    let sepal = Attribute::float("sepal");
    let species = Attribute::categorical("species", &[]);
    let view = InstancesView::from_attributes(&inst, vec![sepal.clone()]).unwrap();
    assert_eq!(view.size(), (1, 6));
    assert_eq!(view.attributes(), vec![sepal.clone()]);
    assert!(view.attribute_spec(&species).is_err());
    assert!(view.class_attributes().is_empty());
    assert_eq!(view.row_string(1).unwrap(), "7.00");
    assert!(InstancesView::from_attributes(&inst, vec![Attribute::float("ghost")]).is_err());
}

#[test]
fn view_class_attributes_are_independent() {
    let inst = flowers();
    let mut view = InstancesView::from_visible(&inst, vec![0, 1], inst.attributes()).unwrap();
    let flag = Attribute::binary("flag");
    view.add_class_attribute(&flag).unwrap();
    assert_eq!(view.class_attributes().len(), 2);
    assert_eq!(inst.class_attributes().len(), 1);
}

#[test]
fn views_stack() {
    let inst = flowers();
    let first = InstancesView::from_rows(&inst, vec![5, 4, 3]).unwrap();
    let second = InstancesView::from_rows(&first, vec![2]).unwrap();
    assert_eq!(column(&second, "sepal"), vec!["4.90"]);
}

#[test]
fn binning_filter_applies_lazily() {
    let inst = flowers();
    let petal = Attribute::float("petal");
    let mut filter = BinningFilter::new(3);
    filter.add_attribute(&petal).unwrap();
    filter.train(&inst).unwrap();
    assert_eq!(filter.range(&petal), Some((1.4, 6.0)));
    let lazy = LazilyFilteredInstances::new(&inst, filter).unwrap();
    let binned = Attribute::categorical("petal", &[]);
    assert!(lazy.attributes().contains(&binned));
    assert!(!lazy.attributes().contains(&petal));
    assert!(lazy.attribute_spec(&petal).is_err());
    // Width (6.0 - 1.4) / 3 puts 1.4 in bin 0, 4.5/4.7 in bin 2, 5.1 in bin 2, 6.0 clamps to 2.
    assert_eq!(column(&lazy, "petal"), vec!["0", "2", "2", "0", "2", "2"]);
    let s = lazy.attribute_spec(&binned).unwrap();
    assert_eq!(unpack_u64(&lazy.get(&s, 3).unwrap()).unwrap(), 0);
    // Untouched attributes pass through.
    assert_eq!(column(&lazy, "species"), column(&inst, "species"));
}

#[test]
fn binning_edges() {
    let f = BinningFilter::new(4);
    assert_eq!(f.bin_of(-10.0, 0.0, 8.0), 0);
    assert_eq!(f.bin_of(1.99, 0.0, 8.0), 0);
    assert_eq!(f.bin_of(2.0, 0.0, 8.0), 1);
    assert_eq!(f.bin_of(8.0, 0.0, 8.0), 3);
    assert_eq!(f.bin_of(100.0, 0.0, 8.0), 3);
    assert_eq!(f.bin_of(3.0, 5.0, 5.0), 0);
}

#[test]
fn binning_rejects_bad_input() {
    let inst = flowers();
    let mut f = BinningFilter::new(0);
    assert!(f.add_attribute(&Attribute::binary("flag")).is_err());
    f.add_attribute(&Attribute::float("sepal")).unwrap();
    assert!(f.train(&inst).is_err());
    let untrained = {
        let mut g = BinningFilter::new(2);
        g.add_attribute(&Attribute::float("sepal")).unwrap();
        g
    };
    let lazy = LazilyFilteredInstances::new(&inst, untrained).unwrap();
    let s = lazy.attribute_spec(&Attribute::categorical("sepal", &[])).unwrap();
    assert!(lazy.get(&s, 0).is_err());
}

#[test]
fn hidden_attributes_cannot_be_read() {
    let inst = flowers();
    let view = InstancesView::from_attributes(&inst, vec![Attribute::float("sepal")]).unwrap();
    match view.get(&spec(&inst, "petal"), 0) {
        Err(Error::UnknownAttribute(name)) => assert_eq!(name, "petal"),
        other => panic!("unexpected {:?}", other)
    }
    assert!(view.get(&spec(&inst, "sepal"), 0).is_ok());

    let species = Attribute::categorical("species", &[]);
    let parts = colstat::ops::decompose_on_attribute_values(&inst, &species).unwrap();
    assert!(parts["setosa"].get(&spec(&inst, "species"), 0).is_err());
}

#[test]
fn replaced_attributes_cannot_be_read() {
    let inst = flowers();
    let petal = Attribute::float("petal");
    let mut filter = BinningFilter::new(2);
    filter.add_attribute(&petal).unwrap();
    filter.train(&inst).unwrap();
    let lazy = LazilyFilteredInstances::new(&inst, filter).unwrap();
    assert!(lazy.get(&spec(&inst, "petal"), 0).is_err());
    assert!(lazy.get_f64(&spec(&inst, "petal"), 0).is_err());
    assert_eq!(lazy.get_f64(&spec(&inst, "sepal"), 0).unwrap(), 5.1);
}

#[test]
fn class_attributes_follow_the_filter() {
    let mut inst = flowers();
    let petal = Attribute::float("petal");
    inst.add_class_attribute(&petal).unwrap();
    let mut filter = BinningFilter::new(3);
    filter.add_attribute(&petal).unwrap();
    filter.train(&inst).unwrap();
    let lazy = LazilyFilteredInstances::new(&inst, filter).unwrap();
    let classes = lazy.class_attributes();
    assert_eq!(classes.len(), 2);
    assert!(classes.contains(&Attribute::categorical("petal", &[])));
    assert!(classes.contains(&Attribute::categorical("species", &[])));
    assert!(!classes.contains(&petal));
}

#[test]
fn constant_columns_bin_to_zero() {
    let mut inst = DenseInstances::new();
    inst.add_attribute(Attribute::float("c")).unwrap();
    for _ in 0..4 {
        inst.push_row(&["2.5"]).unwrap();
    }
    let c = Attribute::float("c");
    let mut filter = BinningFilter::new(5);
    filter.add_attribute(&c).unwrap();
    filter.train(&inst).unwrap();
    assert_eq!(filter.range(&c), Some((2.5, 2.5)));
    let lazy = LazilyFilteredInstances::new(&inst, filter).unwrap();
    assert_eq!(column(&lazy, "c"), vec!["0", "0", "0", "0"]);
}

#[test]
fn zero_bins_never_underflow() {
    assert_eq!(BinningFilter::new(0).bin_of(5.0, 0.0, 10.0), 0);
}
