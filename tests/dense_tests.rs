mod common;

use colstat::*;
use colstat::attribute::pack::*;
use common::*;

#[test]
fn attributes_land_in_default_groups() {
    let inst = flowers();
    assert_eq!(inst.size(), (4, 6));
    let names : Vec<&str> = inst.attribute_groups().iter().map(|g| g.name() ).collect();
    assert_eq!(names, vec!["FLOAT", "CAT", "BIN"]);
    let float = inst.attribute_group("FLOAT").unwrap();
    assert_eq!(float.attributes().len(), 2);
    assert_eq!(float.storage().len(), 6 * 16);
    assert_eq!(inst.attribute_group("BIN").unwrap().storage().len(), 6);
    let petal = spec(&inst, "petal");
    assert_eq!((petal.group, petal.position), (0, 1));
}

#[test]
fn values_read_back() {
    let inst = flowers();
    assert_eq!(column(&inst, "species"), vec!["setosa", "versicolor", "virginica", "setosa", "versicolor", "virginica"]);
    assert_eq!(column(&inst, "flag"), vec!["1", "0", "1", "0", "1", "0"]);
    let sepal = spec(&inst, "sepal");
    assert_eq!(inst.get_f64(&sepal, 2).unwrap(), 6.3);
    assert_eq!(inst.row_string(0).unwrap(), "5.10 1.40 setosa 1");
}

#[test]
fn set_string_grows_the_grid_dictionary() {
    let mut inst = flowers();
    let species = spec(&inst, "species");
    inst.set_string(&species, 0, "hybrid").unwrap();
    assert_eq!(inst.get_string(&species, 0).unwrap(), "hybrid");
    match inst.attribute_spec(&species.attribute).unwrap().attribute {
        Attribute::Categorical(c) => assert_eq!(c.values.len(), 4),
        _ => panic!("expected categorical")
    }
}

#[test]
fn frozen_after_extend() {
    let mut inst = DenseInstances::new();
    inst.add_attribute(Attribute::float("x")).unwrap();
    assert!(inst.add_attribute(Attribute::float("x")).is_err());
    inst.extend(2).unwrap();
    assert!(inst.is_frozen());
    match inst.add_attribute(Attribute::float("y")) {
        Err(Error::Frozen) => { },
        other => panic!("unexpected {:?}", other)
    }
    assert!(inst.create_attribute_group("OTHER", 8).is_err());
    inst.extend(3).unwrap();
    assert_eq!(inst.rows(), 5);
}

#[test]
fn bounds_and_widths_are_checked() {
    let mut inst = flowers();
    let sepal = spec(&inst, "sepal");
    assert!(inst.get(&sepal, 6).is_err());
    assert!(inst.set(&sepal, 6, &pack_f64(1.0)).is_err());
    assert!(inst.set(&sepal, 0, &[1, 2, 3]).is_err());
    let flag = spec(&inst, "flag");
    assert!(inst.get_f64(&flag, 0).is_err());
    let foreign = AttributeSpec::new(0, 0, Attribute::float("ghost"));
    assert!(inst.get(&foreign, 0).is_err());
}

#[test]
fn custom_groups() {
    let mut inst = DenseInstances::new();
    inst.create_attribute_group("bits", 0).unwrap();
    inst.create_attribute_group("wide", 8).unwrap();
    assert!(inst.create_attribute_group("bits", 0).is_err());
    assert!(inst.add_attribute_to_group(Attribute::float("f"), "bits").is_err());
    assert!(inst.add_attribute_to_group(Attribute::float("f"), "missing").is_err());
    let b = inst.add_attribute_to_group(Attribute::binary("b"), "bits").unwrap();
    let f = inst.add_attribute_to_group(Attribute::float("f"), "wide").unwrap();
    inst.extend(1).unwrap();
    inst.set(&b, 0, &[1]).unwrap();
    inst.set_f64(&f, 0, -3.25).unwrap();
    assert_eq!(inst.get_string(&b, 0).unwrap(), "1");
    assert_eq!(inst.get_f64(&f, 0).unwrap(), -3.25);
}

#[test]
fn class_attributes() {
    let mut inst = flowers();
    let species = Attribute::categorical("species", &[]);
    assert_eq!(inst.class_attributes(), vec![species.clone()]);
    assert!(inst.add_class_attribute(&Attribute::float("nope")).is_err());
    inst.remove_class_attribute(&species).unwrap();
    assert!(inst.class_attributes().is_empty());
    assert!(inst.remove_class_attribute(&species).is_err());
}

#[test]
fn map_over_rows_stops_early() {
    let inst = flowers();
    let specs = vec![spec(&inst, "sepal"), spec(&inst, "flag")];
    let mut seen = Vec::new();
    inst.map_over_rows(&specs[..], |vals, row| {
        seen.push((unpack_f64(&vals[0])?, vals[1][0], row));
        Ok(row < 2)
    }).unwrap();
    assert_eq!(seen, vec![(5.1, 1, 0), (7.0, 0, 1), (6.3, 1, 2)]);
    let failed = inst.map_over_rows(&specs[..], |_, _| Err(Error::InvalidArgument("stop".into())) );
    assert!(failed.is_err());
}

#[test]
fn display_truncates_rows() {
    let mut inst = flowers();
    inst.set_display_rows(2);
    let shown = format!("{}", inst);
    assert!(shown.contains("Instances with 6 row(s) 4 attribute(s)"));
    assert!(shown.contains("*\tspecies"));
    assert!(shown.contains("4 row(s) undisplayed"));
    assert!(!shown.contains("virginica 1"));
}

#[test]
fn push_row_checks_arity() {
    let mut inst = flowers();
    assert!(inst.push_row(&["1.0"]).is_err());
    assert_eq!(inst.rows(), 6);
}
