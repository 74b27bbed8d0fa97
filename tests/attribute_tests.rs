use colstat::*;
use colstat::attribute::*;
use colstat::attribute::pack::*;
use colstat::group::*;

#[test]
fn float_round_trips_through_text() {
    let mut a = Attribute::Float(FloatAttribute::with_precision("x", 3));
    let bytes = a.sys_val_from_str("2.5").unwrap();
    assert_eq!(bytes.len(), 8);
    assert_eq!(unpack_f64(&bytes).unwrap(), 2.5);
    assert_eq!(a.str_from_sys_val(&bytes).unwrap(), "2.500");
    assert!(a.sys_val_from_str("two").is_err());
}

#[test]
fn categorical_grows_dictionary() {
    let mut a = Attribute::categorical("color", &["red"]);
    let green = a.sys_val_from_str("green").unwrap();
    let red = a.sys_val_from_str("red").unwrap();
    assert_eq!(unpack_u64(&red).unwrap(), 0);
    assert_eq!(unpack_u64(&green).unwrap(), 1);
    assert_eq!(a.str_from_sys_val(&green).unwrap(), "green");
    assert!(a.str_from_sys_val(&pack_u64(7)).is_err());
    match &a {
        Attribute::Categorical(c) => assert_eq!(c.values, vec!["red".to_string(), "green".to_string()]),
        _ => panic!("expected categorical")
    }
}

#[test]
fn binary_accepts_flags_only() {
    let mut a = Attribute::binary("b");
    assert_eq!(a.sys_val_from_str("true").unwrap(), vec![1]);
    assert_eq!(a.sys_val_from_str("0").unwrap(), vec![0]);
    assert!(a.sys_val_from_str("maybe").is_err());
    assert_eq!(a.str_from_sys_val(&[5]).unwrap(), "1");
    assert!(a.str_from_sys_val(&[0, 0]).is_err());
}

#[test]
fn identity_ignores_dictionary() {
    let a = Attribute::categorical("c", &["x"]);
    let b = Attribute::categorical("c", &["x", "y"]);
    assert_eq!(a, b);
    assert!(!a.strictly_equal(&b));
    assert_ne!(Attribute::float("c"), a);
    assert!(Attribute::float("p").compatible(&Attribute::float("q")));
    assert!(!Attribute::float("p").compatible(&Attribute::binary("p")));
}

#[test]
fn fixed_group_layout() {
    let mut g = AttributeGroup::new("FLOAT", 8);
    g.add_attribute(Attribute::float("a")).unwrap();
    g.add_attribute(Attribute::float("b")).unwrap();
    assert!(g.add_attribute(Attribute::binary("c")).is_err());
    g.resize(3);
    assert_eq!(g.row_size(), 16);
    assert_eq!(g.storage().len(), 48);
    g.set(1, 2, &pack_f64(9.0)).unwrap();
    assert_eq!(&g.storage()[40..48], &pack_f64(9.0)[..]);
    assert_eq!(unpack_f64(&g.get(1, 2)).unwrap(), 9.0);
    assert!(g.set(0, 0, &[1, 2]).is_err());
    assert!(g.add_attribute(Attribute::float("late")).is_err());
}

#[test]
fn binary_group_packs_bits() {
    let mut g = AttributeGroup::new("BIN", 0);
    for i in 0..9 {
        g.add_attribute(Attribute::binary(&format!("b{}", i))).unwrap();
    }
    assert!(g.add_attribute(Attribute::float("f")).is_err());
    g.resize(2);
    assert_eq!(g.row_size(), 2);
    g.set(0, 1, &[1]).unwrap();
    g.set(8, 1, &[1]).unwrap();
    g.set(3, 0, &[1]).unwrap();
    assert_eq!(g.storage(), &[0b0000_1000, 0, 0b0000_0001, 0b0000_0001][..]);
    assert_eq!(&g.get(8, 1)[..], &[1][..]);
    g.set(8, 1, &[0]).unwrap();
    assert_eq!(&g.get(8, 1)[..], &[0][..]);
    assert_eq!(&g.get(0, 1)[..], &[1][..]);
}

#[test]
fn resize_keeps_existing_rows() {
    let mut g = AttributeGroup::new("CAT", 8);
    g.add_attribute(Attribute::categorical("c", &["a", "b"])).unwrap();
    g.resize(1);
    g.set(0, 0, &pack_u64(1)).unwrap();
    g.resize(4);
    assert_eq!(unpack_u64(&g.get(0, 0)).unwrap(), 1);
    assert_eq!(unpack_u64(&g.get(0, 3)).unwrap(), 0);
    assert!(g.set_storage(vec![0; 3]).is_err());
}
