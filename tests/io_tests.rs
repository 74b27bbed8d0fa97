mod common;

use std::io::Cursor;
use serde_json::Value;
use colstat::*;
use colstat::io::*;
use colstat::ops::instances_equal;
use common::*;

#[test]
fn snapshot_round_trip() {
    let inst = flowers();
    let mut buf = Vec::new();
    serialize_dense(&inst, &mut buf).unwrap();
    assert_eq!(&buf[..4], b"CLST");
    let back = deserialize(Cursor::new(&buf[..])).unwrap();
    assert!(instances_equal(&inst, &back).unwrap());
    assert_eq!(back.class_attributes(), inst.class_attributes());
    assert!(back.is_frozen());
}

#[test]
fn snapshot_of_a_view() {
    let inst = flowers();
    let view = InstancesView::from_visible(&inst, vec![4, 1], vec![Attribute::float("sepal"), Attribute::binary("flag")]).unwrap();
    let mut buf = Vec::new();
    serialize(&view, &mut buf).unwrap();
    let back = deserialize(Cursor::new(&buf[..])).unwrap();
    assert_eq!(back.size(), (2, 2));
    assert_eq!(column(&back, "sepal"), vec!["6.40", "7.00"]);
    assert_eq!(column(&back, "flag"), vec!["1", "0"]);
}

#[test]
fn snapshot_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flowers.clst");
    save_to_path(&flowers(), &path).unwrap();
    let back = load_from_path(&path).unwrap();
    assert_eq!(column(&back, "species")[2], "virginica");
}

#[test]
fn corrupt_snapshots_are_rejected() {
    let mut buf = Vec::new();
    serialize_dense(&flowers(), &mut buf).unwrap();

    let mut bad_magic = buf.clone();
    bad_magic[0] = b'X';
    assert!(deserialize(Cursor::new(&bad_magic[..])).is_err());

    let mut bad_version = buf.clone();
    bad_version[4] = 9;
    assert!(deserialize(Cursor::new(&bad_version[..])).is_err());

    let truncated = &buf[..buf.len() - 3];
    match deserialize(Cursor::new(truncated)) {
        Err(Error::Format(msg)) => assert!(msg.contains("truncated")),
        other => panic!("unexpected {:?}", other.map(|i| i.size() ))
    }

    assert!(deserialize(Cursor::new(&buf[..7])).is_err());
}

#[test]
fn csv_export() {
    let inst = flowers();
    let view = InstancesView::from_rows(&inst, vec![0, 2]).unwrap();
    let mut out = Vec::new();
    write_csv(&view, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "sepal,petal,species,flag\n5.10,1.40,setosa,1\n6.30,6.00,virginica,1\n");
}

// Rewrites the JSON header of a snapshot, keeping the group pages as they are.
fn with_header<F : FnOnce(&mut Value)>(buf : &[u8], edit : F) -> Vec<u8> {
    let mut len = [0u8; 8];
    len.copy_from_slice(&buf[5..13]);
    let len = u64::from_le_bytes(len) as usize;
    let mut header : Value = serde_json::from_slice(&buf[13..13 + len]).unwrap();
    edit(&mut header);
    let header = serde_json::to_vec(&header).unwrap();
    let mut out = buf[..5].to_vec();
    out.extend_from_slice(&(header.len() as u64).to_le_bytes());
    out.extend_from_slice(&header[..]);
    out.extend_from_slice(&buf[13 + len..]);
    out
}

fn format_error(bytes : &[u8]) -> String {
    match deserialize(Cursor::new(bytes)) {
        Err(Error::Format(msg)) => msg,
        Err(other) => other.to_string(),
        Ok(inst) => panic!("snapshot with {:?} accepted", inst.size())
    }
}

#[test]
fn untouched_header_still_loads() {
    let mut buf = Vec::new();
    serialize_dense(&flowers(), &mut buf).unwrap();
    let same = with_header(&buf[..], |_| { });
    assert!(instances_equal(&flowers(), &deserialize(Cursor::new(&same[..])).unwrap()).unwrap());
}

#[test]
fn oversized_row_counts_are_rejected() {
    let mut buf = Vec::new();
    serialize_dense(&flowers(), &mut buf).unwrap();
    let huge = with_header(&buf[..], |h| {
        h["rows"] = Value::from(1u64 << 61);
        for g in h["groups"].as_array_mut().unwrap() {
            g["bytes"] = Value::from(0u64);
        }
    });
    assert!(format_error(&huge[..]).contains("too large"));
}

#[test]
fn header_layout_mismatches_are_rejected() {
    let mut buf = Vec::new();
    serialize_dense(&flowers(), &mut buf).unwrap();

    let wrong_bytes = with_header(&buf[..], |h| {
        let b = h["groups"][0]["bytes"].as_u64().unwrap();
        h["groups"][0]["bytes"] = Value::from(b + 8);
    });
    assert!(format_error(&wrong_bytes[..]).contains("declares"));

    let bad_order = with_header(&buf[..], |h| {
        h["order"][0] = serde_json::json!([9, 0]);
    });
    assert!(format_error(&bad_order[..]).contains("no attribute"));

    let repeated = with_header(&buf[..], |h| {
        let first = h["order"][0].clone();
        h["order"][1] = first;
    });
    assert!(deserialize(Cursor::new(&repeated[..])).is_err());

    let missing = with_header(&buf[..], |h| {
        h["order"].as_array_mut().unwrap().pop();
    });
    assert!(format_error(&missing[..]).contains("layout orders"));

    let bad_class = with_header(&buf[..], |h| {
        h["class_attributes"] = serde_json::json!([99]);
    });
    assert!(format_error(&bad_class[..]).contains("out of range"));
}
