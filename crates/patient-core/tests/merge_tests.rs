//! Semántica del merge de parciales: shallow, gana el parcial más reciente.

use patient_core::{make_patient, merge_fields, Fields, RequiredKeys};
use serde_json::{json, Value};

fn fields(v: Value) -> Fields {
    match v {
        Value::Object(m) => m,
        _ => panic!("fixture must be an object"),
    }
}

#[test]
fn nested_objects_are_replaced_not_merged() {
    let acc = fields(json!({"x": 1, "y": {"z": 3}, "keep": "a"}));
    let partial = fields(json!({"x": 2, "y": {"w": 4}, "new": true}));

    let out = merge_fields(&acc, &partial);

    assert_eq!(Value::Object(out), json!({"x": 2, "y": {"w": 4}, "keep": "a", "new": true}));
}

#[test]
fn applicator_accumulates_with_the_same_merge() {
    let p = make_patient(RequiredKeys::new(["done"]), Value::Object);
    let partials = [json!({"y": {"z": 3}, "keep": "a"}), json!({"y": {"w": 4}}), json!({"done": true})];

    let mut expected = Fields::new();
    let mut out = p.apply(partials[0].clone()).expect("first");
    expected = merge_fields(&expected, &fields(partials[0].clone()));
    for partial in &partials[1..] {
        expected = merge_fields(&expected, &fields(partial.clone()));
        out = out.and_apply(partial.clone()).expect("next");
    }

    assert_eq!(out.complete(), Some(Value::Object(expected)));
}
