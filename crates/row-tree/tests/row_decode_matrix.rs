use row_tree::{parse_path, DecodeError, EditError, PathEditor, PathSegment, ValueTree};
use serde_json::json;

fn p(pointer: &str) -> Vec<PathSegment> {
    parse_path(pointer).expect("valid pointer")
}

fn detail(err: &DecodeError) -> &str {
    err.detail().expect("type mismatch detail")
}

#[test]
fn set_then_get_preserves_variant() {
    let leaves = [
        ValueTree::Null,
        ValueTree::Bool(true),
        ValueTree::String("x".into()),
        ValueTree::Float(1.5),
        ValueTree::Double(-2.25),
        ValueTree::Int(-7),
        ValueTree::Int8(-8),
        ValueTree::Int16(16),
        ValueTree::Int32(32),
        ValueTree::Int64(64),
        ValueTree::UInt(7),
        ValueTree::UInt8(8),
        ValueTree::UInt16(16),
        ValueTree::UInt32(32),
        ValueTree::UInt64(64),
        ValueTree::from(vec![1i32, 2]),
        ValueTree::from(json!({"k": "v"})),
    ];
    for leaf in leaves {
        let mut editor = PathEditor::default();
        editor.set(&p("/col"), leaf.clone()).unwrap();
        assert_eq!(editor.get(&p("/col")), Some(&leaf));
    }
}

#[test]
fn growth_appends_in_order() {
    let mut editor = PathEditor::new(ValueTree::from(json!({"a": []})));
    for k in 0..5usize {
        editor.set_path(&[PathSegment::from("a"), PathSegment::from(k)], k as i64);
    }
    let expected = ValueTree::from(json!([0, 1, 2, 3, 4]));
    assert_eq!(editor.get(&p("/a")), Some(&expected));
}

#[test]
fn reset_key_overwrites() {
    let mut editor = PathEditor::default();
    editor.set(&p("/k"), 1i32).unwrap();
    editor.set(&p("/k"), 2i32).unwrap();
    assert_eq!(editor.root().as_map().unwrap().len(), 1);
    assert_eq!(editor.get(&p("/k")), Some(&ValueTree::Int32(2)));
}

#[test]
fn absence_is_nil_but_not_null() {
    let editor = PathEditor::default();
    assert!(editor.decode_nil(&p("/missing")));
    assert_eq!(editor.get(&p("/missing")), None);
}

#[test]
fn numeric_narrowing() {
    let row = ValueTree::from_iter([
        ("big", ValueTree::Int64(300)),
        ("small", ValueTree::Int32(5)),
        ("neg", ValueTree::Int8(-1)),
    ]);
    let editor = PathEditor::new(row);

    let err = editor.decode_integer::<u8>(&p("/big")).unwrap_err();
    assert!(detail(&err).starts_with("Value too large"));

    assert_eq!(editor.decode_integer::<i64>(&p("/small")).unwrap(), 5);

    let err = editor.decode_integer::<u8>(&p("/neg")).unwrap_err();
    assert!(detail(&err).starts_with("Value too small"));
}

#[test]
fn floating_widening() {
    let row = ValueTree::from_iter([("i", ValueTree::Int(2)), ("d", ValueTree::Double(3.25))]);
    let editor = PathEditor::new(row);
    assert_eq!(editor.decode_float::<f64>(&p("/i")).unwrap(), 2.0);
    assert_eq!(editor.decode_float::<f32>(&p("/d")).unwrap(), 3.25);
}

#[test]
fn string_node_as_bool_mismatches() {
    let editor = PathEditor::new(ValueTree::from(json!({"s": "x"})));
    let err = editor.decode_bool(&p("/s")).unwrap_err();
    assert!(matches!(err, DecodeError::TypeMismatch { .. }));
    assert_eq!(err.to_string(), "type mismatch: expected bool at '/s'");
    assert_eq!(editor.decode_string(&p("/s")).unwrap(), "x");
}

#[test]
fn age_scenarios() {
    let editor = PathEditor::new(ValueTree::from_iter([("age", ValueTree::Int(30))]));
    assert_eq!(editor.decode_integer::<i16>(&p("/age")).unwrap(), 30);

    let editor = PathEditor::new(ValueTree::from_iter([("age", ValueTree::Int(70000))]));
    let err = editor.decode_integer::<i16>(&p("/age")).unwrap_err();
    assert!(detail(&err).starts_with("Value too large"));
    assert_eq!(
        err.to_string(),
        format!("type mismatch: expected i16 at '/age': {}", detail(&err))
    );
}

#[test]
fn set_contract_is_single_segment() {
    let mut editor = PathEditor::default();
    let err = editor.set(&p("/a/b"), 1i32).unwrap_err();
    assert_eq!(err, EditError::UnsupportedDepth { depth: 2 });

    let err = editor.set(&p(""), 1i32).unwrap_err();
    assert_eq!(err, EditError::UnsupportedDepth { depth: 0 });
}

#[test]
fn deep_decode_through_pointer_paths() {
    let row = json!({
        "rows": [
            {"id": 1, "tags": ["a", "b"]},
            {"id": 2, "tags": []}
        ]
    });
    let editor = PathEditor::new(ValueTree::from(row));
    assert_eq!(editor.decode_integer::<u32>(&p("/rows/1/id")).unwrap(), 2);
    assert_eq!(editor.decode_string(&p("/rows/0/tags/1")).unwrap(), "b");
    let tags: Vec<String> = editor.decode(&p("/rows/0/tags")).unwrap();
    assert_eq!(tags, ["a", "b"]);
    assert!(matches!(
        editor.decode_string(&p("/rows/1/tags/0")),
        Err(DecodeError::ValueNotFound { .. })
    ));
}
