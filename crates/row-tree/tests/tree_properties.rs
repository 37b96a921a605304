use proptest::prelude::*;
use row_tree::{PathEditor, PathSegment, ValueTree};

fn leaf() -> impl Strategy<Value = ValueTree> {
    prop_oneof![
        Just(ValueTree::Null),
        any::<bool>().prop_map(ValueTree::Bool),
        ".{0,8}".prop_map(ValueTree::String),
        any::<i8>().prop_map(ValueTree::Int8),
        any::<i16>().prop_map(ValueTree::Int16),
        any::<i32>().prop_map(ValueTree::Int32),
        any::<i64>().prop_map(ValueTree::Int64),
        any::<isize>().prop_map(ValueTree::Int),
        any::<u8>().prop_map(ValueTree::UInt8),
        any::<u16>().prop_map(ValueTree::UInt16),
        any::<u32>().prop_map(ValueTree::UInt32),
        any::<u64>().prop_map(ValueTree::UInt64),
        any::<usize>().prop_map(ValueTree::UInt),
        (-1.0e6f64..1.0e6).prop_map(ValueTree::Double),
        (-1.0e3f32..1.0e3).prop_map(ValueTree::Float),
    ]
}

fn segment() -> impl Strategy<Value = PathSegment> {
    prop_oneof![
        (0usize..4).prop_map(PathSegment::Index),
        "[a-c]{1,2}".prop_map(PathSegment::Key),
    ]
}

proptest! {
    #[test]
    fn set_get_roundtrip(root in leaf(), seg in segment(), value in leaf()) {
        let mut editor = PathEditor::new(root);
        editor.set(std::slice::from_ref(&seg), value.clone()).unwrap();
        // A scalar root becomes a one-entry container, so indexes land at 0.
        let landed = match seg {
            PathSegment::Index(_) => PathSegment::Index(0),
            key => key,
        };
        prop_assert_eq!(editor.get(&[landed]), Some(&value));
    }

    #[test]
    fn set_path_then_get(path in prop::collection::vec(segment(), 1..4), value in leaf()) {
        // Starting from an empty map every index lands at 0.
        let mut editor = PathEditor::default();
        editor.set_path(&path, value.clone());
        let landed: Vec<PathSegment> = path
            .iter()
            .map(|s| match s {
                PathSegment::Index(_) => PathSegment::Index(0),
                key => key.clone(),
            })
            .collect();
        prop_assert_eq!(editor.get(&landed), Some(&value));
    }

    #[test]
    fn array_growth_keeps_insertion_order(values in prop::collection::vec(leaf(), 0..16)) {
        let mut editor = PathEditor::new(ValueTree::from_iter([("a", ValueTree::array())]));
        for (k, v) in values.iter().enumerate() {
            editor.set_path(&[PathSegment::from("a"), PathSegment::from(k)], v.clone());
        }
        let items = editor.get(&[PathSegment::from("a")]).and_then(ValueTree::as_array).unwrap();
        prop_assert_eq!(items, &values);
    }

    #[test]
    fn integer_decode_matches_try_from(v in any::<i64>()) {
        let editor = PathEditor::new(ValueTree::from_iter([("n", ValueTree::Int64(v))]));
        let path = [PathSegment::from("n")];
        prop_assert_eq!(editor.decode_integer::<i16>(&path).ok(), i16::try_from(v).ok());
        prop_assert_eq!(editor.decode_integer::<u32>(&path).ok(), u32::try_from(v).ok());
        prop_assert_eq!(editor.decode_integer::<i64>(&path).ok(), Some(v));
    }
}
