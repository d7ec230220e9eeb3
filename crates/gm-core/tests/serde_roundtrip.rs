use gm_core::{Label, Position, Sentinel, VertexId};

#[test]
fn labels_use_untagged_json_forms() {
    let labels = vec![
        Label::Integer(3),
        Label::Sentinel(Sentinel::Center),
        Label::Color("#1f77b4".into()),
        Label::pair("a", "b"),
    ];
    let json = serde_json::to_string(&labels).expect("serialize");
    assert_eq!(json, r##"[3,"center","#1f77b4",["a","b"]]"##);

    let decoded: Vec<Label> = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, labels);
}

#[test]
fn positions_serialize_as_pairs() {
    let position = Position::new(12.5, -4.0);
    let json = serde_json::to_string(&position).expect("serialize");
    assert_eq!(json, "[12.5,-4.0]");
    let decoded: Position = serde_json::from_str("[1, 2]").expect("deserialize");
    assert_eq!(decoded, Position::new(1.0, 2.0));
}

#[test]
fn vertex_ids_are_transparent_strings() {
    let id = VertexId::new("Xy12Ab9Q");
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"Xy12Ab9Q\"");
}

#[test]
fn pair_labels_detect_shared_endpoints() {
    let ab = Label::pair("a", "b");
    let bc = Label::pair("b", "c");
    let cd = Label::pair("c", "d");
    assert!(ab.shares_endpoint(&bc));
    assert!(!ab.shares_endpoint(&cd));
    assert!(!ab.shares_endpoint(&Label::Integer(1)));
}

#[test]
fn midpoint_and_hit_test() {
    let a = Position::new(0.0, 0.0);
    let b = Position::new(10.0, 4.0);
    assert_eq!(a.midpoint(b), Position::new(5.0, 2.0));
    assert!(b.contains(Position::new(15.0, 9.0), 5.0));
    assert!(!b.contains(Position::new(15.1, 9.0), 5.0));
}
