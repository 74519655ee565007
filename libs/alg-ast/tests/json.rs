use alg_ast::{print, Base, Conjugate, Face, Move, Node, Span, WideStyle};

#[test]
fn json_interchange_preserves_tree() {
    let alg = vec![
        Node::from(Conjugate {
            a: vec![Move::new(Base::Wide(Face::R, WideStyle::Lowercase), 1).with_end_layer(3).into()],
            b: vec![Node::comment_long("/* x */"), Node::Newline],
            amount: -1,
        }),
        Node::Pause(alg_ast::Pause { location: Some(Span::new(4, 5)) }),
    ];

    let json = serde_json::to_string(&alg).unwrap();
    let back: Vec<Node> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, alg);
}

#[test]
fn json_from_web_shape() {
    let json = r#"[
        {"type": "move", "base": "Rw", "amount": 2, "startLayer": 2, "endLayer": 3},
        {"type": "newline"},
        {"type": "timestamp", "time": 1.5}
    ]"#;
    let alg: Vec<Node> = serde_json::from_str(json).unwrap();
    assert_eq!(print(&alg), "2-3Rw2\n@1.5s");
}
