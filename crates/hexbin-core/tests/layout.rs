// File: crates/hexbin-core/tests/layout.rs
// Purpose: Layout phase: inner drawing area from the root's declared size.

use hexbin_core::{ChartError, Element, Insets, Layout};

#[test]
fn default_canvas_gives_900_by_450() {
    let l = Layout::compute(960.0, 500.0, Insets::default());
    assert_eq!(l.width, 900.0);
    assert_eq!(l.height, 450.0);
    assert_eq!(l.transform(), "translate(40, 20)");
}

#[test]
fn reads_declared_size_from_root() {
    let mut root = Element::new("svg");
    root.attr("width", 400).attr("height", 300);
    let l = Layout::from_root(&root, Insets::new(10, 10, 10, 10)).expect("layout");
    assert_eq!((l.width, l.height), (380.0, 280.0));
    let e = l.extent();
    assert_eq!((e.x0, e.y0, e.x1, e.y1), (0.0, 0.0, 380.0, 280.0));
}

#[test]
fn missing_or_bad_size_is_an_error() {
    let root = Element::new("svg");
    match Layout::from_root(&root, Insets::default()) {
        Err(ChartError::Attribute { name }) => assert_eq!(name, "width"),
        other => panic!("expected attribute error, got {other:?}"),
    }

    let mut root = Element::new("svg");
    root.attr("width", 400).attr("height", "auto");
    assert!(matches!(
        Layout::from_root(&root, Insets::default()),
        Err(ChartError::Attribute { ref name }) if name == "height"
    ));
}

#[test]
fn append_group_translates_by_margins() {
    let mut root = Element::new("svg");
    let l = Layout::compute(960.0, 500.0, Insets::default());
    l.append_group(&mut root).append("rect");
    let g = root.select("g").expect("group");
    assert_eq!(g.get_attr("transform"), Some("translate(40, 20)"));
    assert_eq!(g.children().len(), 1);
}
