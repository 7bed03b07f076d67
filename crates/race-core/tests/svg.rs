// File: crates/race-core/tests/svg.rs
// Purpose: Validate the append-only SVG builder and its serialization.

use race_core::SvgDocument;

#[test]
fn elements_serialize_in_append_order() {
    let mut doc = SvgDocument::new(100, 50);
    doc.line(0.0, 10.0, 100.0, 10.0, "#eee", 1.0);
    doc.text(5.0, 12.0, "tick", 12.0, "normal", "start", "#000");
    doc.polyline(&[(0.0, 40.0), (50.0, 20.0), (100.0, 30.0)], "#333", 2.0);
    assert_eq!(doc.element_count(), 3);

    let markup = doc.build();
    let line = markup.find("<line").unwrap();
    let text = markup.find("<text").unwrap();
    let path = markup.find("<path").unwrap();
    assert!(line < text && text < path, "elements reordered");
}

#[test]
fn polyline_opens_with_move_then_lines() {
    let mut doc = SvgDocument::new(10, 10);
    doc.polyline(&[(1.0, 2.0), (3.0, 4.0), (5.0, 6.0)], "#333", 2.0);
    let markup = doc.build();
    assert!(markup.contains(r#"d="M 1.0 2.0 L 3.0 4.0 L 5.0 6.0""#), "bad path data: {markup}");
    assert!(markup.contains(r#"fill="none""#));
}

#[test]
fn document_frame_carries_canvas_size() {
    let doc = SvgDocument::new(1200, 800);
    let markup = doc.build();
    assert!(markup.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="1200" height="800""#));
    assert!(markup.trim_end().ends_with("</svg>"));
}
