use super::*;

fn line(x1: i32, y1: i32, x2: i32, y2: i32) -> DrawCommand {
    DrawCommand::Line { from: Point::new(x1, y1), to: Point::new(x2, y2) }
}

#[test]
fn seeded_rendering_is_reproducible() {
    let commands = vec![
        line(0, 0, 3, 0),
        DrawCommand::Arrowhead { anchor: Point::new(3, 0), dir: Dir::Right },
        DrawCommand::Dot { center: Point::new(0, 0) },
    ];
    let first = SvgRenderer::with_seed(20.0, 7).render_document(&commands);
    let second = SvgRenderer::with_seed(20.0, 7).render_document(&commands);
    assert_eq!(first, second);

    let other = SvgRenderer::with_seed(20.0, 8).render_document(&commands);
    assert_ne!(first, other);
}

#[test]
fn document_wraps_the_svg_in_an_html_page() {
    let doc = SvgRenderer::with_seed(20.0, 1).render_document(&[line(0, 0, 3, 0)]);
    assert!(doc.starts_with("<html>\n"));
    assert!(doc.contains("Gloria+Hallelujah"));
    assert!(doc.contains("<svg width=\"100\" height=\"40\">"));
    assert!(doc.contains(".line {"));
    assert!(doc.ends_with("</svg>\n\n</body>\n</html>\n"));
}

#[test]
fn line_renders_as_one_cubic_from_center_to_center() {
    let out = SvgRenderer::with_seed(20.0, 1).render_commands(&[line(0, 0, 3, 0)]);
    assert!(out.starts_with("<path d=\"M10,10 C"));
    assert!(out.contains("70,10\" class=\"line\"/>"));
}

#[test]
fn zero_length_line_degrades_to_a_straight_segment() {
    let out = SvgRenderer::with_seed(20.0, 1).render_commands(&[line(2, 2, 2, 2)]);
    assert_eq!(out, "<path d=\"M50,50 L50,50\" class=\"line\"/>\n");
}

#[test]
fn arrowhead_renders_two_strokes() {
    let out = SvgRenderer::with_seed(20.0, 1)
        .render_commands(&[DrawCommand::Arrowhead { anchor: Point::new(3, 0), dir: Dir::Right }]);
    assert_eq!(out.matches("class=\"line\"").count(), 2);
    // Both strokes start at the tip.
    assert_eq!(out.matches("M70,10 ").count(), 2);
}

#[test]
fn dot_renders_one_closed_filled_path() {
    let out = SvgRenderer::with_seed(20.0, 1)
        .render_commands(&[DrawCommand::Dot { center: Point::new(1, 1) }]);
    assert_eq!(out.matches("class=\"dot\"").count(), 1);
    assert_eq!(out.matches('C').count(), 4);
}

#[test]
fn polygon_renders_a_straight_closed_fill() {
    let points =
        vec![Point::new(0, 0), Point::new(3, 0), Point::new(3, 2), Point::new(0, 2)];
    let out = SvgRenderer::with_seed(20.0, 1)
        .render_commands(&[DrawCommand::FilledPolygon { points }]);
    assert_eq!(out, "<path d=\"M10,10 L70,10 L70,50 L10,50 Z\" class=\"fill\"/>\n");
}

#[test]
fn empty_polygon_renders_nothing() {
    let out = SvgRenderer::with_seed(20.0, 1)
        .render_commands(&[DrawCommand::FilledPolygon { points: vec![] }]);
    assert_eq!(out, "");
}

#[test]
fn text_is_xml_escaped() {
    let out = SvgRenderer::with_seed(20.0, 1).render_commands(&[DrawCommand::TextLabel {
        anchor: Point::new(0, 0),
        text: "a<b&c>d".into(),
    }]);
    assert!(out.contains(">a&lt;b&amp;c&gt;d</text>"));
}

#[test]
fn canvas_grows_with_label_width() {
    let commands = vec![DrawCommand::TextLabel { anchor: Point::new(0, 0), text: "wide".into() }];
    let doc = SvgRenderer::with_seed(20.0, 1).render_document(&commands);
    // Anchor x plus four characters plus the margin, at scale 20.
    assert!(doc.contains("<svg width=\"120\" height=\"40\">"));
}

#[test]
fn scale_is_applied_uniformly() {
    let out = SvgRenderer::with_seed(10.0, 1).render_commands(&[line(1, 1, 1, 1)]);
    assert_eq!(out, "<path d=\"M15,15 L15,15\" class=\"line\"/>\n");
}
