// End-to-end checks of the canvas and page markup

use lathe_sketch::{
    image::{Elem, Paint, SvgOpts},
    Canvas, Error, Page,
};

#[test]
fn test_reference_canvas_markup() {
    let svg = Canvas::new(500.0, 500.0)
        .expect("500x500 is a valid canvas")
        .compose()
        .svg_string(&SvgOpts::default());

    assert!(svg.contains("<svg"), "Canvas should render an <svg> element: {}", svg);
    assert!(!svg.contains("<div"), "Only the page adds a container");
    for attr in [
        r#"baseProfile="full""#,
        r#"version="1.1""#,
        r#"width="500""#,
        r#"height="500""#,
        r#"x1="250""#,
        r#"x2="250""#,
        r#"y1="0""#,
        r#"y2="500""#,
        r#"stroke="black""#,
        r#"fill="none""#,
        r#"stroke="green""#,
        r#"width="237.5""#,
        r#"height="25.0""#,
        r#"x="131.25""#,
        r#"y="425.0""#,
    ] {
        assert!(svg.contains(attr), "Canvas markup should contain {}: {}", attr, svg);
    }
}

#[test]
fn test_reference_canvas_fragment_is_exact() {
    let svg = Canvas::new(500.0, 500.0)
        .unwrap()
        .compose()
        .svg_string(&SvgOpts::default());
    let expected = concat!(
        "<svg baseProfile=\"full\" height=\"500\" version=\"1.1\" width=\"500\">\n",
        "\t<line stroke=\"black\" x1=\"250\" x2=\"250\" y1=\"0\" y2=\"500\" />\n",
        "\t<rect fill=\"none\" height=\"25.0\" stroke=\"green\" width=\"237.5\" x=\"131.25\" y=\"425.0\" />\n",
        "</svg>",
    );
    assert_eq!(svg, expected, "Embeddable canvas markup should be exactly the <svg> element");
}

#[test]
fn test_unusual_spellings_are_normalized() {
    let svg = Canvas::new("-0", "5.")
        .unwrap()
        .compose()
        .svg_string(&SvgOpts::default());
    assert!(svg.contains(r#"width="0""#), "Negative zero should be written as 0: {}", svg);
    assert!(svg.contains(r#"height="5""#), "A trailing dot isn't a valid SVG number: {}", svg);
    assert!(svg.contains(r#"x1="0""#), "{}", svg);
}

#[test]
fn test_rect_does_not_scale_with_canvas() {
    let small = Canvas::new(100.0, 100.0).unwrap().compose();
    let large = Canvas::new(1000.0, 800.0).unwrap().compose();

    assert_eq!(small.elements()[1], large.elements()[1], "The rectangle should never scale");
    assert_eq!(small.elements()[1], Elem::Rect(Canvas::base_rect()));

    let svg = small.svg_string(&SvgOpts::default());
    assert!(svg.contains(r#"x1="50""#), "Centreline should follow the width: {}", svg);
    assert!(svg.contains(r#"y2="100""#), "Centreline should span the height: {}", svg);
    assert!(svg.contains(r#"x="131.25""#), "Rectangle should stay put: {}", svg);
}

#[test]
fn test_line_is_painted_before_rect() {
    for &(w, h) in &[(500.0, 500.0), (100.0, 100.0), (42.0, 7.0)] {
        let image = Canvas::new(w, h).unwrap().compose();
        assert_eq!(image.elements().len(), 2);
        match &image.elements()[0] {
            Elem::Line(line) => {
                assert_eq!(line.stroke, Paint::BLACK);
                assert_eq!(line.x1, w / 2.0);
            }
            other => panic!("First element should be the centreline, got {:?}", other),
        }
        assert!(matches!(image.elements()[1], Elem::Rect(_)));
    }
}

#[test]
fn test_invalid_dimensions_are_reported() {
    let err = Canvas::new("", "500").expect_err("empty width should be rejected");
    assert!(matches!(err, Error::InvalidDimension { name: "width", .. }));
    assert!(err.to_string().contains("width"), "Error should name the bad argument: {}", err);

    assert!(Canvas::new(500.0, "NaN").is_err());
    assert!(Canvas::new(500.0, -0.5).is_err());
}

#[test]
fn test_page_is_byte_identical_across_renders() {
    let first = Page.markup();
    let second = Page.markup();
    assert_eq!(first, second, "Rendering the page twice should give identical markup");
    assert!(first.contains("<div"), "The canvas should be embedded in a page container");
    assert!(!first.contains("xmlns"), "Embedded SVG doesn't need a namespace");
}
