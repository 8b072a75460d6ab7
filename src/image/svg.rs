//! Code to convert an [`Image`] to an SVG string

use itertools::Itertools;
use simple_xml_builder::XMLElement;

use super::{Elem, Image, Paint};

/// Options controlling how an [`Image`] is written as SVG
#[derive(Debug, Clone, Default)]
pub struct SvgOpts {
    /// Add the `xmlns` attribute, so that the output is a valid file on its own (rather than a
    /// fragment to be embedded in a page)
    pub standalone: bool,
}

impl SvgOpts {
    pub fn standalone() -> Self {
        Self { standalone: true }
    }
}

/// Generate an SVG root element for an [`Image`].  Attributes are always written in alphabetical
/// order, so the output for a given `Image` is byte-for-byte stable.
pub fn gen_svg(image: &Image, opts: &SvgOpts) -> XMLElement {
    let mut root = XMLElement::new("svg");
    root.add_attribute("baseProfile", "full");
    root.add_attribute("height", &image.height().to_string());
    root.add_attribute("version", "1.1");
    root.add_attribute("width", &image.width().to_string());
    if opts.standalone {
        root.add_attribute("xmlns", "http://www.w3.org/2000/svg");
    }
    // Translate all `Elem`s to SVG's `XMLElement`s, keeping paint order
    for e in image.elements() {
        root.add_child(gen_svg_elem(e));
    }
    root
}

/// Serializes an element for embedding in an HTML page, i.e. without the `<?xml ...?>`
/// declaration that [`XMLElement`]'s `Display` writes first
pub fn fragment_string(elem: &XMLElement) -> String {
    let doc = elem.to_string();
    let body = match doc.strip_prefix("<?xml") {
        Some(rest) => rest.split_once("?>").map_or(rest, |(_decl, body)| body),
        None => doc.as_str(),
    };
    body.trim().to_owned()
}

/// Creates an [`XMLElement`] for a given [`Elem`]
fn gen_svg_elem(elem: &Elem) -> XMLElement {
    match elem {
        Elem::Line(line) => {
            let mut xml_elem = XMLElement::new("line");
            add_paint_attr(&mut xml_elem, "stroke", &line.stroke);
            xml_elem.add_attribute("x1", &line.x1.to_string());
            xml_elem.add_attribute("x2", &line.x2.to_string());
            xml_elem.add_attribute("y1", &line.y1.to_string());
            xml_elem.add_attribute("y2", &line.y2.to_string());
            xml_elem
        }
        Elem::Rect(rect) => {
            let mut xml_elem = XMLElement::new("rect");
            add_paint_attr(&mut xml_elem, "fill", &rect.fill);
            xml_elem.add_attribute("height", &rect.height.to_string());
            add_paint_attr(&mut xml_elem, "stroke", &rect.stroke);
            xml_elem.add_attribute("width", &rect.width.to_string());
            xml_elem.add_attribute("x", &rect.x.to_string());
            xml_elem.add_attribute("y", &rect.y.to_string());
            xml_elem
        }
        Elem::Circle(circle) => {
            let mut xml_elem = XMLElement::new("circle");
            xml_elem.add_attribute("cx", &circle.cx.to_string());
            xml_elem.add_attribute("cy", &circle.cy.to_string());
            add_paint_attr(&mut xml_elem, "fill", &circle.fill);
            xml_elem.add_attribute("r", &circle.r.to_string());
            add_paint_attr(&mut xml_elem, "stroke", &circle.stroke);
            xml_elem
        }
        Elem::Polygon(polygon) => {
            // A whitespace-delimited list of `x,y` pairs.  So the unit square at the origin would
            // have `coord_string = "0,0 0,1 1,1 1,0"`
            let coord_string = polygon
                .points()
                .iter()
                .map(|vert| format!("{},{}", vert.x, vert.y))
                .join(" ");
            let mut xml_elem = XMLElement::new("polygon");
            add_paint_attr(&mut xml_elem, "fill", &polygon.fill);
            xml_elem.add_attribute("points", &coord_string);
            add_paint_attr(&mut xml_elem, "stroke", &polygon.stroke);
            xml_elem
        }
    }
}

/// `Paint::None` is still written out, since SVG would otherwise fill shapes black
fn add_paint_attr(xml_elem: &mut XMLElement, name: &str, paint: &Paint) {
    xml_elem.add_attribute(name, &paint.to_string());
}
